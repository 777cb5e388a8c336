use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_APP_URL: &str = "https://community.trypaladin.com";
const DEFAULT_PORT: u16 = 5000;
const PRODUCTION_ENV: &str = "prod";

pub struct Config {
    pub database_url: String,
    pub discord_bot_token: String,

    pub r2_s3_endpoint: String,
    pub r2_access_key_id: String,
    pub r2_secret_access_key: String,
    pub r2_bucket_name: String,

    pub app_url: String,
    pub port: u16,
    pub is_production: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let port = match std::env::var("PORT") {
            Ok(value) => value.parse().map_err(|_| ConfigError::InvalidEnvVar {
                name: "PORT".to_string(),
                value,
            })?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            discord_bot_token: required("DISCORD_BOT_TOKEN")?,
            r2_s3_endpoint: required("R2_S3_ENDPOINT")?,
            r2_access_key_id: required("R2_ACCESS_KEY_ID")?,
            r2_secret_access_key: required("R2_SECRET_ACCESS_KEY")?,
            r2_bucket_name: required("R2_BUCKET_NAME")?,
            app_url: std::env::var("APP_URL").unwrap_or_else(|_| DEFAULT_APP_URL.to_string()),
            port,
            is_production: std::env::var("ENV").is_ok_and(|env| env == PRODUCTION_ENV),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}
