use crate::server::{
    data::discord::DiscordUserRepository,
    error::AppError,
    model::discord::DiscordUserParam,
    service::discord::{DiscordGuildService, SyncContext},
};

pub struct DiscordUserService<'a> {
    ctx: &'a SyncContext,
}

impl<'a> DiscordUserService<'a> {
    pub fn new(ctx: &'a SyncContext) -> Self {
        Self { ctx }
    }

    pub async fn upsert_user(&self, user: &DiscordUserParam) -> Result<(), AppError> {
        DiscordUserRepository::new(&self.ctx.db).upsert(user).await?;

        Ok(())
    }

    /// Mirrors a member who joined or changed in a linked guild.
    pub async fn upsert_member(&self, guild_id: u64, user: &DiscordUserParam) -> Result<(), AppError> {
        DiscordGuildService::new(self.ctx)
            .require_linked(guild_id)
            .await?;

        self.upsert_user(user).await
    }
}
