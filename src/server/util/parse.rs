use sea_orm::DbErr;

/// Parses a Discord snowflake stored as a decimal string.
///
/// # Arguments
/// - `value` - The stored snowflake
/// - `field` - Column name reported in the error
///
/// # Returns
/// - `Ok(u64)` - Parsed snowflake
/// - `Err(DbErr::Custom)` - The stored value is not a valid `u64`
pub fn parse_snowflake(value: &str, field: &str) -> Result<u64, DbErr> {
    value
        .parse::<u64>()
        .map_err(|e| DbErr::Custom(format!("Failed to parse {}: {}", field, e)))
}

/// Parses an optional stored snowflake.
pub fn parse_optional_snowflake(value: Option<&str>, field: &str) -> Result<Option<u64>, DbErr> {
    value.map(|value| parse_snowflake(value, field)).transpose()
}
