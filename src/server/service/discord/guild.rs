use crate::server::{
    data::{community::CommunityRepository, discord::DiscordGuildRepository},
    error::{sync::SyncError, AppError},
    model::{community::CommunityParam, discord::GuildSnapshot},
    service::discord::SyncContext,
};

/// Result of a `/connect` attempt.
///
/// Rejections are expected user mistakes and are replied to as-is, not reported as errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConnectOutcome {
    Linked(CommunityParam),
    UnknownDomain(String),
    InvalidSecretKey,
    AlreadyLinked,
}

impl ConnectOutcome {
    /// Reply shown to the user for a rejected attempt.
    pub fn rejection(&self) -> Option<String> {
        match self {
            Self::Linked(_) => None,
            Self::UnknownDomain(domain) => Some(format!("Community not found with domain {}", domain)),
            Self::InvalidSecretKey => Some("Invalid secret key".to_string()),
            Self::AlreadyLinked => Some(
                "This community is already linked to a Discord server. If you would like to link it to a different Discord server, please unlink it first in the Paladin settings."
                    .to_string(),
            ),
        }
    }
}

pub struct DiscordGuildService<'a> {
    ctx: &'a SyncContext,
}

impl<'a> DiscordGuildService<'a> {
    pub fn new(ctx: &'a SyncContext) -> Self {
        Self { ctx }
    }

    /// Gets the community a guild is linked to.
    ///
    /// # Returns
    /// - `Ok(CommunityParam)` - The linked community
    /// - `Err(AppError::SyncErr(CommunityNotLinked))` - The guild has not been connected
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn require_linked(&self, guild_id: u64) -> Result<CommunityParam, AppError> {
        let Some(guild) = DiscordGuildRepository::new(&self.ctx.db)
            .find_by_id(guild_id)
            .await?
        else {
            return Err(SyncError::CommunityNotLinked.into());
        };

        CommunityRepository::new(&self.ctx.db)
            .find_by_id(guild.community_id)
            .await?
            .ok_or_else(|| SyncError::CommunityNotLinked.into())
    }

    /// Links a guild to the community owning `domain`.
    ///
    /// The secret key shown in the community settings is `simple_hash` of the community
    /// id; it proves the caller administers the community. A community links at most one
    /// guild. The full sync that follows a successful link is run by the caller.
    pub async fn connect(
        &self,
        domain: &str,
        secret_key: &str,
        guild: &GuildSnapshot,
    ) -> Result<ConnectOutcome, AppError> {
        let Some(community) = CommunityRepository::new(&self.ctx.db)
            .find_by_domain(domain)
            .await?
        else {
            return Ok(ConnectOutcome::UnknownDomain(domain.to_string()));
        };

        if simple_hash(&community.id.to_string()) != secret_key {
            return Ok(ConnectOutcome::InvalidSecretKey);
        }

        let guild_repo = DiscordGuildRepository::new(&self.ctx.db);
        if guild_repo.find_by_community_id(community.id).await?.is_some() {
            return Ok(ConnectOutcome::AlreadyLinked);
        }

        guild_repo.create(guild, community.id).await?;

        tracing::info!(
            "Linked guild {} ({}) to community {}",
            guild.name,
            guild.guild_id,
            community.domain
        );

        Ok(ConnectOutcome::Linked(community))
    }

    /// Refreshes the name and icon of a linked guild.
    pub async fn update_guild(&self, guild: &GuildSnapshot) -> Result<(), AppError> {
        self.require_linked(guild.guild_id).await?;

        DiscordGuildRepository::new(&self.ctx.db).update(guild).await?;

        Ok(())
    }

    /// Unlinks the community's guild, deleting every mirrored channel, thread and post.
    ///
    /// # Returns
    /// - `Ok(true)` - The guild was unlinked
    /// - `Ok(false)` - The community had no guild
    pub async fn unlink(&self, community_id: i32) -> Result<bool, AppError> {
        let unlinked = DiscordGuildRepository::new(&self.ctx.db)
            .delete_by_community_id(community_id)
            .await?;

        if unlinked {
            tracing::info!("Unlinked Discord guild from community {}", community_id);
        }

        Ok(unlinked)
    }
}

/// 32-bit string hash rendered as lowercase hex.
///
/// `hash = hash * 31 + unit` over UTF-16 code units with wrapping arithmetic; the
/// absolute value is printed. Must stay stable: communities copy the result into
/// `/connect` as their secret key.
pub fn simple_hash(input: &str) -> String {
    let hash = input.encode_utf16().fold(0i32, |hash, unit| {
        (hash << 5).wrapping_sub(hash).wrapping_add(i32::from(unit))
    });

    format!("{:x}", hash.unsigned_abs())
}
