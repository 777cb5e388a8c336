use std::{collections::HashMap, sync::LazyLock};

use regex::{Captures, Regex};
use sea_orm::ConnectionTrait;

use crate::server::data::discord::DiscordUserRepository;

static USER_MENTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<@!?([0-9]+)>").expect("Invalid user mention regex pattern"));

/// Rewrites Discord user mentions into readable `@username` text.
pub struct MentionNormalizer<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MentionNormalizer<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Replaces `<@id>` and `<@!id>` with `@username` from mirrored users.
    ///
    /// Ids without a mirrored user become `@id`. A failed lookup leaves the content
    /// untouched; mirroring the message matters more than pretty mentions.
    pub async fn normalize(&self, content: &str) -> String {
        if !content.contains("<@") {
            return content.to_string();
        }

        let user_ids = mentioned_user_ids(content);
        if user_ids.is_empty() {
            return content.to_string();
        }

        let users = match DiscordUserRepository::new(self.db)
            .find_by_ids(&user_ids)
            .await
        {
            Ok(users) => users,
            Err(e) => {
                tracing::warn!("Failed to resolve mentions, keeping raw content: {}", e);
                return content.to_string();
            }
        };

        let usernames: HashMap<u64, String> = users
            .into_iter()
            .map(|user| (user.user_id, user.username))
            .collect();

        for user_id in unresolved_mentions(&user_ids, &usernames) {
            tracing::warn!("Mentioned Discord user {} is not mirrored", user_id);
        }

        replace_mentions(content, &usernames)
    }
}

/// Mentioned ids with no mirrored username.
pub fn unresolved_mentions(user_ids: &[u64], usernames: &HashMap<u64, String>) -> Vec<u64> {
    user_ids
        .iter()
        .copied()
        .filter(|id| !usernames.contains_key(id))
        .collect()
}

/// Distinct user ids mentioned in `content`, in order of first appearance.
pub fn mentioned_user_ids(content: &str) -> Vec<u64> {
    let mut ids = Vec::new();

    for captures in USER_MENTION.captures_iter(content) {
        if let Ok(id) = captures[1].parse::<u64>() {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
    }

    ids
}

pub fn replace_mentions(content: &str, usernames: &HashMap<u64, String>) -> String {
    USER_MENTION
        .replace_all(content, |captures: &Captures| {
            let raw = &captures[1];
            let username = raw
                .parse::<u64>()
                .ok()
                .and_then(|id| usernames.get(&id));

            match username {
                Some(username) => format!("@{}", username),
                None => format!("@{}", raw),
            }
        })
        .into_owned()
}
