use super::*;

mod list_for_community;
mod upsert_forum_channel;

fn settings(should_sync: bool) -> UpdateChannelSettingsParam {
    UpdateChannelSettingsParam {
        should_sync,
        default_post_type: PostType::Question,
        default_post_tag_id: None,
    }
}
