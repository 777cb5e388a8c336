use super::*;

use crate::server::model::discord::ThreadSnapshot;

mod upsert_message;

/// Mirrors a thread started by `AUTHOR_ID` and returns its snapshot and post id.
async fn mirrored_thread(
    db: &DatabaseConnection,
    fakes: &Fakes,
) -> Result<(LinkedChannel, ThreadSnapshot, i32), AppError> {
    let (linked, channel) = linked_forum(db).await?;
    let ctx = fakes.context(db);
    let thread =
        fake::thread_snapshot(5001, channel, fake::discord_user(AUTHOR_ID, "ada"), "Help");

    let post = DiscordThreadService::new(&ctx)
        .upsert_thread(&thread)
        .await?
        .unwrap();

    Ok((linked, thread, post.id))
}
