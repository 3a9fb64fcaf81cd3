use serde_json::Value;
use tracing::{error, info, warn};

use super::{DialogOutcome, MESSAGE_SAME_CHANNEL, MESSAGE_THREAD_NOT_MOVABLE, ShareContext};
use crate::core::models::{MOVED_BY_PROP, ORIGINAL_AUTHOR_PROP};
use crate::errors::SharePostError;
use crate::utils::links::make_post_link;

/// Largest thread (post, parent and replies together) that may still be moved.
pub const MAX_MOVABLE_THREAD_SIZE: usize = 2;

/// Relocates the originating post into `to_channel`.
///
/// The copy is created before the original is deleted and nothing undoes the copy
/// if the delete fails, so a failed delete leaves the post in both channels.
/// The host files the copy under the bot account; the mover and the original
/// author are kept in [`MOVED_BY_PROP`] and [`ORIGINAL_AUTHOR_PROP`].
///
/// # Errors
///
/// Returns an error if fetching the thread, the post or the team fails, or if
/// creating the copy or deleting the original fails.
pub async fn move_post(
    ctx: &ShareContext<'_>,
    to_channel: &str,
    prefix: &str,
) -> Result<DialogOutcome, SharePostError> {
    let post_id = ctx.request.callback_id.as_str();

    let mut thread = ctx.api.get_post_thread(post_id).await.map_err(|e| {
        error!(post_id = %post_id, error = %e, "Failed to get post list");
        SharePostError::content_api("get post list", e)
    })?;
    thread.unique_order();
    if thread.len() > MAX_MOVABLE_THREAD_SIZE {
        warn!(
            post_id = %post_id,
            thread_size = thread.len(),
            "The post that has parent or child posts cannot be moved to other channel."
        );
        return Ok(DialogOutcome::rejected(MESSAGE_THREAD_NOT_MOVABLE));
    }

    let old_post = ctx.api.get_post(post_id).await.map_err(|e| {
        error!(post_id = %post_id, error = %e, "Failed to get post");
        SharePostError::content_api("get post", e)
    })?;

    if old_post.channel_id == to_channel {
        warn!(
            post_id = %post_id,
            channel_id = %to_channel,
            "Cannot move the post to same channel."
        );
        return Ok(DialogOutcome::rejected(MESSAGE_SAME_CHANNEL));
    }

    let team_id = ctx.request.team_id.as_str();
    let team = ctx.api.get_team(team_id).await.map_err(|e| {
        error!(team_id = %team_id, error = %e, "Failed to get team");
        SharePostError::content_api("get team", e)
    })?;

    let mut new_post = old_post.relocated(to_channel, format!("{prefix}{}", old_post.message));
    new_post.props.insert(
        MOVED_BY_PROP.to_string(),
        Value::String(ctx.request.user_id.clone()),
    );
    // A post moved twice keeps its first author.
    new_post
        .props
        .entry(ORIGINAL_AUTHOR_PROP)
        .or_insert_with(|| Value::String(old_post.user_id.clone()));
    let moved_post = ctx.api.create_post(&new_post).await.map_err(|e| {
        warn!(post_id = %post_id, channel_id = %to_channel, error = %e, "Failed to create post");
        SharePostError::content_api("create post", e)
    })?;

    if let Err(e) = ctx.api.delete_post(&old_post.id).await {
        error!(
            post_id = %old_post.id,
            moved_post_id = %moved_post.id,
            error = %e,
            "Failed to delete original post"
        );
        return Err(SharePostError::content_api("delete post", e));
    }

    let notice = format!(
        "This post is moved to {}",
        make_post_link(ctx.site_url, &team.name, &moved_post.id)
    );
    if let Err(e) = ctx
        .api
        .send_ephemeral_post(&old_post.channel_id, &ctx.request.user_id, &notice)
        .await
    {
        warn!(channel_id = %old_post.channel_id, error = %e, "Failed to send move notice");
    }

    info!(
        post_id = %post_id,
        moved_post_id = %moved_post.id,
        from_channel = %old_post.channel_id,
        to_channel = %to_channel,
        "Post moved"
    );
    Ok(DialogOutcome::done())
}
