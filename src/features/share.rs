use serde_json::{Map, Value};
use tracing::{error, info, warn};

use super::{DialogOutcome, ShareContext};
use crate::core::models::{POST_TYPE_DEFAULT, Post, SHARED_BY_PROP};
use crate::errors::SharePostError;
use crate::utils::links::make_post_link;

/// Posts a link to the originating post into `to_channel`.
///
/// The original post is left as it is. The host files the new post under the bot
/// account, so the sharing user is recorded in [`SHARED_BY_PROP`].
///
/// # Errors
///
/// Returns an error if the team lookup or the post creation fails.
pub async fn share_post(
    ctx: &ShareContext<'_>,
    to_channel: &str,
    prefix: &str,
) -> Result<DialogOutcome, SharePostError> {
    let post_id = ctx.request.callback_id.as_str();
    let team_id = ctx.request.team_id.as_str();

    let team = ctx.api.get_team(team_id).await.map_err(|e| {
        error!(team_id = %team_id, error = %e, "Failed to get team");
        SharePostError::content_api("get team", e)
    })?;

    let mut props = Map::new();
    props.insert(
        SHARED_BY_PROP.to_string(),
        Value::String(ctx.request.user_id.clone()),
    );
    let post = Post {
        post_type: POST_TYPE_DEFAULT.to_string(),
        user_id: ctx.request.user_id.clone(),
        channel_id: to_channel.to_string(),
        message: format!(
            "{prefix}> Shared from {}",
            make_post_link(ctx.site_url, &team.name, post_id)
        ),
        props,
        ..Default::default()
    };

    let created = ctx.api.create_post(&post).await.map_err(|e| {
        warn!(channel_id = %to_channel, error = %e, "Failed to create post");
        SharePostError::content_api("create post", e)
    })?;

    info!(
        post_id = %post_id,
        shared_post_id = %created.id,
        channel_id = %to_channel,
        "Post shared"
    );
    Ok(DialogOutcome::done())
}
