//! The two things a submitted share dialog can do to a post.

pub mod move_post;
pub mod share;

use crate::api::submission::ShareForm;
use crate::core::models::{ShareType, SubmitDialogRequest};
use crate::errors::SharePostError;
use crate::mattermost::ContentApi;

pub const MESSAGE_GENERIC_ERROR: &str = "Something went wrong. Please try again later.";
pub const MESSAGE_THREAD_NOT_MOVABLE: &str =
    "The post that has parent or child posts cannot be moved to other channel.";
pub const MESSAGE_SAME_CHANNEL: &str = "Cannot move the post to same channel.";

/// Result of a handled submission that did not fail.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DialogOutcome {
    /// Message to show the submitting user, if the request was turned down.
    pub message: Option<String>,
}

impl DialogOutcome {
    #[must_use]
    pub fn done() -> Self {
        Self { message: None }
    }

    #[must_use]
    pub fn rejected(message: &str) -> Self {
        Self {
            message: Some(message.to_string()),
        }
    }
}

/// Everything a share or move needs to talk to the host.
pub struct ShareContext<'a> {
    pub api: &'a dyn ContentApi,
    pub site_url: &'a str,
    pub request: &'a SubmitDialogRequest,
}

/// Runs the operation selected by `form.share_type`.
///
/// # Errors
///
/// Returns an error if any host call on the chosen path fails.
pub async fn dispatch(
    ctx: &ShareContext<'_>,
    form: &ShareForm,
) -> Result<DialogOutcome, SharePostError> {
    match form.share_type {
        ShareType::Share => share::share_post(ctx, &form.to_channel, &form.prefix).await,
        ShareType::Move => move_post::move_post(ctx, &form.to_channel, &form.prefix).await,
    }
}
