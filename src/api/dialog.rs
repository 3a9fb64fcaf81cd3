//! Handler for submitted share dialogs.
//!
//! Decodes the submission, checks it belongs to the authenticated caller, runs the
//! requested operation and reports any message back to the user.

use serde_json::Value;
use tracing::{debug, info, warn};

use super::auth::{NOT_AUTHORIZED, is_submitter};
use super::helpers::{err_response, ok_empty, ok_json};
use super::submission::parse_share_form;
use crate::core::models::{DialogResponse, SubmitDialogRequest};
use crate::features::{self, MESSAGE_GENERIC_ERROR, ShareContext};
use crate::mattermost::ContentApi;

/// Handle one dialog submission on behalf of `user_id`.
///
/// # Returns
///
/// - 400 if `body` is not a dialog submission
/// - 401 if the submission was made for a different user
/// - 200 with an empty body on success
/// - 200 with a [`DialogResponse`] carrying the user-facing message otherwise
pub async fn handle_submit_dialog_request(
    api: &dyn ContentApi,
    site_url: &str,
    user_id: &str,
    body: &str,
) -> Value {
    let request: SubmitDialogRequest = match serde_json::from_str(body) {
        Ok(r) => r,
        Err(e) => {
            warn!(error = %e, "Failed to decode SubmitDialogRequest");
            return err_response(400, "invalid request");
        }
    };

    if !is_submitter(user_id, &request.user_id) {
        warn!("invalid user");
        return err_response(401, NOT_AUTHORIZED);
    }

    #[cfg(feature = "debug-logs")]
    debug!(submission = ?request.submission, "Dialog submission");

    #[cfg(not(feature = "debug-logs"))]
    debug!(
        fields = ?request.submission.keys().collect::<Vec<_>>(),
        "Dialog submission [... values masked, enable debug-logs feature to view ...]"
    );

    if request.cancelled {
        info!(post_id = %request.callback_id, "Dialog cancelled");
        return ok_empty();
    }

    let ctx = ShareContext {
        api,
        site_url,
        request: &request,
    };

    let result = match parse_share_form(&request) {
        Ok(form) => features::dispatch(&ctx, &form).await,
        Err(e) => Err(e),
    };

    let message = match result {
        Ok(outcome) => outcome.message,
        Err(e) => {
            warn!(error = %e, "Failed to handle SubmitDialogRequest");
            Some(MESSAGE_GENERIC_ERROR.to_string())
        }
    };

    let Some(message) = message else {
        return ok_empty();
    };

    if let Err(e) = api
        .send_ephemeral_post(&request.channel_id, &request.user_id, &message)
        .await
    {
        warn!(channel_id = %request.channel_id, error = %e, "Failed to send ephemeral post");
    }

    match serde_json::to_string(&DialogResponse::with_error(&message)) {
        Ok(body) => ok_json(body),
        Err(e) => {
            warn!(error = %e, "Failed to write SubmitDialogRequest");
            err_response(500, "failed to encode response")
        }
    }
}
