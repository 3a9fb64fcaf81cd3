//! Request bodies sent to the Mattermost REST API.

use serde_json::{Value, json};

/// Create the JSON body for `POST /api/v4/posts/ephemeral`.
///
/// Ephemeral posts are shown only to `user_id` and are not stored in the
/// channel history.
///
/// # Examples
///
/// ```
/// use share_post::mattermost::response_builder::create_ephemeral_payload;
///
/// let payload = create_ephemeral_payload("channel-id", "user-id", "Only you can see this");
/// assert_eq!(payload["post"]["channel_id"], "channel-id");
/// ```
#[must_use]
pub fn create_ephemeral_payload(channel_id: &str, user_id: &str, message: &str) -> Value {
    json!({
        "user_id": user_id,
        "post": {
            "channel_id": channel_id,
            "message": message,
        }
    })
}
