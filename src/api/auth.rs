use serde_json::Value;
use tracing::warn;

use super::helpers;
use super::parsing::get_header_value;

/// Header the host sets to the id of the logged-in user making the request.
pub const USER_ID_HEADER: &str = "Mattermost-User-Id";

pub const NOT_AUTHORIZED: &str = "not authorized";

/// Guard for every `/api/v1` route: the caller must carry a non-empty user id header.
///
/// # Errors
///
/// Returns a ready 401 response when the header is missing or empty.
pub fn check_authenticity(headers: &Value) -> Result<&str, Value> {
    match get_header_value(headers, USER_ID_HEADER) {
        Some(user_id) if !user_id.trim().is_empty() => Ok(user_id),
        _ => {
            warn!("Request without {} header", USER_ID_HEADER);
            Err(helpers::err_response(401, NOT_AUTHORIZED))
        }
    }
}

/// True when the user id inside a submission matches the authenticated caller.
#[must_use]
pub fn is_submitter(header_user_id: &str, payload_user_id: &str) -> bool {
    !payload_user_id.is_empty() && header_user_id == payload_user_id
}
