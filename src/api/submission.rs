use serde_json::Value;

use crate::core::models::{
    ADDITIONAL_TEXT_KEY, SHARE_TYPE_KEY, ShareType, SubmitDialogRequest, TO_CHANNEL_KEY,
};
use crate::errors::SharePostError;
use crate::utils::links::additional_text_prefix;

/// Validated fields of a share/move dialog submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareForm {
    pub to_channel: String,
    pub share_type: ShareType,
    /// Either empty or the user's text followed by a blank line.
    pub prefix: String,
}

/// Build a `ShareForm` from the submitted dialog fields.
///
/// `to_channel` and `share_type` must be strings; `additional_text` is optional and
/// ignored unless it is a string.
///
/// # Errors
///
/// Returns an error if a required field is missing or not a string, or if
/// `share_type` is neither `share` nor `move`.
pub fn parse_share_form(request: &SubmitDialogRequest) -> Result<ShareForm, SharePostError> {
    let to_channel = required_str(request, TO_CHANNEL_KEY)?;
    let raw_share_type = required_str(request, SHARE_TYPE_KEY)?;
    let additional_text = request
        .submission
        .get(ADDITIONAL_TEXT_KEY)
        .and_then(Value::as_str);

    let share_type = ShareType::parse(raw_share_type)
        .ok_or_else(|| SharePostError::InvalidShareType(raw_share_type.to_string()))?;

    Ok(ShareForm {
        to_channel: to_channel.to_string(),
        share_type,
        prefix: additional_text_prefix(additional_text),
    })
}

fn required_str<'a>(
    request: &'a SubmitDialogRequest,
    key: &'static str,
) -> Result<&'a str, SharePostError> {
    let value = request.submission.get(key);
    value
        .and_then(Value::as_str)
        .ok_or_else(|| SharePostError::MissingField {
            key,
            value: value.map_or_else(|| "<missing>".to_string(), Value::to_string),
        })
}
