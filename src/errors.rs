use thiserror::Error;

/// Failures reported by the host content API.
#[derive(Debug, Error)]
pub enum ContentApiError {
    #[error("{resource} {id} not found")]
    NotFound { resource: &'static str, id: String },

    #[error("Mattermost API rejected the request (HTTP {status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Failed to send HTTP request: {0}")]
    Transport(String),

    #[error("Failed to decode Mattermost API response: {0}")]
    Decode(String),

    #[error("Cannot build Mattermost API request: {0}")]
    InvalidRequest(String),
}

impl From<reqwest::Error> for ContentApiError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            ContentApiError::Decode(error.to_string())
        } else {
            ContentApiError::Transport(error.to_string())
        }
    }
}

#[derive(Debug, Error)]
pub enum SharePostError {
    #[error("Failed to parse dialog submission: {0}")]
    ParseError(String),

    #[error("failed to get {key} key. Value is: {value}")]
    MissingField { key: &'static str, value: String },

    #[error("Invalid share_type {0}")]
    InvalidShareType(String),

    #[error("Failed to {action}: {source}")]
    ContentApi {
        action: &'static str,
        #[source]
        source: ContentApiError,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl SharePostError {
    /// Wraps a host API failure with the step that produced it.
    #[must_use]
    pub fn content_api(action: &'static str, source: ContentApiError) -> Self {
        SharePostError::ContentApi { action, source }
    }
}
