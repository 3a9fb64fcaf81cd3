use std::env;

use url::Url;

use crate::errors::SharePostError;

pub const SITE_URL_VAR: &str = "MATTERMOST_SITE_URL";
pub const API_URL_VAR: &str = "MATTERMOST_API_URL";
pub const BOT_TOKEN_VAR: &str = "MATTERMOST_BOT_TOKEN";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Public site URL, used as the base of permalinks.
    pub site_url: String,
    /// Base URL of the REST API. Usually the same server as `site_url`.
    pub api_url: String,
    pub bot_token: String,
}

impl AppConfig {
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or a URL does not parse.
    pub fn from_env() -> Result<Self, SharePostError> {
        let site_url = env::var(SITE_URL_VAR)
            .map_err(|e| SharePostError::ConfigError(format!("{SITE_URL_VAR}: {e}")))?;
        let api_url = env::var(API_URL_VAR).ok().filter(|v| !v.trim().is_empty());
        let bot_token = env::var(BOT_TOKEN_VAR)
            .map_err(|e| SharePostError::ConfigError(format!("{BOT_TOKEN_VAR}: {e}")))?;

        Self::new(&site_url, api_url.as_deref(), bot_token)
    }

    /// Builds a config from explicit values, normalizing both URLs.
    ///
    /// # Errors
    ///
    /// Returns an error if either URL is not an absolute http(s) URL.
    pub fn new(
        site_url: &str,
        api_url: Option<&str>,
        bot_token: String,
    ) -> Result<Self, SharePostError> {
        let site_url = normalize_base_url(SITE_URL_VAR, site_url)?;
        let api_url = match api_url {
            Some(raw) => normalize_base_url(API_URL_VAR, raw)?,
            None => site_url.clone(),
        };

        Ok(Self {
            site_url,
            api_url,
            bot_token,
        })
    }
}

fn normalize_base_url(var: &str, raw: &str) -> Result<String, SharePostError> {
    let trimmed = raw.trim();
    let parsed = Url::parse(trimmed)
        .map_err(|e| SharePostError::ConfigError(format!("{var}: {e}")))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(SharePostError::ConfigError(format!(
            "{var}: unsupported scheme {}",
            parsed.scheme()
        )));
    }
    Ok(trimmed.trim_end_matches('/').to_string())
}
