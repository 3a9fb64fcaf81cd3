//! Mattermost REST API client module
//!
//! Implements [`ContentApi`] over the `/api/v4` endpoints with a bot token.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;
use url::Url;

use super::api::ContentApi;
use super::response_builder::create_ephemeral_payload;
use crate::core::config::AppConfig;
use crate::core::models::{Post, PostList, Team};
use crate::errors::ContentApiError;

static HTTP_CLIENT: std::sync::LazyLock<Client> = std::sync::LazyLock::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .unwrap_or_else(|_| Client::new())
});

pub struct MattermostClient {
    api_url: String,
    token: String,
}

impl MattermostClient {
    #[must_use]
    pub fn new(api_url: &str, token: String) -> Self {
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(&config.api_url, config.bot_token.clone())
    }

    /// Builds `<api_url>/api/v4/<segments...>`.
    ///
    /// Each segment is percent-encoded on its own, so an id can never add or
    /// climb out of path segments.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ContentApiError> {
        if let Some(bad) = segments
            .iter()
            .find(|s| s.is_empty() || **s == "." || **s == "..")
        {
            return Err(ContentApiError::InvalidRequest(format!(
                "invalid path segment {bad:?}"
            )));
        }

        let mut url = Url::parse(&self.api_url).map_err(|e| {
            ContentApiError::InvalidRequest(format!("invalid API URL {}: {e}", self.api_url))
        })?;
        url.path_segments_mut()
            .map_err(|()| {
                ContentApiError::InvalidRequest(format!(
                    "API URL {} cannot have a path",
                    self.api_url
                ))
            })?
            .pop_if_empty()
            .extend(["api", "v4"])
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        resource: &'static str,
        id: &str,
    ) -> Result<T, ContentApiError> {
        let url = self.endpoint(segments)?;
        debug!(url = %url, "GET");

        let resp = HTTP_CLIENT
            .get(url)
            .bearer_auth(&self.token)
            .send()
            .await?;
        let resp = check_status(resp, resource, id).await?;

        Ok(resp.json::<T>().await?)
    }
}

/// Turns a non-success response into a typed error.
async fn check_status(
    resp: Response,
    resource: &'static str,
    id: &str,
) -> Result<Response, ContentApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    if status == StatusCode::NOT_FOUND {
        return Err(ContentApiError::NotFound {
            resource,
            id: id.to_string(),
        });
    }

    let body = resp.text().await.unwrap_or_default();
    Err(ContentApiError::Rejected {
        status: status.as_u16(),
        message: extract_error_message(&body),
    })
}

/// Pulls `message` out of a Mattermost `AppError` body, falling back to the raw text.
fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                "no error details".to_string()
            } else {
                trimmed.to_string()
            }
        })
}

#[async_trait]
impl ContentApi for MattermostClient {
    async fn get_team(&self, team_id: &str) -> Result<Team, ContentApiError> {
        self.get_json(&["teams", team_id], "team", team_id).await
    }

    async fn get_post(&self, post_id: &str) -> Result<Post, ContentApiError> {
        self.get_json(&["posts", post_id], "post", post_id).await
    }

    async fn get_post_thread(&self, post_id: &str) -> Result<PostList, ContentApiError> {
        self.get_json(&["posts", post_id, "thread"], "post", post_id)
            .await
    }

    async fn create_post(&self, post: &Post) -> Result<Post, ContentApiError> {
        let resp = HTTP_CLIENT
            .post(self.endpoint(&["posts"])?)
            .bearer_auth(&self.token)
            .json(post)
            .send()
            .await?;
        let resp = check_status(resp, "channel", &post.channel_id).await?;

        Ok(resp.json::<Post>().await?)
    }

    async fn delete_post(&self, post_id: &str) -> Result<(), ContentApiError> {
        let resp = HTTP_CLIENT
            .delete(self.endpoint(&["posts", post_id])?)
            .bearer_auth(&self.token)
            .send()
            .await?;
        check_status(resp, "post", post_id).await?;
        Ok(())
    }

    async fn send_ephemeral_post(
        &self,
        channel_id: &str,
        user_id: &str,
        message: &str,
    ) -> Result<(), ContentApiError> {
        let payload = create_ephemeral_payload(channel_id, user_id, message);
        let resp = HTTP_CLIENT
            .post(self.endpoint(&["posts", "ephemeral"])?)
            .bearer_auth(&self.token)
            .json(&payload)
            .send()
            .await?;
        check_status(resp, "channel", channel_id).await?;
        Ok(())
    }
}
