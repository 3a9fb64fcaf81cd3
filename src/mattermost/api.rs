use async_trait::async_trait;

use crate::core::models::{Post, PostList, Team};
use crate::errors::ContentApiError;

/// The slice of the host's content API this plugin needs.
///
/// Every call is independently fallible and nothing here retries.
#[async_trait]
pub trait ContentApi: Send + Sync {
    async fn get_team(&self, team_id: &str) -> Result<Team, ContentApiError>;

    async fn get_post(&self, post_id: &str) -> Result<Post, ContentApiError>;

    /// Returns the whole thread `post_id` belongs to, including the post itself.
    async fn get_post_thread(&self, post_id: &str) -> Result<PostList, ContentApiError>;

    /// Creates `post` and returns it as stored, with its host-assigned id.
    async fn create_post(&self, post: &Post) -> Result<Post, ContentApiError>;

    async fn delete_post(&self, post_id: &str) -> Result<(), ContentApiError>;

    /// Posts a message into `channel_id` that only `user_id` can see.
    async fn send_ephemeral_post(
        &self,
        channel_id: &str,
        user_id: &str,
        message: &str,
    ) -> Result<(), ContentApiError>;
}
