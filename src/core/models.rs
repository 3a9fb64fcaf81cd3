use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Submission field holding the destination channel id.
pub const TO_CHANNEL_KEY: &str = "to_channel";
/// Submission field selecting between [`ShareType::Share`] and [`ShareType::Move`].
pub const SHARE_TYPE_KEY: &str = "share_type";
/// Optional free text placed above the shared or moved message.
pub const ADDITIONAL_TEXT_KEY: &str = "additional_text";

/// Payload posted by an interactive dialog when the user submits it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubmitDialogRequest {
    #[serde(default)]
    pub url: String,
    /// Id of the post the dialog was opened from.
    #[serde(default)]
    pub callback_id: String,
    #[serde(default)]
    pub state: String,
    pub user_id: String,
    #[serde(default)]
    pub channel_id: String,
    #[serde(default)]
    pub team_id: String,
    #[serde(default)]
    pub submission: Map<String, Value>,
    #[serde(default)]
    pub cancelled: bool,
}

/// Response body understood by the dialog that submitted the request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub errors: HashMap<String, String>,
}

impl DialogResponse {
    #[must_use]
    pub fn with_error(message: &str) -> Self {
        Self {
            error: Some(message.to_string()),
            errors: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareType {
    Share,
    Move,
}

impl ShareType {
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "share" => Some(ShareType::Share),
            "move" => Some(ShareType::Move),
            _ => None,
        }
    }
}

pub const POST_TYPE_DEFAULT: &str = "";

/// Post prop naming the user who shared the post.
///
/// The host stores every created post under the bot account, so the acting user is
/// kept here instead of in `user_id`.
pub const SHARED_BY_PROP: &str = "shared_by";
/// Post prop naming the user who moved the post.
pub const MOVED_BY_PROP: &str = "moved_by";
/// Post prop keeping the author of a moved post.
pub const ORIGINAL_AUTHOR_PROP: &str = "original_user_id";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Post {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub create_at: i64,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub update_at: i64,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub edit_at: i64,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub delete_at: i64,
    #[serde(default)]
    pub is_pinned: bool,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub channel_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub root_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub original_id: String,
    #[serde(default)]
    pub message: String,
    #[serde(default, rename = "type")]
    pub post_type: String,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub props: Map<String, Value>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub hashtags: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub file_ids: Vec<String>,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_zero(v: &i64) -> bool {
    *v == 0
}

impl Post {
    /// Copy of this post placed in `channel_id` with a new body and no identity.
    ///
    /// Every other field is carried over, so the host assigns a fresh id on creation.
    #[must_use]
    pub fn relocated(&self, channel_id: &str, message: String) -> Self {
        Self {
            id: String::new(),
            channel_id: channel_id.to_string(),
            message,
            ..self.clone()
        }
    }
}

/// A thread as returned by the host: ids in display order plus the posts themselves.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostList {
    #[serde(default)]
    pub order: Vec<String>,
    #[serde(default)]
    pub posts: HashMap<String, Post>,
}

impl PostList {
    /// Drops repeated ids from `order`, keeping the first occurrence.
    pub fn unique_order(&mut self) {
        let mut seen = HashSet::new();
        self.order.retain(|id| seen.insert(id.clone()));
    }

    /// Number of posts in the thread, counted from `order`.
    ///
    /// A host that repeats an id in `order` inflates this until
    /// [`PostList::unique_order`] has run.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub display_name: String,
}
