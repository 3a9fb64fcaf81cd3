#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{Value, json};
use share_post::ContentApiError;
use share_post::core::models::{Post, PostList, Team};
use share_post::mattermost::ContentApi;

pub const SITE_URL: &str = "https://chat.example.com";
pub const USER_ID: &str = "user1";
pub const TEAM_ID: &str = "team1";
pub const TEAM_NAME: &str = "engineering";
pub const SOURCE_CHANNEL: &str = "town-square";
pub const DEST_CHANNEL: &str = "off-topic";
pub const POST_ID: &str = "post1";
/// Owner of the bot token; the host stores every created post under this user.
pub const BOT_USER_ID: &str = "bot1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    GetTeam,
    GetPost,
    GetPostThread,
    CreatePost,
    DeletePost,
    SendEphemeral,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ephemeral {
    pub channel_id: String,
    pub user_id: String,
    pub message: String,
}

#[derive(Default)]
struct State {
    teams: HashMap<String, Team>,
    posts: HashMap<String, Post>,
    failing: HashSet<Op>,
    created: Vec<Post>,
    deleted: Vec<String>,
    ephemerals: Vec<Ephemeral>,
    next_id: u32,
    repeat_thread_order: bool,
}

/// In-memory stand-in for the Mattermost content API.
#[derive(Default)]
pub struct FakeContentApi {
    state: Mutex<State>,
}

impl FakeContentApi {
    /// A team plus one root post without replies in the source channel.
    pub fn with_single_post() -> Self {
        let api = Self::default();
        api.add_team(TEAM_ID, TEAM_NAME);
        api.add_post(Post {
            id: POST_ID.into(),
            create_at: 1_700_000_000_000,
            user_id: "author1".into(),
            channel_id: SOURCE_CHANNEL.into(),
            message: "original message".into(),
            ..Default::default()
        });
        api
    }

    pub fn add_team(&self, id: &str, name: &str) {
        self.state.lock().unwrap().teams.insert(
            id.to_string(),
            Team {
                id: id.to_string(),
                name: name.to_string(),
                display_name: name.to_string(),
            },
        );
    }

    pub fn add_post(&self, post: Post) {
        self.state
            .lock()
            .unwrap()
            .posts
            .insert(post.id.clone(), post);
    }

    pub fn add_reply(&self, id: &str, root_id: &str) {
        self.add_post(Post {
            id: id.to_string(),
            user_id: "someone".into(),
            channel_id: SOURCE_CHANNEL.into(),
            root_id: root_id.to_string(),
            message: format!("reply {id}"),
            ..Default::default()
        });
    }

    /// Makes thread lookups list every id twice in `order`.
    pub fn repeat_thread_order(&self) {
        self.state.lock().unwrap().repeat_thread_order = true;
    }

    pub fn fail(&self, op: Op) {
        self.state.lock().unwrap().failing.insert(op);
    }

    pub fn created(&self) -> Vec<Post> {
        self.state.lock().unwrap().created.clone()
    }

    pub fn deleted(&self) -> Vec<String> {
        self.state.lock().unwrap().deleted.clone()
    }

    pub fn ephemerals(&self) -> Vec<Ephemeral> {
        self.state.lock().unwrap().ephemerals.clone()
    }

    pub fn post(&self, id: &str) -> Option<Post> {
        self.state.lock().unwrap().posts.get(id).cloned()
    }

    fn check(&self, op: Op) -> Result<(), ContentApiError> {
        if self.state.lock().unwrap().failing.contains(&op) {
            return Err(ContentApiError::Rejected {
                status: 500,
                message: format!("{op:?} failed"),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl ContentApi for FakeContentApi {
    async fn get_team(&self, team_id: &str) -> Result<Team, ContentApiError> {
        self.check(Op::GetTeam)?;
        self.state
            .lock()
            .unwrap()
            .teams
            .get(team_id)
            .cloned()
            .ok_or_else(|| ContentApiError::NotFound {
                resource: "team",
                id: team_id.to_string(),
            })
    }

    async fn get_post(&self, post_id: &str) -> Result<Post, ContentApiError> {
        self.check(Op::GetPost)?;
        self.post(post_id).ok_or_else(|| ContentApiError::NotFound {
            resource: "post",
            id: post_id.to_string(),
        })
    }

    async fn get_post_thread(&self, post_id: &str) -> Result<PostList, ContentApiError> {
        self.check(Op::GetPostThread)?;
        let state = self.state.lock().unwrap();
        let post = state
            .posts
            .get(post_id)
            .ok_or_else(|| ContentApiError::NotFound {
                resource: "post",
                id: post_id.to_string(),
            })?;
        let root_id = if post.root_id.is_empty() {
            post.id.clone()
        } else {
            post.root_id.clone()
        };

        let mut list = PostList::default();
        for p in state.posts.values() {
            if p.id == root_id || p.root_id == root_id {
                list.order.push(p.id.clone());
                list.posts.insert(p.id.clone(), p.clone());
            }
        }
        if state.repeat_thread_order {
            list.order = [list.order.clone(), list.order.clone()].concat();
        }
        Ok(list)
    }

    async fn create_post(&self, post: &Post) -> Result<Post, ContentApiError> {
        self.check(Op::CreatePost)?;
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let mut stored = post.clone();
        stored.id = format!("new-post-{}", state.next_id);
        stored.user_id = BOT_USER_ID.to_string();
        state.posts.insert(stored.id.clone(), stored.clone());
        state.created.push(stored.clone());
        Ok(stored)
    }

    async fn delete_post(&self, post_id: &str) -> Result<(), ContentApiError> {
        self.check(Op::DeletePost)?;
        let mut state = self.state.lock().unwrap();
        if state.posts.remove(post_id).is_none() {
            return Err(ContentApiError::NotFound {
                resource: "post",
                id: post_id.to_string(),
            });
        }
        state.deleted.push(post_id.to_string());
        Ok(())
    }

    async fn send_ephemeral_post(
        &self,
        channel_id: &str,
        user_id: &str,
        message: &str,
    ) -> Result<(), ContentApiError> {
        self.check(Op::SendEphemeral)?;
        self.state.lock().unwrap().ephemerals.push(Ephemeral {
            channel_id: channel_id.to_string(),
            user_id: user_id.to_string(),
            message: message.to_string(),
        });
        Ok(())
    }
}

/// JSON body of a dialog submission from `USER_ID` on `POST_ID`.
pub fn submission_body(submission: Value) -> String {
    json!({
        "url": "/plugins/share-post/api/v1/share",
        "callback_id": POST_ID,
        "state": "",
        "user_id": USER_ID,
        "channel_id": SOURCE_CHANNEL,
        "team_id": TEAM_ID,
        "submission": submission,
        "cancelled": false
    })
    .to_string()
}

/// API Gateway v2 proxy event.
pub fn proxy_event(method: &str, path: &str, headers: Value, body: Option<String>) -> Value {
    let mut event = json!({
        "version": "2.0",
        "rawPath": path,
        "rawQueryString": "",
        "headers": headers,
        "requestContext": { "http": { "method": method, "path": path } },
        "isBase64Encoded": false
    });
    if let Some(body) = body {
        event["body"] = Value::String(body);
    }
    event
}

/// Decodes the JSON string held in a proxy response's `body`.
pub fn response_json(response: &Value) -> Value {
    serde_json::from_str(response["body"].as_str().unwrap()).unwrap()
}
