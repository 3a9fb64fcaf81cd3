//! SharePost - move or copy a single Mattermost post into another channel.
//!
//! A user opens the share dialog on a post, picks a destination channel and either
//! shares the post (a new post linking back to it) or moves it (the post is recreated
//! in the destination and the original deleted). The dialog submission lands on this
//! crate's API handler, which runs behind an API gateway as a Lambda function.
//!
//! # Architecture
//!
//! The system uses:
//! - AWS Lambda for serverless execution
//! - the Mattermost REST API (`/api/v4`) through [`mattermost::ContentApi`]
//! - reqwest for HTTP
//! - Tokio for async runtime
//!
//! # Example
//!
//! ```no_run
//! use serde_json::json;
//! use share_post::core::config::AppConfig;
//! use share_post::mattermost::MattermostClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     share_post::setup_logging();
//!
//!     let config = AppConfig::new("https://chat.example.com", None, "bot-token".to_string())?;
//!     let api = MattermostClient::from_config(&config);
//!
//!     let event = json!({
//!         "rawPath": "/api/v1/share",
//!         "requestContext": { "http": { "method": "POST" } },
//!         "headers": { "Mattermost-User-Id": "user-id" },
//!         "body": json!({
//!             "user_id": "user-id",
//!             "team_id": "team-id",
//!             "channel_id": "channel-id",
//!             "callback_id": "post-id",
//!             "submission": { "to_channel": "other-channel-id", "share_type": "share" }
//!         }).to_string()
//!     });
//!
//!     let response = share_post::api::handler::route_request(&config, &api, &event).await;
//!     println!("{response}");
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod api;
pub mod core;
pub mod errors;
pub mod features;
pub mod mattermost;
pub mod utils;

pub use errors::{ContentApiError, SharePostError};

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// Sets up tracing-subscriber with a JSON formatter suitable for `CloudWatch` Logs.
/// The level comes from `RUST_LOG` and defaults to `info`. Calling it again after a
/// subscriber is installed has no effect.
///
/// # Example
///
/// ```
/// share_post::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
