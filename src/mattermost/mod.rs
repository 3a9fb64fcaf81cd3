//! All Mattermost-specific functionality

pub mod api;
pub mod client;
pub mod response_builder;

// Re-export main types for convenience
pub use api::ContentApi;
pub use client::MattermostClient;
