//! API Lambda handler and request processing

pub mod auth;
pub mod dialog;
pub mod handler;
pub mod helpers;
pub mod parsing;
pub mod router;
pub mod submission;

// Re-export the main handler for convenience
pub use handler::handler;
