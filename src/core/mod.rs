//! Configuration and the data exchanged with the host.

pub mod config;
pub mod models;
