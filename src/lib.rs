//! Star GitHub repositories from the command line.

pub mod app;
pub mod auth;
pub mod cli;
pub mod error;
pub mod github;
pub mod models;
pub mod selector;
pub mod types;

pub use auth::Credentials;
pub use error::{GhStarError, Result};
pub use github::GitHubClient;
pub use models::RepositoryRef;
