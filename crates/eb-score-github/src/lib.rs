pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use client::GitHubClient;
pub use config::GitHubConfig;
pub use error::GitHubError;
pub use types::*;
