// Module declarations
pub mod cli_context;
pub mod client;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod filtering;
pub mod formatting;
pub mod logging;
pub mod migration;
pub mod models;

// Re-export commonly used items
pub use cli_context::CliContext;
pub use client::{GithubClient, JiraClient};
pub use config::{Config, get_credentials, load_config, save_config};
pub use error::{MigrateError, MigrateResult};
pub use models::*;
