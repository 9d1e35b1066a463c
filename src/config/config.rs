use std::env;
use std::fs;
use serde::{Deserialize, Serialize};

use crate::constants::CONFIG_FILE;
use crate::error::{MigrateError, MigrateResult};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    pub jira_url: Option<String>,
    pub jira_username: Option<String>,
    pub jira_password: Option<String>,
    pub github_username: Option<String>,
    pub github_token: Option<String>,
}

/// Fully resolved credentials for both trackers.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub jira_url: String,
    pub jira_username: String,
    pub jira_password: String,
    pub github_username: String,
    pub github_token: String,
}

pub fn load_config() -> Config {
    let home_dir = match dirs::home_dir() {
        Some(dir) => dir,
        None => return Config::default(),
    };
    let config_path = home_dir.join(CONFIG_FILE);

    if config_path.exists() {
        match fs::read_to_string(&config_path) {
            Ok(config_str) => serde_json::from_str(&config_str).unwrap_or_default(),
            Err(_) => Config::default(),
        }
    } else {
        Config::default()
    }
}

pub fn save_config(config: &Config) -> MigrateResult<()> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| MigrateError::ConfigError("Could not find home directory".to_string()))?;
    let config_path = home_dir.join(CONFIG_FILE);

    let config_str = serde_json::to_string_pretty(config)?;
    fs::write(config_path, config_str)?;

    Ok(())
}

/// Resolve credentials, environment variables taking precedence over the
/// config file.
pub fn get_credentials() -> MigrateResult<Credentials> {
    let config = load_config();

    let field = |env_key: &str, file_value: &Option<String>| -> MigrateResult<String> {
        if let Ok(value) = env::var(env_key) {
            return Ok(value);
        }
        file_value.clone().ok_or(MigrateError::CredentialsNotFound)
    };

    Ok(Credentials {
        jira_url: field("JIRA_URL", &config.jira_url)?,
        jira_username: field("JIRA_USERNAME", &config.jira_username)?,
        jira_password: field("JIRA_PASSWORD", &config.jira_password)?,
        github_username: field("GITHUB_USERNAME", &config.github_username)?,
        github_token: field("GITHUB_TOKEN", &config.github_token)?,
    })
}
