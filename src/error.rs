use thiserror::Error;

#[derive(Error, Debug)]
pub enum MigrateError {
    #[error("Credentials not found. Please run 'jira2gh auth' to configure.")]
    CredentialsNotFound,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Jira API error: {0}")]
    JiraApi(String),

    #[error("GitHub API error: HTTP {status}: {body}")]
    GithubApi { status: u16, body: String },

    #[error("No milestone provisioned for fix version '{0}'")]
    MissingMilestone(String),

    #[error("Invalid issue key '{0}': expected PROJECT-N")]
    InvalidIssueKey(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

pub type MigrateResult<T> = Result<T, MigrateError>;

pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> MigrateResult<T>;
    fn with_context<F>(self, f: F) -> MigrateResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn context(self, msg: &str) -> MigrateResult<T> {
        self.map_err(|e| MigrateError::Unknown(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> MigrateResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| MigrateError::Unknown(format!("{}: {}", f(), e)))
    }
}

impl<T> ErrorContext<T> for Option<T> {
    fn context(self, msg: &str) -> MigrateResult<T> {
        self.ok_or_else(|| MigrateError::Unknown(msg.to_string()))
    }

    fn with_context<F>(self, f: F) -> MigrateResult<T>
    where
        F: FnOnce() -> String,
    {
        self.ok_or_else(|| MigrateError::Unknown(f()))
    }
}
