use crate::client::{GithubClient, JiraClient};
use crate::config::{get_credentials, Credentials};
use crate::error::{MigrateError, MigrateResult};

/// Central context for command handlers, resolving credentials once and
/// handing out configured API clients.
pub struct CliContext {
    credentials: Option<Credentials>,
}

impl CliContext {
    pub fn load() -> Self {
        Self {
            credentials: get_credentials().ok(),
        }
    }

    pub fn credentials(&mut self) -> MigrateResult<&Credentials> {
        if self.credentials.is_none() {
            self.credentials = Some(get_credentials().map_err(|_| MigrateError::CredentialsNotFound)?);
        }

        self.credentials.as_ref().ok_or(MigrateError::CredentialsNotFound)
    }

    pub fn jira_client(&mut self) -> MigrateResult<JiraClient> {
        let creds = self.credentials()?;
        Ok(JiraClient::new(
            &creds.jira_url,
            &creds.jira_username,
            &creds.jira_password,
        ))
    }

    pub fn github_client(&mut self, repository: &str) -> MigrateResult<GithubClient> {
        let creds = self.credentials()?;
        GithubClient::new(repository, &creds.github_username, &creds.github_token)
    }
}
