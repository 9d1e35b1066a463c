use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::json;

use crate::constants::GITHUB_API_URL;
use crate::error::{MigrateError, MigrateResult};
use crate::models::{CommentPayload, IssuePayload};

#[derive(Debug, Deserialize)]
struct Created {
    number: u64,
}

pub struct GithubClient {
    client: reqwest::Client,
    base_url: String,
    org: String,
    repo: String,
    username: String,
    token: String,
}

impl GithubClient {
    /// `repository` is the target in `org/repo` form.
    pub fn new(repository: &str, username: &str, token: &str) -> MigrateResult<Self> {
        let (org, repo) = repository.split_once('/').ok_or_else(|| {
            MigrateError::InvalidInput(format!(
                "Repository '{}' is not in 'org/repo' form",
                repository
            ))
        })?;
        if org.is_empty() || repo.is_empty() || repo.contains('/') {
            return Err(MigrateError::InvalidInput(format!(
                "Repository '{}' is not in 'org/repo' form",
                repository
            )));
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert(USER_AGENT, HeaderValue::from_static("jira2gh-cli"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .expect("Failed to create HTTP client");

        Ok(Self {
            client,
            base_url: GITHUB_API_URL.to_string(),
            org: org.to_string(),
            repo: repo.to_string(),
            username: username.to_string(),
            token: token.to_string(),
        })
    }

    /// Point the client at a different API root. Tests use this to talk to
    /// a local mock server.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn repository(&self) -> String {
        format!("{}/{}", self.org, self.repo)
    }

    fn url(&self, path: &str) -> String {
        format!("{}/repos/{}/{}{}", self.base_url, self.org, self.repo, path)
    }

    /// Create an issue, returning its assigned number.
    pub async fn create_issue(&self, payload: &IssuePayload) -> MigrateResult<u64> {
        let response = self
            .client
            .post(self.url("/issues"))
            .basic_auth(&self.username, Some(&self.token))
            .json(payload)
            .send()
            .await?;

        let created: Created = Self::expect_created(response).await?;
        Ok(created.number)
    }

    /// Patch an issue's open/closed state.
    pub async fn set_issue_state(&self, number: u64, closed: bool) -> MigrateResult<()> {
        let state = if closed { "closed" } else { "open" };
        let response = self
            .client
            .patch(self.url(&format!("/issues/{}", number)))
            .basic_auth(&self.username, Some(&self.token))
            .json(&json!({ "state": state }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MigrateError::GithubApi {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }

    /// Post a comment on an issue.
    pub async fn create_comment(&self, number: u64, payload: &CommentPayload) -> MigrateResult<()> {
        let response = self
            .client
            .post(self.url(&format!("/issues/{}/comments", number)))
            .basic_auth(&self.username, Some(&self.token))
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::CREATED {
            let body = response.text().await.unwrap_or_default();
            return Err(MigrateError::GithubApi {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }

    /// Create a milestone, returning its assigned number.
    pub async fn create_milestone(&self, title: &str) -> MigrateResult<u64> {
        let response = self
            .client
            .post(self.url("/milestones"))
            .basic_auth(&self.username, Some(&self.token))
            .json(&json!({ "title": title }))
            .send()
            .await?;

        let created: Created = Self::expect_created(response).await?;
        Ok(created.number)
    }

    async fn expect_created<T: for<'de> Deserialize<'de>>(
        response: reqwest::Response,
    ) -> MigrateResult<T> {
        let status = response.status();
        let body = response.text().await?;

        if status != StatusCode::CREATED {
            return Err(MigrateError::GithubApi {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_parsing() {
        let client = GithubClient::new("GothenburgBitFactory/taskwarrior", "user", "token").unwrap();
        assert_eq!(client.repository(), "GothenburgBitFactory/taskwarrior");
        assert_eq!(
            client.url("/issues"),
            "https://api.github.com/repos/GothenburgBitFactory/taskwarrior/issues"
        );
    }

    #[test]
    fn test_repository_must_be_org_slash_repo() {
        assert!(GithubClient::new("taskwarrior", "user", "token").is_err());
        assert!(GithubClient::new("a/b/c", "user", "token").is_err());
        assert!(GithubClient::new("/repo", "user", "token").is_err());
        assert!(GithubClient::new("org/", "user", "token").is_err());
    }
}
