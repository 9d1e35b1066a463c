use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde::Deserialize;

use crate::constants::JIRA_ISSUE_FIELDS;
use crate::error::{MigrateError, MigrateResult};
use crate::filtering::JqlFilter;
use crate::models::{issue_key_sequence, Attachment, Comment, SourceIssue};

pub struct JiraClient {
    client: reqwest::Client,
    base_url: String,
    username: String,
    password: String,
}

impl JiraClient {
    pub fn new(base_url: &str, username: &str, password: &str) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    /// Query issues matching a JQL filter, full field set included.
    pub async fn search_issues(
        &self,
        filter: &JqlFilter,
        max_results: u32,
    ) -> MigrateResult<Vec<SourceIssue>> {
        let url = format!("{}/rest/api/2/search", self.base_url);
        let response = self
            .client
            .get(&url)
            .basic_auth(&self.username, Some(&self.password))
            .query(&[
                ("jql", filter.to_jql()),
                ("maxResults", max_results.to_string()),
                ("fields", JIRA_ISSUE_FIELDS.to_string()),
            ])
            .send()
            .await?;

        let search: SearchResponse = Self::read_json(response).await?;
        search
            .issues
            .into_iter()
            .map(JiraIssue::into_model)
            .collect()
    }

    /// Fetch one issue by key, full field set included.
    pub async fn get_issue(&self, key: &str) -> MigrateResult<SourceIssue> {
        let url = format!("{}/rest/api/2/issue/{}", self.base_url, key);
        let response = self
            .client
            .get(&url)
            .basic_auth(&self.username, Some(&self.password))
            .query(&[("fields", JIRA_ISSUE_FIELDS)])
            .send()
            .await?;

        let issue: JiraIssue = Self::read_json(response).await?;
        issue.into_model()
    }

    /// Download one attachment's binary content.
    pub async fn download_attachment(&self, content_url: &str) -> MigrateResult<Vec<u8>> {
        let response = self
            .client
            .get(content_url)
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(MigrateError::JiraApi(format!(
                "HTTP {} downloading {}",
                response.status(),
                content_url
            )));
        }

        Ok(response.bytes().await?.to_vec())
    }

    async fn read_json<T: for<'de> Deserialize<'de>>(
        response: reqwest::Response,
    ) -> MigrateResult<T> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(MigrateError::JiraApi(format!("HTTP {}: {}", status, body)));
        }

        Ok(serde_json::from_str(&body)?)
    }
}

// Wire-side shapes of the Jira REST API, converted into the crate's own
// model before they leave this module.

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    issues: Vec<JiraIssue>,
}

#[derive(Debug, Deserialize)]
struct JiraIssue {
    key: String,
    fields: JiraFields,
}

#[derive(Debug, Deserialize)]
struct JiraFields {
    summary: String,
    description: Option<String>,
    status: Named,
    resolution: Option<Named>,
    issuetype: Named,
    creator: Option<NamedUser>,
    #[serde(rename = "fixVersions", default)]
    fix_versions: Vec<Named>,
    created: String,
    updated: String,
    comment: Option<CommentPage>,
    #[serde(default)]
    attachment: Vec<JiraAttachment>,
}

#[derive(Debug, Deserialize)]
struct Named {
    name: String,
}

#[derive(Debug, Deserialize)]
struct NamedUser {
    #[serde(rename = "displayName")]
    display_name: String,
}

#[derive(Debug, Deserialize)]
struct CommentPage {
    #[serde(default)]
    comments: Vec<JiraComment>,
}

#[derive(Debug, Deserialize)]
struct JiraComment {
    author: Option<NamedUser>,
    body: String,
    created: String,
}

#[derive(Debug, Deserialize)]
struct JiraAttachment {
    filename: String,
    content: String,
}

impl JiraIssue {
    fn into_model(self) -> MigrateResult<SourceIssue> {
        // Reject malformed keys here so replay ordering never sees one.
        issue_key_sequence(&self.key)?;

        let fields = self.fields;

        let comments = fields
            .comment
            .map(|page| page.comments)
            .unwrap_or_default()
            .into_iter()
            .map(|c| Comment {
                author: c
                    .author
                    .map(|a| a.display_name)
                    .unwrap_or_else(|| "Anonymous".to_string()),
                body: c.body,
                created: c.created,
            })
            .collect();

        let attachments = fields
            .attachment
            .into_iter()
            .map(|a| Attachment {
                filename: a.filename,
                content_url: a.content,
            })
            .collect();

        Ok(SourceIssue {
            key: self.key,
            summary: fields.summary,
            description: fields.description,
            status: fields.status.name,
            resolution: fields.resolution.map(|r| r.name),
            issue_type: fields.issuetype.name,
            creator: fields
                .creator
                .map(|c| c.display_name)
                .unwrap_or_else(|| "Anonymous".to_string()),
            fix_version: fields.fix_versions.into_iter().next().map(|v| v.name),
            created: fields.created,
            updated: fields.updated,
            comments,
            attachments,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ISSUE_JSON: &str = r#"{
        "key": "TW-42",
        "fields": {
            "summary": "Recurring tasks duplicate",
            "description": "See {{task add}} output",
            "status": {"name": "Resolved"},
            "resolution": {"name": "Fixed"},
            "issuetype": {"name": "Bug"},
            "creator": {"displayName": "Alice Example"},
            "fixVersions": [{"name": "2.4.0"}],
            "created": "2010-03-01T10:00:00.000+0000",
            "updated": "2010-04-01T10:00:00.000+0000",
            "comment": {
                "comments": [
                    {"author": {"displayName": "Bob"}, "body": "confirmed", "created": "2010-03-02T10:00:00.000+0000"}
                ]
            },
            "attachment": [
                {"filename": "trace.log", "content": "https://jira.example.org/secure/attachment/100/trace.log"}
            ]
        }
    }"#;

    #[test]
    fn test_wire_issue_converts_to_model() {
        let wire: JiraIssue = serde_json::from_str(ISSUE_JSON).unwrap();
        let issue = wire.into_model().unwrap();

        assert_eq!(issue.key, "TW-42");
        assert_eq!(issue.status, "Resolved");
        assert_eq!(issue.resolution.as_deref(), Some("Fixed"));
        assert_eq!(issue.issue_type, "Bug");
        assert_eq!(issue.creator, "Alice Example");
        assert_eq!(issue.fix_version.as_deref(), Some("2.4.0"));
        assert_eq!(issue.comments.len(), 1);
        assert_eq!(issue.comments[0].author, "Bob");
        assert_eq!(issue.attachments.len(), 1);
        assert_eq!(issue.attachments[0].filename, "trace.log");
    }

    #[test]
    fn test_sparse_fields_use_defaults() {
        let json = r#"{
            "key": "TW-7",
            "fields": {
                "summary": "No frills",
                "description": null,
                "status": {"name": "Open"},
                "resolution": null,
                "issuetype": {"name": "Task"},
                "creator": null,
                "created": "2011-01-01T00:00:00.000+0000",
                "updated": "2011-01-01T00:00:00.000+0000",
                "comment": null
            }
        }"#;

        let wire: JiraIssue = serde_json::from_str(json).unwrap();
        let issue = wire.into_model().unwrap();

        assert_eq!(issue.creator, "Anonymous");
        assert!(issue.fix_version.is_none());
        assert!(issue.comments.is_empty());
        assert!(issue.attachments.is_empty());
    }

    #[test]
    fn test_malformed_key_is_rejected() {
        let json = ISSUE_JSON.replacen("TW-42", "not a key", 1);
        let wire: JiraIssue = serde_json::from_str(&json).unwrap();
        assert!(wire.into_model().is_err());
    }
}
