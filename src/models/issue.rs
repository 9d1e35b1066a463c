use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants::BACKLOG_MILESTONE;
use crate::error::{MigrateError, MigrateResult};

lazy_static! {
    static ref KEY_RE: Regex = Regex::new(r"^[A-Z][A-Z0-9]*-(\d+)$").unwrap();
}

/// One issue as read from the source tracker, comments and attachment
/// metadata included.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SourceIssue {
    pub key: String,
    pub summary: String,
    pub description: Option<String>,
    pub status: String,
    pub resolution: Option<String>,
    pub issue_type: String,
    pub creator: String,
    pub fix_version: Option<String>,
    pub created: String,
    pub updated: String,
    pub comments: Vec<super::Comment>,
    pub attachments: Vec<Attachment>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Attachment {
    pub filename: String,
    pub content_url: String,
}

impl SourceIssue {
    /// Numeric suffix of the issue key. Keys are validated at ingest, so a
    /// malformed key never reaches this point.
    pub fn sequence(&self) -> u64 {
        issue_key_sequence(&self.key).unwrap_or(0)
    }

    /// Fix version name used for milestone lookup, falling back to the
    /// backlog sentinel when the issue has none.
    pub fn fix_version_or_backlog(&self) -> &str {
        self.fix_version.as_deref().unwrap_or(BACKLOG_MILESTONE)
    }
}

/// Parse the numeric suffix out of a `PROJECT-N` issue key.
pub fn issue_key_sequence(key: &str) -> MigrateResult<u64> {
    let caps = KEY_RE
        .captures(key)
        .ok_or_else(|| MigrateError::InvalidIssueKey(key.to_string()))?;
    caps[1]
        .parse::<u64>()
        .map_err(|_| MigrateError::InvalidIssueKey(key.to_string()))
}

/// Sort issues into replay order: strictly increasing numeric key suffix.
pub fn sort_by_key_sequence(issues: &mut [SourceIssue]) {
    issues.sort_by_key(|issue| issue.sequence());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(key: &str) -> SourceIssue {
        SourceIssue {
            key: key.to_string(),
            summary: "A bug".to_string(),
            description: None,
            status: "Open".to_string(),
            resolution: None,
            issue_type: "Bug".to_string(),
            creator: "alice".to_string(),
            fix_version: None,
            created: "2010-01-01T00:00:00.000+0000".to_string(),
            updated: "2010-01-02T00:00:00.000+0000".to_string(),
            comments: Vec::new(),
            attachments: Vec::new(),
        }
    }

    #[test]
    fn test_key_sequence_parsing() {
        assert_eq!(issue_key_sequence("TW-42").unwrap(), 42);
        assert_eq!(issue_key_sequence("PROJ2-1307").unwrap(), 1307);
    }

    #[test]
    fn test_key_sequence_rejects_malformed_keys() {
        assert!(issue_key_sequence("TW42").is_err());
        assert!(issue_key_sequence("TW-").is_err());
        assert!(issue_key_sequence("tw-42").is_err());
        assert!(issue_key_sequence("TW-42-1").is_err());
    }

    #[test]
    fn test_sort_is_numeric_not_lexicographic() {
        let mut issues = vec![issue("TW-100"), issue("TW-9"), issue("TW-1307"), issue("TW-20")];
        sort_by_key_sequence(&mut issues);

        let keys: Vec<&str> = issues.iter().map(|i| i.key.as_str()).collect();
        assert_eq!(keys, vec!["TW-9", "TW-20", "TW-100", "TW-1307"]);
    }

    #[test]
    fn test_fix_version_falls_back_to_backlog() {
        let mut i = issue("TW-1");
        assert_eq!(i.fix_version_or_backlog(), "Backlog");
        i.fix_version = Some("2.4.0".to_string());
        assert_eq!(i.fix_version_or_backlog(), "2.4.0");
    }
}
