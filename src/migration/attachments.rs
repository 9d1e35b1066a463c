use std::fs;
use std::path::{Path, PathBuf};

use crate::client::JiraClient;
use crate::error::MigrateResult;
use crate::logging::{log_error, log_info};
use crate::models::SourceIssue;

/// Local path an attachment is archived under: `{dir}/{issue_key}_{filename}`.
pub fn attachment_path(storage_dir: &Path, issue_key: &str, filename: &str) -> PathBuf {
    storage_dir.join(format!("{}_{}", issue_key, filename))
}

/// Write every attachment of one issue to local disk. Attachments are only
/// preserved locally, never uploaded to the target tracker. A failed
/// download or write skips that attachment; the issue itself still migrates.
pub async fn archive_attachments(
    jira: &JiraClient,
    issue: &SourceIssue,
    storage_dir: &Path,
) -> MigrateResult<usize> {
    if issue.attachments.is_empty() {
        return Ok(0);
    }

    fs::create_dir_all(storage_dir)?;

    let mut written = 0;
    for attachment in &issue.attachments {
        let path = attachment_path(storage_dir, &issue.key, &attachment.filename);

        let content = match jira.download_attachment(&attachment.content_url).await {
            Ok(content) => content,
            Err(e) => {
                log_error(&format!(
                    "Failed to download attachment '{}' of {}: {}",
                    attachment.filename, issue.key, e
                ));
                continue;
            }
        };

        match fs::write(&path, content) {
            Ok(()) => {
                log_info(&format!("Archived {}", path.display()));
                written += 1;
            }
            Err(e) => {
                log_error(&format!("Failed to write {}: {}", path.display(), e));
            }
        }
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attachment_path_is_key_prefixed() {
        let path = attachment_path(Path::new("attachments"), "TW-42", "trace.log");
        assert_eq!(path, PathBuf::from("attachments/TW-42_trace.log"));
    }
}
