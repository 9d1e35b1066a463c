use std::collections::BTreeSet;
use std::time::Duration;

use crate::client::GithubClient;
use crate::error::MigrateResult;
use crate::logging::{log_error, log_info};
use crate::models::{MilestoneMap, SourceIssue};

/// Distinct fix-version names across the issue set, the backlog sentinel
/// included whenever any issue lacks one. BTreeSet gives the provisioner a
/// deterministic (lexicographic) creation order.
pub fn distinct_fix_versions(issues: &[SourceIssue]) -> BTreeSet<String> {
    issues
        .iter()
        .map(|issue| issue.fix_version_or_backlog().to_string())
        .collect()
}

/// Create one target milestone per distinct fix version and return the
/// completed name-to-number map. A failed creation aborts the run: replaying
/// issues against a partial map would only defer the failure to lookup time.
pub async fn provision_milestones(
    github: &GithubClient,
    issues: &[SourceIssue],
    delay: Duration,
) -> MigrateResult<MilestoneMap> {
    let names = distinct_fix_versions(issues);
    let mut map = MilestoneMap::new();

    for name in names {
        match github.create_milestone(&name).await {
            Ok(number) => {
                log_info(&format!("Created milestone '{}' as #{}", name, number));
                map.insert(name, number);
            }
            Err(e) => {
                log_error(&format!("Failed to create milestone '{}': {}", name, e));
                return Err(e);
            }
        }
        tokio::time::sleep(delay).await;
    }

    Ok(map)
}
