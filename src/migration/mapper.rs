use crate::constants::CLOSED_STATUSES;
use crate::error::MigrateResult;
use crate::formatting::attribute;
use crate::models::{CommentPayload, IssuePayload, MilestoneMap, SourceIssue};

/// Map one source issue into its target creation payload plus the ordered
/// comment payloads. Pure; the milestone map must already cover every fix
/// version, an absent entry is a precondition violation.
pub fn map_issue(
    issue: &SourceIssue,
    milestones: &MilestoneMap,
) -> MigrateResult<(IssuePayload, Vec<CommentPayload>)> {
    let milestone = milestones.resolve(issue.fix_version_or_backlog())?;

    let mut labels = vec![issue.issue_type.to_lowercase()];
    if let Some(resolution) = &issue.resolution {
        labels.push(resolution.to_lowercase());
    }

    let payload = IssuePayload {
        title: format!("[{}] {}", issue.key, issue.summary),
        body: attribute(&issue.creator, issue.description.as_deref().unwrap_or("")),
        labels,
        milestone: Some(milestone),
        closed: CLOSED_STATUSES.contains(&issue.status.as_str()),
    };

    let comments = issue
        .comments
        .iter()
        .map(|comment| CommentPayload {
            body: attribute(&comment.author, &comment.body),
        })
        .collect();

    Ok((payload, comments))
}

/// Synthetic comment recording the source-side timestamps; posted before any
/// real comment so every migrated issue can be traced back.
pub fn meta_comment(issue: &SourceIssue) -> CommentPayload {
    CommentPayload {
        body: format!(
            "_Issue metadata_\n\n- Created: {}\n- Updated: {}",
            issue.created, issue.updated
        ),
    }
}
