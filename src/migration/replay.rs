use std::time::Duration;

use colored::*;

use crate::client::GithubClient;
use crate::formatting::truncate;
use crate::logging::{log_error, log_info};
use crate::migration::mapper::meta_comment;
use crate::models::{CommentPayload, IssuePayload, SourceIssue};

const LOGGED_BODY_LEN: usize = 400;

/// Replay one mapped issue against the target tracker: create, patch the
/// open/closed state, post the metadata comment, then every real comment in
/// order. Sleeps `delay` after every network call. Returns whether the
/// target issue was created; a create failure abandons the remaining steps
/// for this issue only.
pub async fn replay_issue(
    github: &GithubClient,
    issue: &SourceIssue,
    payload: &IssuePayload,
    comments: &[CommentPayload],
    delay: Duration,
) -> bool {
    let number = match github.create_issue(payload).await {
        Ok(number) => {
            println!("  {} {}", "Created:".green(), payload.title);
            log_info(&format!("Created '{}' as #{}", payload.title, number));
            tokio::time::sleep(delay).await;
            number
        }
        Err(e) => {
            println!("  {} {}", "Could not create:".red(), payload.title);
            log_error(&format!(
                "Could not create '{}': {}",
                payload.title,
                truncate(&e.to_string(), LOGGED_BODY_LEN)
            ));
            tokio::time::sleep(delay).await;
            return false;
        }
    };

    // Issue existence matters more than its state flag, so a failed patch is
    // logged and the replay moves on.
    if let Err(e) = github.set_issue_state(number, payload.closed).await {
        log_error(&format!(
            "Could not set state of #{} ('{}'): {}",
            number,
            payload.title,
            truncate(&e.to_string(), LOGGED_BODY_LEN)
        ));
    }
    tokio::time::sleep(delay).await;

    if let Err(e) = github.create_comment(number, &meta_comment(issue)).await {
        log_error(&format!(
            "Could not post metadata comment on #{} ('{}'): {}",
            number,
            payload.title,
            truncate(&e.to_string(), LOGGED_BODY_LEN)
        ));
    }
    tokio::time::sleep(delay).await;

    for (index, comment) in comments.iter().enumerate() {
        if let Err(e) = github.create_comment(number, comment).await {
            log_error(&format!(
                "Could not post comment {} on #{} ('{}'): {}",
                index,
                number,
                payload.title,
                truncate(&e.to_string(), LOGGED_BODY_LEN)
            ));
        }
        tokio::time::sleep(delay).await;
    }

    true
}
