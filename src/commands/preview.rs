use clap::ArgMatches;
use colored::*;

use crate::cli_context::CliContext;
use crate::error::{MigrateError, MigrateResult};
use crate::migration::{map_issue, meta_comment};
use crate::models::MilestoneMap;

pub async fn handle_preview(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    handle_preview_impl(matches).await.map_err(|e| Box::new(e) as Box<dyn std::error::Error>)
}

/// Show how one issue would land on the target tracker, without writing
/// anything anywhere.
async fn handle_preview_impl(matches: &ArgMatches) -> MigrateResult<()> {
    let key = matches.get_one::<String>("key")
        .ok_or_else(|| MigrateError::InvalidInput("Issue key is required".to_string()))?;

    let mut context = CliContext::load();
    let jira = context.jira_client()?;

    let issue = jira.get_issue(key).await?;

    // Stand-in map; no milestone exists yet before a real run.
    let mut milestones = MilestoneMap::new();
    milestones.insert(issue.fix_version_or_backlog().to_string(), 0);

    let (payload, comments) = map_issue(&issue, &milestones)?;

    println!("{}", payload.title.bold());
    println!("{}", "─".repeat(payload.title.len().min(80)));
    println!("{}: {}", "State".bold(), if payload.closed { "closed".red() } else { "open".green() });
    println!("{}: {}", "Labels".bold(), payload.labels.join(", "));
    println!("{}: {}", "Milestone".bold(), issue.fix_version_or_backlog());
    println!();
    println!("{}", payload.body);
    println!();
    println!("{}", format!("Metadata comment + {} comment(s) would be posted:", comments.len()).dimmed());
    println!("{}", meta_comment(&issue).body.dimmed());

    if !issue.attachments.is_empty() {
        println!();
        println!("{}", format!("{} attachment(s) would be archived locally:", issue.attachments.len()).dimmed());
        for attachment in &issue.attachments {
            println!("  {}_{}", issue.key, attachment.filename);
        }
    }

    Ok(())
}
