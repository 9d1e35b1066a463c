use std::path::Path;
use std::time::Duration;

use clap::ArgMatches;
use colored::*;

use crate::cli_context::CliContext;
use crate::constants::{
    ATTACHMENT_DIR, JIRA_YEAR_END, JIRA_YEAR_START, MAX_RESULTS, RATE_LIMIT_DELAY_SECS,
};
use crate::error::{ErrorContext, MigrateError, MigrateResult};
use crate::filtering::year_windows;
use crate::logging::{get_log_file_path, log_debug, log_error, log_info};
use crate::migration::{archive_attachments, map_issue, provision_milestones, replay_issue};
use crate::models::sort_by_key_sequence;

pub async fn handle_migrate(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    handle_migrate_impl(matches).await.map_err(|e| Box::new(e) as Box<dyn std::error::Error>)
}

async fn handle_migrate_impl(matches: &ArgMatches) -> MigrateResult<()> {
    let project = matches.get_one::<String>("project")
        .ok_or_else(|| MigrateError::InvalidInput("Project key is required".to_string()))?;
    let repository = matches.get_one::<String>("repository")
        .ok_or_else(|| MigrateError::InvalidInput("Target repository is required".to_string()))?;

    let from_year = parse_arg(matches, "from-year", JIRA_YEAR_START)?;
    let to_year = parse_arg(matches, "to-year", JIRA_YEAR_END)?;
    let max_results = parse_arg(matches, "max-results", MAX_RESULTS)?;
    let delay_secs = parse_arg(matches, "delay", RATE_LIMIT_DELAY_SECS)?;
    let attachments_dir = matches.get_one::<String>("attachments-dir")
        .map(|s| s.as_str())
        .unwrap_or(ATTACHMENT_DIR);

    if from_year > to_year {
        return Err(MigrateError::InvalidInput(format!(
            "--from-year {} is after --to-year {}",
            from_year, to_year
        )));
    }

    let delay = Duration::from_secs(delay_secs);

    let mut context = CliContext::load();
    let jira = context.jira_client().context("Failed to build Jira client")?;
    let github = context.github_client(repository)?;

    println!("Fetching list of matching issues...");
    let mut issues = Vec::new();
    for filter in year_windows(project, from_year, to_year) {
        log_debug(&format!("Searching: {}", filter.to_jql()));
        let batch = jira.search_issues(&filter, max_results).await?;
        issues.extend(batch);
    }
    sort_by_key_sequence(&mut issues);

    if issues.is_empty() {
        println!("No issues match project {} in {}..{}.", project, from_year, to_year);
        return Ok(());
    }

    println!(
        "Migrating {} issues from {} to {}.",
        issues.len().to_string().bold(),
        project,
        github.repository()
    );
    log_info(&format!(
        "Migrating {} issues from {} to {}",
        issues.len(),
        project,
        github.repository()
    ));

    println!("Provisioning milestones...");
    let milestones = provision_milestones(&github, &issues, delay).await?;
    println!("Provisioned {} milestones.", milestones.len());

    // Every fix version must resolve before the first create call.
    let mut mapped = Vec::with_capacity(issues.len());
    for issue in &issues {
        mapped.push(map_issue(issue, &milestones)?);
    }

    let mut migrated = 0usize;
    let mut failed = 0usize;

    for (issue, (payload, comments)) in issues.iter().zip(mapped.iter()) {
        println!("{}", issue.key.bold());

        match archive_attachments(&jira, issue, Path::new(attachments_dir)).await {
            Ok(0) => {}
            Ok(written) => println!("  Archived {} attachment(s)", written),
            Err(e) => log_error(&format!("Attachment archiving failed for {}: {}", issue.key, e)),
        }

        if replay_issue(&github, issue, payload, comments, delay).await {
            migrated += 1;
        } else {
            failed += 1;
        }
    }

    println!();
    if failed == 0 {
        println!("{} Migrated {} issues.", "Done.".green().bold(), migrated);
    } else {
        println!(
            "{} Migrated {} issues, {} failed.",
            "Done with failures.".yellow().bold(),
            migrated,
            failed.to_string().red()
        );
        if let Some(path) = get_log_file_path() {
            println!("Responses are logged in {}", path.display());
        }
    }

    Ok(())
}

fn parse_arg<T: std::str::FromStr>(matches: &ArgMatches, name: &str, default: T) -> MigrateResult<T> {
    match matches.get_one::<String>(name) {
        Some(raw) => raw.parse::<T>().map_err(|_| {
            MigrateError::InvalidInput(format!("Invalid value '{}' for --{}", raw, name))
        }),
        None => Ok(default),
    }
}
