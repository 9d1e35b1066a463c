use std::process;

use clap::{Arg, ArgAction, Command};

use jira2gh_cli::commands::{handle_auth, handle_migrate, handle_preview};
use jira2gh_cli::logging::init_logging;

#[tokio::main]
async fn main() {
    if let Err(e) = init_logging() {
        eprintln!("Warning: could not initialize logging: {}", e);
    }

    let app = Command::new("jira2gh")
        .about("Migrate Jira issues to GitHub")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("auth")
                .about("Store tracker credentials")
                .arg(
                    Arg::new("jira-url")
                        .long("jira-url")
                        .value_name("URL")
                        .help("Base URL of the Jira instance"),
                )
                .arg(
                    Arg::new("jira-user")
                        .long("jira-user")
                        .value_name("USER")
                        .help("Jira username"),
                )
                .arg(
                    Arg::new("jira-password")
                        .long("jira-password")
                        .value_name("PASSWORD")
                        .help("Jira password or API token"),
                )
                .arg(
                    Arg::new("github-user")
                        .long("github-user")
                        .value_name("USER")
                        .help("GitHub username"),
                )
                .arg(
                    Arg::new("github-token")
                        .long("github-token")
                        .value_name("TOKEN")
                        .help("GitHub personal access token"),
                )
                .arg(
                    Arg::new("show")
                        .long("show")
                        .action(ArgAction::SetTrue)
                        .help("Show the stored credentials (secrets masked)"),
                ),
        )
        .subcommand(
            Command::new("migrate")
                .about("Migrate all matching issues to a GitHub repository")
                .long_about(
                    "Migrate all matching issues to a GitHub repository.\n\n\
                     Issues are fetched in one-year windows, sorted by numeric key \
                     suffix and replayed one by one: create, set state, post the \
                     metadata comment, post every source comment. A fixed delay \
                     follows every call to stay under the secondary rate limit.\n\n\
                     Runs are not resumable: an interrupted run recreates \
                     already-migrated issues when restarted.",
                )
                .arg(
                    Arg::new("project")
                        .value_name("PROJECT")
                        .help("Source project key (e.g. TW)")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("repository")
                        .value_name("ORG/REPO")
                        .help("Target repository in 'org/repo' form")
                        .required(true)
                        .index(2),
                )
                .arg(
                    Arg::new("from-year")
                        .long("from-year")
                        .value_name("YEAR")
                        .help("First creation year to fetch (default 2008)"),
                )
                .arg(
                    Arg::new("to-year")
                        .long("to-year")
                        .value_name("YEAR")
                        .help("Last creation year to fetch (default 2018)"),
                )
                .arg(
                    Arg::new("max-results")
                        .long("max-results")
                        .value_name("N")
                        .help("Result cap per one-year search window (default 5000)"),
                )
                .arg(
                    Arg::new("delay")
                        .long("delay")
                        .value_name("SECONDS")
                        .help("Sleep after every network call (default 12)"),
                )
                .arg(
                    Arg::new("attachments-dir")
                        .long("attachments-dir")
                        .value_name("DIR")
                        .help("Directory attachments are archived under (default 'attachments')"),
                ),
        )
        .subcommand(
            Command::new("preview")
                .about("Show how one issue would be migrated, without writing")
                .arg(
                    Arg::new("key")
                        .value_name("ISSUE-KEY")
                        .help("Issue key (e.g. TW-42)")
                        .required(true)
                        .index(1),
                ),
        );

    let matches = app.get_matches();

    let result = match matches.subcommand() {
        Some(("auth", sub_matches)) => handle_auth(sub_matches).await,
        Some(("migrate", sub_matches)) => handle_migrate(sub_matches).await,
        Some(("preview", sub_matches)) => handle_preview(sub_matches).await,
        _ => {
            eprintln!("Unknown command. Use 'jira2gh --help' for available commands.");
            process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
