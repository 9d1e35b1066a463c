pub const GITHUB_API_URL: &str = "https://api.github.com";
pub const CONFIG_FILE: &str = ".jira2gh-config.json";

// Jira search windows are one calendar year wide. The source project dates
// back to 2008; anything newer than the upper bound is picked up by raising
// --to-year on the command line.
pub const JIRA_YEAR_START: i32 = 2008;
pub const JIRA_YEAR_END: i32 = 2018;

// Per-window result cap passed to the Jira search endpoint.
pub const MAX_RESULTS: u32 = 5000;

// Seconds slept after every network call against GitHub. Blunt throttle to
// stay under the secondary rate limit; no header-driven backoff.
pub const RATE_LIMIT_DELAY_SECS: u64 = 12;

// Directory attachments are archived under, relative to the working dir.
pub const ATTACHMENT_DIR: &str = "attachments";

// Milestone assigned to issues carrying no fix version.
pub const BACKLOG_MILESTONE: &str = "Backlog";

// Jira statuses that map to a closed GitHub issue. Exact, case-sensitive.
pub const CLOSED_STATUSES: &[&str] = &["Resolved", "Closed", "Done"];

// Jira markup delimiters rewritten to their GitHub Markdown equivalents.
// Each pair is applied exactly once, in table order; no output of one entry
// forms the input of another.
pub const MARKUP_REPLACEMENTS: &[(&str, &str)] = &[
    ("{noformat}", "```"),
    ("{quote}", "\n> "),
    ("{code}", "```"),
    ("{{", "`"),
    ("}}", "`"),
];

// Field set requested from the Jira search and issue endpoints.
pub const JIRA_ISSUE_FIELDS: &str =
    "summary,description,status,resolution,issuetype,creator,fixVersions,created,updated,comment,attachment";
