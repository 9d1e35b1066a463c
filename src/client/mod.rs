pub mod github;
pub mod jira;

pub use github::GithubClient;
pub use jira::JiraClient;
