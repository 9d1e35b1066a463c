use clap::ArgMatches;
use crate::config::{load_config, save_config};

pub async fn handle_auth(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = load_config();
    let mut updated = false;

    if let Some(url) = matches.get_one::<String>("jira-url") {
        config.jira_url = Some(url.clone());
        updated = true;
    }
    if let Some(user) = matches.get_one::<String>("jira-user") {
        config.jira_username = Some(user.clone());
        updated = true;
    }
    if let Some(password) = matches.get_one::<String>("jira-password") {
        config.jira_password = Some(password.clone());
        updated = true;
    }
    if let Some(user) = matches.get_one::<String>("github-user") {
        config.github_username = Some(user.clone());
        updated = true;
    }
    if let Some(token) = matches.get_one::<String>("github-token") {
        config.github_token = Some(token.clone());
        updated = true;
    }

    if updated {
        save_config(&config)?;
        println!("Credentials saved successfully!");
    } else if matches.get_flag("show") {
        println!("Jira URL:        {}", config.jira_url.as_deref().unwrap_or("(not set)"));
        println!("Jira user:       {}", config.jira_username.as_deref().unwrap_or("(not set)"));
        println!("Jira password:   {}", mask(config.jira_password.as_deref()));
        println!("GitHub user:     {}", config.github_username.as_deref().unwrap_or("(not set)"));
        println!("GitHub token:    {}", mask(config.github_token.as_deref()));
    } else {
        println!("Usage: jira2gh auth --jira-url <URL> --jira-user <USER> ... or jira2gh auth --show");
    }

    Ok(())
}

fn mask(secret: Option<&str>) -> String {
    match secret {
        None => "(not set)".to_string(),
        Some(s) if s.len() <= 4 => "****".to_string(),
        Some(s) => format!("****{}", &s[s.len() - 4..]),
    }
}
