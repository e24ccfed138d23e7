use crate::output::print_json;
use onboard_core::github::GithubClient;
use onboard_core::onboarding::{comment_and_close, create_onboarding_issue};
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct OnboardResult {
    project: String,
    vote_issue: u64,
    onboarding_issue: u64,
}

pub fn run(
    config_path: Option<&Path>,
    project: &str,
    vote_issue: u64,
    token: &str,
    repo_override: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let mut config = crate::cmd::load_config(config_path)?;
    if let Some(repo) = repo_override {
        config.repo = repo.parse()?;
    }

    let tracker = GithubClient::new(token)?;
    let onboarding_issue = create_onboarding_issue(&tracker, &config, project, vote_issue)?;
    comment_and_close(&tracker, &config.repo, vote_issue, onboarding_issue, project)?;

    if json {
        print_json(&OnboardResult {
            project: project.to_string(),
            vote_issue,
            onboarding_issue,
        })?;
    } else {
        println!("created onboarding issue #{onboarding_issue} for '{project}'");
        println!("  vote issue #{vote_issue} congratulated and closed");
    }
    Ok(())
}
