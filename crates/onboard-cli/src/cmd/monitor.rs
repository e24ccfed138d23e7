use crate::output::{print_json, print_table};
use chrono::Utc;
use onboard_core::github::GithubClient;
use onboard_core::monitor::{run_monitor, OutcomeStatus};
use std::path::Path;

pub fn run(
    config_path: Option<&Path>,
    token: &str,
    repo_override: Option<&str>,
    check_all: bool,
    json: bool,
) -> anyhow::Result<()> {
    let mut config = crate::cmd::load_config(config_path)?;
    if let Some(repo) = repo_override {
        config.repo = repo.parse()?;
    }

    let tracker = GithubClient::new(token)?;
    let report = run_monitor(&tracker, &config, Utc::now(), check_all)?;

    if json {
        return print_json(&report);
    }

    if report.outcomes.is_empty() {
        println!("no onboarding issues found in {}", config.repo);
        return Ok(());
    }

    print_table(
        &["ISSUE", "PROJECT", "AGE", "RESULT"],
        report
            .outcomes
            .iter()
            .map(|o| {
                vec![
                    format!("#{}", o.number),
                    o.project.clone().unwrap_or_else(|| "-".to_string()),
                    format!("{}mo ({}d)", o.age.months, o.age.days),
                    describe(&o.status),
                ]
            })
            .collect(),
    );
    println!();
    println!("checked {}, applied {}", report.checked, report.applied());
    Ok(())
}

fn describe(status: &OutcomeStatus) -> String {
    match status {
        OutcomeStatus::NotOnboarding => "not an onboarding issue".to_string(),
        OutcomeStatus::NoAction => "no action needed".to_string(),
        OutcomeStatus::Skipped { reason } => format!("skipped ({reason})"),
        OutcomeStatus::Applied {
            label,
            action,
            health_issue,
        } => match health_issue {
            Some(n) => format!("{action} → {label}, health issue #{n}"),
            None => format!("{action} → {label}"),
        },
        OutcomeStatus::Failed { error } => format!("failed: {error}"),
    }
}
