use crate::output::{print_json, print_table};
use anyhow::bail;
use chrono::Utc;
use onboard_core::github::GithubClient;
use onboard_core::seed::{create_test_issues, seed_plan};
use onboard_core::tracker::RepoId;
use serde::Serialize;

#[derive(Serialize)]
struct SeedResult {
    repo: String,
    created: Vec<u64>,
}

pub fn run(repo: &str, token: Option<&str>, dry_run: bool, json: bool) -> anyhow::Result<()> {
    let repo: RepoId = repo.parse()?;
    let now = Utc::now();
    let plan = seed_plan(now);

    if !json {
        println!(
            "seeding {repo} with {} test issues ({})",
            plan.len(),
            if dry_run { "dry run" } else { "live" }
        );
        println!();
        print_table(
            &["TITLE", "AGE", "EXPECTED"],
            plan.iter()
                .map(|p| {
                    vec![
                        p.issue.title.clone(),
                        format!("{}d", p.days),
                        p.description.to_string(),
                    ]
                })
                .collect(),
        );
        println!();
    }

    if dry_run {
        if json {
            let titles: Vec<&str> = plan.iter().map(|p| p.issue.title.as_str()).collect();
            return print_json(&titles);
        }
        println!("dry run complete - no issues were created");
        return Ok(());
    }

    let Some(token) = token else {
        bail!("a GitHub token is required unless --dry-run is set");
    };

    let tracker = GithubClient::new(token)?;
    let created = create_test_issues(&tracker, &repo, now)?;

    if json {
        print_json(&SeedResult {
            repo: repo.to_string(),
            created,
        })?;
    } else {
        println!("created {} test issues", created.len());
        for number in created {
            println!("  #{number}");
        }
    }
    Ok(())
}
