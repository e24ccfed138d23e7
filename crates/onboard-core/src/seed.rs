//! Synthetic onboarding issues for exercising the monitor in a scratch
//! repository.
//!
//! The tracker does not allow backdating, so each issue states its simulated
//! age in the body; pair with the monitor's injected `now` to shift ages
//! when testing end to end.

use crate::error::Result;
use crate::issue::onboarding_title;
use crate::tracker::{IssueTracker, NewIssue, RepoId};
use chrono::{DateTime, Duration, Utc};

pub struct Scenario {
    pub name: &'static str,
    pub days: i64,
    pub description: &'static str,
}

/// One scenario per monitor milestone, youngest first.
pub const SCENARIOS: &[Scenario] = &[
    Scenario {
        name: "Fresh (1 day)",
        days: 1,
        description: "Just created - should not trigger any actions",
    },
    Scenario {
        name: "New (30 days)",
        days: 30,
        description: "1 month old - still under the three-month threshold",
    },
    Scenario {
        name: "Stale (180 days)",
        days: 180,
        description: "6 months old - should trigger stale label",
    },
    Scenario {
        name: "Warning (270 days)",
        days: 270,
        description: "9 months old - should trigger warning label",
    },
    Scenario {
        name: "Critical (305 days)",
        days: 305,
        description: "10 months old - should create health issue",
    },
    Scenario {
        name: "Urgent (335 days)",
        days: 335,
        description: "11 months old - should trigger weekly warnings",
    },
    Scenario {
        name: "Archival (365 days)",
        days: 365,
        description: "12 months old - should trigger archival",
    },
];

const TEST_PROJECTS: &[&str] = &[
    "Test Project Alpha",
    "Test Project Beta",
    "Test Project Gamma",
    "Test Project Delta",
    "Test Project Epsilon",
];

fn project_name(index: usize) -> String {
    match TEST_PROJECTS.get(index) {
        Some(name) => (*name).to_string(),
        None => format!("Test Project {}", (b'A' + index as u8) as char),
    }
}

/// A planned test issue plus the scenario it exercises.
pub struct SeedIssue {
    pub issue: NewIssue,
    pub days: i64,
    pub description: &'static str,
}

/// Build the full set of test issues without creating anything.
pub fn seed_plan(now: DateTime<Utc>) -> Vec<SeedIssue> {
    SCENARIOS
        .iter()
        .enumerate()
        .map(|(i, scenario)| {
            let project = project_name(i);
            let simulated_created = now - Duration::days(scenario.days);
            let body = format!(
                "# Test Onboarding Issue\n\n\
                 This is a **test issue** created by the seed command to test the onboarding monitor.\n\n\
                 ## Test Scenario: {name}\n\
                 - **Simulated Age:** {days} days ({months} months)\n\
                 - **Expected Action:** {description}\n\
                 - **Created:** {created}\n\n\
                 ## Test Checklist\n\n\
                 - [ ] Test task 1\n\
                 - [ ] Test task 2\n\
                 - [ ] Test task 3\n\
                 - [ ] Test task 4\n\
                 - [ ] Test task 5\n\n\
                 ## Notes\n\n\
                 - This issue was created for testing purposes\n\
                 - It simulates an onboarding issue that is {days} days old\n\
                 - The onboarding monitor should process this issue according to its age\n\
                 - You can safely delete this issue after testing\n\n\
                 ---\n\n\
                 *Created by the onboard seed command on {now}*",
                name = scenario.name,
                days = scenario.days,
                months = scenario.days / 30,
                description = scenario.description,
                created = simulated_created.to_rfc3339(),
                now = now.to_rfc3339(),
            );
            SeedIssue {
                issue: NewIssue {
                    title: onboarding_title(&project),
                    body,
                    labels: vec![
                        "project onboarding".to_string(),
                        "sandbox".to_string(),
                        "test".to_string(),
                    ],
                    assignees: Vec::new(),
                },
                days: scenario.days,
                description: scenario.description,
            }
        })
        .collect()
}

/// Create the planned issues one at a time. A failure on one issue is logged
/// and the rest are still attempted; returns the numbers actually created.
pub fn create_test_issues(
    tracker: &dyn IssueTracker,
    repo: &RepoId,
    now: DateTime<Utc>,
) -> Result<Vec<u64>> {
    let mut created = Vec::new();
    for planned in seed_plan(now) {
        match tracker.create_issue(repo, &planned.issue) {
            Ok(number) => {
                tracing::info!(issue = number, title = %planned.issue.title, "created test issue");
                created.push(number);
            }
            Err(e) => {
                tracing::warn!(title = %planned.issue.title, error = %e, "failed to create test issue");
            }
        }
    }
    Ok(created)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
