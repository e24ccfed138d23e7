//! Monitoring pass over open onboarding issues.
//!
//! One-way flow: list issues → age → classify → skip gate → label + comment
//! + action extra. Issues are processed independently; a failure on one is
//! logged and recorded, never fatal to the batch. Only the initial listing
//! aborts the run.

use crate::age::IssueAge;
use crate::config::MonitorConfig;
use crate::error::Result;
use crate::health::{health_issue_body, health_issue_title};
use crate::issue::IssueRecord;
use crate::message::{health_link_comment, progress_comment};
use crate::progress::classify;
use crate::skip::{skip_reason, SkipReason};
use crate::tracker::{IssueState, IssueTracker, NewIssue};
use crate::types::{Action, Label};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Report types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorReport {
    pub checked: usize,
    pub outcomes: Vec<IssueOutcome>,
}

impl MonitorReport {
    /// Count of issues that had side effects applied this run.
    pub fn applied(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, OutcomeStatus::Applied { .. }))
            .count()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueOutcome {
    pub number: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    pub age: IssueAge,
    #[serde(flatten)]
    pub status: OutcomeStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum OutcomeStatus {
    /// Title does not match the onboarding contract.
    NotOnboarding,
    /// Under three months old; nothing to do.
    NoAction,
    Skipped {
        reason: SkipReason,
    },
    Applied {
        label: Label,
        action: Action,
        #[serde(skip_serializing_if = "Option::is_none")]
        health_issue: Option<u64>,
    },
    Failed {
        error: String,
    },
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Run one monitoring pass. `check_all` disables the label-based skip gate
/// (initial rollout); `now` is injected so the whole pass is reproducible.
pub fn run_monitor(
    tracker: &dyn IssueTracker,
    config: &MonitorConfig,
    now: DateTime<Utc>,
    check_all: bool,
) -> Result<MonitorReport> {
    let labels: Vec<&str> = config.onboarding_labels.iter().map(String::as_str).collect();
    let issues = tracker.list_open_issues(&config.repo, &labels)?;
    tracing::info!(
        count = issues.len(),
        check_all,
        repo = %config.repo,
        "checking onboarding issues"
    );

    let mut outcomes = Vec::with_capacity(issues.len());
    for issue in &issues {
        let age = IssueAge::since(issue.created_at, now);
        let project = issue.project_name();
        let status = match &project {
            None => {
                tracing::info!(issue = issue.number, "skipping - not an onboarding issue");
                OutcomeStatus::NotOnboarding
            }
            Some(name) => match process_issue(tracker, config, issue, name, age, now, check_all) {
                Ok(status) => status,
                Err(e) => {
                    tracing::warn!(issue = issue.number, error = %e, "failed to process issue");
                    OutcomeStatus::Failed {
                        error: e.to_string(),
                    }
                }
            },
        };
        outcomes.push(IssueOutcome {
            number: issue.number,
            project,
            age,
            status,
        });
    }

    let report = MonitorReport {
        checked: issues.len(),
        outcomes,
    };
    tracing::info!(
        checked = report.checked,
        applied = report.applied(),
        "monitoring pass complete"
    );
    Ok(report)
}

// ---------------------------------------------------------------------------
// Per-issue processing
// ---------------------------------------------------------------------------

fn process_issue(
    tracker: &dyn IssueTracker,
    config: &MonitorConfig,
    issue: &IssueRecord,
    project: &str,
    age: IssueAge,
    now: DateTime<Utc>,
    check_all: bool,
) -> Result<OutcomeStatus> {
    tracing::info!(
        issue = issue.number,
        project,
        months = age.months,
        weeks = age.weeks,
        days = age.days,
        "processing onboarding issue"
    );

    let Some(decision) = classify(age) else {
        return Ok(OutcomeStatus::NoAction);
    };

    if let Some(reason) = skip_reason(issue, &decision, now, check_all) {
        tracing::info!(issue = issue.number, %reason, "skipping");
        return Ok(OutcomeStatus::Skipped { reason });
    }

    tracker.add_labels(&config.repo, issue.number, &[decision.label.as_str()])?;
    let comment = progress_comment(age, &decision, project);
    tracker.create_comment(&config.repo, issue.number, &comment)?;

    let mut health_issue = None;
    match decision.action {
        Action::CreateHealthIssue => {
            health_issue = create_health_issue(tracker, config, project, issue.number);
            if let Some(number) = health_issue {
                let link = health_link_comment(&config.health_repo, number);
                tracker.create_comment(&config.repo, issue.number, &link)?;
            }
        }
        Action::TagTeams => {
            tracker.add_assignees(&config.repo, issue.number, &config.escalation_assignees)?;
        }
        Action::Archive => {
            tracker.update_state(&config.repo, issue.number, IssueState::Closed)?;
            tracing::info!(issue = issue.number, "closed onboarding issue");
        }
        Action::Comment | Action::WeeklyWarning | Action::DailyWarning => {}
    }

    Ok(OutcomeStatus::Applied {
        label: decision.label,
        action: decision.action,
        health_issue,
    })
}

/// File the escalation report in the health repository. Failure is logged
/// and absorbed: the onboarding issue keeps the label and comment already
/// applied, and the rest of the batch proceeds.
fn create_health_issue(
    tracker: &dyn IssueTracker,
    config: &MonitorConfig,
    project: &str,
    onboarding_issue: u64,
) -> Option<u64> {
    let request = NewIssue {
        title: health_issue_title(project),
        body: health_issue_body(project, &config.repo, onboarding_issue),
        labels: config.health_labels.clone(),
        assignees: config.health_assignees.clone(),
    };
    match tracker.create_issue(&config.health_repo, &request) {
        Ok(number) => {
            tracing::info!(health_issue = number, repo = %config.health_repo, "created health issue");
            Some(number)
        }
        Err(e) => {
            tracing::warn!(project, error = %e, "failed to create health issue");
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
