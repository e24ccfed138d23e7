//! Issue snapshots as handed to the decision core.
//!
//! The tracker owns these records; the core only reads them. Label state is
//! part of the snapshot so the skip policy stays a pure function of its
//! inputs.

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Title prefix marking an issue as an onboarding task list.
pub const ONBOARDING_TITLE_PREFIX: &str = "[PROJECT ONBOARDING]";

static TITLE_RE: OnceLock<Regex> = OnceLock::new();

fn title_re() -> &'static Regex {
    TITLE_RE.get_or_init(|| Regex::new(r"^\[PROJECT ONBOARDING\]\s*(.+)$").unwrap())
}

/// Read-only snapshot of a tracker issue taken at the start of a pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueRecord {
    pub number: u64,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Total comment count as reported by the tracker.
    #[serde(default)]
    pub comments: u32,
    #[serde(default)]
    pub labels: Vec<String>,
}

impl IssueRecord {
    /// Project name parsed from the onboarding title contract, or `None`
    /// when the issue is not an onboarding issue.
    pub fn project_name(&self) -> Option<String> {
        title_re()
            .captures(&self.title)
            .map(|caps| caps[1].trim().to_string())
    }

    /// Most recent activity: the last comment when any exist, otherwise the
    /// creation time.
    pub fn last_activity(&self) -> DateTime<Utc> {
        if self.comments > 0 {
            self.updated_at
        } else {
            self.created_at
        }
    }

    pub fn has_label(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }
}

/// Onboarding issue title for a project.
pub fn onboarding_title(project: &str) -> String {
    format!("{ONBOARDING_TITLE_PREFIX} {project}")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str) -> IssueRecord {
        IssueRecord {
            number: 1,
            title: title.to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            comments: 0,
            labels: Vec::new(),
        }
    }

    #[test]
    fn parses_project_name_from_title() {
        let issue = record("[PROJECT ONBOARDING] Kuberhealthy");
        assert_eq!(issue.project_name().as_deref(), Some("Kuberhealthy"));
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let issue = record("[PROJECT ONBOARDING]   my-project  ");
        assert_eq!(issue.project_name().as_deref(), Some("my-project"));
    }

    #[test]
    fn non_onboarding_titles_yield_none() {
        assert_eq!(record("Fix flaky CI job").project_name(), None);
        assert_eq!(record("[HEALTH]: foo - stalled").project_name(), None);
        // The prefix must be at the start of the title.
        assert_eq!(
            record("re: [PROJECT ONBOARDING] foo").project_name(),
            None
        );
    }

    #[test]
    fn prefix_alone_is_not_an_onboarding_issue() {
        assert_eq!(record("[PROJECT ONBOARDING]").project_name(), None);
    }

    #[test]
    fn last_activity_falls_back_to_creation() {
        let created = Utc::now() - chrono::Duration::days(100);
        let updated = Utc::now();
        let mut issue = record("[PROJECT ONBOARDING] x");
        issue.created_at = created;
        issue.updated_at = updated;

        assert_eq!(issue.last_activity(), created);
        issue.comments = 2;
        assert_eq!(issue.last_activity(), updated);
    }

    #[test]
    fn onboarding_title_roundtrips_through_parser() {
        let issue = record(&onboarding_title("Test Project Alpha"));
        assert_eq!(issue.project_name().as_deref(), Some("Test Project Alpha"));
    }
}
