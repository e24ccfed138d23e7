use serde::{Deserialize, Serialize};
use std::fmt;

/// Labels every onboarding issue carries; the monitor lists open issues by
/// this pair.
pub const ONBOARDING_SEARCH_LABELS: &[&str] = &["project onboarding", "sandbox"];

// ---------------------------------------------------------------------------
// Action
// ---------------------------------------------------------------------------

/// Side effect the monitor takes once an issue crosses an age milestone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Comment,
    TagTeams,
    CreateHealthIssue,
    WeeklyWarning,
    DailyWarning,
    Archive,
}

impl Action {
    pub fn all() -> &'static [Action] {
        &[
            Action::Comment,
            Action::TagTeams,
            Action::CreateHealthIssue,
            Action::WeeklyWarning,
            Action::DailyWarning,
            Action::Archive,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Action::Comment => "comment",
            Action::TagTeams => "tag_teams",
            Action::CreateHealthIssue => "create_health_issue",
            Action::WeeklyWarning => "weekly_warning",
            Action::DailyWarning => "daily_warning",
            Action::Archive => "archive",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Label
// ---------------------------------------------------------------------------

/// Progress labels the monitor applies. One per milestone; the label doubles
/// as the "already handled" marker for the skip policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Label {
    Incomplete,
    Stale,
    Warning,
    ApproachingArchival,
    Archived,
}

impl Label {
    pub fn as_str(self) -> &'static str {
        match self {
            Label::Incomplete => "onboarding/incomplete",
            Label::Stale => "onboarding/stale",
            Label::Warning => "onboarding/warning",
            Label::ApproachingArchival => "onboarding/approaching-archival",
            Label::Archived => "onboarding/archived",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_all_complete() {
        assert_eq!(Action::all().len(), 6);
    }

    #[test]
    fn label_strings_match_tracker_vocabulary() {
        assert_eq!(Label::Incomplete.as_str(), "onboarding/incomplete");
        assert_eq!(Label::Stale.as_str(), "onboarding/stale");
        assert_eq!(Label::Warning.as_str(), "onboarding/warning");
        assert_eq!(
            Label::ApproachingArchival.as_str(),
            "onboarding/approaching-archival"
        );
        assert_eq!(Label::Archived.as_str(), "onboarding/archived");
    }

    #[test]
    fn search_labels() {
        assert_eq!(ONBOARDING_SEARCH_LABELS, &["project onboarding", "sandbox"]);
    }
}
