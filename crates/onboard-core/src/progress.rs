//! Age → escalation decision table.
//!
//! Thresholds are mutually exclusive and ordered by months, so exactly one
//! decision (or none, under three months) applies to any age.

use crate::age::IssueAge;
use crate::types::{Action, Label};
use serde::{Deserialize, Serialize};

/// What the monitor should do to an issue of a given age.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressAction {
    pub label: Label,
    pub action: Action,
    /// Week within month 11 (1–5); set only for the warning cadences.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub week_in_month: Option<i64>,
    /// Day within the current week (1–7); set only for the warning cadences.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_in_week: Option<i64>,
}

impl ProgressAction {
    fn milestone(label: Label, action: Action) -> Self {
        Self {
            label,
            action,
            week_in_month: None,
            day_in_week: None,
        }
    }
}

/// Classify an issue age into an escalation decision.
///
/// The month-11 cadence rules must be evaluated before the generic
/// `months >= 10` milestone; testing them later would collapse the week/day
/// granularity into the plain health-issue row.
pub fn classify(age: IssueAge) -> Option<ProgressAction> {
    if age.months == 11 {
        let week_in_month = age.week_in_month();
        // Weekly reminders for the first three weeks, daily for the rest of
        // the month as archival closes in.
        let action = if week_in_month <= 3 {
            Action::WeeklyWarning
        } else {
            Action::DailyWarning
        };
        return Some(ProgressAction {
            label: Label::ApproachingArchival,
            action,
            week_in_month: Some(week_in_month),
            day_in_week: Some(age.day_in_week()),
        });
    }

    match age.months {
        m if m >= 12 => Some(ProgressAction::milestone(Label::Archived, Action::Archive)),
        m if m >= 10 => Some(ProgressAction::milestone(
            Label::ApproachingArchival,
            Action::CreateHealthIssue,
        )),
        m if m >= 9 => Some(ProgressAction::milestone(Label::Warning, Action::TagTeams)),
        m if m >= 6 => Some(ProgressAction::milestone(Label::Stale, Action::TagTeams)),
        m if m >= 3 => Some(ProgressAction::milestone(
            Label::Incomplete,
            Action::Comment,
        )),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn classify_days(days: i64) -> Option<ProgressAction> {
        classify(IssueAge::from_days(days))
    }

    #[test]
    fn under_three_months_is_quiet() {
        assert_eq!(classify_days(1), None);
        assert_eq!(classify_days(89), None);
    }

    #[test]
    fn boundaries_are_closed_downward() {
        // First day of each milestone month triggers the milestone.
        assert_eq!(classify_days(90).unwrap().label, Label::Incomplete);
        assert_eq!(classify_days(180).unwrap().label, Label::Stale);
        assert_eq!(classify_days(270).unwrap().label, Label::Warning);
        assert_eq!(classify_days(300).unwrap().label, Label::ApproachingArchival);
        assert_eq!(classify_days(360).unwrap().label, Label::Archived);

        // The day before each boundary still belongs to the previous row.
        assert_eq!(classify_days(179).unwrap().label, Label::Incomplete);
        assert_eq!(classify_days(269).unwrap().label, Label::Stale);
        assert_eq!(classify_days(299).unwrap().label, Label::Warning);
    }

    #[test]
    fn month_nine_is_warning_not_stale() {
        let decision = classify_days(270).unwrap();
        assert_eq!(decision.label, Label::Warning);
        assert_eq!(decision.action, Action::TagTeams);
    }

    #[test]
    fn month_ten_creates_health_issue() {
        let decision = classify_days(305).unwrap();
        assert_eq!(decision.label, Label::ApproachingArchival);
        assert_eq!(decision.action, Action::CreateHealthIssue);
        assert_eq!(decision.week_in_month, None);
    }

    #[test]
    fn month_eleven_weeks_one_to_three_warn_weekly() {
        for days in [330, 335, 344, 350] {
            let decision = classify_days(days).unwrap();
            assert_eq!(decision.action, Action::WeeklyWarning, "at {days} days");
            assert_eq!(decision.label, Label::ApproachingArchival);
            assert!(decision.week_in_month.unwrap() <= 3);
        }
    }

    #[test]
    fn month_eleven_final_week_warns_daily() {
        for days in [351, 355, 359] {
            let decision = classify_days(days).unwrap();
            assert_eq!(decision.action, Action::DailyWarning, "at {days} days");
            assert!(decision.week_in_month.unwrap() >= 4);
            assert!(decision.day_in_week.is_some());
        }
    }

    #[test]
    fn month_eleven_takes_precedence_over_month_ten_rule() {
        // Without the ordering, days 330..360 would match the `>= 10` row
        // and re-file health issues daily.
        let decision = classify_days(340).unwrap();
        assert_ne!(decision.action, Action::CreateHealthIssue);
    }

    #[test]
    fn one_year_archives() {
        let decision = classify_days(365).unwrap();
        assert_eq!(decision.label, Label::Archived);
        assert_eq!(decision.action, Action::Archive);
    }

    #[test]
    fn exactly_one_row_applies_at_every_age() {
        // Totality/exclusivity: classify is a plain function, so a single
        // sweep over a year of ages documents that each day maps to at most
        // one decision and the mapping is stable.
        for days in 0..800 {
            let first = classify_days(days);
            let second = classify_days(days);
            assert_eq!(first, second);
            if days >= 90 {
                assert!(first.is_some(), "no decision at {days} days");
            }
        }
    }
}
