//! Duplicate-suppression gate between the classifier and side effects.
//!
//! The monitor runs on a schedule, so every decision would otherwise fire on
//! every run. Milestone actions are gated on the label they apply (the label
//! alone captures "already handled"); the warning cadences are gated on
//! elapsed time instead, since a label cannot distinguish which week or day
//! a warning belongs to.

use crate::issue::IssueRecord;
use crate::progress::ProgressAction;
use crate::types::Action;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Daily warnings hold off until this many hours since the last activity.
const DAILY_QUIET_HOURS: i64 = 20;

/// Weekly warnings hold off until this many days since the last activity.
const WEEKLY_QUIET_DAYS: i64 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    RecentActivity,
    AlreadyLabeled,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::RecentActivity => f.write_str("recent activity"),
            SkipReason::AlreadyLabeled => f.write_str("already labeled"),
        }
    }
}

/// Decide whether a classified issue should be left alone this run.
///
/// `check_all` disables the label gate (used once at initial rollout to
/// retro-label pre-existing issues); the recency gates for the warning
/// cadences always apply.
pub fn skip_reason(
    issue: &IssueRecord,
    decision: &ProgressAction,
    now: DateTime<Utc>,
    check_all: bool,
) -> Option<SkipReason> {
    match decision.action {
        Action::DailyWarning => {
            let hours = (now - issue.last_activity()).num_hours();
            (hours < DAILY_QUIET_HOURS).then_some(SkipReason::RecentActivity)
        }
        Action::WeeklyWarning => {
            let days = (now - issue.last_activity()).num_days();
            (days < WEEKLY_QUIET_DAYS).then_some(SkipReason::RecentActivity)
        }
        _ if check_all => None,
        _ => issue
            .has_label(decision.label.as_str())
            .then_some(SkipReason::AlreadyLabeled),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
