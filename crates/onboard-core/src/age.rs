//! Elapsed-time arithmetic for onboarding issues.
//!
//! Months are a fixed 30 days and weeks a fixed 7, not calendar units. The
//! whole escalation schedule (and every countdown in the posted comments) is
//! built on this arithmetic, so it must stay consistent across the crate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Age of an issue broken down into days, weeks, and 30-day months.
///
/// A pure function of `now - created_at`; recomputed on every pass, never
/// stored. Negative ages (clock skew between the tracker and this host)
/// propagate as negative fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueAge {
    pub days: i64,
    pub weeks: i64,
    pub months: i64,
}

impl IssueAge {
    pub fn since(created_at: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        Self::from_days((now - created_at).num_days())
    }

    pub fn from_days(days: i64) -> Self {
        Self {
            days,
            weeks: days / 7,
            months: days / 30,
        }
    }

    /// 1-based week within the current 30-day month (1–5).
    pub fn week_in_month(self) -> i64 {
        (self.days % 30) / 7 + 1
    }

    /// 1-based day within the current week (1–7).
    pub fn day_in_week(self) -> i64 {
        self.days % 7 + 1
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
