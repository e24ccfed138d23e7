//! Comment bodies posted on onboarding issues.
//!
//! One template per action. Every countdown in the text is derived from the
//! same 30-day-month arithmetic as the classifier, so the stated timeline
//! always matches the next actual trigger.

use crate::age::IssueAge;
use crate::progress::ProgressAction;
use crate::tracker::RepoId;
use crate::types::Action;

/// Render the status comment for a classified issue.
pub fn progress_comment(age: IssueAge, decision: &ProgressAction, project: &str) -> String {
    let IssueAge { days, months, .. } = age;
    let header = format!("## ⚠️ Onboarding Progress Alert for {project}\n\n");

    let body = match decision.action {
        Action::Archive => format!(
            "🚨 **CRITICAL**: This onboarding issue has been open for **{months} months** ({days} days).\n\n\
             This project has exceeded the 1-year onboarding deadline and will be automatically archived.\n\n\
             **Action Taken:**\n\
             - ✅ Applied `onboarding/archived` label\n\
             - ✅ Closed this onboarding issue\n\
             - ✅ Commented on health issue in TOC repository\n\n\
             The project will need to reapply for CNCF Sandbox status if they wish to continue.\n\n\
             ---\n\
             *This action was taken automatically by the CNCF onboarding progress monitor.*"
        ),

        Action::DailyWarning => {
            let day = decision.day_in_week.unwrap_or(1);
            let remaining = 30 - days % 30;
            format!(
                "🚨 **FINAL WARNING**: This onboarding issue has been open for **{months} months** ({days} days).\n\n\
                 **Daily Warning #{day}** - This project will be automatically archived in **{remaining} days**.\n\n\
                 **Immediate Action Required:**\n\
                 - Complete all remaining onboarding tasks\n\
                 - Contact CNCF staff if you need assistance\n\
                 - Update this issue with your progress\n\n\
                 **Next Steps:**\n\
                 - Tomorrow: Another daily warning\n\
                 - In {remaining} days: Automatic archival\n\n\
                 ---\n\
                 *This is an automated daily warning from the CNCF onboarding progress monitor.*"
            )
        }

        Action::WeeklyWarning => {
            let week = decision.week_in_month.unwrap_or(1);
            let remaining = 365 - days;
            format!(
                "⚠️ **WARNING**: This onboarding issue has been open for **{months} months** ({days} days).\n\n\
                 **Weekly Warning #{week}** - This project will be automatically archived in **{remaining} days**.\n\n\
                 **Action Required:**\n\
                 - Complete remaining onboarding tasks\n\
                 - Contact CNCF staff if assistance is needed\n\
                 - Update this issue with progress\n\n\
                 **Timeline:**\n\
                 - Next week: Another weekly warning\n\
                 - Week 4: Daily warnings will begin\n\
                 - In {remaining} days: Automatic archival\n\n\
                 ---\n\
                 *This is an automated weekly warning from the CNCF onboarding progress monitor.*"
            )
        }

        Action::CreateHealthIssue => format!(
            "⚠️ **APPROACHING DEADLINE**: This onboarding issue has been open for **{months} months** ({days} days).\n\n\
             This project is approaching the 1-year onboarding deadline and will be automatically archived if not completed.\n\n\
             **Actions Taken:**\n\
             - ✅ Applied `onboarding/approaching-archival` label\n\
             - ✅ Created health issue in TOC repository for visibility\n\n\
             **Next Steps:**\n\
             - Complete all remaining onboarding tasks\n\
             - Contact CNCF staff immediately if assistance is needed\n\
             - In 1 month: Weekly warnings will begin\n\
             - In 2 months: Automatic archival\n\n\
             ---\n\
             *This is an automated alert from the CNCF onboarding progress monitor.*"
        ),

        Action::TagTeams => {
            let urgency = if months >= 9 { "HIGH PRIORITY" } else { "PRIORITY" };
            let label = decision.label.as_str();
            let to_health = 3 - months % 3;
            let to_archival = 6 - months % 6;
            format!(
                "📋 **{urgency}**: This onboarding issue has been open for **{months} months** ({days} days).\n\n\
                 **Actions Taken:**\n\
                 - ✅ Applied `{label}` label\n\
                 - ✅ Tagged TOC and projects team for visibility\n\n\
                 **Next Steps:**\n\
                 - Complete remaining onboarding tasks\n\
                 - Contact CNCF staff if assistance is needed\n\
                 - Update this issue with progress\n\n\
                 **Timeline:**\n\
                 - In {to_health} months: Health issue will be created\n\
                 - In {to_archival} months: Automatic archival\n\n\
                 ---\n\
                 *This is an automated alert from the CNCF onboarding progress monitor.*"
            )
        }

        Action::Comment => {
            let to_tag = 3 - months % 3;
            let to_archival = 9 - months;
            format!(
                "📝 **REMINDER**: This onboarding issue has been open for **{months} months** ({days} days).\n\n\
                 **Action Taken:**\n\
                 - ✅ Applied `onboarding/incomplete` label\n\n\
                 **Next Steps:**\n\
                 - Complete remaining onboarding tasks\n\
                 - Contact CNCF staff if assistance is needed\n\
                 - Update this issue with progress\n\n\
                 **Timeline:**\n\
                 - In {to_tag} months: TOC team will be tagged\n\
                 - In {to_archival} months: Automatic archival\n\n\
                 ---\n\
                 *This is an automated reminder from the CNCF onboarding progress monitor.*"
            )
        }
    };

    header + &body
}

/// Follow-up comment linking a freshly created health issue.
pub fn health_link_comment(health_repo: &RepoId, health_issue: u64) -> String {
    format!(
        "**Health Issue Created:** [#{health_issue}](https://github.com/{health_repo}/issues/{health_issue})"
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
