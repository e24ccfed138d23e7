//! Vote → onboarding handoff.
//!
//! After a community vote completes, an onboarding issue is created from the
//! project-onboarding template and the vote issue is congratulated and
//! closed.

use crate::config::MonitorConfig;
use crate::error::{OnboardError, Result};
use crate::issue::onboarding_title;
use crate::tracker::{IssueState, IssueTracker, NewIssue, RepoId};
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

const WELCOME_HEADING: &str = "# Welcome to CNCF Project Onboarding";

/// Built-in template used when no `template_path` is configured.
const DEFAULT_TEMPLATE: &str = "\
# Welcome to CNCF Project Onboarding

Congratulations on your acceptance as a CNCF Sandbox project! This issue
tracks the onboarding tasks your project needs to complete.

## Onboarding Tasks

- [ ] Complete the CNCF entry requirements
- [ ] Transfer trademark and logo assets to the Linux Foundation
- [ ] Move the project to the CNCF GitHub organization (or add CNCF as an owner)
- [ ] Adopt the CNCF Code of Conduct
- [ ] Add the project to the CNCF landscape
- [ ] Set up DevStats tracking
- [ ] Join the #sandbox-projects Slack channel
- [ ] Review the services available to your project

Onboarding should be completed within one month of acceptance. Contact CNCF
staff if you have any questions.
";

static FRONT_MATTER_RE: OnceLock<Regex> = OnceLock::new();

fn front_matter_re() -> &'static Regex {
    FRONT_MATTER_RE.get_or_init(|| Regex::new(r"(?s)\A---\n.*?\n---\n").unwrap())
}

/// Render the onboarding issue body from a template: strip the issue-form
/// front matter, insert the vote reference under the welcome heading, and
/// append the related-issue footer.
pub fn render_onboarding_body(template: &str, vote_issue: u64) -> String {
    let mut body = front_matter_re().replace(template, "").into_owned();
    if let Some(pos) = body.find(WELCOME_HEADING) {
        let insert_at = pos + WELCOME_HEADING.len();
        body.insert_str(insert_at, &format!("\n\nref: #{vote_issue}"));
    }
    body.push_str(&format!(
        "\n\n---\n\n**Related Issue:** This onboarding issue was automatically created after \
         the community vote was completed in issue #{vote_issue}."
    ));
    body
}

fn load_template(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            if !path.exists() {
                return Err(OnboardError::TemplateNotFound(path.display().to_string()));
            }
            Ok(std::fs::read_to_string(path)?)
        }
        None => Ok(DEFAULT_TEMPLATE.to_string()),
    }
}

/// Create the onboarding issue for `project`. Returns its number.
pub fn create_onboarding_issue(
    tracker: &dyn IssueTracker,
    config: &MonitorConfig,
    project: &str,
    vote_issue: u64,
) -> Result<u64> {
    let template = load_template(config.template_path.as_deref())?;
    let request = NewIssue {
        title: onboarding_title(project),
        body: render_onboarding_body(&template, vote_issue),
        labels: config.onboarding_labels.clone(),
        assignees: config.onboarding_assignees.clone(),
    };
    let number = tracker.create_issue(&config.repo, &request)?;
    tracing::info!(issue = number, project, "created onboarding issue");
    Ok(number)
}

/// Congratulate the project on the vote issue and close it.
pub fn comment_and_close(
    tracker: &dyn IssueTracker,
    repo: &RepoId,
    vote_issue: u64,
    onboarding_issue: u64,
    project: &str,
) -> Result<()> {
    let body = format!(
        "🎉 Congratulations! The onboarding issue has been created for **{project}**.\n\n\
         The community vote has been completed successfully, and your project is now ready \
         to begin the CNCF onboarding process.\n\n\
         **Next Steps:**\n\
         - Please review and work through the tasks in the onboarding issue: #{onboarding_issue}\n\
         - Complete onboarding within one month of acceptance\n\
         - Contact CNCF staff if you have any questions\n\n\
         Good luck with your project's journey in the CNCF! 🚀"
    );
    tracker.create_comment(repo, vote_issue, &body)?;
    tracker.update_state(repo, vote_issue, IssueState::Closed)?;
    tracing::info!(vote_issue, onboarding_issue, "closed vote issue");
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
