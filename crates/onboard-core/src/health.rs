//! Health-issue report filed in the TOC repository when a project reaches
//! the 10-month milestone. The body follows the TOC project-health template
//! structure.

use crate::tracker::RepoId;

pub fn health_issue_title(project: &str) -> String {
    format!("[HEALTH]: {project} - Onboarding Deadline Approaching")
}

/// Full report body. `repo` and `onboarding_issue` identify the onboarding
/// issue the report links back to.
pub fn health_issue_body(project: &str, repo: &RepoId, onboarding_issue: u64) -> String {
    let issue_url = format!("https://github.com/{repo}/issues/{onboarding_issue}");
    format!(
        "**Purpose of This Issue**\n\n\
         This Project Health Issue has been filed to ascertain the current activity and health \
         of the project so the TOC may identify the appropriate support and guidance for the \
         project to return to an optimal state of health or determination of archival.\n\n\
         It is intended to **initiate a public discussion to seek understanding** and define a \
         path forward. Perceptions or commentary counter to this are not constructive for the \
         project or the community.\n\n\
         Should maintainers have sensitive, confidential, or private factors and concerns that \
         influence or affect the project, they are encouraged to contact the TOC directly \
         through CNCF Staff, the private-toc mailing list, Slack, or email.\n\n\
         ---\n\n\
         ## Project name\n\
         {project}\n\n\
         ## Project Issue Link\n\
         {issue_url}\n\n\
         ## Concern\n\
         This sandbox project has been in the onboarding process for 10+ months and is \
         approaching the automatic archival deadline. The project has not completed the \
         required onboarding tasks within the expected timeframe, which may indicate:\n\n\
         - Lack of active maintainer engagement\n\
         - Insufficient resources to complete onboarding\n\
         - Project may no longer be actively maintained\n\
         - Need for additional support or guidance\n\n\
         **Timeline:**\n\
         - **Current:** 10+ months in onboarding process\n\
         - **Deadline:** 12 months (automatic archival)\n\
         - **Remaining:** ~2 months\n\n\
         **Onboarding Issue:** [#{onboarding_issue}]({issue_url})\n\n\
         **Automated Monitoring:** This health issue was automatically created by the CNCF \
         onboarding progress monitor when the project reached the 10-month milestone.\n\n\
         ## Prior engagement\n\
         This is an automated health check triggered by the onboarding progress monitoring \
         system. No prior TOC engagement has been initiated for this specific onboarding delay.\n\n\
         ## Additional Information\n\
         The CNCF onboarding progress monitor automatically tracks sandbox project onboarding \
         progress and creates health issues for projects that have been in the onboarding \
         process for 10+ months. This ensures timely intervention before automatic archival \
         occurs.\n\n\
         **Next Steps:**\n\
         - Contact project maintainers to assess current status\n\
         - Determine if additional support is needed\n\
         - Evaluate if extension is warranted\n\
         - Provide guidance for completing onboarding tasks\n\n\
         ---\n\
         *This health issue was automatically created by the CNCF onboarding progress monitor.*"
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
