//! Monitor configuration (`onboard.yaml`).
//!
//! Every field has a default matching the production CNCF setup, so the file
//! is optional and may override any subset.

use crate::error::Result;
use crate::tracker::RepoId;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "onboard.yaml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorConfig {
    /// Repository holding the onboarding issues.
    #[serde(default = "default_repo")]
    pub repo: RepoId,

    /// Repository health issues are filed in.
    #[serde(default = "default_health_repo")]
    pub health_repo: RepoId,

    /// Labels identifying onboarding issues (also applied on creation).
    #[serde(default = "default_onboarding_labels")]
    pub onboarding_labels: Vec<String>,

    /// Labels applied to health issues.
    #[serde(default = "default_health_labels")]
    pub health_labels: Vec<String>,

    /// Assignees for health issues.
    #[serde(default = "default_health_assignees")]
    pub health_assignees: Vec<String>,

    /// Assignees tagged onto stale/warning issues by `tag_teams`.
    #[serde(default = "default_escalation_assignees")]
    pub escalation_assignees: Vec<String>,

    /// Assignees for freshly created onboarding issues.
    #[serde(default = "default_onboarding_assignees")]
    pub onboarding_assignees: Vec<String>,

    /// Onboarding issue template; the built-in template is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_path: Option<PathBuf>,
}

fn default_repo() -> RepoId {
    RepoId {
        owner: "cncf".to_string(),
        name: "sandbox".to_string(),
    }
}

fn default_health_repo() -> RepoId {
    RepoId {
        owner: "cncf".to_string(),
        name: "toc".to_string(),
    }
}

fn default_onboarding_labels() -> Vec<String> {
    vec!["project onboarding".to_string(), "sandbox".to_string()]
}

fn default_health_labels() -> Vec<String> {
    ["needs-triage", "toc", "kind/review", "review/health"]
        .map(str::to_string)
        .to_vec()
}

fn default_health_assignees() -> Vec<String> {
    vec!["riaankleinhans".to_string()]
}

fn default_escalation_assignees() -> Vec<String> {
    vec!["riaankleinhans".to_string()]
}

fn default_onboarding_assignees() -> Vec<String> {
    [
        "caniszczyk",
        "idvoretskyi",
        "jeefy",
        "krook",
        "mrbobbytables",
        "RobertKielty",
        "cynthia-sg",
        "lukaszgryglicki",
        "riaankleinhans",
    ]
    .map(str::to_string)
    .to_vec()
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            repo: default_repo(),
            health_repo: default_health_repo(),
            onboarding_labels: default_onboarding_labels(),
            health_labels: default_health_labels(),
            health_assignees: default_health_assignees(),
            escalation_assignees: default_escalation_assignees(),
            onboarding_assignees: default_onboarding_assignees(),
            template_path: None,
        }
    }
}

impl MonitorConfig {
    /// Load from `path`, or the built-in defaults when the file is absent.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(&content)?)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
