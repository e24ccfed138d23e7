//! Capability interface over the external issue tracker.
//!
//! The monitor, handoff, and seeder talk to this trait only; the decision
//! core never sees it. `github::GithubClient` is the production
//! implementation, test doubles live next to their tests.

use crate::error::{OnboardError, Result};
use crate::issue::IssueRecord;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// RepoId
// ---------------------------------------------------------------------------

/// `owner/name` pair identifying a repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RepoId {
    pub owner: String,
    pub name: String,
}

impl FromStr for RepoId {
    type Err = OnboardError;

    fn from_str(s: &str) -> Result<Self> {
        let (owner, name) = s
            .split_once('/')
            .ok_or_else(|| OnboardError::InvalidRepo(s.to_string()))?;
        if owner.is_empty() || name.is_empty() || name.contains('/') {
            return Err(OnboardError::InvalidRepo(s.to_string()));
        }
        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

impl TryFrom<String> for RepoId {
    type Error = OnboardError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<RepoId> for String {
    fn from(repo: RepoId) -> Self {
        repo.to_string()
    }
}

// ---------------------------------------------------------------------------
// NewIssue / IssueState
// ---------------------------------------------------------------------------

/// Issue creation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewIssue {
    pub title: String,
    pub body: String,
    pub labels: Vec<String>,
    pub assignees: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueState {
    Open,
    Closed,
}

impl IssueState {
    pub fn as_str(self) -> &'static str {
        match self {
            IssueState::Open => "open",
            IssueState::Closed => "closed",
        }
    }
}

// ---------------------------------------------------------------------------
// IssueTracker
// ---------------------------------------------------------------------------

/// The tracker operations the automation needs. Every call is a fallible
/// network request.
pub trait IssueTracker {
    /// Open issues carrying all of `labels`, pull requests excluded.
    fn list_open_issues(&self, repo: &RepoId, labels: &[&str]) -> Result<Vec<IssueRecord>>;

    fn add_labels(&self, repo: &RepoId, number: u64, labels: &[&str]) -> Result<()>;

    fn create_comment(&self, repo: &RepoId, number: u64, body: &str) -> Result<()>;

    fn add_assignees(&self, repo: &RepoId, number: u64, assignees: &[String]) -> Result<()>;

    fn update_state(&self, repo: &RepoId, number: u64, state: IssueState) -> Result<()>;

    /// Returns the created issue number.
    fn create_issue(&self, repo: &RepoId, issue: &NewIssue) -> Result<u64>;
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
