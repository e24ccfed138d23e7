//! GitHub REST implementation of [`IssueTracker`].
//!
//! Synchronous (blocking) client; the monitor processes issues one at a time
//! and awaits every side effect before the next, so there is nothing to
//! gain from an async stack here.

use crate::error::{OnboardError, Result};
use crate::issue::IssueRecord;
use crate::tracker::{IssueState, IssueTracker, NewIssue, RepoId};
use chrono::{DateTime, Utc};
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

const GITHUB_API: &str = "https://api.github.com";
const USER_AGENT: &str = concat!("cncf-onboard/", env!("CARGO_PKG_VERSION"));
const API_VERSION: &str = "2022-11-28";
const PER_PAGE: usize = 100;

pub struct GithubClient {
    http: Client,
    token: String,
    base_url: String,
}

impl GithubClient {
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::with_base_url(token, GITHUB_API)
    }

    /// Point the client at a different API root (tests).
    pub fn with_base_url(token: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        let http = Client::builder().timeout(Duration::from_secs(30)).build()?;
        Ok(Self {
            http,
            token: token.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn issues_url(&self, repo: &RepoId) -> String {
        format!("{}/repos/{}/{}/issues", self.base_url, repo.owner, repo.name)
    }

    fn send(&self, req: RequestBuilder) -> Result<Response> {
        let resp = req
            .header("Authorization", format!("Bearer {}", self.token))
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", API_VERSION)
            .send()?;

        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let message = resp
            .text()
            .ok()
            .and_then(|body| {
                serde_json::from_str::<ApiMessage>(&body)
                    .map(|m| m.message)
                    .ok()
                    .or(Some(body))
            })
            .unwrap_or_default();
        Err(OnboardError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct ApiMessage {
    message: String,
}

#[derive(Deserialize)]
struct WireIssue {
    number: u64,
    title: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    #[serde(default)]
    comments: u32,
    #[serde(default)]
    labels: Vec<WireLabel>,
    /// Present only when the "issue" is actually a pull request.
    pull_request: Option<serde_json::Value>,
}

#[derive(Deserialize)]
struct WireLabel {
    name: String,
}

impl From<WireIssue> for IssueRecord {
    fn from(wire: WireIssue) -> Self {
        IssueRecord {
            number: wire.number,
            title: wire.title,
            created_at: wire.created_at,
            updated_at: wire.updated_at,
            comments: wire.comments,
            labels: wire.labels.into_iter().map(|l| l.name).collect(),
        }
    }
}

#[derive(Deserialize)]
struct CreatedIssue {
    number: u64,
}

// ---------------------------------------------------------------------------
// IssueTracker impl
// ---------------------------------------------------------------------------

impl IssueTracker for GithubClient {
    fn list_open_issues(&self, repo: &RepoId, labels: &[&str]) -> Result<Vec<IssueRecord>> {
        let labels = labels.join(",");
        let per_page = PER_PAGE.to_string();
        let mut issues = Vec::new();
        let mut page = 1usize;
        loop {
            let page_str = page.to_string();
            let batch: Vec<WireIssue> = self
                .send(self.http.get(self.issues_url(repo)).query(&[
                    ("state", "open"),
                    ("labels", labels.as_str()),
                    ("per_page", per_page.as_str()),
                    ("page", page_str.as_str()),
                ]))?
                .json()?;
            let len = batch.len();
            issues.extend(
                batch
                    .into_iter()
                    .filter(|i| i.pull_request.is_none())
                    .map(IssueRecord::from),
            );
            if len < PER_PAGE {
                return Ok(issues);
            }
            page += 1;
        }
    }

    fn add_labels(&self, repo: &RepoId, number: u64, labels: &[&str]) -> Result<()> {
        let url = format!("{}/{number}/labels", self.issues_url(repo));
        self.send(self.http.post(url).json(&json!({ "labels": labels })))?;
        Ok(())
    }

    fn create_comment(&self, repo: &RepoId, number: u64, body: &str) -> Result<()> {
        let url = format!("{}/{number}/comments", self.issues_url(repo));
        self.send(self.http.post(url).json(&json!({ "body": body })))?;
        Ok(())
    }

    fn add_assignees(&self, repo: &RepoId, number: u64, assignees: &[String]) -> Result<()> {
        let url = format!("{}/{number}/assignees", self.issues_url(repo));
        self.send(self.http.post(url).json(&json!({ "assignees": assignees })))?;
        Ok(())
    }

    fn update_state(&self, repo: &RepoId, number: u64, state: IssueState) -> Result<()> {
        let url = format!("{}/{number}", self.issues_url(repo));
        self.send(self.http.patch(url).json(&json!({ "state": state.as_str() })))?;
        Ok(())
    }

    fn create_issue(&self, repo: &RepoId, issue: &NewIssue) -> Result<u64> {
        let created: CreatedIssue = self
            .send(self.http.post(self.issues_url(repo)).json(&json!({
                "title": issue.title,
                "body": issue.body,
                "labels": issue.labels,
                "assignees": issue.assignees,
            })))?
            .json()?;
        Ok(created.number)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    fn client(server: &mockito::ServerGuard) -> GithubClient {
        GithubClient::with_base_url("test-token", server.url()).unwrap()
    }

    fn repo() -> RepoId {
        "cncf/sandbox".parse().unwrap()
    }

    #[test]
    fn list_open_issues_maps_wire_fields() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/repos/cncf/sandbox/issues")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("state".into(), "open".into()),
                Matcher::UrlEncoded("labels".into(), "project onboarding,sandbox".into()),
            ]))
            .match_header("authorization", "Bearer test-token")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"[{
                    "number": 42,
                    "title": "[PROJECT ONBOARDING] demo",
                    "created_at": "2025-01-01T00:00:00Z",
                    "updated_at": "2025-06-01T00:00:00Z",
                    "comments": 3,
                    "labels": [{"name": "sandbox"}, {"name": "project onboarding"}]
                }]"#,
            )
            .create();

        let issues = client(&server)
            .list_open_issues(&repo(), &["project onboarding", "sandbox"])
            .unwrap();

        mock.assert();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].number, 42);
        assert_eq!(issues[0].comments, 3);
        assert_eq!(issues[0].labels, vec!["sandbox", "project onboarding"]);
    }

    #[test]
    fn list_open_issues_filters_pull_requests() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/repos/cncf/sandbox/issues")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(
                r#"[
                    {"number": 1, "title": "[PROJECT ONBOARDING] a",
                     "created_at": "2025-01-01T00:00:00Z", "updated_at": "2025-01-01T00:00:00Z",
                     "pull_request": {"url": "https://example.invalid"}},
                    {"number": 2, "title": "[PROJECT ONBOARDING] b",
                     "created_at": "2025-01-01T00:00:00Z", "updated_at": "2025-01-01T00:00:00Z"}
                ]"#,
            )
            .create();

        let issues = client(&server).list_open_issues(&repo(), &[]).unwrap();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].number, 2);
    }

    #[test]
    fn list_open_issues_walks_pages() {
        let mut server = mockito::Server::new();
        let full_page: Vec<String> = (1..=100)
            .map(|n| {
                format!(
                    r#"{{"number": {n}, "title": "[PROJECT ONBOARDING] p{n}",
                        "created_at": "2025-01-01T00:00:00Z",
                        "updated_at": "2025-01-01T00:00:00Z"}}"#
                )
            })
            .collect();
        server
            .mock("GET", "/repos/cncf/sandbox/issues")
            .match_query(Matcher::UrlEncoded("page".into(), "1".into()))
            .with_status(200)
            .with_body(format!("[{}]", full_page.join(",")))
            .create();
        server
            .mock("GET", "/repos/cncf/sandbox/issues")
            .match_query(Matcher::UrlEncoded("page".into(), "2".into()))
            .with_status(200)
            .with_body(
                r#"[{"number": 101, "title": "[PROJECT ONBOARDING] last",
                     "created_at": "2025-01-01T00:00:00Z",
                     "updated_at": "2025-01-01T00:00:00Z"}]"#,
            )
            .create();

        let issues = client(&server).list_open_issues(&repo(), &[]).unwrap();
        assert_eq!(issues.len(), 101);
        assert_eq!(issues.last().unwrap().number, 101);
    }

    #[test]
    fn create_issue_returns_number() {
        let mut server = mockito::Server::new();
        server
            .mock("POST", "/repos/cncf/sandbox/issues")
            .match_body(Matcher::PartialJson(serde_json::json!({
                "title": "[HEALTH]: demo - Onboarding Deadline Approaching"
            })))
            .with_status(201)
            .with_body(r#"{"number": 77}"#)
            .create();

        let number = client(&server)
            .create_issue(
                &repo(),
                &NewIssue {
                    title: "[HEALTH]: demo - Onboarding Deadline Approaching".to_string(),
                    body: "body".to_string(),
                    labels: vec!["toc".to_string()],
                    assignees: vec![],
                },
            )
            .unwrap();
        assert_eq!(number, 77);
    }

    #[test]
    fn close_issue_patches_state() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("PATCH", "/repos/cncf/sandbox/issues/9")
            .match_body(Matcher::PartialJson(serde_json::json!({"state": "closed"})))
            .with_status(200)
            .with_body("{}")
            .create();

        client(&server)
            .update_state(&repo(), 9, IssueState::Closed)
            .unwrap();
        mock.assert();
    }

    #[test]
    fn api_failure_surfaces_status_and_message() {
        let mut server = mockito::Server::new();
        server
            .mock("POST", "/repos/cncf/sandbox/issues/5/labels")
            .with_status(403)
            .with_body(r#"{"message": "Resource not accessible by integration"}"#)
            .create();

        let err = client(&server)
            .add_labels(&repo(), 5, &["onboarding/stale"])
            .unwrap_err();
        match err {
            OnboardError::Api { status, message } => {
                assert_eq!(status, 403);
                assert!(message.contains("Resource not accessible"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
