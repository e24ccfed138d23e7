#![allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn onboard(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("onboard").unwrap();
    cmd.current_dir(dir.path()).env_remove("GITHUB_TOKEN");
    cmd
}

// ---------------------------------------------------------------------------
// onboard classify
// ---------------------------------------------------------------------------

#[test]
fn classify_fresh_issue_needs_nothing() {
    let dir = TempDir::new().unwrap();
    onboard(&dir)
        .args(["classify", "--days", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("none (under the three-month threshold)"));
}

#[test]
fn classify_one_month_is_still_quiet() {
    let dir = TempDir::new().unwrap();
    onboard(&dir)
        .args(["classify", "--days", "30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 months, 4 weeks, 30 days"))
        .stdout(predicate::str::contains("Action:  none"));
}

#[test]
fn classify_three_months_reminds() {
    let dir = TempDir::new().unwrap();
    onboard(&dir)
        .args(["classify", "--days", "90"])
        .assert()
        .success()
        .stdout(predicate::str::contains("onboarding/incomplete"))
        .stdout(predicate::str::contains("Action:  comment"));
}

#[test]
fn classify_ten_months_escalates() {
    let dir = TempDir::new().unwrap();
    onboard(&dir)
        .args(["classify", "--days", "305"])
        .assert()
        .success()
        .stdout(predicate::str::contains("onboarding/approaching-archival"))
        .stdout(predicate::str::contains("create_health_issue"));
}

#[test]
fn classify_month_eleven_warns_weekly() {
    let dir = TempDir::new().unwrap();
    onboard(&dir)
        .args(["classify", "--days", "335"])
        .assert()
        .success()
        .stdout(predicate::str::contains("weekly_warning"))
        .stdout(predicate::str::contains("Week:    1 of month 11"));
}

#[test]
fn classify_one_year_archives() {
    let dir = TempDir::new().unwrap();
    onboard(&dir)
        .args(["classify", "--days", "365"])
        .assert()
        .success()
        .stdout(predicate::str::contains("onboarding/archived"))
        .stdout(predicate::str::contains("Action:  archive"));
}

#[test]
fn classify_comment_flag_renders_body() {
    let dir = TempDir::new().unwrap();
    onboard(&dir)
        .args(["classify", "--days", "180", "--project", "My Project", "--comment"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Onboarding Progress Alert for My Project"))
        .stdout(predicate::str::contains("(180 days)"));
}

#[test]
fn classify_json_output_is_parseable() {
    let dir = TempDir::new().unwrap();
    let output = onboard(&dir)
        .args(["classify", "--days", "270", "-j"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["age"]["months"], 9);
    assert_eq!(value["decision"]["label"], "warning");
    assert_eq!(value["decision"]["action"], "tag_teams");
}

// ---------------------------------------------------------------------------
// onboard seed
// ---------------------------------------------------------------------------

#[test]
fn seed_dry_run_lists_all_scenarios_without_a_token() {
    let dir = TempDir::new().unwrap();
    onboard(&dir)
        .args(["seed", "--repo", "me/scratch", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[PROJECT ONBOARDING] Test Project Alpha"))
        .stdout(predicate::str::contains("365d"))
        .stdout(predicate::str::contains("no issues were created"));
}

#[test]
fn seed_live_requires_a_token() {
    let dir = TempDir::new().unwrap();
    onboard(&dir)
        .args(["seed", "--repo", "me/scratch"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("token is required"));
}

#[test]
fn seed_rejects_malformed_repo() {
    let dir = TempDir::new().unwrap();
    onboard(&dir)
        .args(["seed", "--repo", "not-a-repo", "--dry-run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid repository"));
}

// ---------------------------------------------------------------------------
// onboard monitor / onboard create
// ---------------------------------------------------------------------------

#[test]
fn monitor_rejects_malformed_repo_before_any_request() {
    let dir = TempDir::new().unwrap();
    onboard(&dir)
        .args(["monitor", "--token", "x", "--repo", "not-a-repo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid repository"));
}

#[test]
fn monitor_requires_a_token() {
    let dir = TempDir::new().unwrap();
    onboard(&dir).arg("monitor").assert().failure();
}

#[test]
fn create_requires_vote_issue() {
    let dir = TempDir::new().unwrap();
    onboard(&dir)
        .args(["create", "My Project", "--token", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--vote-issue"));
}
