#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// A command isolated from the user's real config, with no color and no mutation delay.
fn staffdir_cmd(config_dir: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("staffdir"));
    cmd.env("NO_COLOR", "1")
        .env("STAFFDIR_DELAY_MS", "0")
        .env_remove("STAFFDIR_PAGE_SIZE")
        .env_remove("RUST_LOG")
        .arg("--config-dir")
        .arg(config_dir.path());
    cmd
}

#[test]
fn naked_invocation_lists_first_page() {
    let temp = TempDir::new().unwrap();
    staffdir_cmd(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 1-10 of 20 employees"))
        .stdout(predicate::str::contains("John Doe"))
        .stdout(predicate::str::contains("Stephanie Allen").not());
}

#[test]
fn list_filters_sorts_and_pages() {
    let temp = TempDir::new().unwrap();
    staffdir_cmd(&temp)
        .args([
            "list",
            "--role",
            "manager",
            "--sort",
            "lastName",
            "--page-size",
            "3",
            "--page",
            "2",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 4-6 of 7 employees"))
        .stdout(predicate::str::contains("Jennifer Jackson"));
}

#[test]
fn list_with_no_matches_shows_empty_state() {
    let temp = TempDir::new().unwrap();
    staffdir_cmd(&temp)
        .args(["list", "--search", "zzz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No employees found"));
}

#[test]
fn list_past_the_last_page_shows_the_last_page() {
    let temp = TempDir::new().unwrap();
    staffdir_cmd(&temp)
        .args(["list", "--page", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Page 5 does not exist; showing page 2 of 2",
        ))
        .stdout(predicate::str::contains("Showing 11-20 of 20 employees"))
        .stdout(predicate::str::contains("No employees found").not());
}

#[test]
fn list_json_past_the_last_page_reports_the_clamped_page() {
    let temp = TempDir::new().unwrap();
    staffdir_cmd(&temp)
        .args(["--output", "json", "list", "--page", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"page\": 2,"))
        .stdout(predicate::str::contains("\"startIndex\": 10"))
        .stdout(predicate::str::contains("\"hasNextPage\": false"));
}

#[test]
fn list_json_carries_page_metadata() {
    let temp = TempDir::new().unwrap();
    staffdir_cmd(&temp)
        .args(["--output", "json", "list", "--department", "IT"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"totalItems\": 5"))
        .stdout(predicate::str::contains("\"hasNextPage\": false"));
}

#[test]
fn config_file_sets_page_size() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("staffdir.json"), r#"{"page_size": 4}"#).unwrap();
    staffdir_cmd(&temp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 1-4 of 20 employees"));
}

#[test]
fn seed_file_replaces_sample_data() {
    let temp = TempDir::new().unwrap();
    let seed = temp.path().join("people.json");
    fs::write(
        &seed,
        r#"[{"id": 7, "firstName": "Ada", "lastName": "Byron", "email": "ada@company.com",
             "department": "IT", "role": "Developer"}]"#,
    )
    .unwrap();
    staffdir_cmd(&temp)
        .arg("--seed")
        .arg(&seed)
        .args(["show", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ada Byron"));
}

#[test]
fn show_unknown_id_fails() {
    let temp = TempDir::new().unwrap();
    staffdir_cmd(&temp)
        .args(["show", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Employee not found: 99"));
}

#[test]
fn stats_counts_the_directory() {
    let temp = TempDir::new().unwrap();
    staffdir_cmd(&temp)
        .args(["stats", "--search", "john"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"Total\s+20").unwrap())
        .stdout(predicate::str::is_match(r"Matching\s+2").unwrap());
}

#[test]
fn shell_session_adds_edits_and_deletes() {
    let temp = TempDir::new().unwrap();
    let script = "\
add -f Nina -l Park -e Nina.Park@Company.com -d IT -r Analyst
show 21
edit 21 --role Manager
filter role manager
delete 21
stats
quit
";
    staffdir_cmd(&temp)
        .arg("shell")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Employee added (21): Nina Park"))
        .stdout(predicate::str::contains("nina.park@company.com"))
        .stdout(predicate::str::contains("Employee updated (21): Nina Park"))
        .stdout(predicate::str::contains("Showing 1-8 of 8 employees"))
        .stdout(predicate::str::contains("Employee deleted (21): Nina Park"));
}

#[test]
fn shell_reports_validation_errors_and_keeps_going() {
    let temp = TempDir::new().unwrap();
    let script = "\
add -f N -l Park -e not-an-email -d IT -r Analyst
edit 1 --email jane.smith@company.com
cancel
page 2
";
    staffdir_cmd(&temp)
        .arg("shell")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Please fix the following:"))
        .stdout(predicate::str::contains("Please enter a valid email address"))
        .stdout(predicate::str::contains("already exists"))
        .stdout(predicate::str::contains("staffdir (editing #1)> "))
        .stdout(predicate::str::contains("Edit cancelled"))
        .stdout(predicate::str::contains("Showing 11-20 of 20 employees"));
}
