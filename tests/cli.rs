use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn rollcall(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("rollcall").unwrap();
    cmd.env("ROLLCALL_HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

fn login(home: &Path) {
    rollcall(home)
        .args(["login", "admin", "admin123"])
        .assert()
        .success();
}

/// Registers a student and returns the id printed in the detail view.
fn register(home: &Path, roll_no: &str, name: &str, email: &str) -> i64 {
    let output = rollcall(home)
        .args([
            "register",
            "--roll-no",
            roll_no,
            "--name",
            name,
            "--email",
            email,
            "--phone",
            "9876543210",
            "--course",
            "Computer Science",
        ])
        .output()
        .unwrap();
    assert!(output.status.success(), "register failed: {:?}", output);

    let stdout = String::from_utf8(output.stdout).unwrap();
    stdout
        .lines()
        .find_map(|line| line.trim().strip_prefix("ID:"))
        .and_then(|id| id.trim().parse().ok())
        .expect("register output should include the new id")
}

#[test]
fn test_commands_refuse_without_session() {
    let temp_dir = tempfile::tempdir().unwrap();

    rollcall(temp_dir.path())
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not logged in"));
}

#[test]
fn test_bad_login_is_rejected() {
    let temp_dir = tempfile::tempdir().unwrap();

    rollcall(temp_dir.path())
        .args(["login", "admin", "hunter2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Invalid credentials. Use admin / admin123",
        ));

    rollcall(temp_dir.path()).arg("list").assert().failure();
}

#[test]
fn test_login_trims_username() {
    let temp_dir = tempfile::tempdir().unwrap();

    rollcall(temp_dir.path())
        .args(["login", "  admin ", "admin123"])
        .assert()
        .success();
    rollcall(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No students found."));
}

#[test]
fn test_register_list_search_delete_flow() {
    let temp_dir = tempfile::tempdir().unwrap();
    login(temp_dir.path());

    let jane = register(temp_dir.path(), "cs1001", "Jane Doe", "jane@example.com");
    register(temp_dir.path(), "ME2002", "John Roe", "john@example.com");

    rollcall(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Jane Doe"))
        .stdout(predicate::str::contains("CS1001"))
        .stdout(predicate::str::contains("John Roe"));

    rollcall(temp_dir.path())
        .args(["search", "jane"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Jane Doe"))
        .stdout(predicate::str::contains("John Roe").not());

    rollcall(temp_dir.path())
        .args(["delete", &jane.to_string()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Student record deleted!"));

    rollcall(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Jane Doe").not())
        .stdout(predicate::str::contains("John Roe"));
}

#[test]
fn test_records_persist_as_camel_case_json() {
    let temp_dir = tempfile::tempdir().unwrap();
    login(temp_dir.path());
    register(temp_dir.path(), "CS1001", "Jane Doe", "jane@example.com");

    let raw = std::fs::read_to_string(temp_dir.path().join("students.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let first = &parsed[0];
    assert_eq!(first["rollNo"], "CS1001");
    assert_eq!(first["name"], "Jane Doe");
    assert!(first["id"].is_i64());
}

#[test]
fn test_invalid_register_lists_field_errors() {
    let temp_dir = tempfile::tempdir().unwrap();
    login(temp_dir.path());

    rollcall(temp_dir.path())
        .args([
            "register",
            "--roll-no",
            "A1",
            "--name",
            "J",
            "--email",
            "not-an-email",
            "--phone",
            "1234567890",
            "--course",
            "Computer Science",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Name should be at least 2 characters"))
        .stderr(predicate::str::contains("Please enter a valid email address"))
        .stderr(predicate::str::contains(
            "Please enter a valid 10-digit Indian mobile number",
        ));

    rollcall(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No students found."));
}

#[test]
fn test_name_digits_are_filtered_with_warning() {
    let temp_dir = tempfile::tempdir().unwrap();
    login(temp_dir.path());

    rollcall(temp_dir.path())
        .args([
            "register",
            "--roll-no",
            "CS1001",
            "--name",
            "Jane2 Doe",
            "--email",
            "jane@example.com",
            "--phone",
            "98765 43210",
            "--course",
            "Computer Science",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Numbers are not allowed in name"))
        .stdout(predicate::str::contains("Jane Doe"));
}

#[test]
fn test_update_keeps_omitted_fields() {
    let temp_dir = tempfile::tempdir().unwrap();
    login(temp_dir.path());
    let id = register(temp_dir.path(), "CS1001", "Jane Doe", "jane@example.com");

    rollcall(temp_dir.path())
        .args(["update", &id.to_string(), "--name", "Jane Smith"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Student record updated successfully!"));

    rollcall(temp_dir.path())
        .args(["show", &id.to_string()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Jane Smith"))
        .stdout(predicate::str::contains("jane@example.com"))
        .stdout(predicate::str::contains("9876543210"));
}

#[test]
fn test_update_unknown_id_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    login(temp_dir.path());

    rollcall(temp_dir.path())
        .args(["update", "42", "--name", "Jane Smith"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Student not found: 42"));
}

#[test]
fn test_logout_ends_session() {
    let temp_dir = tempfile::tempdir().unwrap();
    login(temp_dir.path());

    rollcall(temp_dir.path()).arg("logout").assert().success();
    rollcall(temp_dir.path())
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not logged in"));
}

#[test]
fn test_configured_courses_drive_validation() {
    let temp_dir = tempfile::tempdir().unwrap();
    login(temp_dir.path());

    rollcall(temp_dir.path())
        .args(["config", "courses", "Biology,Chemistry"])
        .assert()
        .success()
        .stdout(predicate::str::contains("courses set to Biology, Chemistry"));

    rollcall(temp_dir.path())
        .arg("courses")
        .assert()
        .success()
        .stdout(predicate::str::contains("Biology"))
        .stdout(predicate::str::contains("Computer Science").not());

    rollcall(temp_dir.path())
        .args([
            "register",
            "--roll-no",
            "CS1001",
            "--name",
            "Jane Doe",
            "--email",
            "jane@example.com",
            "--phone",
            "9876543210",
            "--course",
            "Computer Science",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please select a valid course"));
}

#[test]
fn test_register_with_missing_fields_reports_each_field() {
    let temp_dir = tempfile::tempdir().unwrap();
    login(temp_dir.path());

    rollcall(temp_dir.path())
        .args(["register", "--name", "Jane Doe"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Roll Number: Roll number is required"))
        .stderr(predicate::str::contains("Email: Email is required"))
        .stderr(predicate::str::contains("Phone: Phone number is required"))
        .stderr(predicate::str::contains("Course: Course is required"))
        .stderr(predicate::str::contains("Full Name").not());
}
