//! Basic shell E2E tests.
//!
//! Tests pipe command scripts into the shell via cargo run and verify
//! outputs. Each test gets its own HOME so config files stay isolated.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

/// Run the shell with a piped script and return (stdout, stderr, code).
fn run_shell(home: &Path, args: &[&str], script: &str) -> (String, String, i32) {
    let mut child = Command::new("cargo")
        .args(["run", "-p", "quickwin-cli", "--"])
        .args(args)
        .env("HOME", home)
        .env("QUICKWIN_ENV", "dev")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn CLI");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(script.as_bytes())
        .expect("Failed to write script");

    let output = child.wait_with_output().expect("Failed to run CLI");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn temp_home() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temp home")
}

#[test]
fn test_version_flag() {
    let home = temp_home();
    let output = run_shell(home.path(), &["--version"], "");
    assert!(output.2 == 0, "Version flag failed");
    assert!(output.0.contains("quickwin-cli"));
}

#[test]
fn test_empty_session_ends_at_eof() {
    let home = temp_home();
    let output = run_shell(home.path(), &[], "");
    assert!(output.2 == 0, "EOF session failed");
}

#[test]
fn test_quit_ends_session() {
    let home = temp_home();
    let output = run_shell(home.path(), &[], "quit\n");
    assert!(output.2 == 0, "Quit failed");
}

#[test]
fn test_add_and_list_sections() {
    let home = temp_home();
    let script = "add Water the plants --mins 5\n\
                  add Write the report --mins 45\n\
                  list\n\
                  quit\n";
    let output = run_shell(home.path(), &[], script);
    assert!(output.2 == 0, "Add and list failed");
    assert!(output.0.contains("Quick wins (5 min or less)"));
    assert!(output.0.contains("Water the plants (5 min, quick win)"));
    assert!(output.0.contains("Longer tasks"));
    assert!(output.0.contains("Write the report (45 min)"));
}

#[test]
fn test_plan_batch_with_shared_estimate() {
    let home = temp_home();
    let script = "plan\n\
                  Reply to Ana\n\
                  Stretch for a bit\n\
                  \n\
                  3\n\
                  list\n\
                  quit\n";
    let output = run_shell(home.path(), &[], script);
    assert!(output.2 == 0, "Plan batch failed");
    assert!(output.0.contains("Planned 2 activities at 3 min each."));
    assert!(output.0.contains("Reply to Ana (3 min, quick win)"));
    assert!(output.0.contains("Stretch for a bit (3 min, quick win)"));
}

#[test]
fn test_done_shows_in_history() {
    let home = temp_home();
    let script = "add Water the plants --mins 5\n\
                  done 1\n\
                  history\n\
                  quit\n";
    let output = run_shell(home.path(), &[], script);
    assert!(output.2 == 0, "Done and history failed");
    assert!(output.0.contains("Done: Water the plants"));
    assert!(output.0.contains("Today"));
    assert!(output.0.contains("Water the plants (5 min)"));
}

#[test]
fn test_edit_moves_between_sections() {
    let home = temp_home();
    let script = "add Write the report --mins 45\n\
                  edit 1 --mins 5\n\
                  list\n\
                  quit\n";
    let output = run_shell(home.path(), &[], script);
    assert!(output.2 == 0, "Edit failed");
    assert!(output.0.contains("Updated: Write the report (5 min, quick win)"));
    assert!(output.0.contains("Quick wins (5 min or less)"));
    assert!(!output.0.contains("Longer tasks"));
}

#[test]
fn test_unknown_reference_is_reported() {
    let home = temp_home();
    let output = run_shell(home.path(), &[], "done 9\nquit\n");
    assert!(output.2 == 0, "Unknown reference must not kill the session");
    assert!(output.0.contains("Activity not found: 9"));
}

#[test]
fn test_bad_command_keeps_session_alive() {
    let home = temp_home();
    let script = "frobnicate\n\
                  add Water the plants --mins 5\n\
                  list\n\
                  quit\n";
    let output = run_shell(home.path(), &[], script);
    assert!(output.2 == 0, "Bad command must not kill the session");
    assert!(output.0.contains("Water the plants (5 min, quick win)"));
}

#[test]
fn test_cancel_hides_until_all_flag() {
    let home = temp_home();
    let script = "add Water the plants --mins 5\n\
                  cancel 1\n\
                  list\n\
                  list --all\n\
                  reactivate 1\n\
                  list\n\
                  quit\n";
    let output = run_shell(home.path(), &[], script);
    assert!(output.2 == 0, "Cancel cycle failed");
    assert!(output.0.contains("Cancelled: Water the plants"));
    assert!(output.0.contains("No pending activities."));
    assert!(output.0.contains("Cancelled\n"), "list --all must show the cancelled section");
    assert!(output.0.contains("Reactivated: Water the plants"));
}

#[test]
fn test_show_prints_details() {
    let home = temp_home();
    let script = "add Water the plants --mins 5 --desc soak them well\n\
                  show 1\n\
                  quit\n";
    let output = run_shell(home.path(), &[], script);
    assert!(output.2 == 0, "Show failed");
    assert!(output.0.contains("id:        act-"));
    assert!(output.0.contains("quick win: yes"));
    assert!(output.0.contains("soak them well"));
    assert!(output.0.contains("Subtasks (suggested)"));
}

#[test]
fn test_focus_completes_and_marks_done() {
    let home = temp_home();
    let script = "add Stretch --mins 1\n\
                  focus 1 --complete --tick-ms 5\n\
                  list\n\
                  quit\n";
    let output = run_shell(home.path(), &[], script);
    assert!(output.2 == 0, "Focus session failed");
    assert!(output.0.contains("Focus: Stretch (01:00)"));
    assert!(output.0.contains("Session complete: Stretch"));
    assert!(output.0.contains("Done: Stretch"));
    assert!(output.0.contains("No pending activities."));
}

#[test]
fn test_focus_without_complete_keeps_pending() {
    let home = temp_home();
    let script = "add Stretch --mins 1\n\
                  focus 1 --tick-ms 5\n\
                  list\n\
                  quit\n";
    let output = run_shell(home.path(), &[], script);
    assert!(output.2 == 0, "Focus session failed");
    assert!(output.0.contains("Session complete: Stretch"));
    assert!(!output.0.contains("Done: Stretch"));
    assert!(output.0.contains("Stretch (1 min, quick win)"));
}

#[test]
fn test_list_json_output() {
    let home = temp_home();
    let script = "add Water the plants --mins 5\n\
                  list --json\n\
                  quit\n";
    let output = run_shell(home.path(), &[], script);
    assert!(output.2 == 0, "List JSON failed");
    assert!(output.0.contains("\"title\": \"Water the plants\""));
    assert!(output.0.contains("\"is_quick_win\": true"));
    assert!(output.0.contains("\"status\": \"pending\""));
}

#[test]
fn test_history_json_output() {
    let home = temp_home();
    let script = "add Water the plants --mins 5\n\
                  done 1\n\
                  history --json\n\
                  quit\n";
    let output = run_shell(home.path(), &[], script);
    assert!(output.2 == 0, "History JSON failed");
    assert!(output.0.contains("\"title\": \"Today\""));
    assert!(output.0.contains("\"completed\": true"));
}

#[test]
fn test_config_get_default() {
    let home = temp_home();
    let output = run_shell(home.path(), &[], "config get durations.default_minutes\nquit\n");
    assert!(output.2 == 0, "Config get failed");
    assert!(output.0.contains("25"));
}

#[test]
fn test_config_set_then_get() {
    let home = temp_home();
    let script = "config set timer.break_minutes 8\n\
                  config get timer.break_minutes\n\
                  quit\n";
    let output = run_shell(home.path(), &[], script);
    assert!(output.2 == 0, "Config set failed");
    assert!(output.0.contains("ok"));
    assert!(output.0.contains('8'));
}

#[test]
fn test_config_list() {
    let home = temp_home();
    let output = run_shell(home.path(), &[], "config list\nquit\n");
    assert!(output.2 == 0, "Config list failed");
    assert!(output.0.contains("default_minutes"));
    assert!(output.0.contains("break_minutes"));
}
