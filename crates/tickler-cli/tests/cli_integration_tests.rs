/// CLI integration tests for tickler
///
/// These tests exercise the CLI commands as a black box, covering the add /
/// list / do / undo / delete / clear / parse / watch paths and their errors.
use predicates::prelude::*;

mod helpers;
use helpers::{assertions, CliTestHarness};

#[test]
fn test_cli_help_and_version() {
    let harness = CliTestHarness::new();

    harness
        .run_success(&["--help"])
        .stdout(predicate::str::contains("plain English"));

    harness
        .run_success(&["--version"])
        .stdout(predicate::str::contains("tickler"));

    harness
        .run_failure(&["invalid-command"])
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_parse_json_with_reference_time() {
    let harness = CliTestHarness::new();

    harness
        .run_success(&[
            "parse",
            "Lunch at noon tomorrow",
            "--now",
            "2024-01-15 09:00",
            "--json",
        ])
        .stdout(predicate::str::contains(r#""date": "2024-01-16""#))
        .stdout(predicate::str::contains(r#""time": "12:00""#))
        .stdout(predicate::str::contains(r#""cleanText": "Lunch""#));

    // parse never touches the database
    assert!(!harness.db_path().exists());
}

#[test]
fn test_parse_joins_words_and_reports_nothing_found() {
    let harness = CliTestHarness::new();

    harness
        .run_success(&["parse", "Submit", "report", "next", "Monday", "--now", "2024-01-15T10:00"])
        .stdout(predicate::str::contains("2024-01-22"))
        .stdout(predicate::str::contains("Text: Submit report"));

    harness
        .run_success(&["parse", "Buy 3 apples", "--json"])
        .stdout(predicate::str::contains(r#""date": """#))
        .stdout(predicate::str::contains(r#""time": """#))
        .stdout(predicate::str::contains(r#""cleanText": "Buy 3 apples""#));

    harness
        .run_failure(&["parse", "tomorrow", "--now", "yesterday-ish"])
        .stderr(assertions::has_error());
}

#[test]
fn test_add_extracts_due_date_and_time() {
    let harness = CliTestHarness::new();

    harness
        .run_success(&["add", "Call mom tomorrow at 5pm"])
        .stdout(assertions::task_created_successfully())
        .stdout(predicate::str::contains("Call mom"))
        .stdout(predicate::str::contains("5:00 PM"))
        .stdout(predicate::str::contains("17:00"));

    harness
        .run_success(&["list"])
        .stdout(assertions::has_task_table_headers())
        .stdout(predicate::str::contains("Call mom"))
        .stdout(predicate::str::contains("tomorrow").not());
}

#[test]
fn test_add_text_that_is_only_a_due_date() {
    let harness = CliTestHarness::new();

    harness
        .run_success(&["add", "tomorrow at 5pm"])
        .stdout(assertions::task_created_successfully())
        .stdout(predicate::str::contains("tomorrow at 5pm"))
        .stdout(predicate::str::contains("5:00 PM"))
        .stdout(predicate::str::contains("Picked up from the text"));

    harness
        .run_success(&["list"])
        .stdout(predicate::str::contains("tomorrow at 5pm"));
}

#[test]
fn test_add_with_manual_values_and_raw() {
    let harness = CliTestHarness::new();

    harness
        .run_success(&["add", "Renew passport tomorrow", "--date", "2030-05-01", "--time", "9am"])
        .stdout(predicate::str::contains("Renew passport tomorrow"))
        .stdout(predicate::str::contains("May 1, 2030 at 9:00 AM"));

    harness
        .run_success(&["add", "--raw", "Read chapter at 5pm"])
        .stdout(predicate::str::contains("Read chapter at 5pm"))
        .stdout(predicate::str::contains("Due:").not());

    harness
        .run_failure(&["add", "Bad time", "--time", "25:61"])
        .stderr(assertions::has_error());

    harness
        .run_failure(&["add", "   "])
        .stderr(predicate::str::contains("Please enter a task!"));
}

#[test]
fn test_complete_reopen_and_clear() {
    let harness = CliTestHarness::new();

    let id = harness.add_task(&["Water the plants"]);
    harness.add_task(&["Feed the cat"]);

    harness
        .run_success(&["do", &id])
        .stdout(predicate::str::contains("Completed task: 'Water the plants'"));

    harness
        .run_success(&["list"])
        .stdout(predicate::str::contains("Water the plants").not())
        .stdout(predicate::str::contains("Feed the cat"));

    harness
        .run_success(&["list", "--completed"])
        .stdout(predicate::str::contains("Water the plants"))
        .stdout(predicate::str::contains("Completed"));

    harness
        .run_success(&["undo", &id])
        .stdout(predicate::str::contains("Reopened task: 'Water the plants'"));

    harness.run_success(&["do", &id]);
    harness
        .run_success(&["clear"])
        .stdout(predicate::str::contains("Cleared 1 completed task."));

    harness
        .run_success(&["list", "--all"])
        .stdout(predicate::str::contains("Water the plants").not())
        .stdout(predicate::str::contains("Feed the cat"));

    harness
        .run_success(&["clear"])
        .stdout(predicate::str::contains("No completed tasks to clear."));
}

#[test]
fn test_delete_and_id_errors() {
    let harness = CliTestHarness::new();

    harness
        .run_success(&["list"])
        .stdout(assertions::empty_result());

    let id = harness.add_task(&["Throwaway task"]);

    harness
        .run_failure(&["do", "x"])
        .stderr(predicate::str::contains("at least 2 characters"));

    harness
        .run_failure(&["do", "zz"])
        .stderr(predicate::str::contains("No task found"));

    // LIKE wildcards do not match every task
    for wildcard in ["__", "%%", "_%"] {
        harness
            .run_failure(&["do", wildcard])
            .stderr(predicate::str::contains("No task found"));
    }

    harness
        .run_success(&["delete", &id, "--force"])
        .stdout(predicate::str::contains("Deleted task: 'Throwaway task'"));

    harness
        .run_success(&["list", "--all"])
        .stdout(assertions::empty_result());
}

#[test]
fn test_watch_once_announces_overdue_tasks_once_per_run() {
    let harness = CliTestHarness::new();

    harness.run_success(&["add", "Pay rent", "--date", "2020-01-01", "--time", "08:00"]);
    harness.run_success(&["add", "Future thing", "--date", "2999-01-01", "--time", "08:00"]);

    harness
        .run_success(&["watch", "--once"])
        .stdout(predicate::str::contains("Your task \"Pay rent\" is due!"))
        .stdout(predicate::str::contains("Future thing").not());
}

#[test]
fn test_watch_once_with_nothing_due() {
    let harness = CliTestHarness::new();

    harness.run_success(&["add", "Date only", "--date", "2020-01-01"]);

    harness
        .run_success(&["watch", "--once"])
        .stdout(predicate::str::contains("Nothing is due."));
}
