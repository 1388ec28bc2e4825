//! Tests for `cornerft list`, `list-unread` and `latest`.

use crate::support::*;

#[test]
fn test_list_prints_every_file_in_platform_order() {
    let t = Test::with_standard_listing();

    let output = t.list();
    assert_success(&output);
    assert_stdout_lines(&output, ALL_FILES);
}

#[test]
fn test_list_unread_prints_only_unread_files() {
    let t = Test::with_standard_listing();

    let output = t.list_unread();
    assert_success(&output);
    assert_stdout_lines(&output, UNREAD_FILES);
}

#[test]
fn test_list_of_an_empty_directory_prints_nothing() {
    let t = Test::new();
    t.platform.mount_listing(empty_listing());

    let output = t.list();
    assert_success(&output);
    assert_eq!(stdout(&output), "");
}

#[test]
fn test_list_unread_when_everything_was_read_prints_nothing() {
    let t = Test::new();
    t.platform.mount_listing(serde_json::json!({
        "files": [file_entry(
            &t.platform.url(),
            "0001",
            "already-read.gpg",
            "2026-08-01T05:30:00Z",
            "2026-08-01T09:00:00Z",
        )]
    }));

    let output = t.list_unread();
    assert_success(&output);
    assert_eq!(stdout(&output), "");
}

#[test]
fn test_latest_prints_the_newest_file() {
    let t = Test::with_standard_listing();

    let output = t.latest();
    assert_success(&output);
    assert_stdout_lines(&output, &[LATEST_FILE]);
}

#[test]
fn test_latest_prefers_the_later_entry_on_a_tied_put_date() {
    let t = Test::new();
    t.platform.mount_listing(tied_listing(&t.platform.url()));

    let output = t.latest();
    assert_success(&output);
    assert_stdout_lines(&output, &["tie-b.gpg"]);
}

#[test]
fn test_latest_of_an_empty_directory_fails() {
    let t = Test::new();
    t.platform.mount_listing(empty_listing());

    let output = t.latest();
    assert_failure(&output);
    assert_stderr_contains(&output, "file not found");
}
