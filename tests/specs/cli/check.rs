//! `formflow check` specs

use crate::prelude::*;

#[test]
fn valid_email_passes() {
    Project::empty()
        .formflow()
        .args(&["check", "email", "a@b.co"])
        .passes()
        .stdout_eq("valid\n");
}

#[test]
fn invalid_emails_fail() {
    for value in ["foo", "foo@", "@bar.com"] {
        Project::empty()
            .formflow()
            .args(&["check", "email", value])
            .fails()
            .code_is(1)
            .stdout_has("invalid: ");
    }
}

#[test]
fn phone_accepts_dashed_ten_digits() {
    Project::empty()
        .formflow()
        .args(&["check", "phone", "555-123-4567"])
        .passes();
}

#[test]
fn short_phone_fails() {
    Project::empty()
        .formflow()
        .args(&["check", "phone", "123"])
        .fails()
        .code_is(1);
}

#[test]
fn optional_phone_may_be_empty() {
    Project::empty()
        .formflow()
        .args(&["check", "phone", "", "--optional"])
        .passes();
}

#[test]
fn date_in_window_passes() {
    Project::empty()
        .formflow()
        .args(&["check", "date", &next_open_date()])
        .passes();
}

#[test]
fn past_date_fails() {
    Project::empty()
        .formflow()
        .args(&["check", "date", "2001-01-01"])
        .fails();
}

#[test]
fn json_verdict_includes_message() {
    let out = Project::empty()
        .formflow()
        .args(&["--json", "check", "email", "foo"])
        .fails();
    let verdict = out.json();
    assert_eq!(verdict["value"], "foo");
    assert_eq!(verdict["valid"], false);
    assert!(verdict["message"].is_string());
}
