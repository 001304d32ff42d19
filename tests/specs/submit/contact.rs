//! `formflow submit contact` specs

use crate::prelude::*;
use std::time::{Duration, Instant};

const CONTACT: &[&str] = &[
    "submit",
    "contact",
    "--field",
    "name=Sam Lee",
    "--field",
    "email=sam@example.com",
    "--field",
    "message=Do you install dash cams?",
];

#[test]
fn contact_message_resets_form_and_confirms() {
    Project::empty()
        .formflow()
        .args(CONTACT)
        .passes()
        .stdout_has("[submit] Sending... (disabled)")
        .stdout_has("[form] reset_form")
        .stdout_has("[confirmed] ")
        .stdout_has("[submit] Send Message (enabled)");
}

#[test]
fn invalid_optional_phone_is_still_checked() {
    Project::empty()
        .formflow()
        .args(CONTACT)
        .args(&["--field", "phone=123"])
        .fails()
        .stdout_has("[field] phone: ");
}

#[test]
fn unreachable_notify_service_fails_contact() {
    let temp = Project::empty();
    temp.file(
        "formflow.toml",
        "[endpoints]\nnotify = \"http://127.0.0.1:9/contact\"\n",
    );

    temp.formflow()
        .args(CONTACT)
        .fails()
        .stdout_has("[error] Failed to send message. Please try again or call us directly.");
}

#[test]
fn unresponsive_notify_service_times_out_and_exits() {
    let temp = Project::empty();
    temp.file(
        "formflow.toml",
        &format!(
            "[pipeline]\nstep_timeout = \"1s\"\n\n[endpoints]\nnotify = \"{}\"\n",
            unresponsive_endpoint()
        ),
    );

    let started = Instant::now();
    temp.formflow()
        .args(CONTACT)
        .timeout(Duration::from_secs(30))
        .fails()
        .code_is(1)
        .stdout_has("[error] Failed to send message. Please try again or call us directly.");
    assert!(started.elapsed() < Duration::from_secs(15));
}

#[test]
fn unreachable_tracking_does_not_fail_contact() {
    let temp = Project::empty();
    temp.file(
        "formflow.toml",
        "[endpoints]\ntracking = \"http://127.0.0.1:9/leads\"\n",
    );

    temp.formflow()
        .args(CONTACT)
        .passes()
        .stdout_has("[confirmed] ")
        .stdout_lacks("[error]");
}

#[test]
fn json_failure_carries_message() {
    let out = Project::empty()
        .formflow()
        .args(&["--json", "submit", "contact", "--field", "name=Sam"])
        .fails();
    let result = out.json();
    assert_eq!(result["status"], "failure");
    assert!(result["message"].is_string());
}
