//! `formflow services`, `slots` and `format-phone` specs

use crate::prelude::*;

#[test]
fn services_list_defaults() {
    Project::empty()
        .formflow()
        .args(&["services"])
        .passes()
        .stdout_has("remote_start")
        .stdout_has("Remote Start - $399")
        .stdout_has("speaker_install");
}

#[test]
fn services_json_lists_catalog_entries() {
    let out = Project::empty()
        .formflow()
        .args(&["--json", "services"])
        .passes();
    let services = out.json();
    assert_eq!(services[0]["id"], "speaker_install");
    assert_eq!(services[0]["price"], 199);
}

#[test]
fn slots_list_defaults() {
    Project::empty()
        .formflow()
        .args(&["slots"])
        .passes()
        .stdout_eq("9:00 AM\n10:00 AM\n11:00 AM\n1:00 PM\n2:00 PM\n3:00 PM\n");
}

#[test]
fn open_dates_skip_sundays() {
    Project::empty()
        .formflow()
        .args(&["slots", "--dates"])
        .passes()
        .stdout_has(&next_open_date())
        .stdout_lacks("(Sun)");
}

#[test]
fn format_phone_normalizes() {
    Project::empty()
        .formflow()
        .args(&["format-phone", "555.123.4567"])
        .passes()
        .stdout_eq("(555) 123-4567\n");
}

#[test]
fn format_phone_json() {
    let out = Project::empty()
        .formflow()
        .args(&["--json", "format-phone", "15551234567"])
        .passes();
    assert_eq!(out.json()["formatted"], "+1 (555) 123-4567");
}
