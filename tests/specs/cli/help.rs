//! Help and argument error specs

use crate::prelude::*;
use predicates::prelude::*;

#[test]
fn help_lists_commands() {
    Project::empty()
        .formflow()
        .into_command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("submit"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("format-phone"))
        .stdout(predicate::str::contains("services"))
        .stdout(predicate::str::contains("slots"));
}

#[test]
fn unknown_form_kind_is_a_usage_error() {
    Project::empty()
        .formflow()
        .into_command()
        .args(["submit", "survey"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("survey"));
}

#[test]
fn field_without_equals_is_rejected() {
    let temp = Project::empty();
    temp.formflow()
        .args(&["submit", "contact", "--field", "email"])
        .fails()
        .stderr_has("no `=` found");
}
