//! Configuration file specs

use crate::prelude::*;

#[test]
fn working_directory_config_is_picked_up() {
    let temp = Project::empty();
    temp.file(
        "formflow.toml",
        r#"
[booking]
time_slots = ["8:00 AM", "4:00 PM"]
"#,
    );

    temp.formflow()
        .args(&["slots"])
        .passes()
        .stdout_eq("8:00 AM\n4:00 PM\n");
}

#[test]
fn explicit_config_path_wins() {
    let temp = Project::empty();
    temp.file("formflow.toml", "[booking]\ntime_slots = [\"8:00 AM\"]\n");
    temp.file("other/flow.toml", "[booking]\ntime_slots = [\"5:00 PM\"]\n");

    temp.formflow()
        .args(&["--config", "other/flow.toml", "slots"])
        .passes()
        .stdout_eq("5:00 PM\n");
}

#[test]
fn invalid_config_is_reported() {
    let temp = Project::empty();
    temp.file("formflow.toml", "[pipeline]\nstep_timeout = \"0s\"\n");

    temp.formflow()
        .args(&["services"])
        .fails()
        .stderr_has("step_timeout");
}

#[test]
fn missing_config_path_is_reported() {
    Project::empty()
        .formflow()
        .args(&["--config", "nope.toml", "services"])
        .fails()
        .stderr_has("nope.toml");
}
