//! `formflow submit booking` specs

use crate::prelude::*;

fn submit_booking(temp: &Project, extra: &[&str]) -> Cli {
    let fields = booking_args(&next_open_date());
    let mut args: Vec<&str> = vec!["submit", "booking"];
    args.extend(fields.iter().map(String::as_str));
    args.extend(extra);
    temp.formflow().args(&args)
}

#[test]
fn booking_without_services_confirms_with_generated_id() {
    let temp = Project::empty();

    submit_booking(&temp, &[])
        .passes()
        .stdout_has("[submit] Processing... (disabled)")
        .stdout_has("[form] hide_form")
        .stdout_has("[confirmed] ORD-")
        .stdout_lacks("[error]");
}

#[test]
fn configured_prefix_shapes_generated_id() {
    let temp = Project::empty();
    temp.file("formflow.toml", "[ids]\nprefix = \"SHOP\"\n");

    submit_booking(&temp, &[]).passes().stdout_has("[confirmed] SHOP-");
}

#[test]
fn json_result_reports_success() {
    let temp = Project::empty();

    let out = submit_booking(&temp, &["--json"]).passes();
    let result = out.json();
    assert_eq!(result["status"], "success");
    assert!(result["confirmation_id"].as_str().unwrap().starts_with("ORD-"));
}

#[test]
fn missing_required_field_fails_validation() {
    let temp = Project::empty();

    submit_booking(&temp, &["--field", "first_name="])
        .fails()
        .code_is(1)
        .stdout_has("[field] first_name: ")
        .stdout_has("[error] ")
        .stdout_has("[submit] Book Installation (enabled)")
        .stdout_lacks("Processing...");
}

#[test]
fn unknown_service_fails_validation() {
    let temp = Project::empty();

    submit_booking(&temp, &["--service", "teleporter"])
        .fails()
        .stdout_has("[field] service: ");
}

#[test]
fn unreachable_record_service_shows_generic_failure() {
    let temp = Project::empty();
    temp.file(
        "formflow.toml",
        "[endpoints]\nrecord = \"http://127.0.0.1:9/bookings\"\n",
    );

    submit_booking(&temp, &[])
        .fails()
        .code_is(1)
        .stdout_has("[error] Booking failed")
        .stdout_has("[submit] Book Installation (enabled)")
        .stdout_lacks("[confirmed]");
}

#[test]
fn input_file_supplies_fields() {
    let temp = Project::empty();
    temp.file(
        "booking.json",
        &format!(
            r#"{{
  "first_name": "Jane",
  "last_name": "Doe",
  "email": "jane@example.com",
  "phone": "5551234567",
  "vehicle_year": 2019,
  "vehicle_make": "Honda",
  "vehicle_model": "Civic",
  "services": ["speaker_install", "backup_camera"],
  "date": "{}",
  "time_slot": "1:00 PM"
}}"#,
            next_open_date()
        ),
    );

    temp.formflow()
        .args(&["submit", "booking", "--input", "booking.json"])
        .passes()
        .stdout_has("[confirmed] ");
}
