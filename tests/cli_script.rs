use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

fn script_command(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("contact_form_cli").unwrap();
    cmd.env("CONTACT_FORM_CLI_SCRIPT", "1")
        .env("CONTACT_FORM_HOME", home.path())
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn script_mode_submits_valid_form() {
    let home = TempDir::new().unwrap();
    let input = "set firstName Ann
set lastName Lee
set email ann@lee.com
set phone 5551234567
set username annlee1
set password secret1
set comments \"hello there\"
submit
show
exit
";

    script_command(&home)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Form is valid. Ready to submit."))
        .stdout(contains("Banner (alert-success)"))
        .stdout(contains("\"*******\""))
        .stdout(contains("secret1").not());
}

#[test]
fn script_mode_rejects_empty_submission() {
    let home = TempDir::new().unwrap();
    script_command(&home)
        .write_stdin("submit\nexit\n")
        .assert()
        .success()
        .stdout(contains("Please fix the errors and try again."))
        .stdout(contains("Form is valid").not());
}

#[test]
fn wizard_blocks_until_step_is_valid() {
    let home = TempDir::new().unwrap();
    let input = "wizard on
next
set firstName Ann
set lastName Lee
set email ann@lee.com
next
prev
exit
";

    script_command(&home)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Step 1 has errors: firstName, lastName, email."))
        .stdout(contains("Moved to step 2."))
        .stdout(contains("Moved to step 1."));
}

#[test]
fn navigation_without_wizard_is_refused() {
    let home = TempDir::new().unwrap();
    script_command(&home)
        .write_stdin("next\nexit\n")
        .assert()
        .success()
        .stdout(contains("Enable wizard mode first"));
}

#[test]
fn unknown_names_get_suggestions() {
    let home = TempDir::new().unwrap();
    script_command(&home)
        .write_stdin("set emial a@b.co\nsbumit\nexit\n")
        .assert()
        .success()
        .stdout(contains("Unknown field `emial`. Did you mean `email`?"))
        .stdout(contains("Unknown command `sbumit`. Did you mean `submit`?"));
}

#[test]
fn config_file_enables_wizard_and_layout() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("custom.json");
    std::fs::write(
        &config,
        r#"{"wizard": true, "plain_output": true, "steps": [
            {"step": 1, "fields": ["comments"]},
            {"step": 2, "fields": ["firstName", "lastName", "email", "phone", "username", "password"]}
        ]}"#,
    )
    .unwrap();

    script_command(&home)
        .arg(&config)
        .write_stdin("show\nset comments hi\nnext\nshow\nexit\n")
        .assert()
        .success()
        .stdout(contains("Mode: wizard (step 1 of 2)"))
        .stdout(contains("Moved to step 2."))
        .stdout(contains("Mode: wizard (step 2 of 2)"));
}

#[test]
fn layout_leaving_fields_out_is_rejected() {
    let home = TempDir::new().unwrap();
    std::fs::write(
        home.path().join("form.json"),
        r#"{"steps": [{"step": 1, "fields": ["firstName", "lastName"]}]}"#,
    )
    .unwrap();

    script_command(&home)
        .write_stdin("exit\n")
        .assert()
        .failure()
        .stderr(contains("field `email` is not assigned to any step"));
}

#[test]
fn quiet_output_hides_info_messages() {
    let home = TempDir::new().unwrap();
    std::fs::write(home.path().join("form.json"), r#"{"quiet_output": true}"#).unwrap();

    script_command(&home)
        .write_stdin("wizard on\nnext\nexit\n")
        .assert()
        .success()
        .stdout(contains("Wizard mode enabled").not())
        .stdout(contains("Step 1 has errors"));
}

#[test]
fn nothing_runs_after_exit() {
    let home = TempDir::new().unwrap();
    script_command(&home)
        .write_stdin("exit\nsubmit\n")
        .assert()
        .success()
        .stdout(contains("Please fix the errors").not());
}

#[test]
fn broken_config_exits_with_error() {
    let home = TempDir::new().unwrap();
    std::fs::write(home.path().join("form.json"), "{ not json").unwrap();

    script_command(&home)
        .write_stdin("exit\n")
        .assert()
        .failure()
        .stderr(contains("Error: Configuration error"));
}
