//! Integration tests for basic stdin->stdout piping.

use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn plume() -> Command {
    let mut cmd = Command::cargo_bin("plume").unwrap();
    cmd.env("XDG_CONFIG_HOME", "/tmp/plume-test-no-config");
    cmd
}

#[test]
fn empty_stdin_exits_zero() {
    plume().write_stdin("").assert().success().stdout("");
}

#[test]
fn well_formed_record_is_prettified() {
    let input = r#"{"pid":12345,"hostname":"box","name":"app","level":"info","time":1768473000123,"msg":"hello world"}"#;
    plume()
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("[2026-01-15T10:30:00.123Z]"))
        .stdout(predicate::str::contains("INFO"))
        .stdout(predicate::str::contains("(app/12345 on box)"))
        .stdout(predicate::str::contains("hello world"));
}

#[test]
fn non_json_passes_through_unchanged() {
    let input = "this is not json\nit's just regular output\n";
    plume()
        .write_stdin(input)
        .assert()
        .success()
        .stdout("this is not json\nit's just regular output\n");
}

#[test]
fn null_literal_passes_through() {
    plume().write_stdin("null\n").assert().success().stdout("null\n");
}

#[test]
fn true_literal_passes_through() {
    plume().write_stdin("true\n").assert().success().stdout("true\n");
}

#[test]
fn object_missing_required_fields_passes_through() {
    plume()
        .write_stdin("{\"hello\":\"world\"}\n")
        .assert()
        .success()
        .stdout("{\"hello\":\"world\"}\n");
}

#[test]
fn extra_field_dumped_with_exact_indent() {
    let input = r#"{"level":"info","time":1768473000123,"pid":1,"hostname":"box","msg":"hello world","a":"b"}"#;
    let output = plume().write_stdin(input).output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[1], r#"    a: "b""#, "full output: {stdout}");
}

#[test]
fn extra_fields_keep_record_order() {
    let input = r#"{"level":"info","time":1768473000123,"zebra":"z","alpha":"a"}"#;
    let output = plume().write_stdin(input).output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    let zebra = stdout.find("zebra:").unwrap();
    let alpha = stdout.find("alpha:").unwrap();
    assert!(zebra < alpha, "record order must be preserved: {stdout}");
}

#[test]
fn error_record_renders_stack_not_dump() {
    let input = "{\"level\":\"error\",\"time\":1768473000123,\"type\":\"Error\",\"stack\":\"Error: boom\\n    at main (app.js:1:1)\",\"other\":\"field\"}";
    let output = plume().write_stdin(input).output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("    Error: boom"), "got: {stdout}");
    assert!(stdout.contains("        at main"), "got: {stdout}");
    assert!(!stdout.contains("other:"), "dump should be replaced: {stdout}");
}

#[test]
fn mixed_input_preserves_line_order() {
    let input = "plain one\n{\"level\":\"info\",\"time\":1768473000123,\"msg\":\"record\"}\nplain two\n";
    let output = plume().write_stdin(input).output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "plain one");
    assert!(lines[1].contains("record"));
    assert_eq!(lines[2], "plain two");
}

#[test]
fn final_line_without_trailing_newline_is_emitted() {
    plume()
        .write_stdin("no trailing newline")
        .assert()
        .success()
        .stdout("no trailing newline\n");
}

#[test]
fn extremely_long_line_no_crash() {
    let long_val = "x".repeat(1_100_000);
    let input = format!(
        r#"{{"level":"info","time":1768473000123,"msg":"big","data":"{long_val}"}}"#
    );
    plume().write_stdin(input).assert().success();
}

#[test]
fn unparseable_time_still_formats_rest_of_line() {
    let input = r#"{"level":"warn","time":"not a date","msg":"still here"}"#;
    let output = plume().write_stdin(input).output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("WARN"), "empty timestamp clause: {stdout}");
    assert!(stdout.contains("still here"));
}
