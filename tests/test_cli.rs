// CLI integration tests for wrapref

use std::path::Path;
use std::process::{Command, Output};

const SOURCE: &str = "\
declare function onResult(cb: (value: string, index: number) => void): void;
declare function handler(value: string, index: number): void;
onResult(handler);
";

fn write_source(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("main.ts");
    std::fs::write(&path, SOURCE).expect("write source");
    path
}

/// Run the binary with an isolated user config directory.
fn wrapref(config_home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_wrapref"))
        .args(args)
        .env("XDG_CONFIG_HOME", config_home)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_help_flag_shows_subcommands() {
    let dir = tempfile::tempdir().unwrap();
    let output = wrapref(dir.path(), &["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Help should exit with success");
    assert!(stdout.contains("wrapref"), "Got: {}", stdout);
    assert!(stdout.contains("refactors"), "Got: {}", stdout);
    assert!(stdout.contains("apply"), "Got: {}", stdout);
}

#[test]
fn test_refactors_lists_descriptor_as_json() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_source(dir.path());
    let output = wrapref(dir.path(), &["refactors", file.to_str().unwrap(), "--at", "3:10"]);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[0]["name"], "wrap-function-reference-info");
    assert_eq!(json[0]["actions"][0]["name"], "wrap-function-reference");
}

#[test]
fn test_refactors_not_applicable_exits_with_two() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_source(dir.path());
    // `onResult` is the callee
    let output = wrapref(dir.path(), &["refactors", file.to_str().unwrap(), "--at", "3:1"]);

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "[]");
}

#[test]
fn test_apply_prints_rewritten_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_source(dir.path());
    let output = wrapref(dir.path(), &["apply", file.to_str().unwrap(), "--at", "3:10"]);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8(output.stdout).unwrap();
    insta::assert_snapshot!(stdout, @r"
    declare function onResult(cb: (value: string, index: number) => void): void;
    declare function handler(value: string, index: number): void;
    onResult((value, index) => handler(value, index));
    ");
    assert_eq!(std::fs::read_to_string(&file).unwrap(), SOURCE, "file must be untouched");
}

#[test]
fn test_apply_write_rewrites_in_place() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_source(dir.path());
    let offset = SOURCE.find("(handler)").unwrap() + 1;
    let output = wrapref(
        dir.path(),
        &["apply", file.to_str().unwrap(), "--at", &offset.to_string(), "--write"],
    );

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(output.stdout.is_empty());
    let rewritten = std::fs::read_to_string(&file).unwrap();
    assert!(rewritten.ends_with("onResult((value, index) => handler(value, index));\n"));
}

#[test]
fn test_apply_diff_shows_unified_diff() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_source(dir.path());
    let output = wrapref(
        dir.path(),
        &["apply", file.to_str().unwrap(), "--at", "3:10", "--diff"],
    );

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("-onResult(handler);"), "Got: {}", stdout);
    assert!(
        stdout.contains("+onResult((value, index) => handler(value, index));"),
        "Got: {}",
        stdout
    );
}

#[test]
fn test_apply_write_and_diff_conflict() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_source(dir.path());
    let output = wrapref(
        dir.path(),
        &["apply", file.to_str().unwrap(), "--at", "3:10", "--write", "--diff"],
    );
    assert!(!output.status.success());
}

#[test]
fn test_apply_not_applicable_exits_with_two() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_source(dir.path());
    let output = wrapref(dir.path(), &["apply", file.to_str().unwrap(), "--at", "1:1"]);

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not applicable"), "Got: {}", stderr);
}

#[test]
fn test_apply_reports_unsupported_parameter_type() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("union.ts");
    std::fs::write(
        &file,
        "declare function run(cb: (() => void) | string): void;\ndeclare function fn(): void;\nrun(fn);\n",
    )
    .unwrap();
    let output = wrapref(dir.path(), &["apply", file.to_str().unwrap(), "--at", "3:5"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Parameter type is not a function: UnionType"),
        "Got: {}",
        stderr
    );
}

#[test]
fn test_config_file_controls_arrow_parens() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("single.ts");
    std::fs::write(
        &file,
        "declare function run(cb: (value: string) => void): void;\ndeclare function fn(v: string): void;\nrun(fn);\n",
    )
    .unwrap();
    let config = dir.path().join("settings.toml");
    std::fs::write(&config, "arrow_parens = \"always\"\n").unwrap();

    let output = wrapref(
        dir.path(),
        &[
            "apply",
            file.to_str().unwrap(),
            "--at",
            "3:5",
            "--config",
            config.to_str().unwrap(),
        ],
    );
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(String::from_utf8_lossy(&output.stdout).contains("run((value) => fn(value));"));
}

#[test]
fn test_user_config_enables_coarse_mode() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_source(dir.path());
    let config_dir = dir.path().join("wrapref");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("wrapref.toml"),
        "strict_argument_position = false\n",
    )
    .unwrap();

    // `onResult` as callee is offered once the strict check is off
    let output = wrapref(dir.path(), &["refactors", file.to_str().unwrap(), "--at", "3:1"]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
}

#[test]
fn test_missing_explicit_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_source(dir.path());
    let missing = dir.path().join("nope.toml");
    let output = wrapref(
        dir.path(),
        &[
            "refactors",
            file.to_str().unwrap(),
            "--at",
            "3:10",
            "--config",
            missing.to_str().unwrap(),
        ],
    );
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_invalid_position_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_source(dir.path());
    let output = wrapref(dir.path(), &["refactors", file.to_str().unwrap(), "--at", "99:1"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid position"));
}
