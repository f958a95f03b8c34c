//! End-to-end tests running the `embedres` binary in a scratch directory.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn embedres_cmd(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_embedres"));
    cmd.current_dir(dir)
        .args(args)
        .env_remove("EMBEDRES_NAMESPACE")
        .env_remove("EMBEDRES_OUTPUT")
        .env_remove("RUST_LOG");
    cmd
}

fn run(dir: &Path, args: &[&str]) -> Output {
    embedres_cmd(dir, args)
        .output()
        .expect("Failed to execute command")
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_worked_example() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("logo.png"), [0xDE, 0xAD]).unwrap();

    let output = run(
        temp_dir.path(),
        &["logo.png:logo", "--namespace", "assets", "--name", "data", "-o", "out/gen.hpp"],
    );

    assert!(output.status.success());
    assert!(stdout(&output).contains("[ OK ] File 'out/gen.hpp' generated"));

    let header = fs::read_to_string(temp_dir.path().join("out/gen.hpp")).unwrap();
    assert!(header.contains("#ifndef _ASSETS_GEN_HPP_\n#define _ASSETS_GEN_HPP_\n"));
    assert!(header.contains("namespace assets {\n"));
    assert!(header.contains("> const data =\n{\n    { \"logo\", { 222,173, } },\n};\n"));
    assert!(header.ends_with("}  // namespace assets\n\n#endif  // _ASSETS_GEN_HPP_\n"));
}

#[test]
fn test_no_resources_uses_defaults() {
    let temp_dir = TempDir::new().unwrap();

    let output = run(temp_dir.path(), &[]);

    assert_eq!(output.status.code(), Some(0));
    let header = fs::read_to_string(temp_dir.path().join("resources.hpp")).unwrap();
    assert!(header.contains("#ifndef _RESOURCES_RESOURCES_HPP_"));
    assert!(header.contains("namespace resources {\n"));
    assert!(header.contains("> const resources =\n{\n};\n"));
}

#[test]
fn test_missing_resource_is_not_fatal() {
    let temp_dir = TempDir::new().unwrap();

    let output = run(temp_dir.path(), &["nope.bin:nope", "-o", "gen.h"]);

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("[FAIL] Can't open file 'nope.bin'"));
    assert!(out.contains("[ OK ] File 'gen.h' generated"));

    let header = fs::read_to_string(temp_dir.path().join("gen.h")).unwrap();
    assert!(!header.contains("nope"));
    assert!(header.contains("{\n};\n"));
}

#[test]
fn test_pragma_guards() {
    let temp_dir = TempDir::new().unwrap();

    let output = run(temp_dir.path(), &["--guards", "pragma"]);

    assert!(output.status.success());
    let header = fs::read_to_string(temp_dir.path().join("resources.hpp")).unwrap();
    assert!(header.contains("#pragma once\n"));
    assert!(!header.contains("#ifndef"));
    assert!(!header.contains("#define"));
    assert!(!header.contains("#endif"));
}

#[test]
fn test_output_extension_is_appended() {
    let temp_dir = TempDir::new().unwrap();

    let output = run(temp_dir.path(), &["-o", "generated"]);

    assert!(output.status.success());
    assert!(temp_dir.path().join("generated.hpp").is_file());
    assert!(!temp_dir.path().join("generated").exists());
}

#[test]
fn test_empty_overrides_fall_back_to_defaults() {
    let temp_dir = TempDir::new().unwrap();

    let output = run(temp_dir.path(), &["--namespace", "", "--name", "", "-o", ""]);

    assert!(output.status.success());
    let header = fs::read_to_string(temp_dir.path().join("resources.hpp")).unwrap();
    assert!(header.contains("namespace resources {\n"));
    assert!(header.contains("> const resources =\n"));
}

#[test]
fn test_directory_create_failure() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("out"), "in the way").unwrap();

    let output = run(temp_dir.path(), &["-o", "out/gen.hpp"]);

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("[FAIL] Can't create directory 'out' for output file 'out/gen.hpp'"));
    assert!(!stdout(&output).contains("[ OK ]"));
}

#[test]
fn test_argument_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("a.bin"), [1, 2]).unwrap();
    fs::write(temp_dir.path().join("b.bin"), [3]).unwrap();
    fs::write(
        temp_dir.path().join("args.txt"),
        "a.bin:first\nb.bin:second\n--namespace\nassets\n",
    )
    .unwrap();

    let output = run(temp_dir.path(), &["@args.txt"]);

    assert!(output.status.success());
    let header = fs::read_to_string(temp_dir.path().join("resources.hpp")).unwrap();
    let first = header.find("{ \"first\", { 1,2, } },").unwrap();
    let second = header.find("{ \"second\", { 3, } },").unwrap();
    assert!(first < second);
    assert!(header.contains("namespace assets {"));
}

#[test]
fn test_missing_argument_file() {
    let temp_dir = TempDir::new().unwrap();

    let output = run(temp_dir.path(), &["@missing.txt"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Can't read argument file 'missing.txt'"));
}

#[test]
fn test_invalid_guard_style() {
    let temp_dir = TempDir::new().unwrap();

    let output = run(temp_dir.path(), &["--guards", "once"]);

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_dry_run_json_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("logo.png"), [0xDE, 0xAD]).unwrap();

    let output = run(
        temp_dir.path(),
        &["logo.png:logo", "gone.bin:gone", "-o", "out/gen", "--dry-run", "--json"],
    );

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["output_path"], "out/gen.hpp");
    assert_eq!(report["guard"], "_RESOURCES_GEN_HPP_");
    assert_eq!(report["guard_style"], "define");
    assert_eq!(report["written"][0]["alias"], "logo");
    assert_eq!(report["written"][0]["size"], 2);
    assert_eq!(report["skipped"][0]["alias"], "gone");
    assert!(!temp_dir.path().join("out").exists());
}

#[test]
fn test_dry_run_plain() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("logo.png"), [0xDE, 0xAD]).unwrap();

    let output = run(
        temp_dir.path(),
        &["logo.png:logo", "--guards", "pragma", "--dry-run"],
    );

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("Guard: #pragma once"));
    assert!(out.contains("✓ logo -> logo.png (2 bytes)"));
    assert!(!temp_dir.path().join("resources.hpp").exists());
}

#[test]
fn test_quiet_keeps_failures_but_drops_success_notice() {
    let temp_dir = TempDir::new().unwrap();

    let output = run(temp_dir.path(), &["-q", "x.bin:x"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "[FAIL] Can't open file 'x.bin'\n");
    assert!(temp_dir.path().join("resources.hpp").is_file());
}

#[test]
fn test_failures_are_reported_in_argument_order() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("ok.bin"), [1]).unwrap();

    let output = run(temp_dir.path(), &["first.bin:a", "ok.bin:b", "second.bin:c"]);

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "[FAIL] Can't open file 'first.bin'\n\
         [FAIL] Can't open file 'second.bin'\n\
         [ OK ] File 'resources.hpp' generated\n"
    );
}

#[test]
fn test_environment_supplies_namespace_and_output() {
    let temp_dir = TempDir::new().unwrap();

    let output = embedres_cmd(temp_dir.path(), &[])
        .env("EMBEDRES_NAMESPACE", "assets")
        .env("EMBEDRES_OUTPUT", "gen/embedded")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let header = fs::read_to_string(temp_dir.path().join("gen/embedded.hpp")).unwrap();
    assert!(header.contains("#ifndef _ASSETS_EMBEDDED_HPP_"));
    assert!(header.contains("namespace assets {\n"));
}

#[test]
fn test_empty_environment_values_fall_back_to_defaults() {
    let temp_dir = TempDir::new().unwrap();

    let output = embedres_cmd(temp_dir.path(), &["-q", "x.bin:x"])
        .env("EMBEDRES_NAMESPACE", "")
        .env("EMBEDRES_OUTPUT", "")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    assert!(!stdout(&output).contains("[ OK ]"));
    let header = fs::read_to_string(temp_dir.path().join("resources.hpp")).unwrap();
    assert!(header.contains("namespace resources {\n"));
}

#[test]
fn test_command_line_overrides_environment() {
    let temp_dir = TempDir::new().unwrap();

    let output = embedres_cmd(temp_dir.path(), &["--namespace", "cli", "-o", "cli.h"])
        .env("EMBEDRES_NAMESPACE", "env")
        .env("EMBEDRES_OUTPUT", "env.hpp")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let header = fs::read_to_string(temp_dir.path().join("cli.h")).unwrap();
    assert!(header.contains("namespace cli {\n"));
    assert!(!temp_dir.path().join("env.hpp").exists());
}

#[test]
fn test_duplicate_alias_warns_and_keeps_both_entries() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("a.bin"), [1]).unwrap();
    fs::write(temp_dir.path().join("b.bin"), [2]).unwrap();

    let output = run(temp_dir.path(), &["a.bin:k", "b.bin:k"]);

    assert!(output.status.success());
    assert!(stderr(&output).contains("alias listed more than once"));
    let header = fs::read_to_string(temp_dir.path().join("resources.hpp")).unwrap();
    let first = header.find("{ \"k\", { 1, } },").unwrap();
    let second = header.find("{ \"k\", { 2, } },").unwrap();
    assert!(first < second);
}

#[test]
fn test_duplicate_alias_of_unreadable_files_does_not_warn() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("a.bin"), [1]).unwrap();

    let output = run(temp_dir.path(), &["missing.bin:k", "a.bin:k", "gone.bin:k"]);

    assert!(output.status.success());
    assert!(!stderr(&output).contains("alias listed more than once"));
}
