//! Integration tests for listfmt-cli.

use std::io::Write as _;

use assert_cmd::cargo;
use predicates::prelude::*;

const BULLET: &str = " * foo\n * bar\n * baz\n";
const TAGGED: &str = "<ul>\n<li>foo</li>\n<li>bar</li>\n<li>baz</li>\n</ul>\n";

fn listfmt() -> assert_cmd::Command {
    let mut cmd = cargo::cargo_bin_cmd!("listfmt");
    cmd.env_remove("RUST_LOG")
        .env_remove("LISTFMT__DEFAULTS__NOTATION")
        .env_remove("LISTFMT__DEFAULTS__DISPATCH");
    cmd
}

#[test]
fn test_version_flag() {
    listfmt()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_demo_prints_every_rendering() {
    listfmt()
        .args(["--output-format", "plain", "demo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dynamic dispatch, bullet notation"))
        .stdout(predicate::str::contains("static dispatch, tagged notation"))
        .stdout(predicate::str::contains(BULLET))
        .stdout(predicate::str::contains(TAGGED));
}

#[test]
fn test_demo_json() {
    let out = listfmt()
        .args(["--output-format", "json", "demo"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let records: serde_json::Value = serde_json::from_slice(&out).unwrap();
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 4);
    assert_eq!(records[1]["dispatch"], "dynamic");
    assert_eq!(records[1]["notation"], "tagged");
    assert_eq!(records[1]["text"], TAGGED);
    assert_eq!(records[2]["dispatch"], "static");
    assert_eq!(records[2]["text"], BULLET);
}

#[test]
fn test_render_defaults_to_bullet_sample() {
    listfmt()
        .arg("render")
        .assert()
        .success()
        .stdout(BULLET);
}

#[test]
fn test_render_tagged_items_both_dispatches() {
    for dispatch in ["dynamic", "static"] {
        listfmt()
            .args(["render", "--notation", "tagged", "--dispatch", dispatch, "a", "b"])
            .assert()
            .success()
            .stdout("<ul>\n<li>a</li>\n<li>b</li>\n</ul>\n");
    }
}

#[test]
fn test_render_quiet_still_prints_list() {
    listfmt()
        .args(["-q", "render", "-n", "markdown", "x"])
        .assert()
        .success()
        .stdout(" * x\n");
}

#[test]
fn test_unsupported_notation_exits_with_user_error() {
    listfmt()
        .args(["render", "--notation", "latex", "x"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Unsupported notation 'latex'"))
        .stderr(predicate::str::contains("bullet"))
        .stderr(predicate::str::contains("tagged"));
}

#[test]
fn test_config_file_sets_default_notation() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[defaults]\nnotation = \"html\"\ndispatch = \"static\"").unwrap();

    listfmt()
        .arg("--config")
        .arg(file.path())
        .args(["render", "foo"])
        .assert()
        .success()
        .stdout("<ul>\n<li>foo</li>\n</ul>\n");
}

#[test]
fn test_env_overrides_default_notation() {
    listfmt()
        .env("LISTFMT__DEFAULTS__NOTATION", "tagged")
        .args(["render", "foo"])
        .assert()
        .success()
        .stdout("<ul>\n<li>foo</li>\n</ul>\n");
}

#[test]
fn test_bad_notation_in_config_is_reported_on_use() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[defaults]\nnotation = \"rst\"").unwrap();

    listfmt()
        .arg("--config")
        .arg(file.path())
        .arg("render")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unsupported notation 'rst'"));
}

#[test]
fn test_missing_config_file_is_configuration_error() {
    let dir = tempfile::tempdir().unwrap();
    listfmt()
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .arg("demo")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_notations_lists_aliases() {
    listfmt()
        .args(["--output-format", "plain", "notations"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bullet"))
        .stdout(predicate::str::contains("markdown"))
        .stdout(predicate::str::contains("html"));
}

#[test]
fn test_config_command_prints_toml() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[output]\nno_color = true").unwrap();

    listfmt()
        .arg("--config")
        .arg(file.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("[defaults]"))
        .stdout(predicate::str::contains("notation = \"bullet\""))
        .stdout(predicate::str::contains("no_color = true"));
}

#[test]
fn test_completions_bash() {
    listfmt()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("listfmt"));
}
