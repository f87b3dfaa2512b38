//! End-to-end tests for the `svcmsg` binary.
//!
//! Each test runs the compiled binary with the `SVCMSG_*` environment cleared
//! so configuration comes only from what the test supplies.

use assert_cmd::Command;
use rstest::{fixture, rstest};
use std::io::Write;
use tempfile::NamedTempFile;

#[fixture]
fn svcmsg() -> Command {
    #[expect(
        deprecated,
        clippy::expect_used,
        reason = "cargo_bin is the standard assert_cmd API and test panics are acceptable"
    )]
    let mut cmd = Command::cargo_bin("svcmsg").expect("binary should exist");
    cmd.env_remove("SVCMSG_DEFAULT_SERVICE")
        .env_remove("SVCMSG_ESCAPE_MODE")
        .env_remove("SVCMSG_CONFIG_PATH")
        .env("RUST_BACKTRACE", "0");
    cmd
}

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[rstest]
fn formats_with_repeated_arguments(mut svcmsg: Command) {
    svcmsg
        .args(["format", "Tests run: {$arg}, Failures: {$arg1}"])
        .args(["--arg", "arg=12", "--arg", "arg1=0"])
        .assert()
        .success()
        .stdout("Tests run: 12, Failures: 0\n");
}

#[rstest]
#[case("preserve-entities", "A&amp;B\n")]
#[case("unescape-entities", "A&B\n")]
fn escape_mode_flag_controls_entities(
    mut svcmsg: Command,
    #[case] mode: &str,
    #[case] expected: &str,
) {
    svcmsg
        .args(["format", "{$arg}&amp;{$arg1}", "--arg", "arg=A", "--arg", "arg1=B"])
        .args(["--escape-mode", mode])
        .assert()
        .success()
        .stdout(expected.to_owned());
}

#[rstest]
fn escape_mode_comes_from_environment(mut svcmsg: Command) {
    svcmsg
        .env("SVCMSG_ESCAPE_MODE", "UNESCAPE_ENTITIES")
        .args(["format", "&lt;{$arg}&gt;", "--arg", "arg=&amp;"])
        .assert()
        .success()
        .stdout("<&amp;>\n");
}

#[rstest]
fn unbound_placeholder_fails(mut svcmsg: Command) {
    let output = svcmsg
        .args(["format", "{$arg} {$arg1}", "--arg", "arg=1"])
        .output()
        .expect("command should execute");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("arg1"));
}

#[rstest]
fn malformed_template_fails(mut svcmsg: Command) {
    svcmsg.args(["format", "abc {$arg"]).assert().failure();
}

#[rstest]
fn default_uses_builtin_namespace(mut svcmsg: Command) {
    svcmsg
        .arg("default")
        .assert()
        .success()
        .stdout("python\npython$j2cl$service$loader$key\n");
}

#[rstest]
fn default_follows_environment(mut svcmsg: Command) {
    svcmsg
        .env("SVCMSG_DEFAULT_SERVICE", "kotlin")
        .arg("default")
        .assert()
        .success()
        .stdout("kotlin\nkotlin$j2cl$service$loader$key\n");
}

#[rstest]
fn numeric_default_from_environment_is_kept_verbatim(mut svcmsg: Command) {
    svcmsg
        .env("SVCMSG_DEFAULT_SERVICE", "007")
        .arg("default")
        .assert()
        .success()
        .stdout("007\n007$j2cl$service$loader$key\n");
}

#[rstest]
fn default_reads_config_file(mut svcmsg: Command) {
    let file = config_file("default_service = \"ruby\"\n");
    let path = file.path().to_str().expect("temp path is UTF-8");
    svcmsg
        .args(["default", "--config", path])
        .assert()
        .success()
        .stdout("ruby\nruby$j2cl$service$loader$key\n");
}

#[rstest]
fn environment_overrides_config_file(mut svcmsg: Command) {
    let file = config_file("default_service = \"ruby\"\n");
    let path = file.path().to_str().expect("temp path is UTF-8");
    svcmsg
        .env("SVCMSG_DEFAULT_SERVICE", "go")
        .args(["default", "--config", path])
        .assert()
        .success()
        .stdout("go\ngo$j2cl$service$loader$key\n");
}

#[rstest]
fn missing_config_file_fails(mut svcmsg: Command) {
    svcmsg
        .args(["default", "--config", "/nonexistent/svcmsg.toml"])
        .assert()
        .failure();
}

#[rstest]
fn key_prints_derived_key(mut svcmsg: Command) {
    svcmsg
        .args(["key", "python"])
        .assert()
        .success()
        .stdout("python$j2cl$service$loader$key\n");
}

#[rstest]
fn names_prints_one_name_per_line(mut svcmsg: Command) {
    svcmsg
        .args(["names", "_arg", "_arg1", "_arg2"])
        .assert()
        .success()
        .stdout("arg\narg1\narg2\n");
}
