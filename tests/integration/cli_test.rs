//! Binary tests
//!
//! Each test runs with HOME pointed at a temporary directory so a config
//! file on the host never leaks into the results.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn ansi2(home: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_ansi2"));
    cmd.env("HOME", home.path()).env_remove("RUST_LOG");
    cmd
}

fn write_config(home: &TempDir, contents: &str) {
    let dir = home.path().join(".config").join("ansi2");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.toml"), contents).unwrap();
}

#[test]
fn converts_stdin_to_svg_by_default() {
    let home = TempDir::new().unwrap();
    ansi2(&home)
        .write_stdin("\x1b[31mHi\x1b[0m")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<svg"))
        .stdout(predicate::str::contains(">Hi</text>"));
}

#[test]
fn text_format_strips_escapes() {
    let home = TempDir::new().unwrap();
    let output = ansi2(&home)
        .args(["-f", "text"])
        .write_stdin("\x1b[1mbold\x1b[0m\n\x1b[32mgreen\x1b[0m text")
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    insta::assert_snapshot!(stdout, @r"
    bold
    green text
    ");
}

#[test]
fn reads_input_file() {
    let home = TempDir::new().unwrap();
    let input = home.path().join("in.ans");
    fs::write(&input, "from a file").unwrap();
    ansi2(&home)
        .args(["-f", "html"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"<pre class="ansi2">from a file</pre>"#));
}

#[test]
fn invalid_utf8_is_replaced() {
    let home = TempDir::new().unwrap();
    ansi2(&home)
        .args(["-f", "text"])
        .write_stdin(vec![b'a', 0xff, b'b'])
        .assert()
        .success()
        .stdout("a\u{fffd}b");
}

#[test]
fn width_wraps_output() {
    let home = TempDir::new().unwrap();
    ansi2(&home)
        .args(["-f", "text", "-w", "4"])
        .write_stdin("abcdefgh")
        .assert()
        .success()
        .stdout("abcd\nefgh");
}

#[test]
fn compress_flag_shortens_ans() {
    let home = TempDir::new().unwrap();
    ansi2(&home)
        .args(["-f", "ans", "-c"])
        .write_stdin("\x1b[1mA\x1b[31mB\x1b[0m")
        .assert()
        .success()
        .stdout("\x1b[1mA\x1b[31mB\x1b[0m");
}

#[test]
fn zero_width_fails() {
    let home = TempDir::new().unwrap();
    ansi2(&home)
        .args(["-w", "0"])
        .write_stdin("x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid width"));
}

#[test]
fn missing_input_file_fails() {
    let home = TempDir::new().unwrap();
    ansi2(&home)
        .arg(home.path().join("missing.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read input file"));
}

#[test]
fn unknown_format_is_a_usage_error() {
    let home = TempDir::new().unwrap();
    ansi2(&home)
        .args(["-f", "png"])
        .write_stdin("x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn config_file_sets_defaults() {
    let home = TempDir::new().unwrap();
    write_config(&home, "[render]\nformat = \"text\"\nwidth = 2\n");
    ansi2(&home)
        .write_stdin("abcd")
        .assert()
        .success()
        .stdout("ab\ncd");
}

#[test]
fn flags_override_config_file() {
    let home = TempDir::new().unwrap();
    write_config(&home, "[render]\nformat = \"text\"\nwidth = 2\n");
    ansi2(&home)
        .args(["-f", "ans", "-w", "3"])
        .write_stdin("\x1b[31mabcd")
        .assert()
        .success()
        .stdout("\x1b[31mabc\nd\x1b[0m");
}

#[test]
fn broken_config_file_is_reported() {
    let home = TempDir::new().unwrap();
    write_config(&home, "[render]\nformat = \"png\"\n");
    ansi2(&home)
        .write_stdin("x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[test]
fn config_path_prints_location() {
    let home = TempDir::new().unwrap();
    ansi2(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with(".config/ansi2/config.toml\n"));
}

#[test]
fn config_show_prints_effective_values() {
    let home = TempDir::new().unwrap();
    write_config(&home, "[render]\ntheme = \"xterm\"\n");
    ansi2(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[render]"))
        .stdout(predicate::str::contains("format = \"svg\""))
        .stdout(predicate::str::contains("theme = \"xterm\""));
}

#[test]
fn completions_are_generated() {
    let home = TempDir::new().unwrap();
    ansi2(&home)
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef ansi2"));
}

#[test]
fn local_font_file_is_embedded() {
    let home = TempDir::new().unwrap();
    let font = home.path().join("mono.ttf");
    fs::write(&font, b"abc").unwrap();
    ansi2(&home)
        .arg("--font")
        .arg(&font)
        .write_stdin("x")
        .assert()
        .success()
        .stdout(predicate::str::contains("data:font/ttf;base64,YWJj"));
}
