//! Launcher integration tests
//!
//! Runs the built `envsafe` binary against stub executables placed in a
//! scratch `ENVSAFE_BIN_DIR`.

#![cfg(unix)]

use std::io::Write;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use std::process::{Command, Stdio};

const LAUNCHER: &str = env!("CARGO_BIN_EXE_envsafe");

fn write_stub(bin_dir: &Path, body: &str) {
    let path = bin_dir.join("envsafe-bin");
    std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
}

fn launcher(bin_dir: &Path) -> Command {
    let mut cmd = Command::new(LAUNCHER);
    cmd.env("ENVSAFE_BIN_DIR", bin_dir);
    cmd
}

#[test]
fn test_forwards_args_and_exit_code() {
    let dir = tempfile::tempdir().unwrap();
    write_stub(dir.path(), "echo \"$@\"\nexit 3");

    let output = launcher(dir.path()).arg("login").output().unwrap();

    assert_eq!(output.status.code(), Some(3));
    assert!(String::from_utf8_lossy(&output.stdout).contains("login"));
}

#[test]
fn test_forwards_flags_without_interpreting_them() {
    let dir = tempfile::tempdir().unwrap();
    write_stub(dir.path(), "printf '%s|' \"$@\"");

    let output = launcher(dir.path())
        .args(["pull", "--dev", "--help", "two words"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "pull|--dev|--help|two words|"
    );
}

#[test]
fn test_stdin_and_stderr_pass_through() {
    let dir = tempfile::tempdir().unwrap();
    write_stub(dir.path(), "read line\necho \"out:$line\"\necho \"err:$line\" >&2");

    let mut child = launcher(dir.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"secret-token\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "out:secret-token\n");
    assert!(String::from_utf8_lossy(&output.stderr).contains("err:secret-token"));
}

#[test]
fn test_missing_binary_exits_nonzero() {
    let dir = tempfile::tempdir().unwrap();

    let output = launcher(dir.path()).arg("login").output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(!output.stderr.is_empty());
}

#[test]
fn test_zero_exit_is_relayed() {
    let dir = tempfile::tempdir().unwrap();
    write_stub(dir.path(), "exit 0");

    let status = launcher(dir.path()).status().unwrap();
    assert_eq!(status.code(), Some(0));
}

#[test]
fn test_empty_bin_dir_does_not_search_path() {
    let on_path = tempfile::tempdir().unwrap();
    write_stub(on_path.path(), "exit 5");

    // Empty override falls back to `bin/` next to the launcher, where nothing
    // is installed; the stub on PATH must not be picked up.
    let output = Command::new(LAUNCHER)
        .env("ENVSAFE_BIN_DIR", "")
        .env("PATH", on_path.path())
        .arg("login")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
}
