//! Specs for the editorconfig module.

use crate::prelude::*;

/// > Dry run performs no writes and logs exactly one line naming the path
#[test]
fn dry_run_writes_nothing() {
    let install = Install::new();
    let target = install.cwd().join(".editorconfig");

    let output = install
        .cmd()
        .args(["init", "-m", "editorconfig", "-t", "TOKEN", "-d"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(install.cwd_entries().is_empty());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let path_lines: Vec<&str> =
        stdout.lines().filter(|l| l.contains(&target.display().to_string())).collect();
    assert_eq!(path_lines, [format!("Writing \"{}\"", target.display())]);
}

/// > Writes the bundled template's exact bytes to .editorconfig
#[test]
fn writes_template_verbatim() {
    let install = Install::new();

    install
        .cmd()
        .args(["init", "-m", "editorconfig", "-t", "TOKEN"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Initializing \"editorconfig\"..."));

    assert_eq!(install.read(".editorconfig"), TEMPLATE);
    assert_eq!(install.cwd_entries(), [".editorconfig"]);
}

/// > An existing .editorconfig is overwritten without confirmation
#[test]
fn overwrites_existing_file() {
    let install = Install::new();
    std::fs::write(install.cwd().join(".editorconfig"), "# local edits\n").unwrap();

    install
        .cmd()
        .args(["init", "-m", "editorconfig", "-t", "TOKEN"])
        .assert()
        .success();

    assert_eq!(install.read(".editorconfig"), TEMPLATE);
}

/// > editorconfig alone never runs the package manager
#[cfg(unix)]
#[test]
fn does_not_install_packages() {
    let install = Install::new();

    install
        .cmd()
        .args(["init", "-m", "editorconfig", "-t", "TOKEN"])
        .assert()
        .success();

    assert!(install.npm_call().is_none());
}

/// > A missing template is fatal
#[test]
fn missing_template_fails() {
    let install = Install::new();
    std::fs::remove_file(install.root().join(".editorconfig")).unwrap();

    install
        .cmd()
        .args(["init", "-m", "editorconfig", "-t", "TOKEN"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("failed to read template"));

    assert!(install.cwd_entries().is_empty());
}
