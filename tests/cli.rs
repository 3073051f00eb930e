//! Integration tests for the `chardetect` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn cmd() -> Command {
    Command::cargo_bin("chardetect").unwrap()
}

#[test]
fn detects_ascii_file() {
    let mut file = tempfile_with(b"hello world, this is ascii text");
    cmd()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("ascii"));
    file.close_silently();
}

#[test]
fn minimal_flag_prints_only_encoding_name() {
    let mut file = tempfile_with(b"hello world, this is ascii text");
    cmd()
        .arg("--minimal")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::eq("ascii\n"));
    file.close_silently();
}

#[test]
fn detects_utf8_bom_file() {
    let mut data = vec![0xEF, 0xBB, 0xBF];
    data.extend_from_slice(b"hello");
    let mut file = tempfile_with(&data);
    cmd()
        .arg("--minimal")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::eq("utf-8-sig\n"));
    file.close_silently();
}

#[test]
fn missing_file_reports_error_on_stderr() {
    cmd()
        .arg("/nonexistent/path/does-not-exist.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("chardetect"));
}

#[test]
fn reads_stdin_when_no_files_given() {
    cmd()
        .write_stdin("plain ascii from stdin")
        .arg("--minimal")
        .assert()
        .success()
        .stdout(predicate::eq("ascii\n"));
}

/// Minimal scratch-file helper so tests don't need an extra dev-dependency
/// just for temp files.
struct ScratchFile {
    path: std::path::PathBuf,
}

impl ScratchFile {
    fn path(&self) -> &std::path::Path {
        &self.path
    }

    fn close_silently(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

fn tempfile_with(data: &[u8]) -> ScratchFile {
    let mut path = std::env::temp_dir();
    let unique = format!("chardetect-test-{}-{}.bin", std::process::id(), data.len());
    path.push(unique);
    let mut f = std::fs::File::create(&path).unwrap();
    f.write_all(data).unwrap();
    ScratchFile { path }
}
