use cmini_check::config::Config;
use cmini_check::driver::{check, load_source, SAMPLE_LABEL};
use cmini_check::error::CompilerError;
use cmini_check::report::Status;
use cmini_check::SAMPLE_PROGRAM;
use std::fs;
use std::path::PathBuf;

fn write_program(dir: &tempfile::TempDir, name: &str, source: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, source).unwrap();
    path
}

#[test]
fn embedded_sample_without_path_or_config() {
    let (label, source) = load_source(None, &Config::default()).unwrap();
    assert_eq!(label, SAMPLE_LABEL);
    assert_eq!(source, SAMPLE_PROGRAM);
}

#[test]
fn configured_sample_replaces_embedded_one() {
    let dir = tempfile::tempdir().unwrap();
    let sample = write_program(&dir, "sample.c", "int x;");
    let config = Config {
        sample_path: Some(sample.clone()),
        ..Config::default()
    };

    let (label, source) = load_source(None, &config).unwrap();
    assert_eq!(label, sample.display().to_string());
    assert_eq!(source, "int x;");
}

#[test]
fn explicit_path_wins_over_configured_sample() {
    let dir = tempfile::tempdir().unwrap();
    let sample = write_program(&dir, "sample.c", "int x;");
    let explicit = write_program(&dir, "explicit.c", "int y;");
    let config = Config {
        sample_path: Some(sample),
        ..Config::default()
    };

    let (_, source) = load_source(Some(&explicit), &config).unwrap();
    assert_eq!(source, "int y;");
}

#[test]
fn missing_file_is_file_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.c");
    match load_source(Some(&missing), &Config::default()) {
        Err(CompilerError::FileNotFound(path)) => assert_eq!(path, missing),
        other => panic!("expected FileNotFound, got {other:?}"),
    }
}

#[test]
fn check_reports_missing_file_as_unexpected() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.c");
    let report = check(Some(&missing), &Config::default());
    assert_eq!(report.status, Status::Unexpected);
    assert_eq!(report.source, missing.display().to_string());
    assert_eq!(report.exit_status(), 1);
    assert!(report.to_string().starts_with("Parsing failed due to an unexpected error: FileNotFoundError"));
}

#[test]
fn check_accepts_embedded_sample() {
    let report = check(None, &Config::default());
    assert_eq!(report.status, Status::Accepted);
    assert_eq!(report.source, SAMPLE_LABEL);
    assert_eq!(report.exit_status(), 0);
}

#[test]
fn check_rejects_file_with_syntax_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_program(&dir, "bad.c", "int main()\nbegin\nif(a>b) begin printf(a); end end");
    let report = check(Some(&path), &Config::default());
    assert_eq!(report.status, Status::SyntaxError);
    assert_eq!(report.exit_status(), 1);
}
