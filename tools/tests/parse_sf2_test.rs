//! Runs the `parse-sf2` binary end to end

use rstest::rstest;
use serde_json::{json, Value};
use std::{
    io::Write,
    path::{Path, PathBuf},
    process::{Command, Output},
};
use tempfile::NamedTempFile;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../test").join(name)
}

fn parse_sf2(path: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_parse-sf2"))
        .env_remove("RUST_LOG")
        .arg("--file")
        .arg(path)
        .output()
        .expect("failed to launch parse-sf2")
}

#[rstest]
#[case::two_presets(
    "two_presets.sf2",
    "[{\"name\": \"Grand Piano\", \"preset\": 0, \"bank\": 0}, {\"name\": \"Strings\", \"preset\": 48, \"bank\": 0}]\n"
)]
#[case::empty("empty.sf2", "[]\n")]
#[case::unsorted(
    "unsorted.sf2",
    "[{\"name\": \"Strings\", \"preset\": 48, \"bank\": 0}, \
     {\"name\": \"Standard Kit\", \"preset\": 0, \"bank\": 128}, \
     {\"name\": \"Caf\\u00e9 Organ\", \"preset\": 16, \"bank\": 8}, \
     {\"name\": \"Grand Piano\", \"preset\": 0, \"bank\": 0}]\n"
)]
fn given_soundfont_when_parsing_then_prints_presets(#[case] name: &str, #[case] expected: &str) {
    let output = parse_sf2(&fixture(name));

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8(output.stdout).unwrap(), expected);
    assert!(output.stderr.is_empty());
}

#[test]
fn given_output_when_parsed_back_then_matches_presets() {
    let output = parse_sf2(&fixture("unsorted.sf2"));
    let presets: Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(
        presets,
        json!([
            { "name": "Strings", "preset": 48, "bank": 0 },
            { "name": "Standard Kit", "preset": 0, "bank": 128 },
            { "name": "Café Organ", "preset": 16, "bank": 8 },
            { "name": "Grand Piano", "preset": 0, "bank": 0 },
        ])
    );
}

#[test]
fn given_same_file_when_parsing_twice_then_output_is_identical() {
    let first = parse_sf2(&fixture("two_presets.sf2"));
    let second = parse_sf2(&fixture("two_presets.sf2"));

    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn given_missing_file_when_parsing_then_fails() {
    let output = parse_sf2(&fixture("does_not_exist.sf2"));

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("does_not_exist.sf2"), "stderr: {stderr}");
}

#[rstest]
#[case::text(b"This is not a SoundFont\n".as_slice())]
#[case::wave(b"RIFF\x04\x00\x00\x00WAVE".as_slice())]
#[case::empty(b"".as_slice())]
fn given_invalid_data_when_parsing_then_fails(#[case] contents: &[u8]) {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents).unwrap();
    file.flush().unwrap();

    let output = parse_sf2(file.path());

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Parsing the SoundFont"), "stderr: {stderr}");
}

#[rstest]
#[case::riff_id(10)]
#[case::riff_header(12)]
#[case::info_list(60)]
#[case::sample_data(150)]
#[case::preset_headers(338)]
#[case::last_byte(397)]
fn given_truncated_file_when_parsing_then_fails(#[case] len: usize) {
    let source = std::fs::read(fixture("two_presets.sf2")).unwrap();
    assert!(len < source.len());

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(&source[..len]).unwrap();
    file.flush().unwrap();

    let output = parse_sf2(file.path());

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Parsing the SoundFont"), "stderr: {stderr}");
}

#[test]
fn given_oversized_riff_header_when_parsing_then_fails() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"RIFF\x64\x00\x00\x00sfbk").unwrap();
    file.flush().unwrap();

    let output = parse_sf2(file.path());

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("past the end"), "stderr: {stderr}");
}

#[test]
fn given_no_arguments_when_parsing_then_reports_usage() {
    let output = Command::new(env!("CARGO_BIN_EXE_parse-sf2"))
        .output()
        .expect("failed to launch parse-sf2");

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("--file"), "stderr: {stderr}");
}
