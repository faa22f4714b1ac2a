use std::fs;
use std::process::{Command, Output};
use tempfile::tempdir;
fn clipcat(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_clipcat"))
        .args(args)
        .env_remove("CLIPCAT_EXCLUDE")
        .env_remove("CLIPCAT_LOG")
        .output()
        .expect("failed to run clipcat")
}
#[test]
fn cli_without_paths_exits_with_one() {
    let output = clipcat(&[]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Please provide file or directory names"));
}
#[test]
fn cli_missing_path_exits_with_one() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing/path");
    let output = clipcat(&["--stdout", missing.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("missing"));
}
#[test]
fn cli_stdout_prints_exact_buffer() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("a.txt");
    fs::write(&path, "hello\n").unwrap();
    fs::write(dir.path().join("b.bin"), [0u8, 1, 2, 3]).unwrap();
    let output = clipcat(&["--stdout", dir.path().to_str().unwrap()]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        format!("// {}\nhello\n\n", path.display())
    );
}
#[test]
fn cli_exclude_flag_and_env() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("keep.txt"), "keep\n").unwrap();
    fs::write(dir.path().join("drop.txt"), "drop\n").unwrap();
    let root = dir.path().to_str().unwrap();
    let output = clipcat(&["--stdout", "-e", "drop, ,", root]);
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("keep"));
    assert!(!stdout.contains("drop"));
    let output = Command::new(env!("CARGO_BIN_EXE_clipcat"))
        .args(["--stdout", root])
        .env("CLIPCAT_EXCLUDE", "keep")
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("drop"));
    assert!(!stdout.contains("keep"));
}
#[test]
fn cli_bad_detection_exits_with_one() {
    let output = clipcat(&["--detection", "magic", "."]);
    assert_eq!(output.status.code(), Some(1));
}
#[test]
fn cli_help_exits_with_zero() {
    let output = clipcat(&["--help"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("--exclude"));
}
#[test]
fn cli_stdout_keeps_raw_bytes() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("latin1.txt");
    fs::write(&path, b"caf\xe9\n").unwrap();
    let output = clipcat(&["--stdout", path.to_str().unwrap()]);
    assert!(output.status.success());
    let mut expected = format!("// {}\n", path.display()).into_bytes();
    expected.extend_from_slice(b"caf\xe9\n\n");
    assert_eq!(output.stdout, expected);
}
#[cfg(all(feature = "clipboard", target_os = "linux"))]
#[test]
fn cli_clipboard_failure_exits_with_one() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "hello\n").unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_clipcat"))
        .arg(dir.path())
        .env_remove("DISPLAY")
        .env_remove("WAYLAND_DISPLAY")
        .env_remove("CLIPCAT_EXCLUDE")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to copy to clipboard"));
}
