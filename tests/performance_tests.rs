use assert_cmd::cargo_bin;
use std::process::Command;
use tempfile::tempdir;

mod common;

#[test]
fn test_long_session_script() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("long_session.csv");
    common::generate_script(&path, 30_000).expect("Failed to generate script");

    let output = Command::new(cargo_bin!("kiosk"))
        .arg(&path)
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success(), "Binary failed on a long session");

    // 20_000 adds and 10_000 decrements spread evenly over four items.
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 5);
}
