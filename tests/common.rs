#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, with HOME pointed at a scratch directory so a real
/// user configuration never leaks into the run.
pub fn rts() -> Command {
    let mut cmd = cargo_bin_cmd!("rtimesheet");
    cmd.env("HOME", test_home());
    cmd
}

pub fn test_home() -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push("rtimesheet_test_home");
    fs::create_dir_all(&path).ok();
    path
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimesheet.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a scratch file and return its path
pub fn temp_file(name: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(name);
    fs::write(&path, content).expect("write temp file");
    path.to_string_lossy().to_string()
}

/// Initialize DB, set an employee and open the Mon–Fri week of 2024-01-08
pub fn init_db_with_week(db_path: &str) {
    rts()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    rts()
        .args(["--db", db_path, "employee", "--name", "Jane Doe"])
        .assert()
        .success();

    rts()
        .args(["--db", db_path, "new", "2024-01-10"])
        .assert()
        .success();
}
