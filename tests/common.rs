#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rti() -> Command {
    cargo_bin_cmd!("rattendance")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rattendance.sqlite", name));
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

/// Initialize an empty DB (schema only)
pub fn init_db(db_path: &str) {
    rti()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Initialize DB and register a small class:
/// S1 Alice (CS), S2 Bob (Math), S3 Carol (no course, pass id P-303)
pub fn init_db_with_students(db_path: &str) {
    init_db(db_path);

    rti()
        .args(["--db", db_path, "register", "S1", "Alice", "--course", "CS"])
        .assert()
        .success();

    rti()
        .args(["--db", db_path, "register", "S2", "Bob", "--course", "Math"])
        .assert()
        .success();

    rti()
        .args(["--db", db_path, "register", "S3", "Carol", "--pass-id", "P-303"])
        .assert()
        .success();
}

pub fn mark(db_path: &str, id: &str, date: &str) {
    rti()
        .args(["--db", db_path, "mark", id, "--date", date])
        .assert()
        .success();
}
