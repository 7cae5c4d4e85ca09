mod common;
use common::{init_db_with_students, mark, rti, setup_test_db, temp_out};
use predicates::str::contains;
use std::fs;
use std::path::Path;

#[test]
fn test_db_info_and_check() {
    let db_path = setup_test_db("db_info");
    init_db_with_students(&db_path);
    mark(&db_path, "S1", "2025-09-01");

    rti()
        .args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Students:"))
        .stdout(contains("2025-09-01"));

    rti()
        .args(["--db", &db_path, "db", "--check", "--migrate"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"))
        .stdout(contains("Schema already up to date"));
}

#[test]
fn test_log_records_writes() {
    let db_path = setup_test_db("db_log");
    init_db_with_students(&db_path);
    mark(&db_path, "S2", "2025-09-01");

    rti()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("migration_applied"))
        .stdout(contains("register"))
        .stdout(contains("Present on 2025-09-01"));
}

#[test]
fn test_backup_plain_and_compressed() {
    let db_path = setup_test_db("db_backup");
    init_db_with_students(&db_path);

    let copy = temp_out("db_backup", "sqlite");
    rti()
        .args(["--db", &db_path, "backup", "--file", &copy])
        .assert()
        .success()
        .stdout(contains("Backup created"));
    assert!(Path::new(&copy).exists());

    let zipped = temp_out("db_backup_zip", "sqlite");
    let zip_path = Path::new(&zipped).with_extension("zip");
    fs::remove_file(&zip_path).ok();

    rti()
        .args(["--db", &db_path, "backup", "--file", &zipped, "--compress"])
        .assert()
        .success();

    assert!(zip_path.exists());
    assert!(!Path::new(&zipped).exists());
}
