mod common;
use common::{init_db_with_students, mark, rti, setup_test_db};
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

#[test]
fn test_mark_and_list_day() {
    let db_path = setup_test_db("mark_list");
    init_db_with_students(&db_path);

    rti()
        .args(["--db", &db_path, "mark", "S1", "--date", "2025-09-01"])
        .assert()
        .success()
        .stdout(contains("S1 (Alice) marked Present on 2025-09-01"));

    rti()
        .args(["--db", &db_path, "list", "--date", "2025-09-01"])
        .assert()
        .success()
        .stdout(contains("Alice"))
        .stdout(contains("Bob").not())
        .stdout(contains("Present: 1  Absent: 0  Total: 1"));
}

#[test]
fn test_mark_unknown_student_writes_nothing() {
    let db_path = setup_test_db("mark_unknown");
    init_db_with_students(&db_path);

    rti()
        .args(["--db", &db_path, "mark", "unknown123", "--date", "2025-09-01"])
        .assert()
        .failure()
        .stderr(contains("Student not found: unknown123"));

    rti()
        .args(["--db", &db_path, "list", "--date", "2025-09-01"])
        .assert()
        .success()
        .stdout(contains("No attendance recorded for 2025-09-01"));
}

#[test]
fn test_mark_is_exact_match() {
    let db_path = setup_test_db("mark_exact");
    init_db_with_students(&db_path);

    rti()
        .args(["--db", &db_path, "mark", "s1", "--date", "2025-09-01"])
        .assert()
        .failure()
        .stderr(contains("Student not found: s1"));
}

#[test]
fn test_remark_keeps_latest_status() {
    let db_path = setup_test_db("mark_twice");
    init_db_with_students(&db_path);

    mark(&db_path, "S2", "2025-09-02");

    rti()
        .args(["--db", &db_path, "mark", "S2", "--date", "2025-09-02", "--absent"])
        .assert()
        .success()
        .stdout(contains("Replaced previous status: Present"));

    rti()
        .args(["--db", &db_path, "list", "--date", "2025-09-02"])
        .assert()
        .success()
        .stdout(contains("Present: 0  Absent: 1  Total: 1"));
}

#[test]
fn test_mark_by_pass_id() {
    let db_path = setup_test_db("mark_pass_id");
    init_db_with_students(&db_path);

    rti()
        .args(["--db", &db_path, "mark", "P-303", "--date", "2025-09-03"])
        .assert()
        .success()
        .stdout(contains("S3 (Carol) marked Present"));
}

#[test]
fn test_close_day_marks_the_rest_absent() {
    let db_path = setup_test_db("close_day");
    init_db_with_students(&db_path);

    mark(&db_path, "S1", "2025-09-04");

    rti()
        .args(["--db", &db_path, "close-day", "--date", "2025-09-04"])
        .assert()
        .success()
        .stdout(contains("2 student(s) marked absent on 2025-09-04"));

    rti()
        .args(["--db", &db_path, "list", "--date", "2025-09-04"])
        .assert()
        .success()
        .stdout(contains("Present: 1  Absent: 2  Total: 3"));

    rti()
        .args(["--db", &db_path, "close-day", "--date", "2025-09-04"])
        .assert()
        .success()
        .stdout(contains("already has an entry"));
}

#[test]
fn test_mark_invalid_date() {
    let db_path = setup_test_db("mark_invalid_date");
    init_db_with_students(&db_path);

    rti()
        .args(["--db", &db_path, "mark", "S1", "--date", "2025-13-40"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format: 2025-13-40"));
}
