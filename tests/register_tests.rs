mod common;
use common::{init_db, init_db_with_students, rti, setup_test_db, temp_out};
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

#[test]
fn test_register_and_list_students() {
    let db_path = setup_test_db("register_list");
    init_db_with_students(&db_path);

    rti()
        .args(["--db", &db_path, "students"])
        .assert()
        .success()
        .stdout(contains("Alice"))
        .stdout(contains("Bob"))
        .stdout(contains("P-303"))
        .stdout(contains("3 student(s)"));
}

#[test]
fn test_register_empty_name_is_rejected() {
    let db_path = setup_test_db("register_empty_name");
    init_db(&db_path);

    rti()
        .args(["--db", &db_path, "register", "S9", "  "])
        .assert()
        .failure()
        .stderr(contains("Missing required field: name"));

    rti()
        .args(["--db", &db_path, "students"])
        .assert()
        .success()
        .stdout(contains("No students registered"));
}

#[test]
fn test_register_empty_id_is_rejected() {
    let db_path = setup_test_db("register_empty_id");
    init_db(&db_path);

    rti()
        .args(["--db", &db_path, "register", "", "Nobody"])
        .assert()
        .failure()
        .stderr(contains("Missing required field: id"));
}

#[test]
fn test_reregister_overwrites_record() {
    let db_path = setup_test_db("register_overwrite");
    init_db_with_students(&db_path);

    rti()
        .args(["--db", &db_path, "register", "S1", "Alicia", "--course", "Physics"])
        .assert()
        .success()
        .stdout(contains("updated"));

    rti()
        .args(["--db", &db_path, "students"])
        .assert()
        .success()
        .stdout(contains("Alicia"))
        .stdout(contains("Physics"))
        .stdout(contains("Alice").not())
        .stdout(contains("3 student(s)"));
}

#[test]
fn test_register_with_token_and_pass() {
    let db_path = setup_test_db("register_artifacts");
    init_db(&db_path);

    let png = temp_out("register_artifacts_token", "png");
    let pdf = temp_out("register_artifacts_pass", "pdf");

    rti()
        .args([
            "--db", &db_path, "register", "S7", "Grace", "--course", "CS", "--token", &png,
            "--pass", &pdf,
        ])
        .assert()
        .success()
        .stdout(contains("Token written"))
        .stdout(contains("Pass written"));

    let png_bytes = fs::read(&png).expect("read token png");
    assert!(png_bytes.starts_with(b"\x89PNG"));

    let pdf_bytes = fs::read(&pdf).expect("read pass pdf");
    assert!(pdf_bytes.starts_with(b"%PDF"));
}

#[test]
fn test_token_for_unknown_student_fails() {
    let db_path = setup_test_db("token_unknown");
    init_db(&db_path);

    let png = temp_out("token_unknown", "png");

    rti()
        .args(["--db", &db_path, "token", "ghost", "--file", &png])
        .assert()
        .failure()
        .stderr(contains("Student not found: ghost"));

    assert!(!std::path::Path::new(&png).exists());
}

#[test]
fn test_register_with_unencodable_token_saves_nothing() {
    let db_path = setup_test_db("register_token_too_long");
    init_db(&db_path);

    let png = temp_out("register_token_too_long", "png");
    let long_id = "X".repeat(5000);

    rti()
        .args(["--db", &db_path, "register", &long_id, "Eve", "--token", &png])
        .assert()
        .failure()
        .stderr(contains("Token error"))
        .stderr(contains("(5000 chars)"))
        .stderr(contains("X".repeat(100)).not());

    assert!(!std::path::Path::new(&png).exists());

    rti()
        .args(["--db", &db_path, "students"])
        .assert()
        .success()
        .stdout(contains("No students registered"));
}

#[test]
fn test_register_declined_overwrite_saves_nothing() {
    let db_path = setup_test_db("register_declined_overwrite");
    init_db(&db_path);

    let png = temp_out("register_declined_overwrite_token", "png");
    let pdf = temp_out("register_declined_overwrite_pass", "pdf");
    fs::write(&pdf, "old pass").expect("seed existing pass");

    rti()
        .args([
            "--db", &db_path, "register", "S8", "Heidi", "--token", &png, "--pass", &pdf,
        ])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("cancelled"));

    assert!(!std::path::Path::new(&png).exists());
    assert_eq!(fs::read_to_string(&pdf).expect("read pass"), "old pass");

    rti()
        .args(["--db", &db_path, "students"])
        .assert()
        .success()
        .stdout(contains("No students registered"));
}
