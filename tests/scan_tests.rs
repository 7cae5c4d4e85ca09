mod common;
use common::{init_db_with_students, rti, setup_test_db, temp_out};
use predicates::str::contains;

#[test]
fn test_scan_token_marks_student() {
    let db_path = setup_test_db("scan_token");
    init_db_with_students(&db_path);

    let png = temp_out("scan_token", "png");

    rti()
        .args(["--db", &db_path, "token", "S2", "--file", &png])
        .assert()
        .success();

    rti()
        .args(["--db", &db_path, "scan", &png, "--date", "2025-09-20"])
        .assert()
        .success()
        .stdout(contains("S2 (Bob) marked Present on 2025-09-20"));

    rti()
        .args(["--db", &db_path, "list", "--date", "2025-09-20"])
        .assert()
        .success()
        .stdout(contains("Bob"));
}

#[test]
fn test_scan_image_without_token_fails() {
    let db_path = setup_test_db("scan_blank");
    init_db_with_students(&db_path);

    let png = temp_out("scan_blank", "png");
    image::GrayImage::from_pixel(120, 120, image::Luma([255u8]))
        .save(&png)
        .expect("write blank png");

    rti()
        .args(["--db", &db_path, "scan", &png, "--date", "2025-09-21"])
        .assert()
        .failure()
        .stderr(contains("No readable token in image"));

    rti()
        .args(["--db", &db_path, "list", "--date", "2025-09-21"])
        .assert()
        .success()
        .stdout(contains("No attendance recorded"));
}

#[test]
fn test_scan_token_from_other_class_fails() {
    let first_db = setup_test_db("scan_other_class_a");
    init_db_with_students(&first_db);

    let png = temp_out("scan_other_class", "png");
    rti()
        .args(["--db", &first_db, "register", "X9", "Xavier", "--token", &png])
        .assert()
        .success();

    let second_db = setup_test_db("scan_other_class_b");
    init_db_with_students(&second_db);

    rti()
        .args(["--db", &second_db, "scan", &png, "--date", "2025-09-22"])
        .assert()
        .failure()
        .stderr(contains("Student not found: X9"));
}
