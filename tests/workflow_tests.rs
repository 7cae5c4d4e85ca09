//! Library-level workflow tests against an in-memory store.

use chrono::NaiveDate;
use rattendance::config::LookupField;
use rattendance::core::mark::MarkLogic;
use rattendance::core::register::{RegisterLogic, TokenLogic};
use rattendance::core::report::{ReportCompiler, ReportLogic, ReportOptions, ReportOutcome};
use rattendance::core::resolver::IdentityResolver;
use rattendance::db::initialize::init_db;
use rattendance::db::pool::DbPool;
use rattendance::db::store::{AttendanceLedger, StudentDirectory};
use rattendance::errors::AppError;
use rattendance::export::ReportFormat;
use rattendance::models::status::Status;
use rattendance::token::{PayloadDecoder, QrCodec, TokenEncoder};
use rattendance::utils::date::today;

fn store() -> DbPool {
    let pool = DbPool::in_memory().expect("in-memory db");
    init_db(&pool.conn).expect("schema");
    pool
}

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

#[test]
fn test_register_mark_report_scenario() {
    let mut pool = store();
    let resolver = IdentityResolver::default();
    let date = today();

    RegisterLogic::apply(&mut pool, "S1", "Alice", Some("CS"), None).expect("register");

    let outcome =
        MarkLogic::by_id(&mut pool, &resolver, "S1", date, Status::Present).expect("mark");
    assert_eq!(outcome.previous, None);

    let entries = pool.entries_for_date(&date).expect("entries");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].student_id, "S1");
    assert_eq!(entries[0].name, "Alice");
    assert_eq!(entries[0].course.as_deref(), Some("CS"));
    assert_eq!(entries[0].status, Status::Present);

    let table = ReportCompiler::new(ReportOptions::default())
        .compile(date, &entries)
        .expect("compile");

    assert_eq!(table.headers, vec!["ID", "Name", "Course", "Date", "Status"]);
    assert_eq!(
        table.rows,
        vec![vec![
            "S1".to_string(),
            "Alice".to_string(),
            "CS".to_string(),
            date.format("%Y-%m-%d").to_string(),
            "Present".to_string(),
        ]]
    );
}

#[test]
fn test_unknown_identifier_writes_nothing() {
    let mut pool = store();
    let resolver = IdentityResolver::default();
    let date = day("2025-10-01");

    RegisterLogic::apply(&mut pool, "S1", "Alice", None, None).expect("register");

    let err = MarkLogic::by_id(&mut pool, &resolver, "unknown123", date, Status::Present)
        .err()
        .expect("unknown id must fail");
    assert!(matches!(err, AppError::NotFound(ref id) if id == "unknown123"));

    assert!(pool.entries_for_date(&date).expect("entries").is_empty());
}

#[test]
fn test_resolve_right_after_registration() {
    let mut pool = store();
    RegisterLogic::apply(&mut pool, "S42", "Zoe", Some("Art"), None).expect("register");

    let student = IdentityResolver::default()
        .resolve(&pool, "S42")
        .expect("resolve");
    assert_eq!(student.id, "S42");
    assert_eq!(student.name, "Zoe");
}

#[test]
fn test_empty_input_is_a_validation_error() {
    let mut pool = store();

    assert!(matches!(
        IdentityResolver::default().resolve(&pool, ""),
        Err(AppError::Validation(_))
    ));
    assert!(matches!(
        RegisterLogic::apply(&mut pool, "S1", "", None, None),
        Err(AppError::Validation(_))
    ));
    assert!(pool.all().expect("all").is_empty());
}

#[test]
fn test_lookup_modes() {
    let mut pool = store();
    RegisterLogic::apply(&mut pool, "S1", "Alice", None, Some("CARD-1")).expect("register");
    RegisterLogic::apply(&mut pool, "CARD-1", "Mallory", None, None).expect("register");
    RegisterLogic::apply(&mut pool, "S2", "Bob", None, Some("SHARED")).expect("register");
    RegisterLogic::apply(&mut pool, "S3", "Carol", None, Some("SHARED")).expect("register");

    let by_id = IdentityResolver::new(LookupField::Id);
    assert!(matches!(by_id.resolve(&pool, "SHARED"), Err(AppError::NotFound(_))));

    let by_pass = IdentityResolver::new(LookupField::PassId);
    assert_eq!(by_pass.resolve(&pool, "CARD-1").expect("pass id").id, "S1");
    assert!(matches!(by_pass.resolve(&pool, "S2"), Err(AppError::NotFound(_))));
    // several records share a pass id: the first registered one wins
    assert_eq!(by_pass.resolve(&pool, "SHARED").expect("pass id").id, "S2");

    let any = IdentityResolver::new(LookupField::Any);
    assert_eq!(any.resolve(&pool, "CARD-1").expect("primary key").name, "Mallory");
    assert_eq!(any.resolve(&pool, "SHARED").expect("fallback").id, "S2");
}

#[test]
fn test_remark_last_write_wins() {
    let mut pool = store();
    let resolver = IdentityResolver::default();
    let date = day("2025-10-02");

    RegisterLogic::apply(&mut pool, "S1", "Alice", None, None).expect("register");
    RegisterLogic::apply(&mut pool, "S2", "Bob", None, None).expect("register");

    MarkLogic::by_id(&mut pool, &resolver, "S1", date, Status::Present).expect("mark");
    MarkLogic::by_id(&mut pool, &resolver, "S2", date, Status::Present).expect("mark");
    let outcome =
        MarkLogic::by_id(&mut pool, &resolver, "S1", date, Status::Absent).expect("re-mark");
    assert_eq!(outcome.previous, Some(Status::Present));

    let entries = pool.entries_for_date(&date).expect("entries");
    assert_eq!(entries.len(), 2);
    // re-marking keeps the original position in the ledger
    assert_eq!(entries[0].student_id, "S1");
    assert_eq!(entries[0].status, Status::Absent);
    assert_eq!(entries[1].student_id, "S2");
}

#[test]
fn test_close_day_never_overwrites_present() {
    let mut pool = store();
    let resolver = IdentityResolver::default();
    let date = day("2025-10-03");

    for (id, name) in [("S1", "Alice"), ("S2", "Bob"), ("S3", "Carol")] {
        RegisterLogic::apply(&mut pool, id, name, None, None).expect("register");
    }
    MarkLogic::by_id(&mut pool, &resolver, "S2", date, Status::Present).expect("mark");

    assert_eq!(MarkLogic::close_day(&mut pool, date).expect("close"), 2);
    assert_eq!(MarkLogic::close_day(&mut pool, date).expect("close again"), 0);

    let entries = pool.entries_for_date(&date).expect("entries");
    let statuses: Vec<(&str, Status)> = entries
        .iter()
        .map(|e| (e.student_id.as_str(), e.status))
        .collect();
    assert_eq!(
        statuses,
        vec![
            ("S2", Status::Present),
            ("S1", Status::Absent),
            ("S3", Status::Absent),
        ]
    );
}

#[test]
fn test_token_round_trip() {
    let codec = QrCodec;

    for id in ["S1", "student-00042", "2025/CS/0017", "A"] {
        let token = codec.encode(id).expect("encode");
        let decoded = codec.decode(&token.to_image(6));
        assert_eq!(decoded.as_deref(), Some(id));

        TokenLogic::issue(&codec, id, 8).expect("verified issue");
    }

    assert!(matches!(codec.encode(""), Err(AppError::Validation(_))));
}

#[test]
fn test_oversized_token_is_rejected_with_short_message() {
    let long_id = "X".repeat(5000);

    let err = TokenLogic::issue(&QrCodec, &long_id, 8)
        .err()
        .expect("5000 chars do not fit in a QR code");

    match err {
        AppError::Token(msg) => {
            assert!(msg.contains("(5000 chars)"));
            assert!(msg.len() < 200);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_prepare_does_not_write() {
    let pool = store();

    let student = RegisterLogic::prepare("S1", "Alice", Some(" "), Some("")).expect("prepare");
    assert_eq!(student.course, None);
    assert_eq!(student.pass_id, None);
    assert!(pool.all().expect("all").is_empty());
}

#[test]
fn test_scan_marks_decoded_student() {
    let mut pool = store();
    let resolver = IdentityResolver::default();
    let date = day("2025-10-04");

    RegisterLogic::apply(&mut pool, "S9", "Ivan", Some("Math"), None).expect("register");
    let image = QrCodec.encode("S9").expect("encode").to_image(8);

    let outcome = MarkLogic::by_image(
        &mut pool,
        &resolver,
        &QrCodec,
        &image,
        "badge.png",
        date,
        Status::Present,
    )
    .expect("scan");
    assert_eq!(outcome.entry.student_id, "S9");

    let blank = image::GrayImage::from_pixel(64, 64, image::Luma([255u8]));
    let err = MarkLogic::by_image(
        &mut pool,
        &resolver,
        &QrCodec,
        &blank,
        "blank.png",
        date,
        Status::Present,
    )
    .err()
    .expect("no token in a blank image");
    assert!(matches!(err, AppError::DecodeFailure(_)));
}

#[test]
fn test_report_optional_columns() {
    let mut pool = store();
    let resolver = IdentityResolver::default();
    let date = day("2025-10-05");

    RegisterLogic::apply(&mut pool, "S1", "Alice", Some("CS"), None).expect("register");
    MarkLogic::by_id(&mut pool, &resolver, "S1", date, Status::Present).expect("mark");

    let compiler = ReportCompiler::new(ReportOptions {
        title: "Roll call".into(),
        show_course: false,
        show_date: false,
    });
    let table = compiler
        .compile(date, &pool.entries_for_date(&date).expect("entries"))
        .expect("compile");

    assert_eq!(table.headers, vec!["ID", "Name", "Status"]);
    assert_eq!(table.rows[0], vec!["S1", "Alice", "Present"]);
    assert!(table.title.starts_with("Roll call"));
}

#[test]
fn test_empty_day_has_no_report() {
    let pool = store();
    let date = day("2025-10-06");
    let compiler = ReportCompiler::new(ReportOptions::default());

    assert!(matches!(
        compiler.compile(date, &[]),
        Err(AppError::EmptyResult(_))
    ));

    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("empty.csv");

    let outcome = ReportLogic::generate(&pool, &compiler, date, ReportFormat::Csv, &out, false)
        .expect("generate");
    assert_eq!(outcome, ReportOutcome::NoData);
    assert!(!out.exists());
}
