//! Kept in its own test binary: the lifecycle flag is process-wide.

use rattendance::app::startup;
use rattendance::config::Config;
use rattendance::errors::AppError;

#[test]
fn test_second_startup_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cfg = Config {
        database: dir.path().join("lifecycle.sqlite").to_string_lossy().to_string(),
        ..Config::default()
    };

    let ctx = startup(cfg.clone()).expect("first startup");
    assert_eq!(ctx.cfg.database, cfg.database);

    assert!(matches!(startup(cfg), Err(AppError::AlreadyInitialized)));
}
