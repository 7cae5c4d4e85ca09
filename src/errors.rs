//! Unified application error type.
//! All modules (db, core, cli, export, token) return AppError to keep the
//! error handling consistent and easy to surface to the user.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    #[error("Application already initialized in this process")]
    AlreadyInitialized,

    // ---------------------------
    // Attendance workflow
    // ---------------------------
    #[error("Missing required field: {0}")]
    Validation(String),

    #[error("Student not found: {0}")]
    NotFound(String),

    #[error("No readable token in image: {0}")]
    DecodeFailure(String),

    #[error("No attendance found for {0}")]
    EmptyResult(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid attendance status: {0}")]
    InvalidStatus(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Configuration format error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Artifacts
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("Token error: {0}")]
    Token(String),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

pub type AppResult<T> = Result<T, AppError>;
