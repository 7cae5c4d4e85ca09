/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

use crate::models::status::Status;

/// Status color:
/// Present → green
/// Absent  → red
pub fn color_for_status(status: Status) -> &'static str {
    match status {
        Status::Present => GREEN,
        Status::Absent => RED,
    }
}

/// Grey placeholder for empty optional fields (course, pass id).
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() {
        format!("{GREY}--{RESET}")
    } else {
        value.to_string()
    }
}
