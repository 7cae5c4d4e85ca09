use super::status::Status;
use super::student::StudentRecord;
use chrono::NaiveDate;
use serde::Serialize;

/// One ledger row: the status of a student on a given date.
///
/// The logical key is `(date, student_id)`; `name` and `course` are copied
/// from the directory when the entry is marked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttendanceEntry {
    pub student_id: String,
    pub name: String,
    pub course: Option<String>,
    pub date: NaiveDate,
    pub status: Status,
}

impl AttendanceEntry {
    pub fn for_student(student: &StudentRecord, date: NaiveDate, status: Status) -> Self {
        Self {
            student_id: student.id.clone(),
            name: student.name.clone(),
            course: student.course.clone(),
            date,
            status,
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn course_str(&self) -> &str {
        self.course.as_deref().unwrap_or("")
    }
}
