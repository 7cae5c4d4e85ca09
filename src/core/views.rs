//! Terminal listings of the directory and of one day of the ledger.

use crate::db::store::{AttendanceLedger, StudentDirectory};
use crate::errors::AppResult;
use crate::models::status::Status;
use crate::ui::messages::{header, info};
use crate::utils::colors::{RESET, color_for_status, colorize_optional};
use crate::utils::table::Table;
use chrono::NaiveDate;

pub struct ViewLogic;

impl ViewLogic {
    pub fn print_students<D>(directory: &D) -> AppResult<usize>
    where
        D: StudentDirectory + ?Sized,
    {
        let students = directory.all()?;

        if students.is_empty() {
            info("No students registered yet.");
            return Ok(0);
        }

        header("Registered students");

        let mut table = Table::new(&["ID", "Name", "Course", "Pass ID"]);
        for s in &students {
            table.add_row(vec![
                s.id.clone(),
                s.name.clone(),
                colorize_optional(s.course_str()),
                colorize_optional(s.pass_id.as_deref().unwrap_or("")),
            ]);
        }

        print!("{}", table.render());
        println!("\n{} student(s)", students.len());

        Ok(students.len())
    }

    /// Ledger entries for `date` in storage order, followed by a
    /// present/absent summary.
    pub fn print_day<L>(ledger: &L, date: NaiveDate) -> AppResult<usize>
    where
        L: AttendanceLedger + ?Sized,
    {
        let entries = ledger.entries_for_date(&date)?;
        let day = date.format("%Y-%m-%d");

        if entries.is_empty() {
            info(format!("No attendance recorded for {day}."));
            return Ok(0);
        }

        header(format!("Attendance for {day}"));

        let mut table = Table::new(&["ID", "Name", "Course", "Status"]);
        for e in &entries {
            table.add_row(vec![
                e.student_id.clone(),
                e.name.clone(),
                colorize_optional(e.course_str()),
                format!("{}{}{}", color_for_status(e.status), e.status.label(), RESET),
            ]);
        }

        print!("{}", table.render());

        let present = entries.iter().filter(|e| e.status == Status::Present).count();
        println!(
            "\nPresent: {}  Absent: {}  Total: {}",
            present,
            entries.len() - present,
            entries.len()
        );

        Ok(entries.len())
    }
}
