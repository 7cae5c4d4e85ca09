use crate::core::resolver::IdentityResolver;
use crate::db::store::{AttendanceLedger, StudentDirectory};
use crate::errors::{AppError, AppResult};
use crate::models::attendance::AttendanceEntry;
use crate::models::status::Status;
use crate::token::PayloadDecoder;
use chrono::NaiveDate;
use image::GrayImage;

pub struct MarkOutcome {
    pub entry: AttendanceEntry,
    /// Status the entry had before this mark, if the student was already
    /// marked on that date.
    pub previous: Option<Status>,
}

pub struct MarkLogic;

impl MarkLogic {
    /// Resolve `raw` and upsert the ledger entry for (date, student).
    /// Nothing is written when resolution fails.
    pub fn by_id<S>(
        store: &mut S,
        resolver: &IdentityResolver,
        raw: &str,
        date: NaiveDate,
        status: Status,
    ) -> AppResult<MarkOutcome>
    where
        S: StudentDirectory + AttendanceLedger,
    {
        let student = resolver.resolve(&*store, raw)?;
        let entry = AttendanceEntry::for_student(&student, date, status);
        let previous = store.mark(&entry)?;

        Ok(MarkOutcome { entry, previous })
    }

    /// Decode the token in `image` and mark the student it names.
    ///
    /// `source` only labels the error when the image holds no readable
    /// payload; in that case the resolver is never called.
    pub fn by_image<S, D>(
        store: &mut S,
        resolver: &IdentityResolver,
        decoder: &D,
        image: &GrayImage,
        source: &str,
        date: NaiveDate,
        status: Status,
    ) -> AppResult<MarkOutcome>
    where
        S: StudentDirectory + AttendanceLedger,
        D: PayloadDecoder + ?Sized,
    {
        let payload = decoder
            .decode(image)
            .ok_or_else(|| AppError::DecodeFailure(source.to_string()))?;

        Self::by_id(store, resolver, &payload, date, status)
    }

    /// Close the day: every registered student still unmarked on `date`
    /// becomes absent. Returns how many entries were added.
    pub fn close_day<L>(ledger: &mut L, date: NaiveDate) -> AppResult<usize>
    where
        L: AttendanceLedger + ?Sized,
    {
        ledger.mark_remaining_absent(&date)
    }
}
