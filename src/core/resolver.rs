use crate::config::LookupField;
use crate::db::store::StudentDirectory;
use crate::errors::{AppError, AppResult};
use crate::models::student::StudentRecord;

/// Maps an inbound identifier (typed or decoded from a token) to exactly one
/// directory record. Exact match only: no trimming, no case folding.
#[derive(Debug, Clone, Copy)]
pub struct IdentityResolver {
    lookup: LookupField,
}

impl IdentityResolver {
    pub fn new(lookup: LookupField) -> Self {
        Self { lookup }
    }

    pub fn resolve<D>(&self, directory: &D, raw: &str) -> AppResult<StudentRecord>
    where
        D: StudentDirectory + ?Sized,
    {
        if raw.trim().is_empty() {
            return Err(AppError::Validation("identifier".into()));
        }

        let found = match self.lookup {
            LookupField::Id => directory.get(raw)?,
            LookupField::PassId => directory.find_by_pass_id(raw)?,
            LookupField::Any => match directory.get(raw)? {
                Some(student) => Some(student),
                None => directory.find_by_pass_id(raw)?,
            },
        };

        found.ok_or_else(|| AppError::NotFound(raw.to_string()))
    }
}

impl Default for IdentityResolver {
    fn default() -> Self {
        Self::new(LookupField::Any)
    }
}
