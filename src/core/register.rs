use crate::db::store::StudentDirectory;
use crate::errors::{AppError, AppResult};
use crate::models::student::StudentRecord;
use crate::token::{PayloadDecoder, TokenEncoder, TokenMatrix, shown_payload};

pub struct Registration {
    pub student: StudentRecord,
    /// `false` when an existing record was overwritten
    pub created: bool,
}

pub struct RegisterLogic;

impl RegisterLogic {
    /// Build the record to register without touching the directory.
    ///
    /// `id` and `name` must be present; an empty `course` or `pass_id` is
    /// stored as absent.
    pub fn prepare(
        id: &str,
        name: &str,
        course: Option<&str>,
        pass_id: Option<&str>,
    ) -> AppResult<StudentRecord> {
        if id.trim().is_empty() {
            return Err(AppError::Validation("id".into()));
        }
        if name.trim().is_empty() {
            return Err(AppError::Validation("name".into()));
        }

        let course = course.filter(|c| !c.trim().is_empty());
        let pass_id = pass_id.filter(|p| !p.trim().is_empty());

        Ok(StudentRecord::new(id, name, course).with_pass_id(pass_id))
    }

    /// Create or overwrite the directory entry of a prepared record.
    pub fn commit<D>(directory: &mut D, student: StudentRecord) -> AppResult<Registration>
    where
        D: StudentDirectory + ?Sized,
    {
        let created = directory.put(&student)?;
        Ok(Registration { student, created })
    }

    /// [`prepare`](Self::prepare) then [`commit`](Self::commit).
    pub fn apply<D>(
        directory: &mut D,
        id: &str,
        name: &str,
        course: Option<&str>,
        pass_id: Option<&str>,
    ) -> AppResult<Registration>
    where
        D: StudentDirectory + ?Sized,
    {
        let student = Self::prepare(id, name, course, pass_id)?;
        Self::commit(directory, student)
    }
}

pub struct TokenLogic;

impl TokenLogic {
    /// Encode `payload` and check that the rasterized token decodes back to
    /// exactly the same string before handing it out.
    pub fn issue<C>(codec: &C, payload: &str, scale: u32) -> AppResult<TokenMatrix>
    where
        C: TokenEncoder + PayloadDecoder,
    {
        let token = codec.encode(payload)?;

        match codec.decode(&token.to_image(scale)) {
            Some(decoded) if decoded == payload => Ok(token),
            Some(decoded) => Err(AppError::Token(format!(
                "token for '{}' decodes to '{}'",
                shown_payload(payload),
                shown_payload(&decoded)
            ))),
            None => Err(AppError::Token(format!(
                "token for '{}' is not readable back",
                shown_payload(payload)
            ))),
        }
    }
}
