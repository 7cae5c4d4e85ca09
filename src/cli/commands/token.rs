use crate::app::AppContext;
use crate::cli::parser::Commands;
use crate::core::register::TokenLogic;
use crate::errors::AppResult;
use crate::export::{write_pass, write_token_png};
use crate::models::student::StudentRecord;
use crate::token::QrCodec;

pub(crate) const PASS_TITLE: &str = "Student pass";

/// Handle `token` and `pass`: re-issue artifacts for a registered student.
/// The token always carries the primary id.
pub fn handle(cmd: &Commands, ctx: &mut AppContext) -> AppResult<()> {
    let scale = ctx.cfg.token_scale;

    match cmd {
        Commands::Token { id, file, force } => {
            let student = ctx.resolver().resolve(&ctx.pool, id)?;
            let token = TokenLogic::issue(&QrCodec, &student.id, scale)?;
            write_token_png(&token, scale, &ctx.cfg.resolve_output(file), *force)
        }
        Commands::Pass { id, file, force } => {
            let student = ctx.resolver().resolve(&ctx.pool, id)?;
            let token = TokenLogic::issue(&QrCodec, &student.id, scale)?;
            write_pass(
                PASS_TITLE,
                &pass_fields(&student),
                &token,
                &ctx.cfg.resolve_output(file),
                *force,
            )
        }
        _ => Ok(()),
    }
}

/// Labelled lines printed next to the QR code on a pass.
pub(crate) fn pass_fields(student: &StudentRecord) -> Vec<(&'static str, &str)> {
    let mut fields = vec![("Name", student.name.as_str()), ("ID", student.id.as_str())];
    if let Some(course) = &student.course {
        fields.push(("Course", course.as_str()));
    }
    if let Some(pass_id) = &student.pass_id {
        fields.push(("Pass ID", pass_id.as_str()));
    }
    fields
}
