use crate::app::AppContext;
use crate::cli::commands::token::{PASS_TITLE, pass_fields};
use crate::cli::parser::Commands;
use crate::core::register::{RegisterLogic, TokenLogic};
use crate::db::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::{write_pass, write_token_png};
use crate::token::QrCodec;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, ctx: &mut AppContext) -> AppResult<()> {
    let Commands::Register {
        id,
        name,
        course,
        pass_id,
        token,
        pass,
        force,
    } = cmd
    else {
        return Ok(());
    };

    let student = RegisterLogic::prepare(id, name, course.as_deref(), pass_id.as_deref())?;

    // Everything that can refuse the command (encoding, overwrite prompts)
    // runs before the directory is written.
    let scale = ctx.cfg.token_scale;
    let token_path = token.as_deref().map(|f| ctx.cfg.resolve_output(f));
    let pass_path = pass.as_deref().map(|f| ctx.cfg.resolve_output(f));

    let matrix = if token_path.is_some() || pass_path.is_some() {
        Some(TokenLogic::issue(&QrCodec, &student.id, scale)?)
    } else {
        None
    };

    for path in token_path.iter().chain(pass_path.iter()) {
        ensure_writable(path, *force)?;
    }

    let reg = RegisterLogic::commit(&mut ctx.pool, student)?;
    let student = &reg.student;

    let verb = if reg.created { "registered" } else { "updated" };
    ttlog_quiet(
        &ctx.pool.conn,
        "register",
        &student.id,
        &format!("Student {verb}: {}", student.name),
    );
    success(format!("Student {} {}: {}", student.id, verb, student.name));

    // overwrite already confirmed above
    if let (Some(path), Some(m)) = (&token_path, &matrix) {
        write_token_png(m, scale, path, true)?;
    }
    if let (Some(path), Some(m)) = (&pass_path, &matrix) {
        write_pass(PASS_TITLE, &pass_fields(student), m, path, true)?;
    }

    Ok(())
}
