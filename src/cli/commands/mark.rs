use crate::app::AppContext;
use crate::cli::parser::Commands;
use crate::core::mark::{MarkLogic, MarkOutcome};
use crate::db::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::models::status::Status;
use crate::token::{QrCodec, load_image};
use crate::ui::messages::{info, success};
use crate::utils::date::parse_optional_date;
use crate::utils::path::expand_tilde;

fn status_for(absent: bool) -> Status {
    if absent {
        Status::Absent
    } else {
        Status::Present
    }
}

/// Handle `mark`, `scan` and `close-day`.
pub fn handle(cmd: &Commands, ctx: &mut AppContext) -> AppResult<()> {
    let resolver = ctx.resolver();

    match cmd {
        Commands::Mark { id, date, absent } => {
            let date = parse_optional_date(date.as_ref())?;
            let outcome = MarkLogic::by_id(&mut ctx.pool, &resolver, id, date, status_for(*absent))?;
            announce(ctx, "mark", &outcome);
        }

        Commands::Scan { image, date, absent } => {
            let date = parse_optional_date(date.as_ref())?;
            let path = expand_tilde(image);
            let img = load_image(&path)?;

            let outcome = MarkLogic::by_image(
                &mut ctx.pool,
                &resolver,
                &QrCodec,
                &img,
                &path.display().to_string(),
                date,
                status_for(*absent),
            )?;
            announce(ctx, "scan", &outcome);
        }

        Commands::CloseDay { date } => {
            let date = parse_optional_date(date.as_ref())?;
            let day = date.format("%Y-%m-%d").to_string();
            let added = MarkLogic::close_day(&mut ctx.pool, date)?;

            if added == 0 {
                info(format!("Every registered student already has an entry on {day}."));
            } else {
                ttlog_quiet(
                    &ctx.pool.conn,
                    "close_day",
                    &day,
                    &format!("{added} student(s) marked absent"),
                );
                success(format!("{added} student(s) marked absent on {day}."));
            }
        }

        _ => {}
    }

    Ok(())
}

fn announce(ctx: &AppContext, operation: &str, outcome: &MarkOutcome) {
    let e = &outcome.entry;
    let day = e.date_str();

    ttlog_quiet(
        &ctx.pool.conn,
        operation,
        &e.student_id,
        &format!("{} on {}", e.status.label(), day),
    );

    success(format!(
        "{} ({}) marked {} on {}",
        e.student_id,
        e.name,
        e.status.label(),
        day
    ));

    match outcome.previous {
        Some(prev) if prev == e.status => info("Already marked with the same status."),
        Some(prev) => info(format!("Replaced previous status: {}", prev.label())),
        None => {}
    }
}
