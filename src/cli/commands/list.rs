use crate::app::AppContext;
use crate::cli::parser::Commands;
use crate::core::views::ViewLogic;
use crate::errors::AppResult;
use crate::utils::date::parse_optional_date;

pub fn handle(cmd: &Commands, ctx: &mut AppContext) -> AppResult<()> {
    if let Commands::List { date } = cmd {
        let date = parse_optional_date(date.as_ref())?;
        ViewLogic::print_day(&ctx.pool, date)?;
    }

    Ok(())
}
