use crate::app::AppContext;
use crate::cli::parser::Commands;
use crate::core::views::ViewLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, ctx: &mut AppContext) -> AppResult<()> {
    if matches!(cmd, Commands::Students) {
        ViewLogic::print_students(&ctx.pool)?;
    }

    Ok(())
}
