use super::ask_confirmation;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::history::HistoryLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let pool = DbPool::open(&cfg.database)?;
        let row = HistoryLogic::find(&pool, id)?;

        let prompt = format!(
            "Delete calculation {} \"{}\"? This action is irreversible.",
            row.short_id(),
            row.label
        );
        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let row = HistoryLogic::delete(&pool, &row.id)?;
        success(format!("Calculation {} has been deleted.", row.short_id()));
    }
    Ok(())
}
