use super::ask_confirmation;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::history::HistoryLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { yes } = cmd {
        if !*yes && !ask_confirmation("Delete ALL saved calculations? This action is irreversible.")
        {
            info("Operation cancelled.");
            return Ok(());
        }

        let pool = DbPool::open(&cfg.database)?;
        let n = HistoryLogic::clear(&pool)?;
        success(format!("History cleared ({n} entries removed)."));
    }
    Ok(())
}
