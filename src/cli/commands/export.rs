use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        date,
        force,
    } = cmd
    {
        let date = super::resolve_date(date.as_deref())?;
        let pool = DbPool::open(&cfg.database)?;
        ExportLogic::export(&pool, *format, file, date, *force)?;
    }
    Ok(())
}
