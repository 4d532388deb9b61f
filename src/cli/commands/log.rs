use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::load_log;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let pool = DbPool::open(&cfg.database)?;
        let rows = load_log(&pool.conn)?;

        if rows.is_empty() {
            info("The internal log is empty.");
            return Ok(());
        }

        header("Internal log");
        let mut table = Table::new(vec![
            Column::new("#", 4),
            Column::new("DATE", 25),
            Column::new("OPERATION", 16),
            Column::new("TARGET", 20),
            Column::new("MESSAGE", 0),
        ]);
        for r in rows {
            table.add_row(vec![r.id.to_string(), r.date, r.operation, r.target, r.message]);
        }
        print!("{}", table.render());
    }
    Ok(())
}
