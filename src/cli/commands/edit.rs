use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::history::HistoryLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::color_tag::ColorTag;
use crate::ui::messages::{success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit { id, label, color } = cmd {
        let color = color
            .as_deref()
            .map(|c| ColorTag::from_name(c).ok_or_else(|| AppError::InvalidColor(c.into())))
            .transpose()?;

        if label.is_none() && color.is_none() {
            warning("Nothing to change: pass --label and/or --color.");
            return Ok(());
        }

        let pool = DbPool::open(&cfg.database)?;
        let entry = HistoryLogic::edit(&pool, id, label.as_deref(), color)?;
        success(format!(
            "Updated {}: \"{}\" [{}]",
            entry.short_id(),
            entry.label,
            entry.color_tag.to_db_str()
        ));
    }
    Ok(())
}
