use super::history::{print_steps, short_timestamp};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::history::HistoryLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::theme::Theme;
use crate::ui::messages::{display, header};
use crate::utils::colors::RESET;

pub fn handle(cmd: &Commands, cfg: &Config, theme: Theme) -> AppResult<()> {
    if let Commands::Show { id } = cmd {
        let pool = DbPool::open(&cfg.database)?;
        let row = HistoryLogic::find(&pool, id)?;
        let entry = row.to_entry()?;

        header(&entry.label);
        println!("ID       : {}", entry.id);
        println!("Color    : {}{}{RESET}", entry.color_tag.ansi(), entry.color_tag.to_db_str());
        println!("Created  : {}", short_timestamp(&row.created_at));
        println!("Modified : {}", short_timestamp(&row.last_modified));
        println!("Steps    :");
        print_steps(&row);
        println!();
        display(theme, entry.steps.trace(), entry.result_display());
    }
    Ok(())
}
