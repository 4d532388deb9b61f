use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::codec;
use crate::core::history::HistoryLogic;
use crate::db::models::HistoryRow;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::theme::Theme;
use crate::ui::messages::{header, info, warning};
use crate::utils::colors::{GREY, RESET, color_for_result};
use crate::utils::table::{Column, Table};

/// Created-at as `YYYY-MM-DD HH:MM`, or the raw text if it is not RFC 3339.
pub(crate) fn short_timestamp(raw: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

pub(crate) fn print_steps(row: &HistoryRow) {
    match row.to_entry() {
        Ok(entry) => {
            for (i, step) in entry.steps.steps().iter().enumerate() {
                let op = step.operator.map(|o| o.symbol()).unwrap_or("=");
                println!(
                    "      {GREY}{:>2}.{RESET} {} {}",
                    i + 1,
                    codec::format(step.value),
                    op
                );
            }
        }
        Err(e) => warning(format!("{}: {}", row.short_id(), e)),
    }
}

pub fn handle(cmd: &Commands, cfg: &Config, theme: Theme) -> AppResult<()> {
    if let Commands::History { date, details } = cmd {
        let date = super::resolve_date(date.as_deref())?;
        let pool = DbPool::open(&cfg.database)?;
        let rows = HistoryLogic::list(&pool, date)?;

        if rows.is_empty() {
            info("No saved calculations.");
            return Ok(());
        }

        header(match date {
            Some(d) => format!("History for {d}"),
            None => "History".to_string(),
        });

        let mut table = Table::new(vec![
            Column::new("ID", 8),
            Column::new("CREATED", 16),
            Column::new("RESULT", 10),
            Column::new("LABEL", 24),
        ]);

        for row in &rows {
            let tag = row.color_tag();
            table.add_row(vec![
                format!("{}{}{RESET}", tag.ansi(), row.short_id()),
                short_timestamp(&row.created_at),
                format!(
                    "{}{}{RESET}",
                    color_for_result(row.result_seconds),
                    codec::format(row.result_seconds)
                ),
                row.label.clone(),
            ]);
        }

        let rendered = table.render();
        let mut lines = rendered.lines();
        if let Some(head) = lines.next() {
            println!("{}", theme.paint(head));
        }
        for (line, row) in lines.zip(&rows) {
            println!("{line}");
            if *details {
                print_steps(row);
            }
        }

        println!("\n{} entries", rows.len());
    }
    Ok(())
}
