//! High-level history operations: what the CLI does with emitted entries and
//! with stored ones. Every mutation leaves a line in the internal log.

use crate::core::session::CalculationSession;
use crate::db::log::ttlog;
use crate::db::models::HistoryRow;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::color_tag::ColorTag;
use crate::models::history_entry::HistoryEntry;
use chrono::NaiveDate;

pub struct HistoryLogic;

impl HistoryLogic {
    /// Store an entry emitted by `=`, applying a user label when given.
    pub fn save(pool: &DbPool, entry: &mut HistoryEntry, label: Option<&str>) -> AppResult<()> {
        if let Some(l) = label {
            entry.relabel(l);
        }
        queries::insert_entry(&pool.conn, entry)?;
        ttlog(&pool.conn, "evaluate", &entry.short_id(), &entry.expression())?;
        Ok(())
    }

    pub fn list(pool: &DbPool, date: Option<NaiveDate>) -> AppResult<Vec<HistoryRow>> {
        match date {
            Some(d) => queries::load_entries_by_date(&pool.conn, &d),
            None => queries::load_entries(&pool.conn),
        }
    }

    pub fn find(pool: &DbPool, id: &str) -> AppResult<HistoryRow> {
        queries::find_entry(&pool.conn, id)
    }

    /// Change label and/or color. Arithmetic is never re-run.
    pub fn edit(
        pool: &DbPool,
        id: &str,
        label: Option<&str>,
        color: Option<ColorTag>,
    ) -> AppResult<HistoryEntry> {
        let row = queries::find_entry(&pool.conn, id)?;
        let mut entry = row.to_entry()?;

        if label.is_none() && color.is_none() {
            return Ok(entry);
        }
        if let Some(l) = label {
            entry.relabel(l);
        }
        if let Some(c) = color {
            entry.recolor(c);
        }

        queries::update_entry(&pool.conn, &entry)?;
        ttlog(
            &pool.conn,
            "edit",
            &entry.short_id(),
            &format!("label='{}' color={}", entry.label, entry.color_tag.to_db_str()),
        )?;
        Ok(entry)
    }

    pub fn delete(pool: &DbPool, id: &str) -> AppResult<HistoryRow> {
        let row = queries::find_entry(&pool.conn, id)?;
        if !queries::delete_entry(&pool.conn, &row.id)? {
            return Err(AppError::EntryNotFound(id.to_string()));
        }
        ttlog(&pool.conn, "del", row.short_id(), &row.label)?;
        Ok(row)
    }

    pub fn clear(pool: &DbPool) -> AppResult<usize> {
        let n = queries::clear_history(&pool.conn)?;
        ttlog(&pool.conn, "clear", "history", &format!("{n} entries removed"))?;
        Ok(n)
    }

    /// Load a stored ledger into `session`. When the stored steps do not
    /// decode, the session is left empty and `RestoreFailure` is returned.
    pub fn restore(pool: &DbPool, session: &mut CalculationSession, id: &str) -> AppResult<HistoryRow> {
        let row = queries::find_entry(&pool.conn, id)?;
        match session.restore_encoded(&row.steps) {
            Ok(()) => {
                ttlog(&pool.conn, "restore", row.short_id(), &session.running_trace())?;
                Ok(row)
            }
            Err(e) => {
                ttlog(&pool.conn, "restore_failed", row.short_id(), &e.to_string())?;
                Err(e)
            }
        }
    }
}
