// src/export/logic.rs

use crate::db::pool::DbPool;
use crate::db::queries::{load_entries, load_entries_by_date};
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::EntryExport;
use crate::ui::messages::warning;
use chrono::NaiveDate;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Export history entries, all of them or those created on `date`.
    /// Returns the number of exported entries.
    pub fn export(
        pool: &DbPool,
        format: ExportFormat,
        file: &str,
        date: Option<NaiveDate>,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        let rows = match date {
            Some(d) => load_entries_by_date(&pool.conn, &d)?,
            None => load_entries(&pool.conn)?,
        };

        if rows.is_empty() {
            warning("No history entries to export.");
            return Ok(0);
        }

        ensure_writable(path, force)?;

        let entries: Vec<EntryExport> = rows.iter().map(EntryExport::from).collect();

        match format {
            ExportFormat::Csv => export_csv(&entries, path)?,
            ExportFormat::Json => export_json(&entries, path)?,
        }

        Ok(entries.len())
    }
}
