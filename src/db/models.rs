//! Database row models. These are thin wrappers around SQLite rows; the
//! `steps` column is kept as the exact JSON text that was stored.

use crate::core::ledger::StepLedger;
use crate::errors::{AppError, AppResult};
use crate::models::color_tag::ColorTag;
use crate::models::history_entry::HistoryEntry;
use chrono::{DateTime, Local};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct HistoryRow {
    pub id: String,
    pub result_seconds: i64,
    pub label: String,
    pub color: String,
    pub created_at: String,
    pub last_modified: String,
    pub steps: String,
}

#[derive(Debug, Clone)]
pub struct LogRow {
    pub id: i64,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

fn parse_timestamp(raw: &str) -> AppResult<DateTime<Local>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Local))
        .map_err(|_| AppError::InvalidTimestamp(raw.to_string()))
}

impl HistoryRow {
    pub fn short_id(&self) -> &str {
        self.id.get(..8).unwrap_or(&self.id)
    }

    pub fn color_tag(&self) -> ColorTag {
        ColorTag::from_db_str(&self.color)
    }

    /// Decode the full entry. A `steps` column that does not decode is
    /// reported as `RestoreFailure`.
    pub fn to_entry(&self) -> AppResult<HistoryEntry> {
        let id = Uuid::parse_str(&self.id).map_err(|_| AppError::InvalidId(self.id.clone()))?;
        Ok(HistoryEntry {
            id,
            result_seconds: self.result_seconds,
            label: self.label.clone(),
            color_tag: self.color_tag(),
            created_at: parse_timestamp(&self.created_at)?,
            last_modified: parse_timestamp(&self.last_modified)?,
            steps: StepLedger::decode(&self.steps)?,
        })
    }
}
