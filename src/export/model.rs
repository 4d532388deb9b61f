// src/export/model.rs

use crate::core::codec;
use crate::core::ledger::StepLedger;
use crate::db::models::HistoryRow;
use serde::Serialize;

/// Flat export shape for one history entry. `steps` is the stored JSON text,
/// untouched.
#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct EntryExport {
    pub id: String,
    pub label: String,
    pub color_tag: String,
    pub created_at: String,
    pub last_modified: String,
    pub result_seconds: i64,
    pub result: String,
    pub expression: String,
    pub steps: String,
}

impl From<&HistoryRow> for EntryExport {
    fn from(row: &HistoryRow) -> Self {
        // a ledger that no longer decodes still exports, without a trace
        let result = codec::format(row.result_seconds);
        let expression = StepLedger::decode(&row.steps)
            .map(|l| format!("{} = {}", l.trace(), result))
            .unwrap_or_default();

        Self {
            id: row.id.clone(),
            label: row.label.clone(),
            color_tag: row.color_tag().to_db_str().to_string(),
            created_at: row.created_at.clone(),
            last_modified: row.last_modified.clone(),
            result_seconds: row.result_seconds,
            result,
            expression,
            steps: row.steps.clone(),
        }
    }
}
