//! Persisted record of one completed evaluation.

use super::color_tag::ColorTag;
use crate::core::codec;
use crate::core::ledger::StepLedger;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Format used for the label of entries saved without one.
pub const DEFAULT_LABEL_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: Uuid,
    pub result_seconds: i64,
    pub label: String,
    pub color_tag: ColorTag,
    pub created_at: DateTime<Local>,
    pub last_modified: DateTime<Local>,
    pub steps: StepLedger,
}

impl HistoryEntry {
    /// Build a fresh entry for a ledger that has just been evaluated.
    /// The label defaults to the creation timestamp.
    pub fn new(steps: StepLedger, result_seconds: i64, color_tag: ColorTag) -> Self {
        let now = Local::now();
        Self {
            id: Uuid::new_v4(),
            result_seconds,
            label: now.format(DEFAULT_LABEL_FORMAT).to_string(),
            color_tag,
            created_at: now,
            last_modified: now,
            steps,
        }
    }

    /// Replace the label. Blank input restores the timestamp label.
    pub fn relabel(&mut self, label: &str) {
        let trimmed = label.trim();
        self.label = if trimmed.is_empty() {
            self.created_at.format(DEFAULT_LABEL_FORMAT).to_string()
        } else {
            trimmed.to_string()
        };
        self.touch();
    }

    pub fn recolor(&mut self, color: ColorTag) {
        self.color_tag = color;
        self.touch();
    }

    fn touch(&mut self) {
        self.last_modified = Local::now();
    }

    /// `01:00:00 + 00:30:00 = 01:30:00`
    pub fn expression(&self) -> String {
        format!("{} = {}", self.steps.trace(), codec::format(self.result_seconds))
    }

    pub fn result_display(&self) -> String {
        codec::format(self.result_seconds)
    }

    /// First 8 hex chars of the id, enough to address an entry from the CLI.
    pub fn short_id(&self) -> String {
        self.id.simple().to_string()[..8].to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::operator::Operator;

    fn ledger() -> StepLedger {
        let mut l = StepLedger::new();
        l.commit_value(3600, Some(Operator::Add));
        l.commit_value(1800, None);
        l
    }

    #[test]
    fn new_entry_uses_timestamp_label() {
        let e = HistoryEntry::new(ledger(), 5400, ColorTag::default());
        assert_eq!(
            e.label,
            e.created_at.format(DEFAULT_LABEL_FORMAT).to_string()
        );
        assert_eq!(e.created_at, e.last_modified);
        assert_eq!(e.color_tag, ColorTag::Blue);
    }

    #[test]
    fn relabel_and_recolor_touch_last_modified_only() {
        let mut e = HistoryEntry::new(ledger(), 5400, ColorTag::Red);
        let before = e.last_modified;
        e.relabel("  Sprint review  ");
        e.recolor(ColorTag::Green);
        assert_eq!(e.label, "Sprint review");
        assert_eq!(e.color_tag, ColorTag::Green);
        assert!(e.last_modified >= before);
        assert_eq!(e.result_seconds, 5400);
        assert_eq!(e.steps, ledger());
    }

    #[test]
    fn blank_relabel_restores_timestamp() {
        let mut e = HistoryEntry::new(ledger(), 5400, ColorTag::Red);
        e.relabel("x");
        e.relabel("   ");
        assert_eq!(
            e.label,
            e.created_at.format(DEFAULT_LABEL_FORMAT).to_string()
        );
    }

    #[test]
    fn expression_shows_trace_and_result() {
        let e = HistoryEntry::new(ledger(), 5400, ColorTag::Blue);
        assert_eq!(e.expression(), "01:00:00 + 00:30:00 = 01:30:00");
        assert_eq!(e.short_id().len(), 8);
    }

    #[test]
    fn record_shape_uses_camel_case_keys() {
        let e = HistoryEntry::new(ledger(), 5400, ColorTag::Teal);
        let v = serde_json::to_value(&e).unwrap();
        assert_eq!(v["resultSeconds"], 5400);
        assert_eq!(v["colorTag"], "teal");
        assert_eq!(v["steps"][0]["valueSeconds"], 3600);
        assert_eq!(v["steps"][0]["operator"], "+");
        assert!(v["steps"][1]["operator"].is_null());
        assert!(v.get("createdAt").is_some());
        assert!(v.get("lastModified").is_some());
    }
}
