use crate::db::models::{HistoryRow, LogRow};
use crate::errors::{AppError, AppResult};
use crate::models::history_entry::HistoryEntry;
use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const HISTORY_COLUMNS: &str =
    "id, result_seconds, label, color, created_at, last_modified, steps";

pub fn map_row(row: &Row) -> Result<HistoryRow> {
    Ok(HistoryRow {
        id: row.get("id")?,
        result_seconds: row.get("result_seconds")?,
        label: row.get("label")?,
        color: row.get("color")?,
        created_at: row.get("created_at")?,
        last_modified: row.get("last_modified")?,
        steps: row.get("steps")?,
    })
}

fn collect_rows(conn: &Connection, sql: &str, args: &[&dyn rusqlite::ToSql]) -> AppResult<Vec<HistoryRow>> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map(args, map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn insert_entry(conn: &Connection, entry: &HistoryEntry) -> AppResult<()> {
    conn.execute(
        "INSERT INTO history (id, result_seconds, label, color, created_at, created_date, last_modified, steps)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            entry.id.to_string(),
            entry.result_seconds,
            entry.label,
            entry.color_tag.to_db_str(),
            entry.created_at.to_rfc3339(),
            entry.created_at.format("%Y-%m-%d").to_string(),
            entry.last_modified.to_rfc3339(),
            entry.steps.encode()?,
        ],
    )?;
    Ok(())
}

/// Persist a label/color edit. Result and steps are never rewritten.
pub fn update_entry(conn: &Connection, entry: &HistoryEntry) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE history
         SET label = ?1, color = ?2, last_modified = ?3
         WHERE id = ?4",
        params![
            entry.label,
            entry.color_tag.to_db_str(),
            entry.last_modified.to_rfc3339(),
            entry.id.to_string(),
        ],
    )?;
    if changed == 0 {
        return Err(AppError::EntryNotFound(entry.id.to_string()));
    }
    Ok(())
}

pub fn delete_entry(conn: &Connection, id: &str) -> AppResult<bool> {
    let n = conn.execute("DELETE FROM history WHERE id = ?1", [id])?;
    Ok(n > 0)
}

pub fn clear_history(conn: &Connection) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM history", [])?)
}

pub fn load_entry(conn: &Connection, id: &str) -> AppResult<Option<HistoryRow>> {
    let sql = format!("SELECT {HISTORY_COLUMNS} FROM history WHERE id = ?1");
    Ok(conn.query_row(&sql, [id], map_row).optional()?)
}

/// Resolve a full id or a unique id prefix.
pub fn find_entry(conn: &Connection, id_or_prefix: &str) -> AppResult<HistoryRow> {
    let needle = id_or_prefix.trim().to_lowercase();
    if needle.is_empty() || !needle.chars().all(|c| c.is_ascii_hexdigit() || c == '-') {
        return Err(AppError::InvalidId(id_or_prefix.to_string()));
    }

    if let Some(row) = load_entry(conn, &needle)? {
        return Ok(row);
    }

    let sql = format!(
        "SELECT {HISTORY_COLUMNS} FROM history WHERE id LIKE ?1 || '%' ORDER BY created_at DESC LIMIT 2"
    );
    let mut matches = collect_rows(conn, &sql, &[&needle])?;
    match matches.len() {
        0 => Err(AppError::EntryNotFound(id_or_prefix.to_string())),
        1 => Ok(matches.remove(0)),
        _ => Err(AppError::AmbiguousId(id_or_prefix.to_string())),
    }
}

/// All entries, newest first.
pub fn load_entries(conn: &Connection) -> AppResult<Vec<HistoryRow>> {
    let sql = format!("SELECT {HISTORY_COLUMNS} FROM history ORDER BY created_at DESC");
    collect_rows(conn, &sql, &[])
}

pub fn load_entries_by_date(conn: &Connection, date: &NaiveDate) -> AppResult<Vec<HistoryRow>> {
    let sql = format!(
        "SELECT {HISTORY_COLUMNS} FROM history WHERE created_date = ?1 ORDER BY created_at DESC"
    );
    let date_str = date.format("%Y-%m-%d").to_string();
    collect_rows(conn, &sql, &[&date_str])
}

pub fn load_log(conn: &Connection) -> AppResult<Vec<LogRow>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, date, operation, COALESCE(target, ''), message FROM log ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(LogRow {
            id: row.get(0)?,
            date: row.get(1)?,
            operation: row.get(2)?,
            target: row.get(3)?,
            message: row.get(4)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ledger::StepLedger;
    use crate::db::pool::DbPool;
    use crate::models::color_tag::ColorTag;
    use crate::models::operator::Operator;

    fn entry(value: i64) -> HistoryEntry {
        let mut steps = StepLedger::new();
        steps.commit_value(value, Some(Operator::Add));
        steps.commit_value(60, None);
        HistoryEntry::new(steps, value + 60, ColorTag::Orange)
    }

    #[test]
    fn insert_then_load_keeps_steps_text() {
        let pool = DbPool::in_memory().unwrap();
        let e = entry(3600);
        insert_entry(&pool.conn, &e).unwrap();

        let row = load_entry(&pool.conn, &e.id.to_string()).unwrap().unwrap();
        assert_eq!(row.steps, e.steps.encode().unwrap());
        assert_eq!(row.result_seconds, 3660);
        assert_eq!(row.color, "orange");

        let back = row.to_entry().unwrap();
        assert_eq!(back.steps, e.steps);
        assert_eq!(back.label, e.label);
    }

    #[test]
    fn update_touches_label_and_color_only() {
        let pool = DbPool::in_memory().unwrap();
        let mut e = entry(60);
        insert_entry(&pool.conn, &e).unwrap();

        e.relabel("standup");
        e.recolor(ColorTag::Teal);
        update_entry(&pool.conn, &e).unwrap();

        let row = load_entry(&pool.conn, &e.id.to_string()).unwrap().unwrap();
        assert_eq!(row.label, "standup");
        assert_eq!(row.color, "teal");
        assert_eq!(row.result_seconds, 120);
    }

    #[test]
    fn update_missing_entry_fails() {
        let pool = DbPool::in_memory().unwrap();
        let e = entry(1);
        assert!(matches!(
            update_entry(&pool.conn, &e),
            Err(AppError::EntryNotFound(_))
        ));
    }

    #[test]
    fn find_by_prefix() {
        let pool = DbPool::in_memory().unwrap();
        let e = entry(5);
        insert_entry(&pool.conn, &e).unwrap();

        let full = e.id.to_string();
        assert_eq!(find_entry(&pool.conn, &full[..6]).unwrap().id, full);
        assert_eq!(find_entry(&pool.conn, &full.to_uppercase()).unwrap().id, full);
        assert!(matches!(
            find_entry(&pool.conn, "zz"),
            Err(AppError::InvalidId(_))
        ));
    }

    #[test]
    fn query_by_date_and_clear() {
        let pool = DbPool::in_memory().unwrap();
        let a = entry(1);
        let b = entry(2);
        insert_entry(&pool.conn, &a).unwrap();
        insert_entry(&pool.conn, &b).unwrap();

        let today = a.created_at.date_naive();
        assert_eq!(load_entries_by_date(&pool.conn, &today).unwrap().len(), 2);
        let other = NaiveDate::from_ymd_opt(2001, 1, 1).unwrap();
        assert!(load_entries_by_date(&pool.conn, &other).unwrap().is_empty());

        assert!(delete_entry(&pool.conn, &a.id.to_string()).unwrap());
        assert!(!delete_entry(&pool.conn, &a.id.to_string()).unwrap());
        assert_eq!(clear_history(&pool.conn).unwrap(), 1);
        assert!(load_entries(&pool.conn).unwrap().is_empty());
    }

    #[test]
    fn corrupted_steps_surface_as_restore_failure() {
        let pool = DbPool::in_memory().unwrap();
        let e = entry(1);
        insert_entry(&pool.conn, &e).unwrap();
        pool.conn
            .execute("UPDATE history SET steps = 'garbage'", [])
            .unwrap();

        let row = find_entry(&pool.conn, &e.short_id()).unwrap();
        assert!(matches!(row.to_entry(), Err(AppError::RestoreFailure(_))));
    }
}
