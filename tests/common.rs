#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rtc() -> Command {
    cargo_bin_cmd!("rtimecalc")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimecalc.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the DB in test mode
pub fn init_db(db_path: &str) {
    rtc()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Press `keys` through the CLI against `db_path`.
pub fn calc(db_path: &str, keys: &[&str]) -> assert_cmd::assert::Assert {
    let mut args = vec!["--db", db_path, "--test", "calc"];
    args.extend_from_slice(keys);
    rtc().args(args).assert()
}

/// Ids of all stored entries, newest first
pub fn entry_ids(db_path: &str) -> Vec<String> {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    let mut stmt = conn
        .prepare("SELECT id FROM history ORDER BY created_at DESC")
        .expect("prepare");
    stmt.query_map([], |r| r.get::<_, String>(0))
        .expect("query")
        .map(|r| r.expect("row"))
        .collect()
}

/// Init a DB holding two calculations: 02:00:00 + 01:00:00 and 02:00:00 × 02:00:00
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);
    calc(db_path, &["20000", "+", "10000", "="]).success();
    calc(db_path, &["--label", "double shift", "20000", "x", "20000", "="]).success();
}
