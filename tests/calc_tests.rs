use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{calc, entry_ids, init_db, setup_test_db};

#[test]
fn test_calc_addition() {
    let db_path = setup_test_db("calc_addition");
    init_db(&db_path);

    calc(&db_path, &["20000", "+", "13000", "="])
        .success()
        .stdout(contains("02:00:00 + 01:30:00 = 03:30:00"));

    assert_eq!(entry_ids(&db_path).len(), 1);
}

#[test]
fn test_calc_multiply_reads_operand_as_hours() {
    let db_path = setup_test_db("calc_multiply");
    init_db(&db_path);

    calc(&db_path, &["20000", "×", "20000", "="])
        .success()
        .stdout(contains("04:00:00"));
}

#[test]
fn test_calc_ascii_aliases_and_clock_notation() {
    let db_path = setup_test_db("calc_aliases");
    init_db(&db_path);

    calc(&db_path, &["03:00:00", "/", "20000", "="])
        .success()
        .stdout(contains("03:00:00 ÷ 02:00:00 = 01:30:00"));
}

#[test]
fn test_calc_divide_by_zero_is_skipped() {
    let db_path = setup_test_db("calc_div_zero");
    init_db(&db_path);

    calc(&db_path, &["10000", "÷", "0", "="])
        .success()
        .stdout(contains("= 01:00:00"));
}

#[test]
fn test_calc_subtraction_goes_negative() {
    let db_path = setup_test_db("calc_negative");
    init_db(&db_path);

    calc(&db_path, &["10000", "-", "20000", "="])
        .success()
        .stdout(contains("-01:00:00"));
}

#[test]
fn test_calc_without_equals_saves_nothing() {
    let db_path = setup_test_db("calc_no_equals");
    init_db(&db_path);

    calc(&db_path, &["10000", "+", "500"])
        .success()
        .stdout(contains("01:00:00 +"))
        .stdout(contains("00:05:00"));

    assert!(entry_ids(&db_path).is_empty());
}

#[test]
fn test_calc_no_save() {
    let db_path = setup_test_db("calc_no_save");
    init_db(&db_path);

    calc(&db_path, &["--no-save", "10000", "+", "10000", "="])
        .success()
        .stdout(contains("02:00:00"));

    assert!(entry_ids(&db_path).is_empty());
}

#[test]
fn test_calc_unknown_key_is_ignored() {
    let db_path = setup_test_db("calc_unknown_key");
    init_db(&db_path);

    calc(&db_path, &["1", "q", "2", "="])
        .success()
        .stdout(contains("Ignored unknown key 'q'"))
        .stdout(contains("00:00:12"));
}

#[test]
fn test_calc_backspace_and_percent() {
    let db_path = setup_test_db("calc_edit_keys");
    init_db(&db_path);

    // 1234 -> ⌫ -> 123 (00:01:23 = 83s) -> % -> round(0.83) = 1s
    calc(&db_path, &["--no-save", "1234", "bs", "%"])
        .success()
        .stdout(contains("00:00:01"));
}

#[test]
fn test_calc_invalid_color() {
    let db_path = setup_test_db("calc_bad_color");
    init_db(&db_path);

    calc(&db_path, &["--color", "beige", "1", "="])
        .failure()
        .stderr(contains("Invalid color"));
}

#[test]
fn test_calc_restore_then_equals_reproduces_result() {
    let db_path = setup_test_db("calc_restore");
    init_db(&db_path);

    calc(&db_path, &["20000", "×", "20000", "="]).success();
    let ids = entry_ids(&db_path);
    assert_eq!(ids.len(), 1);

    calc(&db_path, &["--restore", &ids[0][..8], "="])
        .success()
        .stdout(contains("Restored"))
        .stdout(contains("02:00:00 × 02:00:00 = 04:00:00"));

    assert_eq!(entry_ids(&db_path).len(), 2);
}

#[test]
fn test_calc_restore_and_continue() {
    let db_path = setup_test_db("calc_restore_continue");
    init_db(&db_path);

    calc(&db_path, &["10000", "+", "10000", "="]).success();
    let ids = entry_ids(&db_path);

    // the buffer holds the restored tail: replace it and re-evaluate
    calc(&db_path, &["--restore", &ids[0], "c", "3000", "="])
        .success()
        .stdout(contains("= 00:30:00"));

    calc(&db_path, &["--restore", &ids[0], "<<<<<", "3000", "="])
        .success()
        .stdout(contains("01:00:00 + 00:30:00 = 01:30:00"));
}

#[test]
fn test_calc_restore_broken_steps_fails() {
    let db_path = setup_test_db("calc_restore_broken");
    init_db(&db_path);

    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    conn.execute(
        "INSERT INTO history (id, result_seconds, label, color, created_at, created_date, last_modified, steps)
         VALUES ('0b5e3c1a-0000-4000-8000-000000000001', 60, 'broken', 'blue',
                 '2026-01-14T10:00:00+00:00', '2026-01-14', '2026-01-14T10:00:00+00:00', 'not json')",
        [],
    )
    .expect("insert");

    calc(&db_path, &["--restore", "0b5e3c1a", "="])
        .failure()
        .stderr(contains("Cannot restore calculation"));
}

#[test]
fn test_calc_restore_unknown_id() {
    let db_path = setup_test_db("calc_restore_unknown");
    init_db(&db_path);

    calc(&db_path, &["--restore", "deadbeef", "="])
        .failure()
        .stderr(contains("No history entry matches").and(contains("deadbeef")));
}

#[test]
fn test_repl_removes_a_step() {
    let db_path = setup_test_db("repl_remove_step");
    init_db(&db_path);

    common::rtc()
        .args(["--db", &db_path, "--test", "repl"])
        .write_stdin("10000 + 20000 + 3000\n:steps\n:rm 2\n=\n:q\n")
        .assert()
        .success()
        .stdout(contains("Removed step 2: 02:00:00"))
        .stdout(contains("01:00:00 + 00:30:00 = 01:30:00"));

    assert_eq!(entry_ids(&db_path).len(), 1);
}
