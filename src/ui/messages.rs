//! User-facing status lines. Everything the CLI prints about what it did goes
//! through here so icons and colors stay consistent.

use crate::models::theme::Theme;
use crate::utils::colors::{BLUE, BOLD, GREEN, GREY, RED, RESET, YELLOW};
use std::fmt;

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{BLUE}{BOLD}{ICON_INFO} {RESET}{msg}");
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{GREEN}{BOLD}{ICON_OK} {RESET}{msg}");
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{YELLOW}{BOLD}{ICON_WARN} {RESET}{msg}");
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{RED}{BOLD}{ICON_ERR} {RESET}{msg}");
}

pub fn header<T: fmt::Display>(msg: T) {
    println!("{BLUE}{BOLD}====================== {msg}\n{RESET}");
}

/// The two calculator display lines: the running trace (dimmed) above the
/// primary `HH:MM:SS` value in the theme accent.
pub fn display<T: fmt::Display, U: fmt::Display>(theme: Theme, trace: T, value: U) {
    let trace = trace.to_string();
    if !trace.is_empty() {
        println!("{GREY}{trace}{RESET}");
    }
    println!("{BOLD}{}{RESET}", theme.paint(&value.to_string()));
}
