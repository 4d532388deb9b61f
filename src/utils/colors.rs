//! ANSI color helper utilities for terminal output.
use regex::Regex;
use std::sync::LazyLock;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const MAGENTA: &str = "\x1b[35m";
pub const CYAN: &str = "\x1b[36m";

// 256-color palette: no basic ANSI equivalent
pub const ORANGE: &str = "\x1b[38;5;208m";
pub const PURPLE: &str = "\x1b[38;5;93m";

/// Result color:
/// \>0 → reset
/// \<0 → red
/// 0 → grey
pub fn color_for_result(value: i64) -> &'static str {
    if value < 0 {
        RED
    } else if value == 0 {
        GREY
    } else {
        RESET
    }
}

static ANSI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI pattern"));

/// Remove ANSI color sequences, used before measuring display width.
pub fn strip_ansi(s: &str) -> String {
    ANSI_RE.replace_all(s, "").into_owned()
}
