pub mod calc;
pub mod clear;
pub mod config;
pub mod del;
pub mod edit;
pub mod export;
pub mod history;
pub mod init;
pub mod log;
pub mod repl;
pub mod show;
pub mod theme;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::color_tag::ColorTag;
use crate::ui::messages::warning;
use crate::utils::date;
use chrono::NaiveDate;
use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
pub(crate) fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

/// `--color` value, falling back to the configured default.
pub(crate) fn resolve_color(arg: Option<&str>, cfg: &Config) -> AppResult<ColorTag> {
    match arg {
        Some(name) => ColorTag::from_name(name).ok_or_else(|| AppError::InvalidColor(name.into())),
        None => cfg.entry_color(),
    }
}

pub(crate) fn resolve_date(arg: Option<&str>) -> AppResult<Option<NaiveDate>> {
    arg.map(|s| date::resolve_date(s).ok_or_else(|| AppError::InvalidDate(s.into())))
        .transpose()
}
