use crate::cli::parser::Commands;
use crate::config::preferences::{PreferenceStore, save_theme};
use crate::errors::{AppError, AppResult};
use crate::models::theme::Theme;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, current: Theme, prefs: &mut dyn PreferenceStore) -> AppResult<()> {
    if let Commands::Theme { name, list } = cmd {
        if *list {
            for t in Theme::ALL {
                let marker = if t == current { "*" } else { " " };
                println!("{marker} {}", t.paint(t.name()));
            }
            return Ok(());
        }

        match name {
            Some(n) => {
                let theme = Theme::from_name(n).ok_or_else(|| AppError::InvalidTheme(n.into()))?;
                save_theme(prefs, theme)?;
                success(format!("Theme set to {}", theme.paint(theme.name())));
            }
            None => info(format!("Current theme: {}", current.paint(current.name()))),
        }
    }
    Ok(())
}
