//! Key-value preference storage and the theme selection kept in it.
//!
//! The selected theme is read once at start-up and handed to the
//! presentation code; nothing reads it from a global.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::theme::Theme;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

pub const THEME_KEY: &str = "selectedTheme";

pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;
}

/// Preferences persisted as a flat YAML mapping.
pub struct YamlPreferences {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl YamlPreferences {
    pub fn open(path: PathBuf) -> AppResult<Self> {
        let values = if path.exists() {
            let content = fs::read_to_string(&path)?;
            if content.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_yaml::from_str(&content).map_err(|e| {
                    AppError::Config(format!("{}: {}", path.display(), e))
                })?
            }
        } else {
            BTreeMap::new()
        };
        Ok(Self { path, values })
    }
}

impl PreferenceStore for YamlPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(&self.path, serde_yaml::to_string(&self.values)?)?;
        Ok(())
    }
}

/// Non-persistent store, used in test mode.
#[derive(Default)]
pub struct MemoryPreferences {
    values: BTreeMap<String, String>,
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Preference store for this run. Test mode never touches the user's files.
pub fn open_preferences(test: bool) -> AppResult<Box<dyn PreferenceStore>> {
    if test {
        Ok(Box::new(MemoryPreferences::default()))
    } else {
        Ok(Box::new(YamlPreferences::open(Config::preferences_file())?))
    }
}

/// Saved theme, or the default when nothing (or an unknown name) is stored.
pub fn load_theme(store: &dyn PreferenceStore) -> Theme {
    store
        .get(THEME_KEY)
        .and_then(|name| Theme::from_name(&name))
        .unwrap_or_default()
}

pub fn save_theme(store: &mut dyn PreferenceStore, theme: Theme) -> AppResult<()> {
    store.set(THEME_KEY, theme.name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn memory_store_round_trip() {
        let mut store = MemoryPreferences::default();
        assert_eq!(load_theme(&store), Theme::Blue);
        save_theme(&mut store, Theme::Red).unwrap();
        assert_eq!(load_theme(&store), Theme::Red);
    }

    #[test]
    fn unknown_saved_theme_falls_back() {
        let mut store = MemoryPreferences::default();
        store.set(THEME_KEY, "Neon").unwrap();
        assert_eq!(load_theme(&store), Theme::Blue);
    }

    #[test]
    fn yaml_store_persists_between_opens() {
        let mut path = env::temp_dir();
        path.push("prefs_round_trip_rtimecalc.yml");
        fs::remove_file(&path).ok();

        let mut store = YamlPreferences::open(path.clone()).unwrap();
        save_theme(&mut store, Theme::Orange).unwrap();

        let reopened = YamlPreferences::open(path.clone()).unwrap();
        assert_eq!(load_theme(&reopened), Theme::Orange);
        fs::remove_file(&path).ok();
    }
}
