use crate::errors::{AppError, AppResult};
use crate::models::color_tag::ColorTag;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub mod preferences;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_color")]
    pub default_color: String,
    #[serde(default = "default_show_trace")]
    pub show_trace: bool,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_color() -> String {
    ColorTag::default().to_db_str().to_string()
}
fn default_show_trace() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            default_color: default_color(),
            show_trace: default_show_trace(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        let base = if cfg!(target_os = "windows") {
            dirs::config_dir()
        } else {
            dirs::home_dir()
        };
        let base = base.unwrap_or_else(|| PathBuf::from("."));

        if cfg!(target_os = "windows") {
            base.join("rtimecalc")
        } else {
            base.join(".rtimecalc")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimecalc.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rtimecalc.sqlite")
    }

    /// Return the full path of the preferences store (theme selection)
    pub fn preferences_file() -> PathBuf {
        Self::config_dir().join("preferences.yml")
    }

    /// Load configuration from file, or return defaults if not found.
    /// Missing fields take their defaults.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Color given to new history entries. An unknown name in the file is
    /// reported rather than silently replaced.
    pub fn entry_color(&self) -> AppResult<ColorTag> {
        ColorTag::from_name(&self.default_color)
            .ok_or_else(|| AppError::InvalidColor(self.default_color.clone()))
    }

    /// Initialize configuration and database files.
    /// Returns the database path that was set up.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();

        let db_path = match custom_db {
            Some(name) => {
                let p = Path::new(&name);
                if p.is_absolute() {
                    p.to_path_buf()
                } else {
                    dir.join(p)
                }
            }
            None => Self::database_file(),
        };

        if !is_test {
            fs::create_dir_all(&dir)?;

            let config = Config {
                database: db_path.to_string_lossy().to_string(),
                ..Config::default()
            };

            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        Ok(db_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn temp_conf(name: &str, content: &str) -> PathBuf {
        let mut path = env::temp_dir();
        path.push(format!("{name}_rtimecalc.conf"));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn missing_file_gives_defaults() {
        let mut path = env::temp_dir();
        path.push("does_not_exist_rtimecalc.conf");
        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.default_color, "blue");
        assert!(cfg.show_trace);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let path = temp_conf("partial", "database: /tmp/x.sqlite\n");
        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.database, "/tmp/x.sqlite");
        assert_eq!(cfg.entry_color().unwrap(), ColorTag::Blue);
        assert!(cfg.show_trace);
    }

    #[test]
    fn bad_color_is_reported() {
        let path = temp_conf("bad_color", "default_color: beige\n");
        let cfg = Config::load_from(&path).unwrap();
        assert!(matches!(cfg.entry_color(), Err(AppError::InvalidColor(_))));
    }

    #[test]
    fn malformed_yaml_is_config_error() {
        let path = temp_conf("malformed", "show_trace: [unclosed\n");
        assert!(matches!(Config::load_from(&path), Err(AppError::Config(_))));
    }
}
