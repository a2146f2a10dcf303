//! # Configuration
//!
//! Stored as `config.json` next to the data file. A missing file means
//! defaults; unknown keys are ignored so older binaries can read newer files.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `ignore_case` | `true` | Default case handling for `search` |
//! | `match_full_string` | `false` | Default full-vs-partial matching for `search` |
//! | `file_name` | `links.json` | Name of the data file inside the data dir |

use crate::error::{LinkDbError, Result};
use crate::matcher::StringSearchOptions;
use crate::store::fs::DEFAULT_FILE_NAME;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LinkDbConfig {
    #[serde(default = "default_ignore_case")]
    pub ignore_case: bool,

    #[serde(default)]
    pub match_full_string: bool,

    #[serde(default = "default_file_name")]
    pub file_name: String,
}

fn default_ignore_case() -> bool {
    true
}

fn default_file_name() -> String {
    DEFAULT_FILE_NAME.to_string()
}

impl Default for LinkDbConfig {
    fn default() -> Self {
        Self {
            ignore_case: default_ignore_case(),
            match_full_string: false,
            file_name: default_file_name(),
        }
    }
}

impl LinkDbConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(LinkDbError::Io)?;
        serde_json::from_str(&content)
            .map_err(|e| LinkDbError::Config(format!("{}: {}", config_path.display(), e)))
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(LinkDbError::Io)?;
        }

        let content = serde_json::to_string_pretty(self).map_err(LinkDbError::Serialization)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content).map_err(LinkDbError::Io)?;
        Ok(())
    }

    pub fn search_options(&self) -> StringSearchOptions {
        StringSearchOptions::new(self.match_full_string, self.ignore_case)
    }

    /// Keys accepted by [`get`](Self::get) and [`set`](Self::set).
    pub fn keys() -> &'static [&'static str] {
        &["ignore-case", "match-full-string", "file-name"]
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "ignore-case" => Ok(self.ignore_case.to_string()),
            "match-full-string" => Ok(self.match_full_string.to_string()),
            "file-name" => Ok(self.file_name.clone()),
            other => Err(LinkDbError::Config(format!("Unknown config key: {}", other))),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "ignore-case" => self.ignore_case = parse_bool(key, value)?,
            "match-full-string" => self.match_full_string = parse_bool(key, value)?,
            "file-name" => {
                if value.trim().is_empty() {
                    return Err(LinkDbError::Config("file-name cannot be empty".into()));
                }
                self.file_name = value.trim().to_string();
            }
            other => return Err(LinkDbError::Config(format!("Unknown config key: {}", other))),
        }
        Ok(())
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(LinkDbError::Config(format!(
            "{} expects a boolean, got {:?}",
            key, value
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LinkDbConfig::default();
        assert!(config.ignore_case);
        assert!(!config.match_full_string);
        assert_eq!(config.file_name, "links.json");
        assert_eq!(config.search_options(), StringSearchOptions::new(false, true));
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = LinkDbConfig::load(dir.path()).unwrap();
        assert_eq!(config, LinkDbConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = LinkDbConfig::default();
        config.set("match-full-string", "yes").unwrap();
        config.save(dir.path().join("sub")).unwrap();

        let loaded = LinkDbConfig::load(dir.path().join("sub")).unwrap();
        assert!(loaded.match_full_string);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{ "ignore_case": false }"#).unwrap();
        let config = LinkDbConfig::load(dir.path()).unwrap();
        assert!(!config.ignore_case);
        assert_eq!(config.file_name, "links.json");
    }

    #[test]
    fn test_get_and_set() {
        let mut config = LinkDbConfig::default();
        config.set("ignore-case", "off").unwrap();
        assert_eq!(config.get("ignore-case").unwrap(), "false");
        assert!(config.set("ignore-case", "maybe").is_err());
        assert!(config.set("colour", "red").is_err());
        assert!(config.get("colour").is_err());
        assert!(config.set("file-name", " ").is_err());
    }
}
