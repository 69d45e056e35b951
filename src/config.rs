use crate::auth::DEFAULT_ACCESS_KEYS;
use crate::domain::DEFAULT_FOCUS_SECS;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// User configuration loaded from ~/.robofocus/config.json.
///
/// The file is read once at startup; runtime state is never written back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Focus session length in minutes
    #[serde(default = "default_focus_minutes")]
    pub focus_minutes: u64,
    /// Access keys accepted on the login page
    #[serde(default = "default_access_keys")]
    pub access_keys: Vec<String>,
    /// Use emoji glyphs in the UI (ASCII fallback otherwise)
    #[serde(default = "default_use_emoji")]
    pub use_emoji: bool,
}

fn default_focus_minutes() -> u64 {
    u64::from(DEFAULT_FOCUS_SECS / 60)
}

fn default_access_keys() -> Vec<String> {
    DEFAULT_ACCESS_KEYS.iter().map(|k| k.to_string()).collect()
}

fn default_use_emoji() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            focus_minutes: default_focus_minutes(),
            access_keys: default_access_keys(),
            use_emoji: default_use_emoji(),
        }
    }
}

impl AppConfig {
    /// Focus session length in seconds
    pub fn focus_secs(&self) -> u32 {
        let secs = self.focus_minutes.saturating_mul(60);
        secs.min(u64::from(u32::MAX)) as u32
    }
}

/// Default config file location (~/.robofocus/config.json)
pub fn config_file() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".robofocus").join("config.json"))
}

/// Load configuration, falling back to defaults when no file exists
pub fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    let resolved = match path {
        Some(p) => Some(p.to_path_buf()),
        None => config_file(),
    };

    let path = match resolved {
        Some(p) => p,
        None => return Ok(AppConfig::default()),
    };

    if !path.exists() {
        return Ok(AppConfig::default());
    }

    let content = std::fs::read_to_string(&path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.focus_minutes, 25);
        assert_eq!(config.focus_secs(), 1500);
        assert_eq!(config.access_keys.len(), 3);
        assert!(config.use_emoji);
    }

    #[test]
    fn test_load_missing_file_yields_defaults() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.json");

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.focus_minutes, 25);
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, r#"{ "focus_minutes": 10 }"#).unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.focus_minutes, 10);
        assert_eq!(config.access_keys.len(), 3);
        assert!(config.use_emoji);
    }

    #[test]
    fn test_load_full_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.json");

        let config = AppConfig {
            focus_minutes: 45,
            access_keys: vec!["SCHOOL42".to_string()],
            use_emoji: false,
        };
        std::fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

        let loaded = load_config(Some(&path)).unwrap();
        assert_eq!(loaded.focus_minutes, 45);
        assert_eq!(loaded.access_keys, vec!["SCHOOL42".to_string()]);
        assert!(!loaded.use_emoji);
    }

    #[test]
    fn test_load_invalid_json_is_an_error() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(load_config(Some(&path)).is_err());
    }
}
