use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    /// Practice repository root; the current directory when unset.
    pub workspace_root: Option<PathBuf>,
    /// Crate name the generated Rust tests import from.
    pub rust_crate_name: String,
    /// Editor command used to open generated files. Auto-detected when unset.
    pub open_with: Option<String>,
    /// Re-run the CMake configure step after generating a C++ test.
    pub configure_cpp: bool,
    pub cmake_path: Option<String>,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            workspace_root: None,
            rust_crate_name: "rust_practice".to_string(),
            open_with: None,
            configure_cpp: false,
            cmake_path: None,
        }
    }
}

pub fn get_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("leetsync").join("config.json"))
}

pub fn load_config() -> UserConfig {
    match get_config_path() {
        Some(path) => load_config_from(&path),
        None => UserConfig::default(),
    }
}

pub fn load_config_from(path: &Path) -> UserConfig {
    if !path.exists() {
        return UserConfig::default();
    }

    match fs::read_to_string(path) {
        Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
            tracing::warn!("Ignoring malformed config {}: {}", path.display(), e);
            UserConfig::default()
        }),
        Err(_) => UserConfig::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("config.json"));
        assert_eq!(config, UserConfig::default());
        assert_eq!(config.rust_crate_name, "rust_practice");
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "configure_cpp": true, "open_with": "vim" }"#).unwrap();

        let config = load_config_from(&path);
        assert!(config.configure_cpp);
        assert_eq!(config.open_with.as_deref(), Some("vim"));
        assert_eq!(config.rust_crate_name, "rust_practice");
    }

    #[test]
    fn test_malformed_config_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();
        assert_eq!(load_config_from(&path), UserConfig::default());
    }
}
