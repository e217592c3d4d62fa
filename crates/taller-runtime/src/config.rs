use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use taller_engine::{ScreenOptions, SelectionMode, screen::DEFAULT_PAGE_SIZE};

use crate::{Error, Result};

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. TALLER_CONFIG environment variable (with tilde expansion)
/// 3. XDG config directory
/// 4. ~/.taller/config.toml
pub fn resolve_config_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("TALLER_CONFIG") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("taller").join("config.toml"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".taller").join("config.toml"));
    }

    Err(Error::Config(
        "Could not determine config path: no HOME directory or XDG config directory found"
            .to_string(),
    ))
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    pub page_size: usize,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    pub mode: SelectionMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormsConfig {
    pub require_line_items: bool,
    pub check_references: bool,
}

impl Default for FormsConfig {
    fn default() -> Self {
        Self {
            require_line_items: true,
            check_references: false,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub list: ListConfig,
    #[serde(default)]
    pub selection: SelectionConfig,
    #[serde(default)]
    pub forms: FormsConfig,
}

impl Config {
    /// Load from `path`; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    fn validate(&self) -> Result<()> {
        if self.list.page_size == 0 {
            return Err(Error::Config("list.page_size must be at least 1".to_string()));
        }
        Ok(())
    }

    pub fn screen_options(&self) -> ScreenOptions {
        ScreenOptions {
            selection_mode: self.selection.mode,
            require_line_items: self.forms.require_line_items,
            check_references: self.forms.check_references,
            page_size: self.list.page_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.list.page_size, 8);
        assert_eq!(config.selection.mode, SelectionMode::Single);
        assert!(config.forms.require_line_items);
        assert!(!config.forms.check_references);
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.selection.mode = SelectionMode::Multiple;
        config.forms.check_references = true;
        config.save_to(&config_path)?;
        assert!(config_path.exists());

        assert_eq!(Config::load_from(&config_path)?, config);
        Ok(())
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[list]\npage_size = 3\n")?;

        let config = Config::load_from(&config_path)?;
        assert_eq!(config.list.page_size, 3);
        assert_eq!(config.forms, FormsConfig::default());
        assert_eq!(config.screen_options().page_size, 3);
        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config = Config::load_from(&temp_dir.path().join("missing.toml"))?;
        assert_eq!(config, Config::default());
        Ok(())
    }

    #[test]
    fn test_invalid_values_are_config_errors() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");

        std::fs::write(&config_path, "[selection]\nmode = \"many\"\n")?;
        assert!(matches!(Config::load_from(&config_path), Err(Error::Config(_))));

        std::fs::write(&config_path, "[list]\npage_size = 0\n")?;
        assert!(matches!(Config::load_from(&config_path), Err(Error::Config(_))));
        Ok(())
    }

    #[test]
    fn test_explicit_path_wins() -> Result<()> {
        let path = resolve_config_path(Some("/tmp/taller-test.toml"))?;
        assert_eq!(path, PathBuf::from("/tmp/taller-test.toml"));
        Ok(())
    }
}
