//! Configuration loading for vitrine.
//!
//! Reads an optional `vitrine.toml` from the platform config directory.
//! A missing file means defaults; a malformed file is an error.

use std::{fs, path::PathBuf};

use color_eyre::eyre::{Result, WrapErr};
use directories::ProjectDirs;
use serde::Deserialize;

/// Which page the app opens on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StartPage {
    #[default]
    Showcase,
    Balls,
    Letters,
    Form,
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Milliseconds between event polls; sets the frame cadence.
    pub tick_rate_ms: u64,
    /// Page shown at startup.
    pub start_page: StartPage,
    /// Whether the page-dot indicator is drawn.
    pub show_page_dots: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate_ms: 33,
            start_page: StartPage::default(),
            show_page_dots: true,
        }
    }
}

impl Config {
    /// Load from the platform config directory, falling back to defaults
    /// when no file exists.
    pub fn load() -> Result<Self> {
        let Some(path) = Self::path() else {
            return Ok(Self::default());
        };
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(&path)
            .wrap_err_with(|| format!("failed to read config at {}", path.display()))?;
        Self::parse(&raw).wrap_err_with(|| format!("invalid config at {}", path.display()))
    }

    /// Parse a TOML document; absent keys keep their defaults.
    pub fn parse(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    fn path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "vitrine").map(|dirs| dirs.config_dir().join("vitrine.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.tick_rate_ms, 33);
        assert_eq!(config.start_page, StartPage::Showcase);
        assert!(config.show_page_dots);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = Config::parse("tick_rate_ms = 16").unwrap();
        assert_eq!(config.tick_rate_ms, 16);
        assert_eq!(config.start_page, StartPage::Showcase);
        assert!(config.show_page_dots);
    }

    #[test]
    fn test_start_page_is_lowercase() {
        let config = Config::parse("start_page = \"letters\"").unwrap();
        assert_eq!(config.start_page, StartPage::Letters);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        assert!(Config::parse("tick_rate_ms = \"soon\"").is_err());
    }
}
