//! Configuration file handling.
//!
//! This module handles loading and merging configuration from
//! `.bikeshare.toml` files.

use crate::models::City;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = ".bikeshare.toml";

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Where the city trip files live.
    #[serde(default)]
    pub data: DataConfig,

    /// Report and paging settings.
    #[serde(default)]
    pub display: DisplayConfig,
}

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Enable verbose logging by default.
    #[serde(default)]
    pub verbose: bool,
}

/// Trip file locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Directory containing the city files.
    #[serde(default = "default_data_dir")]
    pub dir: PathBuf,

    #[serde(default = "default_chicago")]
    pub chicago: String,

    #[serde(default = "default_new_york_city")]
    pub new_york_city: String,

    #[serde(default = "default_washington")]
    pub washington: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: default_data_dir(),
            chicago: default_chicago(),
            new_york_city: default_new_york_city(),
            washington: default_washington(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_chicago() -> String {
    City::Chicago.default_file().to_string()
}

fn default_new_york_city() -> String {
    City::NewYorkCity.default_file().to_string()
}

fn default_washington() -> String {
    City::Washington.default_file().to_string()
}

/// Report and paging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Raw rows shown per page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Print how long each statistics section took.
    #[serde(default = "default_true")]
    pub show_timings: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            show_timings: true,
        }
    }
}

fn default_page_size() -> usize {
    5
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Try to load configuration from the default location.
    ///
    /// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but can't be parsed.
    pub fn load_default() -> Result<Option<Self>> {
        Self::load_from_dir(Path::new("."))
    }

    /// Try to load `.bikeshare.toml` from a directory.
    pub fn load_from_dir(dir: &Path) -> Result<Option<Self>> {
        let config_path = dir.join(DEFAULT_CONFIG_FILE);

        if config_path.exists() {
            Ok(Some(Self::load(&config_path)?))
        } else {
            Ok(None)
        }
    }

    /// Merge this configuration with CLI arguments.
    ///
    /// CLI arguments take precedence over config file settings, but only
    /// when they were actually given.
    pub fn merge_with_args(&mut self, args: &crate::cli::Args) {
        if let Some(ref dir) = args.data_dir {
            self.data.dir = dir.clone();
        }

        if let Some(page_size) = args.page_size {
            self.display.page_size = page_size;
        }

        if args.no_timings {
            self.display.show_timings = false;
        }

        if args.verbose {
            self.general.verbose = true;
        }
    }

    /// Generate a default configuration file content.
    pub fn default_toml() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_else(|_| String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::tests::make_args;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.data.dir, PathBuf::from("."));
        assert_eq!(config.data.chicago, "chicago.csv");
        assert_eq!(config.data.new_york_city, "new_york_city.csv");
        assert_eq!(config.display.page_size, 5);
        assert!(config.display.show_timings);
        assert!(!config.general.verbose);
    }

    #[test]
    fn test_parse_config() {
        let toml_content = r#"
[general]
verbose = true

[data]
dir = "/srv/bikeshare"
washington = "dc_2017.csv"

[display]
page_size = 10
"#;

        let config: Config = toml::from_str(toml_content).unwrap();
        assert!(config.general.verbose);
        assert_eq!(config.data.dir, PathBuf::from("/srv/bikeshare"));
        assert_eq!(config.data.washington, "dc_2017.csv");
        assert_eq!(config.data.chicago, "chicago.csv");
        assert_eq!(config.display.page_size, 10);
        assert!(config.display.show_timings);
    }

    #[test]
    fn test_default_toml_generation() {
        let toml_str = Config::default_toml();
        assert!(toml_str.contains("[general]"));
        assert!(toml_str.contains("[data]"));
        assert!(toml_str.contains("[display]"));

        let reparsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(reparsed.display.page_size, 5);
    }

    #[test]
    fn test_load_from_dir() {
        let dir = TempDir::new().unwrap();
        assert!(Config::load_from_dir(dir.path()).unwrap().is_none());

        std::fs::write(
            dir.path().join(DEFAULT_CONFIG_FILE),
            "[display]\nshow_timings = false\n",
        )
        .unwrap();
        let config = Config::load_from_dir(dir.path()).unwrap().unwrap();
        assert!(!config.display.show_timings);

        std::fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "[display\n").unwrap();
        assert!(Config::load_from_dir(dir.path()).is_err());
    }

    #[test]
    fn test_merge_with_args_only_overrides_given_flags() {
        let mut config = Config::default();
        config.data.dir = PathBuf::from("/from/file");
        config.display.page_size = 8;

        let args = make_args();
        config.merge_with_args(&args);
        assert_eq!(config.data.dir, PathBuf::from("/from/file"));
        assert_eq!(config.display.page_size, 8);
        assert!(config.display.show_timings);

        let mut args = make_args();
        args.data_dir = Some(PathBuf::from("/from/cli"));
        args.page_size = Some(3);
        args.no_timings = true;
        args.verbose = true;
        config.merge_with_args(&args);
        assert_eq!(config.data.dir, PathBuf::from("/from/cli"));
        assert_eq!(config.display.page_size, 3);
        assert!(!config.display.show_timings);
        assert!(config.general.verbose);
    }
}
