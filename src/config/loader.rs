//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading reporting
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{Palettes, ReportSettings, ReportingConfig};

/// Loads reporting configuration from a directory.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── report.yaml    # Title, trailing windows, latest hires limit
/// └── palettes.yaml  # Chart colours and line styles
/// ```
///
/// # Example
///
/// ```no_run
/// use workforce_analytics::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// println!("Report title: {}", loader.config().settings().title);
/// # Ok::<(), workforce_analytics::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: ReportingConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if either file is missing, contains invalid YAML, or
    /// holds a value [`ReportingConfig::new`] rejects.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let settings = Self::load_yaml::<ReportSettings>(&path.join("report.yaml"))?;
        let palettes = Self::load_yaml::<Palettes>(&path.join("palettes.yaml"))?;

        let config = ReportingConfig::new(settings, palettes)?;
        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &ReportingConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> ReportingConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn config_path() -> &'static str {
        "./config/default"
    }

    fn scratch_dir(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "workforce-analytics-{}-{}",
            name,
            std::process::id()
        ));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        let settings = loader.config().settings();
        assert_eq!(settings.title, "EMPLOYEE ANALYTICS REPORT");
        assert_eq!(settings.summary_attendance_days, 30);
        assert_eq!(settings.monthly_attendance_days, 180);
        assert_eq!(settings.latest_hires_limit, 5);
    }

    #[test]
    fn test_shipped_config_matches_defaults() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.into_config(), ReportingConfig::default());
    }

    #[test]
    fn test_palettes_loaded_correctly() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let palettes = loader.config().palettes();

        assert_eq!(palettes.department_distribution[0], "#FF6384");
        assert_eq!(palettes.hire_timeline.label, "New Hires");
        assert_eq!(palettes.performance_trend.tension, Decimal::new(4, 1));
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("report.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_invalid_yaml_returns_parse_error() {
        let dir = scratch_dir("bad-yaml");
        fs::write(dir.join("report.yaml"), "latest_hires_limit: [not, a, number]\n").unwrap();
        fs::write(dir.join("palettes.yaml"), "{}\n").unwrap();

        let result = ConfigLoader::load(&dir);
        assert!(matches!(result, Err(EngineError::ConfigParseError { .. })));
    }

    #[test]
    fn test_empty_palette_file_entry_is_rejected() {
        let dir = scratch_dir("empty-palette");
        fs::write(dir.join("report.yaml"), "{}\n").unwrap();
        fs::write(dir.join("palettes.yaml"), "attendance_rates: []\n").unwrap();

        let result = ConfigLoader::load(&dir);
        assert!(matches!(result, Err(EngineError::InvalidConfig { .. })));
    }
}
