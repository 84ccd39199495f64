//! Configuration management for the `travelgen` generator
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::TravelGenError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Upper bound on records per table in a single run
pub const MAX_RECORDS: usize = 1_000_000;

/// Root configuration structure for the generator
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TravelGenConfig {
    /// Record counts and seeding
    pub generation: GenerationConfig,
    /// Output locations
    pub output: OutputConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Record counts and random seed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Number of flight rows
    #[serde(default = "default_flights")]
    pub flights: usize,
    /// Number of accommodation rows
    #[serde(default = "default_accommodations")]
    pub accommodations: usize,
    /// Fixed seed for reproducible output; random when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Where the CSV files are written
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output directory, created if missing
    #[serde(default = "default_output_directory")]
    pub directory: String,
    #[serde(default = "default_flights_file")]
    pub flights_file: String,
    #[serde(default = "default_accommodations_file")]
    pub accommodations_file: String,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or compact)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_flights() -> usize {
    1000
}

fn default_accommodations() -> usize {
    500
}

fn default_output_directory() -> String {
    "database/generated_data".to_string()
}

fn default_flights_file() -> String {
    "flights.csv".to_string()
}

fn default_accommodations_file() -> String {
    "accommodations.csv".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "compact".to_string()
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            flights: default_flights(),
            accommodations: default_accommodations(),
            seed: None,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_directory(),
            flights_file: default_flights_file(),
            accommodations_file: default_accommodations_file(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl OutputConfig {
    /// Full path of the flights file
    #[must_use]
    pub fn flights_path(&self) -> PathBuf {
        PathBuf::from(&self.directory).join(&self.flights_file)
    }

    /// Full path of the accommodations file
    #[must_use]
    pub fn accommodations_path(&self) -> PathBuf {
        PathBuf::from(&self.directory).join(&self.accommodations_file)
    }
}

impl TravelGenConfig {
    /// Load configuration from the default file location and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // An explicit path must exist; the default location is optional
        match config_path {
            Some(path) => {
                if !path.exists() {
                    return Err(TravelGenError::config(format!(
                        "config file not found: {}",
                        path.display()
                    ))
                    .into());
                }
                builder = builder.add_source(
                    File::from(path)
                        .required(true)
                        .format(config::FileFormat::Toml),
                );
            }
            None => {
                if let Some(default_path) = Self::get_config_path().filter(|p| p.exists()) {
                    builder = builder.add_source(
                        File::from(default_path)
                            .required(false)
                            .format(config::FileFormat::Toml),
                    );
                }
            }
        }

        // Environment overrides, e.g. TRAVELGEN_GENERATION__FLIGHTS=10
        builder = builder.add_source(
            Environment::with_prefix("TRAVELGEN")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: TravelGenConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("travelgen").join("config.toml"))
    }

    /// Apply default values to blank configuration fields
    pub fn apply_defaults(&mut self) {
        if self.output.directory.trim().is_empty() {
            self.output.directory = default_output_directory();
        }
        if self.output.flights_file.trim().is_empty() {
            self.output.flights_file = default_flights_file();
        }
        if self.output.accommodations_file.trim().is_empty() {
            self.output.accommodations_file = default_accommodations_file();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_numeric_ranges()?;
        self.validate_output()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.generation.flights > MAX_RECORDS {
            return Err(TravelGenError::config(format!(
                "Flight count cannot exceed {MAX_RECORDS}"
            ))
            .into());
        }

        if self.generation.accommodations > MAX_RECORDS {
            return Err(TravelGenError::config(format!(
                "Accommodation count cannot exceed {MAX_RECORDS}"
            ))
            .into());
        }

        Ok(())
    }

    /// Validate output file names
    fn validate_output(&self) -> Result<()> {
        if self.output.directory.trim().is_empty() {
            return Err(TravelGenError::config("Output directory cannot be empty").into());
        }

        for name in [&self.output.flights_file, &self.output.accommodations_file] {
            if !name.ends_with(".csv") {
                return Err(TravelGenError::config(format!(
                    "Output file '{name}' must have a .csv extension"
                ))
                .into());
            }
            if name.contains(['/', '\\']) {
                return Err(TravelGenError::config(format!(
                    "Output file '{name}' must be a file name, not a path"
                ))
                .into());
            }
        }

        if self.output.flights_file == self.output.accommodations_file {
            return Err(TravelGenError::config(
                "Flights and accommodations must be written to different files",
            )
            .into());
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(TravelGenError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "compact"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(TravelGenError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = TravelGenConfig::default();
        assert_eq!(config.generation.flights, 1000);
        assert_eq!(config.generation.accommodations, 500);
        assert!(config.generation.seed.is_none());
        assert_eq!(config.output.directory, "database/generated_data");
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_output_paths() {
        let config = TravelGenConfig::default();
        assert_eq!(
            config.output.flights_path(),
            PathBuf::from("database/generated_data/flights.csv")
        );
        assert_eq!(
            config.output.accommodations_path(),
            PathBuf::from("database/generated_data/accommodations.csv")
        );
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = TravelGenConfig::default();
        config.logging.level = "verbose".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_validation_invalid_log_format() {
        let mut config = TravelGenConfig::default();
        config.logging.format = "xml".to_string();
        assert!(config.validate().unwrap_err().to_string().contains("Invalid log format"));
    }

    #[test]
    fn test_config_validation_numeric_ranges() {
        let mut config = TravelGenConfig::default();
        config.generation.flights = MAX_RECORDS + 1;
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("cannot exceed"));
    }

    #[test]
    fn test_config_validation_file_names() {
        let mut config = TravelGenConfig::default();
        config.output.flights_file = "flights.json".to_string();
        assert!(config.validate().is_err());

        let mut config = TravelGenConfig::default();
        config.output.accommodations_file = "flights.csv".to_string();
        assert!(config.validate().unwrap_err().to_string().contains("different files"));

        let mut config = TravelGenConfig::default();
        config.output.flights_file = "nested/flights.csv".to_string();
        assert!(config.validate().is_err());

        let mut config = TravelGenConfig::default();
        config.output.directory = String::new();
        assert!(config.validate().unwrap_err().to_string().contains("directory"));
    }

    #[test]
    fn test_apply_defaults_fills_blanks() {
        let mut config = TravelGenConfig::default();
        config.output.directory = "  ".to_string();
        config.logging.format = String::new();
        config.apply_defaults();
        assert_eq!(config.output.directory, "database/generated_data");
        assert_eq!(config.logging.format, "compact");
    }

    #[test]
    fn test_load_from_file_with_partial_sections() {
        let mut file = NamedTempFile::with_suffix(".toml").unwrap();
        writeln!(
            file,
            "[generation]\nflights = 25\nseed = 7\n\n[output]\ndirectory = \"out\""
        )
        .unwrap();

        let config = TravelGenConfig::load_from_path(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.generation.flights, 25);
        assert_eq!(config.generation.accommodations, 500);
        assert_eq!(config.generation.seed, Some(7));
        assert_eq!(config.output.directory, "out");
        assert_eq!(config.output.flights_file, "flights.csv");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_rejects_missing_explicit_file() {
        let result = TravelGenConfig::load_from_path(Some(PathBuf::from("does/not/exist.toml")));
        assert!(result.unwrap_err().to_string().contains("config file not found"));
    }

    #[test]
    fn test_config_path_generation() {
        if let Some(path) = TravelGenConfig::get_config_path() {
            assert!(path.to_string_lossy().contains("travelgen"));
            assert!(path.to_string_lossy().ends_with("config.toml"));
        }
    }
}
