//! Error types and handling for the `travelgen` generator

use thiserror::Error;

/// Main error type for the `travelgen` generator
#[derive(Error, Debug)]
pub enum TravelGenError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Reference catalog cannot support the sampling the generators perform
    #[error("Catalog error: {message}")]
    Catalog { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// CSV serialization or parsing errors
    #[error("CSV error: {source}")]
    Csv {
        #[from]
        source: csv::Error,
    },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl TravelGenError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new catalog error
    pub fn catalog<S: Into<String>>(message: S) -> Self {
        Self::Catalog {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TravelGenError::Config { message } => {
                format!("Configuration error: {message}. Please check your config file.")
            }
            TravelGenError::Catalog { message } => {
                format!("Reference data is inconsistent: {message}")
            }
            TravelGenError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            TravelGenError::Csv { .. } => {
                "Failed to write CSV output. Please check the output directory.".to_string()
            }
            TravelGenError::Io { .. } => {
                "File operation failed. Please check file permissions and free disk space."
                    .to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = TravelGenError::config("bad log level");
        assert!(matches!(config_err, TravelGenError::Config { .. }));

        let catalog_err = TravelGenError::catalog("no countries");
        assert!(matches!(catalog_err, TravelGenError::Catalog { .. }));

        let validation_err = TravelGenError::validation("negative count");
        assert!(matches!(validation_err, TravelGenError::Validation { .. }));
    }

    #[test]
    fn test_user_messages() {
        let config_err = TravelGenError::config("test");
        assert!(config_err.user_message().contains("Configuration error"));

        let catalog_err = TravelGenError::catalog("only one country");
        assert!(catalog_err.user_message().contains("only one country"));

        let validation_err = TravelGenError::validation("test input");
        assert!(validation_err.user_message().contains("test input"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: TravelGenError = io_err.into();
        assert!(matches!(err, TravelGenError::Io { .. }));
        assert!(err.user_message().contains("permissions"));
    }
}
