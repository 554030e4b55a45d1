// Copyright 2025 Helium Client Contributors
// SPDX-License-Identifier: Apache-2.0

//! Configuration validation
//!
//! This module checks that configuration values are within the ranges the
//! serial transport accepts before anything touches a device.

use std::fmt;

use helium_hal::BaudRate;

use crate::{ConfigError, ConfigResult, HeliumConfig};

/// Log levels accepted by `logging.level`
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validation errors that can occur during config validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    MissingRequired { field: String },
    UnsupportedBaud { baud: u32 },
    InvalidValue { field: String, reason: String },
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingRequired { field } => {
                write!(f, "Missing required configuration: {}", field)
            }
            Self::UnsupportedBaud { baud } => {
                let supported = BaudRate::ALL
                    .iter()
                    .map(|b| b.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(
                    f,
                    "serial.baud = {} is not supported (expected one of {})",
                    baud, supported
                )
            }
            Self::InvalidValue { field, reason } => {
                write!(f, "Invalid configuration value for {}: {}", field, reason)
            }
        }
    }
}

/// Validate the complete configuration
///
/// Checks for:
/// - A non-empty serial port path
/// - A supported nominal baud rate
/// - A known log level
///
/// # Errors
///
/// Returns `ConfigError::ValidationError` listing every problem found
pub fn validate_config(config: &HeliumConfig) -> ConfigResult<()> {
    let errors = collect_errors(config);

    if !errors.is_empty() {
        let error_messages = errors
            .iter()
            .map(|e| format!("  - {}", e))
            .collect::<Vec<_>>()
            .join("\n");

        return Err(ConfigError::ValidationError(format!(
            "Configuration validation failed:\n{}",
            error_messages
        )));
    }

    Ok(())
}

fn collect_errors(config: &HeliumConfig) -> Vec<ConfigValidationError> {
    let mut errors = Vec::new();

    if config.serial.port.as_os_str().is_empty() {
        errors.push(ConfigValidationError::MissingRequired {
            field: "serial.port".to_string(),
        });
    }

    if BaudRate::try_from(config.serial.baud).is_err() {
        errors.push(ConfigValidationError::UnsupportedBaud {
            baud: config.serial.baud,
        });
    }

    let level = config.logging.level.to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ConfigValidationError::InvalidValue {
            field: "logging.level".to_string(),
            reason: format!("'{}' is not one of {}", config.logging.level, LOG_LEVELS.join(", ")),
        });
    }

    errors
}
