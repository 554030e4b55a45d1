// Copyright 2025 Helium Client Contributors
// SPDX-License-Identifier: Apache-2.0

//! Configuration type definitions
//!
//! This module defines all configuration structs that map to sections in
//! `helium.toml`.

use std::path::PathBuf;

use helium_hal::BaudRate;
use serde::{Deserialize, Serialize};

use crate::{ConfigError, ConfigResult};

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct HeliumConfig {
    pub serial: SerialConfig,
    pub logging: LoggingConfig,
}

/// Serial device configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SerialConfig {
    /// Device node, e.g. `/dev/ttyUSB0`
    pub port: PathBuf,
    /// Nominal baud rate; one of 9600, 14400, 19200, 38400, 57600, 115200
    pub baud: u32,
}

impl SerialConfig {
    /// Configured baud as a selector
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `baud` is not a supported nominal rate
    pub fn baud_rate(&self) -> ConfigResult<BaudRate> {
        BaudRate::try_from(self.baud)
            .map_err(|e| ConfigError::InvalidValue(format!("serial.baud: {}", e)))
    }
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self {
            port: PathBuf::from("/dev/ttyUSB0"),
            baud: BaudRate::B9600.nominal(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default log level (trace, debug, info, warn, error)
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
