// Copyright 2025 Helium Client Contributors
// SPDX-License-Identifier: Apache-2.0

//! Logging initialization
//!
//! Installs a console `tracing` subscriber filtered by the per-crate debug
//! flags. `RUST_LOG`, when set, replaces the generated filter.

use std::env;

use anyhow::{Context, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Registry};

use crate::cli::CrateDebugFlags;

/// Build the filter directives for a run
///
/// # Arguments
/// * `debug_flags` - Per-crate debug flags
/// * `default_level` - Level for everything not flagged (e.g. from `logging.level`)
pub fn filter_directives(debug_flags: &CrateDebugFlags, default_level: &str) -> String {
    env::var("RUST_LOG")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| debug_flags.to_filter_string(default_level))
}

/// Initialize console logging
///
/// # Errors
/// Fails if the filter does not parse or a global subscriber is already set.
pub fn init_logging(debug_flags: &CrateDebugFlags, default_level: &str) -> Result<()> {
    let directives = filter_directives(debug_flags, default_level);
    let env_filter = EnvFilter::try_new(&directives)
        .with_context(|| format!("Invalid log filter: {}", directives))?;

    let console_layer = fmt::layer()
        .with_target(true)
        .with_file(false)
        .with_line_number(false);

    Registry::default()
        .with(env_filter)
        .with(console_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::debug!(filter = %directives, "Logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_fails() {
        let flags = CrateDebugFlags::from_args(vec!["--debug-helium-hal".to_string()]);
        assert!(init_logging(&flags, "info").is_ok());
        assert!(init_logging(&flags, "info").is_err());
    }

    #[test]
    fn test_directives_from_flags() {
        if env::var_os("RUST_LOG").is_some() {
            return;
        }
        let flags = CrateDebugFlags::from_args(vec!["--debug-helium-config".to_string()]);
        assert_eq!(filter_directives(&flags, "warn"), "helium_config=debug,warn");
    }
}
