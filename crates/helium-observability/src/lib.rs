// Copyright 2025 Helium Client Contributors
// SPDX-License-Identifier: Apache-2.0

//! # helium-observability
//!
//! Logging setup shared by every Helium crate, with per-crate debug flag
//! support.
//!
//! ```rust,no_run
//! let flags = helium_observability::parse_debug_flags();
//! helium_observability::init_logging(&flags, "info").expect("Failed to init logging");
//! ```

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod init;

// Re-export commonly used items
pub use cli::*;
pub use init::*;

/// Known Helium crate names for debug flags
pub const KNOWN_CRATES: &[&str] = &["helium-hal", "helium-config", "helium-serial"];
