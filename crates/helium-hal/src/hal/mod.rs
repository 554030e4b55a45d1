// Copyright 2025 Helium Client Contributors
// SPDX-License-Identifier: Apache-2.0

//! Hardware Abstraction Layer (HAL) trait definitions for serial transports
//!
//! This module defines platform-agnostic traits that must be implemented
//! by each platform to provide:
//! - Byte I/O and readability (SerialTransport)
//! - Protocol timing delays (DelayProvider)

/// Baud rate selector and its fallback policy.
pub mod baud;
/// Serial input/output traits for UART-style communication.
pub mod serial;
/// Blocking delays used for protocol timing.
pub mod time;

// Re-export trait types
pub use baud::{BaudRate, UnsupportedBaudRate};
pub use serial::SerialTransport;
pub use time::DelayProvider;

/// Convenience trait combining the capabilities a protocol driver needs
///
/// A higher-level client is written against `T: Transport` and never sees
/// which platform it runs on. Implemented for every type providing both
/// [`SerialTransport`] and [`DelayProvider`].
pub trait Transport: SerialTransport + DelayProvider {}

impl<T: SerialTransport + DelayProvider> Transport for T {}
