// Copyright 2025 Helium Client Contributors
// SPDX-License-Identifier: Apache-2.0

//! Platform implementations of the HAL traits

/// In-memory transport that echoes writes back to reads.
pub mod loopback;

#[cfg(all(unix, feature = "posix"))]
mod posix;

pub use loopback::LoopbackSerial;

#[cfg(all(unix, feature = "posix"))]
pub use posix::PosixSerialPort;
