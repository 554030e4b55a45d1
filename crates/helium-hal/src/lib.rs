// Copyright 2025 Helium Client Contributors
// SPDX-License-Identifier: Apache-2.0

//! # helium-hal
//!
//! Platform abstraction for the byte-oriented serial transport a Helium
//! client speaks its wire protocol over.
//!
//! The crate is split the same way as every HAL in this workspace:
//! - [`hal`] holds the capability traits ([`SerialTransport`], [`DelayProvider`])
//!   and the [`BaudRate`] selector
//! - [`platforms`] holds the implementations (`PosixSerialPort`, `LoopbackSerial`)
//!
//! ## Usage
//!
//! ```rust,no_run
//! use helium_hal::prelude::*;
//!
//! let mut port = PosixSerialPort::open("/dev/ttyUSB0", BaudRate::B19200)?;
//! port.write_byte(0x41)?;
//! if port.readable() {
//!     let reply = port.read_byte()?;
//!     println!("got {reply:#04x}");
//! }
//! port.close();
//! # Ok::<(), helium_hal::SerialError>(())
//! ```

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod hal;
pub mod platforms;

pub use error::{SerialError, SerialResult};
pub use hal::{BaudRate, DelayProvider, SerialTransport, Transport, UnsupportedBaudRate};
pub use platforms::LoopbackSerial;

#[cfg(all(unix, feature = "posix"))]
pub use platforms::PosixSerialPort;

/// Prelude - commonly used types and traits
pub mod prelude {
    pub use crate::error::{SerialError, SerialResult};
    pub use crate::hal::*;

    pub use crate::platforms::LoopbackSerial;

    #[cfg(all(unix, feature = "posix"))]
    pub use crate::platforms::PosixSerialPort;
}
