//! # helium-serial
//!
//! Serial (UART) transport for clients of the Helium Atom. A device node is
//! opened at one of the supported baud rates, configured for raw 8N1 traffic
//! with exclusive access, and exposed through blocking single-byte
//! primitives that a protocol driver builds on.
//!
//! ## Feature Flags
//!
//! - **`config`** (default): TOML configuration with env/CLI overrides and [`open_configured`]
//! - **`observability`** (default): `tracing` subscriber setup and per-crate debug flags
//!
//! ## Usage
//!
//! ```rust,no_run
//! use helium_serial::prelude::*;
//!
//! let mut port = PosixSerialPort::open("/dev/ttyUSB0", BaudRate::B19200)?;
//! port.write_byte(0x41)?;
//! if port.readable() {
//!     let byte = port.read_byte()?;
//!     println!("{byte:#04x}");
//! }
//! port.delay_us(500);
//! port.close();
//! # Ok::<(), helium_serial::hal::SerialError>(())
//! ```
//!
//! ### Generic drivers
//!
//! Protocol code is written against [`hal::Transport`] so it runs unchanged on
//! a real device or on [`hal::platforms::LoopbackSerial`]:
//!
//! ```rust
//! use helium_serial::prelude::*;
//!
//! fn ping<T: Transport<Error = SerialError>>(port: &mut T) -> SerialResult<u8> {
//!     port.write_byte(0x01)?;
//!     port.delay_us(100);
//!     port.read_byte()
//! }
//!
//! let mut port = LoopbackSerial::default();
//! assert_eq!(ping(&mut port).unwrap(), 0x01);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Protocol driver (external, generic over Transport)     │
//! └─────────────────────────────────────────────────────────┘
//!                         ↓
//! ┌─────────────────────────────────────────────────────────┐
//! │  helium-hal: SerialTransport + DelayProvider            │
//! │  PosixSerialPort (termios) / LoopbackSerial (memory)    │
//! └─────────────────────────────────────────────────────────┘
//!                         ↑
//! ┌─────────────────────────────────────────────────────────┐
//! │  helium-config / helium-observability                   │
//! │  (which port, which baud, how loud)                     │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## License
//!
//! Apache-2.0

// Re-export foundation
pub use helium_hal as hal;

// Re-export infrastructure
#[cfg(feature = "config")]
pub use helium_config as config;

#[cfg(feature = "observability")]
pub use helium_observability as observability;

#[cfg(all(unix, feature = "config"))]
mod configured;

#[cfg(all(unix, feature = "config"))]
pub use configured::open_configured;

/// Prelude - commonly used types and traits
pub mod prelude {
    pub use crate::hal::prelude::*;

    #[cfg(feature = "config")]
    pub use crate::config::{load_config, HeliumConfig, SerialConfig};

    #[cfg(all(unix, feature = "config"))]
    pub use crate::open_configured;
}
