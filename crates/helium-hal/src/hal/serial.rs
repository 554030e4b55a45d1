// Copyright 2025 Helium Client Contributors
// SPDX-License-Identifier: Apache-2.0

use std::path::Path;

use super::baud::BaudRate;

/// Byte-oriented serial transport
///
/// Every operation blocks the calling thread until the underlying OS call
/// completes. Methods take `&mut self`: a transport is driven by one thread
/// at a time, and `close` consumes it so a closed handle cannot be reused.
pub trait SerialTransport {
    /// Platform-specific error type
    type Error;

    /// Open `path` at `baud` and configure the line for raw 8N1 traffic
    ///
    /// # Returns
    /// The opened transport, or an error if any step failed. No resource is
    /// left open on failure.
    fn open(path: &Path, baud: BaudRate) -> Result<Self, Self::Error>
    where
        Self: Sized;

    /// Release the device. Errors from the OS are not surfaced.
    fn close(self)
    where
        Self: Sized;

    /// Block until at least one byte can be read
    ///
    /// # Returns
    /// `true` if input is available, `false` on any polling error
    fn readable(&mut self) -> bool;

    /// Read exactly one byte, blocking until it arrives
    fn read_byte(&mut self) -> Result<u8, Self::Error>;

    /// Write exactly one byte
    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error>;

    /// Write every byte of `data`, one transfer per byte
    fn write_all(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        for &byte in data {
            self.write_byte(byte)?;
        }
        Ok(())
    }

    /// Fill `buffer`, one transfer per byte
    fn read_into(&mut self, buffer: &mut [u8]) -> Result<(), Self::Error> {
        for slot in buffer.iter_mut() {
            *slot = self.read_byte()?;
        }
        Ok(())
    }
}
