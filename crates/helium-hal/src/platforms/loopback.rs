// Copyright 2025 Helium Client Contributors
// SPDX-License-Identifier: Apache-2.0

//! In-memory loopback transport
//!
//! Behaves like a serial device with TX wired to RX: every byte written is
//! read back in order. Bytes from a simulated peer can be queued with
//! [`LoopbackSerial::inject`]. Nothing blocks: a read with no buffered data
//! fails with [`SerialError::Disconnected`] since no peer exists to wait for,
//! and delays are accumulated instead of slept.

use std::cell::Cell;
use std::collections::VecDeque;
use std::path::Path;

use tracing::trace;

use crate::error::{SerialError, SerialResult};
use crate::hal::{BaudRate, DelayProvider, SerialTransport};

/// Loopback transport for driving protocol code without hardware
#[derive(Debug)]
pub struct LoopbackSerial {
    baud: BaudRate,
    rx: VecDeque<u8>,
    bytes_written: u64,
    delayed_us: Cell<u64>,
}

impl LoopbackSerial {
    pub fn new(baud: BaudRate) -> Self {
        Self {
            baud,
            rx: VecDeque::new(),
            bytes_written: 0,
            delayed_us: Cell::new(0),
        }
    }

    pub fn baud(&self) -> BaudRate {
        self.baud
    }

    /// Queue bytes as if the remote end had sent them
    pub fn inject(&mut self, data: &[u8]) {
        self.rx.extend(data);
    }

    /// Bytes waiting to be read
    pub fn pending(&self) -> usize {
        self.rx.len()
    }

    /// Total bytes written since open
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Sum of every delay requested, in microseconds
    pub fn delayed_us(&self) -> u64 {
        self.delayed_us.get()
    }
}

impl Default for LoopbackSerial {
    fn default() -> Self {
        Self::new(BaudRate::B9600)
    }
}

impl SerialTransport for LoopbackSerial {
    type Error = SerialError;

    fn open(_path: &Path, baud: BaudRate) -> SerialResult<Self> {
        Ok(Self::new(baud))
    }

    fn close(self) {}

    fn readable(&mut self) -> bool {
        !self.rx.is_empty()
    }

    fn read_byte(&mut self) -> SerialResult<u8> {
        let byte = self.rx.pop_front().ok_or(SerialError::Disconnected)?;
        trace!(byte, "loopback rx");
        Ok(byte)
    }

    fn write_byte(&mut self, byte: u8) -> SerialResult<()> {
        trace!(byte, "loopback tx");
        self.rx.push_back(byte);
        self.bytes_written += 1;
        Ok(())
    }
}

impl DelayProvider for LoopbackSerial {
    fn delay_us(&self, us: u32) {
        self.delayed_us.set(self.delayed_us.get() + u64::from(us));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_then_read_returns_same_byte() {
        let mut port = LoopbackSerial::open(Path::new("loop"), BaudRate::B19200).unwrap();
        for byte in 0..=u8::MAX {
            port.write_byte(byte).unwrap();
            assert!(port.readable());
            assert_eq!(port.read_byte().unwrap(), byte);
        }
        assert_eq!(port.bytes_written(), 256);
        assert_eq!(port.baud(), BaudRate::B19200);
    }

    #[test]
    fn test_empty_read_never_fabricates_a_byte() {
        let mut port = LoopbackSerial::default();
        assert!(!port.readable());
        assert!(matches!(port.read_byte(), Err(SerialError::Disconnected)));
    }

    #[test]
    fn test_injected_bytes_arrive_in_order() {
        let mut port = LoopbackSerial::default();
        port.inject(&[1, 2, 3]);
        let mut buf = [0u8; 3];
        port.read_into(&mut buf).unwrap();
        assert_eq!(buf, [1, 2, 3]);
        assert_eq!(port.pending(), 0);
    }

    #[test]
    fn test_delays_accumulate() {
        let port = LoopbackSerial::default();
        port.delay_us(250);
        port.delay_ms(2);
        assert_eq!(port.delayed_us(), 2_250);
    }
}
