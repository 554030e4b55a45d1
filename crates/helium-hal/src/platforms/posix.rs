// Copyright 2025 Helium Client Contributors
// SPDX-License-Identifier: Apache-2.0

//! POSIX serial device backed by termios
//!
//! `open` performs the same sequence every POSIX serial shim does:
//!
//! ```text
//! open(O_RDWR | O_NOCTTY | O_NONBLOCK)
//!   -> ioctl(TIOCEXCL)          exclusive access
//!   -> fcntl(F_SETFL, 0)        back to blocking I/O
//!   -> tcgetattr / tcsetattr    raw 8N1, VMIN=1, VTIME=1
//! ```
//!
//! The device is owned by a `File`, so it is closed on every failure path and
//! when the port is closed or dropped.

use std::fs::{File, OpenOptions};
use std::io::{self, Read, Write};
use std::os::fd::{AsFd, AsRawFd, BorrowedFd, RawFd};
use std::os::unix::fs::OpenOptionsExt;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use nix::fcntl::{fcntl, FcntlArg, OFlag};
use nix::libc;
use nix::poll::{poll, PollFd, PollFlags, PollTimeout};
use nix::sys::termios::{
    self, ControlFlags, InputFlags, LocalFlags, OutputFlags, SetArg, SpecialCharacterIndices,
    Termios,
};
use tracing::{debug, trace, warn};

use crate::error::{SerialError, SerialResult};
use crate::hal::{BaudRate, DelayProvider, SerialTransport};

nix::ioctl_none_bad!(tiocexcl, libc::TIOCEXCL);

/// Serial device opened in raw 8N1 mode
#[derive(Debug)]
pub struct PosixSerialPort {
    file: File,
    path: PathBuf,
    baud: BaudRate,
}

impl PosixSerialPort {
    /// Open and configure the serial device at `path`
    ///
    /// # Errors
    /// [`SerialError::Open`] if the node cannot be opened, exclusive access
    /// cannot be claimed, blocking mode cannot be restored or the line
    /// attributes cannot be read or committed.
    pub fn open(path: impl AsRef<Path>, baud: BaudRate) -> SerialResult<Self> {
        let path = path.as_ref();

        let file = open_device(path, baud).map_err(|source| {
            warn!(path = %path.display(), baud = %baud, error = %source, "Failed to open serial port");
            SerialError::Open {
                path: path.to_path_buf(),
                source,
            }
        })?;

        debug!(
            path = %path.display(),
            requested = %baud,
            effective = %baud.effective(),
            "Opened serial port"
        );

        Ok(Self {
            file,
            path: path.to_path_buf(),
            baud,
        })
    }

    /// Device node this port was opened from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Selector the port was opened with (see [`BaudRate::effective`])
    pub fn baud(&self) -> BaudRate {
        self.baud
    }
}

fn open_device(path: &Path, baud: BaudRate) -> io::Result<File> {
    // Non-blocking so open cannot hang waiting for carrier detect.
    let file = OpenOptions::new()
        .read(true)
        .write(true)
        .custom_flags(libc::O_NOCTTY | libc::O_NONBLOCK)
        .open(path)?;

    // SAFETY: the descriptor is owned by `file` and stays open for the call.
    unsafe { tiocexcl(file.as_raw_fd()) }?;

    fcntl(file.as_raw_fd(), FcntlArg::F_SETFL(OFlag::empty()))?;

    let mut tty = termios::tcgetattr(file.as_fd())?;
    configure_raw_8n1(&mut tty, baud)?;
    termios::tcsetattr(file.as_fd(), SetArg::TCSANOW, &tty)?;

    Ok(file)
}

/// Platform line speed for a selector
pub(crate) fn line_speed(baud: BaudRate) -> termios::BaudRate {
    match baud {
        BaudRate::B9600 => termios::BaudRate::B9600,
        // termios has no 14400 constant; run the line at the next faster rate.
        BaudRate::B14400 | BaudRate::B19200 => termios::BaudRate::B19200,
        BaudRate::B38400 => termios::BaudRate::B38400,
        BaudRate::B57600 => termios::BaudRate::B57600,
        BaudRate::B115200 => termios::BaudRate::B115200,
    }
}

fn configure_raw_8n1(tty: &mut Termios, baud: BaudRate) -> nix::Result<()> {
    let speed = line_speed(baud);
    termios::cfsetospeed(tty, speed)?;
    termios::cfsetispeed(tty, speed)?;

    // ignore modem controls, 8 data bits, no parity, 1 stop bit, no RTS/CTS
    tty.control_flags.insert(ControlFlags::CLOCAL | ControlFlags::CREAD);
    tty.control_flags.remove(ControlFlags::CSIZE);
    tty.control_flags.insert(ControlFlags::CS8);
    tty.control_flags
        .remove(ControlFlags::PARENB | ControlFlags::CSTOPB | ControlFlags::CRTSCTS);

    // non-canonical mode
    tty.input_flags.remove(
        InputFlags::IGNBRK
            | InputFlags::BRKINT
            | InputFlags::PARMRK
            | InputFlags::ISTRIP
            | InputFlags::INLCR
            | InputFlags::IGNCR
            | InputFlags::ICRNL
            | InputFlags::IXON,
    );
    tty.local_flags.remove(
        LocalFlags::ECHO
            | LocalFlags::ECHONL
            | LocalFlags::ICANON
            | LocalFlags::ISIG
            | LocalFlags::IEXTEN,
    );
    tty.output_flags.remove(OutputFlags::OPOST);

    // fetch bytes as they become available
    tty.control_chars[SpecialCharacterIndices::VMIN as usize] = 1;
    tty.control_chars[SpecialCharacterIndices::VTIME as usize] = 1;

    Ok(())
}

impl SerialTransport for PosixSerialPort {
    type Error = SerialError;

    fn open(path: &Path, baud: BaudRate) -> SerialResult<Self> {
        PosixSerialPort::open(path, baud)
    }

    fn close(self) {
        debug!(path = %self.path.display(), "Closing serial port");
        drop(self.file);
    }

    fn readable(&mut self) -> bool {
        let mut fds = [PollFd::new(self.file.as_fd(), PollFlags::POLLIN)];
        match poll(&mut fds, PollTimeout::NONE) {
            Ok(1) => fds[0]
                .revents()
                .is_some_and(|revents| revents.contains(PollFlags::POLLIN)),
            Ok(_) => false,
            Err(errno) => {
                debug!(path = %self.path.display(), error = %errno, "Serial poll failed");
                false
            }
        }
    }

    fn read_byte(&mut self) -> SerialResult<u8> {
        let mut byte = [0u8; 1];
        match self.file.read(&mut byte) {
            Ok(1) => {
                trace!(byte = byte[0], "rx");
                Ok(byte[0])
            }
            Ok(_) => Err(SerialError::Disconnected),
            Err(e) => Err(SerialError::Read(e)),
        }
    }

    fn write_byte(&mut self, byte: u8) -> SerialResult<()> {
        match self.file.write(&[byte]) {
            Ok(1) => {
                trace!(byte, "tx");
                Ok(())
            }
            Ok(_) => Err(SerialError::WriteZero),
            Err(e) => Err(SerialError::Write(e)),
        }
    }
}

impl DelayProvider for PosixSerialPort {
    fn delay_us(&self, us: u32) {
        thread::sleep(Duration::from_micros(u64::from(us)));
    }

    fn delay_ms(&self, ms: u32) {
        thread::sleep(Duration::from_millis(u64::from(ms)));
    }
}

impl AsFd for PosixSerialPort {
    fn as_fd(&self) -> BorrowedFd<'_> {
        self.file.as_fd()
    }
}

impl AsRawFd for PosixSerialPort {
    fn as_raw_fd(&self) -> RawFd {
        self.file.as_raw_fd()
    }
}
