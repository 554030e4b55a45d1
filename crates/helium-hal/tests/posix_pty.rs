// Copyright 2025 Helium Client Contributors
// SPDX-License-Identifier: Apache-2.0

//! Integration tests for `PosixSerialPort` against Linux pseudo-terminals.
//!
//! The pty slave stands in for the serial device; the master plays the
//! remote end of the wire. The hardware test at the bottom needs a real
//! adapter with TX wired to RX and is ignored by default.
//! Run with: cargo test -p helium-hal -- --ignored

#![cfg(target_os = "linux")]

use std::fs;
use std::io::{Read, Write};
use std::os::fd::{AsFd, AsRawFd};
use std::path::Path;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use helium_hal::prelude::*;
use nix::fcntl::OFlag;
use nix::pty::{grantpt, posix_openpt, ptsname_r, unlockpt, PtyMaster};
use nix::sys::termios::{self, ControlFlags, InputFlags, LocalFlags, OutputFlags, SpecialCharacterIndices};

nix::ioctl_read_bad!(tiocgexcl, nix::libc::TIOCGEXCL, nix::libc::c_int);

fn open_pty() -> (PtyMaster, String) {
    let master = posix_openpt(OFlag::O_RDWR | OFlag::O_NOCTTY).expect("Failed to allocate pty");
    grantpt(&master).expect("grantpt failed");
    unlockpt(&master).expect("unlockpt failed");
    let slave = ptsname_r(&master).expect("ptsname failed");
    (master, slave)
}

#[test]
fn test_every_selector_sets_expected_line_speed() {
    let expected = [
        (BaudRate::B9600, termios::BaudRate::B9600),
        (BaudRate::B14400, termios::BaudRate::B19200),
        (BaudRate::B19200, termios::BaudRate::B19200),
        (BaudRate::B38400, termios::BaudRate::B38400),
        (BaudRate::B57600, termios::BaudRate::B57600),
        (BaudRate::B115200, termios::BaudRate::B115200),
    ];

    for (baud, speed) in expected {
        let (_master, slave) = open_pty();
        let port = PosixSerialPort::open(&slave, baud).expect("Failed to open pty slave");
        let tty = termios::tcgetattr(port.as_fd()).unwrap();

        assert_eq!(termios::cfgetospeed(&tty), speed, "output speed for {baud}");
        assert_eq!(termios::cfgetispeed(&tty), speed, "input speed for {baud}");
        port.close();
    }
}

#[test]
fn test_line_is_raw_8n1() {
    let (_master, slave) = open_pty();
    let port = PosixSerialPort::open(&slave, BaudRate::B9600).unwrap();
    let tty = termios::tcgetattr(port.as_fd()).unwrap();

    assert!(tty.control_flags.contains(ControlFlags::CS8 | ControlFlags::CLOCAL | ControlFlags::CREAD));
    assert!(!tty.control_flags.intersects(ControlFlags::PARENB | ControlFlags::CSTOPB | ControlFlags::CRTSCTS));
    assert!(!tty.input_flags.intersects(InputFlags::ICRNL | InputFlags::IXON | InputFlags::ISTRIP));
    assert!(!tty.local_flags.intersects(LocalFlags::ICANON | LocalFlags::ECHO | LocalFlags::ISIG));
    assert!(!tty.output_flags.contains(OutputFlags::OPOST));
    assert_eq!(tty.control_chars[SpecialCharacterIndices::VMIN as usize], 1);
    assert_eq!(tty.control_chars[SpecialCharacterIndices::VTIME as usize], 1);

    assert_eq!(port.path(), Path::new(&slave));
    assert_eq!(port.baud(), BaudRate::B9600);
}

#[test]
fn test_all_byte_values_pass_through_unmodified() {
    let (mut master, slave) = open_pty();
    let mut port = PosixSerialPort::open(&slave, BaudRate::B115200).unwrap();
    let all_bytes: Vec<u8> = (0..=u8::MAX).collect();

    // device -> remote
    port.write_all(&all_bytes).unwrap();
    let mut received = vec![0u8; all_bytes.len()];
    master.read_exact(&mut received).unwrap();
    assert_eq!(received, all_bytes);

    // remote -> device
    master.write_all(&all_bytes).unwrap();
    let mut received = vec![0u8; all_bytes.len()];
    port.read_into(&mut received).unwrap();
    assert_eq!(received, all_bytes);
}

#[test]
fn test_readable_when_byte_buffered() {
    let (mut master, slave) = open_pty();
    let mut port = PosixSerialPort::open(&slave, BaudRate::B19200).unwrap();

    master.write_all(&[0x41]).unwrap();

    assert!(port.readable());
    assert_eq!(port.read_byte().unwrap(), 0x41);
}

#[test]
fn test_read_blocks_until_data_arrives() {
    let (mut master, slave) = open_pty();
    let mut port = PosixSerialPort::open(&slave, BaudRate::B9600).unwrap();

    let (done_tx, done_rx) = mpsc::channel();
    let reader = thread::spawn(move || {
        let result = port.read_byte();
        done_tx.send(()).unwrap();
        (port, result)
    });

    // Nothing was sent, so the read must still be pending.
    assert!(done_rx.recv_timeout(Duration::from_millis(200)).is_err());

    master.write_all(&[0x5A]).unwrap();
    let (port, result) = reader.join().unwrap();
    assert_eq!(result.unwrap(), 0x5A);
    port.close();
}

/// Descriptors of this process whose link target is `path`
fn descriptors_referring_to(path: &Path) -> usize {
    fs::read_dir("/proc/self/fd")
        .unwrap()
        .filter_map(|entry| fs::read_link(entry.ok()?.path()).ok())
        .filter(|target| target == path)
        .count()
}

#[test]
fn test_open_sets_exclusive_mode() {
    let (_master, slave) = open_pty();
    let port = PosixSerialPort::open(&slave, BaudRate::B9600).unwrap();

    let mut exclusive: nix::libc::c_int = 0;
    // SAFETY: the descriptor is owned by `port` and `exclusive` outlives the call.
    unsafe { tiocgexcl(port.as_raw_fd(), &mut exclusive) }.unwrap();
    assert_ne!(exclusive, 0);
}

#[test]
fn test_exclusive_access_rejects_second_open() {
    // TIOCEXCL does not apply to privileged processes.
    if nix::unistd::geteuid().is_root() {
        return;
    }
    let (_master, slave) = open_pty();
    let _port = PosixSerialPort::open(&slave, BaudRate::B9600).unwrap();

    let err = PosixSerialPort::open(&slave, BaudRate::B9600).unwrap_err();
    assert!(matches!(err, SerialError::Open { .. }));
}

#[test]
fn test_failed_configuration_releases_descriptor() {
    // The node opens, then configuring it as a terminal fails.
    let file = tempfile::NamedTempFile::new().unwrap();
    let path = file.path().canonicalize().unwrap();
    let held_by_fixture = descriptors_referring_to(&path);

    for _ in 0..50 {
        assert!(PosixSerialPort::open(&path, BaudRate::B9600).is_err());
    }

    assert_eq!(descriptors_referring_to(&path), held_by_fixture);
}

#[test]
fn test_open_nonexistent_path_fails() {
    let result = PosixSerialPort::open("/dev/does-not-exist", BaudRate::B9600);
    assert!(matches!(result, Err(SerialError::Open { .. })));
}

#[test]
fn test_open_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let result = PosixSerialPort::open(dir.path(), BaudRate::B9600);
    assert!(matches!(result, Err(SerialError::Open { .. })));
}

#[test]
fn test_open_regular_file_fails() {
    // A plain file opens fine but is not a terminal, so claiming exclusive
    // access fails.
    let file = tempfile::NamedTempFile::new().unwrap();
    let err = PosixSerialPort::open(file.path(), BaudRate::B9600).unwrap_err();
    match err {
        SerialError::Open { path, .. } => assert_eq!(path, file.path()),
        other => panic!("expected open error, got {other:?}"),
    }
}

#[test]
fn test_trait_open_matches_inherent_open() {
    fn open_generic<T: SerialTransport>(path: &Path) -> Result<T, T::Error> {
        T::open(path, BaudRate::B57600)
    }

    let (mut master, slave) = open_pty();
    let mut port: PosixSerialPort = open_generic(Path::new(&slave)).unwrap();
    port.write_byte(0x7E).unwrap();
    let mut byte = [0u8; 1];
    master.read_exact(&mut byte).unwrap();
    assert_eq!(byte[0], 0x7E);
}

#[test]
fn test_delay_ms_waits_at_least_requested() {
    let (_master, slave) = open_pty();
    let port = PosixSerialPort::open(&slave, BaudRate::B9600).unwrap();

    let start = Instant::now();
    port.delay_ms(25);
    assert!(start.elapsed() >= Duration::from_millis(25));

    let start = Instant::now();
    port.delay_us(2_000);
    assert!(start.elapsed() >= Duration::from_micros(2_000));
}

#[test]
#[ignore = "requires a serial adapter with TX wired to RX"]
fn test_hardware_loopback() {
    let path = std::env::var("HELIUM_TEST_PORT").unwrap_or_else(|_| "/dev/ttyUSB0".to_string());
    let mut port = PosixSerialPort::open(&path, BaudRate::B19200).unwrap();

    port.write_byte(0x41).unwrap();
    assert!(port.readable());
    assert_eq!(port.read_byte().unwrap(), 0x41);
    port.close();
}
