//! Opening the serial port named by the configuration

use anyhow::{Context, Result};
use helium_config::SerialConfig;
use helium_hal::PosixSerialPort;
use tracing::info;

/// Open the port described by `config`
///
/// # Errors
/// Fails if `serial.baud` is not a supported rate or the device cannot be
/// opened and configured.
pub fn open_configured(config: &SerialConfig) -> Result<PosixSerialPort> {
    let baud = config.baud_rate()?;
    let port = PosixSerialPort::open(&config.port, baud)
        .with_context(|| format!("Serial port {} at {} baud", config.port.display(), baud))?;

    info!(
        port = %config.port.display(),
        baud = %baud,
        effective = %baud.effective(),
        "Serial transport ready"
    );
    Ok(port)
}
