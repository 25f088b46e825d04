//! Error types for settings and the chip transport.

use std::time::Duration;

use thiserror::Error;

/// Errors from loading settings or talking to the chip.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading a file or the device failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// The settings file is not valid JSON.
    #[error("failed to parse settings JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// The serial port could not be opened or configured.
    #[error("serial port error: {0}")]
    Serial(#[from] serialport::Error),
    /// The device never answered the wake handshake.
    #[error("device did not answer the wake handshake after {attempts} attempts")]
    DeviceUnresponsive {
        /// Zero bytes sent without an echo.
        attempts: u32,
    },
    /// A byte was sent but its echo did not arrive in time.
    #[error("no echo for byte {byte} (index {index}) within {timeout:?}")]
    EchoTimeout {
        /// The byte that was sent.
        byte: u8,
        /// Its offset in the data being spoken.
        index: usize,
        /// How long we waited.
        timeout: Duration,
    },
    /// The device closed the connection.
    #[error("device disconnected")]
    Disconnected,
}

/// Result type for settings and transport operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn echo_timeout_display() {
        let err = Error::EchoTimeout {
            byte: 27,
            index: 3,
            timeout: Duration::from_millis(20),
        };
        assert_eq!(err.to_string(), "no echo for byte 27 (index 3) within 20ms");
    }

    #[test]
    fn serial_error_from_conversion() {
        let err: Error = serialport::Error::new(serialport::ErrorKind::NoDevice, "gone").into();
        assert!(matches!(err, Error::Serial(_)));
        assert_eq!(err.to_string(), "serial port error: gone");
    }

    #[test]
    fn io_error_from_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
