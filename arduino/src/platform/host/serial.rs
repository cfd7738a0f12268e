//! Host serial device.
//!
//! The board exposes one hardware UART that firmware addresses as
//! `Serial`. On the host it is a zero-sized stand-in: every emission is
//! handed to the `log` facade under the `arduino::serial` target and no
//! bytes go anywhere.

use crate::hal::serial::{BeginArgs, LINE_TERMINATOR, Print};
use crate::platform::PLATFORM_NAME;
use log::{debug, info};

const LOG_TARGET: &str = "arduino::serial";

/// Stand-in for the board's hardware serial peripheral.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct HardwareSerial;

impl HardwareSerial {
    /// Create a serial stand-in.
    ///
    /// Firmware should use the global [`Serial`]; this exists so the
    /// static can be built at compile time.
    pub const fn new() -> Self {
        Self
    }

    /// Open the port: `begin(9600)` or `begin((9600, SERIAL_7E2))`.
    pub fn begin<A: BeginArgs>(&self, args: A) {
        info!(target: LOG_TARGET, "serial begin {} ({})", args.config(), PLATFORM_NAME);
    }
}

/// Text worth a log record, if any.
///
/// A bare terminator only ends the previous record, so it yields nothing.
fn record_text(text: &str) -> Option<&str> {
    (text != LINE_TERMINATOR && text != "\n").then_some(text)
}

impl Print for HardwareSerial {
    fn print<S: AsRef<str>>(&self, text: S) {
        if let Some(text) = record_text(text.as_ref()) {
            debug!(target: LOG_TARGET, "{}", text);
        }
    }

    fn println<S: AsRef<str>>(&self, text: S) {
        // one record per line; the record boundary stands in for "\r\n"
        debug!(target: LOG_TARGET, "{}", text.as_ref());
    }
}

/// The board's serial port.
///
/// Exactly one exists for the life of the process. It holds no state, so
/// shared access needs no lock.
#[allow(non_upper_case_globals)]
pub static Serial: HardwareSerial = HardwareSerial::new();
