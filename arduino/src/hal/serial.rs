//! Serial Output Vocabulary.
//!
//! This module defines the `print`/`println` interface firmware uses to
//! talk over the board's serial peripheral.

use core::fmt;

/// Terminator appended by [`Print::println`].
pub const LINE_TERMINATOR: &str = "\r\n";

/// Layout of one character on the wire.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FrameFormat {
    /// Number of data bits per frame.
    pub data_bits: DataBits,
    /// Parity checking mode.
    pub parity: Parity,
    /// Number of stop bits.
    pub stop_bits: StopBits,
}

impl fmt::Display for FrameFormat {
    /// Arduino notation, e.g. `8N1`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = match self.data_bits {
            DataBits::Five => 5,
            DataBits::Six => 6,
            DataBits::Seven => 7,
            DataBits::Eight => 8,
        };
        let parity = match self.parity {
            Parity::None => 'N',
            Parity::Odd => 'O',
            Parity::Even => 'E',
        };
        let stop = match self.stop_bits {
            StopBits::One => 1,
            StopBits::Two => 2,
        };
        write!(f, "{}{}{}", data, parity, stop)
    }
}

/// Number of data bits per frame.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DataBits {
    Five,
    Six,
    Seven,
    Eight,
}

/// Parity mode.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Parity {
    None,
    Odd,
    Even,
}

/// Number of stop bits.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StopBits {
    One,
    Two,
}

macro_rules! frame_formats {
    ($($name:ident => $bits:ident $parity:ident $stop:ident;)*) => {
        $(
            #[doc = concat!("`Serial.begin(baud, ", stringify!($name), ")`")]
            pub const $name: FrameFormat = FrameFormat {
                data_bits: DataBits::$bits,
                parity: Parity::$parity,
                stop_bits: StopBits::$stop,
            };
        )*

        /// Every frame format the board accepts, with its Arduino name.
        pub const FRAME_FORMATS: &[(&str, FrameFormat)] = &[$((stringify!($name), $name)),*];
    };
}

/// The board's `SERIAL_xyz` frame format names.
pub mod formats {
    use super::{DataBits, FrameFormat, Parity, StopBits};

    frame_formats! {
        SERIAL_5N1 => Five None One;
        SERIAL_6N1 => Six None One;
        SERIAL_7N1 => Seven None One;
        SERIAL_8N1 => Eight None One;
        SERIAL_5N2 => Five None Two;
        SERIAL_6N2 => Six None Two;
        SERIAL_7N2 => Seven None Two;
        SERIAL_8N2 => Eight None Two;
        SERIAL_5E1 => Five Even One;
        SERIAL_6E1 => Six Even One;
        SERIAL_7E1 => Seven Even One;
        SERIAL_8E1 => Eight Even One;
        SERIAL_5E2 => Five Even Two;
        SERIAL_6E2 => Six Even Two;
        SERIAL_7E2 => Seven Even Two;
        SERIAL_8E2 => Eight Even Two;
        SERIAL_5O1 => Five Odd One;
        SERIAL_6O1 => Six Odd One;
        SERIAL_7O1 => Seven Odd One;
        SERIAL_8O1 => Eight Odd One;
        SERIAL_5O2 => Five Odd Two;
        SERIAL_6O2 => Six Odd Two;
        SERIAL_7O2 => Seven Odd Two;
        SERIAL_8O2 => Eight Odd Two;
    }
}

pub use formats::*;

/// What `Serial.begin` was asked to open.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SerialConfig {
    /// Baud rate in bits per second.
    pub baud_rate: u32,
    /// Character framing.
    pub format: FrameFormat,
}

impl SerialConfig {
    pub const fn new(baud_rate: u32, format: FrameFormat) -> Self {
        Self { baud_rate, format }
    }

    /// `Serial.begin(baud)`: the board defaults to 8N1.
    pub const fn new_8n1(baud_rate: u32) -> Self {
        Self::new(baud_rate, SERIAL_8N1)
    }
}

impl Default for SerialConfig {
    /// Default configuration: 115200 baud, 8N1.
    fn default() -> Self {
        Self::new_8n1(115200)
    }
}

impl fmt::Display for SerialConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.baud_rate, self.format)
    }
}

/// Arguments accepted by `begin`.
///
/// Stands in for the board's two overloads: `begin(baud)` and
/// `begin(baud, SERIAL_xyz)`.
pub trait BeginArgs {
    fn config(self) -> SerialConfig;
}

impl BeginArgs for u32 {
    fn config(self) -> SerialConfig {
        SerialConfig::new_8n1(self)
    }
}

impl BeginArgs for (u32, FrameFormat) {
    fn config(self) -> SerialConfig {
        SerialConfig::new(self.0, self.1)
    }
}

impl BeginArgs for SerialConfig {
    fn config(self) -> SerialConfig {
        self
    }
}

/// Text output device trait.
///
/// Methods take `&self`: firmware addresses the peripheral through a
/// shared global, never through a unique handle.
pub trait Print {
    /// Emit `text` as-is.
    fn print<S: AsRef<str>>(&self, text: S);

    /// Emit `text` followed by [`LINE_TERMINATOR`].
    fn println<S: AsRef<str>>(&self, text: S) {
        self.print(text);
        self.print(LINE_TERMINATOR);
    }

    /// Wait until all emitted text has left the device.
    fn flush(&self) {}
}

/// Wrapper type to implement core::fmt::Write for Print devices.
/// This allows using write!/writeln! macros.
pub struct SerialWriter<'a, P: Print + ?Sized>(pub &'a P);

impl<P> fmt::Write for SerialWriter<'_, P>
where
    P: Print + ?Sized,
{
    fn write_str(&mut self, s: &str) -> fmt::Result {
        // writeln! ends lines with '\n'; the device expects its own terminator
        let mut lines = s.split('\n');
        if let Some(first) = lines.next() {
            if !first.is_empty() {
                self.0.print(first);
            }
        }
        for line in lines {
            self.0.print(LINE_TERMINATOR);
            if !line.is_empty() {
                self.0.print(line);
            }
        }
        Ok(())
    }
}
