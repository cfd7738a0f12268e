//! Arduino Compatibility Shim
//!
//! Lets firmware logic written against the Arduino string and serial API
//! compile and run unchanged on a development machine, so it can be unit
//! tested off the target.
//!
//! # Module Organization
//!
//! - [`hal`]: The Arduino vocabulary as platform-independent traits
//! - [`platform`]: Host implementations, selected by the `host` feature
//! - [`prelude`]: Everything firmware code names, in one glob import
//!
//! Without the `host` feature the crate is `no_std`, compiles no
//! implementation and only exports the [`hal`] contract. Board support
//! for the real target supplies `String`, `Serial` and `delay`.
//!
//! # Usage Example
//!
//! ```
//! # #[cfg(feature = "host")] {
//! use arduino::prelude::*;
//!
//! let line: String = "flow=12".into();
//! let sep = line.index_of('=');
//! if sep != NPOS && !line.substring(sep + 1).is_empty() {
//!     Serial.println(line.substring((0, sep)));
//! }
//! delay(100);
//! # }
//! ```

#![cfg_attr(not(any(feature = "host", test)), no_std)]

pub mod console;
pub mod hal;
pub mod platform;

// Re-export commonly used types
pub use hal::serial::formats::*;
pub use hal::serial::{BeginArgs, FrameFormat, LINE_TERMINATOR, Print, SerialConfig, SerialWriter};
pub use hal::string::{NPOS, Needle, StringError, SubstringArgs, WString};
pub use hal::timer::Delay;

#[cfg(feature = "host")]
pub use platform::host::{HardwareSerial, HostDelay, Serial, String, delay};

/// Names firmware code expects to be in scope, the way `Arduino.h`
/// provides them.
pub mod prelude {
    pub use crate::hal::serial::Print;
    pub use crate::hal::serial::formats::*;
    pub use crate::hal::string::{NPOS, WString};
    pub use crate::hal::timer::Delay;

    #[cfg(feature = "host")]
    pub use crate::platform::host::{HardwareSerial, Serial, String, delay};

    #[cfg(feature = "host")]
    pub use crate::{serial_print, serial_println};
}
