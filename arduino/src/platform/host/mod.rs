//! Host Platform
//!
//! Standard library stand-ins for the Arduino core, used when firmware
//! logic is built for a development machine.
//!
//! Nothing here touches real hardware: serial output is routed to the
//! `log` facade and delays are no-ops unless the `realtime-delay`
//! feature asks for a real sleep.

mod serial;
mod string;
mod timer;

pub use serial::{HardwareSerial, Serial};
pub use string::String;
pub use timer::{HostDelay, delay};
