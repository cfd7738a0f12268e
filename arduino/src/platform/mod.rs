//! Platform Selection
//!
//! Picks the implementation behind the [`hal`](crate::hal) vocabulary at
//! compile time. The `host` feature is the single switch:
//!
//! - **on**: the `host` module backs every Arduino name with a standard library
//!   equivalent, so firmware logic builds and runs on a workstation
//! - **off**: nothing is compiled here; the target's board support
//!   already provides `String`, `Serial` and `delay` natively
//!
//! # Usage
//!
//! ```rust
//! # #[cfg(feature = "host")] {
//! use arduino::platform::host::{Serial, delay};
//! use arduino::{Print, SERIAL_7E2};
//!
//! Serial.begin(9600);
//! Serial.begin((9600, SERIAL_7E2));
//! Serial.println("ready");
//! delay(250);
//! # }
//! ```

// Platform selection based on Cargo features
cfg_if::cfg_if! {
    if #[cfg(feature = "host")] {
        pub mod host;

        /// Name of the platform the shim was built for.
        pub const PLATFORM_NAME: &str = "host";
    } else {
        /// Name of the platform the shim was built for.
        pub const PLATFORM_NAME: &str = "native";
    }
}
