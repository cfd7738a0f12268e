//! Hardware Abstraction Layer (HAL) - The Arduino Vocabulary
//!
//! This module spells the Arduino API as generic traits. Firmware code
//! is written against these names; the host platform implements them
//! with standard library types, and board support for the real target
//! implements them natively.
//!
//! # Design Principles
//!
//! - **Name-only substitution**: Traits forward to host operations and
//!   add no behavior of their own
//! - **Same call sites**: Method names and argument types match what
//!   firmware code writes on the target
//! - **No platform leakage**: Traits must not reference host-only types
//!
//! # Available Interfaces
//!
//! - [`string`]: `substring`, `index_of`, `is_empty`
//! - [`serial`]: `print`, `println`
//! - [`timer`]: `delay`

pub mod serial;
pub mod string;
pub mod timer;
