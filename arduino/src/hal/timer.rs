//! Timing Vocabulary.
//!
//! This module defines the blocking millisecond delay firmware calls
//! between steps of its main loop.

/// Blocking delay trait.
pub trait Delay {
    /// Block for `ms` milliseconds.
    ///
    /// Implementations may wait less, or not at all, where no real clock
    /// drives the firmware. They must not touch any other device state.
    fn delay(&self, ms: u32);

    /// Block for `seconds` seconds.
    fn delay_secs(&self, seconds: u32) {
        self.delay(seconds.saturating_mul(1000));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    struct Counting {
        total_ms: Cell<u64>,
    }

    impl Delay for Counting {
        fn delay(&self, ms: u32) {
            self.total_ms.set(self.total_ms.get() + u64::from(ms));
        }
    }

    #[test]
    fn test_delay_secs_forwards_in_milliseconds() {
        let timer = Counting { total_ms: Cell::new(0) };
        timer.delay_secs(2);
        timer.delay(5);
        assert_eq!(timer.total_ms.get(), 2005);
    }

    #[test]
    fn test_delay_secs_saturates() {
        let timer = Counting { total_ms: Cell::new(0) };
        timer.delay_secs(u32::MAX);
        assert_eq!(timer.total_ms.get(), u64::from(u32::MAX));
    }
}
