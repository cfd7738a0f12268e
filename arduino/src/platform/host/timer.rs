//! Host delay.

use crate::hal::timer::Delay;
use log::trace;

/// Millisecond delay backed by the host.
///
/// A no-op by default so tests drive time themselves. With the
/// `realtime-delay` feature the calling thread really sleeps.
#[derive(Debug, Default, Copy, Clone)]
pub struct HostDelay;

impl Delay for HostDelay {
    fn delay(&self, ms: u32) {
        trace!(target: "arduino::timer", "delay {} ms", ms);

        #[cfg(feature = "realtime-delay")]
        std::thread::sleep(std::time::Duration::from_millis(u64::from(ms)));
    }
}

/// Block for `ms` milliseconds, as `delay()` does on the board.
pub fn delay(ms: u32) {
    HostDelay.delay(ms);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn test_delay_leaves_strings_untouched() {
        let s = crate::platform::host::String::from("HelloWorld");
        let copy = s.clone();
        delay(0);
        delay(1);
        HostDelay.delay_secs(0);
        assert_eq!(s, copy);
    }

    #[cfg(not(feature = "realtime-delay"))]
    #[test]
    fn test_delay_does_not_sleep() {
        let start = std::time::Instant::now();
        delay(60_000);
        assert!(start.elapsed() < std::time::Duration::from_secs(30));
    }

    #[cfg(feature = "realtime-delay")]
    #[test]
    fn test_delay_sleeps() {
        let start = std::time::Instant::now();
        delay(20);
        assert!(start.elapsed() >= std::time::Duration::from_millis(20));
    }
}
