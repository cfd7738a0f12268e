//! Formatted output to the board's serial port.

#[cfg(feature = "host")]
use crate::hal::serial::Print;

/// Format `args` and emit them as one line on `port`.
#[cfg(feature = "host")]
pub fn println_fmt<P: Print + ?Sized>(port: &P, args: core::fmt::Arguments<'_>) {
    port.println(std::fmt::format(args));
}

// ============================================================================
// Print Macros
// ============================================================================

/// Print to `Serial` without newline
#[macro_export]
macro_rules! serial_print {
    ($($arg:tt)*) => {{
        use core::fmt::Write as _;
        let _ = write!($crate::hal::serial::SerialWriter(&$crate::platform::host::Serial), $($arg)*);
    }};
}

/// Print to `Serial` as one line
#[macro_export]
macro_rules! serial_println {
    () => {{
        use $crate::hal::serial::Print as _;
        $crate::platform::host::Serial.println("");
    }};
    ($($arg:tt)*) => {{
        $crate::console::println_fmt(&$crate::platform::host::Serial, format_args!($($arg)*));
    }};
}

#[cfg(all(test, feature = "host"))]
mod tests {
    use super::*;
    use core::cell::RefCell;

    /// Records each `print` and `println` call separately.
    #[derive(Default)]
    struct CallLog {
        calls: RefCell<Vec<(&'static str, String)>>,
    }

    impl Print for CallLog {
        fn print<S: AsRef<str>>(&self, text: S) {
            self.calls.borrow_mut().push(("print", text.as_ref().into()));
        }

        fn println<S: AsRef<str>>(&self, text: S) {
            self.calls.borrow_mut().push(("println", text.as_ref().into()));
        }
    }

    #[test]
    fn test_println_fmt_emits_one_line() {
        let port = CallLog::default();
        println_fmt(&port, format_args!("{:.1} L/min", 12.5));
        assert_eq!(*port.calls.borrow(), [("println", String::from("12.5 L/min"))]);
    }

    #[test_log::test]
    fn test_serial_macros_expand() {
        let flow = 12.5;
        serial_print!("flow=");
        serial_println!("{:.1} L/min", flow);
        serial_println!();
    }
}
