//! Host string type.
//!
//! `String` is the standard library string under its Arduino name. The
//! Arduino method names come from [`WString`], which forwards each one to
//! the matching `str` operation.

use crate::hal::string::WString;

/// The Arduino `String`, as the host's own string type.
pub type String = std::string::String;

impl WString for String {
    #[inline]
    fn as_str(&self) -> &str {
        String::as_str(self)
    }

    #[inline]
    fn from_slice(slice: &str) -> Self {
        slice.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hal::string::{NPOS, StringError};

    #[test]
    fn test_substring_from_offset() {
        let s: String = "HelloWorld".into();
        assert_eq!(s.substring(5), "World");
        assert_eq!(s.substring(0), s);
        assert_eq!(s.substring(10), "");
    }

    #[test]
    fn test_substring_matches_host_slicing() {
        let s: String = "firmware-under-test".into();
        for start in 0..=s.len() {
            assert_eq!(s.substring(start), &s[start..]);
            for count in 0..=s.len() + 2 {
                let end = (start + count).min(s.len());
                assert_eq!(s.substring((start, count)), &s[start..end]);
            }
        }
    }

    #[test]
    #[should_panic]
    fn test_substring_past_end_panics() {
        let s: String = "abc".into();
        let _ = s.substring(4);
    }

    #[test]
    #[should_panic]
    fn test_substring_inside_character_panics() {
        let s: String = "héllo".into();
        let _ = s.substring(2);
    }

    #[test]
    fn test_try_substring() {
        let s: String = "abc".into();
        assert_eq!(s.try_substring((1, 1)), Ok(String::from("b")));
        assert_eq!(
            s.try_substring(4),
            Err(StringError::StartOutOfRange { start: 4, len: 3 })
        );
    }

    #[test]
    fn test_substring_clamped() {
        let s: String = "héllo".into();
        assert_eq!(s.substring_clamped(99), "");
        assert_eq!(s.substring_clamped((1, 99)), "éllo");
        assert_eq!(s.substring_clamped(2), "llo");
        assert_eq!(s.substring_clamped((0, 2)), "h");
    }

    #[test]
    fn test_index_of() {
        let s: String = "HelloWorld".into();
        assert_eq!(s.index_of("World"), 5);
        assert_eq!(s.index_of("xyz"), NPOS);
        assert_eq!(s.index_of('o'), 4);
        assert_eq!(s.index_of(&String::from("lo")), 3);
    }

    #[test]
    fn test_index_of_reports_first_occurrence() {
        let s: String = "abcabc".into();
        assert_eq!(s.index_of("bc"), 1);
        assert_eq!(s.index_of_from("bc", 2), 4);
        assert_eq!(s.index_of_from("bc", 5), NPOS);
        assert_eq!(s.index_of_from('a', 6), NPOS);
        assert_eq!(s.index_of_from('a', 42), NPOS);
    }

    #[test]
    fn test_is_empty_through_trait() {
        assert!(WString::is_empty(&String::new()));
        assert!(!WString::is_empty(&String::from("a")));
        assert!(!WString::is_empty(&String::from(" ")));
    }

    #[test]
    fn test_native_concatenation_and_comparison() {
        let mut s: String = "Hello".into();
        s += "World";
        assert_eq!(s.clone() + "!", "HelloWorld!");
        assert!(s.substring((0, 5)) < s.substring(5));
        assert_eq!(s.substring(5), String::from("World"));
    }
}
