//! Character-aware string helpers
//!
//! Provider text is frequently Korean, so every length bound in the service
//! is counted in characters rather than bytes.

/// Number of characters in `s`
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Prefix of `s` holding at most `max_chars` characters
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Round to a fixed number of decimal places
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate_chars("abcdef", 3), "abc");
        assert_eq!(truncate_chars("abc", 10), "abc");
        assert_eq!(truncate_chars("", 5), "");
    }

    #[test]
    fn test_truncate_multibyte() {
        let text = "교토의 전통 건축";
        assert_eq!(truncate_chars(text, 3), "교토의");
        assert_eq!(char_len(truncate_chars(text, 5)), 5);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(22.34, 1), 22.3);
        assert_eq!(round_to(22.36, 1), 22.4);
        assert_eq!(round_to(1013.6, 0), 1014.0);
        assert_eq!(round_to(-3.25, 0), -3.0);
    }

    proptest! {
        #[test]
        fn prop_truncate_never_exceeds_bound(s in "\\PC{0,300}", max in 0usize..200) {
            let out = truncate_chars(&s, max);
            prop_assert!(char_len(out) <= max);
            prop_assert!(s.starts_with(out));
        }
    }
}
