//! Compiled regex patterns for column classification.
//!
//! The phone pattern is the classic North-American-numbering-plan shape;
//! it checks syntax only and makes no claim the number is assignable.

use regex::Regex;
use std::sync::LazyLock;

/// Pattern for North-American phone numbers: optional leading `+1`, optional
/// parenthesized or bare 3-digit area code, 3-digit exchange, 4-digit line
/// number, optional extension suffix. Groups 1-4 carry the number parts;
/// group 5 captures an extension that reassembly deliberately drops.
pub static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:(?:\+?1\s*(?:[.-]\s*)?)?(?:\(\s*([2-9]1[02-9]|[2-9][02-8]1|[2-9][02-8][02-9])\s*\)|([2-9]1[02-9]|[2-9][02-8]1|[2-9][02-8][02-9]))\s*(?:[.-]\s*)?)?([2-9]1[02-9]|[2-9][02-9]1|[2-9][02-9]{2})\s*(?:[.-]\s*)?([0-9]{4})(?:\s*(?:#|x\.?|ext\.?|extension)\s*(\d+))?$",
    )
    .expect("Invalid phone pattern")
});

/// Pattern for values that open with a digit run followed by a letter run,
/// or the reverse. Anchored at the start only; used by detection.
pub static NUM_ALPHA_PREFIX_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[0-9]+[A-Za-z]+|[A-Za-z]+[0-9]+)").expect("Invalid num-alpha prefix pattern")
});

/// Pattern for one maximal run of digits/periods or letters. Unanchored;
/// scanned globally when splitting a value into its ordered runs.
pub static NUM_ALPHA_TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9.]+|[A-Za-z]+").expect("Invalid num-alpha token pattern"));

/// Characters that must be backslash-escaped when spliced into an
/// alternation. Kept explicit and data-driven rather than tied to one
/// engine's metacharacter list.
const REGEX_METACHARACTERS: &[char] = &['^', '$', '\\', '|', '{', '[', '(', '*', '+', '?'];

/// Build an alternation pattern matching any one of the given delimiter
/// characters, escaping regex metacharacters.
pub fn alternation_of(delimiters: &[char]) -> String {
    let mut pattern = String::with_capacity(delimiters.len() * 3);
    for (idx, &ch) in delimiters.iter().enumerate() {
        if idx > 0 {
            pattern.push('|');
        }
        if REGEX_METACHARACTERS.contains(&ch) {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_pattern() {
        assert!(PHONE_PATTERN.is_match("(212) 555-1234"));
        assert!(PHONE_PATTERN.is_match("212-555-1234"));
        assert!(PHONE_PATTERN.is_match("+1 212.555.1234"));
        assert!(PHONE_PATTERN.is_match("555-1234"));
        assert!(PHONE_PATTERN.is_match("555-1234 ext. 89"));
        assert!(!PHONE_PATTERN.is_match("not a phone"));
        assert!(!PHONE_PATTERN.is_match("123-4567-890"));
    }

    #[test]
    fn test_phone_capture_groups() {
        let caps = PHONE_PATTERN.captures("(212) 555-1234").unwrap();
        assert_eq!(caps.get(1).map(|m| m.as_str()), Some("212"));
        assert_eq!(caps.get(3).map(|m| m.as_str()), Some("555"));
        assert_eq!(caps.get(4).map(|m| m.as_str()), Some("1234"));

        // Bare area code lands in group 2 instead of group 1
        let caps = PHONE_PATTERN.captures("212 555 1234").unwrap();
        assert_eq!(caps.get(1), None);
        assert_eq!(caps.get(2).map(|m| m.as_str()), Some("212"));
    }

    #[test]
    fn test_num_alpha_prefix_pattern() {
        assert!(NUM_ALPHA_PREFIX_PATTERN.is_match("12ab"));
        assert!(NUM_ALPHA_PREFIX_PATTERN.is_match("ab12"));
        assert!(NUM_ALPHA_PREFIX_PATTERN.is_match("12ab34cd"));
        assert!(!NUM_ALPHA_PREFIX_PATTERN.is_match("1234"));
        assert!(!NUM_ALPHA_PREFIX_PATTERN.is_match("abcd"));
        assert!(!NUM_ALPHA_PREFIX_PATTERN.is_match("-12ab"));
    }

    #[test]
    fn test_num_alpha_token_pattern() {
        let tokens: Vec<&str> = NUM_ALPHA_TOKEN_PATTERN
            .find_iter("12ab34.5cd")
            .map(|m| m.as_str())
            .collect();
        assert_eq!(tokens, vec!["12", "ab", "34.5", "cd"]);
    }

    #[test]
    fn test_alternation_escaping() {
        assert_eq!(alternation_of(&[':', ';']), ":|;");
        assert_eq!(alternation_of(&['|', '+']), r"\||\+");
        assert_eq!(alternation_of(&['$']), r"\$");

        let pattern = Regex::new(&alternation_of(&['|', '*', ':'])).unwrap();
        let parts: Vec<&str> = pattern.split("a|b*c:d").collect();
        assert_eq!(parts, vec!["a", "b", "c", "d"]);
    }
}
