//! Text primitives
//!
//! Case mapping and character classes follow ASCII rules, so results never
//! depend on locale. Every function returns a fresh `String` and leaves its
//! input untouched.

/// The C `isspace` class: space, `\t`, `\n`, `\r`, `\x0b` and `\x0c`.
///
/// Unlike `char::is_ascii_whitespace`, this includes vertical tab.
fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
}

/// Uppercase ASCII letters; everything else passes through.
pub fn to_upper(s: &str) -> String {
    s.to_ascii_uppercase()
}

/// Lowercase ASCII letters; everything else passes through.
pub fn to_lower(s: &str) -> String {
    s.to_ascii_lowercase()
}

/// Strip leading and trailing whitespace, keeping interior whitespace.
pub fn trim(s: &str) -> String {
    s.trim_matches(is_space).to_string()
}

/// Split `s` at every `delimiter`, keeping empty pieces.
///
/// The result always has one more element than there are delimiters in `s`,
/// so `split("", ',')` is `[""]` and joining the pieces with `delimiter`
/// gives back `s`.
pub fn split(s: &str, delimiter: char) -> Vec<String> {
    s.split(delimiter).map(str::to_string).collect()
}

/// Palindrome check that ignores non-alphanumeric characters and ASCII case.
///
/// Two cursors walk inward from both ends, skipping anything that is not
/// alphanumeric; they stop as soon as they meet.
pub fn is_palindrome(s: &str) -> bool {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() < 2 {
        return true;
    }

    let mut left = 0;
    let mut right = chars.len() - 1;
    while left < right {
        while left < right && !chars[left].is_ascii_alphanumeric() {
            left += 1;
        }
        while left < right && !chars[right].is_ascii_alphanumeric() {
            right -= 1;
        }
        if left >= right {
            break;
        }

        if !chars[left].eq_ignore_ascii_case(&chars[right]) {
            return false;
        }

        left += 1;
        right -= 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_to_upper() {
        assert_eq!(to_upper(""), "");
        assert_eq!(to_upper("hello"), "HELLO");
        assert_eq!(to_upper("HeLLo WoRLd"), "HELLO WORLD");
        assert_eq!(to_upper("HELLO"), "HELLO");
        assert_eq!(to_upper("a1-b2_ü"), "A1-B2_ü");
    }

    #[test]
    fn test_to_lower() {
        assert_eq!(to_lower(""), "");
        assert_eq!(to_lower("HELLO"), "hello");
        assert_eq!(to_lower("HeLLo WoRLd"), "hello world");
        assert_eq!(to_lower("hello"), "hello");
    }

    #[test]
    fn test_trim() {
        assert_eq!(trim("  hello  "), "hello");
        assert_eq!(trim("  hello"), "hello");
        assert_eq!(trim("hello  "), "hello");
        assert_eq!(trim("hello"), "hello");
        assert_eq!(trim(""), "");
        assert_eq!(trim("   "), "");
    }

    #[test]
    fn test_trim_c_whitespace_class() {
        assert_eq!(trim("\t\n\r\x0b\x0c mid  dle \x0c\x0b\r\n\t"), "mid  dle");
        // non-breaking space is not in the class
        assert_eq!(trim("\u{a0}x\u{a0}"), "\u{a0}x\u{a0}");
    }

    #[test]
    fn test_split() {
        assert_eq!(split("a,b,c", ','), vec!["a", "b", "c"]);
        assert_eq!(split("hello", ','), vec!["hello"]);
        assert_eq!(split("hello world test", ' '), vec!["hello", "world", "test"]);
    }

    #[test]
    fn test_split_empty_pieces() {
        assert_eq!(split("", ','), vec![""]);
        assert_eq!(split(",", ','), vec!["", ""]);
        assert_eq!(split("a,,b,", ','), vec!["a", "", "b", ""]);
        assert_eq!(split(",a", ','), vec!["", "a"]);
    }

    #[test]
    fn test_is_palindrome() {
        assert!(is_palindrome(""));
        assert!(is_palindrome("a"));
        assert!(is_palindrome("A"));
        assert!(is_palindrome("racecar"));
        assert!(is_palindrome("radar"));
        assert!(is_palindrome("RaceCar"));
        assert!(!is_palindrome("hello"));
        assert!(!is_palindrome("world"));
    }

    #[test]
    fn test_is_palindrome_skips_punctuation() {
        assert!(is_palindrome("A man a plan a canal Panama"));
        assert!(is_palindrome("race car!"));
        assert!(is_palindrome("!!!"));
        assert!(is_palindrome(".a,"));
        assert!(is_palindrome("a!"));
        assert!(!is_palindrome("ab!"));
    }

    proptest! {
        #[test]
        fn test_to_upper_idempotent(s in ".{0,40}") {
            prop_assert_eq!(to_upper(&to_upper(&s)), to_upper(&s));
            prop_assert_eq!(to_lower(&to_lower(&s)), to_lower(&s));
        }

        #[test]
        fn test_trim_idempotent(s in "[ \t\r\n\x0b\x0ca-z]{0,40}") {
            prop_assert_eq!(trim(&trim(&s)), trim(&s));
        }

        #[test]
        fn test_split_join_roundtrip(s in "[a-c,;]{0,40}", delimiter in prop::sample::select(vec![',', ';', 'b'])) {
            let pieces = split(&s, delimiter);
            prop_assert_eq!(pieces.len(), s.matches(delimiter).count() + 1);
            prop_assert_eq!(pieces.join(delimiter.to_string().as_str()), s);
        }

        #[test]
        fn test_reversed_palindrome(s in "[a-zA-Z0-9 ,.]{0,30}") {
            let mirrored: String = s.chars().chain(s.chars().rev()).collect();
            prop_assert!(is_palindrome(&mirrored));
        }
    }
}
