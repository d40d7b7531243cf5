//! String helpers
//!
//! Checks, transformations and validators for string slices.

use crate::error::HelperResult;
use lazy_static::lazy_static;
use regex::Regex;

/// A dash character
pub const DASH: &str = "-";
/// An empty string
pub const EMPTY: &str = "";
/// A newline character
pub const NEWLINE: &str = "\n";
/// A single space
pub const SPACE: &str = " ";

lazy_static! {
    static ref DECIMAL_DIGITS: Regex = Regex::new(r"^\d+$").expect("valid digits pattern");
    static ref WHITESPACE: Regex = Regex::new(r"\s+").expect("valid whitespace pattern");
    static ref EMAIL: Regex =
        Regex::new(r"^[A-Z0-9a-z._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,64}$").expect("valid email pattern");
    static ref PHONE: Regex = Regex::new(r"^0[0-9]*$").expect("valid phone pattern");
}

/// Characters accepted as the "special" part of a password
const PASSWORD_SPECIALS: &str = "#?!@$ %^&*-";

/// Minimum password length in characters
const PASSWORD_MIN_LEN: usize = 8;

/// Helper methods on string slices
pub trait StrExt {
    /// `true` if empty or only whitespace and newlines
    fn is_blank(&self) -> bool;

    /// `true` if non-empty and made only of decimal digits
    fn is_numeric(&self) -> bool;

    /// `true` if `pattern` matches anywhere in the string
    fn matches_pattern(&self, pattern: &str) -> HelperResult<bool>;

    /// Copy with every whitespace run removed
    fn removed_whitespace(&self) -> String;

    /// Copy with the order of space-separated words reversed
    fn reversed_words(&self) -> String;

    /// Copy without leading and trailing whitespace
    fn trimmed(&self) -> String;

    fn is_valid_email(&self) -> bool;

    /// At least eight characters with an uppercase letter, a lowercase
    /// letter, a digit and one of `#?!@$ %^&*-`
    fn is_valid_password(&self) -> bool;

    /// A `0` followed by digits only
    fn is_valid_phone(&self) -> bool;
}

impl StrExt for str {
    fn is_blank(&self) -> bool {
        self.trim().is_empty()
    }

    fn is_numeric(&self) -> bool {
        DECIMAL_DIGITS.is_match(self)
    }

    fn matches_pattern(&self, pattern: &str) -> HelperResult<bool> {
        let regex = Regex::new(pattern)?;
        Ok(regex.is_match(self))
    }

    fn removed_whitespace(&self) -> String {
        WHITESPACE.replace_all(self, "").into_owned()
    }

    fn reversed_words(&self) -> String {
        let words: Vec<&str> = self.split(' ').filter(|w| !w.is_empty()).rev().collect();
        words.join(" ")
    }

    fn trimmed(&self) -> String {
        self.trim().to_string()
    }

    fn is_valid_email(&self) -> bool {
        EMAIL.is_match(self)
    }

    fn is_valid_password(&self) -> bool {
        // No lookaround in the regex crate, so each rule is checked directly
        if self.contains('\n') || self.chars().count() < PASSWORD_MIN_LEN {
            return false;
        }

        self.chars().any(|c| c.is_ascii_uppercase())
            && self.chars().any(|c| c.is_ascii_lowercase())
            && self.chars().any(|c| c.is_ascii_digit())
            && self.chars().any(|c| PASSWORD_SPECIALS.contains(c))
    }

    fn is_valid_phone(&self) -> bool {
        PHONE.is_match(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_blank() {
        assert!("".is_blank());
        assert!(" ".is_blank());
        assert!("\n\n".is_blank());
        assert!(EMPTY.is_blank());
        assert!(NEWLINE.is_blank());
        assert!(SPACE.is_blank());

        assert!(!"  Hello  ".is_blank());
        assert!(!"\n\nworld\n\n".is_blank());
        assert!(!DASH.is_blank());
    }

    #[test]
    fn test_is_numeric() {
        assert!("12345".is_numeric());
        assert!(!"12345abc".is_numeric());
        assert!(!"".is_numeric());
        assert!(!"12 34".is_numeric());
    }

    #[test]
    fn test_matches_pattern() {
        assert!("abc123".matches_pattern(r"\w+\d+").unwrap());
        assert!(!"123abc".matches_pattern(r"^\d+$").unwrap());
        assert!(!"".matches_pattern(".+").unwrap());
        assert!("Hello, world!".matches_pattern("world").unwrap());
    }

    #[test]
    fn test_matches_pattern_invalid_regex() {
        assert!("abc".matches_pattern("(unclosed").is_err());
    }

    #[test]
    fn test_removed_whitespace() {
        assert_eq!(" Hello \n World ".removed_whitespace(), "HelloWorld");
        assert_eq!("".removed_whitespace(), "");
    }

    #[test]
    fn test_reversed_words() {
        assert_eq!(
            "Rust Extensions are great".reversed_words(),
            "great are Extensions Rust"
        );
        assert_eq!("  spaced   out  ".reversed_words(), "out spaced");
        assert_eq!("".reversed_words(), "");
    }

    #[test]
    fn test_trimmed() {
        assert_eq!("  Hello  ".trimmed(), "Hello");
        assert_eq!("\n\nworld\n\n".trimmed(), "world");
        assert_eq!("".trimmed(), "");
    }

    #[test]
    fn test_is_valid_email() {
        assert!("test@example.com".is_valid_email());
        assert!("user.name+tag+sorting@example.com".is_valid_email());

        assert!(!"plainaddress".is_valid_email());
        assert!(!"missingdomain@.com".is_valid_email());
        assert!(!"@missingusername.com".is_valid_email());
    }

    #[test]
    fn test_is_valid_password() {
        assert!("P@ssw0rd!".is_valid_password());
        assert!("Str0ng#Pass".is_valid_password());

        assert!(!"weakpassword".is_valid_password());
        assert!(!"SHORT1!".is_valid_password());
        assert!(!"NoNumber!".is_valid_password());
        assert!(!"NoSpecialChar1".is_valid_password());
    }

    #[test]
    fn test_is_valid_phone() {
        assert!("0123456789".is_valid_phone());
        assert!("0987654321".is_valid_phone());

        assert!(!"123456789".is_valid_phone());
        assert!(!"01234abc".is_valid_phone());
        assert!(!"".is_valid_phone());
    }
}
