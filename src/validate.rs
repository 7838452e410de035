//! Input validators for common form fields.
//!
//! `\w` and `\d` style classes are spelled out as ASCII ranges: accented
//! letters never count as word characters or digits here.

use std::sync::OnceLock;

use regex::Regex;

const EMAIL_PATTERN: &str =
    r"^[A-Za-z0-9_]+([.-]?[A-Za-z0-9_]+)*@[A-Za-z0-9_]+([.-]?[A-Za-z0-9_]+)*(\.[A-Za-z0-9_]{2,3})+$";
const NAME_PATTERN: &str = r"^[A-Za-zÀ-ÖØ-ÿ' \-]{2,50}$";
const NUMBER_PATTERN: &str = r"^-?[0-9]*\.?[0-9]+$";
const PHONE_PATTERN: &str = r"^\+?([0-9][0-9. \-]+)?(\([0-9. \-]+\))?[0-9. \-]+[0-9]$";

const PASSWORD_MIN_LEN: usize = 8;

fn compiled(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("validator pattern must compile"))
}

/// `local@domain.tld` with a 2-3 character final label.
///
/// Local part and labels may contain `.` or `-` between word characters;
/// `+` tags are rejected.
pub fn validate_email(email: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    compiled(&RE, EMAIL_PATTERN).is_match(email)
}

/// 2 to 50 Latin letters (accents included), spaces, hyphens or apostrophes.
pub fn validate_name(name: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    compiled(&RE, NAME_PATTERN).is_match(name)
}

/// A plain decimal number, optionally bounded by `min` and `max` (inclusive).
pub fn validate_number(value: &str, min: Option<f64>, max: Option<f64>) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    if !compiled(&RE, NUMBER_PATTERN).is_match(value) {
        return false;
    }

    let Ok(num) = value.parse::<f64>() else {
        return false;
    };
    let below = min.is_some_and(|min| num < min);
    let above = max.is_some_and(|max| num > max);
    !(below || above)
}

/// At least 8 characters on one line, with a lowercase letter, an uppercase
/// letter, a digit and a symbol (`_` counts as a symbol).
///
/// Length is measured in UTF-16 code units, so a character outside the
/// Basic Multilingual Plane counts twice.
pub fn validate_password(password: &str) -> bool {
    let single_line = !password
        .chars()
        .any(|c| matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}'));

    single_line
        && password.encode_utf16().count() >= PASSWORD_MIN_LEN
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| !c.is_ascii_alphanumeric())
}

/// Digits with optional leading `+`, a parenthesized area code and `-`, `.`
/// or space separators. Must end with a digit.
pub fn validate_phone(phone: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    compiled(&RE, PHONE_PATTERN).is_match(phone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email() {
        assert!(validate_email("user@example.com"));
        assert!(validate_email("name.lastname@example.co.uk"));
        assert!(!validate_email("user+alias@example.io"));

        assert!(!validate_email("user@com"));
        assert!(!validate_email("user@.com"));
        assert!(!validate_email("user@domain,com"));
        assert!(!validate_email("user@domain"));
        assert!(!validate_email("@domain.com"));
    }

    #[test]
    fn test_name() {
        assert!(validate_name("John"));
        assert!(validate_name("Mary-Jane"));
        assert!(validate_name("O'Connor"));
        assert!(validate_name("José"));

        assert!(!validate_name("J"));
        assert!(!validate_name("John123"));
        assert!(!validate_name("Anne-Marie!"));
        assert!(!validate_name(
            "A very long name that exceeds the maximum allowed length for validation purposes"
        ));
    }

    #[test]
    fn test_number() {
        assert!(validate_number("123", None, None));
        assert!(validate_number("-456", None, None));
        assert!(validate_number("3.14", None, None));
        assert!(validate_number("0.001", None, None));
        assert!(validate_number(".5", None, None));

        assert!(!validate_number("abc", None, None));
        assert!(!validate_number("123abc", None, None));
        assert!(!validate_number("1.", None, None));
        assert!(!validate_number("99999999999999999999999999", None, Some(1000.0)));
        assert!(!validate_number("-123.456", Some(0.0), Some(100.0)));
    }

    #[test]
    fn test_number_range() {
        assert!(validate_number("50", Some(10.0), Some(100.0)));
        assert!(validate_number("10", Some(10.0), Some(100.0)));
        assert!(!validate_number("5", Some(10.0), Some(100.0)));
        assert!(!validate_number("150", Some(10.0), Some(100.0)));
    }

    #[test]
    fn test_password() {
        assert!(validate_password("StrongPass1!"));
        assert!(validate_password("P@ssw0rd123"));
        assert!(validate_password("Under_score1"));

        assert!(!validate_password("password"));
        assert!(!validate_password("12345678"));
        assert!(!validate_password("Password1"));
        assert!(!validate_password("!@#45678"));
        assert!(!validate_password("Pass1!\nword"));
    }

    #[test]
    fn test_password_length_counts_utf16_units() {
        assert!(validate_password("Aa1!😀😀"));
        assert!(!validate_password("Aa1!😀"));
        assert!(!validate_password("Aa1!éé"));
    }

    #[test]
    fn test_phone() {
        assert!(validate_phone("+1-800-555-5555"));
        assert!(validate_phone("(123) 456-7890"));
        assert!(validate_phone("123-456-7890"));
        assert!(validate_phone("1234567890"));

        assert!(!validate_phone("123-abc-7890"));
        assert!(!validate_phone("123456-"));
        assert!(!validate_phone("phone-number"));
        assert!(!validate_phone("(123)"));
    }
}
