//! Phone number normalization to E.164.

/// Country code used when the input carries none.
pub const DEFAULT_COUNTRY_CODE: u16 = 33;

/// Normalize `phone` to `+<country code><number>`.
///
/// A `+` or `(` anywhere in the trimmed input means the first two digits are
/// the country code. Otherwise `default_country_code` is prefixed. In both
/// cases a single leading `0` of the national part is dropped and every
/// non-digit is removed.
pub fn convert_phone_to_e164(phone: &str, default_country_code: u16) -> String {
    let trimmed = phone.trim();
    let has_country_code = trimmed.contains(&['+', '('][..]);
    let digits: String = trimmed.chars().filter(char::is_ascii_digit).collect();

    if has_country_code {
        let split = digits.len().min(2);
        let (country_code, national) = digits.split_at(split);
        format!("+{}{}", country_code, strip_trunk_prefix(national))
    } else {
        format!("+{}{}", default_country_code, strip_trunk_prefix(&digits))
    }
}

fn strip_trunk_prefix(national: &str) -> &str {
    national.strip_prefix('0').unwrap_or(national)
}
