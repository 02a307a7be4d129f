//! Phone and account number normalisation.
//!
//! Numbers arrive in whatever shape people type them: spaced, dashed,
//! bracketed, with a leading `+`, or written in Myanmar digits. They are
//! reduced to a canonical form so the same number always hits the same
//! check counter.

/// Minimum digit count for a bare message to be treated as a number.
pub const MIN_NUMBER_DIGITS: usize = 7;

const MYANMAR_ZERO: u32 = 0x1040;
const MYANMAR_NINE: u32 = 0x1049;

fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, '-' | '(' | ')' | '+')
}

/// Map a Myanmar digit to its ASCII form. Other scripts' digits are left
/// as they are, so only ASCII and Myanmar digits count as digits.
fn ascii_digit(c: char) -> char {
    let code = c as u32;
    if (MYANMAR_ZERO..=MYANMAR_NINE).contains(&code) {
        char::from_digit(code - MYANMAR_ZERO, 10).unwrap_or(c)
    } else {
        c
    }
}

/// Rewrite Myanmar digits as ASCII, leaving everything else untouched.
#[must_use]
pub fn to_ascii_digits(text: &str) -> String {
    text.chars().map(ascii_digit).collect()
}

/// Strip separators and map Myanmar digits to ASCII.
#[must_use]
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| !is_separator(*c))
        .map(ascii_digit)
        .collect()
}

/// Detect a bare number in a free-text message.
///
/// Returns the canonical number when the message, once normalised, is made
/// only of digits and is long enough to be a phone or account number.
#[must_use]
pub fn detect(text: &str) -> Option<String> {
    let number = normalize(text);
    if number.chars().count() >= MIN_NUMBER_DIGITS && number.chars().all(|c| c.is_ascii_digit())
    {
        Some(number)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_digits_keep_other_characters() {
        assert_eq!(to_ascii_digits("၁၆,၀၀၀.၅"), "16,000.5");
        assert_eq!(to_ascii_digits("abc 12"), "abc 12");
    }

    #[test]
    fn strips_separators() {
        assert_eq!(normalize("+95 (9) 123-456 789"), "959123456789");
        assert_eq!(normalize(" 09 777\n888 999 "), "09777888999");
    }

    #[test]
    fn maps_myanmar_digits() {
        assert_eq!(normalize("၀၉၁၂၃၄၅၆၇၈၉"), "09123456789");
    }

    #[test]
    fn detects_long_digit_runs() {
        assert_eq!(detect("09-123 4567").as_deref(), Some("091234567"));
        assert_eq!(detect("1234567").as_deref(), Some("1234567"));
    }

    #[test]
    fn rejects_short_or_mixed_text() {
        assert!(detect("123456").is_none());
        assert!(detect("call 0912345678").is_none());
        assert!(detect("").is_none());
        assert!(detect("12.34567").is_none());
    }

    #[test]
    fn same_number_in_different_shapes_matches() {
        assert_eq!(detect("+95 9 777 888 999"), detect("959777888999"));
        assert_eq!(detect("၀၉၇၇၇၈၈၈၉၉၉"), detect("09777888999"));
    }
}
