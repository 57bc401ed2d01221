//! Overflow-aware decimal text to `i64` conversion.
//!
//! The scan accumulates the unsigned magnitude and rejects any literal
//! whose value would not fit in an `i64`, instead of wrapping or
//! saturating. A negative magnitude may reach one past `i64::MAX`
//! (`i64::MIN`), which the last-digit check admits.

const CUTOFF: u64 = i64::MAX as u64 / 10;
const CUTLIM: u64 = i64::MAX as u64 % 10;

/// Scans `text` as an optionally signed base-10 integer literal.
///
/// Returns the parsed value and the number of bytes consumed, or
/// `None` if the text is empty, contains a non-digit after the sign,
/// has no digits at all, or overflows `i64`. A leading `-` negates,
/// a leading `+` is consumed without effect.
pub fn parse_i64(text: &str) -> Option<(i64, usize)> {
    let bytes = text.as_bytes();
    if bytes.is_empty() {
        return None;
    }

    let mut i = 0;
    let negative = match bytes[0] {
        b'-' => {
            i += 1;
            true
        }
        b'+' => {
            i += 1;
            false
        }
        _ => false,
    };

    let mut magnitude: u64 = 0;
    let mut saw_digit = false;
    while i < bytes.len() {
        let byte = bytes[i];
        if !byte.is_ascii_digit() {
            return None;
        }
        let digit = u64::from(byte - b'0');
        if magnitude >= CUTOFF && (magnitude > CUTOFF || digit > CUTLIM + u64::from(negative)) {
            return None;
        }
        magnitude = magnitude * 10 + digit;
        saw_digit = true;
        i += 1;
    }
    if !saw_digit {
        return None;
    }

    let value = if negative {
        0u64.wrapping_sub(magnitude) as i64
    } else {
        magnitude as i64
    };
    Some((value, i))
}

/// Like [`parse_i64`] but succeeds only when the whole input was
/// consumed. Partial numeric prefixes such as `"12abc"` fail.
pub fn parse_i64_exact(text: &str) -> Option<i64> {
    match parse_i64(text) {
        Some((value, consumed)) if consumed == text.len() => Some(value),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{parse_i64, parse_i64_exact};

    #[rstest]
    #[case("0", 0)]
    #[case("42", 42)]
    #[case("+42", 42)]
    #[case("-42", -42)]
    #[case("007", 7)]
    #[case("9223372036854775807", i64::MAX)]
    #[case("-9223372036854775808", i64::MIN)]
    #[case("-9223372036854775807", i64::MIN + 1)]
    fn parses_in_range_literals(#[case] text: &str, #[case] expected: i64) {
        assert_eq!(parse_i64_exact(text), Some(expected));
        assert_eq!(parse_i64(text), Some((expected, text.len())));
    }

    #[rstest]
    #[case("")]
    #[case("-")]
    #[case("+")]
    #[case("--1")]
    #[case("+-1")]
    #[case("1.5")]
    #[case("12abc")]
    #[case(" 1")]
    #[case("1 ")]
    #[case("0x10")]
    fn rejects_non_integer_text(#[case] text: &str) {
        assert_eq!(parse_i64(text), None);
    }

    #[rstest]
    #[case("9223372036854775808")]
    #[case("-9223372036854775809")]
    #[case("18446744073709551615")]
    #[case("99999999999999999999999999")]
    fn rejects_overflow_instead_of_wrapping(#[case] text: &str) {
        assert_eq!(parse_i64(text), None);
        assert_eq!(parse_i64_exact(text), None);
    }

    #[rstest]
    fn negative_boundary_is_one_past_positive_boundary() {
        assert_eq!(parse_i64_exact("-9223372036854775808"), Some(i64::MIN));
        assert_eq!(parse_i64_exact("9223372036854775808"), None);
    }
}
