//! Decoding of sensor payloads.
//!
//! Sensors publish a bare decimal as text. Decoding is lenient in the same way
//! as a browser's `parseFloat`: leading whitespace is skipped, the longest
//! numeric prefix wins and trailing garbage is ignored. Anything without a
//! numeric prefix decodes to `NaN`.

const INFINITY: &str = "Infinity";

pub fn parse_reading(payload: &[u8]) -> f64 {
    match std::str::from_utf8(payload) {
        Ok(text) => parse_float(text),
        Err(_) => f64::NAN,
    }
}

pub fn parse_float(text: &str) -> f64 {
    let text = text.trim_start();
    let end = numeric_prefix_len(text);

    if end == 0 {
        return f64::NAN;
    }

    let literal = &text[..end];
    let unsigned = literal.trim_start_matches(['+', '-']);

    if unsigned == INFINITY {
        return if literal.starts_with('-') { f64::NEG_INFINITY } else { f64::INFINITY };
    }

    literal.parse::<f64>().unwrap_or(f64::NAN)
}

/// Length in bytes of the longest prefix of `text` that forms a decimal
/// literal, or zero when there is none.
fn numeric_prefix_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut index = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        index += 1;
    }

    if text[index..].starts_with(INFINITY) {
        return index + INFINITY.len();
    }

    let integer_digits = count_digits(&bytes[index..]);
    index += integer_digits;

    let mut fraction_digits = 0;
    if bytes.get(index) == Some(&b'.') {
        fraction_digits = count_digits(&bytes[index + 1..]);
        if integer_digits > 0 || fraction_digits > 0 {
            index += 1 + fraction_digits;
        }
    }

    if integer_digits == 0 && fraction_digits == 0 {
        return 0;
    }

    // Exponent only counts when it carries at least one digit
    if matches!(bytes.get(index), Some(b'e' | b'E')) {
        let mut cursor = index + 1;
        if matches!(bytes.get(cursor), Some(b'+' | b'-')) {
            cursor += 1;
        }
        let exponent_digits = count_digits(&bytes[cursor.min(bytes.len())..]);
        if exponent_digits > 0 {
            index = cursor + exponent_digits;
        }
    }

    index
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|byte| byte.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_decimals() {
        assert_eq!(parse_float("23.5"), 23.5);
        assert_eq!(parse_float("-4"), -4.0);
        assert_eq!(parse_float("+7"), 7.0);
        assert_eq!(parse_float("0"), 0.0);
        assert_eq!(parse_float(".5"), 0.5);
        assert_eq!(parse_float("5."), 5.0);
    }

    #[test]
    fn test_whitespace_and_trailing_garbage() {
        assert_eq!(parse_float("  23.5 \n"), 23.5);
        assert_eq!(parse_float("23.5C"), 23.5);
        assert_eq!(parse_float("80%"), 80.0);
        assert_eq!(parse_float("1.2.3"), 1.2);
        assert_eq!(parse_float("12ppm"), 12.0);
    }

    #[test]
    fn test_exponent() {
        assert_eq!(parse_float("1e2"), 100.0);
        assert_eq!(parse_float("2.5E-1"), 0.25);
        assert_eq!(parse_float("3e"), 3.0);
        assert_eq!(parse_float("3e+"), 3.0);
        assert_eq!(parse_float("4ex"), 4.0);
    }

    #[test]
    fn test_infinity() {
        assert_eq!(parse_float("Infinity"), f64::INFINITY);
        assert_eq!(parse_float("-Infinity"), f64::NEG_INFINITY);
        assert_eq!(parse_float("+Infinityx"), f64::INFINITY);
        assert!(parse_float("inf").is_nan());
        assert!(parse_float("infinity").is_nan());
    }

    #[test]
    fn test_non_numeric_is_nan() {
        assert!(parse_float("").is_nan());
        assert!(parse_float("   ").is_nan());
        assert!(parse_float("abc").is_nan());
        assert!(parse_float("nan").is_nan());
        assert!(parse_float("NaN").is_nan());
        assert!(parse_float("-").is_nan());
        assert!(parse_float(".").is_nan());
        assert!(parse_float("t23").is_nan());
    }

    #[test]
    fn test_parse_reading_bytes() {
        assert_eq!(parse_reading(b"26.4"), 26.4);
        assert!(parse_reading(&[0xff, 0xfe, 0x31]).is_nan());
    }
}
