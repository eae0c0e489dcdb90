//! Number scanning and validation.
//!
//! The scanner takes the maximal run of `[0-9.eE+-]` without checking it,
//! then the run must match
//! `-? (0 | [1-9][0-9]*) (. [0-9]+)? ([eE] [+-]? [0-9]+)?` exactly.

use super::cursor::Cursor;
use crate::error::{ErrorCode, JsonResult};

fn is_number_byte(b: u8) -> bool {
    matches!(b, b'0'..=b'9' | b'.' | b'e' | b'E' | b'+' | b'-')
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Check the scanned run against the JSON number grammar.
///
/// A leading zero followed by more digits is `RootNotSingular`; every other
/// malformation is `InvalidValue`.
fn validate(text: &[u8]) -> JsonResult<()> {
    let mut i = usize::from(text.first() == Some(&b'-'));

    match text.get(i) {
        Some(b'0') => {
            i += 1;
            if text.get(i).is_some_and(u8::is_ascii_digit) {
                return Err(ErrorCode::RootNotSingular);
            }
        }
        Some(b'1'..=b'9') => i += count_digits(&text[i..]),
        _ => return Err(ErrorCode::InvalidValue),
    }

    if text.get(i) == Some(&b'.') {
        i += 1;
        let n = count_digits(&text[i..]);
        if n == 0 {
            return Err(ErrorCode::InvalidValue);
        }
        i += n;
    }

    if matches!(text.get(i), Some(b'e' | b'E')) {
        i += 1;
        if matches!(text.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        let n = count_digits(&text[i..]);
        if n == 0 {
            return Err(ErrorCode::InvalidValue);
        }
        i += n;
    }

    if i == text.len() {
        Ok(())
    } else {
        Err(ErrorCode::InvalidValue)
    }
}

/// Scan, validate and convert the number at the cursor.
///
/// Values beyond the `f64` range are `NumberTooBig`; values below the
/// smallest subnormal round to zero.
pub(crate) fn parse_number(cursor: &mut Cursor<'_>) -> JsonResult<f64> {
    let text = cursor.take_while(is_number_byte);
    validate(text)?;

    // The run is pure ASCII after validation.
    let text = std::str::from_utf8(text).map_err(|_| ErrorCode::InvalidValue)?;
    let n: f64 = text.parse().map_err(|_| ErrorCode::InvalidValue)?;
    if n.is_infinite() {
        return Err(ErrorCode::NumberTooBig);
    }
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number(input: &str) -> JsonResult<f64> {
        parse_number(&mut Cursor::new(input))
    }

    #[test]
    fn test_valid_numbers() {
        assert_eq!(number("0"), Ok(0.0));
        assert_eq!(number("-0"), Ok(0.0));
        assert_eq!(number("-1.5"), Ok(-1.5));
        assert_eq!(number("3.1416"), Ok(3.1416));
        assert_eq!(number("1E10"), Ok(1e10));
        assert_eq!(number("1e+10"), Ok(1e10));
        assert_eq!(number("-1E-10"), Ok(-1e-10));
        assert_eq!(number("1.234E+10"), Ok(1.234e10));
        assert_eq!(number("0.5"), Ok(0.5));
    }

    #[test]
    fn test_extremes() {
        assert_eq!(number("1e-10000"), Ok(0.0));
        assert_eq!(number("1.0000000000000002"), Ok(1.000_000_000_000_000_2));
        assert_eq!(number("4.9406564584124654e-324"), Ok(4.940_656_458_412_465_4e-324));
        assert_eq!(number("-1.7976931348623157e+308"), Ok(-f64::MAX));
    }

    #[test]
    fn test_negative_zero_keeps_sign() {
        assert_eq!(number("-0").map(f64::is_sign_negative), Ok(true));
    }

    #[test]
    fn test_too_big() {
        assert_eq!(number("1e309"), Err(ErrorCode::NumberTooBig));
        assert_eq!(number("-1e309"), Err(ErrorCode::NumberTooBig));
    }

    #[test]
    fn test_leading_zero() {
        assert_eq!(number("0123"), Err(ErrorCode::RootNotSingular));
        assert_eq!(number("-012"), Err(ErrorCode::RootNotSingular));
    }

    #[test]
    fn test_malformed() {
        for bad in ["+0", "+1", "-", "1.", "1.e5", "1e", "1e+", "1E-", "1e5.3", "1-2", "1ee2", "--1"] {
            assert_eq!(number(bad), Err(ErrorCode::InvalidValue), "{bad}");
        }
    }

    #[test]
    fn test_scan_stops_at_other_bytes() {
        let mut cursor = Cursor::new("12,3");
        assert_eq!(parse_number(&mut cursor), Ok(12.0));
        assert_eq!(cursor.position(), 2);
    }
}
