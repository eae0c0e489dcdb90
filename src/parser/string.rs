//! String decoding onto the scratch buffer.
//!
//! Decoded bytes are pushed onto the scratch buffer and popped as one run
//! when the closing quote is reached. On any failure the buffer is rewound
//! to where it was before the opening quote.

use super::cursor::Cursor;
use crate::error::{ErrorCode, JsonResult};
use crate::scratch::ScratchBuffer;
use crate::value::JsonString;

/// Parse the string starting at the opening quote under the cursor.
pub(crate) fn parse_string(
    cursor: &mut Cursor<'_>,
    scratch: &mut ScratchBuffer,
    max_len: usize,
) -> JsonResult<JsonString> {
    let mark = scratch.len();
    if let Err(e) = decode_into(cursor, scratch, max_len) {
        scratch.rewind(mark);
        return Err(e);
    }
    let len = scratch.len() - mark;
    let bytes = scratch.pop(len);
    // Input is a &str and escapes are encoded from valid chars.
    let s = std::str::from_utf8(bytes).map_err(|_| ErrorCode::InvalidStringChar)?;
    Ok(JsonString::from(s))
}

fn decode_into(
    cursor: &mut Cursor<'_>,
    scratch: &mut ScratchBuffer,
    max_len: usize,
) -> JsonResult<()> {
    debug_assert_eq!(cursor.peek(), Some(b'"'));
    cursor.advance();
    let start = scratch.len();

    loop {
        let run = cursor.take_while(|b| b != b'"' && b != b'\\' && b >= 0x20);
        scratch.push_bytes(run);

        let len = scratch.len() - start;
        if len > max_len {
            return Err(ErrorCode::StringTooLong(len, max_len));
        }

        match cursor.advance() {
            None => return Err(ErrorCode::MissQuotationMark),
            Some(b'"') => return Ok(()),
            Some(b'\\') => decode_escape(cursor, scratch)?,
            Some(_) => return Err(ErrorCode::InvalidStringChar),
        }
    }
}

/// Decode the escape sequence after a backslash.
fn decode_escape(cursor: &mut Cursor<'_>, scratch: &mut ScratchBuffer) -> JsonResult<()> {
    let byte = match cursor.advance() {
        None => return Err(ErrorCode::MissQuotationMark),
        Some(b'"') => b'"',
        Some(b'\\') => b'\\',
        Some(b'/') => b'/',
        Some(b'b') => 0x08,
        Some(b'f') => 0x0C,
        Some(b'n') => b'\n',
        Some(b'r') => b'\r',
        Some(b't') => b'\t',
        Some(b'u') => {
            let ch = decode_unicode_escape(cursor)?;
            let mut utf8 = [0u8; 4];
            scratch.push_bytes(ch.encode_utf8(&mut utf8).as_bytes());
            return Ok(());
        }
        Some(_) => return Err(ErrorCode::InvalidStringEscape),
    };
    scratch.push_byte(byte);
    Ok(())
}

/// Read a \uXXXX escape, joining a surrogate pair when one starts here.
fn decode_unicode_escape(cursor: &mut Cursor<'_>) -> JsonResult<char> {
    let high = cursor.read_hex4()?;

    let codepoint = match high {
        0xD800..=0xDBFF => {
            if !(cursor.eat(b'\\') && cursor.eat(b'u')) {
                return Err(ErrorCode::InvalidUnicodeSurrogate);
            }
            let low = cursor.read_hex4()?;
            if !(0xDC00..=0xDFFF).contains(&low) {
                return Err(ErrorCode::InvalidUnicodeSurrogate);
            }
            0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00)
        }
        0xDC00..=0xDFFF => return Err(ErrorCode::InvalidUnicodeSurrogate),
        _ => high,
    };

    char::from_u32(codepoint).ok_or(ErrorCode::InvalidUnicodeSurrogate)
}

#[cfg(test)]
mod tests {
    use super::*;

    const U: &str = "\\u";

    fn quoted(parts: &[&str]) -> String {
        format!("\"{}\"", parts.concat())
    }

    fn decode(input: &str) -> JsonResult<String> {
        let mut scratch = ScratchBuffer::new();
        let result = parse_string(&mut Cursor::new(input), &mut scratch, usize::MAX);
        assert!(scratch.is_empty(), "scratch not rewound for {input:?}");
        result.map(JsonString::into_string)
    }

    #[test]
    fn test_plain() {
        assert_eq!(decode(r#""""#), Ok(String::new()));
        assert_eq!(decode(r#""Hello""#), Ok("Hello".to_string()));
    }

    #[test]
    fn test_simple_escapes() {
        assert_eq!(
            decode(r#""\" \\ \/ \b \f \n \r \t""#),
            Ok("\" \\ / \u{8} \u{c} \n \r \t".to_string())
        );
    }

    #[test]
    fn test_unicode_escapes() {
        assert_eq!(decode(&quoted(&[U, "0000"])), Ok("\0".to_string()));
        assert_eq!(decode(&quoted(&[U, "0024"])), Ok("$".to_string()));
        assert_eq!(decode(&quoted(&[U, "00A2"])), Ok("\u{A2}".to_string()));
        assert_eq!(decode(&quoted(&[U, "20AC"])), Ok("\u{20AC}".to_string()));
        assert_eq!(decode(&quoted(&[U, "20ac"])), Ok("\u{20AC}".to_string()));
    }

    #[test]
    fn test_surrogate_pair() {
        let expected = "\u{1D11E}".to_string();
        assert_eq!(decode(&quoted(&[U, "D834", U, "DD1E"])), Ok(expected.clone()));
        assert_eq!(decode(&quoted(&[U, "d834", U, "dd1e"])), Ok(expected));
        assert_eq!("\u{1D11E}".as_bytes(), [0xF0, 0x9D, 0x84, 0x9E]);
    }

    #[test]
    fn test_non_ascii_passthrough() {
        assert_eq!(
            decode("\"caf\u{e9} \u{1F600}\""),
            Ok("caf\u{e9} \u{1F600}".to_string())
        );
    }

    #[test]
    fn test_missing_quotation_mark() {
        assert_eq!(decode(r#""abc"#), Err(ErrorCode::MissQuotationMark));
        assert_eq!(decode(r#"""#), Err(ErrorCode::MissQuotationMark));
        assert_eq!(decode(r#""abc\"#), Err(ErrorCode::MissQuotationMark));
    }

    #[test]
    fn test_invalid_escape() {
        for bad in [r#""\v""#, r#""\'""#, r#""\0""#, r#""\x12""#] {
            assert_eq!(decode(bad), Err(ErrorCode::InvalidStringEscape), "{bad}");
        }
    }

    #[test]
    fn test_invalid_char() {
        assert_eq!(decode("\"\u{1}\""), Err(ErrorCode::InvalidStringChar));
        assert_eq!(decode("\"\u{1F}\""), Err(ErrorCode::InvalidStringChar));
        assert_eq!(decode("\"a\nb\""), Err(ErrorCode::InvalidStringChar));
    }

    #[test]
    fn test_invalid_hex() {
        for bad in [
            r#""\u""#,
            r#""\u0""#,
            r#""\u01""#,
            r#""\u012""#,
            r#""\u/000""#,
            r#""\uG000""#,
            r#""\u 123""#,
        ] {
            assert_eq!(decode(bad), Err(ErrorCode::InvalidUnicodeHex), "{bad}");
        }
    }

    #[test]
    fn test_invalid_surrogate() {
        let cases: [&[&str]; 7] = [
            &[U, "D800"],
            &[U, "DBFF", "x"],
            &[U, "D800", "\\\\"],
            &[U, "D800", U, "DBFF"],
            &[U, "D800", U, "0041"],
            &[U, "DC00"],
            &[U, "DFFF", U, "D800"],
        ];
        for parts in cases {
            let input = quoted(parts);
            assert_eq!(decode(&input), Err(ErrorCode::InvalidUnicodeSurrogate), "{input}");
        }
    }

    #[test]
    fn test_invalid_hex_in_low_half() {
        assert_eq!(
            decode(&quoted(&[U, "D834", U, "DD1"])),
            Err(ErrorCode::InvalidUnicodeHex)
        );
    }

    #[test]
    fn test_length_limit() {
        let mut scratch = ScratchBuffer::new();
        let result = parse_string(&mut Cursor::new(r#""abcdef""#), &mut scratch, 3);
        assert_eq!(result, Err(ErrorCode::StringTooLong(6, 3)));
        assert!(scratch.is_empty());
    }

    #[test]
    fn test_rewinds_to_mark_not_zero() {
        let mut scratch = ScratchBuffer::new();
        scratch.push_bytes(b"outer");
        let result = parse_string(&mut Cursor::new(r#""ab\q""#), &mut scratch, usize::MAX);
        assert_eq!(result, Err(ErrorCode::InvalidStringEscape));
        assert_eq!(scratch.pop(5), b"outer");
    }
}
