//! Compact JSON serialization.
//!
//! Output has no insignificant whitespace. Strings are re-escaped: `"` and
//! `\` and the control characters with short escapes get two-character
//! forms, other bytes below 0x20 become `\u00xx`, everything else is copied
//! verbatim. Numbers use [`format_number`].

use tracing::trace;

use crate::error::{ErrorCode, JsonResult};
use crate::scratch::ScratchBuffer;
use crate::value::{Array, Object, Value};

const HEX: &[u8; 16] = b"0123456789abcdef";

/// Writes values onto the top of a scratch buffer.
pub(crate) struct Serializer<'s> {
    out: &'s mut ScratchBuffer,
    lossy: bool,
}

impl<'s> Serializer<'s> {
    /// Serializer that rejects non-finite numbers.
    pub(crate) fn new(out: &'s mut ScratchBuffer) -> Self {
        Self { out, lossy: false }
    }

    /// Serializer that writes non-finite numbers as `null`.
    pub(crate) fn lossy(out: &'s mut ScratchBuffer) -> Self {
        Self { out, lossy: true }
    }

    pub(crate) fn write_value(&mut self, value: &Value) -> JsonResult<()> {
        match value {
            Value::Null => self.out.push_bytes(b"null"),
            Value::Bool(true) => self.out.push_bytes(b"true"),
            Value::Bool(false) => self.out.push_bytes(b"false"),
            Value::Number(n) => self.write_number(*n)?,
            Value::String(s) => self.write_string(s.as_bytes()),
            Value::Array(a) => self.write_array(a)?,
            Value::Object(o) => self.write_object(o)?,
        }
        Ok(())
    }

    fn write_number(&mut self, n: f64) -> JsonResult<()> {
        if !n.is_finite() {
            if self.lossy {
                self.out.push_bytes(b"null");
                return Ok(());
            }
            return Err(ErrorCode::NonFiniteNumber);
        }
        self.out.push_bytes(format_number(n).as_bytes());
        Ok(())
    }

    fn write_string(&mut self, s: &[u8]) {
        self.out.push_byte(b'"');
        let mut start = 0;
        for (i, &b) in s.iter().enumerate() {
            let escape: &[u8] = match b {
                b'"' => b"\\\"",
                b'\\' => b"\\\\",
                b'\n' => b"\\n",
                b'\r' => b"\\r",
                b'\t' => b"\\t",
                0x08 => b"\\b",
                0x0C => b"\\f",
                0x00..=0x1F => {
                    self.out.push_bytes(&s[start..i]);
                    start = i + 1;
                    self.out.push_bytes(b"\\u00");
                    self.out.push_byte(HEX[usize::from(b >> 4)]);
                    self.out.push_byte(HEX[usize::from(b & 0x0F)]);
                    continue;
                }
                _ => continue,
            };
            self.out.push_bytes(&s[start..i]);
            self.out.push_bytes(escape);
            start = i + 1;
        }
        self.out.push_bytes(&s[start..]);
        self.out.push_byte(b'"');
    }

    fn write_array(&mut self, array: &Array) -> JsonResult<()> {
        self.out.push_byte(b'[');
        for (i, item) in array.iter().enumerate() {
            if i > 0 {
                self.out.push_byte(b',');
            }
            self.write_value(item)?;
        }
        self.out.push_byte(b']');
        Ok(())
    }

    fn write_object(&mut self, object: &Object) -> JsonResult<()> {
        self.out.push_byte(b'{');
        for (i, member) in object.iter().enumerate() {
            if i > 0 {
                self.out.push_byte(b',');
            }
            self.write_string(member.key().as_bytes());
            self.out.push_byte(b':');
            self.write_value(member.value())?;
        }
        self.out.push_byte(b'}');
        Ok(())
    }
}

/// Format a finite number with the shortest digits that round-trip.
///
/// The layout follows C's `%.17g`: plain decimal notation when the decimal
/// exponent is in `-4..17`, otherwise one leading digit and an exponent of
/// at least two digits. Trailing zeros are never written.
///
/// ```
/// use json_toy::format_number;
///
/// assert_eq!(format_number(1.5), "1.5");
/// assert_eq!(format_number(100.0), "100");
/// assert_eq!(format_number(1e20), "1e+20");
/// assert_eq!(format_number(0.00001), "1e-05");
/// assert_eq!(format_number(-0.0), "-0");
/// ```
pub fn format_number(n: f64) -> String {
    if n == 0.0 {
        return if n.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. "-1.234e-20".
    let sci = format!("{n:e}");
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let Ok(exp) = exp.parse::<i32>() else {
        return sci;
    };
    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(m) => ("-", m),
        None => ("", mantissa),
    };
    let digits: String = mantissa.chars().filter(|&c| c != '.').collect();

    if (-4..17).contains(&exp) {
        if exp < 0 {
            let zeros = "0".repeat(exp.unsigned_abs() as usize - 1);
            return format!("{sign}0.{zeros}{digits}");
        }
        let int_len = exp as usize + 1;
        if digits.len() <= int_len {
            let zeros = "0".repeat(int_len - digits.len());
            format!("{sign}{digits}{zeros}")
        } else {
            let (int, frac) = digits.split_at(int_len);
            format!("{sign}{int}.{frac}")
        }
    } else {
        let (lead, rest) = digits.split_at(1);
        let dot = if rest.is_empty() { "" } else { "." };
        let exp_sign = if exp < 0 { '-' } else { '+' };
        format!("{sign}{lead}{dot}{rest}e{exp_sign}{:02}", exp.unsigned_abs())
    }
}

fn write_document(value: &Value, lossy: bool) -> JsonResult<Vec<u8>> {
    let mut scratch = ScratchBuffer::new();
    let mut serializer = if lossy {
        Serializer::lossy(&mut scratch)
    } else {
        Serializer::new(&mut scratch)
    };
    let result = serializer.write_value(value);
    let len = scratch.len();
    let bytes = scratch.pop(len).to_vec();
    result?;
    trace!(bytes = bytes.len(), "serialized");
    Ok(bytes)
}

/// Serialize `value` to compact JSON bytes.
///
/// Fails with `NonFiniteNumber` if the tree holds NaN or an infinity.
pub fn to_vec(value: &Value) -> JsonResult<Vec<u8>> {
    write_document(value, false)
}

/// Serialize `value` to a compact JSON string.
pub fn to_string(value: &Value) -> JsonResult<String> {
    let bytes = to_vec(value)?;
    // Keys and strings are valid UTF-8 and everything added is ASCII.
    String::from_utf8(bytes).map_err(|_| ErrorCode::InvalidStringChar)
}

/// Serialize `value`, writing non-finite numbers as `null`.
pub(crate) fn to_string_lossy(value: &Value) -> String {
    write_document(value, true)
        .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
        .unwrap_or_default()
}
