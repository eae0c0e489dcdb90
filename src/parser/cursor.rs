//! Byte cursor over the parser input.

use crate::error::{ErrorCode, JsonResult};

/// Which side of a value the whitespace being skipped is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Whitespace {
    /// A value must follow: running out of input is `ExpectValue`.
    Before,
    /// A value just ended: the next byte must be a valid continuation.
    After,
}

/// Container whose separator rules apply after a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Container {
    Array,
    Object,
}

/// Read position into a UTF-8 input buffer.
#[derive(Debug, Clone)]
pub(crate) struct Cursor<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Self {
            input: input.as_bytes(),
            pos: 0,
        }
    }

    /// Total input length in bytes.
    pub(crate) fn len(&self) -> usize {
        self.input.len()
    }

    /// Current position in the input.
    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    /// Move back to the start of the input.
    pub(crate) fn rewind(&mut self) {
        self.pos = 0;
    }

    /// Peek at the current byte without consuming it.
    pub(crate) fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    /// Consume and return the current byte.
    pub(crate) fn advance(&mut self) -> Option<u8> {
        let b = self.peek();
        if b.is_some() {
            self.pos += 1;
        }
        b
    }

    /// Consume the current byte if it equals `expected`.
    pub(crate) fn eat(&mut self, expected: u8) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consume the longest run of bytes matching `pred`.
    pub(crate) fn take_while(&mut self, mut pred: impl FnMut(u8) -> bool) -> &'a [u8] {
        let start = self.pos;
        while let Some(b) = self.peek() {
            if !pred(b) {
                break;
            }
            self.pos += 1;
        }
        &self.input[start..self.pos]
    }

    /// Expect specific bytes at the current position.
    pub(crate) fn expect_bytes(&mut self, expected: &[u8]) -> JsonResult<()> {
        for &b in expected {
            if self.advance() != Some(b) {
                return Err(ErrorCode::InvalidValue);
            }
        }
        Ok(())
    }

    /// Read 4 hex digits and return the value.
    pub(crate) fn read_hex4(&mut self) -> JsonResult<u32> {
        let mut value = 0u32;
        for _ in 0..4 {
            let digit = match self.advance() {
                Some(b @ b'0'..=b'9') => b - b'0',
                Some(b @ b'a'..=b'f') => b - b'a' + 10,
                Some(b @ b'A'..=b'F') => b - b'A' + 10,
                _ => return Err(ErrorCode::InvalidUnicodeHex),
            };
            value = (value << 4) | u32::from(digit);
        }
        Ok(value)
    }

    /// Skip `{space, \t, \n, \r}*` and check what follows.
    ///
    /// `Before` fails with `ExpectValue` at end of input. `After` accepts end
    /// of input; otherwise the next byte must continue the enclosing
    /// container (`,` `]` for arrays, `,` `:` `}` for objects), and with no
    /// container any remaining byte means the root was not singular.
    pub(crate) fn skip_whitespace(
        &mut self,
        side: Whitespace,
        container: Option<Container>,
    ) -> JsonResult<()> {
        self.take_while(|b| matches!(b, b' ' | b'\t' | b'\n' | b'\r'));

        let next = match (side, self.peek()) {
            (Whitespace::Before, None) => return Err(ErrorCode::ExpectValue),
            (Whitespace::Before, Some(_)) | (Whitespace::After, None) => return Ok(()),
            (Whitespace::After, Some(b)) => b,
        };
        match container {
            Some(Container::Array) if matches!(next, b',' | b']') => Ok(()),
            Some(Container::Array) => Err(ErrorCode::MissCommaOrSquareBracket),
            Some(Container::Object) if matches!(next, b',' | b':' | b'}') => Ok(()),
            Some(Container::Object) => Err(ErrorCode::MissCommaOrCurlyBracket),
            None => Err(ErrorCode::RootNotSingular),
        }
    }
}
