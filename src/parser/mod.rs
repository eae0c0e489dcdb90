//! Recursive descent JSON parser.
//!
//! A [`Parser`] owns a cursor over its input text, a [`ScratchBuffer`] for
//! decoding strings and writing output, and a root [`Value`]. The same
//! parser can be pointed at new text with [`Parser::reset`] and reused; the
//! scratch allocation carries over between calls.
//!
//! # Errors
//!
//! Grammar errors follow the first offending byte:
//!
//! - `ExpectValue`: nothing but whitespace where a value must start
//! - `InvalidValue`: bad literal, malformed number, unknown lead byte
//! - `RootNotSingular`: bytes after the root value, or `0` followed by digits
//! - `MissCommaOrSquareBracket` / `MissCommaOrCurlyBracket`: bad separator
//! - `MissKey` / `MissColon`: malformed object member
//!
//! Every failure leaves the target value `Null` and the scratch buffer empty.

mod cursor;
mod number;
mod string;

use tracing::{debug, trace};

use self::cursor::{Container, Cursor, Whitespace};
use crate::error::{ErrorCode, JsonResult};
use crate::limits::Limits;
use crate::scratch::ScratchBuffer;
use crate::serializer::Serializer;
use crate::value::{Array, Member, Object, Value};

/// Reusable parse/stringify session over one input text.
#[derive(Debug)]
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    scratch: ScratchBuffer,
    root: Value,
    limits: Limits,
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Create a parser over `text` with default limits.
    pub fn new(text: &'a str) -> Self {
        Self::with_limits(text, Limits::default())
    }

    /// Create a parser over `text` with explicit limits.
    pub fn with_limits(text: &'a str, limits: Limits) -> Self {
        Self {
            cursor: Cursor::new(text),
            scratch: ScratchBuffer::new(),
            root: Value::Null,
            limits,
            depth: 0,
        }
    }

    /// Point the parser at new text, keeping its scratch allocation.
    ///
    /// The root value is cleared. Panics if a previous call left bytes on
    /// the scratch buffer.
    pub fn reset(&mut self, text: &'a str) {
        assert!(
            self.scratch.is_empty(),
            "parser reset with {} outstanding scratch bytes",
            self.scratch.len()
        );
        self.cursor = Cursor::new(text);
        self.root.set_null();
        self.depth = 0;
    }

    /// Parse the whole input into `target`, or into the parser's own root
    /// when `target` is `None`.
    ///
    /// On failure the target is set to `Null`.
    pub fn parse(&mut self, target: Option<&mut Value>) -> JsonResult<()> {
        let result = self.parse_document();
        debug_assert!(self.scratch.is_empty());

        let slot = match target {
            Some(v) => v,
            None => &mut self.root,
        };
        match result {
            Ok(value) => {
                trace!(
                    value_type = value.value_type().name(),
                    bytes = self.cursor.len(),
                    "parse ok"
                );
                *slot = value;
                Ok(())
            }
            Err(e) => {
                debug!(
                    code = e.code(),
                    error = e.name(),
                    position = self.cursor.position(),
                    "parse failed"
                );
                slot.set_null();
                Err(e)
            }
        }
    }

    /// Serialize `value` as compact JSON.
    ///
    /// The returned bytes borrow the parser's scratch buffer and stay valid
    /// until the parser is used again. Fails with `NonFiniteNumber` if the
    /// tree holds NaN or an infinity.
    pub fn stringify(&mut self, value: &Value) -> JsonResult<&[u8]> {
        assert!(
            self.scratch.is_empty(),
            "stringify with {} outstanding scratch bytes",
            self.scratch.len()
        );
        if let Err(e) = Serializer::new(&mut self.scratch).write_value(value) {
            debug!(code = e.code(), error = e.name(), "stringify failed");
            self.scratch.rewind(0);
            return Err(e);
        }
        let len = self.scratch.len();
        trace!(bytes = len, "stringify ok");
        Ok(self.scratch.pop(len))
    }

    /// The parser's own root value.
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Move the root value out, leaving `Null`.
    pub fn take_root(&mut self) -> Value {
        self.root.take()
    }

    /// Byte offset the last parse stopped at.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Limits this parser enforces.
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Bytes currently outstanding on the scratch buffer. Always 0 between
    /// calls.
    pub fn scratch_len(&self) -> usize {
        self.scratch.len()
    }

    fn parse_document(&mut self) -> JsonResult<Value> {
        self.cursor.rewind();
        self.depth = 0;

        let size = self.cursor.len();
        if size > self.limits.max_input_size {
            debug!(size, limit = self.limits.max_input_size, "input rejected");
            return Err(ErrorCode::InputTooLarge(size, self.limits.max_input_size));
        }

        self.cursor.skip_whitespace(Whitespace::Before, None)?;
        let value = self.parse_value()?;
        self.cursor.skip_whitespace(Whitespace::After, None)?;
        Ok(value)
    }

    /// Parse one value at the cursor. Leading whitespace is already skipped.
    fn parse_value(&mut self) -> JsonResult<Value> {
        match self.cursor.peek() {
            None => Err(ErrorCode::ExpectValue),
            Some(b'n') => {
                self.cursor.expect_bytes(b"null")?;
                Ok(Value::Null)
            }
            Some(b't') => {
                self.cursor.expect_bytes(b"true")?;
                Ok(Value::Bool(true))
            }
            Some(b'f') => {
                self.cursor.expect_bytes(b"false")?;
                Ok(Value::Bool(false))
            }
            Some(b'"') => {
                let s = string::parse_string(
                    &mut self.cursor,
                    &mut self.scratch,
                    self.limits.max_string_length,
                )?;
                Ok(Value::String(s))
            }
            Some(b'[') => self.nested(Self::parse_array),
            Some(b'{') => self.nested(Self::parse_object),
            Some(b'0'..=b'9' | b'+' | b'-') => {
                number::parse_number(&mut self.cursor).map(Value::Number)
            }
            Some(_) => Err(ErrorCode::InvalidValue),
        }
    }

    /// Run a container parse one nesting level deeper.
    fn nested(&mut self, f: fn(&mut Self) -> JsonResult<Value>) -> JsonResult<Value> {
        if self.depth >= self.limits.max_nesting_depth {
            debug!(limit = self.limits.max_nesting_depth, "nesting limit reached");
            return Err(ErrorCode::NestingTooDeep(
                self.depth + 1,
                self.limits.max_nesting_depth,
            ));
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    fn parse_array(&mut self) -> JsonResult<Value> {
        self.cursor.advance();
        self.cursor.skip_whitespace(Whitespace::Before, None)?;
        if self.cursor.eat(b']') {
            return Ok(Value::Array(Array::new()));
        }

        let mut items = Vec::new();
        loop {
            self.cursor
                .skip_whitespace(Whitespace::Before, None)
                .map_err(|_| ErrorCode::MissCommaOrSquareBracket)?;
            let value = self.parse_value()?;
            self.cursor
                .skip_whitespace(Whitespace::After, Some(Container::Array))?;

            items.push(value);
            if items.len() > self.limits.max_array_length {
                debug!(limit = self.limits.max_array_length, "array length limit reached");
                return Err(ErrorCode::ArrayTooLong(
                    items.len(),
                    self.limits.max_array_length,
                ));
            }

            match self.cursor.advance() {
                Some(b',') => continue,
                Some(b']') => return Ok(Value::Array(items.into())),
                _ => return Err(ErrorCode::MissCommaOrSquareBracket),
            }
        }
    }

    fn parse_object(&mut self) -> JsonResult<Value> {
        self.cursor.advance();
        self.cursor.skip_whitespace(Whitespace::Before, None)?;
        if self.cursor.eat(b'}') {
            return Ok(Value::Object(Object::new()));
        }

        let mut members = Vec::new();
        loop {
            self.cursor
                .skip_whitespace(Whitespace::Before, None)
                .map_err(|_| ErrorCode::MissKey)?;
            if self.cursor.peek() != Some(b'"') {
                return Err(ErrorCode::MissKey);
            }
            let key = string::parse_string(
                &mut self.cursor,
                &mut self.scratch,
                self.limits.max_string_length,
            )?;

            self.cursor
                .skip_whitespace(Whitespace::After, Some(Container::Object))?;
            if !self.cursor.eat(b':') {
                return Err(ErrorCode::MissColon);
            }

            self.cursor.skip_whitespace(Whitespace::Before, None)?;
            let value = self.parse_value()?;
            self.cursor
                .skip_whitespace(Whitespace::After, Some(Container::Object))?;

            members.push(Member::new(key, value));
            if members.len() > self.limits.max_object_fields {
                debug!(limit = self.limits.max_object_fields, "object field limit reached");
                return Err(ErrorCode::TooManyFields(
                    members.len(),
                    self.limits.max_object_fields,
                ));
            }

            match self.cursor.advance() {
                Some(b',') => continue,
                Some(b'}') => return Ok(Value::Object(members.into())),
                _ => return Err(ErrorCode::MissCommaOrCurlyBracket),
            }
        }
    }
}

/// Parse `text` with default limits.
pub fn parse(text: &str) -> JsonResult<Value> {
    parse_with_limits(text, Limits::default())
}

/// Parse `text` with custom limits.
pub fn parse_with_limits(text: &str, limits: Limits) -> JsonResult<Value> {
    let mut parser = Parser::with_limits(text, limits);
    parser.parse(None)?;
    Ok(parser.take_root())
}
