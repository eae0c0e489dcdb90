//! Status codes for parsing and serialization.
//!
//! Every failure is reported as an [`ErrorCode`] value, never by panicking.
//! The numeric codes are stable so callers can log or compare them without
//! depending on variant names.
//!
//! # Groups
//!
//! - 1..=13: grammar errors raised while parsing
//! - 20..=24: configured [`Limits`](crate::Limits) exceeded
//! - 30: value cannot be written as JSON

use thiserror::Error;

/// All statuses a parse or stringify call can fail with.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum ErrorCode {
    /// Input is empty or only whitespace where a value was required (code 1)
    #[error("expected a value")]
    ExpectValue,

    /// Unrecognised literal, bad number shape, or unexpected lead byte (code 2)
    #[error("invalid value")]
    InvalidValue,

    /// Content remains after the root value, or a number has a leading zero (code 3)
    #[error("root value is not singular")]
    RootNotSingular,

    /// Number overflows a 64-bit float (code 4)
    #[error("number too big")]
    NumberTooBig,

    /// String runs to end of input without a closing quote (code 5)
    #[error("missing closing quotation mark")]
    MissQuotationMark,

    /// Unknown character after a backslash (code 6)
    #[error("invalid string escape")]
    InvalidStringEscape,

    /// Raw control character inside a string (code 7)
    #[error("invalid character in string")]
    InvalidStringChar,

    /// `\u` not followed by four hex digits (code 8)
    #[error("invalid unicode hex escape")]
    InvalidUnicodeHex,

    /// Unpaired or out-of-range surrogate escape (code 9)
    #[error("invalid unicode surrogate")]
    InvalidUnicodeSurrogate,

    /// Array element not followed by `,` or `]` (code 10)
    #[error("missing comma or square bracket")]
    MissCommaOrSquareBracket,

    /// Object member does not start with a string key (code 11)
    #[error("missing object key")]
    MissKey,

    /// Object key not followed by `:` (code 12)
    #[error("missing colon")]
    MissColon,

    /// Object member not followed by `,` or `}` (code 13)
    #[error("missing comma or curly bracket")]
    MissCommaOrCurlyBracket,

    /// Arrays/objects nested deeper than allowed (code 20)
    #[error("nesting too deep ({0} > {1})")]
    NestingTooDeep(/* depth */ usize, /* limit */ usize),

    /// Input longer than allowed (code 21)
    #[error("input too large ({0} > {1})")]
    InputTooLarge(/* size */ usize, /* limit */ usize),

    /// Decoded string longer than allowed (code 22)
    #[error("string too long ({0} > {1})")]
    StringTooLong(/* length */ usize, /* limit */ usize),

    /// Array with more elements than allowed (code 23)
    #[error("array too long ({0} > {1})")]
    ArrayTooLong(/* count */ usize, /* limit */ usize),

    /// Object with more members than allowed (code 24)
    #[error("too many object fields ({0} > {1})")]
    TooManyFields(/* count */ usize, /* limit */ usize),

    /// NaN or infinity has no JSON representation (code 30)
    #[error("number is not finite")]
    NonFiniteNumber,
}

impl ErrorCode {
    /// Get the numeric error code.
    pub fn code(&self) -> u32 {
        match self {
            ErrorCode::ExpectValue => 1,
            ErrorCode::InvalidValue => 2,
            ErrorCode::RootNotSingular => 3,
            ErrorCode::NumberTooBig => 4,
            ErrorCode::MissQuotationMark => 5,
            ErrorCode::InvalidStringEscape => 6,
            ErrorCode::InvalidStringChar => 7,
            ErrorCode::InvalidUnicodeHex => 8,
            ErrorCode::InvalidUnicodeSurrogate => 9,
            ErrorCode::MissCommaOrSquareBracket => 10,
            ErrorCode::MissKey => 11,
            ErrorCode::MissColon => 12,
            ErrorCode::MissCommaOrCurlyBracket => 13,
            ErrorCode::NestingTooDeep(_, _) => 20,
            ErrorCode::InputTooLarge(_, _) => 21,
            ErrorCode::StringTooLong(_, _) => 22,
            ErrorCode::ArrayTooLong(_, _) => 23,
            ErrorCode::TooManyFields(_, _) => 24,
            ErrorCode::NonFiniteNumber => 30,
        }
    }

    /// Get the error name as a string.
    pub fn name(&self) -> &'static str {
        match self {
            ErrorCode::ExpectValue => "ExpectValue",
            ErrorCode::InvalidValue => "InvalidValue",
            ErrorCode::RootNotSingular => "RootNotSingular",
            ErrorCode::NumberTooBig => "NumberTooBig",
            ErrorCode::MissQuotationMark => "MissQuotationMark",
            ErrorCode::InvalidStringEscape => "InvalidStringEscape",
            ErrorCode::InvalidStringChar => "InvalidStringChar",
            ErrorCode::InvalidUnicodeHex => "InvalidUnicodeHex",
            ErrorCode::InvalidUnicodeSurrogate => "InvalidUnicodeSurrogate",
            ErrorCode::MissCommaOrSquareBracket => "MissCommaOrSquareBracket",
            ErrorCode::MissKey => "MissKey",
            ErrorCode::MissColon => "MissColon",
            ErrorCode::MissCommaOrCurlyBracket => "MissCommaOrCurlyBracket",
            ErrorCode::NestingTooDeep(_, _) => "NestingTooDeep",
            ErrorCode::InputTooLarge(_, _) => "InputTooLarge",
            ErrorCode::StringTooLong(_, _) => "StringTooLong",
            ErrorCode::ArrayTooLong(_, _) => "ArrayTooLong",
            ErrorCode::TooManyFields(_, _) => "TooManyFields",
            ErrorCode::NonFiniteNumber => "NonFiniteNumber",
        }
    }

    /// Returns true for errors caused by a configured limit rather than
    /// malformed input.
    pub fn is_limit(&self) -> bool {
        matches!(self.code(), 20..=24)
    }
}

/// Result type for parse and stringify operations.
pub type JsonResult<T> = Result<T, ErrorCode>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_distinct() {
        let all = [
            ErrorCode::ExpectValue,
            ErrorCode::InvalidValue,
            ErrorCode::RootNotSingular,
            ErrorCode::NumberTooBig,
            ErrorCode::MissQuotationMark,
            ErrorCode::InvalidStringEscape,
            ErrorCode::InvalidStringChar,
            ErrorCode::InvalidUnicodeHex,
            ErrorCode::InvalidUnicodeSurrogate,
            ErrorCode::MissCommaOrSquareBracket,
            ErrorCode::MissKey,
            ErrorCode::MissColon,
            ErrorCode::MissCommaOrCurlyBracket,
            ErrorCode::NestingTooDeep(0, 0),
            ErrorCode::InputTooLarge(0, 0),
            ErrorCode::StringTooLong(0, 0),
            ErrorCode::ArrayTooLong(0, 0),
            ErrorCode::TooManyFields(0, 0),
            ErrorCode::NonFiniteNumber,
        ];
        let mut codes: Vec<u32> = all.iter().map(ErrorCode::code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), all.len());
    }

    #[test]
    fn test_grammar_codes_follow_declaration_order() {
        assert_eq!(ErrorCode::ExpectValue.code(), 1);
        assert_eq!(ErrorCode::MissCommaOrCurlyBracket.code(), 13);
    }

    #[test]
    fn test_display_includes_limit_values() {
        let e = ErrorCode::NestingTooDeep(3, 2);
        assert_eq!(e.to_string(), "nesting too deep (3 > 2)");
        assert_eq!(e.name(), "NestingTooDeep");
        assert!(e.is_limit());
        assert!(!ErrorCode::MissKey.is_limit());
    }
}
