//! Resource limits for JSON parsing.
//!
//! The parser is recursive, so nesting depth is bounded by default to turn
//! pathological input into [`ErrorCode::NestingTooDeep`](crate::ErrorCode)
//! instead of a stack overflow. The remaining limits guard against
//! oversized documents when parsing untrusted input.

/// Configurable limits applied by [`Parser`](crate::Parser).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum total input size in bytes
    pub max_input_size: usize,
    /// Maximum number of arrays/objects open at once
    pub max_nesting_depth: usize,
    /// Maximum decoded string length in bytes
    pub max_string_length: usize,
    /// Maximum number of elements in one array
    pub max_array_length: usize,
    /// Maximum number of members in one object
    pub max_object_fields: usize,
}

impl Limits {
    /// General purpose defaults.
    ///
    /// Only depth, input size and string length are bounded.
    pub const fn new() -> Self {
        Self {
            max_input_size: 64 * 1024 * 1024,    // 64 MiB
            max_nesting_depth: 512,              // 512 levels
            max_string_length: 16 * 1024 * 1024, // 16 MiB
            max_array_length: usize::MAX,
            max_object_fields: usize::MAX,
        }
    }

    /// Tight limits for untrusted input.
    pub const fn strict() -> Self {
        Self {
            max_input_size: 1024 * 1024,  // 1 MiB
            max_nesting_depth: 64,        // 64 levels
            max_string_length: 64 * 1024, // 64 KiB
            max_array_length: 10_000,     // 10,000 elements
            max_object_fields: 1024,      // 1024 fields
        }
    }

    /// No limits at all.
    ///
    /// Deeply nested input can exhaust the call stack with these settings.
    pub const fn unbounded() -> Self {
        Self {
            max_input_size: usize::MAX,
            max_nesting_depth: usize::MAX,
            max_string_length: usize::MAX,
            max_array_length: usize::MAX,
            max_object_fields: usize::MAX,
        }
    }

    /// Returns a copy with a different nesting depth limit.
    pub const fn with_max_nesting_depth(mut self, depth: usize) -> Self {
        self.max_nesting_depth = depth;
        self
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::new()
    }
}
