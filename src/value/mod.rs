//! In-memory JSON value tree.
//!
//! A [`Value`] exclusively owns its payload. Cloning deep-copies the whole
//! subtree; [`Value::take`] moves the payload out and leaves `Null` behind.
//!
//! # Equality
//!
//! `PartialEq` compares arrays as multisets (element order is ignored) and
//! objects by key lookup (member order is ignored). Use
//! [`Value::eq_with`] with [`ArrayOrder::Ordered`] for order-sensitive
//! array comparison.

mod array;
mod object;
mod string;

use std::fmt;
use std::mem;

pub use array::Array;
pub use object::{Member, Object};
pub use string::JsonString;

/// How arrays are compared for equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArrayOrder {
    /// Same elements with the same multiplicities, in any order
    #[default]
    Unordered,
    /// Same elements at the same positions
    Ordered,
}

/// The seven JSON node types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// `null`
    Null,
    /// `true`
    True,
    /// `false`
    False,
    /// number
    Number,
    /// string
    String,
    /// array
    Array,
    /// object
    Object,
}

impl ValueType {
    /// Lowercase type name for messages.
    pub fn name(self) -> &'static str {
        match self {
            ValueType::Null => "null",
            ValueType::True => "true",
            ValueType::False => "false",
            ValueType::Number => "number",
            ValueType::String => "string",
            ValueType::Array => "array",
            ValueType::Object => "object",
        }
    }
}

/// A JSON value.
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// JSON null literal
    #[default]
    Null,
    /// JSON boolean (true/false)
    Bool(bool),
    /// JSON number as a 64-bit float
    Number(f64),
    /// JSON string
    String(JsonString),
    /// JSON array
    Array(Array),
    /// JSON object
    Object(Object),
}

impl Value {
    /// The node type of this value.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Null => ValueType::Null,
            Value::Bool(true) => ValueType::True,
            Value::Bool(false) => ValueType::False,
            Value::Number(_) => ValueType::Number,
            Value::String(_) => ValueType::String,
            Value::Array(_) => ValueType::Array,
            Value::Object(_) => ValueType::Object,
        }
    }

    /// Returns true if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true if this is a boolean value.
    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns true if this is a number value.
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Returns true if this is a string value.
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns true if this is an array value.
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Returns true if this is an object value.
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Returns the boolean value if this is a Bool, None otherwise.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the number if this is a Number, None otherwise.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the string contents if this is a String, None otherwise.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Returns the string payload if this is a String, None otherwise.
    pub fn as_string(&self) -> Option<&JsonString> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns a reference to the array if this is an Array, None otherwise.
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Mutable access to the array payload.
    pub fn as_array_mut(&mut self) -> Option<&mut Array> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Returns a reference to the object if this is an Object, None otherwise.
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Mutable access to the object payload.
    pub fn as_object_mut(&mut self) -> Option<&mut Object> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Get a value from an object by key (last matching member).
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|o| o.get(key))
    }

    /// Get a value from an array by index.
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        self.as_array().and_then(|a| a.get(index))
    }

    /// Byte length of a string, element count of an array, member count of
    /// an object; 0 for everything else.
    pub fn len(&self) -> usize {
        match self {
            Value::String(s) => s.len(),
            Value::Array(a) => a.len(),
            Value::Object(o) => o.len(),
            _ => 0,
        }
    }

    /// Returns true when [`len`](Self::len) is 0.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Replace with `null`, releasing any payload.
    pub fn set_null(&mut self) {
        *self = Value::Null;
    }

    /// Replace with a boolean.
    pub fn set_bool(&mut self, b: bool) {
        *self = Value::Bool(b);
    }

    /// Replace with a number.
    pub fn set_number(&mut self, n: f64) {
        *self = Value::Number(n);
    }

    /// Replace with a string.
    pub fn set_string(&mut self, s: impl Into<JsonString>) {
        *self = Value::String(s.into());
    }

    /// Replace with an array.
    pub fn set_array(&mut self, a: Array) {
        *self = Value::Array(a);
    }

    /// Replace with an object.
    pub fn set_object(&mut self, o: Object) {
        *self = Value::Object(o);
    }

    /// Move the value out, leaving `null` in its place.
    pub fn take(&mut self) -> Value {
        mem::take(self)
    }

    /// Exchange two values without copying payloads.
    pub fn swap(&mut self, other: &mut Value) {
        mem::swap(self, other);
    }

    /// Structural equality with an explicit array ordering rule.
    pub fn eq_with(&self, other: &Value, order: ArrayOrder) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a.eq_with(b, order),
            (Value::Object(a), Value::Object(b)) => a.eq_with(b, order),
            _ => false,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.eq_with(other, ArrayOrder::Unordered)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = crate::serializer::to_string_lossy(self);
        f.write_str(&text)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s.into())
    }
}

impl From<JsonString> for Value {
    fn from(s: JsonString) -> Self {
        Value::String(s)
    }
}

impl From<Array> for Value {
    fn from(a: Array) -> Self {
        Value::Array(a)
    }
}

impl From<Object> for Value {
    fn from(o: Object) -> Self {
        Value::Object(o)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items.into())
    }
}
