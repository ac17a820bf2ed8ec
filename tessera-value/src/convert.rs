// tessera-value - Type conversion traits
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Type conversion between Rust and Tessera values.
//!
//! [`FromValue`] is the checked extraction behind [`Value::extract`];
//! [`IntoValue`] goes the other way.
//!
//! | Rust Type | Tag |
//! |-----------|-----|
//! | `()` | `unit` |
//! | `bool` | `bool` |
//! | `i32`, `i64`, `usize` | `int` |
//! | `f64` | `float` |
//! | `String`, `&str`, `Rc<str>` | `string` |
//! | `Array`, `Vec<T>` | `array` |
//! | `Record` | `record` |
//! | `NativeFn` | `fn` |
//! | `Option<T>` | `T` or `unit` |

use std::rc::Rc;

use crate::error::{Error, Result};
use crate::value::{Array, NativeFn, Record, Tag, Value};

/// Convert a Rust type into a `Value`.
pub trait IntoValue {
    fn into_value(self) -> Value;
}

/// Convert a `Value` into a Rust type.
pub trait FromValue: Sized {
    fn from_value(val: &Value) -> Result<Self>;
}

/// Convert any `IntoValue` into a `Value`.
pub fn to_value<T: IntoValue>(val: T) -> Value {
    val.into_value()
}

/// Convert a `Value` into any `FromValue`.
pub fn from_value<T: FromValue>(val: &Value) -> Result<T> {
    T::from_value(val)
}

// ============================================================================
// IntoValue implementations
// ============================================================================

impl IntoValue for Value {
    fn into_value(self) -> Value {
        self
    }
}

impl IntoValue for () {
    fn into_value(self) -> Value {
        Value::Unit
    }
}

impl IntoValue for bool {
    fn into_value(self) -> Value {
        Value::Bool(self)
    }
}

impl IntoValue for i64 {
    fn into_value(self) -> Value {
        Value::int(self)
    }
}

impl IntoValue for i32 {
    fn into_value(self) -> Value {
        Value::int(self as i64)
    }
}

impl IntoValue for usize {
    fn into_value(self) -> Value {
        Value::int(self as i64)
    }
}

impl IntoValue for f64 {
    fn into_value(self) -> Value {
        Value::float(self)
    }
}

impl IntoValue for String {
    fn into_value(self) -> Value {
        Value::string(self)
    }
}

impl IntoValue for &str {
    fn into_value(self) -> Value {
        Value::string(self)
    }
}

impl IntoValue for Rc<str> {
    fn into_value(self) -> Value {
        Value::String(self)
    }
}

impl IntoValue for Array {
    fn into_value(self) -> Value {
        Value::Array(self)
    }
}

impl IntoValue for Record {
    fn into_value(self) -> Value {
        Value::Record(self)
    }
}

impl IntoValue for NativeFn {
    fn into_value(self) -> Value {
        Value::Fn(self)
    }
}

impl<T: IntoValue> IntoValue for Vec<T> {
    fn into_value(self) -> Value {
        Value::array(self.into_iter().map(IntoValue::into_value))
    }
}

impl<T: IntoValue> IntoValue for Option<T> {
    fn into_value(self) -> Value {
        match self {
            Some(v) => v.into_value(),
            None => Value::Unit,
        }
    }
}

// ============================================================================
// FromValue implementations
// ============================================================================

impl FromValue for Value {
    fn from_value(val: &Value) -> Result<Self> {
        Ok(val.clone())
    }
}

impl FromValue for () {
    fn from_value(val: &Value) -> Result<Self> {
        match val {
            Value::Unit => Ok(()),
            other => Err(Error::type_error(Tag::Unit, other.tag())),
        }
    }
}

impl FromValue for bool {
    fn from_value(val: &Value) -> Result<Self> {
        match val {
            Value::Bool(b) => Ok(*b),
            other => Err(Error::type_error(Tag::Bool, other.tag())),
        }
    }
}

impl FromValue for i64 {
    fn from_value(val: &Value) -> Result<Self> {
        match val {
            Value::Int(n) => Ok(*n),
            other => Err(Error::type_error(Tag::Int, other.tag())),
        }
    }
}

impl FromValue for f64 {
    fn from_value(val: &Value) -> Result<Self> {
        match val {
            Value::Float(n) => Ok(*n),
            other => Err(Error::type_error(Tag::Float, other.tag())),
        }
    }
}

impl FromValue for Rc<str> {
    fn from_value(val: &Value) -> Result<Self> {
        match val {
            Value::String(s) => Ok(Rc::clone(s)),
            other => Err(Error::type_error(Tag::String, other.tag())),
        }
    }
}

impl FromValue for String {
    fn from_value(val: &Value) -> Result<Self> {
        match val {
            Value::String(s) => Ok(s.to_string()),
            other => Err(Error::type_error(Tag::String, other.tag())),
        }
    }
}

impl FromValue for Array {
    fn from_value(val: &Value) -> Result<Self> {
        match val {
            Value::Array(items) => Ok(items.clone()),
            other => Err(Error::type_error(Tag::Array, other.tag())),
        }
    }
}

impl FromValue for Record {
    fn from_value(val: &Value) -> Result<Self> {
        match val {
            Value::Record(fields) => Ok(fields.clone()),
            other => Err(Error::type_error(Tag::Record, other.tag())),
        }
    }
}

impl FromValue for NativeFn {
    fn from_value(val: &Value) -> Result<Self> {
        match val {
            Value::Fn(f) => Ok(f.clone()),
            other => Err(Error::type_error(Tag::Fn, other.tag())),
        }
    }
}

impl<T: FromValue> FromValue for Vec<T> {
    fn from_value(val: &Value) -> Result<Self> {
        match val {
            Value::Array(items) => items.iter().map(T::from_value).collect(),
            other => Err(Error::type_error(Tag::Array, other.tag())),
        }
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(val: &Value) -> Result<Self> {
        match val {
            Value::Unit => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_matching_tag() {
        assert_eq!(Value::int(7).extract::<i64>(), Ok(7));
        assert_eq!(Value::bool(true).extract::<bool>(), Ok(true));
        assert_eq!(Value::float(0.5).extract::<f64>(), Ok(0.5));
        assert_eq!(Value::string("hi").extract::<String>(), Ok("hi".to_string()));
        assert_eq!(Value::unit().extract::<()>(), Ok(()));
    }

    #[test]
    fn test_extract_wrong_tag() {
        assert_eq!(
            Value::string("7").extract::<i64>(),
            Err(Error::type_error(Tag::Int, Tag::String))
        );
        // No coercion between numeric tags
        assert_eq!(
            Value::int(1).extract::<f64>(),
            Err(Error::type_error(Tag::Float, Tag::Int))
        );
        assert_eq!(
            Value::unit().extract::<Array>(),
            Err(Error::type_error(Tag::Array, Tag::Unit))
        );
    }

    #[test]
    fn test_vec_conversion() {
        let val = vec![1i64, 2, 3].into_value();
        assert_eq!(val.to_string(), "[1, 2, 3]");
        assert_eq!(val.extract::<Vec<i64>>(), Ok(vec![1, 2, 3]));

        let mixed = Value::array([Value::int(1), Value::bool(false)]);
        assert_eq!(
            mixed.extract::<Vec<i64>>(),
            Err(Error::type_error(Tag::Int, Tag::Bool))
        );
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(None::<i64>.into_value(), Value::Unit);
        assert_eq!(Some(3i64).into_value(), Value::int(3));
        assert_eq!(Value::unit().extract::<Option<i64>>(), Ok(None));
        assert_eq!(Value::int(4).extract::<Option<i64>>(), Ok(Some(4)));
    }
}
