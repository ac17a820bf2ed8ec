// tessera-value - Value types for Tessera
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Core value type for Tessera.
//!
//! `Value` is the tagged variant behind every array element, record field and
//! callable argument. Extraction is checked: asking for the wrong tag yields
//! [`Error::TypeMismatch`] instead of reinterpreting the payload.

use std::any::Any;
use std::cell::Cell;
use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

use im::{OrdMap, Vector};

use crate::convert::FromValue;
use crate::error::{Error, Result};

// Thread-local print settings (can be configured by the host)
thread_local! {
    /// Maximum number of array elements to print.
    /// None means unlimited, Some(n) means print at most n elements.
    static PRINT_LENGTH: Cell<Option<usize>> = const { Cell::new(None) };
}

/// Get the current print-length setting.
pub fn get_print_length() -> Option<usize> {
    PRINT_LENGTH.with(|pl| pl.get())
}

/// Set the print-length setting. Returns the previous value.
pub fn set_print_length(len: Option<usize>) -> Option<usize> {
    PRINT_LENGTH.with(|pl| pl.replace(len))
}

/// Persistent sequence of values.
///
/// Clones share structure, so a clone never observes later changes to the
/// original and vice versa.
pub type Array = Vector<Value>;

/// Mapping from text keys to values.
pub type Record = OrdMap<Rc<str>, Value>;

// ============================================================================
// Tag
// ============================================================================

/// The active variant of a [`Value`], inspectable without extracting.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum Tag {
    Unit,
    Bool,
    Int,
    Float,
    String,
    Array,
    Record,
    Fn,
    Custom,
}

impl Tag {
    /// Lowercase name used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Tag::Unit => "unit",
            Tag::Bool => "bool",
            Tag::Int => "int",
            Tag::Float => "float",
            Tag::String => "string",
            Tag::Array => "array",
            Tag::Record => "record",
            Tag::Fn => "fn",
            Tag::Custom => "custom",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Callables
// ============================================================================

/// Type alias for the body of a native callable.
pub type NativeFnImpl = dyn Fn(Value) -> Result<Value>;

/// A single-argument callable.
///
/// Multi-argument operations are curried: a callable returning another
/// callable, applied one argument at a time.
#[derive(Clone)]
pub struct NativeFn {
    name: Rc<str>,
    func: Rc<NativeFnImpl>,
}

impl NativeFn {
    /// Create a new callable.
    pub fn new(
        name: impl Into<Rc<str>>,
        func: impl Fn(Value) -> Result<Value> + 'static,
    ) -> Self {
        NativeFn {
            name: name.into(),
            func: Rc::new(func),
        }
    }

    /// Name used for display and diagnostics.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Apply to one argument.
    pub fn call(&self, arg: Value) -> Result<Value> {
        (self.func)(arg)
    }
}

impl fmt::Debug for NativeFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#<fn {}>", self.name)
    }
}

// Callables have identity equality
impl PartialEq for NativeFn {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.func, &other.func)
    }
}

// ============================================================================
// Custom host objects
// ============================================================================

/// An opaque host object carried inside a [`Value`].
///
/// Used for values the runtime needs to pass through the dynamic boundary
/// without giving them a tag of their own, such as mutable array handles.
pub trait CustomType: fmt::Debug {
    /// Name of the host type, for diagnostics.
    fn type_name(&self) -> &'static str;

    /// Downcasting hook.
    fn as_any(&self) -> &dyn Any;

    /// Render the object for `Display`.
    fn display(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// Shared reference to a host object.
#[derive(Clone, Debug)]
pub struct Custom(Rc<dyn CustomType>);

impl Custom {
    pub fn new(obj: impl CustomType + 'static) -> Self {
        Custom(Rc::new(obj))
    }

    pub fn type_name(&self) -> &'static str {
        self.0.type_name()
    }

    /// Borrow the host object as a concrete type.
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.0.as_any().downcast_ref::<T>()
    }
}

impl PartialEq for Custom {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

// ============================================================================
// Value
// ============================================================================

/// A dynamically-typed runtime value.
#[derive(Clone, Debug, Default)]
pub enum Value {
    /// Absence / unit
    #[default]
    Unit,
    /// Boolean true or false
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit floating point number
    Float(f64),
    /// Immutable text
    String(Rc<str>),
    /// Persistent sequence of values
    Array(Array),
    /// Text-keyed mapping
    Record(Record),
    /// Single-argument callable
    Fn(NativeFn),
    /// Opaque host object
    Custom(Custom),
}

impl Value {
    /// Create the unit value
    pub fn unit() -> Self {
        Value::Unit
    }

    /// Create a boolean value
    pub fn bool(b: bool) -> Self {
        Value::Bool(b)
    }

    /// Create an integer value
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    /// Create a float value
    pub fn float(n: f64) -> Self {
        Value::Float(n)
    }

    /// Create a string value
    pub fn string(s: impl Into<Rc<str>>) -> Self {
        Value::String(s.into())
    }

    /// Create an empty array
    pub fn empty_array() -> Self {
        Value::Array(Vector::new())
    }

    /// Create an array from elements
    pub fn array(elements: impl IntoIterator<Item = Value>) -> Self {
        Value::Array(elements.into_iter().collect())
    }

    /// Create a record from key-value pairs
    pub fn record<K: Into<Rc<str>>>(pairs: impl IntoIterator<Item = (K, Value)>) -> Self {
        Value::Record(pairs.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Create a callable value
    pub fn native_fn(
        name: impl Into<Rc<str>>,
        func: impl Fn(Value) -> Result<Value> + 'static,
    ) -> Self {
        Value::Fn(NativeFn::new(name, func))
    }

    /// Wrap a host object
    pub fn custom(obj: impl CustomType + 'static) -> Self {
        Value::Custom(Custom::new(obj))
    }

    /// The active tag.
    pub fn tag(&self) -> Tag {
        match self {
            Value::Unit => Tag::Unit,
            Value::Bool(_) => Tag::Bool,
            Value::Int(_) => Tag::Int,
            Value::Float(_) => Tag::Float,
            Value::String(_) => Tag::String,
            Value::Array(_) => Tag::Array,
            Value::Record(_) => Tag::Record,
            Value::Fn(_) => Tag::Fn,
            Value::Custom(_) => Tag::Custom,
        }
    }

    /// Check if this value is unit
    pub fn is_unit(&self) -> bool {
        matches!(self, Value::Unit)
    }

    /// Extract the payload as `T`, failing with `TypeMismatch` on the wrong tag.
    pub fn extract<T: FromValue>(&self) -> Result<T> {
        T::from_value(self)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(fields) => Some(fields),
            _ => None,
        }
    }

    pub fn as_fn(&self) -> Option<&NativeFn> {
        match self {
            Value::Fn(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_custom(&self) -> Option<&Custom> {
        match self {
            Value::Custom(c) => Some(c),
            _ => None,
        }
    }

    /// Look up a record field.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.as_record().and_then(|fields| fields.get(key))
    }

    /// Apply this callable to one argument.
    pub fn call(&self, arg: Value) -> Result<Value> {
        match self {
            Value::Fn(f) => f.call(arg),
            other => Err(Error::type_error_in("call", Tag::Fn, other.tag())),
        }
    }

    /// Apply a curried callable to two arguments.
    pub fn call2(&self, a: Value, b: Value) -> Result<Value> {
        self.call(a)?.call(b)
    }

    /// Apply a curried callable to each argument in turn.
    ///
    /// With no arguments the callable itself is returned.
    pub fn call_all(&self, args: impl IntoIterator<Item = Value>) -> Result<Value> {
        args.into_iter()
            .try_fold(self.clone(), |func, arg| func.call(arg))
    }

    /// Three-way comparison for ints, floats and strings.
    ///
    /// Both sides must carry the same orderable tag; anything else is a
    /// `TypeMismatch`. Floats use the IEEE total order so NaN still sorts.
    pub fn compare(&self, other: &Value) -> Result<Ordering> {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Ok(a.cmp(b)),
            (Value::Float(a), Value::Float(b)) => Ok(a.total_cmp(b)),
            (Value::String(a), Value::String(b)) => Ok(a.cmp(b)),
            (Value::Int(_) | Value::Float(_) | Value::String(_), b) => {
                Err(Error::type_error_in("compare", self.tag(), b.tag()))
            }
            (a, _) => Err(Error::type_error_in("compare", Tag::Int, a.tag())),
        }
    }
}

// ============================================================================
// Display
// ============================================================================

fn escape_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    out
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Unit => write!(f, "unit"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(n) => {
                if n.is_nan() {
                    write!(f, "NaN")
                } else if n.is_infinite() {
                    if *n > 0.0 {
                        write!(f, "Infinity")
                    } else {
                        write!(f, "-Infinity")
                    }
                } else if n.fract() == 0.0 {
                    write!(f, "{}.0", n)
                } else {
                    write!(f, "{}", n)
                }
            }
            Value::String(s) => write!(f, "\"{}\"", escape_string(s)),
            Value::Array(items) => {
                let limit = get_print_length().unwrap_or(usize::MAX);
                write!(f, "[")?;
                for (i, item) in items.iter().take(limit).enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                if items.len() > limit {
                    if limit > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "...")?;
                }
                write!(f, "]")
            }
            Value::Record(fields) => {
                if fields.is_empty() {
                    return write!(f, "{{}}");
                }
                write!(f, "{{ ")?;
                for (i, (k, v)) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", k, v)?;
                }
                write!(f, " }}")
            }
            Value::Fn(func) => write!(f, "<fn {}>", func.name()),
            Value::Custom(obj) => obj.0.display(f),
        }
    }
}

// ============================================================================
// Equality
// ============================================================================

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Unit, Value::Unit) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            // Bitwise, so equality stays reflexive for NaN
            (Value::Float(a), Value::Float(b)) => a.to_bits() == b.to_bits(),
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Record(a), Value::Record(b)) => a == b,
            (Value::Fn(a), Value::Fn(b)) => a == b,
            (Value::Custom(a), Value::Custom(b)) => a == b,
            _ => false,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags() {
        assert_eq!(Value::unit().tag(), Tag::Unit);
        assert_eq!(Value::bool(true).tag(), Tag::Bool);
        assert_eq!(Value::int(1).tag(), Tag::Int);
        assert_eq!(Value::float(1.5).tag(), Tag::Float);
        assert_eq!(Value::string("a").tag(), Tag::String);
        assert_eq!(Value::empty_array().tag(), Tag::Array);
        assert_eq!(Value::record(Vec::<(&str, Value)>::new()).tag(), Tag::Record);
        assert_eq!(Value::native_fn("id", Ok).tag(), Tag::Fn);
    }

    #[test]
    fn test_float_display() {
        assert_eq!(Value::float(3.25).to_string(), "3.25");
        assert_eq!(Value::float(42.0).to_string(), "42.0");
        assert_eq!(Value::float(f64::INFINITY).to_string(), "Infinity");
        assert_eq!(Value::float(f64::NEG_INFINITY).to_string(), "-Infinity");
        assert_eq!(Value::float(f64::NAN).to_string(), "NaN");
    }

    #[test]
    fn test_string_display() {
        assert_eq!(Value::string("hello").to_string(), "\"hello\"");
        assert_eq!(Value::string("a\nb").to_string(), "\"a\\nb\"");
    }

    #[test]
    fn test_array_display() {
        let val = Value::array([Value::int(1), Value::int(2), Value::int(3)]);
        assert_eq!(val.to_string(), "[1, 2, 3]");
        assert_eq!(Value::empty_array().to_string(), "[]");
    }

    #[test]
    fn test_array_display_respects_print_length() {
        let val = Value::array((1..=5).map(Value::int));
        let previous = set_print_length(Some(2));
        assert_eq!(val.to_string(), "[1, 2, ...]");
        set_print_length(Some(0));
        assert_eq!(val.to_string(), "[...]");
        set_print_length(previous);
        assert_eq!(val.to_string(), "[1, 2, 3, 4, 5]");
    }

    #[test]
    fn test_record_display() {
        let rec = Value::record([("value", Value::int(7)), ("index", Value::int(0))]);
        assert_eq!(rec.to_string(), "{ index: 0, value: 7 }");
        assert_eq!(Value::record(Vec::<(&str, Value)>::new()).to_string(), "{}");
    }

    #[test]
    fn test_equality() {
        assert_eq!(Value::int(42), Value::int(42));
        assert_ne!(Value::int(42), Value::int(43));
        assert_eq!(Value::unit(), Value::unit());
        assert_ne!(Value::unit(), Value::bool(false));
        // No numeric coercion across tags
        assert_ne!(Value::int(1), Value::float(1.0));
        assert_eq!(Value::float(f64::NAN), Value::float(f64::NAN));
        assert_eq!(
            Value::array([Value::int(1), Value::string("x")]),
            Value::array([Value::int(1), Value::string("x")])
        );
    }

    #[test]
    fn test_fn_identity_equality() {
        let f = Value::native_fn("id", Ok);
        let g = Value::native_fn("id", Ok);
        assert_eq!(f, f.clone());
        assert_ne!(f, g);
    }

    #[test]
    fn test_compare() {
        assert_eq!(Value::int(1).compare(&Value::int(2)), Ok(Ordering::Less));
        assert_eq!(
            Value::string("b").compare(&Value::string("a")),
            Ok(Ordering::Greater)
        );
        assert_eq!(
            Value::float(2.0).compare(&Value::float(2.0)),
            Ok(Ordering::Equal)
        );
    }

    #[test]
    fn test_compare_across_tags_fails() {
        assert_eq!(
            Value::int(1).compare(&Value::float(1.0)),
            Err(Error::type_error_in("compare", Tag::Int, Tag::Float))
        );
        assert_eq!(
            Value::bool(true).compare(&Value::bool(false)),
            Err(Error::type_error_in("compare", Tag::Int, Tag::Bool))
        );
    }

    #[test]
    fn test_call_curried() {
        let add = Value::native_fn("add", |a| {
            let a: i64 = a.extract()?;
            Ok(Value::native_fn("add", move |b| Ok(Value::int(a + b.extract::<i64>()?))))
        });
        assert_eq!(add.call2(Value::int(2), Value::int(3)), Ok(Value::int(5)));
        assert_eq!(
            add.call_all([Value::int(4), Value::int(5)]),
            Ok(Value::int(9))
        );
        assert_eq!(
            Value::int(3).call(Value::unit()),
            Err(Error::type_error_in("call", Tag::Fn, Tag::Int))
        );
    }
}
