// tessera-array - Common test utilities
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Shared test helpers for the foreign export tests.
//!
//! # Usage
//!
//! ```ignore
//! mod common;
//! use common::*;
//! ```
//!
//! # Available Helpers
//!
//! - [`ints`] - Build a persistent array of ints
//! - [`export`] - Fetch a foreign export by name
//! - [`call`] - Apply a foreign export to its arguments, one at a time
//! - [`just`] / [`nothing`] - Optional-result constructors in the caller's shape
//! - [`int_comparator`] / [`int_predicate`] - Callables over int values

#[allow(unused_imports)]
pub use tessera_array::{Array, Error, Result, Tag, Value};

/// Build a persistent array of ints.
#[must_use]
#[allow(dead_code)]
pub fn ints(ns: &[i64]) -> Array {
    ns.iter().copied().map(Value::int).collect()
}

/// Build an array value of ints.
#[must_use]
#[allow(dead_code)]
pub fn int_array(ns: &[i64]) -> Value {
    Value::Array(ints(ns))
}

/// Fetch a foreign export by name, panicking when it is missing.
#[must_use]
#[allow(dead_code)]
pub fn export(name: &str) -> Value {
    tessera_array::foreign::lookup(name).unwrap_or_else(|| panic!("no export named {}", name))
}

/// Apply export `name` to `args`, one argument at a time.
#[allow(dead_code)]
pub fn call(name: &str, args: impl IntoIterator<Item = Value>) -> Result<Value> {
    export(name).call_all(args)
}

/// The caller's `just`: wraps its argument as `{ tag: "Just", value }`.
#[must_use]
#[allow(dead_code)]
pub fn just() -> Value {
    Value::native_fn("Just", |value| {
        Ok(Value::record([("tag", Value::string("Just")), ("value", value)]))
    })
}

/// The caller's `nothing`.
#[must_use]
#[allow(dead_code)]
pub fn nothing() -> Value {
    Value::record([("tag", Value::string("Nothing"))])
}

/// What [`just`] produces for `value`.
#[must_use]
#[allow(dead_code)]
pub fn just_of(value: Value) -> Value {
    Value::record([("tag", Value::string("Just")), ("value", value)])
}

/// Curried three-way comparator over ints and strings.
#[must_use]
#[allow(dead_code)]
pub fn int_comparator() -> Value {
    Value::native_fn("compare", |a| {
        Ok(Value::native_fn("compare", move |b| {
            Ok(Value::int(a.compare(&b)? as i64))
        }))
    })
}

/// Lift an int predicate into a callable returning a bool.
#[must_use]
#[allow(dead_code)]
pub fn int_predicate(f: impl Fn(i64) -> bool + 'static) -> Value {
    Value::native_fn("pred", move |x| Ok(Value::bool(f(x.extract::<i64>()?))))
}

// ============================================================================
// Assertion macros
// ============================================================================

/// Assert that calling export `name` with `args` returns `expected`.
///
/// # Example
///
/// ```ignore
/// assert_call!("length", [int_array(&[1, 2])], Value::int(2));
/// ```
#[macro_export]
macro_rules! assert_call {
    ($name:expr, $args:expr, $expected:expr) => {
        let result = $crate::common::call($name, $args);
        assert!(
            result.is_ok(),
            "Failed to call '{}': {:?}",
            $name,
            result.as_ref().err()
        );
        assert_eq!(
            result.unwrap(),
            $expected,
            "Call of '{}' did not match expected",
            $name
        );
    };
}

/// Assert that calling export `name` with `args` fails with `expected`.
#[macro_export]
macro_rules! assert_call_err {
    ($name:expr, $args:expr, $expected:expr) => {
        let result = $crate::common::call($name, $args);
        assert_eq!(
            result,
            Err($expected),
            "Call of '{}' did not fail as expected",
            $name
        );
    };
}
