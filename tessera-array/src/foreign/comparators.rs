// tessera-array - Comparator utilities for sorting
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Calling caller-supplied comparators.

use std::cmp::Ordering;

use tessera_value::{Error, Result, Tag, Value};

/// Call a curried three-way comparator and return its `Ordering`.
///
/// The comparator returns an int: negative when `a` sorts before `b`, zero
/// when they are equal, positive otherwise.
pub fn call_comparator(comp: &Value, a: &Value, b: &Value) -> Result<Ordering> {
    match comp.call2(a.clone(), b.clone())? {
        Value::Int(n) => Ok(n.cmp(&0)),
        other => Err(Error::type_error_in(
            "comparator result",
            Tag::Int,
            other.tag(),
        )),
    }
}
