// tessera-array - Unchecked array access
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Indexing for call sites that have already established the bounds.
//!
//! Unlike [`crate::array::index`], a miss here is the caller's bug and is
//! reported as `IndexOutOfRange` rather than as an absent result.

use tessera_value::{Array, Error, Result, Value};

pub fn unsafe_index(xs: &Array, i: i64) -> Result<Value> {
    usize::try_from(i)
        .ok()
        .and_then(|n| xs.get(n))
        .cloned()
        .ok_or(Error::IndexOutOfRange {
            index: i,
            length: xs.len(),
        })
}
