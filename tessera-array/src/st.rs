// tessera-array - Region-scoped mutable arrays
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Mutable arrays confined to a single owner.
//!
//! A [`MutableArray`] is the only place Tessera mutates an array in place.
//! It is created empty, pre-filled, or by thawing a persistent array, then
//! mutated through `poke`, `push_all` and `splice`. It leaves its region in
//! one of three ways:
//!
//! - [`MutableArray::copy`] snapshots the contents and keeps the region live,
//! - [`MutableArray::freeze`] consumes the region and returns its storage,
//! - [`MutableArray::discard`] (or simply dropping it) throws it away.
//!
//! The type is not `Clone`, and `freeze`/`discard` take `self`, so two live
//! handles over one storage and use-after-freeze cannot be written. The
//! runtime-checked equivalent for handles passed through [`Value`] lives in
//! [`crate::handle`].

use im::Vector;
use tessera_value::{Array, Error, Result, Value};

/// A mutable array owned by exactly one region.
///
/// Storage is a persistent vector mutated in place. Thawing shares structure
/// with the source and copies a chunk only when it is first written, so the
/// source array never observes the mutation.
#[derive(Debug, Default)]
pub struct MutableArray {
    items: Array,
}

impl MutableArray {
    /// Create an empty region array.
    pub fn new() -> Self {
        tracing::trace!("region array allocated empty");
        MutableArray {
            items: Vector::new(),
        }
    }

    /// Allocate `len` slots, each holding `fill`.
    pub fn with_len(len: i64, fill: Value) -> Result<Self> {
        let count = usize::try_from(len).map_err(|_| Error::NegativeLength { length: len })?;
        tracing::trace!(len = count, "region array allocated");
        Ok(MutableArray {
            items: std::iter::repeat_n(fill, count).collect(),
        })
    }

    /// Start a region from a copy of a persistent array.
    pub fn thaw(xs: &Array) -> Self {
        tracing::trace!(len = xs.len(), "region array thawed");
        MutableArray { items: xs.clone() }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Bounds-checked read.
    pub fn peek(&self, i: i64) -> Option<Value> {
        usize::try_from(i)
            .ok()
            .and_then(|i| self.items.get(i))
            .cloned()
    }

    /// Bounds-checked write. Returns false, leaving the array unchanged, when
    /// `i` is outside `0..len`.
    pub fn poke(&mut self, i: i64, value: Value) -> bool {
        match usize::try_from(i).ok().and_then(|i| self.items.get_mut(i)) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Append one value. Returns the new length.
    pub fn push(&mut self, value: Value) -> usize {
        self.items.push_back(value);
        self.items.len()
    }

    /// Append every value, in order. Returns the new length.
    pub fn push_all(&mut self, values: &Array) -> usize {
        self.items.append(values.clone());
        self.items.len()
    }

    /// Remove `how_many` elements starting at `i` and insert `insert` in
    /// their place. Returns the removed elements.
    ///
    /// `how_many` is clamped to the elements remaining after `i`, and a
    /// negative count removes nothing. An `i` beyond the end appends.
    pub fn splice(&mut self, i: i64, how_many: i64, insert: &Array) -> Result<Array> {
        let start = usize::try_from(i).map_err(|_| Error::NegativeIndex { index: i })?;
        let start = start.min(self.items.len());
        let count = usize::try_from(how_many)
            .unwrap_or(0)
            .min(self.items.len() - start);

        let mut removed = self.items.split_off(start);
        let rest = removed.split_off(count);
        self.items.append(insert.clone());
        self.items.append(rest);

        Ok(removed)
    }

    /// Snapshot the current contents. The region stays usable.
    pub fn copy(&self) -> Array {
        self.items.clone()
    }

    /// End the region, handing its storage back as a persistent array.
    pub fn freeze(self) -> Array {
        tracing::debug!(len = self.items.len(), "region array frozen");
        self.items
    }

    /// End the region without producing a value.
    pub fn discard(self) {
        tracing::debug!(len = self.items.len(), "region array discarded");
    }

    /// Snapshot as `{ value, index }` records, one per element.
    pub fn to_indexed_pairs(&self) -> Array {
        self.items
            .iter()
            .enumerate()
            .map(|(i, v)| Value::record([("value", v.clone()), ("index", Value::int(i as i64))]))
            .collect()
    }
}

/// Build a persistent array inside a fresh region.
///
/// `f` receives the only handle; the region is frozen when it returns.
pub fn run<F>(f: F) -> Result<Array>
where
    F: FnOnce(&mut MutableArray) -> Result<()>,
{
    let mut region = MutableArray::new();
    f(&mut region)?;
    Ok(region.freeze())
}

/// Mutate a copy of `xs` inside a region and freeze the result.
///
/// `xs` itself is left untouched.
pub fn with_array<F>(xs: &Array, f: F) -> Result<Array>
where
    F: FnOnce(&mut MutableArray) -> Result<()>,
{
    let mut region = MutableArray::thaw(xs);
    f(&mut region)?;
    Ok(region.freeze())
}
