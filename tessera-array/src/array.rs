// tessera-array - Persistent array operations
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Persistent array operations: range, cons, index, filter, sort, slice, etc.
//!
//! Every function returns a new [`Array`]; inputs are never modified.
//! Indexed lookups and updates that can miss return `Option`. Operations
//! taking callbacks stop at the first callback error and return it.

use std::cmp::Ordering;

use im::Vector;
use tessera_value::{Array, Error, Result, Tag, Value};

/// Convert a signed index into a position below `len`.
fn checked_index(i: i64, len: usize) -> Option<usize> {
    usize::try_from(i).ok().filter(|&i| i < len)
}

/// Clamp a signed bound into `0..=len`.
fn clamp_bound(i: i64, len: usize) -> usize {
    usize::try_from(i).map_or(0, |i| i.min(len))
}

// ============================================================================
// Array creation
// ============================================================================

/// Consecutive integers from `start` to `end`, both inclusive.
///
/// Counts down when `start > end`, so the last element is always `end`.
pub fn range(start: i64, end: i64) -> Array {
    if start <= end {
        (start..=end).map(Value::int).collect()
    } else {
        (end..=start).rev().map(Value::int).collect()
    }
}

/// `n` copies of `value`; empty when `n <= 0`.
pub fn replicate(n: i64, value: &Value) -> Array {
    let count = usize::try_from(n).unwrap_or(0);
    std::iter::repeat_n(value.clone(), count).collect()
}

// ============================================================================
// Array size
// ============================================================================

pub fn length(xs: &Array) -> usize {
    xs.len()
}

// ============================================================================
// Extending arrays
// ============================================================================

pub fn cons(head: Value, xs: &Array) -> Array {
    let mut items = xs.clone();
    items.push_front(head);
    items
}

pub fn snoc(xs: &Array, last: Value) -> Array {
    let mut items = xs.clone();
    items.push_back(last);
    items
}

// ============================================================================
// Non-indexed reads
// ============================================================================

/// Dispatch on whether `xs` is empty.
///
/// Calls `on_empty` for an empty array, otherwise `on_split` with the head
/// and the remaining elements.
pub fn uncons<R>(
    xs: &Array,
    on_empty: impl FnOnce() -> R,
    on_split: impl FnOnce(Value, Array) -> R,
) -> R {
    let mut tail = xs.clone();
    match tail.pop_front() {
        None => on_empty(),
        Some(head) => on_split(head, tail),
    }
}

// ============================================================================
// Indexed operations
// ============================================================================

/// Element at `i`, or `None` outside `0..length`.
pub fn index(xs: &Array, i: i64) -> Option<Value> {
    checked_index(i, xs.len()).map(|i| xs[i].clone())
}

/// First index whose element satisfies `pred`, scanning forward.
pub fn find_index<F>(xs: &Array, mut pred: F) -> Result<Option<usize>>
where
    F: FnMut(&Value) -> Result<bool>,
{
    for (i, item) in xs.iter().enumerate() {
        if pred(item)? {
            return Ok(Some(i));
        }
    }
    Ok(None)
}

/// Last index whose element satisfies `pred`, scanning backward.
pub fn find_last_index<F>(xs: &Array, mut pred: F) -> Result<Option<usize>>
where
    F: FnMut(&Value) -> Result<bool>,
{
    for i in (0..xs.len()).rev() {
        if pred(&xs[i])? {
            return Ok(Some(i));
        }
    }
    Ok(None)
}

/// Insert `a` before position `i`; valid for `0..=length`.
pub fn insert_at(xs: &Array, i: i64, a: Value) -> Option<Array> {
    let i = usize::try_from(i).ok().filter(|&i| i <= xs.len())?;
    let mut items = xs.clone();
    items.insert(i, a);
    Some(items)
}

/// Remove the element at `i`; valid for `0..length`.
pub fn delete_at(xs: &Array, i: i64) -> Option<Array> {
    let i = checked_index(i, xs.len())?;
    let mut items = xs.clone();
    items.remove(i);
    Some(items)
}

/// Replace the element at `i`; valid for `0..length`.
pub fn update_at(xs: &Array, i: i64, a: Value) -> Option<Array> {
    let i = checked_index(i, xs.len())?;
    Some(xs.update(i, a))
}

// ============================================================================
// Transformations
// ============================================================================

pub fn reverse(xs: &Array) -> Array {
    xs.iter().rev().cloned().collect()
}

/// Flatten an array of arrays, preserving order.
///
/// Every element of `xss` must itself be an array.
pub fn concat(xss: &Array) -> Result<Array> {
    let mut result = Vector::new();
    for xs in xss.iter() {
        match xs {
            Value::Array(items) => result.append(items.clone()),
            other => return Err(Error::type_error_in("concat", Tag::Array, other.tag())),
        }
    }
    Ok(result)
}

/// Elements satisfying `pred`, in their original order.
pub fn filter<F>(xs: &Array, mut pred: F) -> Result<Array>
where
    F: FnMut(&Value) -> Result<bool>,
{
    let mut result = Vector::new();
    for item in xs.iter() {
        if pred(item)? {
            result.push_back(item.clone());
        }
    }
    Ok(result)
}

// ============================================================================
// Sorting
// ============================================================================

/// Stable sort driven by a three-way comparator.
///
/// `Ordering::Less` places the left argument first, so a comparator that
/// mirrors `Ord::cmp` sorts ascending. Equal elements keep their relative
/// order.
pub fn sort_by<F>(xs: &Array, mut cmp: F) -> Result<Array>
where
    F: FnMut(&Value, &Value) -> Result<Ordering>,
{
    let items: Vec<Value> = xs.iter().cloned().collect();
    Ok(merge_sort(items, &mut cmp)?.into_iter().collect())
}

/// Ascending sort using [`Value::compare`].
///
/// All elements must share one orderable tag (int, float or string).
pub fn sort(xs: &Array) -> Result<Array> {
    sort_by(xs, |a, b| a.compare(b))
}

// `slice::sort_by` cannot abort on a failing comparator, so merge by hand.
fn merge_sort<F>(mut items: Vec<Value>, cmp: &mut F) -> Result<Vec<Value>>
where
    F: FnMut(&Value, &Value) -> Result<Ordering>,
{
    if items.len() <= 1 {
        return Ok(items);
    }

    let right = items.split_off(items.len() / 2);
    let left = merge_sort(items, cmp)?;
    let right = merge_sort(right, cmp)?;

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        // Take from the right only when strictly smaller, for stability
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => cmp(l, r)? == Ordering::Greater,
            _ => break,
        };
        let next = if take_right { right.next() } else { left.next() };
        merged.extend(next);
    }
    merged.extend(left);
    merged.extend(right);

    Ok(merged)
}

// ============================================================================
// Subarrays
// ============================================================================

/// Elements in `[start, end)` after clamping both bounds into `0..=length`.
///
/// Out-of-range bounds are clamped, but a clamped `start` past the clamped
/// `end` describes a negative length and is rejected.
pub fn slice(xs: &Array, start: i64, end: i64) -> Result<Array> {
    let start = clamp_bound(start, xs.len());
    let end = clamp_bound(end, xs.len());
    if start > end {
        return Err(Error::NegativeLength {
            length: end as i64 - start as i64,
        });
    }
    Ok(xs.skip(start).take(end - start))
}

/// Everything after the first `n` elements.
pub fn drop(xs: &Array, n: i64) -> Result<Array> {
    let n = usize::try_from(n).map_err(|_| Error::NegativeLength { length: n })?;
    if n >= xs.len() {
        Ok(Vector::new())
    } else {
        Ok(xs.skip(n))
    }
}

// ============================================================================
// Zipping
// ============================================================================

/// Combine elements pairwise; surplus elements of the longer input are ignored.
pub fn zip_with<F>(xs: &Array, ys: &Array, mut f: F) -> Result<Array>
where
    F: FnMut(&Value, &Value) -> Result<Value>,
{
    xs.iter().zip(ys.iter()).map(|(x, y)| f(x, y)).collect()
}

// ============================================================================
// Tests
// ============================================================================
