// tessera-array - Persistent array exports
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Foreign exports over persistent arrays.

use tessera_value::{Array, Record, Result, Value};

use super::{arg, call_comparator, define, fn1, fn2, fn3, fn4, fn5, optional, predicate};
use crate::array;
use crate::unsafe_ops;

pub(super) fn register(exports: &mut Record) {
    // Creation
    define(exports, "range", fn2("range", foreign_range));
    define(exports, "replicate", fn2("replicate", foreign_replicate));

    // Size and ends
    define(exports, "length", fn1("length", foreign_length));
    define(exports, "cons", fn2("cons", foreign_cons));
    define(exports, "snoc", fn2("snoc", foreign_snoc));
    define(exports, "uncons", fn3("uncons", foreign_uncons));

    // Indexed access
    define(exports, "indexImpl", fn4("indexImpl", foreign_index));
    define(exports, "findIndexImpl", fn4("findIndexImpl", foreign_find_index));
    define(
        exports,
        "findLastIndexImpl",
        fn4("findLastIndexImpl", foreign_find_last_index),
    );
    define(exports, "insertAt", fn5("insertAt", foreign_insert_at));
    define(exports, "deleteAt", fn4("deleteAt", foreign_delete_at));
    define(exports, "updateAt", fn5("updateAt", foreign_update_at));
    define(exports, "unsafeIndex", fn2("unsafeIndex", foreign_unsafe_index));

    // Transformations
    define(exports, "reverse", fn1("reverse", foreign_reverse));
    define(exports, "concat", fn1("concat", foreign_concat));
    define(exports, "filter", fn2("filter", foreign_filter));
    define(exports, "sortImpl", fn2("sortImpl", foreign_sort));
    define(exports, "slice", fn3("slice", foreign_slice));
    define(exports, "drop", fn2("drop", foreign_drop));
    define(exports, "zipWith", fn3("zipWith", foreign_zip_with));
}

// ============================================================================
// Creation
// ============================================================================

fn foreign_range(start: Value, end: Value) -> Result<Value> {
    let start: i64 = arg(&start, "range")?;
    let end: i64 = arg(&end, "range")?;
    Ok(Value::Array(array::range(start, end)))
}

fn foreign_replicate(n: Value, value: Value) -> Result<Value> {
    let n: i64 = arg(&n, "replicate")?;
    Ok(Value::Array(array::replicate(n, &value)))
}

// ============================================================================
// Size and ends
// ============================================================================

fn foreign_length(xs: Value) -> Result<Value> {
    let xs: Array = arg(&xs, "length")?;
    Ok(Value::int(array::length(&xs) as i64))
}

fn foreign_cons(head: Value, xs: Value) -> Result<Value> {
    let xs: Array = arg(&xs, "cons")?;
    Ok(Value::Array(array::cons(head, &xs)))
}

fn foreign_snoc(xs: Value, last: Value) -> Result<Value> {
    let xs: Array = arg(&xs, "snoc")?;
    Ok(Value::Array(array::snoc(&xs, last)))
}

/// `empty` is called with unit; `next` is called with the head, then the tail.
fn foreign_uncons(empty: Value, next: Value, xs: Value) -> Result<Value> {
    let xs: Array = arg(&xs, "uncons")?;
    array::uncons(
        &xs,
        || empty.call(Value::unit()),
        |head, tail| next.call2(head, Value::Array(tail)),
    )
}

// ============================================================================
// Indexed access
// ============================================================================

fn foreign_index(just: Value, nothing: Value, xs: Value, i: Value) -> Result<Value> {
    let xs: Array = arg(&xs, "indexImpl")?;
    let i: i64 = arg(&i, "indexImpl")?;
    optional(&just, &nothing, array::index(&xs, i))
}

fn foreign_find_index(just: Value, nothing: Value, pred: Value, xs: Value) -> Result<Value> {
    let xs: Array = arg(&xs, "findIndexImpl")?;
    let found = array::find_index(&xs, |x| predicate(&pred, x, "findIndexImpl"))?;
    optional(&just, &nothing, found.map(|i| Value::int(i as i64)))
}

fn foreign_find_last_index(just: Value, nothing: Value, pred: Value, xs: Value) -> Result<Value> {
    let xs: Array = arg(&xs, "findLastIndexImpl")?;
    let found = array::find_last_index(&xs, |x| predicate(&pred, x, "findLastIndexImpl"))?;
    optional(&just, &nothing, found.map(|i| Value::int(i as i64)))
}

fn foreign_insert_at(just: Value, nothing: Value, i: Value, a: Value, xs: Value) -> Result<Value> {
    let i: i64 = arg(&i, "insertAt")?;
    let xs: Array = arg(&xs, "insertAt")?;
    optional(&just, &nothing, array::insert_at(&xs, i, a).map(Value::Array))
}

fn foreign_delete_at(just: Value, nothing: Value, i: Value, xs: Value) -> Result<Value> {
    let i: i64 = arg(&i, "deleteAt")?;
    let xs: Array = arg(&xs, "deleteAt")?;
    optional(&just, &nothing, array::delete_at(&xs, i).map(Value::Array))
}

fn foreign_update_at(just: Value, nothing: Value, i: Value, a: Value, xs: Value) -> Result<Value> {
    let i: i64 = arg(&i, "updateAt")?;
    let xs: Array = arg(&xs, "updateAt")?;
    optional(&just, &nothing, array::update_at(&xs, i, a).map(Value::Array))
}

fn foreign_unsafe_index(xs: Value, i: Value) -> Result<Value> {
    let xs: Array = arg(&xs, "unsafeIndex")?;
    let i: i64 = arg(&i, "unsafeIndex")?;
    unsafe_ops::unsafe_index(&xs, i)
}

// ============================================================================
// Transformations
// ============================================================================

fn foreign_reverse(xs: Value) -> Result<Value> {
    let xs: Array = arg(&xs, "reverse")?;
    Ok(Value::Array(array::reverse(&xs)))
}

fn foreign_concat(xss: Value) -> Result<Value> {
    let xss: Array = arg(&xss, "concat")?;
    array::concat(&xss).map(Value::Array)
}

fn foreign_filter(pred: Value, xs: Value) -> Result<Value> {
    let xs: Array = arg(&xs, "filter")?;
    array::filter(&xs, |x| predicate(&pred, x, "filter")).map(Value::Array)
}

fn foreign_sort(comp: Value, xs: Value) -> Result<Value> {
    let xs: Array = arg(&xs, "sortImpl")?;
    array::sort_by(&xs, |a, b| call_comparator(&comp, a, b)).map(Value::Array)
}

fn foreign_slice(start: Value, end: Value, xs: Value) -> Result<Value> {
    let start: i64 = arg(&start, "slice")?;
    let end: i64 = arg(&end, "slice")?;
    let xs: Array = arg(&xs, "slice")?;
    array::slice(&xs, start, end).map(Value::Array)
}

fn foreign_drop(n: Value, xs: Value) -> Result<Value> {
    let n: i64 = arg(&n, "drop")?;
    let xs: Array = arg(&xs, "drop")?;
    array::drop(&xs, n).map(Value::Array)
}

fn foreign_zip_with(f: Value, xs: Value, ys: Value) -> Result<Value> {
    let xs: Array = arg(&xs, "zipWith")?;
    let ys: Array = arg(&ys, "zipWith")?;
    array::zip_with(&xs, &ys, |x, y| f.call2(x.clone(), y.clone())).map(Value::Array)
}
