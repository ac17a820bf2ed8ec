// tessera-array - Region array exports
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Foreign exports over region arrays.
//!
//! Region arrays cross the boundary as [`RegionHandle`]s wrapped in
//! `Value::Custom`. Each export runs its effect as soon as its last argument
//! is applied.

use tessera_value::{Array, Record, Result, Value};

use super::{arg, define, fn1, fn2, fn3, fn4, optional};
use crate::handle::RegionHandle;
use crate::st::MutableArray;

pub(super) fn register(exports: &mut Record) {
    // Entering a region
    define(exports, "emptySTArray", fn1("emptySTArray", foreign_empty));
    define(exports, "newSTArray", fn2("newSTArray", foreign_new));
    define(exports, "thaw", fn1("thaw", foreign_thaw));

    // Mutation
    define(exports, "peekSTArray", fn4("peekSTArray", foreign_peek));
    define(exports, "pokeSTArray", fn3("pokeSTArray", foreign_poke));
    define(exports, "pushSTArray", fn2("pushSTArray", foreign_push));
    define(exports, "pushAllSTArray", fn2("pushAllSTArray", foreign_push_all));
    define(exports, "spliceSTArray", fn4("spliceSTArray", foreign_splice));

    // Leaving a region
    define(exports, "copy", fn1("copy", foreign_copy));
    define(exports, "toAssocArray", fn1("toAssocArray", foreign_to_assoc));
    define(exports, "freeze", fn1("freeze", foreign_freeze));
    define(exports, "discard", fn1("discard", foreign_discard));
    define(exports, "withArray", fn2("withArray", foreign_with_array));
}

fn region(val: &Value, export: &'static str) -> Result<RegionHandle> {
    arg(val, export)
}

// ============================================================================
// Entering a region
// ============================================================================

fn foreign_empty(unit: Value) -> Result<Value> {
    arg::<()>(&unit, "emptySTArray")?;
    Ok(RegionHandle::new(MutableArray::new()).into_value())
}

fn foreign_new(len: Value, fill: Value) -> Result<Value> {
    let len: i64 = arg(&len, "newSTArray")?;
    Ok(RegionHandle::new(MutableArray::with_len(len, fill)?).into_value())
}

fn foreign_thaw(xs: Value) -> Result<Value> {
    let xs: Array = arg(&xs, "thaw")?;
    Ok(RegionHandle::new(MutableArray::thaw(&xs)).into_value())
}

// ============================================================================
// Mutation
// ============================================================================

fn foreign_peek(just: Value, nothing: Value, xs: Value, i: Value) -> Result<Value> {
    let handle = region(&xs, "peekSTArray")?;
    let i: i64 = arg(&i, "peekSTArray")?;
    let found = handle.with_region(|r| r.peek(i))?;
    optional(&just, &nothing, found)
}

fn foreign_poke(xs: Value, i: Value, a: Value) -> Result<Value> {
    let handle = region(&xs, "pokeSTArray")?;
    let i: i64 = arg(&i, "pokeSTArray")?;
    handle.with_region(|r| r.poke(i, a)).map(Value::bool)
}

fn foreign_push(xs: Value, a: Value) -> Result<Value> {
    let handle = region(&xs, "pushSTArray")?;
    let len = handle.with_region(|r| r.push(a))?;
    Ok(Value::int(len as i64))
}

fn foreign_push_all(xs: Value, values: Value) -> Result<Value> {
    let handle = region(&xs, "pushAllSTArray")?;
    let values: Array = arg(&values, "pushAllSTArray")?;
    let len = handle.with_region(|r| r.push_all(&values))?;
    Ok(Value::int(len as i64))
}

fn foreign_splice(xs: Value, i: Value, how_many: Value, insert: Value) -> Result<Value> {
    let handle = region(&xs, "spliceSTArray")?;
    let i: i64 = arg(&i, "spliceSTArray")?;
    let how_many: i64 = arg(&how_many, "spliceSTArray")?;
    let insert: Array = arg(&insert, "spliceSTArray")?;
    let removed = handle.with_region(|r| r.splice(i, how_many, &insert))??;
    Ok(Value::Array(removed))
}

// ============================================================================
// Leaving a region
// ============================================================================

fn foreign_copy(xs: Value) -> Result<Value> {
    let handle = region(&xs, "copy")?;
    handle.with_region(|r| r.copy()).map(Value::Array)
}

fn foreign_to_assoc(xs: Value) -> Result<Value> {
    let handle = region(&xs, "toAssocArray")?;
    handle
        .with_region(|r| r.to_indexed_pairs())
        .map(Value::Array)
}

fn foreign_freeze(xs: Value) -> Result<Value> {
    region(&xs, "freeze")?.freeze().map(Value::Array)
}

fn foreign_discard(xs: Value) -> Result<Value> {
    region(&xs, "discard")?.discard()?;
    Ok(Value::unit())
}

/// Thaw `xs`, hand the region to `f`, then freeze whatever `f` left behind.
///
/// `f` holds no borrow while it runs, so it may call any region export on
/// the handle. Freezing the handle itself makes the final freeze fail with
/// `UseAfterFreeze`.
fn foreign_with_array(f: Value, xs: Value) -> Result<Value> {
    let xs: Array = arg(&xs, "withArray")?;
    let handle = RegionHandle::new(MutableArray::thaw(&xs));
    f.call(handle.clone().into_value())?;
    handle.freeze().map(Value::Array)
}
