// tessera-array - Foreign exports
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Curried exports for generated call sites.
//!
//! Each operation of [`crate::array`], [`crate::st`] and
//! [`crate::unsafe_ops`] is exposed under its foreign name as a chain of
//! single-argument callables. Arguments arrive as [`Value`]s and are
//! extracted with the checked [`FromValue`] API, so a wrong tag surfaces as
//! `TypeMismatch` naming the export.
//!
//! Conventions shared by the exports:
//!
//! - Optional results take a `just` callable and a `nothing` value from the
//!   caller, ahead of the other arguments.
//! - Predicates must return a bool.
//! - Comparators return an int: negative, zero or positive.

mod array;
mod comparators;
mod st;

use std::rc::Rc;

use tessera_value::{Error, FromValue, Record, Result, Value};

pub use comparators::call_comparator;

/// Build the export record: foreign name to curried callable.
pub fn exports() -> Record {
    let mut exports = Record::new();
    array::register(&mut exports);
    st::register(&mut exports);
    exports
}

/// Look up a single export by foreign name.
pub fn lookup(name: &str) -> Option<Value> {
    exports().get(name).cloned()
}

fn define(exports: &mut Record, name: &'static str, value: Value) {
    exports.insert(Rc::from(name), value);
}

/// Extract an argument, naming the export on mismatch.
fn arg<T: FromValue>(val: &Value, export: &'static str) -> Result<T> {
    val.extract().map_err(|e| e.in_context(export))
}

/// Wrap an optional result with the caller's constructors.
fn optional(just: &Value, nothing: &Value, value: Option<Value>) -> Result<Value> {
    match value {
        Some(v) => just.call(v),
        None => Ok(nothing.clone()),
    }
}

/// Apply a caller predicate, requiring a bool back.
fn predicate(pred: &Value, item: &Value, export: &'static str) -> Result<bool> {
    pred.call(item.clone())?
        .extract::<bool>()
        .map_err(|e| e.in_context(format!("{} predicate", export)))
}

fn log_failure(export: &'static str, err: &Error) {
    tracing::debug!(export, error = %err, "foreign call failed");
}

// ============================================================================
// Currying
// ============================================================================

fn fn1<F>(name: &'static str, f: F) -> Value
where
    F: Fn(Value) -> Result<Value> + 'static,
{
    Value::native_fn(name, move |a| f(a).inspect_err(|err| log_failure(name, err)))
}

fn fn2<F>(name: &'static str, f: F) -> Value
where
    F: Fn(Value, Value) -> Result<Value> + 'static,
{
    let f = Rc::new(f);
    Value::native_fn(name, move |a| {
        let f = Rc::clone(&f);
        Ok(fn1(name, move |b| f(a.clone(), b)))
    })
}

fn fn3<F>(name: &'static str, f: F) -> Value
where
    F: Fn(Value, Value, Value) -> Result<Value> + 'static,
{
    let f = Rc::new(f);
    Value::native_fn(name, move |a| {
        let f = Rc::clone(&f);
        Ok(fn2(name, move |b, c| f(a.clone(), b, c)))
    })
}

fn fn4<F>(name: &'static str, f: F) -> Value
where
    F: Fn(Value, Value, Value, Value) -> Result<Value> + 'static,
{
    let f = Rc::new(f);
    Value::native_fn(name, move |a| {
        let f = Rc::clone(&f);
        Ok(fn3(name, move |b, c, d| f(a.clone(), b, c, d)))
    })
}

fn fn5<F>(name: &'static str, f: F) -> Value
where
    F: Fn(Value, Value, Value, Value, Value) -> Result<Value> + 'static,
{
    let f = Rc::new(f);
    Value::native_fn(name, move |a| {
        let f = Rc::clone(&f);
        Ok(fn4(name, move |b, c, d, e| f(a.clone(), b, c, d, e)))
    })
}
