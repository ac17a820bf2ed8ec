// tessera-value - Dynamic values for the Tessera array runtime
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! # tessera-value
//!
//! The dynamically-typed value shared by every Tessera array operation.
//! Provides `Value`, its `Tag`, checked extraction through `FromValue`, and
//! the contract-violation `Error` type.

pub mod convert;
pub mod error;
pub mod value;

pub use convert::{FromValue, IntoValue, from_value, to_value};
pub use error::{Error, Result};
pub use im::{OrdMap, Vector};
pub use value::{
    Array, Custom, CustomType, NativeFn, NativeFnImpl, Record, Tag, Value, get_print_length,
    set_print_length,
};
