// tessera-array - Persistent and region-scoped arrays for Tessera
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! # tessera-array
//!
//! Array primitives for the Tessera runtime.
//!
//! - [`array`]: pure operations over persistent arrays.
//! - [`st`]: mutable arrays confined to one owner, with an explicit freeze.
//! - [`handle`]: the runtime-checked region handle used across the dynamic
//!   boundary.
//! - [`foreign`]: every operation as a curried [`Value`] callable.

pub mod array;
pub mod foreign;
pub mod handle;
pub mod st;
pub mod unsafe_ops;

pub use foreign::{call_comparator, exports};
pub use handle::RegionHandle;
pub use st::{MutableArray, run, with_array};
pub use unsafe_ops::unsafe_index;

// Re-export value types for convenience
pub use tessera_value::{Array, Error, Result, Tag, Value};
