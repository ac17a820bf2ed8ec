// tessera-array - Region handles at the dynamic boundary
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Region handles that travel inside a [`Value`].
//!
//! Generated call sites pass mutable arrays around as ordinary values, so the
//! ownership rules of [`MutableArray`] cannot be checked by the compiler
//! there. A [`RegionHandle`] carries the region in a shared slot that records
//! its lifecycle: once frozen or discarded, every operation fails with
//! `UseAfterFreeze`, and a mutable borrow attempted while another operation
//! holds the storage fails with `AliasingViolation`.
//!
//! Cloning a handle (or the `Value` holding it) names the same region; it
//! never duplicates the storage.

use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tessera_value::{Array, CustomType, Error, FromValue, Result, Tag, Value};

use crate::st::MutableArray;

#[derive(Debug)]
enum Slot {
    Live(MutableArray),
    Frozen,
    Discarded,
}

impl Slot {
    fn state(&self) -> &'static str {
        match self {
            Slot::Live(_) => "live",
            Slot::Frozen => "frozen",
            Slot::Discarded => "discarded",
        }
    }
}

/// Shared, lifecycle-tracked reference to one region array.
#[derive(Clone, Debug)]
pub struct RegionHandle {
    slot: Rc<RefCell<Slot>>,
}

impl RegionHandle {
    /// Take ownership of `region`.
    pub fn new(region: MutableArray) -> Self {
        RegionHandle {
            slot: Rc::new(RefCell::new(Slot::Live(region))),
        }
    }

    /// Wrap in a `Value::Custom`.
    pub fn into_value(self) -> Value {
        Value::custom(self)
    }

    /// `"live"`, `"frozen"` or `"discarded"`.
    pub fn state(&self) -> &'static str {
        self.slot
            .try_borrow()
            .map(|slot| slot.state())
            .unwrap_or("live")
    }

    /// Run `f` against the live region.
    pub fn with_region<R>(&self, f: impl FnOnce(&mut MutableArray) -> R) -> Result<R> {
        let mut slot = self.slot.try_borrow_mut().map_err(|_| {
            tracing::debug!("region array borrowed while in use");
            Error::AliasingViolation
        })?;
        match &mut *slot {
            Slot::Live(region) => Ok(f(region)),
            dead => Err(use_after(dead.state())),
        }
    }

    /// Freeze the region. The handle is dead afterwards.
    pub fn freeze(&self) -> Result<Array> {
        Ok(self.retire(Slot::Frozen)?.freeze())
    }

    /// Discard the region. The handle is dead afterwards.
    pub fn discard(&self) -> Result<()> {
        self.retire(Slot::Discarded)?.discard();
        Ok(())
    }

    fn retire(&self, next: Slot) -> Result<MutableArray> {
        let mut slot = self
            .slot
            .try_borrow_mut()
            .map_err(|_| Error::AliasingViolation)?;
        match std::mem::replace(&mut *slot, next) {
            Slot::Live(region) => Ok(region),
            dead => {
                let state = dead.state();
                *slot = dead;
                Err(use_after(state))
            }
        }
    }
}

fn use_after(state: &'static str) -> Error {
    tracing::debug!(state, "region array used after it left its region");
    Error::UseAfterFreeze { state }
}

impl CustomType for RegionHandle {
    fn type_name(&self) -> &'static str {
        "STArray"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn display(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.slot.try_borrow() {
            Ok(slot) => match &*slot {
                Slot::Live(region) => write!(f, "<STArray len={}>", region.len()),
                dead => write!(f, "<STArray {}>", dead.state()),
            },
            Err(_) => write!(f, "<STArray busy>"),
        }
    }
}

impl FromValue for RegionHandle {
    fn from_value(val: &Value) -> Result<Self> {
        val.as_custom()
            .and_then(|c| c.downcast_ref::<RegionHandle>())
            .cloned()
            .ok_or_else(|| Error::type_error_in("STArray", Tag::Custom, val.tag()))
    }
}
