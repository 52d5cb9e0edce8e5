//! Per-frame snapshot of controller states.
//!
//! [`Snapshot`] is an **owned**, read-only view of every connected slot at a point
//! in time (typically "this frame"). It's produced by
//! [`Manager::snapshot`](crate::manager::Manager::snapshot) and is cheap to clone
//! for fan-out to multiple consumers.
//!
//! # Semantics
//! - Keys are `"<backend>:<id>"` strings (`"legacy:0"`, `"xinput:3"`).
//! - Only slots that answered the poll are present.
//! - A snapshot is **immutable**. To refresh, request a new one.
//!
//! # Example
//! ```no_run
//! use joybridge::Snapshot;
//!
//! fn print_sticks(snap: &Snapshot) {
//!     for (slot, state) in snap.iter() {
//!         println!("{slot}: X={:.2} Y={:.2} pov={}", state.x, state.y, state.pov);
//!     }
//! }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::state::ControllerState;

/// Owned snapshot of connected controller states (`slot key → state`).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Snapshot(pub HashMap<String, ControllerState>);

impl Snapshot {
    /// Get the state for a specific slot key.
    #[inline]
    pub fn get(&self, key: &str) -> Option<&ControllerState> {
        self.0.get(key)
    }

    /// Iterate `(slot key, state)` pairs.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&String, &ControllerState)> {
        self.0.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume the snapshot and return the inner map.
    #[inline]
    pub fn into_inner(self) -> HashMap<String, ControllerState> {
        self.0
    }
}
