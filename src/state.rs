//! Per-poll controller state.
//!
//! [`ControllerState`] is an **owned**, immutable snapshot produced by
//! [`ControllerBackend::poll`](crate::device::ControllerBackend::poll). Each poll
//! builds a fresh record; nothing is carried over from the previous call.
//!
//! # Semantics
//! - Stick axes (`x`, `y`, `z`, `r`, `u`, `v`) are normalized to `[-1.0, 1.0]`.
//!   Vertical axes (`y`, `r`) read positive when pushed up on both backends.
//! - Triggers are normalized to `[0.0, 1.0]`.
//! - `pov` is in degrees clockwise from up, or [`POV_NEUTRAL`] when centered.
//! - `buttons[i]` is always bit `i` of `button_map`.
//!
//! # Example
//! ```no_run
//! use joybridge::{ControllerBackend, ControllerState};
//!
//! fn print_state<B: ControllerBackend>(backend: &B, id: u32) {
//!     let s: ControllerState = backend.poll(id);
//!     if s.connected {
//!         println!("x={:.2} y={:.2} pov={} pressed={:?}", s.x, s.y, s.pov, s.pressed().collect::<Vec<_>>());
//!     }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::normalize::{button_flags, is_pov_pressed, MAX_BUTTONS, POV_NEUTRAL};

/// Snapshot of one controller slot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ControllerState {
    /// Whether the slot answered the state query.
    pub connected: bool,
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Left trigger in `[0.0, 1.0]`. Inferred from `z` on the legacy backend.
    pub left_trigger: f32,
    /// Right trigger in `[0.0, 1.0]`. Inferred from `z` on the legacy backend.
    pub right_trigger: f32,
    pub r: f32,
    pub u: f32,
    pub v: f32,
    /// Hat angle in degrees, or [`POV_NEUTRAL`].
    pub pov: f32,
    /// Raw button bitmap.
    pub button_map: u32,
    /// One flag per bit of `button_map`.
    pub buttons: [bool; MAX_BUTTONS],
}

impl ControllerState {
    /// State reported for a slot that could not be read.
    ///
    /// Axes and triggers are zero, the hat is neutral and no button is pressed.
    pub fn disconnected() -> Self {
        Self {
            connected: false,
            x: 0.0,
            y: 0.0,
            z: 0.0,
            left_trigger: 0.0,
            right_trigger: 0.0,
            r: 0.0,
            u: 0.0,
            v: 0.0,
            pov: POV_NEUTRAL,
            button_map: 0,
            buttons: [false; MAX_BUTTONS],
        }
    }

    /// Set `button_map` and derive the flag array from it.
    pub(crate) fn with_button_map(mut self, map: u32) -> Self {
        self.button_map = map;
        self.buttons = button_flags(map);
        self
    }

    /// Whether button `index` is pressed. Out-of-range indices read as released.
    #[inline]
    pub fn is_pressed(&self, index: usize) -> bool {
        self.buttons.get(index).copied().unwrap_or(false)
    }

    /// Indices of all pressed buttons, ascending.
    pub fn pressed(&self) -> impl Iterator<Item = usize> + '_ {
        self.buttons
            .iter()
            .enumerate()
            .filter_map(|(i, &on)| on.then_some(i))
    }

    /// Whether the hat reports a direction.
    #[inline]
    pub fn is_pov_pressed(&self) -> bool {
        is_pov_pressed(self.pov)
    }
}

impl Default for ControllerState {
    fn default() -> Self {
        Self::disconnected()
    }
}
