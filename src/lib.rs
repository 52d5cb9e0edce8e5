//! joybridge: polling and normalization for Windows game controllers.
//!
//! Exposes legacy winmm joysticks and XInput controllers through one
//! [`ControllerBackend`] contract: slot count, connectivity, capabilities and a
//! per-poll [`ControllerState`] with normalized axes, hat angle and buttons.
//! [`Controller`] and [`Manager`] add dead-zone filtering and discovery on top.

pub mod backends;
pub mod button;
pub mod caps;
pub mod config;
pub mod controller;
pub mod deadzone;
pub mod device;
pub mod error;
pub mod manager;
pub mod normalize;
pub mod snapshot;
pub mod state;

pub use backends::is_supported;
pub use button::*;
pub use caps::*;
pub use config::*;
pub use controller::*;
pub use deadzone::*;
pub use device::*;
pub use error::{Error, Result};
pub use manager::*;
pub use normalize::{MAX_BUTTONS, POV_NEUTRAL};
pub use snapshot::*;
pub use state::*;
