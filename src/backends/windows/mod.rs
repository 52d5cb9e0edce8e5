#![cfg(target_os = "windows")]

//! Windows OS bindings.
//!
//! This module contains the only `unsafe` code in the crate:
//! - **winmm** joystick queries (`joyGetNumDevs`, `joyGetDevCapsW`, `joyGetPosEx`)
//! - **XInput** controller queries (`XInputGetState`, `XInputGetCapabilities`)
//!
//! Most users should not use these directly. Prefer
//! [`Manager::new`](crate::manager::Manager::new), which wires them into the
//! platform-independent backends.

pub mod winmm;
pub mod xinput_devices;

pub use winmm::WinMmApi;
pub use xinput_devices::WinXInputApi;
