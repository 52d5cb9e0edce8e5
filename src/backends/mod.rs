//! Controller backends.
//!
//! Implementations of [`ControllerBackend`](crate::device::ControllerBackend):
//! - [`joystick`]: legacy winmm joysticks (`joyGetPosEx`)
//! - [`xinput`]: Xbox controllers via XInput
//! - [`null`]: always-connected stand-in for unsupported platforms
//!
//! The translation logic is platform-independent and generic over a small OS
//! API trait. The real Windows bindings live in [`windows`].

pub mod joystick;
pub mod null;
pub mod xinput;

#[cfg(target_os = "windows")]
#[cfg_attr(docsrs, doc(cfg(target_os = "windows")))]
pub mod windows;

pub use joystick::{JoystickApi, LegacyBackend};
pub use null::NullBackend;
pub use xinput::{XInputApi, XInputBackend};

/// Legacy backend bound to the system winmm driver.
#[cfg(target_os = "windows")]
pub type SystemLegacyBackend = LegacyBackend<windows::WinMmApi>;

/// XInput backend bound to the system XInput driver.
#[cfg(target_os = "windows")]
pub type SystemXInputBackend = XInputBackend<windows::WinXInputApi>;

/// No joystick driver here; the null backend stands in.
#[cfg(not(target_os = "windows"))]
pub type SystemLegacyBackend = NullBackend;

#[cfg(not(target_os = "windows"))]
pub type SystemXInputBackend = NullBackend;

/// Whether this platform has real controller backends.
pub const fn is_supported() -> bool {
    cfg!(target_os = "windows")
}

#[cfg(target_os = "windows")]
pub fn system_legacy() -> SystemLegacyBackend {
    LegacyBackend::new(windows::WinMmApi::new())
}

#[cfg(target_os = "windows")]
pub fn system_xinput() -> SystemXInputBackend {
    XInputBackend::new(windows::WinXInputApi::new())
}

#[cfg(not(target_os = "windows"))]
pub fn system_legacy() -> SystemLegacyBackend {
    NullBackend::new()
}

#[cfg(not(target_os = "windows"))]
pub fn system_xinput() -> SystemXInputBackend {
    NullBackend::new()
}
