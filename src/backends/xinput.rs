//! XInput backend.
//!
//! XInput exposes a fixed four-slot model with a standard Xbox layout, so the
//! capability record is constant; the driver query only decides whether a slot
//! can answer at all.
//!
//! # Channel conventions
//! - `x`, `y`: left stick. `r`: right stick Y. `u`: right stick X.
//! - `left_trigger`, `right_trigger`: `[0.0, 1.0]`; `z = left - right`.
//! - `v` is always [`XINPUT_V_AXIS`].
//! - `pov` is derived from the d-pad bits (see [`pov_from_dpad`]).
//! - Buttons `0..10` follow [`XInputButton`]; `10..32` are never set.

use std::fmt;

use crate::caps::{AxisRange, CapsFlags, ControllerCaps};
use crate::device::{controller_name, BackendKind, ControllerBackend};
use crate::error::{Error, Result};
use crate::normalize::{
    pov_from_dpad, thumb_axis, trigger_axis, xinput_z_axis, DPad, THUMB_HALF_AXIS, TRIGGER_MAX,
    XINPUT_V_AXIS,
};
use crate::state::ControllerState;

/// Number of XInput user slots (`XUSER_MAX_COUNT`).
pub const XUSER_MAX_COUNT: u32 = 4;

/// Name prefix for XInput slots.
pub const XINPUT_NAME: &str = "XInputController";

/// `XINPUT_GAMEPAD.wButtons` masks.
pub mod buttons {
    pub const DPAD_UP: u16 = 0x0001;
    pub const DPAD_DOWN: u16 = 0x0002;
    pub const DPAD_LEFT: u16 = 0x0004;
    pub const DPAD_RIGHT: u16 = 0x0008;
    pub const START: u16 = 0x0010;
    pub const BACK: u16 = 0x0020;
    pub const LEFT_THUMB: u16 = 0x0040;
    pub const RIGHT_THUMB: u16 = 0x0080;
    pub const LEFT_SHOULDER: u16 = 0x0100;
    pub const RIGHT_SHOULDER: u16 = 0x0200;
    pub const A: u16 = 0x1000;
    pub const B: u16 = 0x2000;
    pub const X: u16 = 0x4000;
    pub const Y: u16 = 0x8000;
}

/// Digital buttons in the order they appear in [`ControllerState::buttons`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum XInputButton {
    A,
    B,
    X,
    Y,
    LeftShoulder,
    RightShoulder,
    Back,
    Start,
    LeftThumb,
    RightThumb,
}

impl XInputButton {
    pub const ALL: [XInputButton; 10] = [
        XInputButton::A,
        XInputButton::B,
        XInputButton::X,
        XInputButton::Y,
        XInputButton::LeftShoulder,
        XInputButton::RightShoulder,
        XInputButton::Back,
        XInputButton::Start,
        XInputButton::LeftThumb,
        XInputButton::RightThumb,
    ];

    /// `wButtons` mask for this button.
    pub fn mask(self) -> u16 {
        match self {
            XInputButton::A => buttons::A,
            XInputButton::B => buttons::B,
            XInputButton::X => buttons::X,
            XInputButton::Y => buttons::Y,
            XInputButton::LeftShoulder => buttons::LEFT_SHOULDER,
            XInputButton::RightShoulder => buttons::RIGHT_SHOULDER,
            XInputButton::Back => buttons::BACK,
            XInputButton::Start => buttons::START,
            XInputButton::LeftThumb => buttons::LEFT_THUMB,
            XInputButton::RightThumb => buttons::RIGHT_THUMB,
        }
    }

    /// Index in the state's button array.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            XInputButton::A => "A",
            XInputButton::B => "B",
            XInputButton::X => "X",
            XInputButton::Y => "Y",
            XInputButton::LeftShoulder => "LB",
            XInputButton::RightShoulder => "RB",
            XInputButton::Back => "Back",
            XInputButton::Start => "Start",
            XInputButton::LeftThumb => "LThumb",
            XInputButton::RightThumb => "RThumb",
        }
    }
}

impl fmt::Display for XInputButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raw `XINPUT_GAMEPAD` record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RawGamepad {
    pub buttons: u16,
    pub left_trigger: u8,
    pub right_trigger: u8,
    pub thumb_lx: i16,
    pub thumb_ly: i16,
    pub thumb_rx: i16,
    pub thumb_ry: i16,
}

impl RawGamepad {
    fn dpad(&self) -> DPad {
        DPad {
            up: self.buttons & buttons::DPAD_UP != 0,
            down: self.buttons & buttons::DPAD_DOWN != 0,
            left: self.buttons & buttons::DPAD_LEFT != 0,
            right: self.buttons & buttons::DPAD_RIGHT != 0,
        }
    }

    /// Repack the face/shoulder/stick buttons into [`XInputButton`] bit order.
    fn button_map(&self) -> u32 {
        XInputButton::ALL
            .iter()
            .filter(|b| self.buttons & b.mask() != 0)
            .fold(0u32, |acc, b| acc | (1 << b.index()))
    }
}

/// XInput status code. `0` (`ERROR_SUCCESS`) is success.
pub type XInputResult = u32;

/// The subset of XInput this backend needs.
pub trait XInputApi {
    fn get_state(&self, user_index: u32) -> std::result::Result<RawGamepad, XInputResult>;
    /// Succeeds when the slot can report capabilities.
    fn get_capabilities(&self, user_index: u32) -> std::result::Result<(), XInputResult>;
}

/// [`ControllerBackend`] over an [`XInputApi`].
pub struct XInputBackend<A> {
    api: A,
}

impl<A: XInputApi> XInputBackend<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Translate one gamepad record into a connected state.
    pub fn state_from_gamepad(gp: &RawGamepad) -> ControllerState {
        ControllerState {
            connected: true,
            x: thumb_axis(gp.thumb_lx),
            y: thumb_axis(gp.thumb_ly),
            z: xinput_z_axis(gp.left_trigger, gp.right_trigger),
            left_trigger: trigger_axis(gp.left_trigger),
            right_trigger: trigger_axis(gp.right_trigger),
            r: thumb_axis(gp.thumb_ry),
            u: thumb_axis(gp.thumb_rx),
            v: XINPUT_V_AXIS,
            pov: pov_from_dpad(gp.dpad()),
            ..ControllerState::disconnected()
        }
        .with_button_map(gp.button_map())
    }

    /// The fixed capability record every XInput slot reports.
    pub fn fixed_caps(id: u32) -> Result<ControllerCaps> {
        let stick = AxisRange::new(-THUMB_HALF_AXIS, THUMB_HALF_AXIS);
        Ok(ControllerCaps {
            name: controller_name(XINPUT_NAME, id)?,
            x: stick,
            y: stick,
            z: AxisRange::new(-TRIGGER_MAX, TRIGGER_MAX),
            r: stick,
            u: stick,
            v: AxisRange::EMPTY,
            num_buttons: XInputButton::ALL.len() as u32,
            num_axes: 3,
            flags: CapsFlags {
                has_z: true,
                has_r: true,
                has_u: true,
                has_v: false,
                has_pov: true,
                has_pov_cts: false,
                has_pov_4dir: true,
            },
        })
    }
}

impl<A: XInputApi> ControllerBackend for XInputBackend<A> {
    fn kind(&self) -> BackendKind {
        BackendKind::XInput
    }

    fn device_count(&self) -> u32 {
        XUSER_MAX_COUNT
    }

    fn is_connected(&self, id: u32) -> bool {
        id < XUSER_MAX_COUNT && self.api.get_state(id).is_ok()
    }

    fn capabilities(&self, id: u32) -> Result<ControllerCaps> {
        if id >= XUSER_MAX_COUNT {
            return Err(Error::invalid_device(id, BackendKind::XInput));
        }
        self.api.get_capabilities(id).map_err(|code| {
            log::trace!("XInputGetCapabilities failed: id={id} code={code}");
            Error::invalid_device(id, BackendKind::XInput)
        })?;
        Self::fixed_caps(id)
    }

    fn poll(&self, id: u32) -> ControllerState {
        if id >= XUSER_MAX_COUNT {
            return ControllerState::disconnected();
        }
        match self.api.get_state(id) {
            Ok(gp) => {
                log::trace!("XInputGetState id={id} {gp:?}");
                Self::state_from_gamepad(&gp)
            }
            Err(code) => {
                log::trace!("XInputGetState failed: id={id} code={code}");
                ControllerState::disconnected()
            }
        }
    }
}
