//! Legacy winmm joystick backend.
//!
//! Slots are the OS joystick ids (`0..joyGetNumDevs()`). Capabilities come
//! straight from the driver; state is read with an extended position query that
//! requests every field.
//!
//! # Axis conventions
//! winmm reports `0..65535` per axis with `0` at the top for vertical axes.
//! Values are mapped to `[-1.0, 1.0]` and `y`/`r` are then negated so "up" reads
//! positive, matching the XInput backend. Triggers are inferred from `z`.

use crate::caps::{AxisRange, CapsFlags, ControllerCaps};
use crate::device::{controller_name, BackendKind, ControllerBackend};
use crate::error::{Error, Result};
use crate::normalize::{joy_axis, joy_pov, triggers_from_z};
use crate::state::ControllerState;

/// winmm status code (`MMRESULT`). `0` is success.
pub type MmResult = u32;

/// Driver-reported capabilities (`JOYCAPS`), already decoded from UTF-16.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawJoyCaps {
    /// Product name (`szPname`).
    pub name: String,
    pub x_min: u32,
    pub x_max: u32,
    pub y_min: u32,
    pub y_max: u32,
    pub z_min: u32,
    pub z_max: u32,
    pub r_min: u32,
    pub r_max: u32,
    pub u_min: u32,
    pub u_max: u32,
    pub v_min: u32,
    pub v_max: u32,
    pub num_buttons: u32,
    pub num_axes: u32,
    /// `wCaps` bitmask, see [`flag_bits`](crate::caps::flag_bits).
    pub caps: u32,
}

/// Extended position info (`JOYINFOEX`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RawJoyInfo {
    pub x: u32,
    pub y: u32,
    pub z: u32,
    pub r: u32,
    pub u: u32,
    pub v: u32,
    pub buttons: u32,
    /// Hundredths of a degree; `65535` when centered.
    pub pov: u32,
}

/// The subset of winmm this backend needs.
pub trait JoystickApi {
    fn num_devs(&self) -> u32;
    fn dev_caps(&self, id: u32) -> std::result::Result<RawJoyCaps, MmResult>;
    fn pos_ex(&self, id: u32) -> std::result::Result<RawJoyInfo, MmResult>;
}

/// [`ControllerBackend`] over a [`JoystickApi`].
pub struct LegacyBackend<A> {
    api: A,
}

impl<A: JoystickApi> LegacyBackend<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    fn range(min: u32, max: u32) -> AxisRange {
        AxisRange::new(min as f32, max as f32)
    }

    /// Translate one position record into a connected state.
    pub fn state_from_info(info: &RawJoyInfo) -> ControllerState {
        let z = joy_axis(info.z);
        let (left_trigger, right_trigger) = triggers_from_z(z);

        ControllerState {
            connected: true,
            x: joy_axis(info.x),
            y: -joy_axis(info.y),
            z,
            left_trigger,
            right_trigger,
            r: -joy_axis(info.r),
            u: joy_axis(info.u),
            v: joy_axis(info.v),
            pov: joy_pov(info.pov),
            ..ControllerState::disconnected()
        }
        .with_button_map(info.buttons)
    }
}

impl<A: JoystickApi> ControllerBackend for LegacyBackend<A> {
    fn kind(&self) -> BackendKind {
        BackendKind::Legacy
    }

    fn device_count(&self) -> u32 {
        self.api.num_devs()
    }

    fn is_connected(&self, id: u32) -> bool {
        self.api.pos_ex(id).is_ok()
    }

    fn capabilities(&self, id: u32) -> Result<ControllerCaps> {
        let raw = self.api.dev_caps(id).map_err(|code| {
            log::trace!("joyGetDevCaps failed: id={id} code={code}");
            Error::invalid_device(id, BackendKind::Legacy)
        })?;

        Ok(ControllerCaps {
            name: controller_name(&raw.name, id)?,
            x: Self::range(raw.x_min, raw.x_max),
            y: Self::range(raw.y_min, raw.y_max),
            z: Self::range(raw.z_min, raw.z_max),
            r: Self::range(raw.r_min, raw.r_max),
            u: Self::range(raw.u_min, raw.u_max),
            v: Self::range(raw.v_min, raw.v_max),
            num_buttons: raw.num_buttons,
            num_axes: raw.num_axes,
            flags: CapsFlags::from_bits(raw.caps),
        })
    }

    fn poll(&self, id: u32) -> ControllerState {
        match self.api.pos_ex(id) {
            Ok(info) => {
                log::trace!("joyGetPosEx id={id} {info:?}");
                Self::state_from_info(&info)
            }
            Err(code) => {
                log::trace!("joyGetPosEx failed: id={id} code={code}");
                ControllerState::disconnected()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::caps::flag_bits;
    use crate::normalize::POV_NEUTRAL;

    const JOYERR_UNPLUGGED: MmResult = 167;

    struct FakeWinMm {
        caps: Option<RawJoyCaps>,
        info: Option<RawJoyInfo>,
    }

    impl JoystickApi for FakeWinMm {
        fn num_devs(&self) -> u32 {
            16
        }
        fn dev_caps(&self, _id: u32) -> std::result::Result<RawJoyCaps, MmResult> {
            self.caps.clone().ok_or(JOYERR_UNPLUGGED)
        }
        fn pos_ex(&self, _id: u32) -> std::result::Result<RawJoyInfo, MmResult> {
            self.info.ok_or(JOYERR_UNPLUGGED)
        }
    }

    fn gamepad_caps() -> RawJoyCaps {
        RawJoyCaps {
            name: "Generic Pad".into(),
            x_max: 65535,
            y_max: 65535,
            z_max: 65535,
            r_max: 65535,
            num_buttons: 12,
            num_axes: 4,
            caps: flag_bits::HAS_Z | flag_bits::HAS_R | flag_bits::HAS_POV | flag_bits::POV_CTS,
            ..RawJoyCaps::default()
        }
    }

    #[test]
    fn capabilities_copy_driver_ranges() {
        let backend = LegacyBackend::new(FakeWinMm {
            caps: Some(gamepad_caps()),
            info: None,
        });
        let caps = backend.capabilities(2).unwrap();
        assert_eq!(caps.name, "Generic Pad2");
        assert_eq!(caps.x, AxisRange::new(0.0, 65535.0));
        assert!(caps.u.is_empty());
        assert!(caps.v.is_empty());
        assert_eq!(caps.num_buttons, 12);
        assert_eq!(caps.num_axes, 4);
        assert!(caps.flags.has_z && caps.flags.has_r && caps.flags.has_pov && caps.flags.has_pov_cts);
        assert!(!caps.flags.has_u && !caps.flags.has_v && !caps.flags.has_pov_4dir);
    }

    #[test]
    fn capabilities_fail_without_device() {
        let backend = LegacyBackend::new(FakeWinMm { caps: None, info: None });
        assert!(matches!(
            backend.capabilities(5),
            Err(Error::InvalidDevice { id: 5, backend: BackendKind::Legacy })
        ));
        assert!(backend.name(5).is_err());
        assert!(backend.button_count(5).is_err());
    }

    #[test]
    fn poll_normalizes_axes() {
        let info = RawJoyInfo {
            x: 65535,
            y: 0,
            z: 65535,
            r: 65535,
            u: 0,
            v: 65535,
            buttons: 0b101,
            pov: 9000,
        };
        let backend = LegacyBackend::new(FakeWinMm { caps: None, info: Some(info) });
        assert!(backend.is_connected(0));

        let s = backend.poll(0);
        assert!(s.connected);
        assert_eq!(s.x, 1.0);
        // y/r are flipped so "up" (raw 0) reads positive
        assert_eq!(s.y, 1.0);
        assert_eq!(s.r, -1.0);
        assert_eq!(s.u, -1.0);
        assert_eq!(s.v, 1.0);
        assert_eq!(s.pov, 90.0);
        assert_eq!((s.left_trigger, s.right_trigger), (1.0, 0.0));
        assert_eq!(s.pressed().collect::<Vec<_>>(), vec![0, 2]);
    }

    #[test]
    fn poll_passes_centered_hat_through() {
        let info = RawJoyInfo { pov: 65535, z: 0, ..RawJoyInfo::default() };
        let s = LegacyBackend::<FakeWinMm>::state_from_info(&info);
        assert_eq!(s.pov, POV_NEUTRAL);
        assert!(!s.is_pov_pressed());
        assert_eq!((s.left_trigger, s.right_trigger), (0.0, 1.0));
    }

    #[test]
    fn poll_failure_resets_state() {
        let backend = LegacyBackend::new(FakeWinMm { caps: Some(gamepad_caps()), info: None });
        assert!(!backend.is_connected(0));
        assert_eq!(backend.poll(0), ControllerState::disconnected());
    }

    #[test]
    fn device_count_is_platform_slots() {
        let backend = LegacyBackend::new(FakeWinMm { caps: None, info: None });
        assert_eq!(backend.device_count(), 16);
        assert!(backend.connected_devices().is_empty());
    }
}
