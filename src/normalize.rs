//! Pure numeric conversions from raw driver values to normalized channels.
//!
//! Everything here is stateless and platform-independent so both backends share
//! one definition of each mapping.
//!
//! ## Value conventions
//! - **Stick axes:** `[-1.0, 1.0]`, up is positive on vertical axes.
//! - **Triggers:** `[0.0, 1.0]`, released is `0.0`.
//! - **POV:** degrees clockwise from up (`0.0..360.0`), or [`POV_NEUTRAL`].

/// Number of button flags carried by every state record.
pub const MAX_BUTTONS: usize = 32;

/// Half of the winmm axis range (`0..=65535`).
pub const JOY_HALF_AXIS: f32 = 32767.5;

/// Half of the XInput thumbstick range (`-32768..=32767`).
pub const THUMB_HALF_AXIS: f32 = 32767.5;

/// Full XInput trigger range (`0..=255`).
pub const TRIGGER_MAX: f32 = 255.0;

/// POV value meaning "hat centered".
///
/// winmm reports a centered hat as `65535` hundredths of a degree, which the
/// standard conversion turns into `655.35`. The XInput backend reports the same
/// value so callers can compare against one constant for both backends.
pub const POV_NEUTRAL: f32 = 655.35;

/// Any POV angle at or above this is neutral.
pub const POV_MAX_ANGLE: f32 = 360.0;

/// Fixed value reported for the XInput V axis, which has no physical control.
pub const XINPUT_V_AXIS: f32 = -1.0;

/// Map a winmm axis position (`0..=65535`) to `[-1.0, 1.0]`.
#[inline]
pub fn joy_axis(raw: u32) -> f32 {
    (raw as f32 - JOY_HALF_AXIS) / JOY_HALF_AXIS
}

/// Convert a winmm POV reading (hundredths of a degree) to degrees.
///
/// `65535` (centered) is passed through the same formula and yields [`POV_NEUTRAL`].
#[inline]
pub fn joy_pov(raw: u32) -> f32 {
    raw as f32 / 100.0
}

/// Map an XInput thumbstick value to `[-1.0, 1.0]`.
#[inline]
pub fn thumb_axis(raw: i16) -> f32 {
    (raw as f32 / THUMB_HALF_AXIS).clamp(-1.0, 1.0)
}

/// Map an XInput trigger byte to `[0.0, 1.0]`.
#[inline]
pub fn trigger_axis(raw: u8) -> f32 {
    raw as f32 / TRIGGER_MAX
}

/// Combine both triggers into a legacy-style Z axis.
///
/// Positive means the left trigger dominates.
#[inline]
pub fn xinput_z_axis(left: u8, right: u8) -> f32 {
    trigger_axis(left) - trigger_axis(right)
}

/// Split a combined Z axis back into `(left, right)` trigger values.
///
/// Only one side can be reported at a time, so pressing both triggers equally
/// reads as neither pressed.
#[inline]
pub fn triggers_from_z(z: f32) -> (f32, f32) {
    if z > 0.0 {
        (z, 0.0)
    } else if z < 0.0 {
        (0.0, -z)
    } else {
        (0.0, 0.0)
    }
}

/// Directional bits feeding [`pov_from_dpad`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DPad {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// Derive a POV angle from four d-pad bits.
///
/// Up and down are checked first, so a diagonal wins over a pure left/right.
pub fn pov_from_dpad(dpad: DPad) -> f32 {
    if dpad.up {
        if dpad.right {
            45.0
        } else if dpad.left {
            315.0
        } else {
            0.0
        }
    } else if dpad.down {
        if dpad.right {
            135.0
        } else if dpad.left {
            225.0
        } else {
            180.0
        }
    } else if dpad.right {
        90.0
    } else if dpad.left {
        270.0
    } else {
        POV_NEUTRAL
    }
}

/// True when `pov` encodes a pressed direction rather than neutral.
#[inline]
pub fn is_pov_pressed(pov: f32) -> bool {
    pov < POV_MAX_ANGLE
}

/// Expand a button bitmap into one flag per bit, low bit first.
pub fn button_flags(mut map: u32) -> [bool; MAX_BUTTONS] {
    let mut flags = [false; MAX_BUTTONS];
    for flag in flags.iter_mut() {
        *flag = map & 1 == 1;
        map >>= 1;
    }
    flags
}

/// Pack button flags back into a bitmap.
pub fn button_map(flags: &[bool; MAX_BUTTONS]) -> u32 {
    flags
        .iter()
        .enumerate()
        .fold(0u32, |acc, (i, &on)| if on { acc | (1 << i) } else { acc })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f32 = 1e-4;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn joy_axis_endpoints() {
        assert!(close(joy_axis(0), -1.0));
        assert!(close(joy_axis(65535), 1.0));
        // the center falls between two raw values
        assert!(close(joy_axis(32767), 0.0));
        assert!(close(joy_axis(32768), 0.0));
        assert!(joy_axis(32767) < 0.0 && joy_axis(32768) > 0.0);
    }

    #[test]
    fn joy_pov_centered_is_sentinel() {
        assert_eq!(joy_pov(65535), POV_NEUTRAL);
        assert_eq!(joy_pov(0), 0.0);
        assert_eq!(joy_pov(9000), 90.0);
        assert_eq!(joy_pov(31500), 315.0);
    }

    #[test]
    fn thumb_axis_stays_in_range() {
        assert_eq!(thumb_axis(i16::MIN), -1.0);
        assert!(close(thumb_axis(i16::MAX), 1.0));
        assert!(close(thumb_axis(0), 0.0));
    }

    #[test]
    fn z_axis_from_triggers() {
        assert_eq!(xinput_z_axis(255, 0), 1.0);
        assert_eq!(xinput_z_axis(0, 255), -1.0);
        assert_eq!(xinput_z_axis(0, 0), 0.0);
        assert_eq!(xinput_z_axis(255, 255), 0.0);
    }

    #[test]
    fn triggers_inferred_from_z() {
        assert_eq!(triggers_from_z(1.0), (1.0, 0.0));
        assert_eq!(triggers_from_z(-1.0), (0.0, 1.0));
        assert_eq!(triggers_from_z(0.0), (0.0, 0.0));
        assert_eq!(triggers_from_z(0.5), (0.5, 0.0));
    }

    #[test]
    fn dpad_headings() {
        let d = |up, down, left, right| DPad { up, down, left, right };
        assert_eq!(pov_from_dpad(d(true, false, false, false)), 0.0);
        assert_eq!(pov_from_dpad(d(true, false, false, true)), 45.0);
        assert_eq!(pov_from_dpad(d(false, false, false, true)), 90.0);
        assert_eq!(pov_from_dpad(d(false, true, false, true)), 135.0);
        assert_eq!(pov_from_dpad(d(false, true, false, false)), 180.0);
        assert_eq!(pov_from_dpad(d(false, true, true, false)), 225.0);
        assert_eq!(pov_from_dpad(d(false, false, true, false)), 270.0);
        assert_eq!(pov_from_dpad(d(true, false, true, false)), 315.0);
        assert_eq!(pov_from_dpad(DPad::default()), POV_NEUTRAL);
    }

    #[test]
    fn dpad_vertical_wins_conflicts() {
        // up+down: up checked first
        let d = DPad { up: true, down: true, left: false, right: false };
        assert_eq!(pov_from_dpad(d), 0.0);
        // left+right with no vertical: right checked first
        let d = DPad { up: false, down: false, left: true, right: true };
        assert_eq!(pov_from_dpad(d), 90.0);
    }

    #[test]
    fn neutral_is_not_pressed() {
        assert!(!is_pov_pressed(POV_NEUTRAL));
        assert!(is_pov_pressed(0.0));
        assert!(is_pov_pressed(315.0));
    }

    proptest! {
        #[test]
        fn prop_button_flags_match_bits(map in any::<u32>()) {
            let flags = button_flags(map);
            for (i, &flag) in flags.iter().enumerate() {
                prop_assert_eq!(flag, (map >> i) & 1 == 1);
            }
            prop_assert_eq!(button_map(&flags), map);
        }

        #[test]
        fn prop_joy_axis_within_unit_range(raw in 0u32..=65535u32) {
            let v = joy_axis(raw);
            prop_assert!((-1.0..=1.0).contains(&v), "axis out of range: {}", v);
        }

        #[test]
        fn prop_z_axis_within_unit_range(left in any::<u8>(), right in any::<u8>()) {
            let z = xinput_z_axis(left, right);
            prop_assert!((-1.0..=1.0).contains(&z));
            let (l, r) = triggers_from_z(z);
            prop_assert!(l >= 0.0 && r >= 0.0);
            prop_assert!(l == 0.0 || r == 0.0);
        }
    }
}
