//! Static controller capabilities.
//!
//! [`ControllerCaps`] is a lightweight, cloneable description of one slot suitable
//! for UI display and logging. It is rebuilt on every capability query.
//!
//! # Conventions
//! - Ranges are in the backend's raw units (`0..65535` for winmm sticks,
//!   `-32767.5..32767.5` for XInput sticks), not normalized.
//! - An axis the device does not have reports a zero-width range.

use serde::{Deserialize, Serialize};

/// Inclusive raw range of one axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f32,
    pub max: f32,
}

impl AxisRange {
    pub const EMPTY: AxisRange = AxisRange { min: 0.0, max: 0.0 };

    /// Build a range, swapping the bounds if a driver reports them reversed.
    pub fn new(min: f32, max: f32) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max - self.min
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width() == 0.0
    }
}

/// winmm `JOYCAPS.wCaps` bits.
pub mod flag_bits {
    pub const HAS_Z: u32 = 0x0001;
    pub const HAS_R: u32 = 0x0002;
    pub const HAS_U: u32 = 0x0004;
    pub const HAS_V: u32 = 0x0008;
    pub const HAS_POV: u32 = 0x0010;
    pub const POV_4DIR: u32 = 0x0020;
    pub const POV_CTS: u32 = 0x0040;
}

/// Optional features a controller reports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapsFlags {
    pub has_z: bool,
    pub has_r: bool,
    pub has_u: bool,
    pub has_v: bool,
    pub has_pov: bool,
    /// Hat reports continuous angles.
    pub has_pov_cts: bool,
    /// Hat reports only the four cardinal directions (plus diagonals by combination).
    pub has_pov_4dir: bool,
}

impl CapsFlags {
    /// Decode a winmm capability bitmask, testing each bit on its own.
    pub fn from_bits(bits: u32) -> Self {
        let has = |mask: u32| bits & mask == mask;
        Self {
            has_z: has(flag_bits::HAS_Z),
            has_r: has(flag_bits::HAS_R),
            has_u: has(flag_bits::HAS_U),
            has_v: has(flag_bits::HAS_V),
            has_pov: has(flag_bits::HAS_POV),
            has_pov_cts: has(flag_bits::POV_CTS),
            has_pov_4dir: has(flag_bits::POV_4DIR),
        }
    }
}

/// Capabilities of one controller slot.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ControllerCaps {
    /// Display name, `"<base><id>"`.
    pub name: String,
    pub x: AxisRange,
    pub y: AxisRange,
    pub z: AxisRange,
    pub r: AxisRange,
    pub u: AxisRange,
    pub v: AxisRange,
    pub num_buttons: u32,
    pub num_axes: u32,
    pub flags: CapsFlags,
}

impl ControllerCaps {
    /// Iterate `(axis name, range)` pairs in X, Y, Z, R, U, V order.
    pub fn axes(&self) -> impl Iterator<Item = (&'static str, AxisRange)> {
        [
            ("X", self.x),
            ("Y", self.y),
            ("Z", self.z),
            ("R", self.r),
            ("U", self.u),
            ("V", self.v),
        ]
        .into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_decode_independently() {
        assert_eq!(CapsFlags::from_bits(0), CapsFlags::default());

        let f = CapsFlags::from_bits(flag_bits::HAS_Z | flag_bits::HAS_POV | flag_bits::POV_4DIR);
        assert!(f.has_z && f.has_pov && f.has_pov_4dir);
        assert!(!f.has_r && !f.has_u && !f.has_v && !f.has_pov_cts);

        let all = CapsFlags::from_bits(0x7f);
        assert!(all.has_z && all.has_r && all.has_u && all.has_v);
        assert!(all.has_pov && all.has_pov_cts && all.has_pov_4dir);
    }

    #[test]
    fn ranges_are_ordered() {
        let r = AxisRange::new(10.0, -10.0);
        assert_eq!((r.min, r.max), (-10.0, 10.0));
        assert!(AxisRange::EMPTY.is_empty());
        assert_eq!(AxisRange::new(0.0, 65535.0).width(), 65535.0);
    }

    #[test]
    fn axes_in_fixed_order() {
        let caps = ControllerCaps::default();
        let names: Vec<_> = caps.axes().map(|(n, _)| n).collect();
        assert_eq!(names, ["X", "Y", "Z", "R", "U", "V"]);
    }
}
