//! Dead-zone filtered views over normalized axes.
//!
//! [`Axis`] filters a single channel; [`Point`] filters a pair of channels
//! (one stick) radially first and then per component.

use serde::{Deserialize, Serialize};

/// One axis value with a dead zone applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    p: f32,
    dead_zone: f32,
}

impl Axis {
    pub fn new(dead_zone: f32) -> Self {
        Self { p: 0.0, dead_zone }
    }

    /// Filtered position.
    #[inline]
    pub fn get(&self) -> f32 {
        self.p
    }

    /// Store `p`, zeroing it when `|p| <= dead_zone`.
    pub fn set(&mut self, p: f32) {
        self.p = if p.abs() <= self.dead_zone { 0.0 } else { p };
    }

    pub fn dead_zone(&self) -> f32 {
        self.dead_zone
    }

    /// Change the dead zone and re-filter the current value.
    pub fn set_dead_zone(&mut self, dead_zone: f32) {
        self.dead_zone = dead_zone;
        self.set(self.p);
    }
}

/// A 2D stick position with a dead zone applied.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    x: f32,
    y: f32,
    neutral: bool,
    dead_zone: f32,
}

impl Point {
    pub fn new(dead_zone: f32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            neutral: true,
            dead_zone,
        }
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.y
    }

    /// True when the last position fell inside the dead zone.
    #[inline]
    pub fn is_neutral(&self) -> bool {
        self.neutral
    }

    pub fn dead_zone(&self) -> f32 {
        self.dead_zone
    }

    pub fn set_dead_zone(&mut self, dead_zone: f32) {
        self.dead_zone = dead_zone;
        self.set_pos(self.x, self.y);
    }

    pub fn set_x(&mut self, x: f32) {
        self.set_pos(x, self.y);
    }

    pub fn set_y(&mut self, y: f32) {
        self.set_pos(self.x, y);
    }

    /// Store a position.
    ///
    /// Inside the dead-zone radius, or with both components inside the dead
    /// zone, the point is zeroed and neutral. Otherwise each component inside
    /// the dead zone is zeroed on its own.
    pub fn set_pos(&mut self, x: f32, y: f32) {
        let dz = self.dead_zone;
        let (xa, ya) = (x.abs(), y.abs());

        if x.hypot(y) <= dz || (xa <= dz && ya <= dz) {
            self.x = 0.0;
            self.y = 0.0;
            self.neutral = true;
            return;
        }

        self.neutral = false;
        self.x = if xa <= dz { 0.0 } else { x };
        self.y = if ya <= dz { 0.0 } else { y };
    }

    /// Store a position given a compass angle (degrees clockwise from up) and radius.
    pub fn set_angle(&mut self, degrees: f32, radius: f32) {
        let rad = degrees.to_radians();
        self.set_pos(radius * rad.sin(), radius * rad.cos());
    }

    /// Angle of the current position in degrees, counter-clockwise from +X.
    pub fn angle(&self) -> f32 {
        self.y.atan2(self.x).to_degrees()
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::new(0.0)
    }
}
