//! A single controller slot with dead-zone filtering.
//!
//! [`Controller`] pairs a slot id with a backend, remembers the last
//! capabilities and state, and exposes dead-zone filtered views of the sticks,
//! axes, triggers and hat.
//!
//! ```no_run
//! use joybridge::{ControllerConfig, Manager};
//!
//! let manager = Manager::new(ControllerConfig::default());
//! let mut pad = manager.create_xinput(0).expect("slot 0");
//! if pad.poll() {
//!     println!("left stick: {:.2}, {:.2}", pad.xy().x(), pad.xy().y());
//! }
//! ```

use crate::button::Button;
use crate::caps::ControllerCaps;
use crate::config::ControllerConfig;
use crate::deadzone::{Axis, Point};
use crate::device::ControllerBackend;
use crate::error::Result;
use crate::state::ControllerState;

pub struct Controller<B> {
    id: u32,
    backend: B,
    config: ControllerConfig,
    caps: ControllerCaps,
    state: ControllerState,
    xy: Point,
    ru: Point,
    z: Axis,
    v: Axis,
    left_trigger: Axis,
    right_trigger: Axis,
    pov: Point,
}

impl<B: ControllerBackend> Controller<B> {
    /// Wrap slot `id` without touching the device.
    ///
    /// Capabilities start empty; call [`reconnect`](Self::reconnect) or
    /// [`refresh_caps`](Self::refresh_caps) to load them.
    pub fn new(id: u32, backend: B, config: ControllerConfig) -> Self {
        let dz = config.dead_zone;
        Self {
            id,
            backend,
            config,
            caps: ControllerCaps::default(),
            state: ControllerState::disconnected(),
            xy: Point::new(dz),
            ru: Point::new(dz),
            z: Axis::new(dz),
            v: Axis::new(dz),
            left_trigger: Axis::new(dz),
            right_trigger: Axis::new(dz),
            pov: Point::new(config.pov_dead_zone),
        }
    }

    /// Read the slot and update every filtered view.
    ///
    /// Returns whether the controller is connected. When it is not, the filtered
    /// views keep their previous values and only [`state`](Self::state) changes.
    pub fn poll(&mut self) -> bool {
        let state = self.backend.poll(self.id);

        if state.connected != self.state.connected {
            log::debug!(
                "{} id={} {}",
                self.backend.kind(),
                self.id,
                if state.connected { "connected" } else { "disconnected" }
            );
        }
        self.state = state;

        if !self.state.connected {
            return false;
        }

        let s = &self.state;
        self.xy.set_pos(s.x, s.y);
        self.z.set(s.z);
        self.left_trigger.set(s.left_trigger);
        self.right_trigger.set(s.right_trigger);
        self.ru.set_pos(s.r, s.u);
        self.v.set(s.v);

        if s.is_pov_pressed() {
            self.pov.set_angle(s.pov, self.config.pov_radius);
        } else {
            self.pov.set_pos(0.0, 0.0);
        }

        true
    }

    /// Poll, and reload capabilities if the slot is connected.
    pub fn reconnect(&mut self) -> Result<bool> {
        if !self.poll() {
            return Ok(false);
        }
        self.refresh_caps()?;
        Ok(true)
    }

    /// Reload capabilities from the backend.
    ///
    /// Fails with [`Error::InvalidDevice`](crate::error::Error::InvalidDevice)
    /// when the slot cannot answer; the previous caps are kept in that case.
    pub fn refresh_caps(&mut self) -> Result<&ControllerCaps> {
        self.caps = self.backend.capabilities(self.id)?;
        Ok(&self.caps)
    }

    pub(crate) fn set_caps(&mut self, caps: ControllerCaps) {
        self.caps = caps;
    }

    /// Connection state as of the last poll.
    pub fn is_connected(&self) -> bool {
        self.state.connected
    }

    /// Hat is off center.
    pub fn is_pov_pressed(&self) -> bool {
        self.state.is_pov_pressed()
    }

    /// Filtered left trigger is outside the dead zone.
    ///
    /// Always `false` unless the caps report a Z axis: triggers are inferred
    /// from `z`, and a stick without one reads it as fully deflected.
    pub fn is_left_trigger_pressed(&self) -> bool {
        self.caps.flags.has_z && self.left_trigger.get() > 0.0
    }

    /// See [`is_left_trigger_pressed`](Self::is_left_trigger_pressed).
    pub fn is_right_trigger_pressed(&self) -> bool {
        self.caps.flags.has_z && self.right_trigger.get() > 0.0
    }

    /// Whether `button` is held, using the filtered triggers for trigger codes.
    pub fn is_pressed(&self, button: Button) -> bool {
        match button {
            Button::LeftTrigger => self.is_left_trigger_pressed(),
            Button::RightTrigger => self.is_right_trigger_pressed(),
            Button::Digital(_) => button.code().is_some_and(|i| self.state.is_pressed(i)),
        }
    }

    /// Slot index within the backend.
    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Capabilities as of the last [`refresh_caps`](Self::refresh_caps).
    pub fn caps(&self) -> &ControllerCaps {
        &self.caps
    }

    /// Display name from the caps, empty until they are loaded.
    pub fn name(&self) -> &str {
        &self.caps.name
    }

    pub fn button_count(&self) -> u32 {
        self.caps.num_buttons
    }

    /// Raw state from the last poll.
    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    /// Left stick.
    pub fn xy(&self) -> &Point {
        &self.xy
    }

    /// Right stick as `(r, u)`.
    pub fn ru(&self) -> &Point {
        &self.ru
    }

    /// Combined trigger axis on XInput, throttle or twist on joysticks.
    pub fn z(&self) -> &Axis {
        &self.z
    }

    pub fn v(&self) -> &Axis {
        &self.v
    }

    pub fn left_trigger(&self) -> &Axis {
        &self.left_trigger
    }

    pub fn right_trigger(&self) -> &Axis {
        &self.right_trigger
    }

    /// Hat as a unit-ish vector (`x` right, `y` up); `(0, 0)` when neutral.
    pub fn pov(&self) -> &Point {
        &self.pov
    }

    /// Apply a new stick/axis dead zone to every filtered view except the hat.
    pub fn set_dead_zone(&mut self, dead_zone: f32) {
        self.config.dead_zone = dead_zone;
        self.xy.set_dead_zone(dead_zone);
        self.ru.set_dead_zone(dead_zone);
        self.z.set_dead_zone(dead_zone);
        self.v.set_dead_zone(dead_zone);
        self.left_trigger.set_dead_zone(dead_zone);
        self.right_trigger.set_dead_zone(dead_zone);
    }
}
