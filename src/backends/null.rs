//! Null backend for platforms without controller drivers.
//!
//! Reports one always-connected slot with an idle state. [`Manager::new`]
//! uses it off Windows.
//!
//! [`Manager::new`]: crate::manager::Manager::new

use crate::caps::ControllerCaps;
use crate::device::{controller_name, BackendKind, ControllerBackend};
use crate::error::Result;
use crate::state::ControllerState;

/// Name prefix for null slots.
pub const NULL_NAME: &str = "NullController";

/// Stand-in backend for platforms without controller support.
///
/// Every id is reported connected with a centered, idle state so game code can
/// run unchanged. Capabilities are empty apart from the name.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullBackend;

impl NullBackend {
    pub fn new() -> Self {
        NullBackend
    }
}

impl ControllerBackend for NullBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Null
    }

    fn device_count(&self) -> u32 {
        1
    }

    fn is_connected(&self, _id: u32) -> bool {
        true
    }

    fn capabilities(&self, id: u32) -> Result<ControllerCaps> {
        Ok(ControllerCaps {
            name: controller_name(NULL_NAME, id)?,
            ..ControllerCaps::default()
        })
    }

    fn poll(&self, _id: u32) -> ControllerState {
        ControllerState {
            connected: true,
            ..ControllerState::disconnected()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_connected_and_idle() {
        let b = NullBackend::new();
        assert!(b.is_connected(3));
        let s = b.poll(3);
        assert!(s.connected);
        assert_eq!(s.button_map, 0);
        assert!(!s.is_pov_pressed());
        assert_eq!(b.name(3).unwrap(), "NullController3");
        assert_eq!(b.connected_devices(), vec![0]);
    }
}
