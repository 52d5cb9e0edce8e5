//! Backend contract shared by every controller source.

use std::fmt::{self, Write as _};

use serde::{Deserialize, Serialize};

use crate::caps::ControllerCaps;
use crate::error::{Error, Result};
use crate::state::ControllerState;

/// Which backend a slot id belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BackendKind {
    Legacy,
    XInput,
    Null,
}

impl BackendKind {
    /// Short prefix used in snapshot keys (`"legacy:0"`, `"xinput:2"`).
    pub fn prefix(&self) -> &'static str {
        match self {
            BackendKind::Legacy => "legacy",
            BackendKind::XInput => "xinput",
            BackendKind::Null => "null",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// A source of controller slots.
///
/// Slot ids are zero-based and scoped to the backend. `is_connected` and `poll`
/// never fail: an unreadable slot is simply disconnected. Capability queries
/// return [`Error::InvalidDevice`] instead.
pub trait ControllerBackend {
    fn kind(&self) -> BackendKind;

    /// Number of slots the platform supports (not the number connected).
    fn device_count(&self) -> u32;

    fn is_connected(&self, id: u32) -> bool;

    fn capabilities(&self, id: u32) -> Result<ControllerCaps>;

    /// Read the current state of `id`.
    fn poll(&self, id: u32) -> ControllerState;

    fn name(&self, id: u32) -> Result<String> {
        Ok(self.capabilities(id)?.name)
    }

    fn button_count(&self, id: u32) -> Result<u32> {
        Ok(self.capabilities(id)?.num_buttons)
    }

    fn axis_count(&self, id: u32) -> Result<u32> {
        Ok(self.capabilities(id)?.num_axes)
    }

    /// Ids of all slots currently connected, ascending.
    fn connected_devices(&self) -> Vec<u32> {
        (0..self.device_count())
            .filter(|&id| self.is_connected(id))
            .collect()
    }
}

impl<T: ControllerBackend + ?Sized> ControllerBackend for &T {
    fn kind(&self) -> BackendKind {
        (**self).kind()
    }

    fn device_count(&self) -> u32 {
        (**self).device_count()
    }

    fn is_connected(&self, id: u32) -> bool {
        (**self).is_connected(id)
    }

    fn capabilities(&self, id: u32) -> Result<ControllerCaps> {
        (**self).capabilities(id)
    }

    fn poll(&self, id: u32) -> ControllerState {
        (**self).poll(id)
    }
}

impl<T: ControllerBackend + ?Sized> ControllerBackend for Box<T> {
    fn kind(&self) -> BackendKind {
        (**self).kind()
    }

    fn device_count(&self) -> u32 {
        (**self).device_count()
    }

    fn is_connected(&self, id: u32) -> bool {
        (**self).is_connected(id)
    }

    fn capabilities(&self, id: u32) -> Result<ControllerCaps> {
        (**self).capabilities(id)
    }

    fn poll(&self, id: u32) -> ControllerState {
        (**self).poll(id)
    }
}

/// Format `"<base><id>"`, reporting allocation failure instead of aborting.
pub fn controller_name(base: &str, id: u32) -> Result<String> {
    let mut name = String::new();
    // u32 needs at most 10 digits
    name.try_reserve_exact(base.len() + 10).map_err(Error::ResourceAllocation)?;
    name.push_str(base);
    // writing into a String cannot fail
    let _ = write!(name, "{id}");
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_appends_id() {
        assert_eq!(controller_name("XInputController", 3).unwrap(), "XInputController3");
        assert_eq!(controller_name("", 0).unwrap(), "0");
        assert_eq!(controller_name("Pad", u32::MAX).unwrap(), "Pad4294967295");
    }

    #[test]
    fn kind_prefixes() {
        assert_eq!(BackendKind::Legacy.to_string(), "legacy");
        assert_eq!(BackendKind::XInput.prefix(), "xinput");
    }
}
