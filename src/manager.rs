//! Controller factory and discovery.
//!
//! [`Manager`] owns one legacy and one XInput backend and hands out
//! [`Controller`]s that borrow them. [`Manager::new`] picks the system drivers
//! on Windows and null backends elsewhere.
//!
//! ```no_run
//! use joybridge::{ControllerConfig, Manager};
//!
//! let manager = Manager::new(ControllerConfig::default());
//! for id in manager.connected_xinput() {
//!     let pad = manager.create_xinput(id).unwrap();
//!     println!("{}: {:?}", pad.name(), pad.state());
//! }
//! ```

use std::collections::HashMap;

use crate::backends::{is_supported, NullBackend, SystemLegacyBackend, SystemXInputBackend};
use crate::caps::ControllerCaps;
use crate::config::ControllerConfig;
use crate::controller::Controller;
use crate::device::ControllerBackend;
use crate::error::{Error, Result};
use crate::snapshot::Snapshot;

/// Factory for controllers over one legacy and one XInput backend.
pub struct Manager<L, X> {
    legacy: L,
    xinput: X,
    config: ControllerConfig,
}

impl Manager<SystemLegacyBackend, SystemXInputBackend> {
    /// Manager over the system winmm and XInput drivers, or over
    /// [`NullBackend`]s where [`is_supported`] is `false`.
    pub fn new(config: ControllerConfig) -> Self {
        Self::with_backends(
            crate::backends::system_legacy(),
            crate::backends::system_xinput(),
            config,
        )
    }
}

impl<L: ControllerBackend, X: ControllerBackend> Manager<L, X> {
    /// Manager over explicit backends, e.g. fakes in tests.
    pub fn with_backends(legacy: L, xinput: X, config: ControllerConfig) -> Self {
        Self {
            legacy,
            xinput,
            config,
        }
    }

    /// Settings every created controller starts with.
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// The winmm backend.
    pub fn legacy(&self) -> &L {
        &self.legacy
    }

    pub fn xinput(&self) -> &X {
        &self.xinput
    }

    /// Build a controller for legacy slot `id` and poll it once.
    pub fn create_legacy(&self, id: u32) -> Result<Controller<&L>> {
        Self::create(&self.legacy, id, self.config)
    }

    /// Build a controller for XInput slot `id` and poll it once.
    pub fn create_xinput(&self, id: u32) -> Result<Controller<&X>> {
        Self::create(&self.xinput, id, self.config)
    }

    /// Always-connected controller that never reports input. Any id is accepted.
    pub fn create_null(&self, id: u32) -> Result<Controller<NullBackend>> {
        let backend = NullBackend::new();
        let caps = backend.capabilities(id)?;
        Ok(Self::attach(backend, id, caps, self.config))
    }

    /// Platform default controller for slot `id`.
    ///
    /// A legacy controller where [`is_supported`] holds, otherwise a null
    /// controller, so callers can use one code path on every platform.
    pub fn create_controller(
        &self,
        id: u32,
    ) -> Result<Controller<Box<dyn ControllerBackend + '_>>> {
        if is_supported() {
            let backend: Box<dyn ControllerBackend + '_> = Box::new(&self.legacy);
            Self::create(backend, id, self.config)
        } else {
            let backend: Box<dyn ControllerBackend + '_> = Box::new(NullBackend::new());
            let caps = backend.capabilities(id)?;
            Ok(Self::attach(backend, id, caps, self.config))
        }
    }

    fn create<B: ControllerBackend>(
        backend: B,
        id: u32,
        config: ControllerConfig,
    ) -> Result<Controller<B>> {
        let count = backend.device_count();
        if id >= count {
            log::debug!("{} id {id} out of range ({count} slots)", backend.kind());
            return Err(Error::invalid_device(id, backend.kind()));
        }

        // A slot with nothing plugged in is still a valid controller; it
        // starts disconnected with empty capabilities.
        let caps = match backend.capabilities(id) {
            Ok(caps) => caps,
            Err(Error::InvalidDevice { .. }) => ControllerCaps::default(),
            Err(e) => return Err(e),
        };

        Ok(Self::attach(backend, id, caps, config))
    }

    fn attach<B: ControllerBackend>(
        backend: B,
        id: u32,
        caps: ControllerCaps,
        config: ControllerConfig,
    ) -> Controller<B> {
        let mut controller = Controller::new(id, backend, config);
        controller.set_caps(caps);
        controller.poll();
        controller
    }

    /// Legacy slots that answer a position query right now.
    pub fn connected_legacy(&self) -> Vec<u32> {
        self.legacy.connected_devices()
    }

    /// XInput slots with a controller plugged in.
    pub fn connected_xinput(&self) -> Vec<u32> {
        self.xinput.connected_devices()
    }

    /// Poll every connected slot of both backends.
    ///
    /// Keys are `"<backend>:<id>"`, e.g. `"legacy:0"` or `"xinput:2"`.
    pub fn snapshot(&self) -> Snapshot {
        let mut map = HashMap::new();
        collect(&self.legacy, &mut map);
        collect(&self.xinput, &mut map);
        Snapshot(map)
    }
}

fn collect<B: ControllerBackend>(
    backend: &B,
    map: &mut HashMap<String, crate::state::ControllerState>,
) {
    for id in 0..backend.device_count() {
        let state = backend.poll(id);
        if state.connected {
            map.insert(format!("{}:{id}", backend.kind()), state);
        }
    }
}
