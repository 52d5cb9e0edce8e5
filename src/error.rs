//! Error types.
//!
//! Only capability-style queries fail. Connectivity and polling never return an
//! error: a slot that cannot be read is reported as disconnected instead.

use std::collections::TryReserveError;

use crate::device::BackendKind;

/// Errors returned by backend queries and configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The slot cannot report capabilities (out of range or no device present).
    #[error("cannot get capabilities for {backend} id {id}")]
    InvalidDevice { id: u32, backend: BackendKind },

    /// Building a controller name string failed to allocate.
    #[error("out of memory building controller name")]
    ResourceAllocation(#[from] TryReserveError),

    /// Configuration text is not valid TOML for [`ControllerConfig`](crate::config::ControllerConfig).
    #[error("invalid controller config: {0}")]
    Config(#[from] toml::de::Error),

    /// Reading a configuration file failed.
    #[error("failed to read controller config: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn invalid_device(id: u32, backend: BackendKind) -> Self {
        log::debug!("capability query failed: backend={backend} id={id}");
        Error::InvalidDevice { id, backend }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
