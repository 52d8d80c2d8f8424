//! Physical input seam.
//!
//! The rest of the application talks to the input subsystem through the
//! narrow [`InputSource`] trait: enumerate devices, check presence, read
//! axis samples. The production backend wraps gilrs; tests use
//! [`MockInput`].

pub mod gilrs_backend;
pub mod mock;

pub use gilrs_backend::GilrsSource;
pub use mock::MockInput;

use std::fmt;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to initialize input backend: {0}")]
    Initialization(String),
}

/// Ephemeral per-session device handle.
///
/// Valid only for polling calls within the current run; it changes across
/// reconnects and must never be persisted (see [`crate::mapping::StableId`]
/// for the durable identity).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionHandle(pub usize);

impl fmt::Display for SessionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A device as reported by enumeration. Name and GUID are best-effort;
/// backends substitute the literal "Unknown" when the subsystem has none.
#[derive(Debug, Clone)]
pub struct DiscoveredDevice {
    pub handle: SessionHandle,
    pub name: String,
    pub guid: String,
}

/// Narrow interface over the physical input subsystem.
pub trait InputSource {
    /// Pumps the backend's event queue. Called once per frame before any
    /// axis reads so cached state is current.
    fn poll(&mut self);

    /// Enumerates currently attached devices.
    fn discover(&mut self) -> Vec<DiscoveredDevice>;

    /// Whether the handle still refers to an attached device.
    fn is_present(&self, handle: SessionHandle) -> bool;

    /// Current axis samples in [-1, 1], in channel order. An empty vector
    /// means the device is gone; the registry prunes on it.
    fn axes(&self, handle: SessionHandle) -> Vec<f32>;
}
