//! In-memory input source for tests.

use std::collections::HashMap;

use super::{DiscoveredDevice, InputSource, SessionHandle};

#[derive(Debug, Clone)]
struct MockDevice {
    name: String,
    guid: String,
    axes: Vec<f32>,
}

/// Scriptable [`InputSource`]: tests attach and detach devices and set
/// their axis samples directly.
#[derive(Debug, Default)]
pub struct MockInput {
    devices: HashMap<SessionHandle, MockDevice>,
    next_handle: usize,
}

impl MockInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches a device and returns its session handle.
    pub fn attach(&mut self, name: &str, guid: &str, axes: Vec<f32>) -> SessionHandle {
        let handle = SessionHandle(self.next_handle);
        self.next_handle += 1;
        self.devices.insert(
            handle,
            MockDevice {
                name: name.to_string(),
                guid: guid.to_string(),
                axes,
            },
        );
        handle
    }

    /// Detaches a device; subsequent axis reads report zero axes.
    pub fn detach(&mut self, handle: SessionHandle) {
        self.devices.remove(&handle);
    }

    pub fn set_axes(&mut self, handle: SessionHandle, axes: Vec<f32>) {
        if let Some(device) = self.devices.get_mut(&handle) {
            device.axes = axes;
        }
    }
}

impl InputSource for MockInput {
    fn poll(&mut self) {}

    fn discover(&mut self) -> Vec<DiscoveredDevice> {
        let mut found: Vec<DiscoveredDevice> = self
            .devices
            .iter()
            .map(|(handle, device)| DiscoveredDevice {
                handle: *handle,
                name: device.name.clone(),
                guid: device.guid.clone(),
            })
            .collect();
        found.sort_by_key(|d| d.handle.0);
        found
    }

    fn is_present(&self, handle: SessionHandle) -> bool {
        self.devices.contains_key(&handle)
    }

    fn axes(&self, handle: SessionHandle) -> Vec<f32> {
        self.devices
            .get(&handle)
            .map(|d| d.axes.clone())
            .unwrap_or_default()
    }
}
