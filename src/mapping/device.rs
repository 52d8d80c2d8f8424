//! Working-set entry for one physical joystick.

use std::fmt;

use crate::input::{DiscoveredDevice, SessionHandle};
use crate::mapping::axis::AxisChannel;
use crate::mapping::curve::CurveSettings;

/// Stable hardware identifier (GUID). The only key ever persisted or used
/// for cross-frame matching; session handles must never take this role.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StableId(String);

impl StableId {
    pub fn new(guid: impl Into<String>) -> Self {
        StableId(guid.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One physical device tracked by the registry: identity, its assignment to
/// a virtual slot, and the per-channel curve configuration.
#[derive(Debug, Clone)]
pub struct DeviceEntry {
    /// Display name, "Unknown" when the input subsystem has none.
    pub name: String,
    /// Ephemeral polling handle, changes across reconnects.
    pub handle: SessionHandle,
    /// Stable identity, the persistence key.
    pub id: StableId,
    /// Whether the axis-editing panel for this device is open.
    pub selected: bool,
    /// 0 = unassigned, 1..=N = virtual slot this device drives.
    pub mapped_to: u32,
    pub axis_settings: [CurveSettings; AxisChannel::COUNT],
}

impl DeviceEntry {
    pub fn from_discovered(found: DiscoveredDevice) -> Self {
        DeviceEntry {
            name: found.name,
            handle: found.handle,
            id: StableId::new(found.guid),
            selected: false,
            mapped_to: 0,
            axis_settings: [CurveSettings::default(); AxisChannel::COUNT],
        }
    }

    /// Label shown in the device list, `<handle> - <name>`.
    pub fn label(&self) -> String {
        format!("{} - {}", self.handle, self.name)
    }
}
