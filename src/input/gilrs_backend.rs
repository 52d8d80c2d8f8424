//! gilrs-backed input source.

use std::collections::HashMap;

use gilrs::{Axis, GamepadId, Gilrs};
use tracing::{debug, info};

use super::{DiscoveredDevice, InputError, InputSource, SessionHandle};
use crate::mapping::AxisChannel;

/// gilrs axes read for each channel, in channel order. gilrs has no
/// slider axis, so the hat's horizontal axis stands in for the Slider
/// channel.
const AXIS_ORDER: [Axis; AxisChannel::COUNT] = [
    Axis::LeftStickX,
    Axis::LeftStickY,
    Axis::LeftZ,
    Axis::RightStickX,
    Axis::RightStickY,
    Axis::RightZ,
    Axis::DPadX,
];

pub struct GilrsSource {
    gilrs: Gilrs,
    /// Session handles are allocated here, in enumeration order. gilrs ids
    /// stay internal so the rest of the crate never sees backend types.
    handles: HashMap<SessionHandle, GamepadId>,
    next_handle: usize,
}

impl GilrsSource {
    pub fn new() -> Result<Self, InputError> {
        let gilrs = Gilrs::new().map_err(|e| InputError::Initialization(e.to_string()))?;
        Ok(GilrsSource {
            gilrs,
            handles: HashMap::new(),
            next_handle: 0,
        })
    }

    fn handle_for(&mut self, id: GamepadId) -> SessionHandle {
        if let Some((handle, _)) = self.handles.iter().find(|(_, known)| **known == id) {
            return *handle;
        }
        let handle = SessionHandle(self.next_handle);
        self.next_handle += 1;
        self.handles.insert(handle, id);
        handle
    }
}

impl InputSource for GilrsSource {
    fn poll(&mut self) {
        // Drain the queue; axis reads below go through the cached state.
        while let Some(event) = self.gilrs.next_event() {
            debug!("input event: {:?}", event.event);
        }
    }

    fn discover(&mut self) -> Vec<DiscoveredDevice> {
        let found: Vec<(GamepadId, String, String)> = self
            .gilrs
            .gamepads()
            .map(|(id, gamepad)| {
                let name = match gamepad.name() {
                    "" => "Unknown".to_string(),
                    name => name.to_string(),
                };
                let uuid = gamepad.uuid();
                let guid = if uuid == [0u8; 16] {
                    "Unknown".to_string()
                } else {
                    uuid.iter().map(|b| format!("{:02x}", b)).collect()
                };
                (id, name, guid)
            })
            .collect();

        found
            .into_iter()
            .map(|(id, name, guid)| {
                let handle = self.handle_for(id);
                info!("found joystick: {} {}", name, guid);
                DiscoveredDevice { handle, name, guid }
            })
            .collect()
    }

    fn is_present(&self, handle: SessionHandle) -> bool {
        self.handles
            .get(&handle)
            .map(|id| self.gilrs.connected_gamepad(*id).is_some())
            .unwrap_or(false)
    }

    fn axes(&self, handle: SessionHandle) -> Vec<f32> {
        let Some(id) = self.handles.get(&handle) else {
            return Vec::new();
        };
        let Some(gamepad) = self.gilrs.connected_gamepad(*id) else {
            // Disconnected pads report no axes, which is the prune signal.
            return Vec::new();
        };

        AXIS_ORDER
            .iter()
            .map(|axis| gamepad.axis_data(*axis).map(|d| d.value()).unwrap_or(0.0))
            .collect()
    }
}
