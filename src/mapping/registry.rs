//! Working set of physical devices.

use tracing::{debug, info};

use super::device::{DeviceEntry, StableId};
use crate::input::InputSource;
use crate::vjoy::VIRTUAL_PRODUCT_NAME;

/// Tracks every physical device seen this session, in discovery order.
#[derive(Debug, Default)]
pub struct DeviceRegistry {
    devices: Vec<DeviceEntry>,
}

impl DeviceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enumerates attached devices, skipping the driver's own virtual
    /// devices so one is never mapped onto itself.
    pub fn discover<I: InputSource>(input: &mut I) -> Vec<DeviceEntry> {
        input
            .discover()
            .into_iter()
            .filter(|found| found.name != VIRTUAL_PRODUCT_NAME)
            .map(DeviceEntry::from_discovered)
            .collect()
    }

    /// Appends discovered devices whose GUID is not already tracked.
    /// Existing entries are never replaced, so merging the same set twice
    /// changes nothing.
    pub fn merge(&mut self, discovered: Vec<DeviceEntry>) {
        for entry in discovered {
            if self.devices.iter().any(|known| known.id == entry.id) {
                continue;
            }
            info!("tracking device {} ({})", entry.name, entry.id);
            self.devices.push(entry);
        }
    }

    /// Drops every device the input subsystem reports zero axes for.
    ///
    /// Two-phase: a read-only scan collects the disconnected identities,
    /// then a retain pass applies the removals. Order and settings of the
    /// surviving entries are untouched.
    pub fn prune<I: InputSource>(&mut self, input: &I) {
        let gone: Vec<StableId> = self
            .devices
            .iter()
            .filter(|entry| {
                !input.is_present(entry.handle) || input.axes(entry.handle).is_empty()
            })
            .map(|entry| entry.id.clone())
            .collect();

        if gone.is_empty() {
            return;
        }

        for id in &gone {
            debug!("device {} disconnected", id);
        }
        self.devices.retain(|entry| !gone.contains(&entry.id));
    }

    /// Slot numbers held by other selected devices, the exclusion list for
    /// one device's slot stepper. Advisory only; nothing in the data model
    /// forbids duplicate assignments. Unassigned devices contribute
    /// nothing: 0 means "no slot" and must stay reachable for everyone.
    pub fn slots_in_use_except(&self, id: &StableId) -> Vec<u32> {
        self.devices
            .iter()
            .filter(|entry| entry.selected && entry.id != *id && entry.mapped_to != 0)
            .map(|entry| entry.mapped_to)
            .collect()
    }

    pub fn devices(&self) -> &[DeviceEntry] {
        &self.devices
    }

    pub fn devices_mut(&mut self) -> &mut [DeviceEntry] {
        &mut self.devices
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::MockInput;

    #[test]
    fn merge_is_idempotent_by_guid() {
        let mut input = MockInput::new();
        input.attach("Stick A", "aaa", vec![0.0; 7]);
        input.attach("Stick B", "bbb", vec![0.0; 7]);

        let mut registry = DeviceRegistry::new();
        registry.merge(DeviceRegistry::discover(&mut input));
        registry.merge(DeviceRegistry::discover(&mut input));

        assert_eq!(registry.devices().len(), 2);
    }

    #[test]
    fn merge_keeps_existing_entries() {
        let mut input = MockInput::new();
        input.attach("Stick A", "aaa", vec![0.0; 7]);

        let mut registry = DeviceRegistry::new();
        registry.merge(DeviceRegistry::discover(&mut input));
        registry.devices_mut()[0].mapped_to = 3;
        registry.devices_mut()[0].selected = true;

        registry.merge(DeviceRegistry::discover(&mut input));
        assert_eq!(registry.devices()[0].mapped_to, 3);
        assert!(registry.devices()[0].selected);
    }

    #[test]
    fn discovery_skips_the_virtual_product() {
        let mut input = MockInput::new();
        input.attach("Stick A", "aaa", vec![0.0; 7]);
        input.attach(VIRTUAL_PRODUCT_NAME, "vvv", vec![0.0; 7]);

        let discovered = DeviceRegistry::discover(&mut input);
        assert_eq!(discovered.len(), 1);
        assert_eq!(discovered[0].name, "Stick A");
    }

    #[test]
    fn prune_removes_exactly_the_disconnected() {
        let mut input = MockInput::new();
        let a = input.attach("Stick A", "aaa", vec![0.0; 7]);
        input.attach("Stick B", "bbb", vec![0.0; 7]);
        input.attach("Stick C", "ccc", vec![0.0; 7]);

        let mut registry = DeviceRegistry::new();
        registry.merge(DeviceRegistry::discover(&mut input));
        registry.devices_mut()[1].mapped_to = 2;

        input.detach(a);
        registry.prune(&input);

        let names: Vec<&str> = registry
            .devices()
            .iter()
            .map(|entry| entry.name.as_str())
            .collect();
        assert_eq!(names, ["Stick B", "Stick C"]);
        assert_eq!(registry.devices()[0].mapped_to, 2);
    }

    #[test]
    fn exclusion_list_covers_other_selected_devices() {
        let mut input = MockInput::new();
        input.attach("Stick A", "aaa", vec![0.0; 7]);
        input.attach("Stick B", "bbb", vec![0.0; 7]);
        input.attach("Stick C", "ccc", vec![0.0; 7]);

        let mut registry = DeviceRegistry::new();
        registry.merge(DeviceRegistry::discover(&mut input));
        {
            let devices = registry.devices_mut();
            devices[0].selected = true;
            devices[0].mapped_to = 1;
            devices[1].selected = true;
            devices[1].mapped_to = 2;
            // devices[2] unselected, must not contribute
            devices[2].mapped_to = 3;
        }

        let id = registry.devices()[0].id.clone();
        assert_eq!(registry.slots_in_use_except(&id), vec![2]);
    }

    #[test]
    fn unassigned_devices_never_exclude_slot_zero() {
        let mut input = MockInput::new();
        input.attach("Stick A", "aaa", vec![0.0; 7]);
        input.attach("Stick B", "bbb", vec![0.0; 7]);

        let mut registry = DeviceRegistry::new();
        registry.merge(DeviceRegistry::discover(&mut input));
        {
            let devices = registry.devices_mut();
            devices[0].selected = true;
            devices[0].mapped_to = 1;
            // Selected but still unassigned; must not make 0 unreachable
            // for anyone else.
            devices[1].selected = true;
            devices[1].mapped_to = 0;
        }

        let id = registry.devices()[0].id.clone();
        assert_eq!(registry.slots_in_use_except(&id), Vec::<u32>::new());
    }
}
