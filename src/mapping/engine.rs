//! Per-frame pump: poll input, drop disconnected devices, drive every
//! mapped device's axes into its virtual slot.

use super::axis::AxisChannel;
use super::registry::DeviceRegistry;
use super::transform;
use crate::input::InputSource;
use crate::vjoy::{SlotPool, VJoyDriver};

/// Runs the input half of one frame. The render/edit half happens in the
/// UI afterwards, within the same frame.
pub fn pump_frame<I: InputSource, D: VJoyDriver>(
    registry: &mut DeviceRegistry,
    input: &mut I,
    pool: &mut SlotPool<D>,
) {
    input.poll();
    registry.prune(input);

    for device in registry.devices_mut() {
        if device.mapped_to == 0 {
            continue;
        }

        let axes = input.axes(device.handle);
        for (index, channel) in AxisChannel::ALL.iter().enumerate() {
            let Some(&sample) = axes.get(index) else {
                break;
            };
            transform::apply(
                pool,
                device.mapped_to,
                *channel,
                sample,
                &device.axis_settings[index],
            );
        }
        // Any reported axis past the seventh has no channel and no
        // settings slot; it is ignored.
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::MockInput;
    use crate::mapping::curve::CurveSettings;
    use crate::vjoy::SimDriver;

    #[test]
    fn unmapped_devices_write_nothing() {
        let mut input = MockInput::new();
        input.attach("Stick", "aaa", vec![0.5; 7]);

        let mut registry = DeviceRegistry::new();
        registry.merge(DeviceRegistry::discover(&mut input));

        let mut pool = SlotPool::acquire(SimDriver::with_slots(2)).unwrap();
        pump_frame(&mut registry, &mut input, &mut pool);
        assert!(pool.driver().writes().is_empty());
    }

    #[test]
    fn mapped_device_drives_its_slot() {
        let mut input = MockInput::new();
        let handle = input.attach("Stick", "aaa", vec![0.0; 7]);

        let mut registry = DeviceRegistry::new();
        registry.merge(DeviceRegistry::discover(&mut input));
        registry.devices_mut()[0].selected = true;
        registry.devices_mut()[0].mapped_to = 2;
        registry.devices_mut()[0].axis_settings[1] = CurveSettings {
            curve_type: 0,
            reversed: true,
        };

        input.set_axes(handle, vec![0.5, 0.5, 0.0]);

        let mut pool = SlotPool::acquire(SimDriver::with_slots(2)).unwrap();
        pump_frame(&mut registry, &mut input, &mut pool);

        let driver = pool.driver();
        assert_eq!(driver.axis_value(2, AxisChannel::X), Some(24575));
        // reversed: 32767 - 24575
        assert_eq!(driver.axis_value(2, AxisChannel::Y), Some(8192));
        assert_eq!(driver.axis_value(2, AxisChannel::Z), Some(16384));
        // Only three axes reported, nothing on the rest.
        assert_eq!(driver.axis_value(2, AxisChannel::Rx), None);
        assert_eq!(driver.writes().len(), 3);
    }

    #[test]
    fn disconnected_device_is_pruned_before_writing() {
        let mut input = MockInput::new();
        let handle = input.attach("Stick", "aaa", vec![0.5; 7]);

        let mut registry = DeviceRegistry::new();
        registry.merge(DeviceRegistry::discover(&mut input));
        registry.devices_mut()[0].mapped_to = 1;

        input.detach(handle);

        let mut pool = SlotPool::acquire(SimDriver::with_slots(1)).unwrap();
        pump_frame(&mut registry, &mut input, &mut pool);

        assert!(registry.devices().is_empty());
        assert!(pool.driver().writes().is_empty());
    }

    #[test]
    fn eighth_reported_axis_is_ignored() {
        let mut input = MockInput::new();
        input.attach("Stick", "aaa", vec![1.0; 8]);

        let mut registry = DeviceRegistry::new();
        registry.merge(DeviceRegistry::discover(&mut input));
        registry.devices_mut()[0].mapped_to = 1;

        let mut pool = SlotPool::acquire(SimDriver::with_slots(1)).unwrap();
        pump_frame(&mut registry, &mut input, &mut pool);
        assert_eq!(pool.driver().writes().len(), AxisChannel::COUNT);
    }
}
