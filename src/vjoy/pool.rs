//! Scoped acquisition of the virtual-device slots.

use tracing::{info, warn};

use super::{DriverError, SlotStatus, VJoyDriver};
use crate::mapping::AxisChannel;

/// Owns every assignable virtual slot for the lifetime of the process.
///
/// All slots `1..=N` are acquired and reset up front, before the frame loop
/// starts; `Drop` releases them on every exit path, including early-return
/// startup failures after acquisition.
pub struct SlotPool<D: VJoyDriver> {
    driver: D,
    slot_count: u32,
}

impl<D: VJoyDriver> SlotPool<D> {
    /// Detects the driver and takes ownership of every slot.
    ///
    /// Any slot that is neither already owned nor acquirable fails the whole
    /// startup; slots acquired up to that point are released by `Drop`.
    pub fn acquire(driver: D) -> Result<Self, DriverError> {
        if !driver.enabled() {
            return Err(DriverError::NotDetected);
        }
        info!("virtual-device driver detected");

        let slot_count = driver.max_devices().ok_or(DriverError::NoSlotCount)?;

        let mut pool = SlotPool {
            driver,
            slot_count: 0,
        };

        for slot in 1..=slot_count {
            let owned = match pool.driver.status(slot) {
                SlotStatus::Owned => true,
                SlotStatus::Free => pool.driver.acquire(slot),
                SlotStatus::Unavailable => false,
            };
            if !owned {
                return Err(DriverError::AcquireFailed(slot));
            }
            info!("acquired virtual device {}", slot);
            pool.driver.reset(slot);
            pool.slot_count = slot;
        }

        Ok(pool)
    }

    /// Number of assignable slots; valid `mapped_to` values are
    /// `0..=slot_count`.
    pub fn slot_count(&self) -> u32 {
        self.slot_count
    }

    /// Writes one axis value. A rejected write is logged and absorbed.
    pub fn set_axis(&mut self, value: i32, slot: u32, channel: AxisChannel) {
        if !self.driver.set_axis(value, slot, channel) {
            warn!("axis write rejected: slot {} channel {}", slot, channel);
        }
    }

    /// Backend access for assertions in tests.
    pub fn driver(&self) -> &D {
        &self.driver
    }
}

impl<D: VJoyDriver> Drop for SlotPool<D> {
    fn drop(&mut self) {
        for slot in 1..=self.slot_count {
            self.driver.release(slot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vjoy::sim::SimDriver;

    #[test]
    fn acquires_all_slots_up_front() {
        let pool = SlotPool::acquire(SimDriver::with_slots(4)).expect("acquire");
        assert_eq!(pool.slot_count(), 4);
        for slot in 1..=4 {
            assert_eq!(pool.driver().status(slot), SlotStatus::Owned);
        }
    }

    #[test]
    fn disabled_driver_is_fatal() {
        let mut driver = SimDriver::with_slots(2);
        driver.set_enabled(false);
        assert!(matches!(
            SlotPool::acquire(driver),
            Err(DriverError::NotDetected)
        ));
    }

    #[test]
    fn unavailable_slot_is_fatal() {
        let mut driver = SimDriver::with_slots(3);
        driver.block_slot(2);
        assert!(matches!(
            SlotPool::acquire(driver),
            Err(DriverError::AcquireFailed(2))
        ));
    }
}
