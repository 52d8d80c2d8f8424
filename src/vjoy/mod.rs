//! Virtual-device driver seam.
//!
//! The core only ever calls the narrow [`VJoyDriver`] interface: detect the
//! driver, acquire and reset slots at startup, write axis values while
//! running, release at shutdown. On Windows [`ffi`] binds the vJoy vendor
//! library; everywhere else (and in tests) [`SimDriver`] stands in.

#[cfg(windows)]
pub mod ffi;
pub mod pool;
pub mod sim;

pub use pool::SlotPool;
pub use sim::SimDriver;

use thiserror::Error;

use crate::mapping::AxisChannel;

/// Product name the driver gives its own virtual devices. Discovery skips
/// devices with this name so a virtual device is never mapped onto itself.
pub const VIRTUAL_PRODUCT_NAME: &str = "vJoy Device";

/// Maximum axis resolution the driver declares; scaled outputs land in
/// `0..=MAX_AXIS_VALUE`.
pub const MAX_AXIS_VALUE: i32 = 0x7FFF;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("virtual-device driver not detected")]
    NotDetected,

    #[error("driver did not report a device count")]
    NoSlotCount,

    #[error("failed to acquire virtual device {0}")]
    AcquireFailed(u32),
}

/// Ownership state of one virtual slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotStatus {
    /// Owned by this process.
    Owned,
    /// Free to acquire.
    Free,
    /// Owned by another process, absent, or unreadable.
    Unavailable,
}

/// Narrow interface over the virtual-device driver.
pub trait VJoyDriver {
    /// Whether the driver is installed and enabled.
    fn enabled(&self) -> bool;

    /// Number of virtual slots the driver supports, if it reports one.
    fn max_devices(&self) -> Option<u32>;

    fn status(&self, slot: u32) -> SlotStatus;

    /// Attempts to take ownership of a slot. `false` on failure.
    fn acquire(&mut self, slot: u32) -> bool;

    /// Centers all controls of an owned slot.
    fn reset(&mut self, slot: u32);

    fn release(&mut self, slot: u32);

    /// Writes a scaled axis value to a channel of an owned slot. `false`
    /// if the write was rejected.
    fn set_axis(&mut self, value: i32, slot: u32, channel: AxisChannel) -> bool;
}

impl<T: VJoyDriver + ?Sized> VJoyDriver for Box<T> {
    fn enabled(&self) -> bool {
        (**self).enabled()
    }

    fn max_devices(&self) -> Option<u32> {
        (**self).max_devices()
    }

    fn status(&self, slot: u32) -> SlotStatus {
        (**self).status(slot)
    }

    fn acquire(&mut self, slot: u32) -> bool {
        (**self).acquire(slot)
    }

    fn reset(&mut self, slot: u32) {
        (**self).reset(slot)
    }

    fn release(&mut self, slot: u32) {
        (**self).release(slot)
    }

    fn set_axis(&mut self, value: i32, slot: u32, channel: AxisChannel) -> bool {
        (**self).set_axis(value, slot, channel)
    }
}
