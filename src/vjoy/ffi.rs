//! Bindings to the vJoy vendor driver (`vJoyInterface.dll`).

#![cfg(windows)]

use std::os::raw::{c_int, c_long};

use super::{SlotStatus, VJoyDriver};
use crate::mapping::AxisChannel;

// VjdStat values from the vJoy SDK.
const VJD_STAT_OWN: c_int = 0;
const VJD_STAT_FREE: c_int = 1;

#[link(name = "vJoyInterface")]
extern "C" {
    fn vJoyEnabled() -> c_int;
    fn GetvJoyMaxDevices(n: *mut c_int) -> c_int;
    fn GetVJDStatus(rid: u32) -> c_int;
    fn AcquireVJD(rid: u32) -> c_int;
    fn RelinquishVJD(rid: u32);
    fn ResetVJD(rid: u32) -> c_int;
    fn SetAxis(value: c_long, rid: u32, axis: u32) -> c_int;
}

/// Driver backend talking to the installed vJoy interface library.
pub struct VJoyInterface;

impl VJoyInterface {
    pub fn new() -> Self {
        VJoyInterface
    }
}

impl Default for VJoyInterface {
    fn default() -> Self {
        Self::new()
    }
}

impl VJoyDriver for VJoyInterface {
    fn enabled(&self) -> bool {
        unsafe { vJoyEnabled() != 0 }
    }

    fn max_devices(&self) -> Option<u32> {
        let mut count: c_int = 0;
        let ok = unsafe { GetvJoyMaxDevices(&mut count) != 0 };
        if ok && count > 0 {
            Some(count as u32)
        } else {
            None
        }
    }

    fn status(&self, slot: u32) -> SlotStatus {
        match unsafe { GetVJDStatus(slot) } {
            VJD_STAT_OWN => SlotStatus::Owned,
            VJD_STAT_FREE => SlotStatus::Free,
            _ => SlotStatus::Unavailable,
        }
    }

    fn acquire(&mut self, slot: u32) -> bool {
        unsafe { AcquireVJD(slot) != 0 }
    }

    fn reset(&mut self, slot: u32) {
        unsafe {
            ResetVJD(slot);
        }
    }

    fn release(&mut self, slot: u32) {
        unsafe { RelinquishVJD(slot) }
    }

    fn set_axis(&mut self, value: i32, slot: u32, channel: AxisChannel) -> bool {
        unsafe { SetAxis(value as c_long, slot, channel.hid_usage()) != 0 }
    }
}
