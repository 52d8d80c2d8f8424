//! In-memory driver backend.
//!
//! Stands in for the vendor driver on hosts without vJoy and backs the test
//! suite: every accepted write is recorded and the latest value per channel
//! is queryable.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use super::{SlotStatus, VJoyDriver};
use crate::mapping::AxisChannel;

#[derive(Debug)]
pub struct SimDriver {
    enabled: bool,
    slots: u32,
    owned: HashSet<u32>,
    blocked: HashSet<u32>,
    axis_state: HashMap<(u32, AxisChannel), i32>,
    writes: Vec<(u32, AxisChannel, i32)>,
}

impl SimDriver {
    pub fn with_slots(slots: u32) -> Self {
        SimDriver {
            enabled: true,
            slots,
            owned: HashSet::new(),
            blocked: HashSet::new(),
            axis_state: HashMap::new(),
            writes: Vec::new(),
        }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Marks a slot as held by some other process.
    pub fn block_slot(&mut self, slot: u32) {
        self.blocked.insert(slot);
    }

    /// Latest value written to a channel, if any.
    pub fn axis_value(&self, slot: u32, channel: AxisChannel) -> Option<i32> {
        self.axis_state.get(&(slot, channel)).copied()
    }

    /// Every accepted write in order, as `(slot, channel, value)`.
    pub fn writes(&self) -> &[(u32, AxisChannel, i32)] {
        &self.writes
    }
}

impl VJoyDriver for SimDriver {
    fn enabled(&self) -> bool {
        self.enabled
    }

    fn max_devices(&self) -> Option<u32> {
        Some(self.slots)
    }

    fn status(&self, slot: u32) -> SlotStatus {
        if slot == 0 || slot > self.slots || self.blocked.contains(&slot) {
            SlotStatus::Unavailable
        } else if self.owned.contains(&slot) {
            SlotStatus::Owned
        } else {
            SlotStatus::Free
        }
    }

    fn acquire(&mut self, slot: u32) -> bool {
        if self.status(slot) != SlotStatus::Free {
            return false;
        }
        self.owned.insert(slot);
        true
    }

    fn reset(&mut self, slot: u32) {
        self.axis_state.retain(|(s, _), _| *s != slot);
    }

    fn release(&mut self, slot: u32) {
        self.owned.remove(&slot);
    }

    fn set_axis(&mut self, value: i32, slot: u32, channel: AxisChannel) -> bool {
        if !self.owned.contains(&slot) {
            return false;
        }
        debug!("set_axis slot {} {} = {}", slot, channel, value);
        self.axis_state.insert((slot, channel), value);
        self.writes.push((slot, channel, value));
        true
    }
}
