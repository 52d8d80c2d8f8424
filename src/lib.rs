//! joymap maps physical joystick axes onto vJoy virtual-device axes.
//!
//! Each tracked physical device can be assigned to one virtual slot and
//! carries a per-axis response curve (linear or cubic) plus a reversal
//! flag. Assignments are keyed by the device GUID and persist across runs
//! in a flat text file. The whole application is one synchronous frame
//! loop: poll input, drop disconnected devices, drive mapped axes, render
//! the egui surface, apply edits.

pub mod config;
pub mod input;
pub mod mapping;
pub mod ui;
pub mod vjoy;
