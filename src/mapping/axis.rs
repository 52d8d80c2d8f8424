//! Axis channels a virtual device can be driven on.
//!
//! Exactly seven channels are configurable, matching the seven settings
//! lines of an assignment record. A physical device may report more axes
//! than this; anything past the seventh is ignored entirely.

use std::fmt;

/// One of the standard HID axis usages the virtual device exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisChannel {
    X,
    Y,
    Z,
    Rx,
    Ry,
    Rz,
    Slider,
}

impl AxisChannel {
    /// Number of configurable channels per device.
    pub const COUNT: usize = 7;

    /// All channels in wire order. Index in this array is also the index
    /// into a device's settings array and into the reported axis list.
    pub const ALL: [AxisChannel; Self::COUNT] = [
        AxisChannel::X,
        AxisChannel::Y,
        AxisChannel::Z,
        AxisChannel::Rx,
        AxisChannel::Ry,
        AxisChannel::Rz,
        AxisChannel::Slider,
    ];

    /// HID usage id the driver expects for this channel.
    pub fn hid_usage(self) -> u32 {
        match self {
            AxisChannel::X => 0x30,
            AxisChannel::Y => 0x31,
            AxisChannel::Z => 0x32,
            AxisChannel::Rx => 0x33,
            AxisChannel::Ry => 0x34,
            AxisChannel::Rz => 0x35,
            AxisChannel::Slider => 0x36,
        }
    }

}

impl fmt::Display for AxisChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AxisChannel::X => "X",
            AxisChannel::Y => "Y",
            AxisChannel::Z => "Z",
            AxisChannel::Rx => "Rx",
            AxisChannel::Ry => "Ry",
            AxisChannel::Rz => "Rz",
            AxisChannel::Slider => "Slider",
        };
        write!(f, "{}", name)
    }
}
