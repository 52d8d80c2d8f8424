//! Axis transform pipeline: raw sample → curve → scale → driver write.

use tracing::warn;

use super::axis::AxisChannel;
use super::curve::{CurveKind, CurveSettings};
use crate::vjoy::{SlotPool, VJoyDriver, MAX_AXIS_VALUE};

/// Applies the configured curve to a raw sample in [-1, 1] and maps the
/// result into the unit interval, honoring the reversed flag.
///
/// `None` for an unrecognized curve type; the caller skips the write.
fn shaped(x: f32, settings: &CurveSettings) -> Option<f32> {
    let curved = match settings.kind()? {
        CurveKind::Linear => x,
        CurveKind::Cubic => x.powi(3),
    };

    let mut unit = (curved + 1.0) / 2.0;
    if settings.reversed {
        unit = 1.0 - unit;
    }
    Some(unit)
}

/// Scales a raw sample to the virtual device's integer range.
pub fn scaled(x: f32, settings: &CurveSettings) -> Option<i32> {
    shaped(x, settings).map(|unit| (unit * MAX_AXIS_VALUE as f32).round() as i32)
}

/// Runs the pipeline for one channel and writes the result to the target
/// slot. An unknown curve type skips the write with a diagnostic; it is
/// never fatal.
pub fn apply<D: VJoyDriver>(
    pool: &mut SlotPool<D>,
    slot: u32,
    channel: AxisChannel,
    x: f32,
    settings: &CurveSettings,
) {
    match scaled(x, settings) {
        Some(value) => pool.set_axis(value, slot, channel),
        None => warn!(
            "invalid curve type {} on channel {}, value not applied",
            settings.curve_type, channel
        ),
    }
}
