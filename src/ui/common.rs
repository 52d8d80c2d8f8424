//! Shared UI widgets.

use egui::{Grid, Ui};

/// Integer stepper with a min/max/exclusion contract: `-` and `+` buttons
/// around the current value. Stepping skips over excluded values in the
/// step direction and never leaves `min..=max`; if no admissible value
/// exists in that direction the value stays put.
///
/// Returns true when the value changed.
pub fn stepper(ui: &mut Ui, value: &mut u32, min: u32, max: u32, exclude: &[u32]) -> bool {
    let mut changed = false;

    Grid::new(ui.next_auto_id()).num_columns(3).show(ui, |ui| {
        if ui.button("-").clicked() {
            if let Some(next) = step(*value, -1, min, max, exclude) {
                *value = next;
                changed = true;
            }
        }
        ui.label(value.to_string());
        if ui.button("+").clicked() {
            if let Some(next) = step(*value, 1, min, max, exclude) {
                *value = next;
                changed = true;
            }
        }
        ui.end_row();
    });

    changed
}

/// Next admissible value in `direction` from `value`, or `None` if every
/// candidate up to the bound is excluded. Stepping down clamps to `min`
/// before the exclusion check, so the floor is always reachable. A
/// starting value outside the range (possible after loading a hand-edited
/// file) is pulled back in.
fn step(value: u32, direction: i64, min: u32, max: u32, exclude: &[u32]) -> Option<u32> {
    let mut candidate = (value as i64 + direction).clamp(min as i64, max as i64);
    if candidate == value as i64 {
        return None;
    }
    loop {
        if candidate == min as i64 && direction < 0 {
            return Some(min);
        }
        if !exclude.contains(&(candidate as u32)) {
            return Some(candidate as u32);
        }
        candidate += direction;
        if candidate < min as i64 || candidate > max as i64 {
            return None;
        }
    }
}
