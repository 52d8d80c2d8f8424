//! Persistence of slot assignments and curve settings.
//!
//! Line-oriented text, one record per selected device:
//!
//! ```text
//! [<guid>]
//! <mapped_to>
//! { <curve_type>; <reversed> }    x7, one per channel in fixed order
//! ```
//!
//! Loading is best-effort throughout: malformed lines default, a file that
//! cannot be opened yields an empty record list. Only the GUID ties a
//! record back to a device.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tracing::{info, warn};

use super::axis::AxisChannel;
use super::curve::CurveSettings;
use super::device::{DeviceEntry, StableId};

/// One persisted device assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentRecord {
    pub id: StableId,
    pub mapped_to: u32,
    pub axis_settings: [CurveSettings; AxisChannel::COUNT],
}

impl AssignmentRecord {
    fn new(id: StableId) -> Self {
        AssignmentRecord {
            id,
            mapped_to: 0,
            axis_settings: [CurveSettings::default(); AxisChannel::COUNT],
        }
    }
}

/// Writes one record per selected device, in container order, replacing
/// any existing file. Unselected devices are skipped silently.
pub fn save(path: &Path, devices: &[DeviceEntry]) -> io::Result<()> {
    let mut out = String::new();
    for device in devices {
        if !device.selected {
            continue;
        }
        out.push_str(&format!("[{}]\n", device.id));
        out.push_str(&format!("{}\n", device.mapped_to));
        for settings in &device.axis_settings {
            out.push_str(&format!("{}\n", settings));
        }
    }

    let mut file = fs::File::create(path)?;
    file.write_all(out.as_bytes())?;
    info!("saved assignments to {}", path.display());
    Ok(())
}

/// Reads records back. Returns an empty list only when the file cannot be
/// opened; everything else is tolerated line by line.
pub fn load(path: &Path) -> Vec<AssignmentRecord> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            warn!("could not open {}: {}", path.display(), e);
            return Vec::new();
        }
    };

    let mut records: Vec<AssignmentRecord> = Vec::new();
    // Position within the current record: 0 = expect mapped_to,
    // 1.. = settings line for channel position - 1.
    let mut position = 0usize;

    for line in contents.lines() {
        if let Some(rest) = line.strip_prefix('[') {
            let guid = rest.strip_suffix(']').unwrap_or(rest);
            records.push(AssignmentRecord::new(StableId::new(guid)));
            position = 0;
            continue;
        }

        let Some(record) = records.last_mut() else {
            // Garbage before the first header.
            continue;
        };

        if position == 0 {
            record.mapped_to = line.trim().parse().unwrap_or(0);
            position += 1;
        } else if position <= AxisChannel::COUNT {
            record.axis_settings[position - 1] = CurveSettings::parse_line(line);
            position += 1;
        }
    }

    records
}

/// Overlays loaded records onto the working set, matching by GUID.
///
/// A matched device takes the record's slot and all seven settings and
/// becomes selected. Unmatched records and devices are left alone.
pub fn apply(records: &[AssignmentRecord], devices: &mut [DeviceEntry]) {
    for device in devices {
        let Some(record) = records.iter().find(|r| r.id == device.id) else {
            continue;
        };
        device.mapped_to = record.mapped_to;
        device.selected = true;
        device.axis_settings = record.axis_settings;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::SessionHandle;

    fn device(guid: &str) -> DeviceEntry {
        DeviceEntry {
            name: "Test Stick".to_string(),
            handle: SessionHandle(0),
            id: StableId::new(guid),
            selected: false,
            mapped_to: 0,
            axis_settings: [CurveSettings::default(); AxisChannel::COUNT],
        }
    }

    #[test]
    fn round_trip_restores_selected_devices() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("save.data");

        let mut saved = device("ABC123");
        saved.selected = true;
        saved.mapped_to = 2;
        saved.axis_settings[0] = CurveSettings {
            curve_type: 1,
            reversed: true,
        };
        let mut skipped = device("DEF456");
        skipped.mapped_to = 3; // unselected, must not be written

        save(&path, &[saved.clone(), skipped]).unwrap();

        let records = load(&path);
        assert_eq!(records.len(), 1);

        let mut fresh = [device("ABC123")];
        apply(&records, &mut fresh);

        assert_eq!(fresh[0].mapped_to, 2);
        assert!(fresh[0].selected);
        assert_eq!(
            fresh[0].axis_settings[0],
            CurveSettings {
                curve_type: 1,
                reversed: true
            }
        );
        assert_eq!(fresh[0].axis_settings[1], CurveSettings::default());
    }

    #[test]
    fn missing_file_loads_empty() {
        assert!(load(Path::new("/nonexistent/save.data")).is_empty());
    }

    #[test]
    fn malformed_settings_line_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("save.data");
        fs::write(&path, "[XYZ]\n4\n{}\n{ 1; 1 }\n").unwrap();

        let records = load(&path);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].mapped_to, 4);
        assert_eq!(records[0].axis_settings[0], CurveSettings::default());
        assert_eq!(
            records[0].axis_settings[1],
            CurveSettings {
                curve_type: 1,
                reversed: true
            }
        );
    }

    #[test]
    fn garbage_mapped_to_defaults_to_unassigned() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("save.data");
        fs::write(&path, "[XYZ]\nnot a number\n").unwrap();

        let records = load(&path);
        assert_eq!(records[0].mapped_to, 0);
    }

    #[test]
    fn apply_leaves_unmatched_devices_alone() {
        let records = vec![AssignmentRecord {
            id: StableId::new("OTHER"),
            mapped_to: 5,
            axis_settings: [CurveSettings::default(); AxisChannel::COUNT],
        }];

        let mut devices = [device("ABC123")];
        apply(&records, &mut devices);
        assert_eq!(devices[0].mapped_to, 0);
        assert!(!devices[0].selected);
    }
}
