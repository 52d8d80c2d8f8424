//! Per-axis response curve configuration and its text form.

use std::fmt;

/// Response curves the transform pipeline knows how to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveKind {
    Linear,
    Cubic,
}

/// Configuration for one axis channel.
///
/// `curve_type` is kept as the raw stored integer rather than a closed enum:
/// an assignment file can carry any digit, and an unknown value must surface
/// as a skipped write plus a diagnostic at apply-time, not as a parse
/// failure or a crash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveSettings {
    pub curve_type: u8,
    pub reversed: bool,
}

impl Default for CurveSettings {
    fn default() -> Self {
        CurveSettings {
            curve_type: CurveKind::Linear as u8,
            reversed: false,
        }
    }
}

impl CurveSettings {
    /// The curve this setting selects, or `None` for an unrecognized value.
    pub fn kind(&self) -> Option<CurveKind> {
        match self.curve_type {
            0 => Some(CurveKind::Linear),
            1 => Some(CurveKind::Cubic),
            _ => None,
        }
    }

    /// Tolerant parser for one settings line of an assignment record.
    ///
    /// Strips `{`, `}` and spaces, then reads the digit at position 0 as the
    /// curve type and the digit at position 2 as the reversed flag. A line
    /// too short to hold both falls back to the default settings; it never
    /// fails the surrounding load.
    pub fn parse_line(line: &str) -> CurveSettings {
        let stripped: Vec<u8> = line
            .bytes()
            .filter(|&b| !matches!(b, b'{' | b'}' | b' '))
            .collect();

        if stripped.len() < 3 {
            return CurveSettings::default();
        }

        CurveSettings {
            curve_type: stripped[0].wrapping_sub(b'0'),
            reversed: stripped[2].wrapping_sub(b'0') != 0,
        }
    }
}

impl fmt::Display for CurveSettings {
    /// Writes the line form read back by [`CurveSettings::parse_line`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ {}; {} }}", self.curve_type, self.reversed as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_curve_kinds() {
        let linear = CurveSettings::parse_line("{ 0; 1 }");
        assert_eq!(linear.kind(), Some(CurveKind::Linear));
        assert!(linear.reversed);

        let cubic = CurveSettings::parse_line("{ 1; 0 }");
        assert_eq!(cubic.kind(), Some(CurveKind::Cubic));
        assert!(!cubic.reversed);
    }

    #[test]
    fn malformed_line_yields_default() {
        assert_eq!(CurveSettings::parse_line("{}"), CurveSettings::default());
        assert_eq!(CurveSettings::parse_line(""), CurveSettings::default());
    }

    #[test]
    fn unknown_curve_digit_is_kept_but_has_no_kind() {
        let odd = CurveSettings::parse_line("{ 7; 0 }");
        assert_eq!(odd.curve_type, 7);
        assert_eq!(odd.kind(), None);
    }

    #[test]
    fn line_round_trips() {
        let settings = CurveSettings {
            curve_type: 1,
            reversed: true,
        };
        assert_eq!(CurveSettings::parse_line(&settings.to_string()), settings);
    }
}
