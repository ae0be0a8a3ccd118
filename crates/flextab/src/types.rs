//! Core types for table layout configuration.
//!
//! This module defines the data structures used to specify table layout:
//! per-column width bounds, flexibility weights, and cell sanitization.

use serde::{Deserialize, Serialize};

/// Configuration for a single column in a table.
///
/// The final rendered width of a column is `min_width` plus whatever share of
/// the spare terminal width the allocator hands it, capped at `max_width`
/// when one is set. Columns with `weight == 0.0` are locked at `min_width`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "ColumnSpecRaw", into = "ColumnSpecRaw")]
pub struct ColumnSpec {
    /// Minimum width in code points. Always honored when the terminal is
    /// wide enough for the whole configuration.
    pub min_width: usize,
    /// Maximum width in code points, or `None` for no cap.
    pub max_width: Option<usize>,
    /// Relative share of spare width this column receives. Zero locks the
    /// column at its minimum.
    pub weight: f64,
}

/// Serde bridge for the legacy on-disk spelling, where `max_width = 0`
/// means "unbounded" rather than "zero-width".
#[derive(Serialize, Deserialize)]
struct ColumnSpecRaw {
    #[serde(default)]
    min_width: usize,
    #[serde(default)]
    max_width: usize,
    #[serde(default)]
    weight: f64,
}

impl From<ColumnSpecRaw> for ColumnSpec {
    fn from(raw: ColumnSpecRaw) -> Self {
        ColumnSpec {
            min_width: raw.min_width,
            max_width: match raw.max_width {
                0 => None,
                max => Some(max),
            },
            weight: raw.weight,
        }
    }
}

impl From<ColumnSpec> for ColumnSpecRaw {
    fn from(spec: ColumnSpec) -> Self {
        ColumnSpecRaw {
            min_width: spec.min_width,
            max_width: spec.max_width.unwrap_or(0),
            weight: spec.weight,
        }
    }
}

impl ColumnSpec {
    /// Create a column with a minimum width and no cap.
    pub fn flexible(min_width: usize, weight: f64) -> Self {
        ColumnSpec {
            min_width,
            max_width: None,
            weight,
        }
    }

    /// Create a column bounded on both sides.
    pub fn bounded(min_width: usize, max_width: usize, weight: f64) -> Self {
        ColumnSpec {
            min_width,
            max_width: Some(max_width),
            weight,
        }
    }

    /// Create a column locked at exactly `width` (zero weight).
    pub fn locked(width: usize) -> Self {
        ColumnSpec {
            min_width: width,
            max_width: Some(width),
            weight: 0.0,
        }
    }
}

/// Cell text sanitization applied before widths are measured.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SanitizeMode {
    /// Leave cell text untouched.
    #[default]
    None,
    /// Remove emoji (pictographs, flags, skin tones, ZWJ sequences) while
    /// preserving all other Unicode text.
    StripEmoji,
    /// Drop every character outside 7-bit ASCII. No transliteration.
    AsciiOnly,
}

impl SanitizeMode {
    /// Build a mode from the legacy configuration flag pair.
    ///
    /// `enforce_ascii` wins over `remove_emojis`: ASCII-only output cannot
    /// contain emoji, so the weaker pass would be redundant.
    pub fn from_flags(enforce_ascii: bool, remove_emojis: bool) -> Self {
        if enforce_ascii {
            SanitizeMode::AsciiOnly
        } else if remove_emojis {
            SanitizeMode::StripEmoji
        } else {
            SanitizeMode::None
        }
    }
}

/// Complete layout configuration for one table render.
///
/// Column order is display order. The engine treats the config as read-only
/// input; it is never mutated by a render call.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Ordered column specifications.
    pub columns: Vec<ColumnSpec>,
    /// Sanitization applied to every cell.
    #[serde(default)]
    pub sanitize_mode: SanitizeMode,
}

impl TableConfig {
    /// Create a table config builder for fluent construction.
    pub fn builder() -> TableConfigBuilder {
        TableConfigBuilder::default()
    }
}

/// Builder for constructing `TableConfig` instances.
#[derive(Clone, Debug, Default)]
pub struct TableConfigBuilder {
    columns: Vec<ColumnSpec>,
    sanitize_mode: SanitizeMode,
}

impl TableConfigBuilder {
    /// Append a column.
    pub fn column(mut self, spec: ColumnSpec) -> Self {
        self.columns.push(spec);
        self
    }

    /// Set the sanitize mode.
    pub fn sanitize(mut self, mode: SanitizeMode) -> Self {
        self.sanitize_mode = mode;
        self
    }

    /// Build the final config.
    pub fn build(self) -> TableConfig {
        TableConfig {
            columns: self.columns,
            sanitize_mode: self.sanitize_mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_max_width_deserializes_as_unbounded() {
        let spec: ColumnSpec =
            serde_json::from_str(r#"{"min_width": 4, "max_width": 0, "weight": 1.0}"#).unwrap();
        assert_eq!(spec.min_width, 4);
        assert_eq!(spec.max_width, None);
    }

    #[test]
    fn finite_max_width_survives_round_trip() {
        let spec = ColumnSpec::bounded(2, 9, 1.5);
        let json = serde_json::to_string(&spec).unwrap();
        let back: ColumnSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(back, spec);
    }

    #[test]
    fn unbounded_serializes_to_legacy_sentinel() {
        let json = serde_json::to_string(&ColumnSpec::flexible(3, 1.0)).unwrap();
        assert!(json.contains(r#""max_width":0"#));
    }

    #[test]
    fn missing_fields_default() {
        let spec: ColumnSpec = serde_json::from_str("{}").unwrap();
        assert_eq!(spec.min_width, 0);
        assert_eq!(spec.max_width, None);
        assert_eq!(spec.weight, 0.0);
    }

    #[test]
    fn sanitize_mode_from_flags_precedence() {
        assert_eq!(SanitizeMode::from_flags(true, true), SanitizeMode::AsciiOnly);
        assert_eq!(SanitizeMode::from_flags(true, false), SanitizeMode::AsciiOnly);
        assert_eq!(
            SanitizeMode::from_flags(false, true),
            SanitizeMode::StripEmoji
        );
        assert_eq!(SanitizeMode::from_flags(false, false), SanitizeMode::None);
    }

    #[test]
    fn sanitize_mode_snake_case_names() {
        assert_eq!(
            serde_json::to_string(&SanitizeMode::StripEmoji).unwrap(),
            r#""strip_emoji""#
        );
        let mode: SanitizeMode = serde_json::from_str(r#""ascii_only""#).unwrap();
        assert_eq!(mode, SanitizeMode::AsciiOnly);
    }

    #[test]
    fn builder_preserves_column_order() {
        let config = TableConfig::builder()
            .column(ColumnSpec::locked(8))
            .column(ColumnSpec::flexible(10, 2.0))
            .sanitize(SanitizeMode::StripEmoji)
            .build();
        assert_eq!(config.columns.len(), 2);
        assert_eq!(config.columns[0].min_width, 8);
        assert_eq!(config.columns[1].weight, 2.0);
        assert_eq!(config.sanitize_mode, SanitizeMode::StripEmoji);
    }
}
