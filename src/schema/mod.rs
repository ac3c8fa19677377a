//! The stream record catalog exchanged through drop folders.
//!
//! These are plain data contracts: camelCase on the wire, optional fields
//! absent when unset, and each polymorphic family a closed tagged union whose
//! discriminator is fixed at construction. Everything here serializes through
//! [`crate::json::to_compact_json`].

pub mod geo;
pub mod overlay;
pub mod telemetry;
pub mod visual;

use serde::{Deserialize, Serialize};

/// Text style for on-screen and map labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelType {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    P,
}

impl Default for LabelType {
    fn default() -> Self {
        LabelType::P
    }
}

/// A slot in the host's 16-colour overlay palette.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColourIndex(u8);

impl ColourIndex {
    pub const MIN: ColourIndex = ColourIndex(0);
    pub const MAX: ColourIndex = ColourIndex(15);

    /// A palette slot, if `slot` is within 0..=15.
    pub fn new(slot: u8) -> Option<Self> {
        (slot <= Self::MAX.0).then_some(Self(slot))
    }

    pub fn slot(self) -> u8 {
        self.0
    }
}

/// Marker glyph drawn at a point or geo position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MarkerType {
    Arrow,
    Box,
    Cross,
    X,
    Star,
    Circle,
    Triangle,
}

/// Marker placed on an overlay or map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Marker {
    #[serde(rename = "type")]
    pub kind: MarkerType,
    /// Unit 0.01 degree, from -18000 to 18000. 0 is North.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bearing: Option<f64>,
}

impl Default for Marker {
    fn default() -> Self {
        Marker {
            kind: MarkerType::Arrow,
            bearing: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::to_compact_json;

    #[test]
    fn colour_index_is_bounded() {
        assert_eq!(ColourIndex::new(15), Some(ColourIndex::MAX));
        assert_eq!(ColourIndex::new(16), None);
    }

    #[test]
    fn marker_serializes_with_type_key() {
        let out = to_compact_json(&Marker::default()).unwrap();
        assert_eq!(out, r#"{"type":"ARROW"}"#);

        let with_bearing = Marker {
            kind: MarkerType::Cross,
            bearing: Some(9000.0),
        };
        let out = to_compact_json(&with_bearing).unwrap();
        assert_eq!(out, r#"{"bearing":9000.0,"type":"CROSS"}"#);
    }

    #[test]
    fn label_type_uses_lowercase_wire_names() {
        assert_eq!(serde_json::to_string(&LabelType::H3).unwrap(), "\"h3\"");
        assert_eq!(serde_json::to_string(&LabelType::P).unwrap(), "\"p\"");
    }
}
