use serde::{Deserialize, Serialize};

use super::{ColourIndex, LabelType, Marker};

/// A geodetic fix. Latitude and longitude in units of 1e-7 degree, altitude
/// in centimetres.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoPoint {
    #[serde(default)]
    pub latitude: i64,
    #[serde(default)]
    pub longitude: i64,
    #[serde(default)]
    pub altitude: i64,
}

/// Attitude angles in units of 0.01 degree, from -18000 to 18000.
/// Roll and pitch are 0 at horizontal; yaw is 0 at North.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Angular {
    #[serde(default)]
    pub roll: i32,
    #[serde(default)]
    pub pitch: i32,
    #[serde(default)]
    pub yaw: i32,
}

/// Position or velocity of a point, with optional attitude.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoLocation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geolocation: Option<GeoPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub angular: Option<Angular>,
}

/// Whether a [`GeoInfo`] stands alone or links to the previous entry of the
/// list it appears in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GeoInfoKind {
    #[default]
    Point,
    Link,
}

/// One point on the map, with position, velocity, and display hints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoInfo {
    #[serde(default)]
    pub position: GeoLocation,
    #[serde(default)]
    pub velocity: GeoLocation,
    #[serde(default)]
    pub geo_info_type: GeoInfoKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clickable: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
}

/// A polygon drawn on the map.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoPolygon {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub label_type: LabelType,
    #[serde(default = "GeoPolygon::default_outline")]
    pub outline: ColourIndex,
    #[serde(default)]
    pub fill: ColourIndex,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub positions: Option<Vec<GeoPoint>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clickable: Option<String>,
}

impl GeoPolygon {
    fn default_outline() -> ColourIndex {
        ColourIndex::MAX
    }
}

impl Default for GeoPolygon {
    fn default() -> Self {
        GeoPolygon {
            name: String::new(),
            label_type: LabelType::P,
            outline: Self::default_outline(),
            fill: ColourIndex::MIN,
            positions: None,
            image_url: None,
            clickable: None,
        }
    }
}
