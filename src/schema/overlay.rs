use serde::{Deserialize, Serialize};

use super::geo::{GeoInfo, GeoPolygon};
use super::visual::{VoBox, VoClickMap, VoImage, VoPoint, VoPolygon, VoVector};

/// Fields shared by every overlay stream record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayHeader {
    #[serde(default)]
    pub desc: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// An overlay record the plugin writes into an output channel folder.
///
/// The `oStreamType` discriminator selects the variant and is fixed by the
/// variant itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "oStreamType")]
pub enum Overlay {
    #[serde(rename = "VISUAL")]
    Visual(VisualOverlay),
    #[serde(rename = "GEOINFO")]
    GeoInfo(GeoInfoOverlay),
    #[serde(rename = "HEATMAP")]
    Heatmap(HeatmapOverlay),
    #[serde(rename = "ALPHABITMAP")]
    AlphaBitmap(AlphaBitmapOverlay),
}

fn default_ref_width() -> i32 {
    1920
}
fn default_ref_height() -> i32 {
    1080
}

/// Visual objects drawn on top of the video stream, positioned against the
/// reference resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualOverlay {
    #[serde(flatten)]
    pub header: OverlayHeader,
    #[serde(default = "default_ref_width")]
    pub ref_width: i32,
    #[serde(default = "default_ref_height")]
    pub ref_height: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<Vec<VoPoint>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vectors: Option<Vec<VoVector>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boxes: Option<Vec<VoBox>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<VoImage>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub polygons: Option<Vec<VoPolygon>>,
}

impl Default for VisualOverlay {
    fn default() -> Self {
        VisualOverlay {
            header: OverlayHeader::default(),
            ref_width: default_ref_width(),
            ref_height: default_ref_height(),
            points: None,
            vectors: None,
            boxes: None,
            images: None,
            polygons: None,
        }
    }
}

/// Points and polygons sent to the map.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoInfoOverlay {
    #[serde(flatten)]
    pub header: OverlayHeader,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geo_infos: Option<Vec<GeoInfo>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geo_polygons: Option<Vec<GeoPolygon>>,
}

/// How heatmap pixel values map to displayed magnitudes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scaling_factor: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scaling_unit: Option<String>,
}

/// A live heatmap image rendered over the video stream.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapOverlay {
    #[serde(flatten)]
    pub header: OverlayHeader,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heatmap_info: Option<HeatmapInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub click_map: Option<VoClickMap>,
}

/// A transparent bitmap rendered over the video stream.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlphaBitmapOverlay {
    #[serde(flatten)]
    pub header: OverlayHeader,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub click_map: Option<VoClickMap>,
}
