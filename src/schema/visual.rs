use serde::{Deserialize, Serialize};

use super::{ColourIndex, LabelType, Marker};

/// Discriminator carried by every visual object. Stamped by the concrete
/// type's constructor and never changed afterward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VisualObjectKind {
    Point,
    Vector,
    Box,
    Polygon,
    Image,
}

fn point_kind() -> VisualObjectKind {
    VisualObjectKind::Point
}
fn vector_kind() -> VisualObjectKind {
    VisualObjectKind::Vector
}
fn box_kind() -> VisualObjectKind {
    VisualObjectKind::Box
}
fn polygon_kind() -> VisualObjectKind {
    VisualObjectKind::Polygon
}
fn image_kind() -> VisualObjectKind {
    VisualObjectKind::Image
}

/// A single point on the screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoPoint {
    #[serde(rename = "visualObjectType", default = "point_kind")]
    kind: VisualObjectKind,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub xmin: f64,
    #[serde(default)]
    pub ymin: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clickable: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_type: Option<LabelType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outline_colour_index: Option<ColourIndex>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
}

impl VoPoint {
    pub fn new(name: impl Into<String>, xmin: f64, ymin: f64) -> Self {
        VoPoint {
            kind: point_kind(),
            name: name.into(),
            xmin,
            ymin,
            filter_value: None,
            clickable: None,
            label_type: None,
            outline_colour_index: None,
            marker: None,
        }
    }

    pub fn kind(&self) -> VisualObjectKind {
        self.kind
    }
}

impl Default for VoPoint {
    fn default() -> Self {
        VoPoint::new("", 0.0, 0.0)
    }
}

/// A line segment on the screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoVector {
    #[serde(rename = "visualObjectType", default = "vector_kind")]
    kind: VisualObjectKind,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub xmin: f64,
    #[serde(default)]
    pub ymin: f64,
    #[serde(default)]
    pub xmax: f64,
    #[serde(default)]
    pub ymax: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clickable: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_type: Option<LabelType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outline_colour_index: Option<ColourIndex>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
}

impl VoVector {
    pub fn new(name: impl Into<String>, xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Self {
        VoVector {
            kind: vector_kind(),
            name: name.into(),
            xmin,
            ymin,
            xmax,
            ymax,
            filter_value: None,
            clickable: None,
            label_type: None,
            outline_colour_index: None,
            marker: None,
        }
    }

    pub fn kind(&self) -> VisualObjectKind {
        self.kind
    }
}

impl Default for VoVector {
    fn default() -> Self {
        VoVector::new("", 0.0, 0.0, 0.0, 0.0)
    }
}

/// A rectangle on the screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoBox {
    #[serde(rename = "visualObjectType", default = "box_kind")]
    kind: VisualObjectKind,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub xmin: f64,
    #[serde(default)]
    pub ymin: f64,
    #[serde(default)]
    pub xmax: f64,
    #[serde(default)]
    pub ymax: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<ColourIndex>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clickable: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_type: Option<LabelType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outline_colour_index: Option<ColourIndex>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
}

impl VoBox {
    pub fn new(name: impl Into<String>, xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Self {
        VoBox {
            kind: box_kind(),
            name: name.into(),
            xmin,
            ymin,
            xmax,
            ymax,
            fill: None,
            filter_value: None,
            clickable: None,
            label_type: None,
            outline_colour_index: None,
            marker: None,
        }
    }

    pub fn kind(&self) -> VisualObjectKind {
        self.kind
    }
}

impl Default for VoBox {
    fn default() -> Self {
        VoBox::new("", 0.0, 0.0, 0.0, 0.0)
    }
}

/// An image pasted over a screen region.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoImage {
    #[serde(rename = "visualObjectType", default = "image_kind")]
    kind: VisualObjectKind,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub xmin: f64,
    #[serde(default)]
    pub ymin: f64,
    #[serde(default)]
    pub xmax: f64,
    #[serde(default)]
    pub ymax: f64,
    #[serde(default)]
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<ColourIndex>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clickable: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_type: Option<LabelType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outline_colour_index: Option<ColourIndex>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
}

impl VoImage {
    pub fn new(
        name: impl Into<String>,
        xmin: f64,
        ymin: f64,
        xmax: f64,
        ymax: f64,
        image_url: impl Into<String>,
    ) -> Self {
        VoImage {
            kind: image_kind(),
            name: name.into(),
            xmin,
            ymin,
            xmax,
            ymax,
            image_url: image_url.into(),
            fill: None,
            filter_value: None,
            clickable: None,
            label_type: None,
            outline_colour_index: None,
            marker: None,
        }
    }

    pub fn kind(&self) -> VisualObjectKind {
        self.kind
    }
}

/// One vertex of a triangle strip, in reference coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct VoVertex {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
}

/// A filled polygon on the screen, described by a triangle strip.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoPolygon {
    #[serde(rename = "visualObjectType", default = "polygon_kind")]
    kind: VisualObjectKind,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub xmin: f64,
    #[serde(default)]
    pub ymin: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub triangle_strip_vertexes: Option<Vec<VoVertex>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<ColourIndex>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clickable: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_type: Option<LabelType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outline_colour_index: Option<ColourIndex>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
}

impl VoPolygon {
    pub fn new(name: impl Into<String>, xmin: f64, ymin: f64) -> Self {
        VoPolygon {
            kind: polygon_kind(),
            name: name.into(),
            xmin,
            ymin,
            triangle_strip_vertexes: None,
            fill: None,
            filter_value: None,
            clickable: None,
            label_type: None,
            outline_colour_index: None,
            marker: None,
        }
    }

    pub fn kind(&self) -> VisualObjectKind {
        self.kind
    }
}

impl Default for VoPolygon {
    fn default() -> Self {
        VoPolygon::new("", 0.0, 0.0)
    }
}

/// A clickable polygon region defined by a triangle strip.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClickPolygon {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub triangle_strip_vertexes: Option<Vec<VoVertex>>,
    #[serde(default)]
    pub clickable: String,
}

/// A clickable rectangular region.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClickBox {
    #[serde(default)]
    pub xmin: f64,
    #[serde(default)]
    pub ymin: f64,
    #[serde(default)]
    pub xmax: f64,
    #[serde(default)]
    pub ymax: f64,
    #[serde(default)]
    pub clickable: String,
}

/// The clickable regions of an overlay.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoClickMap {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub click_polygons: Option<Vec<ClickPolygon>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub click_boxes: Option<Vec<ClickBox>>,
}
