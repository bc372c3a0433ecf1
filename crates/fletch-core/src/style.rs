//! Visual parameters for connector arrows.
//!
//! `ArrowStyle` mirrors the camelCase JSON config surface renderers feed us;
//! the engine only reads `arrow_length`, `stroke_width` and `arrow_shape`.
//! The remaining fields ride along untouched for the rendering boundary.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// How the segment between two anchors is shaped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ArrowShape {
    /// A single cubic segment bending out of both anchor sides.
    #[default]
    Curve,
    /// Three straight segments through the control points.
    Rect,
}

impl ArrowShape {
    /// Parses a shape name. Anything other than `"rect"` is the default
    /// curve, matching the path builder's own fallback.
    pub fn parse(s: &str) -> Self {
        match s {
            "rect" => ArrowShape::Rect,
            _ => ArrowShape::Curve,
        }
    }
}

impl From<String> for ArrowShape {
    fn from(s: String) -> Self {
        ArrowShape::parse(&s)
    }
}

/// Stroke and arrowhead parameters for one connector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArrowStyle {
    /// Configured arrowhead length. The rendered marker glyph spans twice
    /// this value; see `Connector::geometry`.
    pub arrow_length: f64,
    /// Arrowhead base thickness, carried for marker-building callers.
    pub arrow_thickness: f64,
    /// Stroke color, carried for the rendering boundary.
    pub stroke_color: String,
    pub stroke_width: f64,
    pub arrow_shape: ArrowShape,
}

impl Default for ArrowStyle {
    fn default() -> Self {
        Self {
            arrow_length: 10.0,
            arrow_thickness: 6.0,
            stroke_color: "#f00".to_string(),
            stroke_width: 2.0,
            arrow_shape: ArrowShape::Curve,
        }
    }
}

impl ArrowStyle {
    /// Reads a style from a JSON config object. Missing keys take the record
    /// defaults; unknown keys are ignored.
    pub fn from_value(value: &serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(value.clone())?)
    }
}
