//! Label placement box.

use crate::geom::Point;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle spanning a connector, used by the rendering
/// boundary to center label content. `width` and `height` are never negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Bounding box of the segment from `start` to `end`.
///
/// Computed from the raw points, not the arrowhead-retracted ones, so the
/// label stays centered on the full visual span for any ordering of the pair.
pub fn label_box(start: Point, end: Point) -> LabelBox {
    LabelBox {
        x: start.x.min(end.x),
        y: start.y.min(end.y),
        width: (end.x - start.x).abs(),
        height: (end.y - start.y).abs(),
    }
}
