//! Connector geometry: arrowhead retraction, anchor control points, and the
//! assembled path.

use crate::anchor::AnchorSide;
use crate::geom::{Point, point};
use crate::label::{LabelBox, label_box};
use crate::path::connector_path_d;
use crate::style::ArrowStyle;

/// Retracts `end` along the ending anchor's outward direction so the stroked
/// line stops at the base of the arrowhead marker instead of running through
/// it.
///
/// `arrow_length` is the marker footprint to clear; the retraction scales
/// with `stroke_width` because markers are sized in stroke-relative units.
/// Zero-size inputs leave the point unchanged.
pub fn endpoint_with_arrowhead(
    end: Point,
    arrow_length: f64,
    stroke_width: f64,
    anchor: AnchorSide,
) -> Point {
    end + anchor.direction() * (arrow_length * stroke_width / 2.0)
}

/// Control point pulling the path out of the starting anchor.
///
/// Vertical anchors keep the start's x and move halfway toward the end's y;
/// horizontal anchors swap axes. Either way the path leaves the element
/// perpendicular to the anchored edge.
pub fn starting_control_point(start: Point, end: Point, anchor: AnchorSide) -> Point {
    if anchor.is_vertical() {
        point(start.x, start.y + (end.y - start.y) / 2.0)
    } else {
        point(start.x + (end.x - start.x) / 2.0, start.y)
    }
}

/// Mirror of [`starting_control_point`], computed from the endpoint's
/// perspective.
pub fn ending_control_point(start: Point, end: Point, anchor: AnchorSide) -> Point {
    if anchor.is_vertical() {
        point(end.x, end.y - (end.y - start.y) / 2.0)
    } else {
        point(end.x - (end.x - start.x) / 2.0, end.y)
    }
}

/// A single connector between two anchored points, with the style used to
/// draw it.
#[derive(Debug, Clone, PartialEq)]
pub struct Connector {
    pub start: Point,
    pub end: Point,
    pub start_anchor: AnchorSide,
    pub end_anchor: AnchorSide,
    pub style: ArrowStyle,
}

/// Everything a renderer needs to draw one connector.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectorGeometry {
    /// SVG path data: `M` followed by one `C` or three `L` commands.
    pub path_d: String,
    /// Terminal point of the stroked line, where the arrowhead base sits.
    pub line_end: Point,
    pub start_control: Point,
    pub end_control: Point,
    /// Box spanning the raw start/end points, for centering label content.
    pub label_box: LabelBox,
}

impl Connector {
    /// Computes the full geometry for this connector.
    ///
    /// The rendered marker glyph spans twice the configured arrow length:
    /// the ending control point backs off by that full footprint while the
    /// stroked line stops halfway into it, and the starting control point is
    /// interpolated against the raw endpoint.
    pub fn geometry(&self) -> ConnectorGeometry {
        let glyph_footprint = self.style.arrow_length * 2.0;
        let control_end = endpoint_with_arrowhead(
            self.end,
            glyph_footprint,
            self.style.stroke_width,
            self.end_anchor,
        );
        let line_end = endpoint_with_arrowhead(
            self.end,
            self.style.arrow_length,
            self.style.stroke_width,
            self.end_anchor,
        );

        let start_control = starting_control_point(self.start, self.end, self.start_anchor);
        let end_control = ending_control_point(self.start, control_end, self.end_anchor);

        let path_d = connector_path_d(
            self.start,
            start_control,
            end_control,
            line_end,
            self.style.arrow_shape,
        );
        tracing::trace!(path = %path_d, shape = ?self.style.arrow_shape, "assembled connector path");

        ConnectorGeometry {
            path_d,
            line_end,
            start_control,
            end_control,
            label_box: label_box(self.start, self.end),
        }
    }
}
