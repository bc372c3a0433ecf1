//! SVG path data for connectors.
//!
//! Coordinates are formatted in the shortest round-trip decimal form of
//! ECMAScript number-to-string, so the emitted bytes are stable for any
//! downstream parser that compares path data literally.

use crate::geom::Point;
use crate::style::ArrowShape;
use std::fmt::Write as _;

fn fmt_coord(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    let v = if v == 0.0 { 0.0 } else { v };
    let mut buf = ryu_js::Buffer::new();
    buf.format_finite(v).to_string()
}

/// Path data for one connector: a move-to, then either a single cubic
/// segment through both control points (`Curve`) or three straight segments
/// visiting them in order (`Rect`).
///
/// The output always starts with `M{x},{y}` at the literal `start` point and
/// contains a single space after the move-to command.
pub fn connector_path_d(
    start: Point,
    start_control: Point,
    end_control: Point,
    end: Point,
    shape: ArrowShape,
) -> String {
    let mut out = String::new();
    let _ = write!(&mut out, "M{},{} ", fmt_coord(start.x), fmt_coord(start.y));
    match shape {
        ArrowShape::Rect => {
            let _ = write!(
                &mut out,
                "L{},{}L{},{}L{},{}",
                fmt_coord(start_control.x),
                fmt_coord(start_control.y),
                fmt_coord(end_control.x),
                fmt_coord(end_control.y),
                fmt_coord(end.x),
                fmt_coord(end.y),
            );
        }
        ArrowShape::Curve => {
            let _ = write!(
                &mut out,
                "C{},{} {},{} {},{}",
                fmt_coord(start_control.x),
                fmt_coord(start_control.y),
                fmt_coord(end_control.x),
                fmt_coord(end_control.y),
                fmt_coord(end.x),
                fmt_coord(end.y),
            );
        }
    }
    out
}
