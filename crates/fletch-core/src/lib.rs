#![forbid(unsafe_code)]

//! Headless geometry for anchor-to-anchor connector arrows.
//!
//! Given two resolved points, the side of the element each one attaches to,
//! and an [`ArrowStyle`], this crate computes everything a renderer needs to
//! draw the connector: the endpoint retracted under the arrowhead marker, the
//! two control points that bend the line out of its anchor sides, the SVG
//! path data string, and the box used to center an optional label.
//!
//! Design goals:
//! - deterministic, byte-stable path data (ECMAScript number formatting)
//! - total functions over their declared inputs; degenerate dimensions
//!   degrade to zero offsets instead of failing
//! - no I/O and no retained state; every output is recomputed from inputs

pub mod anchor;
pub mod connector;
pub mod error;
pub mod geom;
pub mod label;
pub mod path;
pub mod style;

pub use anchor::AnchorSide;
pub use connector::{
    Connector, ConnectorGeometry, ending_control_point, endpoint_with_arrowhead,
    starting_control_point,
};
pub use error::{Error, Result};
pub use label::{LabelBox, label_box};
pub use path::connector_path_d;
pub use style::{ArrowShape, ArrowStyle};

#[cfg(test)]
mod tests;
