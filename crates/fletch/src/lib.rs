#![forbid(unsafe_code)]

//! `fletch` computes the geometry of directional connector arrows between
//! two anchored points on a 2-D plane.
//!
//! The engine lives in [`fletch-core`](fletch_core) and is re-exported here
//! in full: anchor sides and their outward directions, arrowhead endpoint
//! retraction, anchor control points, SVG path data assembly and label
//! placement boxes. Everything is a pure function of its inputs; embedding
//! the outputs into a rendered scene, tracking element positions and wiring
//! pointer events are the caller's concern.
//!
//! ```
//! use fletch::{AnchorSide, ArrowStyle, Connector};
//! use fletch::geom::point;
//!
//! let connector = Connector {
//!     start: point(0.0, 0.0),
//!     end: point(100.0, 0.0),
//!     start_anchor: AnchorSide::Right,
//!     end_anchor: AnchorSide::Left,
//!     style: ArrowStyle::default(),
//! };
//! let geometry = connector.geometry();
//! assert_eq!(geometry.path_d, "M0,0 C50,0 40,0 90,0");
//! ```

pub use fletch_core::*;
