//! Anchor sides and their outward directions.

use crate::error::Error;
use crate::geom::{Vector, vector};
use serde::{Deserialize, Serialize};

/// Side of a rectangular element a connector line attaches to.
///
/// Serializes as the lowercase wire names `"top"`, `"bottom"`, `"left"`,
/// `"right"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnchorSide {
    Top,
    Bottom,
    Left,
    Right,
}

impl AnchorSide {
    pub const ALL: [AnchorSide; 4] = [
        AnchorSide::Top,
        AnchorSide::Bottom,
        AnchorSide::Left,
        AnchorSide::Right,
    ];

    /// Unit vector pointing out of the anchored element, axis-aligned with
    /// exactly one non-zero component.
    pub fn direction(self) -> Vector {
        match self {
            AnchorSide::Left => vector(-1.0, 0.0),
            AnchorSide::Right => vector(1.0, 0.0),
            AnchorSide::Top => vector(0.0, -1.0),
            AnchorSide::Bottom => vector(0.0, 1.0),
        }
    }

    /// True for the anchors that leave an element vertically (`top`/`bottom`).
    pub fn is_vertical(self) -> bool {
        matches!(self, AnchorSide::Top | AnchorSide::Bottom)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AnchorSide::Top => "top",
            AnchorSide::Bottom => "bottom",
            AnchorSide::Left => "left",
            AnchorSide::Right => "right",
        }
    }
}

impl std::fmt::Display for AnchorSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AnchorSide {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "top" => Ok(AnchorSide::Top),
            "bottom" => Ok(AnchorSide::Bottom),
            "left" => Ok(AnchorSide::Left),
            "right" => Ok(AnchorSide::Right),
            other => Err(Error::UnknownAnchorSide {
                value: other.to_string(),
            }),
        }
    }
}
