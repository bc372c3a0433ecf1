use crate::geom::vector;
use crate::*;
use serde_json::json;

#[test]
fn direction_vectors_match_their_sides() {
    assert_eq!(AnchorSide::Left.direction(), vector(-1.0, 0.0));
    assert_eq!(AnchorSide::Right.direction(), vector(1.0, 0.0));
    assert_eq!(AnchorSide::Top.direction(), vector(0.0, -1.0));
    assert_eq!(AnchorSide::Bottom.direction(), vector(0.0, 1.0));
}

#[test]
fn directions_are_axis_aligned_unit_vectors() {
    for side in AnchorSide::ALL {
        let d = side.direction();
        assert!(d.x == 0.0 || d.y == 0.0, "{side}: {d:?}");
        assert_eq!(d.x.abs() + d.y.abs(), 1.0, "{side}: {d:?}");
    }
}

#[test]
fn vertical_split_covers_all_sides() {
    assert!(AnchorSide::Top.is_vertical());
    assert!(AnchorSide::Bottom.is_vertical());
    assert!(!AnchorSide::Left.is_vertical());
    assert!(!AnchorSide::Right.is_vertical());
}

#[test]
fn parses_wire_names() {
    for side in AnchorSide::ALL {
        assert_eq!(side.as_str().parse::<AnchorSide>().unwrap(), side);
    }
}

#[test]
fn rejects_unknown_side_names() {
    for bad in ["center", "Top", "TOP", ""] {
        let err = bad.parse::<AnchorSide>().unwrap_err();
        assert!(matches!(err, Error::UnknownAnchorSide { .. }), "{bad:?}");
    }
}

#[test]
fn display_matches_wire_names() {
    assert_eq!(AnchorSide::Bottom.to_string(), "bottom");
    assert_eq!(AnchorSide::Left.to_string(), "left");
}

#[test]
fn serde_uses_lowercase_strings() {
    assert_eq!(serde_json::to_value(AnchorSide::Top).unwrap(), json!("top"));
    assert_eq!(
        serde_json::from_value::<AnchorSide>(json!("right")).unwrap(),
        AnchorSide::Right
    );
    assert!(serde_json::from_value::<AnchorSide>(json!("middle")).is_err());
}
