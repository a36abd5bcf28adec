//! Pure placement geometry for the blueprint designer.
//!
//! All positions and dimensions are meters on a top-left-origin plane.
//! Overlap is strict: rectangles that merely share an edge do not collide.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Axis-aligned rectangle, top-left anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: Decimal,
    pub y: Decimal,
    pub width: Decimal,
    pub height: Decimal,
}

impl Rect {
    pub fn new(x: Decimal, y: Decimal, width: Decimal, height: Decimal) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Usable floor area of a blueprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub width: Decimal,
    pub height: Decimal,
}

/// Quarter-turn rotation of a rack. Only the four axis-aligned orientations
/// exist; 90 and 270 swap the footprint's axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    /// Parses a stored degree value. Any multiple of 90 is accepted,
    /// negative values included.
    pub fn from_degrees(degrees: i32) -> Option<Self> {
        match degrees.rem_euclid(360) {
            0 => Some(Self::Deg0),
            90 => Some(Self::Deg90),
            180 => Some(Self::Deg180),
            270 => Some(Self::Deg270),
            _ => None,
        }
    }

    pub fn degrees(self) -> i32 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 90,
            Self::Deg180 => 180,
            Self::Deg270 => 270,
        }
    }

    /// Next orientation, one quarter turn clockwise.
    pub fn advanced(self) -> Self {
        match self {
            Self::Deg0 => Self::Deg90,
            Self::Deg90 => Self::Deg180,
            Self::Deg180 => Self::Deg270,
            Self::Deg270 => Self::Deg0,
        }
    }

    pub fn swaps_axes(self) -> bool {
        matches!(self, Self::Deg90 | Self::Deg270)
    }
}

/// A rack already on the floor, reduced to its effective footprint.
#[derive(Debug, Clone, Copy)]
pub struct PlacedRack {
    pub id: Uuid,
    pub rect: Rect,
}

/// Why a candidate placement was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("rack extends beyond the blueprint bounds")]
    OutOfBounds,
    #[error("rack overlaps rack {other}")]
    Overlap { other: Uuid },
}

/// Strict AABB overlap test. Touching edges are not an overlap.
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.x < b.x + b.width && a.x + a.width > b.x && a.y < b.y + b.height && a.y + a.height > b.y
}

/// Snaps a coordinate to the nearest multiple of `grid`. `Decimal::round`
/// uses banker's rounding, so exact halves go to the even step.
pub fn snap(value: Decimal, grid: Decimal) -> Decimal {
    if grid <= Decimal::ZERO {
        return value;
    }
    (value / grid).round() * grid
}

/// Footprint dimensions after rotation: 90/270 swap width and height.
pub fn effective_dims(width: Decimal, height: Decimal, rotation: Rotation) -> (Decimal, Decimal) {
    if rotation.swaps_axes() {
        (height, width)
    } else {
        (width, height)
    }
}

/// Effective footprint of a rack: stored dimensions rotated, anchor unchanged.
pub fn effective_rect(
    x: Decimal,
    y: Decimal,
    width: Decimal,
    height: Decimal,
    rotation: Rotation,
) -> Rect {
    let (w, h) = effective_dims(width, height, rotation);
    Rect::new(x, y, w, h)
}

/// Validates a candidate footprint against the floor bounds and the other
/// racks. Bounds are checked first so an off-floor rack reports `OutOfBounds`
/// even when it would also overlap. `exclude` skips the rack being moved.
pub fn can_place(
    bounds: Bounds,
    candidate: &Rect,
    others: &[PlacedRack],
    exclude: Option<Uuid>,
) -> Result<(), PlacementError> {
    if candidate.x < Decimal::ZERO
        || candidate.y < Decimal::ZERO
        || candidate.x + candidate.width > bounds.width
        || candidate.y + candidate.height > bounds.height
    {
        return Err(PlacementError::OutOfBounds);
    }

    for other in others {
        if exclude.is_some_and(|id| id == other.id) {
            continue;
        }
        if overlaps(candidate, &other.rect) {
            return Err(PlacementError::Overlap { other: other.id });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn rect(x: &str, y: &str, w: &str, h: &str) -> Rect {
        Rect::new(
            x.parse().unwrap(),
            y.parse().unwrap(),
            w.parse().unwrap(),
            h.parse().unwrap(),
        )
    }

    fn bounds_20x20() -> Bounds {
        Bounds {
            width: dec!(20),
            height: dec!(20),
        }
    }

    #[test]
    fn overlap_is_symmetric() {
        let a = rect("0", "0", "5", "2");
        let b = rect("4", "1", "5", "2");
        assert!(overlaps(&a, &b));
        assert!(overlaps(&b, &a));
    }

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = rect("0", "0", "5", "2");
        let right = rect("5", "0", "5", "2");
        let below = rect("0", "2", "5", "2");
        assert!(!overlaps(&a, &right));
        assert!(!overlaps(&a, &below));
    }

    #[test]
    fn disjoint_rects_do_not_overlap() {
        let a = rect("0", "0", "5", "2");
        let b = rect("10", "10", "5", "2");
        assert!(!overlaps(&a, &b));
    }

    #[test]
    fn effective_dims_swap_at_quarter_turns() {
        let w = dec!(2);
        let h = dec!(5);
        assert_eq!(effective_dims(w, h, Rotation::Deg0), (w, h));
        assert_eq!(effective_dims(w, h, Rotation::Deg90), (h, w));
        assert_eq!(effective_dims(w, h, Rotation::Deg180), (w, h));
        assert_eq!(effective_dims(w, h, Rotation::Deg270), (h, w));
    }

    #[test]
    fn rotation_advances_and_wraps() {
        let mut r = Rotation::Deg0;
        for expected in [90, 180, 270, 0] {
            r = r.advanced();
            assert_eq!(r.degrees(), expected);
        }
    }

    #[test]
    fn rotation_parses_any_multiple_of_90() {
        assert_eq!(Rotation::from_degrees(0), Some(Rotation::Deg0));
        assert_eq!(Rotation::from_degrees(450), Some(Rotation::Deg90));
        assert_eq!(Rotation::from_degrees(-90), Some(Rotation::Deg270));
        assert_eq!(Rotation::from_degrees(45), None);
    }

    #[rstest]
    #[case(dec!(1.3), dec!(1.5))]
    #[case(dec!(0.74), dec!(0.5))]
    #[case(dec!(0), dec!(0))]
    #[case(dec!(2.5), dec!(2.5))]
    fn snap_rounds_to_nearest_grid_step(#[case] input: Decimal, #[case] expected: Decimal) {
        assert_eq!(snap(input, dec!(0.5)), expected);
    }

    #[test]
    fn snap_is_idempotent() {
        let grid = dec!(0.5);
        let snapped = snap(dec!(7.3), grid);
        assert_eq!(snap(snapped, grid), snapped);
    }

    #[test]
    fn snap_with_zero_grid_is_identity() {
        assert_eq!(snap(dec!(1.3), Decimal::ZERO), dec!(1.3));
    }

    #[test]
    fn placement_scenario_on_open_floor() {
        let a = PlacedRack {
            id: Uuid::new_v4(),
            rect: rect("0", "0", "5", "2"),
        };

        // Shares the x=5 edge: allowed.
        let touching = rect("5", "0", "5", "2");
        assert!(can_place(bounds_20x20(), &touching, &[a], None).is_ok());

        // Overlaps A's interior: refused, naming the collider.
        let overlapping = rect("4", "1", "5", "2");
        assert_eq!(
            can_place(bounds_20x20(), &overlapping, &[a], None),
            Err(PlacementError::Overlap { other: a.id })
        );
    }

    #[test]
    fn placement_beyond_bounds_is_refused() {
        let candidate = rect("16", "0", "5", "2");
        assert_matches!(
            can_place(bounds_20x20(), &candidate, &[], None),
            Err(PlacementError::OutOfBounds)
        );

        let negative = rect("-1", "0", "5", "2");
        assert_matches!(
            can_place(bounds_20x20(), &negative, &[], None),
            Err(PlacementError::OutOfBounds)
        );
    }

    #[test]
    fn exact_fit_on_far_edge_is_allowed() {
        let candidate = rect("15", "18", "5", "2");
        assert!(can_place(bounds_20x20(), &candidate, &[], None).is_ok());
    }

    #[test]
    fn bounds_refusal_wins_over_overlap() {
        let a = PlacedRack {
            id: Uuid::new_v4(),
            rect: rect("15", "0", "5", "2"),
        };
        // Out of bounds and overlapping A; bounds is reported.
        let candidate = rect("16", "0", "5", "2");
        assert_eq!(
            can_place(bounds_20x20(), &candidate, &[a], None),
            Err(PlacementError::OutOfBounds)
        );
    }

    #[test]
    fn rotation_fit_depends_on_floor_shape() {
        let narrow = Bounds {
            width: dec!(2),
            height: dec!(10),
        };

        let upright = effective_rect(dec!(0), dec!(0), dec!(1), dec!(10), Rotation::Deg0);
        assert!(can_place(narrow, &upright, &[], None).is_ok());

        let rotated = effective_rect(dec!(0), dec!(0), dec!(1), dec!(10), Rotation::Deg90);
        assert_eq!(
            can_place(narrow, &rotated, &[], None),
            Err(PlacementError::OutOfBounds)
        );
    }

    #[test]
    fn excluded_rack_is_skipped() {
        let id = Uuid::new_v4();
        let own = PlacedRack {
            id,
            rect: rect("0", "0", "5", "2"),
        };

        // Overlaps its own old footprint only.
        let moved = rect("0.5", "0", "5", "2");
        assert!(can_place(bounds_20x20(), &moved, &[own], Some(id)).is_ok());
        assert_eq!(
            can_place(bounds_20x20(), &moved, &[own], None),
            Err(PlacementError::Overlap { other: id })
        );
    }
}
