use proptest::prelude::*;
use rust_decimal::Decimal;
use uuid::Uuid;
use warehouse_api::geometry::{
    can_place, effective_dims, overlaps, snap, Bounds, PlacedRack, PlacementError, Rect, Rotation,
};

fn small_decimal() -> impl Strategy<Value = Decimal> {
    // Two decimal places in [0, 50]: the range the designer works in.
    (0i64..=5000).prop_map(|n| Decimal::new(n, 2))
}

fn positive_decimal() -> impl Strategy<Value = Decimal> {
    (1i64..=2000).prop_map(|n| Decimal::new(n, 2))
}

prop_compose! {
    fn arb_rect()(
        x in small_decimal(),
        y in small_decimal(),
        w in positive_decimal(),
        h in positive_decimal(),
    ) -> Rect {
        Rect::new(x, y, w, h)
    }
}

proptest! {
    #[test]
    fn overlap_is_symmetric(a in arb_rect(), b in arb_rect()) {
        prop_assert_eq!(overlaps(&a, &b), overlaps(&b, &a));
    }

    #[test]
    fn rect_never_overlaps_translated_copy_beyond_its_extent(r in arb_rect()) {
        let shifted = Rect::new(r.x + r.width, r.y, r.width, r.height);
        prop_assert!(!overlaps(&r, &shifted));
    }

    #[test]
    fn rect_overlaps_itself(r in arb_rect()) {
        prop_assert!(overlaps(&r, &r));
    }

    #[test]
    fn snap_is_idempotent(value in small_decimal(), grid_cm in 1i32..=500) {
        let grid = Decimal::from(grid_cm) / Decimal::from(100);
        let once = snap(value, grid);
        prop_assert_eq!(snap(once, grid), once);
    }

    #[test]
    fn snapped_value_is_a_grid_multiple(value in small_decimal(), grid_cm in 1i32..=500) {
        let grid = Decimal::from(grid_cm) / Decimal::from(100);
        let snapped = snap(value, grid);
        let steps = snapped / grid;
        prop_assert_eq!(steps, steps.trunc(), "snapped {} is not on grid {}", snapped, grid);
    }

    #[test]
    fn four_quarter_turns_restore_dimensions(w in positive_decimal(), h in positive_decimal()) {
        let mut rotation = Rotation::Deg0;
        for _ in 0..4 {
            rotation = rotation.advanced();
        }
        prop_assert_eq!(effective_dims(w, h, rotation), (w, h));
    }

    #[test]
    fn double_rotation_preserves_footprint(w in positive_decimal(), h in positive_decimal()) {
        let once = effective_dims(w, h, Rotation::Deg90);
        let twice = effective_dims(once.0, once.1, Rotation::Deg90);
        prop_assert_eq!(twice, (w, h));
    }

    #[test]
    fn placement_inside_empty_bounds_always_succeeds(
        x in 0i64..=1000,
        y in 0i64..=1000,
        w in 1i64..=500,
        h in 1i64..=500,
    ) {
        let bounds = Bounds {
            width: Decimal::new(1500, 2),
            height: Decimal::new(1500, 2),
        };
        let candidate = Rect::new(
            Decimal::new(x, 2),
            Decimal::new(y, 2),
            Decimal::new(w, 2),
            Decimal::new(h, 2),
        );
        // x+w <= 15.00 and y+h <= 15.00 by construction
        prop_assert!(can_place(bounds, &candidate, &[], None).is_ok());
    }

    #[test]
    fn refusal_reasons_are_consistent(a in arb_rect(), b in arb_rect()) {
        let bounds = Bounds {
            width: Decimal::from(200),
            height: Decimal::from(200),
        };
        let placed = PlacedRack { id: Uuid::new_v4(), rect: a };
        match can_place(bounds, &b, &[placed], None) {
            Ok(()) => prop_assert!(!overlaps(&a, &b)),
            Err(PlacementError::Overlap { other }) => {
                prop_assert_eq!(other, placed.id);
                prop_assert!(overlaps(&a, &b));
            }
            // Bounds are generous enough that arb rects stay inside.
            Err(PlacementError::OutOfBounds) => prop_assert!(
                b.x + b.width > bounds.width || b.y + b.height > bounds.height
            ),
        }
    }
}
