// File: crates/chart-core/tests/properties.rs
// Purpose: Property checks for the geometry mapper, pie sweep and hover resolution.

use std::f64::consts::{PI, TAU};

use chart_core::{map_line, pie_slices, HoverState, Insets, PieLayout, Point, Series, Size};
use proptest::prelude::*;

fn series_of(values: &[f64]) -> Series {
    Series::from_pairs(values.iter().enumerate().map(|(i, v)| (format!("p{i}"), *v)))
}

fn values() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1_000.0f64..1_000.0, 1..40)
}

proptest! {
    #[test]
    fn one_point_per_record(vs in values()) {
        let pts = map_line(&series_of(&vs), Size::default(), Insets::default()).unwrap();
        prop_assert_eq!(pts.len(), vs.len());
        prop_assert!(pts.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
    }

    #[test]
    fn higher_value_is_higher_on_screen(vs in values()) {
        let pts = map_line(&series_of(&vs), Size::default(), Insets::default()).unwrap();
        for i in 0..vs.len() {
            for j in 0..vs.len() {
                if vs[i] > vs[j] {
                    prop_assert!(pts[i].y < pts[j].y);
                }
            }
        }
    }

    #[test]
    fn flat_series_sits_on_midline(v in -50.0f64..50.0, n in 1usize..20) {
        let size = Size::new(400.0, 200.0);
        let insets = Insets::new(30.0, 10.0, 10.0, 30.0);
        let pts = map_line(&series_of(&vec![v; n]), size, insets).unwrap();
        let mid = insets.top + (size.height - insets.vsum()) * 0.5;
        prop_assert!(pts.iter().all(|p| (p.y - mid).abs() < 1e-9));
    }

    #[test]
    fn narrow_span_uses_unit_range(base in -100.0f64..100.0, span in 0.01f64..0.99) {
        let pts = map_line(&series_of(&[base, base + span]), Size::new(200.0, 120.0), Insets::uniform(10.0)).unwrap();
        prop_assert!((pts[0].y - 110.0).abs() < 1e-9);
        prop_assert!((pts[1].y - (110.0 - span * 100.0)).abs() < 1e-6);
    }

    #[test]
    fn slice_spans_sum_to_progress_turn(vs in prop::collection::vec(0.0f64..500.0, 1..20), progress in 0.0f64..=1.0) {
        prop_assume!(vs.iter().sum::<f64>() > 0.0);
        let layout = PieLayout::new(Point::new(100.0, 100.0), 80.0);
        let slices = pie_slices(&series_of(&vs), &layout, progress);
        let sum: f64 = slices.iter().map(|s| s.span()).sum();
        prop_assert!((sum - TAU * progress).abs() < 1e-9);
        for s in &slices {
            prop_assert_eq!(s.large_arc, s.span() > PI);
        }
    }

    #[test]
    fn hover_resolves_to_same_position(vs in values(), pick in any::<prop::sample::Index>()) {
        let series = series_of(&vs);
        let i = pick.index(vs.len());
        let mut hover = HoverState::new();
        hover.enter(i);
        let point = hover.resolve(&series).unwrap();
        prop_assert_eq!(point, &series.points()[i]);
    }
}
