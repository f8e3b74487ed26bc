use proptest::prelude::*;
use zplkit_core::constants::{MAX_SCALE, MIN_SCALE, VIEW_PADDING, ZOOM_STEP};
use zplkit_designer::transform::Point;
use zplkit_designer::viewport::ViewTransform;

#[test]
fn test_viewport_creation() {
    let view = ViewTransform::new(1200.0, 800.0);
    assert_eq!(view.scale(), 1.0);
    assert_eq!(view.translation(), (0.0, 0.0));
    assert_eq!(view.viewport_center(), Point::new(600.0, 400.0));
}

#[test]
fn test_zoom_in_and_out_are_inverse() {
    let mut view = ViewTransform::new(1200.0, 800.0);
    view.zoom_in();
    assert!((view.scale() - ZOOM_STEP).abs() < 1e-12);
    view.zoom_out();
    assert!((view.scale() - 1.0).abs() < 1e-12);
}

#[test]
fn test_zoom_limits() {
    let mut view = ViewTransform::new(1200.0, 800.0);
    for _ in 0..50 {
        view.zoom_in();
    }
    assert_eq!(view.scale(), MAX_SCALE);

    for _ in 0..100 {
        view.zoom_out();
    }
    assert_eq!(view.scale(), MIN_SCALE);
}

#[test]
fn test_wheel_direction() {
    let mut view = ViewTransform::new(1200.0, 800.0);
    let anchor = Point::new(100.0, 100.0);
    assert!(view.wheel_zoom(120.0, anchor) > 1.0);
    view.reset_zoom();
    assert!(view.wheel_zoom(-120.0, anchor) < 1.0);
    let before = view.scale();
    assert_eq!(view.wheel_zoom(0.0, anchor), before);
}

#[test]
fn test_reset_clears_translation() {
    let mut view = ViewTransform::new(1200.0, 800.0);
    view.zoom_at(Point::new(37.0, 91.0), 2.0);
    view.pan_by(15.0, -4.0);
    assert_ne!(view.translation(), (0.0, 0.0));

    assert_eq!(view.reset_zoom(), 1.0);
    assert_eq!(view.translation(), (0.0, 0.0));
}

#[test]
fn test_pan_by_moves_scene() {
    let mut view = ViewTransform::new(1200.0, 800.0);
    view.pan_by(50.0, 75.0);
    let p = view.map_to_scene(Point::new(50.0, 75.0));
    assert!(p.x.abs() < 1e-12);
    assert!(p.y.abs() < 1e-12);
}

#[test]
fn test_fit_to_view_centers_label() {
    let mut view = ViewTransform::new(1200.0, 800.0);
    let scale = view.fit_to_view(799.0, 400.0, VIEW_PADDING);

    let padding_factor = 1.0 - 2.0 * VIEW_PADDING;
    let expected = (1200.0 * padding_factor / 799.0).min(800.0 * padding_factor / 400.0);
    assert!((scale - expected).abs() < 1e-12);

    let top_left = view.map_from_scene(Point::new(0.0, 0.0));
    let bottom_right = view.map_from_scene(Point::new(799.0, 400.0));
    assert!((top_left.x - (1200.0 - bottom_right.x)).abs() < 1e-9);
    assert!((top_left.y - (800.0 - bottom_right.y)).abs() < 1e-9);
}

#[test]
fn test_fit_to_view_ignores_empty_extent() {
    let mut view = ViewTransform::new(1200.0, 800.0);
    assert_eq!(view.fit_to_view(0.0, 400.0, VIEW_PADDING), 1.0);
}

proptest! {
    #[test]
    fn zoom_keeps_point_under_anchor(
        start in MIN_SCALE..(MAX_SCALE / ZOOM_STEP),
        ax in 0.0f64..1200.0,
        ay in 0.0f64..800.0,
        pan_x in -500.0f64..500.0,
        pan_y in -500.0f64..500.0,
    ) {
        let mut view = ViewTransform::new(1200.0, 800.0);
        view.zoom_at(Point::new(0.0, 0.0), start);
        view.pan_by(pan_x, pan_y);

        let anchor = Point::new(ax, ay);
        let before = view.map_to_scene(anchor);
        view.zoom_at(anchor, ZOOM_STEP);
        let after = view.map_to_scene(anchor);

        prop_assert!((after.x - before.x).abs() < 1e-6);
        prop_assert!((after.y - before.y).abs() < 1e-6);
    }

    #[test]
    fn zoom_in_then_out_restores_scale_and_anchor(
        start in MIN_SCALE..(MAX_SCALE / ZOOM_STEP),
        ax in 0.0f64..1200.0,
        ay in 0.0f64..800.0,
    ) {
        let mut view = ViewTransform::new(1200.0, 800.0);
        view.zoom_at(Point::new(0.0, 0.0), start);
        let start = view.scale();

        let anchor = Point::new(ax, ay);
        let before = view.map_to_scene(anchor);
        view.zoom_at(anchor, ZOOM_STEP);
        view.zoom_at(anchor, 1.0 / ZOOM_STEP);
        let after = view.map_to_scene(anchor);

        prop_assert!((view.scale() - start).abs() < 1e-9);
        prop_assert!((after.x - before.x).abs() < 1e-6);
        prop_assert!((after.y - before.y).abs() < 1e-6);
    }

    #[test]
    fn scale_stays_in_range(factors in proptest::collection::vec(0.1f64..10.0, 1..30)) {
        let mut view = ViewTransform::new(1200.0, 800.0);
        for factor in factors {
            let scale = view.zoom_at(view.viewport_center(), factor);
            prop_assert!((MIN_SCALE..=MAX_SCALE).contains(&scale));
        }
    }
}
