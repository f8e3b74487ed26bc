use zplkit_designer::transform::{clamp_scale, mm_to_px, px_to_mm, CanvasSpace};

#[test]
fn test_mm_to_px_rounds_to_whole_dots() {
    assert_eq!(mm_to_px(25.4, 203.0), 203.0);
    assert_eq!(mm_to_px(10.0, 300.0), 118.0);
    assert_eq!(mm_to_px(0.0, 203.0), 0.0);
    assert_eq!(mm_to_px(100.0, 203.0), 799.0);
}

#[test]
fn test_px_to_mm_is_exact() {
    assert!((px_to_mm(203.0, 203.0) - 25.4).abs() < 1e-12);
    assert!((px_to_mm(600.0, 600.0) - 25.4).abs() < 1e-12);
}

#[test]
fn test_canvas_space_pixel_dimensions() {
    let space = CanvasSpace::new(100.0, 50.0, 203.0).unwrap();
    assert_eq!(space.width_px(), 799.0);
    assert_eq!(space.height_px(), 400.0);
    assert_eq!(space.scale_factor(), 1.0);
}

#[test]
fn test_canvas_space_recomputes_on_change() {
    let mut space = CanvasSpace::new(100.0, 50.0, 203.0).unwrap();

    space.set_dpi(300.0).unwrap();
    assert_eq!(space.width_px(), 1181.0);
    assert_eq!(space.height_px(), 591.0);

    space.set_size_mm(25.4, 50.8).unwrap();
    assert_eq!(space.width_px(), 300.0);
    assert_eq!(space.height_px(), 600.0);
}

#[test]
fn test_canvas_space_rejects_bad_input() {
    assert!(CanvasSpace::new(0.0, 50.0, 203.0).is_err());
    assert!(CanvasSpace::new(100.0, -1.0, 203.0).is_err());
    assert!(CanvasSpace::new(100.0, 50.0, f64::NAN).is_err());

    let mut space = CanvasSpace::new(100.0, 50.0, 203.0).unwrap();
    assert!(space.set_dpi(0.0).is_err());
    assert_eq!(space.dpi(), 203.0);
    assert_eq!(space.width_px(), 799.0);
}

#[test]
fn test_scale_is_clamped() {
    let mut space = CanvasSpace::new(100.0, 50.0, 203.0).unwrap();
    assert_eq!(space.set_scale_factor(20.0), 10.0);
    assert_eq!(space.set_scale_factor(0.1), 0.5);
    assert_eq!(space.set_scale_factor(2.5), 2.5);
    assert_eq!(clamp_scale(0.5), 0.5);
    assert_eq!(clamp_scale(10.0), 10.0);
}
