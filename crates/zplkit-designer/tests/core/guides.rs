use zplkit_designer::element::{Alignable, ElementId, LabelElement};
use zplkit_designer::guides::{AlignmentKind, GuideAxis, SmartGuides};
use zplkit_designer::scene::{ItemKind, ItemShape, Scene};

/// Element known only by its device-pixel box.
struct PixelBox {
    id: Option<ElementId>,
    x_mm: f64,
    y_mm: f64,
    w_px: f64,
    h_px: f64,
}

impl Alignable for PixelBox {
    fn element_id(&self) -> Option<ElementId> {
        self.id
    }

    fn position_mm(&self) -> (f64, f64) {
        (self.x_mm, self.y_mm)
    }

    fn bounds_px(&self, _dpi: f64) -> (f64, f64) {
        (self.w_px, self.h_px)
    }
}

#[test]
fn test_left_edge_snap_draws_one_vertical_guide() {
    let mut scene = Scene::new();
    let mut guides = SmartGuides::new(203.0);
    let anchor = LabelElement::boxed(10.0, 10.0, 20.0, 10.0);
    let moving = LabelElement::boxed(10.05, 40.0, 15.0, 10.0);

    let proposal = guides
        .check_alignment(&moving, [&anchor], &mut scene)
        .unwrap();

    assert_eq!(proposal.snap_x(), Some(10.0));
    assert_eq!(proposal.snap_y(), None);
    assert_eq!(guides.guides().len(), 1);
    assert_eq!(guides.guides()[0].axis, GuideAxis::X);

    let lines: Vec<_> = scene.items_of_kind(ItemKind::Guide).collect();
    assert_eq!(lines.len(), 1);
    assert_eq!(
        lines[0].1.shape,
        ItemShape::Line {
            x1: 80.0,
            y1: 0.0,
            x2: 80.0,
            y2: 1000.0
        }
    );
}

#[test]
fn test_two_matching_siblings_draw_one_guide() {
    let mut scene = Scene::new();
    let mut guides = SmartGuides::new(203.0);
    let upper = LabelElement::boxed(10.0, 10.0, 20.0, 10.0);
    let lower = LabelElement::boxed(10.0, 30.0, 20.0, 10.0);
    let moving = LabelElement::boxed(10.05, 60.0, 15.0, 10.0);

    let proposal = guides
        .check_alignment(&moving, [&upper, &lower], &mut scene)
        .unwrap();

    assert_eq!(proposal.snap_x(), Some(10.0));
    assert_eq!(proposal.snap_y(), None);
    assert_eq!(guides.guides().len(), 1);
    assert_eq!(scene.items_of_kind(ItemKind::Guide).count(), 1);
}

#[test]
fn test_center_snap_positions_top_left() {
    let mut scene = Scene::new();
    let mut guides = SmartGuides::new(254.0);
    // 254 dpi: 10 px per mm, so pixel round trips are exact.
    let anchor = LabelElement::boxed(0.0, 20.0, 40.0, 10.0);
    let moving = LabelElement::boxed(13.5, 60.0, 10.0, 10.0);

    let proposal = guides
        .check_alignment(&moving, [&anchor], &mut scene)
        .unwrap();
    let x = proposal.x.unwrap();
    assert_eq!(x.kind, AlignmentKind::Center);
    assert_eq!(x.guide_mm, 20.0);
    assert_eq!(x.position_mm, 15.0);
    assert_eq!(proposal.apply(13.5, 60.0), (15.0, 60.0));
}

#[test]
fn test_both_axes_draw_two_guides() {
    let mut scene = Scene::new();
    let mut guides = SmartGuides::new(254.0);
    let anchor = LabelElement::boxed(10.0, 10.0, 10.0, 10.0);
    let moving = LabelElement::boxed(11.0, 11.5, 10.0, 10.0);

    let proposal = guides
        .check_alignment(&moving, [&anchor], &mut scene)
        .unwrap();
    assert_eq!(proposal.snap_x(), Some(10.0));
    assert_eq!(proposal.snap_y(), Some(10.0));
    assert_eq!(scene.items_of_kind(ItemKind::Guide).count(), 2);
}

#[test]
fn test_last_matching_sibling_wins() {
    let mut scene = Scene::new();
    let mut guides = SmartGuides::new(254.0);
    let first = LabelElement::boxed(10.0, 100.0, 5.0, 5.0);
    let second = LabelElement::boxed(11.0, 200.0, 5.0, 5.0);
    let moving = LabelElement::boxed(10.2, 0.0, 5.0, 5.0);

    let proposal = guides
        .check_alignment(&moving, [&first, &second], &mut scene)
        .unwrap();
    // `first` is closer, but `second` is visited later.
    assert_eq!(proposal.snap_x(), Some(11.0));
}

#[test]
fn test_threshold_is_exclusive() {
    let mut scene = Scene::new();
    let mut guides = SmartGuides::new(254.0);
    let anchor = LabelElement::boxed(10.0, 10.0, 100.0, 5.0);
    let moving = LabelElement::boxed(12.0, 50.0, 7.0, 5.0);
    // left edges exactly 2.0 mm apart
    assert!(guides
        .check_alignment(&moving, [&anchor], &mut scene)
        .is_none());
    assert!(guides.guides().is_empty());
}

#[test]
fn test_guides_replaced_each_update() {
    let mut scene = Scene::new();
    let mut guides = SmartGuides::new(203.0);
    let anchor = LabelElement::boxed(10.0, 10.0, 20.0, 10.0);

    let near = LabelElement::boxed(10.5, 50.0, 5.0, 5.0);
    guides.check_alignment(&near, [&anchor], &mut scene);
    guides.check_alignment(&near, [&anchor], &mut scene);
    assert_eq!(scene.items_of_kind(ItemKind::Guide).count(), 1);

    let far = LabelElement::boxed(70.0, 70.0, 5.0, 5.0);
    assert!(guides.check_alignment(&far, [&anchor], &mut scene).is_none());
    assert_eq!(scene.items_of_kind(ItemKind::Guide).count(), 0);
}

#[test]
fn test_self_and_anonymous_siblings_are_skipped() {
    let mut scene = Scene::new();
    let mut guides = SmartGuides::new(254.0);
    let id = ElementId::new();
    let moving = PixelBox {
        id: Some(id),
        x_mm: 10.0,
        y_mm: 10.0,
        w_px: 100.0,
        h_px: 100.0,
    };
    let same = PixelBox {
        id: Some(id),
        x_mm: 10.0,
        y_mm: 10.0,
        w_px: 100.0,
        h_px: 100.0,
    };
    let anonymous = PixelBox {
        id: None,
        x_mm: 10.0,
        y_mm: 10.0,
        w_px: 100.0,
        h_px: 100.0,
    };

    assert!(guides
        .check_alignment(&moving, [&same, &anonymous], &mut scene)
        .is_none());
}

#[test]
fn test_pixel_bounds_are_converted_at_dpi() {
    let mut scene = Scene::new();
    let mut guides = SmartGuides::new(254.0);
    let anchor = PixelBox {
        id: Some(ElementId::new()),
        x_mm: 0.0,
        y_mm: 0.0,
        w_px: 300.0,
        h_px: 50.0,
    };
    // anchor right edge is at 30 mm; moving right edge at 30.5 mm
    let moving = PixelBox {
        id: Some(ElementId::new()),
        x_mm: 20.5,
        y_mm: 40.0,
        w_px: 100.0,
        h_px: 50.0,
    };

    let proposal = guides
        .check_alignment(&moving, [&anchor], &mut scene)
        .unwrap();
    let x = proposal.x.unwrap();
    assert_eq!(x.kind, AlignmentKind::End);
    assert_eq!(x.guide_mm, 30.0);
    assert_eq!(x.position_mm, 20.0);
}

#[test]
fn test_disable_clears_guides() {
    let mut scene = Scene::new();
    let mut guides = SmartGuides::new(203.0);
    let anchor = LabelElement::boxed(10.0, 10.0, 20.0, 10.0);
    let moving = LabelElement::boxed(10.5, 50.0, 5.0, 5.0);
    guides.check_alignment(&moving, [&anchor], &mut scene);

    guides.set_enabled(false, &mut scene);
    assert!(guides.guides().is_empty());
    assert_eq!(scene.items_of_kind(ItemKind::Guide).count(), 0);
    assert!(guides
        .check_alignment(&moving, [&anchor], &mut scene)
        .is_none());
}
