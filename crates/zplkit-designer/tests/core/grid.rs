use zplkit_designer::element::ElementId;
use zplkit_designer::grid::{line_positions, Axis, GridConfig, GridLayer};
use zplkit_designer::scene::{ItemKind, ItemShape, Scene, SceneItem};
use zplkit_designer::transform::CanvasSpace;
use zplkit_settings::{SettingsStore, SnapMode};

fn setup(width_mm: f64, height_mm: f64) -> (GridLayer, Scene, CanvasSpace, SettingsStore) {
    let config = GridConfig::new(5.0, 5.0, 0.0, 0.0).unwrap();
    let mut layer = GridLayer::new(config);
    let mut scene = Scene::new();
    let space = CanvasSpace::new(width_mm, height_mm, 203.0).unwrap();
    layer.regenerate(&mut scene, &space);
    (layer, scene, space, SettingsStore::in_memory())
}

fn visible_lines(scene: &Scene) -> usize {
    scene
        .items_of_kind(ItemKind::GridLine)
        .filter(|(_, item)| item.visible)
        .count()
}

#[test]
fn test_line_positions_include_far_edge() {
    assert_eq!(
        line_positions(0.0, 5.0, 25.0),
        vec![0.0, 5.0, 10.0, 15.0, 20.0, 25.0]
    );
    assert_eq!(line_positions(2.5, 5.0, 20.0), vec![2.5, 7.5, 12.5, 17.5]);
    assert_eq!(line_positions(30.0, 5.0, 25.0), Vec::<f64>::new());
}

#[test]
fn test_fractional_spacing_reaches_edge() {
    let positions = line_positions(0.0, 0.1, 1.0);
    assert_eq!(positions.len(), 11);
}

#[test]
fn test_config_validation() {
    assert!(GridConfig::new(0.0, 5.0, 0.0, 0.0).is_err());
    assert!(GridConfig::new(5.0, -5.0, 0.0, 0.0).is_err());
    assert!(GridConfig::new(5.0, 5.0, -1.0, 0.0).is_err());
    assert!(GridConfig::new(5.0, 5.0, 0.0, f64::INFINITY).is_err());
}

#[test]
fn test_snap_to_nearest_line() {
    let config = GridConfig::new(5.0, 2.0, 1.0, 0.0).unwrap();
    assert_eq!(config.snap(12.4, Axis::X), 11.0);
    assert_eq!(config.snap(13.6, Axis::X), 16.0);
    assert_eq!(config.snap(0.2, Axis::X), 1.0);
    assert_eq!(config.snap(-3.0, Axis::X), 1.0);
    assert_eq!(config.snap(4.9, Axis::Y), 4.0);
}

#[test]
fn test_regenerate_draws_lines_and_border() {
    let (layer, scene, space, _) = setup(25.0, 10.0);
    // 6 vertical + 3 horizontal
    assert_eq!(layer.line_handles().len(), 9);

    let border = scene.get(layer.border_handle().unwrap()).unwrap();
    assert_eq!(
        border.shape,
        ItemShape::Rect {
            x: 0.0,
            y: 0.0,
            width: space.width_px(),
            height: space.height_px()
        }
    );
}

#[test]
fn test_border_drawn_when_grid_hidden() {
    let config = GridConfig::new(5.0, 5.0, 0.0, 0.0)
        .unwrap()
        .with_visible(false);
    let mut layer = GridLayer::new(config);
    let mut scene = Scene::new();
    let space = CanvasSpace::new(25.0, 25.0, 203.0).unwrap();
    layer.regenerate(&mut scene, &space);

    assert_eq!(visible_lines(&scene), 0);
    assert!(scene.get(layer.border_handle().unwrap()).unwrap().visible);
}

#[test]
fn test_toggle_visibility_is_idempotent() {
    let (mut layer, mut scene, space, mut store) = setup(25.0, 25.0);
    let handles = layer.line_handles().to_vec();

    layer
        .set_visible(true, &mut scene, &space, &mut store)
        .unwrap();
    layer
        .set_visible(true, &mut scene, &space, &mut store)
        .unwrap();

    assert_eq!(layer.line_handles(), handles.as_slice());
    assert_eq!(layer.regeneration_count(), 1);
    assert_eq!(visible_lines(&scene), 12);
}

#[test]
fn test_hide_flips_flags_in_place() {
    let (mut layer, mut scene, space, mut store) = setup(25.0, 25.0);
    let before = scene.len();

    layer
        .set_visible(false, &mut scene, &space, &mut store)
        .unwrap();

    assert_eq!(scene.len(), before);
    assert_eq!(visible_lines(&scene), 0);
    assert_eq!(layer.regeneration_count(), 1);
    assert!(!store.grid().show_gridlines);
}

#[test]
fn test_stale_handles_trigger_regeneration() {
    let (mut layer, mut scene, space, mut store) = setup(25.0, 25.0);
    scene.clear();

    layer
        .set_visible(true, &mut scene, &space, &mut store)
        .unwrap();

    assert_eq!(layer.regeneration_count(), 2);
    assert!(layer.line_handles().iter().all(|h| scene.contains(*h)));
    assert_eq!(visible_lines(&scene), 12);
}

#[test]
fn test_stale_border_regenerates_without_lines() {
    // Offsets past the label extent leave only the border.
    let config = GridConfig::new(5.0, 5.0, 20.0, 20.0).unwrap();
    let mut layer = GridLayer::new(config);
    let mut scene = Scene::new();
    let mut store = SettingsStore::in_memory();
    let space = CanvasSpace::new(10.0, 10.0, 203.0).unwrap();
    layer.regenerate(&mut scene, &space);
    assert!(layer.line_handles().is_empty());

    scene.clear();
    layer
        .set_visible(true, &mut scene, &space, &mut store)
        .unwrap();

    assert_eq!(layer.regeneration_count(), 2);
    assert_eq!(scene.items_of_kind(ItemKind::Border).count(), 1);
    assert!(scene.contains(layer.border_handle().unwrap()));
}

#[test]
fn test_resize_keeps_elements() {
    let (mut layer, mut scene, mut space, _) = setup(25.0, 25.0);
    let id = ElementId::new();
    let shape = ItemShape::Rect {
        x: 8.0,
        y: 8.0,
        width: 40.0,
        height: 40.0,
    };
    scene.add(SceneItem::new(ItemKind::Element(id), shape));

    space.set_size_mm(50.0, 25.0).unwrap();
    layer.resize(&mut scene, &space);

    let handle = scene.find_element(id).unwrap();
    assert_eq!(scene.get(handle).unwrap().shape, shape);
    // 11 vertical + 6 horizontal
    assert_eq!(layer.line_handles().len(), 17);
    assert_eq!(scene.items_of_kind(ItemKind::Border).count(), 1);
}

#[test]
fn test_update_config_persists_and_redraws() {
    let (mut layer, mut scene, space, mut store) = setup(25.0, 25.0);
    let config = GridConfig::new(10.0, 10.0, 0.0, 0.0)
        .unwrap()
        .with_snap_mode(SnapMode::Both);

    layer
        .update_config(config, &mut scene, &space, &mut store)
        .unwrap();

    assert_eq!(layer.line_handles().len(), 6);
    assert_eq!(store.grid().size_x, 10.0);
    assert_eq!(store.grid().snap_mode, SnapMode::Both);
    assert_eq!(scene.items_of_kind(ItemKind::GridLine).count(), 6);
}
