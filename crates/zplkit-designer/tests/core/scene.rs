use zplkit_designer::scene::{ItemKind, ItemShape, Scene, SceneError, SceneItem};

fn guide() -> SceneItem {
    SceneItem::new(
        ItemKind::Guide,
        ItemShape::Line {
            x1: 0.0,
            y1: 0.0,
            x2: 0.0,
            y2: 1000.0,
        },
    )
}

#[test]
fn test_handles_do_not_survive_clear() {
    let mut scene = Scene::new();
    let old = scene.add(guide());
    scene.clear();
    let new = scene.add(guide());

    assert_ne!(old, new);
    assert!(!scene.contains(old));
    assert_eq!(scene.set_visible(old, false), Err(SceneError::StaleHandle(old)));
    assert!(scene.get(new).unwrap().visible);
}

#[test]
fn test_items_of_kind() {
    let mut scene = Scene::new();
    scene.add(guide());
    scene.add(guide());
    scene.add(SceneItem::new(
        ItemKind::Border,
        ItemShape::Rect {
            x: 0.0,
            y: 0.0,
            width: 10.0,
            height: 10.0,
        },
    ));
    assert_eq!(scene.items_of_kind(ItemKind::Guide).count(), 2);
    assert_eq!(scene.len(), 3);
}
