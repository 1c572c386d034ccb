use super::*;

#[test]
fn empty_container_is_rejected() {
    let err = DragSession::begin(DragTarget::Overlay(OverlayId(1)), Rect::ZERO).unwrap_err();
    assert!(matches!(err, MyomError::NotReady(_)));
}

#[test]
fn overlay_drag_maps_and_clamps() {
    let drag = DragSession::begin(
        DragTarget::Overlay(OverlayId(3)),
        Rect::new(100.0, 50.0, 300.0, 250.0),
    )
    .unwrap();
    assert_eq!(drag.normalized(Point::new(200.0, 100.0)), Point::new(0.5, 0.25));
    assert_eq!(drag.normalized(Point::new(0.0, 900.0)), Point::new(0.0, 1.0));
    assert_eq!(drag.focal(Point::new(1.0, 1.0)), None);
}

#[test]
fn background_drag_pans_from_start() {
    let drag = DragSession::begin(
        DragTarget::Background {
            start_pointer: Point::new(10.0, 10.0),
            start_focal: Point::new(0.5, 0.5),
            placement: Rect::new(0.0, 0.0, 100.0, 100.0),
        },
        Rect::new(0.0, 0.0, 100.0, 100.0),
    )
    .unwrap();
    // Moves are measured from the drag start, not the previous event.
    let f = drag.focal(Point::new(20.0, 10.0)).unwrap();
    assert!((f.x - 0.4).abs() < 1e-9 && (f.y - 0.5).abs() < 1e-9);
    let f = drag.focal(Point::new(10.0, 30.0)).unwrap();
    assert!((f.x - 0.5).abs() < 1e-9 && (f.y - 0.3).abs() < 1e-9);
}
