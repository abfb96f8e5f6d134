use railbar::{AnchorEdges, Anchors, ControlId, Rect};

const PARENT: Rect = Rect {
    x: 0.0,
    y: 0.0,
    width: 16.0,
    height: 200.0,
};

#[test]
fn test_bottom_anchor_rides_the_bottom_edge() {
    let mut anchors = Anchors::new();
    let mut rect = Rect::new(0.0, 184.0, 16.0, 16.0);
    anchors.register(ControlId::DownArrow, AnchorEdges::BOTTOM, rect, PARENT);

    let grown = Rect::new(0.0, 0.0, 16.0, 300.0);
    anchors.apply(ControlId::DownArrow, &mut rect, grown);
    assert_eq!(rect, Rect::new(0.0, 284.0, 16.0, 16.0));

    let shrunk = Rect::new(0.0, 0.0, 16.0, 100.0);
    anchors.apply(ControlId::DownArrow, &mut rect, shrunk);
    assert_eq!(rect, Rect::new(0.0, 84.0, 16.0, 16.0));
}

#[test]
fn test_top_bottom_anchor_stretches() {
    let mut anchors = Anchors::new();
    let mut rect = Rect::new(0.0, 16.0, 16.0, 168.0);
    anchors.register(ControlId::Track, AnchorEdges::TOP_BOTTOM, rect, PARENT);

    anchors.apply(ControlId::Track, &mut rect, Rect::new(0.0, 0.0, 16.0, 300.0));
    assert_eq!(rect, Rect::new(0.0, 16.0, 16.0, 268.0));

    // Collapsing below the margins clamps the height at zero.
    anchors.apply(ControlId::Track, &mut rect, Rect::new(0.0, 0.0, 16.0, 20.0));
    assert_eq!(rect.height, 0.0);
}

#[test]
fn test_top_anchor_keeps_top_margin() {
    let mut anchors = Anchors::new();
    let mut rect = Rect::new(0.0, 0.0, 16.0, 16.0);
    anchors.register(ControlId::UpArrow, AnchorEdges::TOP, rect, PARENT);

    anchors.apply(
        ControlId::UpArrow,
        &mut rect,
        Rect::new(0.0, 10.0, 16.0, 300.0),
    );
    assert_eq!(rect, Rect::new(0.0, 10.0, 16.0, 16.0));
}

#[test]
fn test_unregistered_control_is_untouched() {
    let anchors = Anchors::new();
    let mut rect = Rect::new(0.0, 16.0, 16.0, 15.0);
    let before = rect;
    anchors.apply(ControlId::Thumb, &mut rect, Rect::new(0.0, 0.0, 16.0, 300.0));
    assert_eq!(rect, before);
    assert!(!anchors.is_registered(ControlId::Thumb));
}

#[test]
fn test_reregistering_replaces_the_entry() {
    let mut anchors = Anchors::new();
    let mut rect = Rect::new(0.0, 184.0, 16.0, 16.0);
    anchors.register(ControlId::DownArrow, AnchorEdges::BOTTOM, rect, PARENT);

    // Capture new margins after the control moved.
    rect.y = 174.0;
    anchors.register(ControlId::DownArrow, AnchorEdges::BOTTOM, rect, PARENT);
    assert!(anchors.is_registered(ControlId::DownArrow));

    anchors.apply(
        ControlId::DownArrow,
        &mut rect,
        Rect::new(0.0, 0.0, 16.0, 300.0),
    );
    assert_eq!(rect.y, 274.0);
}
