use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use railbar::{
    Indicator, IndicatorBindings, Modifiers, Notification, PointerEvent, PointerId, Rect,
    ScrollBar, ScrollBarConfig, ScrollBarError, ScrollTarget, ScrollView, TextView,
};

fn bar() -> ScrollBar {
    let mut bar = ScrollBar::with_name("sb");
    bar.set_scroll_properties(10.0, 0.0, 100.0);
    bar.set_page_scroll_size(5.0);
    bar.init(Rect::new(0.0, 0.0, 16.0, 200.0)).expect("init");
    bar
}

// ============================================================================
// Position setter contract
// ============================================================================

#[test]
fn test_set_position_rounds_and_clamps() {
    let mut bar = bar();

    bar.set_position(50.4);
    assert_eq!(bar.position(), 50.0);

    bar.set_position(150.0);
    assert_eq!(bar.position(), 100.0);

    bar.set_position(-10.0);
    assert_eq!(bar.position(), 0.0);

    bar.set_position(f32::NAN);
    assert_eq!(bar.position(), 0.0);
}

#[test]
fn test_set_position_noop_emits_nothing() {
    let mut bar = bar();
    bar.set_position(50.0);
    bar.take_notifications();

    bar.set_position(50.0);
    bar.set_position(50.3); // rounds to the current value
    assert!(bar.take_notifications().is_empty());
}

#[test]
fn test_scroll_notification_carries_position() {
    let mut bar = bar();
    bar.set_position(55.0);
    assert_eq!(
        bar.take_notifications(),
        vec![Notification::Scroll {
            target: "sb".into(),
            position: 55.0,
        }]
    );
}

#[test]
fn test_scroll_properties_reclamp_silently() {
    let mut bar = bar();
    bar.set_position(50.0);
    bar.take_notifications();

    bar.set_scroll_properties(10.0, 0.0, 30.0);
    assert_eq!(bar.position(), 30.0);
    assert!(bar.take_notifications().is_empty());
}

// ============================================================================
// End-to-end: range [0, 100], page 10, step 5, position 50
// ============================================================================

#[test]
fn test_scroll_down_scenario() {
    let shared = Rc::new(Cell::new(0.0f32));
    let view = SharedView(Rc::clone(&shared));

    let mut bar = bar();
    bar.set_scroll_target(ScrollTarget::Generic(Box::new(view)));
    bar.set_position(50.0);
    let offset_before = bar.geometry().thumb_offset;
    bar.take_notifications();

    bar.scroll_down();

    assert_eq!(bar.position(), 55.0);
    assert_eq!(shared.get(), 55.0);
    assert!(bar.geometry().thumb_offset > offset_before);
    assert_eq!(
        bar.take_notifications(),
        vec![Notification::Scroll {
            target: "sb".into(),
            position: 55.0,
        }]
    );
}

#[test]
fn test_degenerate_range_disables_everything() {
    let mut bar = bar();
    bar.set_position(40.0);
    bar.set_scroll_properties(10.0, 0.0, 0.0);

    assert!(!bar.geometry().visible);
    assert!(bar.up_arrow().expect("up arrow").disabled());
    assert!(bar.down_arrow().expect("down arrow").disabled());
    assert!(bar.track().disabled());
}

// ============================================================================
// Scroll targets
// ============================================================================

struct SharedView(Rc<Cell<f32>>);

impl ScrollView for SharedView {
    fn set_scroll(&mut self, position: f32) {
        self.0.set(position);
    }
}

struct FakeText {
    scroll: Rc<Cell<f32>>,
    lines_visible: f32,
    max_scroll: f32,
}

impl ScrollView for FakeText {
    fn set_scroll(&mut self, position: f32) {
        self.scroll.set(position);
    }
}

impl TextView for FakeText {
    fn scroll(&self) -> f32 {
        self.scroll.get()
    }

    fn bottom_scroll(&self) -> f32 {
        self.scroll.get() + self.lines_visible
    }

    fn max_scroll(&self) -> f32 {
        self.max_scroll
    }
}

#[test]
fn test_generic_target_receives_pushes() {
    let shared = Rc::new(Cell::new(0.0f32));
    let mut bar = bar();
    bar.set_scroll_target(ScrollTarget::Generic(Box::new(SharedView(Rc::clone(
        &shared,
    )))));

    bar.set_position(42.0);
    assert_eq!(shared.get(), 42.0);
}

#[test]
fn test_disabled_widget_does_not_push_target() {
    let shared = Rc::new(Cell::new(0.0f32));
    let mut bar = bar();
    bar.set_scroll_target(ScrollTarget::Generic(Box::new(SharedView(Rc::clone(
        &shared,
    )))));
    bar.set_disabled(true);

    bar.set_position(42.0);
    assert_eq!(bar.position(), 42.0);
    assert_eq!(shared.get(), 0.0);
}

#[test]
fn test_text_target_drives_bounds() {
    let scroll = Rc::new(Cell::new(1.0f32));
    let text = FakeText {
        scroll: Rc::clone(&scroll),
        lines_visible: 20.0,
        max_scroll: 80.0,
    };

    let mut bar = bar();
    bar.set_scroll_target(ScrollTarget::TextLike(Box::new(text)));

    assert_eq!(bar.state().page_size(), 20.0);
    assert_eq!(bar.state().page_scroll_size(), 1.0);
    assert_eq!(bar.state().min_position(), 1.0);
    assert_eq!(bar.state().max_position(), 80.0);

    // The derived bounds beat externally configured ones on the next pass.
    bar.set_scroll_properties(10.0, 0.0, 100.0);
    bar.relayout();
    assert_eq!(bar.state().page_size(), 20.0);
    assert_eq!(bar.state().max_position(), 80.0);

    bar.set_position(30.0);
    assert_eq!(scroll.get(), 30.0);
}

// ============================================================================
// Lifecycle: init, layout, anchors
// ============================================================================

#[test]
fn test_init_runs_once() {
    let mut bar = bar();
    assert_eq!(
        bar.init(Rect::new(0.0, 0.0, 16.0, 200.0)),
        Err(ScrollBarError::AlreadyInitialized("sb".into()))
    );
}

#[test]
fn test_init_rejects_non_finite_bounds() {
    let mut bar = ScrollBar::with_name("sb");
    assert_eq!(
        bar.init(Rect::new(0.0, 0.0, 16.0, f32::NAN)),
        Err(ScrollBarError::InvalidBounds("sb".into()))
    );
}

#[test]
fn test_layout_before_init_defers() {
    let mut bar = ScrollBar::with_name("sb");
    bar.set_scroll_properties(10.0, 0.0, 100.0);

    bar.layout(Rect::new(0.0, 0.0, 16.0, 200.0));
    assert_eq!(bar.bounds(), Rect::default());
    assert!(!bar.geometry().visible);
}

#[test]
fn test_resize_anchors_down_arrow_and_track() {
    let mut bar = bar();
    bar.layout(Rect::new(0.0, 0.0, 16.0, 300.0));

    let down = bar.down_arrow().expect("down arrow");
    assert_eq!(down.rect.y, 284.0);
    assert_eq!(down.rect.height, 16.0);

    assert_eq!(bar.track().rect.y, 16.0);
    assert_eq!(bar.track().rect.height, 268.0);

    // Geometry follows the stretched track.
    let geometry = bar.geometry();
    assert!(geometry.visible);
    assert!((bar.available_height() - geometry.available_length).abs() < 1e-3);
}

#[test]
fn test_available_height_matches_geometry() {
    let bar = bar();
    assert!((bar.available_height() - bar.geometry().available_length).abs() < 1e-3);
}

// ============================================================================
// Visibility, init callback, sounds
// ============================================================================

#[test]
fn test_show_hide_notifications() {
    let mut bar = bar();
    bar.set_visible(false);
    bar.set_visible(false);
    bar.set_visible(true);

    assert_eq!(
        bar.take_notifications(),
        vec![
            Notification::Hide {
                target: "sb".into()
            },
            Notification::Show {
                target: "sb".into()
            },
        ]
    );
}

#[test]
fn test_init_callback_notification() {
    let mut bar = ScrollBar::with_name("sb");
    bar.configure(ScrollBarConfig {
        enable_init_callback: true,
        ..Default::default()
    });
    bar.init(Rect::new(0.0, 0.0, 16.0, 200.0)).expect("init");

    let notes = bar.take_notifications();
    assert!(notes.contains(&Notification::Init {
        target: "sb".into()
    }));
}

// ============================================================================
// Bindings, capability trait, variants
// ============================================================================

#[test]
fn test_restored_dismiss_binding_clears_everything_on_release() {
    let mut bar = bar();
    // init unset the base default; restore it.
    assert!(!bar.bindings().dismiss_on_release);
    bar.set_bindings(IndicatorBindings::default());

    let thumb_top = bar.thumb().y();
    bar.handle_pointer(PointerEvent::Press {
        pointer: PointerId(0),
        x: 8.0,
        y: thumb_top + 2.0,
        modifiers: Modifiers::new(),
    });
    assert!(bar.is_dragging());

    // Under the base binding, a release from any pointer dismisses all.
    bar.handle_pointer(PointerEvent::Release {
        pointer: PointerId(1),
        x: 8.0,
        y: 0.0,
    });
    assert!(!bar.is_dragging());
    assert!(!bar.thumb().is_pressed());
}

fn nudge<W: Indicator>(widget: &mut W, delta: f32) {
    let position = widget.position();
    widget.set_position(position + delta);
}

#[test]
fn test_indicator_capability() {
    let mut bar = bar();
    nudge(&mut bar, 7.0);
    assert_eq!(Indicator::position(&bar), 7.0);

    Indicator::set_disabled(&mut bar, true);
    assert!(Indicator::disabled(&bar));
}

#[test]
fn test_arrowless_bar_tracks_full_bounds() {
    let mut bar = ScrollBar::with_name("bare").without_arrows();
    bar.set_scroll_properties(10.0, 0.0, 100.0);
    bar.init(Rect::new(0.0, 0.0, 16.0, 200.0)).expect("init");

    assert!(bar.up_arrow().is_none());
    assert!(bar.down_arrow().is_none());
    assert_eq!(bar.track().rect, Rect::new(0.0, 0.0, 16.0, 200.0));

    bar.handle_pointer(PointerEvent::Wheel { delta: -2.0 });
    assert_eq!(bar.position(), 2.0);
}

#[test]
fn test_clearing_target_restores_external_bounds() {
    let scroll = Rc::new(Cell::new(1.0f32));
    let mut bar = bar();
    bar.set_scroll_target(ScrollTarget::TextLike(Box::new(FakeText {
        scroll,
        lines_visible: 20.0,
        max_scroll: 80.0,
    })));
    assert_eq!(bar.state().max_position(), 80.0);

    bar.clear_scroll_target();
    bar.set_scroll_properties(10.0, 0.0, 100.0);
    bar.relayout();
    assert_eq!(bar.state().max_position(), 100.0);
    assert_eq!(bar.state().page_size(), 10.0);
}

#[test]
fn test_offsets_extend_the_travel_range() {
    let mut bar = ScrollBar::with_name("sb");
    bar.configure(ScrollBarConfig {
        offset_top: 2.0,
        offset_bottom: 3.0,
        ..Default::default()
    });
    bar.set_scroll_properties(10.0, 0.0, 100.0);
    bar.init(Rect::new(0.0, 0.0, 16.0, 200.0)).expect("init");

    let geometry = bar.geometry();
    // Padded track: 168 + 2 + 3, starting above the track control.
    assert!((geometry.available_length - (173.0 - geometry.thumb_length)).abs() < 1e-3);
    assert_eq!(geometry.thumb_offset, 14.0);
    assert!((bar.available_height() - geometry.available_length).abs() < 1e-3);
}

#[test]
fn test_sound_map_dispatch() {
    let played: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&played);

    let mut bar = ScrollBar::with_name("sb");
    bar.configure(ScrollBarConfig {
        sound_map: HashMap::from([("scroll".to_string(), "beep".to_string())]),
        ..Default::default()
    });
    bar.set_scroll_properties(10.0, 0.0, 100.0);
    bar.init(Rect::new(0.0, 0.0, 16.0, 200.0)).expect("init");
    bar.set_sound_dispatcher(Box::new(move |id: &str| {
        sink.borrow_mut().push(id.to_string());
    }));

    bar.set_position(10.0);
    bar.set_visible(false); // not mapped, no sound

    assert_eq!(*played.borrow(), vec!["beep".to_string()]);
}
