//! The scrollbar widget root.
//!
//! Composes the scroll state, thumb geometry, collaborator controls, and
//! the drag/track/arrow interaction state machines, and owns the public
//! contract: position/disabled/track-mode setters, pointer and key
//! dispatch, target binding, and the notification queue.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use thiserror::Error;

use crate::anchor::{AnchorEdges, Anchors};
use crate::control::{ControlId, PressControl};
use crate::event::{EventResult, Key, Modifiers, Notification, PointerEvent, PointerId};
use crate::geometry::{self, Rect, ThumbGeometry, TrackMetrics};
use crate::sound::SoundDispatcher;
use crate::state::{Indicator, IndicatorBindings, ScrollState};
use crate::target::ScrollTarget;

/// Generate a unique auto-incremented scrollbar name.
fn generate_auto_name() -> String {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    let id = COUNTER.fetch_add(1, Ordering::SeqCst);
    format!("__scrollbar_{}", id)
}

/// Track press behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackMode {
    /// Page toward the pressed position, one step per repeat beat.
    #[default]
    ScrollPage,
    /// Jump to the pressed position and drag from there.
    ScrollToCursor,
}

/// Configuration surface, set at construction or at runtime.
#[derive(Debug, Clone)]
pub struct ScrollBarConfig {
    pub track_mode: TrackMode,
    /// Extra thumb travel above the track control.
    pub offset_top: f32,
    /// Extra thumb travel below the track control.
    pub offset_bottom: f32,
    /// Step per track click in `ScrollPage` mode.
    pub track_scroll_page_size: f32,
    pub disabled: bool,
    pub visible: bool,
    /// Emit `Notification::Init` when configuration completes.
    pub enable_init_callback: bool,
    /// Notification name -> sound process id.
    pub sound_map: HashMap<String, String>,
}

impl Default for ScrollBarConfig {
    fn default() -> Self {
        Self {
            track_mode: TrackMode::default(),
            offset_top: 0.0,
            offset_bottom: 0.0,
            track_scroll_page_size: 1.0,
            disabled: false,
            visible: true,
            enable_init_callback: false,
            sound_map: HashMap::new(),
        }
    }
}

/// Errors at the configuration boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScrollBarError {
    #[error("scrollbar `{0}` is already initialized")]
    AlreadyInitialized(String),
    #[error("scrollbar `{0}` was given non-finite bounds")]
    InvalidBounds(String),
}

/// Active thumb drag.
///
/// Its existence is the pointer-capture subscription: move/release
/// routing for its pointer lasts exactly as long as the value does.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Drag {
    pointer: PointerId,
    /// Where within the thumb the pointer grabbed it.
    axis_offset: f32,
    /// Whether a track press initiated this drag.
    from_track: bool,
}

/// A vertical scrollbar widget core.
///
/// The host renders the controls from [`ScrollBar::geometry`] and the
/// control rects, routes input in as [`PointerEvent`]s, calls
/// [`ScrollBar::tick`] at its auto-repeat cadence while a pointer is
/// held, and drains [`ScrollBar::take_notifications`] after each event.
///
/// # Example
///
/// ```ignore
/// let mut bar = ScrollBar::new();
/// bar.set_scroll_properties(10.0, 0.0, 100.0);
/// bar.init(Rect::new(0.0, 0.0, 16.0, 200.0))?;
///
/// bar.handle_pointer(PointerEvent::Wheel { delta: -1.0 });
/// for note in bar.take_notifications() {
///     // Notification::Scroll { position, .. }
/// }
/// ```
pub struct ScrollBar {
    name: String,
    state: ScrollState,
    config: ScrollBarConfig,
    bindings: IndicatorBindings,

    bounds: Rect,
    thumb: PressControl,
    track: PressControl,
    up_arrow: Option<PressControl>,
    down_arrow: Option<PressControl>,
    anchors: Anchors,
    geometry: ThumbGeometry,

    drag: Option<Drag>,
    /// Target position computed from the last track press.
    track_scroll_position: Option<f32>,
    /// Pointer that initiated a track-triggered drag.
    track_drag_pointer: Option<PointerId>,

    target: Option<ScrollTarget>,
    sounds: Option<Box<dyn SoundDispatcher>>,
    notifications: Vec<Notification>,
    initialized: bool,
}

impl ScrollBar {
    /// Create a scrollbar with a generated name and both arrows.
    pub fn new() -> Self {
        Self::with_name(generate_auto_name())
    }

    /// Create a scrollbar with a caller-chosen name.
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: ScrollState::new(),
            config: ScrollBarConfig::default(),
            bindings: IndicatorBindings::default(),
            bounds: Rect::default(),
            thumb: PressControl::new(ControlId::Thumb),
            track: PressControl::new(ControlId::Track),
            up_arrow: Some(PressControl::new(ControlId::UpArrow)),
            down_arrow: Some(PressControl::new(ControlId::DownArrow)),
            anchors: Anchors::new(),
            geometry: ThumbGeometry::default(),
            drag: None,
            track_scroll_position: None,
            track_drag_pointer: None,
            target: None,
            sounds: None,
            notifications: Vec::new(),
            initialized: false,
        }
    }

    /// Drop the increment/decrement arrows.
    pub fn without_arrows(mut self) -> Self {
        self.up_arrow = None;
        self.down_arrow = None;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The base-binding override table.
    pub fn bindings(&self) -> IndicatorBindings {
        self.bindings
    }

    /// Replace base-provided bindings, e.g. to restore the base
    /// dismiss-on-release behavior `init` unsets.
    pub fn set_bindings(&mut self, bindings: IndicatorBindings) {
        self.bindings = bindings;
    }

    // -------------------------------------------------------------------------
    // Configuration and lifecycle
    // -------------------------------------------------------------------------

    /// Apply a configuration.
    ///
    /// Runtime-effective fields (`track_mode`, `disabled`, `visible`) go
    /// through their setters so collaborator state stays in step when the
    /// widget is initialized.
    pub fn configure(&mut self, config: ScrollBarConfig) {
        let ScrollBarConfig {
            track_mode,
            offset_top,
            offset_bottom,
            track_scroll_page_size,
            disabled,
            visible,
            enable_init_callback,
            sound_map,
        } = config;
        self.config.offset_top = offset_top;
        self.config.offset_bottom = offset_bottom;
        self.config.track_scroll_page_size = track_scroll_page_size;
        self.config.enable_init_callback = enable_init_callback;
        self.config.sound_map = sound_map;
        self.set_track_mode(track_mode);
        self.set_disabled(disabled);
        if self.initialized {
            self.set_visible(visible);
        } else {
            // Show/hide notifications are runtime toggles only.
            self.config.visible = visible;
        }
        self.refresh();
    }

    /// Wire collaborators and lay them out within `bounds`. Runs exactly
    /// once per widget.
    pub fn init(&mut self, bounds: Rect) -> Result<(), ScrollBarError> {
        if self.initialized {
            return Err(ScrollBarError::AlreadyInitialized(self.name.clone()));
        }
        if !bounds.is_finite() {
            return Err(ScrollBarError::InvalidBounds(self.name.clone()));
        }
        self.bounds = bounds;
        self.layout_controls();

        // The scrollbar manages its own drag lifecycle; unset the base
        // dismiss-on-release binding.
        self.bindings.dismiss_on_release = false;

        // Arrows repeat for as long as they are held; the track repeats
        // only in ScrollPage mode.
        if let Some(up) = &mut self.up_arrow {
            up.set_auto_repeat(true);
        }
        if let Some(down) = &mut self.down_arrow {
            down.set_auto_repeat(true);
        }
        self.track
            .set_auto_repeat(self.config.track_mode == TrackMode::ScrollPage);

        if let Some(up) = &self.up_arrow {
            self.anchors
                .register(ControlId::UpArrow, AnchorEdges::TOP, up.rect, bounds);
        }
        if let Some(down) = &self.down_arrow {
            self.anchors
                .register(ControlId::DownArrow, AnchorEdges::BOTTOM, down.rect, bounds);
        }
        self.anchors
            .register(ControlId::Track, AnchorEdges::TOP_BOTTOM, self.track.rect, bounds);

        self.initialized = true;
        self.apply_target_bounds();
        self.refresh();
        log::debug!(
            "[scrollbar] {} initialized ({}x{})",
            self.name,
            bounds.width,
            bounds.height
        );

        if self.config.enable_init_callback {
            self.emit(Notification::Init {
                target: self.name.clone(),
            });
        }
        Ok(())
    }

    /// Layout pass: re-apply anchors for the new bounds, apply any
    /// text-like target override, then recompute thumb geometry.
    ///
    /// Before `init` this defers (no-op); it is re-attempted on the next
    /// pass rather than operating on unready collaborators.
    pub fn layout(&mut self, bounds: Rect) {
        if !self.initialized {
            log::trace!("[scrollbar] {} layout before init, deferred", self.name);
            return;
        }
        if !bounds.is_finite() {
            return;
        }
        self.bounds = bounds;
        self.sync_control_widths();
        if let Some(up) = &mut self.up_arrow {
            self.anchors.apply(ControlId::UpArrow, &mut up.rect, bounds);
        }
        if let Some(down) = &mut self.down_arrow {
            self.anchors.apply(ControlId::DownArrow, &mut down.rect, bounds);
        }
        self.anchors.apply(ControlId::Track, &mut self.track.rect, bounds);
        self.apply_target_bounds();
        self.refresh();
    }

    /// Re-run the current layout, picking up state or target changes.
    pub fn relayout(&mut self) {
        let bounds = self.bounds;
        self.layout(bounds);
    }

    fn layout_controls(&mut self) {
        // Arrows are square (bounds.width tall), pinned to the ends; the
        // track fills the span between them.
        let w = self.bounds.width;
        let mut top = 0.0;
        let mut bottom = 0.0;
        if let Some(up) = &mut self.up_arrow {
            up.rect = Rect::new(self.bounds.x, self.bounds.y, w, w);
            top = w;
        }
        if let Some(down) = &mut self.down_arrow {
            down.rect = Rect::new(self.bounds.x, self.bounds.bottom() - w, w, w);
            bottom = w;
        }
        self.track.rect = Rect::new(
            self.bounds.x,
            self.bounds.y + top,
            w,
            (self.bounds.height - top - bottom).max(0.0),
        );
        self.thumb.rect.x = self.bounds.x;
        self.thumb.rect.width = w;
    }

    fn sync_control_widths(&mut self) {
        let x = self.bounds.x;
        let w = self.bounds.width;
        for control in [&mut self.thumb, &mut self.track]
            .into_iter()
            .chain(self.up_arrow.as_mut())
            .chain(self.down_arrow.as_mut())
        {
            control.rect.x = x;
            control.rect.width = w;
        }
    }

    // -------------------------------------------------------------------------
    // Public contract: accessors and setters
    // -------------------------------------------------------------------------

    pub fn position(&self) -> f32 {
        self.state.position()
    }

    /// Commit a position change.
    ///
    /// Rounds the input to a whole number and no-ops when the committed
    /// value is unchanged (no notification). Otherwise commits to the
    /// scroll state, re-derives geometry and control enablement, pushes
    /// the bound scroll target, then emits `Notification::Scroll`.
    pub fn set_position(&mut self, value: f32) {
        if !self.state.set_position(value) {
            return;
        }
        let position = self.state.position();
        self.refresh();
        self.sync_target();
        self.emit(Notification::Scroll {
            target: self.name.clone(),
            position,
        });
    }

    pub fn disabled(&self) -> bool {
        self.config.disabled
    }

    /// Enable or disable the widget.
    ///
    /// No-ops when unchanged. When initialized, disables the arrows and
    /// the track; the thumb disables implicitly through the shared flag.
    /// An active drag keeps running: only a release ends it.
    pub fn set_disabled(&mut self, disabled: bool) {
        if self.config.disabled == disabled {
            return;
        }
        self.config.disabled = disabled;
        log::debug!("[scrollbar] {} disabled = {}", self.name, disabled);
        if self.initialized {
            self.apply_enablement();
        }
    }

    pub fn track_mode(&self) -> TrackMode {
        self.config.track_mode
    }

    /// Switch the track press behavior. No-ops when unchanged; when
    /// initialized, the track auto-repeats exactly in `ScrollPage` mode.
    pub fn set_track_mode(&mut self, mode: TrackMode) {
        if self.config.track_mode == mode {
            return;
        }
        self.config.track_mode = mode;
        if self.initialized {
            self.track.set_auto_repeat(mode == TrackMode::ScrollPage);
        }
    }

    pub fn visible(&self) -> bool {
        self.config.visible
    }

    /// Toggle visibility at runtime, emitting `Show`/`Hide`.
    pub fn set_visible(&mut self, visible: bool) {
        if self.config.visible == visible {
            return;
        }
        self.config.visible = visible;
        let target = self.name.clone();
        self.emit(if visible {
            Notification::Show { target }
        } else {
            Notification::Hide { target }
        });
    }

    /// Travel range of the thumb's leading edge:
    /// `track.height - thumb.height + offset_bottom + offset_top`.
    pub fn available_height(&self) -> f32 {
        self.track.height() - self.thumb.height() + self.config.offset_bottom
            + self.config.offset_top
    }

    pub fn state(&self) -> &ScrollState {
        &self.state
    }

    /// Thumb geometry computed for the current layout and state.
    pub fn geometry(&self) -> ThumbGeometry {
        self.geometry
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn thumb(&self) -> &PressControl {
        &self.thumb
    }

    pub fn track(&self) -> &PressControl {
        &self.track
    }

    pub fn up_arrow(&self) -> Option<&PressControl> {
        self.up_arrow.as_ref()
    }

    pub fn down_arrow(&self) -> Option<&PressControl> {
        self.down_arrow.as_ref()
    }

    /// True while a thumb drag is active.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    // -------------------------------------------------------------------------
    // Scroll operations
    // -------------------------------------------------------------------------

    /// Step up by one `page_scroll_size` unit.
    pub fn scroll_up(&mut self) {
        self.set_position(self.state.position() - self.state.page_scroll_size());
    }

    /// Step down by one `page_scroll_size` unit.
    pub fn scroll_down(&mut self) {
        self.set_position(self.state.position() + self.state.page_scroll_size());
    }

    /// Scroll by a relative amount.
    pub fn scroll_by(&mut self, delta: f32) {
        self.set_position(self.state.position() + delta);
    }

    /// Scroll to an absolute position.
    pub fn scroll_to(&mut self, position: f32) {
        self.set_position(position);
    }

    /// Configure page size and bounds in one step. The position is
    /// re-clamped silently; no notification is emitted.
    pub fn set_scroll_properties(&mut self, page_size: f32, min: f32, max: f32) {
        self.state.set_scroll_properties(page_size, min, max);
        self.refresh();
    }

    /// Set the amount scrolled per arrow click or wheel tick.
    pub fn set_page_scroll_size(&mut self, amount: f32) {
        self.state.set_page_scroll_size(amount);
    }

    // -------------------------------------------------------------------------
    // Target binding and sounds
    // -------------------------------------------------------------------------

    /// Bind a content view. Text-like targets drive the bounds from their
    /// own readouts starting with the next layout pass.
    pub fn set_scroll_target(&mut self, target: ScrollTarget) {
        self.target = Some(target);
        if self.initialized {
            self.apply_target_bounds();
            self.refresh();
        }
    }

    /// Unbind the content view.
    pub fn clear_scroll_target(&mut self) {
        self.target = None;
    }

    /// Install the external sound dispatcher for the configured sound map.
    pub fn set_sound_dispatcher(&mut self, sounds: Box<dyn SoundDispatcher>) {
        self.sounds = Some(sounds);
    }

    /// Drain the notifications emitted since the last call.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    fn apply_target_bounds(&mut self) {
        let Some(bounds) = self.target.as_ref().and_then(ScrollTarget::derived_bounds) else {
            return;
        };
        self.state
            .set_scroll_properties(bounds.page_size, bounds.min_position, bounds.max_position);
        self.state.set_page_scroll_size(bounds.page_scroll_size);
    }

    fn sync_target(&mut self) {
        if self.config.disabled {
            return;
        }
        if let Some(target) = &mut self.target {
            target.push(self.state.position());
        }
    }

    fn emit(&mut self, notification: Notification) {
        if let Some(process_id) = self.config.sound_map.get(notification.name()) {
            if let Some(sounds) = &mut self.sounds {
                sounds.play(process_id);
            }
        }
        self.notifications.push(notification);
    }

    // -------------------------------------------------------------------------
    // Geometry refresh
    // -------------------------------------------------------------------------

    fn track_metrics(&self) -> TrackMetrics {
        TrackMetrics::from_track(
            self.track.rect,
            self.config.offset_top,
            self.config.offset_bottom,
        )
    }

    /// Re-derive thumb geometry and control enablement from the current
    /// state. Defers until the widget is initialized.
    fn refresh(&mut self) {
        if !self.initialized {
            return;
        }
        self.geometry = geometry::compute_thumb(self.track_metrics(), &self.state);
        self.thumb.rect.y = self.geometry.thumb_offset;
        self.thumb.rect.height = self.geometry.thumb_length;
        self.apply_enablement();
    }

    fn apply_enablement(&mut self) {
        let hidden = !self.geometry.visible;
        let disabled = self.config.disabled;
        if let Some(up) = &mut self.up_arrow {
            up.set_disabled(disabled || hidden || self.state.at_min());
        }
        if let Some(down) = &mut self.down_arrow {
            down.set_disabled(disabled || hidden || self.state.at_max());
        }
        self.track.set_disabled(disabled || hidden);
    }

    // -------------------------------------------------------------------------
    // Input dispatch
    // -------------------------------------------------------------------------

    /// Route a pointer event through the interaction state machines.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> EventResult {
        if !self.initialized {
            return EventResult::Ignored;
        }
        match event {
            PointerEvent::Press {
                pointer,
                x,
                y,
                modifiers,
            } => self.handle_press(pointer, x, y, modifiers),
            PointerEvent::Move { pointer, y, .. } => self.handle_move(pointer, y),
            PointerEvent::Release { pointer, .. } => self.handle_release(pointer),
            PointerEvent::Wheel { delta } => self.handle_wheel(delta),
        }
    }

    /// Handle a key while the widget has focus.
    pub fn handle_key(&mut self, key: Key) -> EventResult {
        if self.config.disabled {
            return EventResult::Ignored;
        }
        match key {
            Key::Up => self.scroll_up(),
            Key::Down => self.scroll_down(),
            Key::PageUp => self.scroll_by(-self.state.page_size()),
            Key::PageDown => self.scroll_by(self.state.page_size()),
            Key::Home => self.scroll_to(self.state.min_position()),
            Key::End => self.scroll_to(self.state.max_position()),
        }
        EventResult::Consumed
    }

    /// One auto-repeat beat.
    ///
    /// The host calls this at its repeat cadence while a pointer is held;
    /// held arrows step once per beat, and a held track in `ScrollPage`
    /// mode pages toward the press target.
    pub fn tick(&mut self) {
        if !self.initialized {
            return;
        }
        if self.up_arrow.as_ref().is_some_and(PressControl::repeat) {
            self.scroll_up();
        }
        if self.down_arrow.as_ref().is_some_and(PressControl::repeat) {
            self.scroll_down();
        }
        if self.track.repeat() {
            self.track_click_step();
        }
    }

    fn handle_press(&mut self, pointer: PointerId, x: f32, y: f32, modifiers: Modifiers) -> EventResult {
        if !self.config.visible || self.config.disabled {
            return EventResult::Ignored;
        }
        // The thumb sits on top of the track.
        if self.geometry.visible && self.thumb.hit(x, y) {
            return if self.thumb.press(pointer) {
                self.begin_drag(pointer, y - self.thumb.y(), false);
                EventResult::StartDrag
            } else {
                EventResult::Consumed
            };
        }
        if let Some(result) = self.handle_arrow_press(pointer, x, y) {
            return result;
        }
        if self.track.hit(x, y) {
            return self.handle_track_press(pointer, y, modifiers);
        }
        EventResult::Ignored
    }

    fn handle_arrow_press(&mut self, pointer: PointerId, x: f32, y: f32) -> Option<EventResult> {
        if self.up_arrow.as_ref().is_some_and(|a| a.hit(x, y)) {
            let pressed = self
                .up_arrow
                .as_mut()
                .map(|a| a.press(pointer))
                .unwrap_or(false);
            if pressed {
                // Click fires on press; later beats come from tick().
                log::trace!(
                    "[scrollbar] {} {} pressed",
                    self.name,
                    ControlId::UpArrow.name()
                );
                self.scroll_up();
            }
            return Some(EventResult::Consumed);
        }
        if self.down_arrow.as_ref().is_some_and(|a| a.hit(x, y)) {
            let pressed = self
                .down_arrow
                .as_mut()
                .map(|a| a.press(pointer))
                .unwrap_or(false);
            if pressed {
                log::trace!(
                    "[scrollbar] {} {} pressed",
                    self.name,
                    ControlId::DownArrow.name()
                );
                self.scroll_down();
            }
            return Some(EventResult::Consumed);
        }
        None
    }

    fn handle_track_press(&mut self, pointer: PointerId, y: f32, modifiers: Modifiers) -> EventResult {
        if !self.track.press(pointer) {
            return EventResult::Ignored;
        }
        log::trace!(
            "[scrollbar] {} {} pressed",
            self.name,
            self.track.id().name()
        );
        let target = geometry::track_target(self.track_metrics(), self.geometry, &self.state, y);
        self.track_scroll_position = Some(target);

        if modifiers.shift || self.config.track_mode == TrackMode::ScrollToCursor {
            // Jump to the cursor and hand the thumb to the drag machine
            // without waiting for a release/re-press.
            self.set_position(target);
            self.track_drag_pointer = Some(pointer);
            self.thumb.press(pointer);
            self.begin_drag(pointer, self.geometry.thumb_length / 2.0, true);
            log::debug!("[scrollbar] {} track jump to {}", self.name, target);
            return EventResult::StartDrag;
        }

        // ScrollPage: first step now, repeat beats follow while held.
        self.track_click_step();
        EventResult::Consumed
    }

    /// One `ScrollPage` step toward the press target, never overshooting.
    fn track_click_step(&mut self) {
        if self.drag.is_some() {
            return;
        }
        let Some(target) = self.track_scroll_position else {
            return;
        };
        let position = self.state.position();
        if position == target {
            return;
        }
        let step = self.config.track_scroll_page_size;
        self.set_position(geometry::step_toward(position, target, step));
    }

    fn handle_move(&mut self, pointer: PointerId, y: f32) -> EventResult {
        // Move routing exists only while the drag subscription does.
        let Some(drag) = self.drag else {
            return EventResult::Ignored;
        };
        if drag.pointer != pointer {
            return EventResult::Ignored;
        }
        let position = geometry::drag_position(
            self.track_metrics(),
            self.geometry,
            &self.state,
            y,
            drag.axis_offset,
        );
        self.set_position(position);
        EventResult::Consumed
    }

    fn handle_release(&mut self, pointer: PointerId) -> EventResult {
        if self.bindings.dismiss_on_release {
            // Base-indicator default: any release clears everything.
            let was_active = self.drag.is_some() || self.any_pressed();
            self.end_drag();
            self.release_controls();
            return if was_active {
                EventResult::Consumed
            } else {
                EventResult::Ignored
            };
        }

        if let Some(drag) = self.drag {
            if drag.pointer != pointer {
                return EventResult::Ignored;
            }
            self.end_drag();
            return EventResult::Consumed;
        }

        // Click completion for the arrows and the track.
        let mut handled = false;
        if let Some(up) = &mut self.up_arrow {
            handled |= up.release_by(pointer);
        }
        if let Some(down) = &mut self.down_arrow {
            handled |= down.release_by(pointer);
        }
        if self.track.release_by(pointer) {
            handled = true;
            self.track_scroll_position = None;
        }
        if handled {
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }

    fn handle_wheel(&mut self, delta: f32) -> EventResult {
        if self.config.disabled {
            return EventResult::Ignored;
        }
        let before = self.state.position();
        self.set_position(before - delta * self.state.page_scroll_size());
        if self.state.position() != before {
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }

    // -------------------------------------------------------------------------
    // Drag state machine
    // -------------------------------------------------------------------------

    /// Idle -> Dragging. A second call while dragging is a no-op.
    fn begin_drag(&mut self, pointer: PointerId, axis_offset: f32, from_track: bool) {
        if self.drag.is_some() {
            return;
        }
        self.drag = Some(Drag {
            pointer,
            axis_offset,
            from_track,
        });
        log::trace!(
            "[scrollbar] {} drag begins (offset {})",
            self.name,
            axis_offset
        );
    }

    /// Dragging -> Idle. Always clears transient bookkeeping, even when
    /// already Idle.
    fn end_drag(&mut self) {
        if let Some(drag) = self.drag.take() {
            // Complete the thumb's press/release pair; for a track-initiated
            // drag the pair was synthesized on the capturing pointer.
            self.thumb.release();
            if drag.from_track && self.track_drag_pointer == Some(drag.pointer) {
                self.track.release();
            }
            log::trace!("[scrollbar] {} drag ends", self.name);
        }
        self.track_drag_pointer = None;
        self.track_scroll_position = None;
    }

    fn release_controls(&mut self) {
        self.thumb.release();
        self.track.release();
        if let Some(up) = &mut self.up_arrow {
            up.release();
        }
        if let Some(down) = &mut self.down_arrow {
            down.release();
        }
        self.track_scroll_position = None;
        self.track_drag_pointer = None;
    }

    fn any_pressed(&self) -> bool {
        self.thumb.is_pressed()
            || self.track.is_pressed()
            || self.up_arrow.as_ref().is_some_and(PressControl::is_pressed)
            || self.down_arrow.as_ref().is_some_and(PressControl::is_pressed)
    }
}

impl Default for ScrollBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Indicator for ScrollBar {
    fn position(&self) -> f32 {
        self.state.position()
    }

    fn set_position(&mut self, value: f32) {
        ScrollBar::set_position(self, value);
    }

    fn disabled(&self) -> bool {
        self.config.disabled
    }

    fn set_disabled(&mut self, disabled: bool) {
        ScrollBar::set_disabled(self, disabled);
    }

    fn notify(&mut self, notification: Notification) {
        self.emit(notification);
    }
}

impl fmt::Debug for ScrollBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollBar")
            .field("name", &self.name)
            .field("state", &self.state)
            .field("geometry", &self.geometry)
            .field("drag", &self.drag)
            .field("initialized", &self.initialized)
            .finish_non_exhaustive()
    }
}
