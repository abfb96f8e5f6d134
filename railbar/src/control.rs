//! Pressable collaborator controls owned by the scrollbar.

use crate::event::PointerId;
use crate::geometry::Rect;

/// Which collaborator a control is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlId {
    Thumb,
    Track,
    UpArrow,
    DownArrow,
}

impl ControlId {
    /// Stable name used for logging and anchoring.
    pub fn name(&self) -> &'static str {
        match self {
            ControlId::Thumb => "thumb",
            ControlId::Track => "track",
            ControlId::UpArrow => "up_arrow",
            ControlId::DownArrow => "down_arrow",
        }
    }
}

/// A pressable control: the thumb, the track, or one of the arrows.
///
/// Controls are exclusively owned and mutated by the scrollbar. A
/// programmatic (synthesized) press goes through the same transitions as
/// a pointer-routed one.
#[derive(Debug, Clone, PartialEq)]
pub struct PressControl {
    id: ControlId,
    /// Placement in the widget's pixel space.
    pub rect: Rect,
    disabled: bool,
    auto_repeat: bool,
    pressed_by: Option<PointerId>,
}

impl PressControl {
    pub fn new(id: ControlId) -> Self {
        Self {
            id,
            rect: Rect::default(),
            disabled: false,
            auto_repeat: false,
            pressed_by: None,
        }
    }

    pub fn id(&self) -> ControlId {
        self.id
    }

    /// Hit-test against global pointer coordinates.
    pub fn hit(&self, x: f32, y: f32) -> bool {
        self.rect.contains(x, y)
    }

    pub fn disabled(&self) -> bool {
        self.disabled
    }

    /// Disabling rejects new presses; it does not release a held one.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    pub fn auto_repeat(&self) -> bool {
        self.auto_repeat
    }

    pub fn set_auto_repeat(&mut self, auto_repeat: bool) {
        self.auto_repeat = auto_repeat;
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed_by.is_some()
    }

    /// Pointer holding this control, if any.
    pub fn pressed_by(&self) -> Option<PointerId> {
        self.pressed_by
    }

    /// Press transition. Returns false when disabled or already pressed.
    pub fn press(&mut self, pointer: PointerId) -> bool {
        if self.disabled || self.pressed_by.is_some() {
            return false;
        }
        self.pressed_by = Some(pointer);
        true
    }

    /// Release transition. Returns true when a press was completed.
    pub fn release(&mut self) -> bool {
        self.pressed_by.take().is_some()
    }

    /// Release only if `pointer` is the one holding the control.
    pub fn release_by(&mut self, pointer: PointerId) -> bool {
        if self.pressed_by == Some(pointer) {
            self.pressed_by = None;
            true
        } else {
            false
        }
    }

    /// One auto-repeat beat: true when a held, repeating control should
    /// fire its click again.
    pub fn repeat(&self) -> bool {
        self.auto_repeat && !self.disabled && self.pressed_by.is_some()
    }

    pub fn height(&self) -> f32 {
        self.rect.height
    }

    /// Vertical position of the control's leading edge.
    pub fn y(&self) -> f32 {
        self.rect.y
    }
}
