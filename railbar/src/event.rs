//! Input and notification types.
//!
//! This module defines:
//! - `PointerEvent`: pointer input the host routes into the widget
//! - `Modifiers` and `Key`: keyboard state, with crossterm conversions
//! - `EventResult`: outcome of dispatching an event to the widget
//! - `Notification`: events the widget emits to its listeners

use crossterm::event::{KeyCode, KeyModifiers};

/// Identifies which pointer (mouse or controller index) produced an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PointerId(pub u8);

/// Key modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Default::default()
        }
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Default::default()
        }
    }

    pub fn alt() -> Self {
        Self {
            alt: true,
            ..Default::default()
        }
    }

    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}

impl From<KeyModifiers> for Modifiers {
    fn from(mods: KeyModifiers) -> Self {
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

/// Keys the scrollbar responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    PageUp,
    PageDown,
    Home,
    End,
}

impl Key {
    /// Convert a crossterm key code, if the scrollbar handles it.
    pub fn from_code(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::Up => Some(Key::Up),
            KeyCode::Down => Some(Key::Down),
            KeyCode::PageUp => Some(Key::PageUp),
            KeyCode::PageDown => Some(Key::PageDown),
            KeyCode::Home => Some(Key::Home),
            KeyCode::End => Some(Key::End),
            _ => None,
        }
    }
}

/// Pointer input in the widget's pixel coordinate space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Button press.
    Press {
        pointer: PointerId,
        x: f32,
        y: f32,
        modifiers: Modifiers,
    },
    /// Pointer motion.
    Move { pointer: PointerId, x: f32, y: f32 },
    /// Button release, inside or outside the widget.
    Release { pointer: PointerId, x: f32, y: f32 },
    /// Wheel tick; a positive delta scrolls up.
    Wheel { delta: f32 },
}

/// Result of handling an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
    /// Event started a drag operation on this widget.
    StartDrag,
}

impl EventResult {
    /// Check if the event was handled (consumed or started drag).
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }
}

/// Notifications emitted to external listeners.
///
/// Every notification carries the emitting widget's name as `target`.
#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    /// A position change was committed; queued after the scroll target
    /// was pushed for the same change.
    Scroll { target: String, position: f32 },
    /// The widget became visible at runtime.
    Show { target: String },
    /// The widget was hidden at runtime.
    Hide { target: String },
    /// Configuration completed (when the init callback is enabled).
    Init { target: String },
}

impl Notification {
    /// Notification name, also the key looked up in the sound map.
    pub fn name(&self) -> &'static str {
        match self {
            Notification::Scroll { .. } => "scroll",
            Notification::Show { .. } => "show",
            Notification::Hide { .. } => "hide",
            Notification::Init { .. } => "init",
        }
    }

    /// Name of the widget that emitted this notification.
    pub fn target(&self) -> &str {
        match self {
            Notification::Scroll { target, .. }
            | Notification::Show { target }
            | Notification::Hide { target }
            | Notification::Init { target } => target,
        }
    }
}
