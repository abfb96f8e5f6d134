//! A headless vertical scrollbar widget core.
//!
//! `railbar` mediates between pointer/keyboard input and the scroll
//! position of an associated content view. It owns the numeric scroll
//! state, the thumb's size and placement within the track, and the
//! interaction state machines for thumb drags, track presses, and
//! arrow-repeat scrolling. Rendering stays with the host: the widget
//! exposes control rects and thumb geometry, the host draws them and
//! routes input back in as [`PointerEvent`]s.

pub mod anchor;
pub mod control;
pub mod event;
pub mod geometry;
pub mod scrollbar;
pub mod sound;
pub mod state;
pub mod target;

pub use anchor::{AnchorEdges, Anchors};
pub use control::{ControlId, PressControl};
pub use event::{EventResult, Key, Modifiers, Notification, PointerEvent, PointerId};
pub use geometry::{Rect, ThumbGeometry, TrackMetrics, MIN_THUMB_LENGTH};
pub use scrollbar::{ScrollBar, ScrollBarConfig, ScrollBarError, TrackMode};
pub use sound::SoundDispatcher;
pub use state::{Indicator, IndicatorBindings, ScrollState};
pub use target::{DerivedBounds, ScrollTarget, ScrollView, TextView};
