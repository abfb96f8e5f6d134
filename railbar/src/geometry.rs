//! Thumb geometry: pure mappings from scroll state to pixel placement.
//!
//! This module provides:
//! - `Rect`: pixel rectangle used for controls and hit testing
//! - `TrackMetrics`: the padded span the thumb travels in
//! - `ThumbGeometry`: computed thumb size, offset, and visibility
//! - the drag/track position math shared by the interaction state machines

use crate::state::ScrollState;

/// Minimum thumb length in pixels.
pub const MIN_THUMB_LENGTH: f32 = 10.0;

/// A pixel rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// True when all four fields are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }
}

/// The span the thumb travels in: the track control's extent plus the
/// configured top/bottom offsets.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrackMetrics {
    /// Leading edge of the padded track.
    pub start: f32,
    /// Padded track length.
    pub length: f32,
}

impl TrackMetrics {
    pub fn new(start: f32, length: f32) -> Self {
        Self { start, length }
    }

    /// Derive the padded span from the track control's rect and offsets.
    pub fn from_track(track: Rect, offset_top: f32, offset_bottom: f32) -> Self {
        Self {
            start: track.y - offset_top,
            length: track.height + offset_top + offset_bottom,
        }
    }
}

/// Computed thumb placement for one layout/state snapshot.
///
/// When `visible` is false the range is degenerate: the host hides the
/// thumb and the widget disables the track and both arrows.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ThumbGeometry {
    pub visible: bool,
    /// Thumb length, within `[MIN_THUMB_LENGTH, track length]`.
    pub thumb_length: f32,
    /// Travel range of the thumb's leading edge.
    pub available_length: f32,
    /// Absolute position of the thumb's leading edge.
    pub thumb_offset: f32,
}

/// Map scroll state onto the padded track.
///
/// Idempotent, and total over degenerate states: a NaN position percent,
/// a non-positive maximum, or an unbounded maximum all yield a hidden
/// thumb parked at the track start.
pub fn compute_thumb(track: TrackMetrics, state: &ScrollState) -> ThumbGeometry {
    let range = state.range();
    let denom = (range + state.page_size()).max(1.0);
    // Minimum first, track-length cap second: a track shorter than the
    // minimum yields a full-length thumb instead of an inverted clamp.
    let thumb_length = (state.page_size() / denom * track.length)
        .max(MIN_THUMB_LENGTH)
        .min(track.length);
    let available_length = track.length - thumb_length;

    let percent = (state.position() - state.min_position()) / range;
    if percent.is_nan() || state.max_position() <= 0.0 || state.max_position().is_infinite() {
        return ThumbGeometry {
            visible: false,
            thumb_length,
            available_length,
            thumb_offset: track.start,
        };
    }

    let thumb_offset = (track.start + percent * available_length)
        .clamp(track.start, track.start + available_length);
    ThumbGeometry {
        visible: true,
        thumb_length,
        available_length,
        thumb_offset,
    }
}

/// Position corresponding to a pointer during a thumb drag.
///
/// `axis_offset` is where within the thumb the pointer grabbed it,
/// captured at press time. The caller commits the result through the
/// position setter, which clamps it.
pub fn drag_position(
    track: TrackMetrics,
    geometry: ThumbGeometry,
    state: &ScrollState,
    pointer_y: f32,
    axis_offset: f32,
) -> f32 {
    if geometry.available_length <= 0.0 {
        return state.min_position();
    }
    let percent = (pointer_y - axis_offset - track.start) / geometry.available_length;
    (state.min_position() + percent * state.range()).round()
}

/// Target position for a track press, centering the thumb on the pointer.
pub fn track_target(
    track: TrackMetrics,
    geometry: ThumbGeometry,
    state: &ScrollState,
    pointer_y: f32,
) -> f32 {
    if geometry.available_length <= 0.0 {
        return state.min_position();
    }
    let percent =
        (pointer_y - geometry.thumb_length / 2.0 - track.start) / geometry.available_length;
    (state.min_position() + percent * state.range()).round()
}

/// Step `position` toward `target` by `step`, never overshooting.
pub fn step_toward(position: f32, target: f32, step: f32) -> f32 {
    if position < target {
        (position + step).min(target)
    } else {
        (position - step).max(target)
    }
}
