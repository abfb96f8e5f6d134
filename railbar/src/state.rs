//! Numeric scroll state and the indicator capability.
//!
//! This module provides:
//! - `ScrollState`: clamped scroll parameters shared with the indicator
//!   abstraction
//! - `Indicator`: the capability set a scroll indicator exposes
//! - `IndicatorBindings`: explicit override table for base-provided
//!   default event bindings

use crate::event::Notification;

/// Clamped numeric scroll parameters.
///
/// `position` always satisfies `min_position <= position <= max_position`
/// after any mutation, and is rounded to a whole number before commit.
/// `max_position` may be `f32::INFINITY` for an unbounded range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollState {
    position: f32,
    min_position: f32,
    max_position: f32,
    page_size: f32,
    page_scroll_size: f32,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            position: 0.0,
            min_position: 0.0,
            max_position: 0.0,
            page_size: 0.0,
            page_scroll_size: 1.0,
        }
    }
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn min_position(&self) -> f32 {
        self.min_position
    }

    pub fn max_position(&self) -> f32 {
        self.max_position
    }

    /// Visible-to-total ratio unit; drives the thumb length.
    pub fn page_size(&self) -> f32 {
        self.page_size
    }

    /// Amount scrolled per arrow click or wheel tick.
    pub fn page_scroll_size(&self) -> f32 {
        self.page_scroll_size
    }

    /// Total scrollable range (`max_position - min_position`).
    pub fn range(&self) -> f32 {
        self.max_position - self.min_position
    }

    pub fn at_min(&self) -> bool {
        self.position <= self.min_position
    }

    pub fn at_max(&self) -> bool {
        self.position >= self.max_position
    }

    /// Commit a new position.
    ///
    /// The value is rounded to a whole number and clamped to
    /// `[min_position, max_position]`; out-of-range requests are corrected,
    /// not reported. Non-finite requests are ignored. Returns true when the
    /// committed value differs from the previous one.
    pub fn set_position(&mut self, value: f32) -> bool {
        if !value.is_finite() {
            return false;
        }
        let value = value.round().clamp(self.min_position, self.max_position);
        if value == self.position {
            return false;
        }
        self.position = value;
        true
    }

    /// Set the scrollable range, re-clamping the position.
    ///
    /// A maximum below the minimum is corrected to the minimum. Non-finite
    /// minimums and NaN bounds are ignored.
    pub fn set_range(&mut self, min: f32, max: f32) {
        if !min.is_finite() || max.is_nan() {
            return;
        }
        self.min_position = min;
        self.max_position = max.max(min);
        self.reclamp();
    }

    pub fn set_page_size(&mut self, page_size: f32) {
        if page_size.is_nan() {
            return;
        }
        self.page_size = page_size.max(0.0);
    }

    pub fn set_page_scroll_size(&mut self, amount: f32) {
        if amount.is_nan() {
            return;
        }
        self.page_scroll_size = amount;
    }

    /// Configure page size and bounds in one step, re-clamping the position.
    pub fn set_scroll_properties(&mut self, page_size: f32, min: f32, max: f32) {
        self.set_page_size(page_size);
        self.set_range(min, max);
    }

    fn reclamp(&mut self) {
        self.position = self
            .position
            .clamp(self.min_position, self.max_position)
            .round();
    }
}

/// Capability set a scroll indicator exposes to its collaborators.
///
/// The scrollbar implements this over a shared [`ScrollState`] instead of
/// extending a concrete indicator base type.
pub trait Indicator {
    fn position(&self) -> f32;
    fn set_position(&mut self, value: f32);
    fn disabled(&self) -> bool;
    fn set_disabled(&mut self, disabled: bool);
    /// Emit a notification to this indicator's listeners.
    fn notify(&mut self, notification: Notification);
}

/// Default event bindings provided by the indicator base.
///
/// Configuration replaces entries explicitly instead of deleting handlers
/// at runtime: the scrollbar unsets `dismiss_on_release` during `init`
/// because it manages the drag lifecycle itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorBindings {
    /// Force-clear every pressed control and any drag on pointer release.
    pub dismiss_on_release: bool,
}

impl Default for IndicatorBindings {
    fn default() -> Self {
        Self {
            dismiss_on_release: true,
        }
    }
}
