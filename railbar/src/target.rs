//! Scroll-target binding: one-way synchronization to a content view.

use std::fmt;

/// A content view with a writable scroll position.
pub trait ScrollView {
    /// Push a committed scroll position into the view.
    fn set_scroll(&mut self, position: f32);
}

/// A text-like view whose own readouts drive the scrollbar's bounds.
///
/// Text scroll readouts are 1-based: `scroll` is the index of the first
/// visible line, starting at 1.
pub trait TextView: ScrollView {
    /// Index of the first visible line.
    fn scroll(&self) -> f32;
    /// Index one past the last visible line.
    fn bottom_scroll(&self) -> f32;
    /// Largest value `scroll` can take.
    fn max_scroll(&self) -> f32;
}

/// The bound scroll target, tagged at bind time.
pub enum ScrollTarget {
    /// Plain view: positions are pushed, nothing is read back.
    Generic(Box<dyn ScrollView>),
    /// Text-like view: bounds and page size are derived from its readouts
    /// each layout pass, overriding externally configured bounds.
    TextLike(Box<dyn TextView>),
}

/// Bounds derived from a text-like target's readouts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedBounds {
    pub page_size: f32,
    pub page_scroll_size: f32,
    pub min_position: f32,
    pub max_position: f32,
}

impl ScrollTarget {
    /// Push a committed position into the view.
    pub fn push(&mut self, position: f32) {
        match self {
            ScrollTarget::Generic(view) => view.set_scroll(position),
            ScrollTarget::TextLike(view) => view.set_scroll(position),
        }
    }

    /// Bounds override for text-like targets; `None` for generic ones.
    pub fn derived_bounds(&self) -> Option<DerivedBounds> {
        match self {
            ScrollTarget::Generic(_) => None,
            ScrollTarget::TextLike(view) => Some(DerivedBounds {
                page_size: view.bottom_scroll() - view.scroll(),
                page_scroll_size: 1.0,
                min_position: 1.0,
                max_position: view.max_scroll(),
            }),
        }
    }
}

impl fmt::Debug for ScrollTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScrollTarget::Generic(_) => f.write_str("ScrollTarget::Generic"),
            ScrollTarget::TextLike(_) => f.write_str("ScrollTarget::TextLike"),
        }
    }
}
