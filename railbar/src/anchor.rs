//! Resize constraints for the scrollbar's collaborator controls.
//!
//! An anchor entry captures a control's margins relative to the parent at
//! registration time and re-derives its position or size under new parent
//! bounds, once per layout pass. The math runs in the widget's unrotated
//! local space, so it is orientation-independent.

use crate::control::ControlId;
use crate::geometry::Rect;

/// Which parent edges a control is pinned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnchorEdges {
    pub top: bool,
    pub bottom: bool,
}

impl AnchorEdges {
    pub const TOP: Self = Self {
        top: true,
        bottom: false,
    };
    pub const BOTTOM: Self = Self {
        top: false,
        bottom: true,
    };
    pub const TOP_BOTTOM: Self = Self {
        top: true,
        bottom: true,
    };
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct AnchorEntry {
    control: ControlId,
    edges: AnchorEdges,
    /// Distance from the parent's top edge to the control's top.
    top_margin: f32,
    /// Distance from the control's bottom to the parent's bottom edge.
    bottom_margin: f32,
}

/// Registry of anchored controls.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Anchors {
    entries: Vec<AnchorEntry>,
}

impl Anchors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a control, capturing its margins within `parent`.
    /// Re-registering replaces the previous entry.
    pub fn register(&mut self, control: ControlId, edges: AnchorEdges, rect: Rect, parent: Rect) {
        let entry = AnchorEntry {
            control,
            edges,
            top_margin: rect.y - parent.y,
            bottom_margin: parent.bottom() - rect.bottom(),
        };
        if let Some(existing) = self.entries.iter_mut().find(|e| e.control == control) {
            *existing = entry;
        } else {
            self.entries.push(entry);
        }
    }

    /// Re-derive an anchored control's rect for new parent bounds.
    /// Controls without an entry are left untouched.
    pub fn apply(&self, control: ControlId, rect: &mut Rect, parent: Rect) {
        let Some(entry) = self.entries.iter().find(|e| e.control == control) else {
            return;
        };
        match (entry.edges.top, entry.edges.bottom) {
            // Pinned to both edges: keep margins, stretch.
            (true, true) => {
                rect.y = parent.y + entry.top_margin;
                rect.height = (parent.height - entry.top_margin - entry.bottom_margin).max(0.0);
            }
            // Bottom only: ride the bottom edge.
            (false, true) => {
                rect.y = parent.bottom() - entry.bottom_margin - rect.height;
            }
            // Top only: keep the top margin.
            (true, false) => {
                rect.y = parent.y + entry.top_margin;
            }
            // Unpinned: nothing moves.
            (false, false) => {}
        }
    }

    /// Whether `control` has an anchor entry.
    pub fn is_registered(&self, control: ControlId) -> bool {
        self.entries.iter().any(|e| e.control == control)
    }
}
