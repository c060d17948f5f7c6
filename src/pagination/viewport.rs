//! Scroll position and bottom-of-document detection

use serde::{Deserialize, Serialize};

/// Default slack, in pixels, when comparing against the document height
pub const DEFAULT_BOTTOM_TOLERANCE: f64 = 1.0;

/// Snapshot of the window's scroll geometry, in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScrollPosition {
    /// Distance scrolled from the top of the document
    pub scroll_top: f64,
    /// Height of the visible viewport
    pub viewport_height: f64,
    /// Full height of the document
    pub document_height: f64,
}

impl ScrollPosition {
    /// Create a scroll position
    pub fn new(scroll_top: f64, viewport_height: f64, document_height: f64) -> Self {
        Self {
            scroll_top,
            viewport_height,
            document_height,
        }
    }

    /// A position scrolled exactly to the end of a document
    pub fn at_bottom_of(document_height: f64, viewport_height: f64) -> Self {
        Self::new(
            (document_height - viewport_height).max(0.0),
            viewport_height,
            document_height,
        )
    }

    /// Whether the viewport's lower edge is within `tolerance` of the document end.
    ///
    /// Fractional scroll offsets on high-density displays rarely land on the
    /// exact document height, so an exact comparison would never fire.
    pub fn is_at_bottom(&self, tolerance: f64) -> bool {
        let tolerance = if tolerance.is_finite() {
            tolerance.max(0.0)
        } else {
            0.0
        };
        self.scroll_top + self.viewport_height >= self.document_height - tolerance
    }

    /// Pixels left to scroll before the bottom
    pub fn remaining(&self) -> f64 {
        (self.document_height - self.scroll_top - self.viewport_height).max(0.0)
    }
}
