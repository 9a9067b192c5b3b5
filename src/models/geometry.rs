//! Screen-space geometry types for panel layout.

use crate::constants::{KEY_MARGIN, KEY_PADDING};
use crate::models::Key;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in panel pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Horizontal extent
    pub width: f32,
    /// Vertical extent
    pub height: f32,
}

impl Rect {
    /// Creates a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (exclusive).
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge (exclusive).
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Point containment test.
    ///
    /// Half-open on both axes: the left and top edges are inside, the
    /// right and bottom edges are outside. Adjacent rectangles therefore
    /// never both claim a point.
    #[must_use]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Center point, used for label placement.
    #[must_use]
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// A key paired with its absolute on-screen rectangle.
///
/// Derived from a layer and the current panel size; recomputed on every
/// size or layer change and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyBounds {
    /// The key occupying this rectangle
    pub key: Key,
    /// Absolute rectangle in panel coordinates
    pub rect: Rect,
}

/// Pixel geometry of one panel for a single render pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelGeometry {
    /// X coordinate of the panel's left edge
    pub origin_x: f32,
    /// Panel width in pixels
    pub width: f32,
    /// Panel height in pixels
    pub height: f32,
    /// Gap between keys and rows
    pub margin: f32,
    /// Inset applied to every key rectangle
    pub padding: f32,
}

impl PanelGeometry {
    /// Creates a panel geometry with the standard margin and padding.
    #[must_use]
    pub const fn new(origin_x: f32, width: f32, height: f32) -> Self {
        Self {
            origin_x,
            width,
            height,
            margin: KEY_MARGIN,
            padding: KEY_PADDING,
        }
    }

    /// Overrides the margin constant.
    #[must_use]
    pub const fn with_margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    /// Overrides the padding constant.
    #[must_use]
    pub const fn with_padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }
}
