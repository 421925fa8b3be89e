//! Item geometry.
//!
//! An item is anchored at the top-left corner of its icon glyph.  The label
//! sits below the glyph in a column three icons wide, centred on the glyph,
//! with room for [`LayoutConfig::label_lines`] lines of text:
//!
//! ```text
//!   anchor
//!     v
//!     +------+
//!     | icon |
//! +---+------+---+
//! |  label text  |
//! |  (up to 3    |
//! |   lines)     |
//! +--------------+
//! ```
//!
//! The same rectangles are used to paint and to hit-test, so a click always
//! lands on what the user sees.

use crate::geometry::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Sizes that determine an item's footprint on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Side of the square icon glyph in pixels.  Default: `32.0`.
    pub icon_size: f64,
    /// Label font size (height of one text line) in pixels.  Default: `11.0`.
    pub font_size: f64,
    /// Number of label lines reserved below the glyph.  Default: `3`.
    pub label_lines: u32,
    /// Anchor used when an item is added without a position.
    /// Default: `(20, 20)`.
    pub default_placement: Point,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            icon_size: 32.0,
            font_size: 11.0,
            label_lines: 3,
            default_placement: Point::new(20.0, 20.0),
        }
    }
}

impl LayoutConfig {
    fn label_height(&self) -> f64 {
        self.font_size * f64::from(self.label_lines)
    }

    /// Rectangle enclosing both the glyph and the label of an item anchored
    /// at `top_left`.
    pub fn layout_bounding_box(&self, top_left: Point) -> Rect {
        Rect::new(
            top_left.x - self.icon_size,
            top_left.y,
            self.icon_size * 3.0,
            self.icon_size + self.label_height(),
        )
    }

    /// The glyph square.
    pub fn icon_rect(&self, top_left: Point) -> Rect {
        Rect::new(top_left.x, top_left.y, self.icon_size, self.icon_size)
    }

    /// The label area below the glyph.
    pub fn label_rect(&self, top_left: Point) -> Rect {
        Rect::new(
            top_left.x - self.icon_size,
            top_left.y + self.icon_size,
            self.icon_size * 3.0,
            self.label_height(),
        )
    }

    pub fn default_placement(&self) -> Point {
        self.default_placement
    }
}
