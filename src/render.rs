//! Render data handed to whatever paints the view.
//!
//! The view never draws.  It assembles an ordered list of
//! [`RenderRecord`]s; the painter composites them front to back, so every
//! record is drawn on top of the ones before it.

use crate::geometry::{Point, Rect};
use crate::item::IconId;
use crate::layout::LayoutConfig;
use serde::Serialize;

/// Everything needed to paint one icon and its label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemRecord<'a> {
    pub label: &'a str,
    pub position: Point,
    pub bounding_box: Rect,
    /// Where the glyph goes.
    pub icon_rect: Rect,
    /// Where the label text goes; filled with the highlight colour when
    /// `selected` is set.
    pub label_rect: Rect,
    pub selected: bool,
    pub icon: IconId,
}

impl<'a> ItemRecord<'a> {
    pub(crate) fn new(
        label: &'a str,
        position: Point,
        selected: bool,
        icon: IconId,
        layout: &LayoutConfig,
    ) -> Self {
        Self {
            label,
            position,
            bounding_box: layout.layout_bounding_box(position),
            icon_rect: layout.icon_rect(position),
            label_rect: layout.label_rect(position),
            selected,
            icon,
        }
    }
}

/// One paint operation.  Records are ordered items first, then the drag
/// silhouette, then the rubber band.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum RenderRecord<'a> {
    /// A regular item at its committed position.
    Item(ItemRecord<'a>),
    /// The item being dragged, drawn unhighlighted at the pointer.
    Silhouette(ItemRecord<'a>),
    /// The translucent multi-select rectangle.
    SelectRect(Rect),
}

/// Part of the canvas that needs repainting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Damage {
    Full,
    Area(Rect),
}

impl Damage {
    /// Coalesce two requests into one.
    pub fn merge(self, other: Damage) -> Damage {
        match (self, other) {
            (Damage::Area(a), Damage::Area(b)) => Damage::Area(a.union(&b)),
            _ => Damage::Full,
        }
    }
}

/// Break `label` into at most `lines` lines of `per_line` characters.
///
/// Text that does not fit is cut and the last line ends in `…`.
pub fn wrap_label(label: &str, per_line: usize, lines: usize) -> Vec<String> {
    if per_line == 0 || lines == 0 {
        return Vec::new();
    }
    let chars: Vec<char> = label.chars().collect();
    let mut out: Vec<String> = chars
        .chunks(per_line)
        .take(lines)
        .map(|chunk| chunk.iter().collect())
        .collect();
    let truncated = per_line
        .checked_mul(lines)
        .is_some_and(|capacity| chars.len() > capacity);
    if truncated {
        if let Some(last) = out.last_mut() {
            last.pop();
            last.push('…');
        }
    }
    out
}

/// A label broken into lines, plus the box the text actually covers.
#[derive(Debug, Clone, PartialEq)]
pub struct FittedLabel {
    pub lines: Vec<String>,
    /// Tight box around the lines, centred in the label column.  This is
    /// what gets the selection highlight.
    pub text_rect: Rect,
}

/// Wrap `label` into `column` assuming every character advances
/// `char_width` and every line is `line_height` tall.
///
/// Non-positive sizes yield no lines and an empty box at the top centre of
/// the column.
pub fn fit_label(
    label: &str,
    column: Rect,
    char_width: f64,
    line_height: f64,
    max_lines: usize,
) -> FittedLabel {
    let centre = column.x + column.width / 2.0;
    if char_width <= 0.0 || line_height <= 0.0 || !char_width.is_finite() {
        return FittedLabel {
            lines: Vec::new(),
            text_rect: Rect::new(centre, column.y, 0.0, 0.0),
        };
    }
    let per_line = (column.width / char_width).floor().max(1.0) as usize;
    let lines = wrap_label(label, per_line, max_lines);
    let widest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let width = (widest as f64 * char_width).min(column.width);
    FittedLabel {
        text_rect: Rect::new(
            centre - width / 2.0,
            column.y,
            width,
            lines.len() as f64 * line_height,
        ),
        lines,
    }
}
