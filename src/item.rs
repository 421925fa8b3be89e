//! A single entry of the grid.

use crate::geometry::{Point, Rect};
use crate::layout::LayoutConfig;
use serde::{Deserialize, Serialize};

/// Index into an [`IconTable`](crate::traits::IconTable).
///
/// The view only stores and forwards these; it never looks at pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconId(pub usize);

impl IconId {
    /// Icon given to items when nothing else is configured.
    pub const DEFAULT: IconId = IconId(0);
    /// Stock icon for regular files.
    pub const FILE: IconId = IconId(0);
    /// Stock icon for directories.
    pub const DIRECTORY: IconId = IconId(1);
}

/// One labelled, iconified entry.
///
/// `bounding_box` is derived from `position`; the only way to move an item
/// is [`Item::move_to`], which recomputes both together.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    label: String,
    position: Point,
    bounding_box: Rect,
    selected: bool,
    icon: IconId,
}

impl Item {
    pub(crate) fn new(label: String, position: Point, icon: IconId, layout: &LayoutConfig) -> Self {
        Self {
            label,
            position,
            bounding_box: layout.layout_bounding_box(position),
            selected: false,
            icon,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Top-left anchor of the icon glyph.
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn bounding_box(&self) -> Rect {
        self.bounding_box
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn icon(&self) -> IconId {
        self.icon
    }

    pub(crate) fn move_to(&mut self, position: Point, layout: &LayoutConfig) {
        self.position = position;
        self.bounding_box = layout.layout_bounding_box(position);
    }

    /// Returns `true` if the flag actually changed.
    pub(crate) fn set_selected(&mut self, selected: bool) -> bool {
        let changed = self.selected != selected;
        self.selected = selected;
        changed
    }
}
