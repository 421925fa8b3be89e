//! The icon-grid view model.
//!
//! [`ItemGridView`] owns the items, answers "what is under this point",
//! and turns a press / move / release sequence into either a click, a
//! single-item drag, or a rubber-band selection.
//!
//! The view is single-threaded and never paints.  Every mutation records
//! [`Damage`]; the host collects it with [`ItemGridView::take_damage`] or
//! gets woken through a channel set with
//! [`ItemGridView::set_redraw_notifier`], then asks for
//! [`ItemGridView::visible_items`] and paints those.
//!
//! # Typical usage
//!
//! ```
//! use icongrid::geometry::Point;
//! use icongrid::pointer::PointerEvent;
//! use icongrid::view::ItemGridView;
//!
//! let mut view = ItemGridView::default();
//! view.add_item_at("notes.txt", Point::new(30.0, 30.0));
//! view.handle(PointerEvent::Press(Point::new(30.0, 30.0)));
//! view.handle(PointerEvent::Move(Point::new(60.0, 60.0)));
//! view.handle(PointerEvent::Release(Point::new(90.0, 90.0)));
//! assert_eq!(view.items()[0].position(), Point::new(90.0, 90.0));
//! ```

use crate::geometry::{Point, Rect};
use crate::gesture::{crossed_drag_threshold, DragConfig, DragGesture, DragPhase, RubberBand};
use crate::item::{IconId, Item};
use crate::layout::LayoutConfig;
use crate::pointer::PointerEvent;
use crate::render::{Damage, ItemRecord, RenderRecord};
use log::{debug, info, warn};
use std::sync::mpsc;

/// An ordered collection of icons with selection and drag-to-move.
pub struct ItemGridView {
    items: Vec<Item>,
    layout: LayoutConfig,
    drag_config: DragConfig,
    default_icon: IconId,
    drag: DragGesture,
    rubber_band: RubberBand,
    damage: Option<Damage>,
    redraw_tx: Option<mpsc::Sender<Damage>>,
}

impl Default for ItemGridView {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

impl ItemGridView {
    /// Create an empty view.  Drag settings and the default icon start at
    /// their defaults.
    pub fn new(layout: LayoutConfig) -> Self {
        Self {
            items: Vec::new(),
            layout,
            drag_config: DragConfig::default(),
            default_icon: IconId::DEFAULT,
            drag: DragGesture::default(),
            rubber_band: RubberBand::default(),
            damage: None,
            redraw_tx: None,
        }
    }

    pub fn set_drag_config(&mut self, config: DragConfig) {
        self.drag_config = config;
    }

    /// Icon given to items added through [`add_item`](Self::add_item) and
    /// [`add_item_at`](Self::add_item_at).
    pub fn set_default_icon(&mut self, icon: IconId) {
        self.default_icon = icon;
    }

    /// Attach a channel that is sent the first [`Damage`] after the view
    /// goes from clean to dirty.  Further requests are coalesced into the
    /// pending damage until [`take_damage`](Self::take_damage) is called.
    ///
    /// The GTK viewer drains this channel from a main-loop timer and
    /// queues a repaint; the paint then takes the damage.
    pub fn set_redraw_notifier(&mut self, tx: mpsc::Sender<Damage>) {
        self.redraw_tx = Some(tx);
    }

    //  Accessors

    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in insertion order.  The slice index is the item's identity.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn selected_indices(&self) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.is_selected())
            .map(|(i, _)| i)
            .collect()
    }

    pub fn drag_phase(&self) -> DragPhase {
        self.drag.phase
    }

    /// The current rubber-band rectangle, if one is being dragged.
    pub fn rubber_band(&self) -> Option<Rect> {
        self.rubber_band.span()
    }

    //  Item management

    /// Append an item at the configured default placement.
    pub fn add_item(&mut self, label: impl Into<String>) -> usize {
        let position = self.layout.default_placement();
        self.add_item_at(label, position)
    }

    /// Append an item anchored at `position`.
    ///
    /// Items are allowed to overlap; no attempt is made to find free space.
    pub fn add_item_at(&mut self, label: impl Into<String>, position: Point) -> usize {
        let icon = self.default_icon;
        self.add_item_with_icon(label, position, icon)
    }

    /// Append an item with an explicit icon.  Returns its index.
    pub fn add_item_with_icon(
        &mut self,
        label: impl Into<String>,
        position: Point,
        icon: IconId,
    ) -> usize {
        let item = Item::new(label.into(), position, icon, &self.layout);
        debug!(
            "add item {:?} at ({}, {})",
            item.label(),
            position.x,
            position.y
        );
        let area = item.bounding_box();
        self.items.push(item);
        self.request_redraw(Damage::Area(area));
        self.items.len() - 1
    }

    /// Remove every item and abandon any gesture in progress.
    pub fn clear(&mut self) {
        if !self.items.is_empty() {
            info!("clearing {} item(s)", self.items.len());
        }
        self.items.clear();
        self.drag.reset();
        self.rubber_band.reset();
        self.request_redraw(Damage::Full);
    }

    //  Hit-testing

    /// Index of the first item, in insertion order, whose bounding box
    /// contains `point`.
    pub fn item_at_point(&self, point: Point) -> Option<usize> {
        self.items
            .iter()
            .position(|item| item.bounding_box().contains(point))
    }

    //  Pointer input

    pub fn handle(&mut self, event: PointerEvent) {
        debug!("pointer {}", event);
        match event {
            PointerEvent::Press(p) => self.press(p),
            PointerEvent::Move(p) => self.motion(p),
            PointerEvent::Release(p) => self.release(p),
        }
    }

    /// Primary button pressed at `p`.
    ///
    /// Clears the selection, then either selects the item under `p` and
    /// arms a drag for it, or starts a rubber band if nothing was hit.
    pub fn press(&mut self, p: Point) {
        self.drag.reset();
        self.rubber_band.reset();

        for item in &mut self.items {
            item.set_selected(false);
        }

        match self.item_at_point(p) {
            Some(index) => {
                self.items[index].set_selected(true);
                self.drag.arm(index, p);
                debug!("drag pending on item {}", index);
            }
            None => {
                self.rubber_band.begin(p);
                debug!("rubber band from ({}, {})", p.x, p.y);
            }
        }
        self.request_redraw(Damage::Full);
    }

    /// Pointer moved to `p` with the button held.
    pub fn motion(&mut self, p: Point) {
        match self.drag.phase {
            DragPhase::Pending => {
                if crossed_drag_threshold(self.drag.origin, p, &self.drag_config) {
                    self.drag.phase = DragPhase::Dragging;
                    self.drag.current = p;
                    debug!("dragging item {}", self.drag.index);
                    let area = self.layout.layout_bounding_box(p);
                    self.request_redraw(Damage::Area(area));
                }
            }
            DragPhase::Dragging => {
                let before = self.layout.layout_bounding_box(self.drag.current);
                self.drag.current = p;
                let after = self.layout.layout_bounding_box(p);
                self.request_redraw(Damage::Area(before.union(&after)));
            }
            DragPhase::Idle => {
                if let Some(before) = self.rubber_band.span() {
                    self.rubber_band.end = p;
                    let after = Rect::from_corners(self.rubber_band.anchor, p);
                    if self.select_intersecting(&after) {
                        self.request_redraw(Damage::Full);
                    } else {
                        self.request_redraw(Damage::Area(before.union(&after)));
                    }
                }
            }
        }
    }

    /// Primary button released at `p`.
    ///
    /// A drag that reached [`DragPhase::Dragging`] is committed if `p` is
    /// on the canvas (both coordinates non-negative) and discarded
    /// otherwise.  A pending drag is just a click; the selection made on
    /// press stays.
    pub fn release(&mut self, p: Point) {
        if self.drag.is_dragging() {
            let silhouette = self.layout.layout_bounding_box(self.drag.current);
            self.drag.current = p;
            let silhouette = silhouette.union(&self.layout.layout_bounding_box(p));

            if p.is_non_negative() {
                let index = self.drag.index;
                let layout = &self.layout;
                let moved = self.items.get_mut(index).map(|item| {
                    let before = item.bounding_box();
                    item.move_to(p, layout);
                    info!("moved {:?} to ({}, {})", item.label(), p.x, p.y);
                    before.union(&item.bounding_box())
                });
                match moved {
                    Some(area) => self.request_redraw(Damage::Area(area.union(&silhouette))),
                    None => warn!("dragged item {} no longer exists", index),
                }
            } else {
                debug!("dropped outside the canvas, move discarded");
                self.request_redraw(Damage::Area(silhouette));
            }
        }

        if let Some(span) = self.rubber_band.span() {
            debug!("rubber band done, {} selected", self.selected_indices().len());
            self.request_redraw(Damage::Area(span));
        }

        self.drag.reset();
        self.rubber_band.reset();
    }

    /// Select exactly the items intersecting `span`.  Returns whether any
    /// flag changed.
    fn select_intersecting(&mut self, span: &Rect) -> bool {
        let mut changed = false;
        for item in &mut self.items {
            let hit = item.bounding_box().intersects(span);
            changed |= item.set_selected(hit);
        }
        changed
    }

    //  Rendering

    /// Paint list for the region `clip`.
    ///
    /// Items are culled by their anchor point only, so an item whose anchor
    /// is outside `clip` is skipped even if part of its box overlaps it.
    /// The drag silhouette and the rubber band, when present, follow the
    /// items in that order.
    pub fn visible_items(&self, clip: Rect) -> Vec<RenderRecord<'_>> {
        let mut records: Vec<RenderRecord<'_>> = self
            .items
            .iter()
            .filter(|item| clip.contains(item.position()))
            .map(|item| {
                RenderRecord::Item(ItemRecord::new(
                    item.label(),
                    item.position(),
                    item.is_selected(),
                    item.icon(),
                    &self.layout,
                ))
            })
            .collect();

        if self.drag.is_dragging() {
            if let Some(item) = self.items.get(self.drag.index) {
                records.push(RenderRecord::Silhouette(ItemRecord::new(
                    item.label(),
                    self.drag.current,
                    false,
                    item.icon(),
                    &self.layout,
                )));
            }
        }

        if let Some(span) = self.rubber_band.span() {
            records.push(RenderRecord::SelectRect(span));
        }
        records
    }

    //  Redraw requests

    /// Whether anything changed since the last [`take_damage`](Self::take_damage).
    pub fn needs_redraw(&self) -> bool {
        self.damage.is_some()
    }

    /// Return and forget the pending damage.
    pub fn take_damage(&mut self) -> Option<Damage> {
        self.damage.take()
    }

    fn request_redraw(&mut self, damage: Damage) {
        let was_clean = self.damage.is_none();
        self.damage = Some(match self.damage.take() {
            Some(pending) => pending.merge(damage),
            None => damage,
        });

        if was_clean {
            let closed = self
                .redraw_tx
                .as_ref()
                .is_some_and(|tx| tx.send(damage).is_err());
            if closed {
                debug!("redraw receiver gone, detaching notifier");
                self.redraw_tx = None;
            }
        }
    }
}

//  Tests
