//! Pointer input vocabulary.
//!
//! Hosts translate whatever their toolkit delivers (GTK gestures, a replay
//! file, a test) into [`PointerEvent`]s and feed them to
//! [`ItemGridView::handle`](crate::view::ItemGridView::handle).
//!
//! # Wire format
//!
//! Events serialise as externally tagged JSON:
//!
//! ```json
//! {"Press":{"x":30.0,"y":30.0}}
//! {"Move":{"x":60.0,"y":60.0}}
//! {"Release":{"x":60.0,"y":60.0}}
//! ```

use crate::geometry::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A primary-button pointer event in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Press(Point),
    Move(Point),
    Release(Point),
}

impl PointerEvent {
    pub fn point(&self) -> Point {
        match *self {
            PointerEvent::Press(p) | PointerEvent::Move(p) | PointerEvent::Release(p) => p,
        }
    }
}

impl fmt::Display for PointerEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.point();
        match self {
            PointerEvent::Press(_) => write!(f, "press ({}, {})", p.x, p.y),
            PointerEvent::Move(_) => write!(f, "move ({}, {})", p.x, p.y),
            PointerEvent::Release(_) => write!(f, "release ({}, {})", p.x, p.y),
        }
    }
}
