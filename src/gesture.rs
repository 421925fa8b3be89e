//! Pointer gesture state: single-item drags and the rubber band.
//!
//! # Drag phases
//!
//! | Phase      | Entered on                          | Left on                         |
//! |------------|-------------------------------------|---------------------------------|
//! | `Idle`     | construction, release, `clear()`    | press on an item                |
//! | `Pending`  | press on an item                    | threshold crossed, or release   |
//! | `Dragging` | move past [`DragConfig::threshold`] | release (commit or discard)     |
//!
//! A press that hits nothing never touches the drag phase; it starts a
//! [`RubberBand`] instead.

use crate::geometry::{Point, Rect};
use serde::{Deserialize, Serialize};

/// How the travelled distance is compared against the threshold.
///
/// Both variants require *both* axes to reach the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThresholdAxes {
    /// Horizontal travel is `|x - origin.x|`, vertical travel is
    /// `|y - origin.x|`.  The vertical check is measured from the origin's
    /// *x* coordinate; this is how existing layouts have always behaved.
    Legacy,
    /// Horizontal travel is `|x - origin.x|`, vertical travel is
    /// `|y - origin.y|`.
    PerAxis,
}

/// Tuning knobs for drag recognition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragConfig {
    /// Minimum travel per axis, in pixels, before a press becomes a drag.
    /// Default: `10.0`.
    pub threshold: f64,
    /// Which coordinates the travel is measured against.
    /// Default: [`ThresholdAxes::Legacy`].
    pub threshold_axes: ThresholdAxes,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            threshold: 10.0,
            threshold_axes: ThresholdAxes::Legacy,
        }
    }
}

/// Whether the pointer at `current` has travelled far enough from `origin`
/// to turn a pending press into a drag.
pub(crate) fn crossed_drag_threshold(origin: Point, current: Point, config: &DragConfig) -> bool {
    let dx = (current.x - origin.x).abs();
    let dy = match config.threshold_axes {
        ThresholdAxes::Legacy => (current.y - origin.x).abs(),
        ThresholdAxes::PerAxis => (current.y - origin.y).abs(),
    };
    dx >= config.threshold && dy >= config.threshold
}

/// Phase of the single-item drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum DragPhase {
    #[default]
    Idle,
    Pending,
    Dragging,
}

/// The one in-flight drag.  `index` and `origin` are meaningless while
/// `phase` is `Idle`.
#[derive(Debug, Clone, Default)]
pub(crate) struct DragGesture {
    pub phase: DragPhase,
    pub index: usize,
    pub origin: Point,
    pub current: Point,
}

impl DragGesture {
    /// Arm a drag for the item at `index`, pressed at `origin`.
    pub fn arm(&mut self, index: usize, origin: Point) {
        *self = Self {
            phase: DragPhase::Pending,
            index,
            origin,
            current: origin,
        };
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == DragPhase::Dragging
    }
}

/// Multi-select rectangle anchored where the press missed every item.
#[derive(Debug, Clone, Default)]
pub(crate) struct RubberBand {
    pub active: bool,
    pub anchor: Point,
    pub end: Point,
}

impl RubberBand {
    pub fn begin(&mut self, anchor: Point) {
        *self = Self {
            active: true,
            anchor,
            end: anchor,
        };
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn span(&self) -> Option<Rect> {
        self.active.then(|| Rect::from_corners(self.anchor, self.end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn per_axis() -> DragConfig {
        DragConfig {
            threshold_axes: ThresholdAxes::PerAxis,
            ..DragConfig::default()
        }
    }

    #[test]
    fn both_axes_must_reach_threshold() {
        let cfg = per_axis();
        let o = Point::new(100.0, 100.0);
        assert!(!crossed_drag_threshold(o, Point::new(150.0, 105.0), &cfg));
        assert!(!crossed_drag_threshold(o, Point::new(105.0, 150.0), &cfg));
        assert!(crossed_drag_threshold(o, Point::new(110.0, 90.0), &cfg));
    }

    #[test]
    fn threshold_is_inclusive() {
        let cfg = per_axis();
        let o = Point::new(0.0, 0.0);
        assert!(crossed_drag_threshold(o, Point::new(10.0, 10.0), &cfg));
        assert!(!crossed_drag_threshold(o, Point::new(9.9, 10.0), &cfg));
    }

    #[test]
    fn legacy_measures_vertical_travel_from_origin_x() {
        let cfg = DragConfig::default();
        assert_eq!(cfg.threshold_axes, ThresholdAxes::Legacy);
        // Origin (30, 200): a pointer at (60, 205) has barely moved
        // vertically, but |205 - 30| is far past the threshold.
        let o = Point::new(30.0, 200.0);
        assert!(crossed_drag_threshold(o, Point::new(60.0, 205.0), &cfg));
        assert!(!crossed_drag_threshold(o, Point::new(60.0, 205.0), &per_axis()));
        // And a large real vertical move near y == origin.x is ignored.
        assert!(!crossed_drag_threshold(o, Point::new(60.0, 35.0), &cfg));
    }

    #[test]
    fn modes_agree_when_origin_is_on_the_diagonal() {
        let o = Point::new(30.0, 30.0);
        let p = Point::new(60.0, 60.0);
        assert!(crossed_drag_threshold(o, p, &DragConfig::default()));
        assert!(crossed_drag_threshold(o, p, &per_axis()));
    }

    #[test]
    fn arm_and_reset() {
        let mut g = DragGesture::default();
        assert_eq!(g.phase, DragPhase::Idle);
        g.arm(3, Point::new(1.0, 2.0));
        assert_eq!(g.phase, DragPhase::Pending);
        assert_eq!(g.index, 3);
        assert_eq!(g.current, Point::new(1.0, 2.0));
        g.reset();
        assert_eq!(g.phase, DragPhase::Idle);
    }

    #[test]
    fn rubber_band_span_only_while_active() {
        let mut band = RubberBand::default();
        assert_eq!(band.span(), None);
        band.begin(Point::new(50.0, 50.0));
        band.end = Point::new(10.0, 70.0);
        assert_eq!(band.span(), Some(Rect::new(10.0, 50.0, 40.0, 20.0)));
        band.reset();
        assert_eq!(band.span(), None);
    }

    #[test]
    fn config_json_uses_snake_case_modes() {
        let cfg: DragConfig =
            serde_json::from_str(r#"{ "threshold_axes": "per_axis" }"#).unwrap();
        assert_eq!(cfg.threshold_axes, ThresholdAxes::PerAxis);
        assert_eq!(cfg.threshold, 10.0);
    }
}
