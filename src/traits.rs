//! Traits at the seams between the view and its host.
//!
//! The [`ItemGridView`](crate::view::ItemGridView) only ever sees
//! [`IconId`]s and [`PointerEvent`]s.  Where the images come from and how
//! the pointer events are produced is up to implementations of these
//! traits.

use crate::item::IconId;
use crate::pointer::PointerEvent;
use std::sync::mpsc;

/// A table of icon images indexed by [`IconId`].
///
/// The view stores indices only; a painter resolves them through a table
/// when it draws a [`RenderRecord`](crate::render::RenderRecord).
pub trait IconTable {
    /// Whatever the painter needs to draw one glyph.
    type Icon;

    /// Look up `id`, or `None` if the table has no such entry.
    fn icon(&self, id: IconId) -> Option<&Self::Icon>;

    /// Look up `id`, falling back to [`IconId::DEFAULT`].
    fn icon_or_default(&self, id: IconId) -> Option<&Self::Icon> {
        self.icon(id).or_else(|| self.icon(IconId::DEFAULT))
    }
}

/// A source of [`PointerEvent`]s.
///
/// # Contract
///
/// * [`run`](EventSource::run) **blocks** until the source is exhausted or
///   an unrecoverable error occurs.
/// * Each event is sent through `sink` exactly once, in arrival order.
/// * Implementations must be [`Send`] so they can run on their own thread.
pub trait EventSource: Send {
    /// The error type produced by this source.
    type Error: std::error::Error + Send + 'static;

    /// Forward every incoming event into `sink`.
    fn run(&mut self, sink: mpsc::Sender<PointerEvent>) -> Result<(), Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    //  Mock IconTable

    struct Names(Vec<&'static str>);

    impl IconTable for Names {
        type Icon = &'static str;

        fn icon(&self, id: IconId) -> Option<&&'static str> {
            self.0.get(id.0)
        }
    }

    #[test]
    fn unknown_icons_fall_back_to_default() {
        let table = Names(vec!["file", "folder"]);
        assert_eq!(table.icon(IconId(1)), Some(&"folder"));
        assert_eq!(table.icon(IconId(9)), None);
        assert_eq!(table.icon_or_default(IconId(9)), Some(&"file"));
    }

    #[test]
    fn empty_table_has_no_default() {
        let table = Names(Vec::new());
        assert_eq!(table.icon_or_default(IconId(3)), None);
    }

    //  Mock EventSource

    #[derive(Debug, thiserror::Error)]
    #[error("mock error")]
    struct MockError;

    /// A test double that emits a fixed sequence of events.
    struct MockSource {
        events: Vec<PointerEvent>,
    }

    impl EventSource for MockSource {
        type Error = MockError;

        fn run(&mut self, sink: mpsc::Sender<PointerEvent>) -> Result<(), MockError> {
            for event in self.events.drain(..) {
                sink.send(event).map_err(|_| MockError)?;
            }
            Ok(())
        }
    }

    #[test]
    fn mock_source_emits_events_in_order() {
        let mut src = MockSource {
            events: vec![
                PointerEvent::Press(Point::new(1.0, 1.0)),
                PointerEvent::Release(Point::new(2.0, 2.0)),
            ],
        };
        let (tx, rx) = mpsc::channel();
        src.run(tx).unwrap();
        let events: Vec<PointerEvent> = rx.try_iter().collect();
        assert_eq!(
            events,
            vec![
                PointerEvent::Press(Point::new(1.0, 1.0)),
                PointerEvent::Release(Point::new(2.0, 2.0)),
            ]
        );
    }
}
