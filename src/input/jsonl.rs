//! Newline-delimited JSON [`EventSource`].
//!
//! # Wire format
//!
//! Every message is a single line of JSON followed by `\n`:
//!
//! ```json
//! {"Press":{"x":30,"y":30}}
//! {"Move":{"x":60,"y":60}}
//! {"Release":{"x":90,"y":90}}
//! ```
//!
//! Blank lines are skipped.  A line that does not parse is logged and
//! skipped; the stream carries on.

use crate::pointer::PointerEvent;
use crate::traits::EventSource;
use log::{debug, error, info};
use std::io::BufRead;
use std::sync::mpsc;

/// Reads [`PointerEvent`]s from any buffered reader, one per line.
pub struct JsonLinesSource<R> {
    reader: R,
}

/// Errors produced by [`JsonLinesSource`].
#[derive(Debug, thiserror::Error)]
pub enum JsonLinesError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl<R: BufRead> JsonLinesSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead + Send> EventSource for JsonLinesSource<R> {
    type Error = JsonLinesError;

    /// Read until end of input, or until the sink is dropped.
    fn run(&mut self, sink: mpsc::Sender<PointerEvent>) -> Result<(), Self::Error> {
        let mut forwarded = 0usize;
        for line in (&mut self.reader).lines() {
            let text = line?;
            if text.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<PointerEvent>(&text) {
                Ok(event) => {
                    debug!("received {}", event);
                    if sink.send(event).is_err() {
                        info!("sink closed, stopping after {} event(s)", forwarded);
                        return Ok(());
                    }
                    forwarded += 1;
                }
                Err(e) => {
                    error!("bad event: {} ({})", text, e);
                }
            }
        }
        debug!("end of input after {} event(s)", forwarded);
        Ok(())
    }
}

//  Tests

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use std::io::{BufReader, Cursor, Read};

    fn run_on(input: &str) -> (Result<(), JsonLinesError>, Vec<PointerEvent>) {
        let (tx, rx) = mpsc::channel();
        let mut source = JsonLinesSource::new(Cursor::new(input.as_bytes().to_vec()));
        let result = source.run(tx);
        (result, rx.try_iter().collect())
    }

    #[test]
    fn reads_one_event_per_line() {
        let (result, events) = run_on(concat!(
            "{\"Press\":{\"x\":30,\"y\":30}}\n",
            "{\"Move\":{\"x\":60,\"y\":60}}\n",
            "{\"Release\":{\"x\":90.5,\"y\":90}}\n",
        ));
        assert!(result.is_ok());
        assert_eq!(
            events,
            vec![
                PointerEvent::Press(Point::new(30.0, 30.0)),
                PointerEvent::Move(Point::new(60.0, 60.0)),
                PointerEvent::Release(Point::new(90.5, 90.0)),
            ]
        );
    }

    #[test]
    fn malformed_and_blank_lines_are_skipped() {
        let (result, events) = run_on(concat!(
            "not json at all\n",
            "\n",
            "   \n",
            "{\"Press\":{\"x\":1,\"y\":2}}\n",
        ));
        assert!(result.is_ok());
        assert_eq!(events, vec![PointerEvent::Press(Point::new(1.0, 2.0))]);
    }

    #[test]
    fn dropped_sink_stops_cleanly() {
        let (tx, rx) = mpsc::channel();
        drop(rx);
        let mut source = JsonLinesSource::new(Cursor::new(b"{\"Press\":{\"x\":1,\"y\":2}}\n".to_vec()));
        assert!(source.run(tx).is_ok());
    }

    /// A reader that fails on first use.
    struct Broken;

    impl Read for Broken {
        fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "broken pipe"))
        }
    }

    #[test]
    fn read_errors_end_the_source() {
        let (tx, _rx) = mpsc::channel();
        let mut source = JsonLinesSource::new(BufReader::new(Broken));
        assert!(matches!(source.run(tx), Err(JsonLinesError::Io(_))));
    }
}
