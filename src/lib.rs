//! **icongrid** — an icon-grid view model.
//!
//! Lays out labelled icons on a 2D canvas, selects them by click or by
//! rubber band, and moves single items by dragging.  The crate does no
//! painting and no windowing of its own: a host feeds pointer events in
//! and paints the render records it gets back.
//!
//! # Architecture
//!
//! * [`view::ItemGridView`] — the model: items, hit-testing, selection and
//!   the drag / rubber-band gestures.
//! * [`layout`] — item geometry shared by painting and hit-testing.
//! * [`traits::IconTable`] and [`traits::EventSource`] — the seams to the
//!   image provider and the input transport.
//! * [`directory::DirectoryAdapter`] — fills a view from a directory
//!   listing.
//!
//! Concrete hosts live in [`input`] (JSON-lines replay) and [`viewer`]
//! (GTK4 window, behind the `viewer-gtk` feature).

pub mod config;
pub mod directory;
pub mod geometry;
pub mod gesture;
pub mod icons;
pub mod input;
pub mod item;
pub mod layout;
pub mod pointer;
pub mod render;
pub mod traits;
pub mod view;
pub mod viewer;
