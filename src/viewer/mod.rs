//! Windowed hosts for the view.
//!
//! When the `viewer-gtk` feature is enabled, [`gtk::run_main_loop`] opens
//! a window on the main thread, paints the view's render records with
//! cairo, and feeds it pointer gestures.

#[cfg(feature = "viewer-gtk")]
pub mod gtk;
