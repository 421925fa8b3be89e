//! Populate a view from a filesystem directory.
//!
//! [`DirectoryAdapter`] lists a directory and adds one item per entry.  It
//! only uses the view's public mutation operations; the flow-grid placement
//! lives here in [`FlowPacker`], not in the view.

use crate::geometry::Point;
use crate::item::IconId;
use crate::view::ItemGridView;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Placement settings for directory listings.
///
/// Items flow left to right starting at `origin`.  After an item placed at
/// `x >= wrap_x`, the next one starts a new row back at `origin.x`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectoryConfig {
    /// Anchor of the first item.  Default: `(10, 10)`.
    pub origin: Point,
    /// Distance between neighbouring anchors, both across and down.
    /// Default: `60.0`.
    pub step: f64,
    /// Horizontal position at which a row is full.  Default: `300.0`.
    pub wrap_x: f64,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            origin: Point::new(10.0, 10.0),
            step: 60.0,
            wrap_x: 300.0,
        }
    }
}

/// Yields successive anchors of a left-to-right, top-to-bottom flow grid.
#[derive(Debug, Clone)]
pub struct FlowPacker {
    config: DirectoryConfig,
    next: Point,
}

impl FlowPacker {
    pub fn new(config: DirectoryConfig) -> Self {
        Self {
            next: config.origin,
            config,
        }
    }
}

impl Iterator for FlowPacker {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        let current = self.next;
        if current.x < self.config.wrap_x {
            self.next.x += self.config.step;
        } else {
            self.next = Point::new(self.config.origin.x, current.y + self.config.step);
        }
        Some(current)
    }
}

/// Errors from reading a directory.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("failed to read {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read an entry of {}: {source}", .path.display())]
    Entry {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Fills an [`ItemGridView`] with the entries of a directory.
#[derive(Debug, Clone, Default)]
pub struct DirectoryAdapter {
    config: DirectoryConfig,
}

impl DirectoryAdapter {
    pub fn new(config: DirectoryConfig) -> Self {
        Self { config }
    }

    /// Replace the contents of `view` with the entries of `dir`.
    ///
    /// Hidden entries are included.  Names are sorted so the layout is the
    /// same on every platform; directories get [`IconId::DIRECTORY`],
    /// everything else [`IconId::FILE`].  Returns the number of items added.
    ///
    /// The view is cleared before listing starts, so on error it is left
    /// empty.
    pub fn populate(&self, view: &mut ItemGridView, dir: &Path) -> Result<usize, DirectoryError> {
        view.clear();

        let read_dir = std::fs::read_dir(dir).map_err(|source| DirectoryError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut entries: Vec<(String, bool)> = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|source| DirectoryError::Entry {
                path: dir.to_path_buf(),
                source,
            })?;
            let name = entry.file_name().to_string_lossy().into_owned();
            let is_dir = entry_is_dir(&name, entry.file_type());
            entries.push((name, is_dir));
        }
        entries.sort();

        let count = entries.len();
        let packer = FlowPacker::new(self.config.clone());
        for ((name, is_dir), position) in entries.into_iter().zip(packer) {
            let icon = if is_dir { IconId::DIRECTORY } else { IconId::FILE };
            debug!("entry {:?} (dir: {})", name, is_dir);
            view.add_item_with_icon(name, position, icon);
        }

        info!("listed {} entries from {}", count, dir.display());
        Ok(count)
    }
}

/// Entries whose type cannot be read are shown as files.
fn entry_is_dir(name: &str, file_type: std::io::Result<std::fs::FileType>) -> bool {
    match file_type {
        Ok(t) => t.is_dir(),
        Err(e) => {
            warn!("cannot read the type of {:?}, showing it as a file: {}", name, e);
            false
        }
    }
}

//  Tests

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    /// Monotonic counter to generate unique directories per test.
    static TEST_ID: AtomicU32 = AtomicU32::new(0);

    /// Helper: create a fresh, empty temporary directory.
    fn tmp_dir() -> PathBuf {
        let id = TEST_ID.fetch_add(1, Ordering::SeqCst);
        let dir = std::env::temp_dir().join(format!(
            "icongrid-test-{}-{}",
            std::process::id(),
            id
        ));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn flow_wraps_after_the_band() {
        let anchors: Vec<Point> = FlowPacker::new(DirectoryConfig::default()).take(8).collect();
        let xs: Vec<f64> = anchors.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![10.0, 70.0, 130.0, 190.0, 250.0, 310.0, 10.0, 70.0]);
        assert!(anchors[..6].iter().all(|p| p.y == 10.0));
        assert_eq!(anchors[6].y, 70.0);
        assert_eq!(anchors[7].y, 70.0);
    }

    #[test]
    fn populate_lists_every_entry_including_hidden() {
        let dir = tmp_dir();
        std::fs::write(dir.join("b.txt"), "b").unwrap();
        std::fs::write(dir.join(".hidden"), "h").unwrap();
        std::fs::create_dir(dir.join("a-dir")).unwrap();

        let mut view = ItemGridView::default();
        let n = DirectoryAdapter::default().populate(&mut view, &dir).unwrap();
        assert_eq!(n, 3);

        let labels: Vec<&str> = view.items().iter().map(|i| i.label()).collect();
        assert_eq!(labels, vec![".hidden", "a-dir", "b.txt"]);
        assert!(!labels.contains(&"."));
        assert!(!labels.contains(&".."));

        assert_eq!(view.items()[0].icon(), IconId::FILE);
        assert_eq!(view.items()[1].icon(), IconId::DIRECTORY);
        assert_eq!(view.items()[0].position(), Point::new(10.0, 10.0));
        assert_eq!(view.items()[1].position(), Point::new(70.0, 10.0));
        assert_eq!(view.items()[2].position(), Point::new(130.0, 10.0));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn populate_replaces_previous_contents() {
        let dir = tmp_dir();
        std::fs::write(dir.join("only"), "").unwrap();

        let mut view = ItemGridView::default();
        view.add_item("stale");
        DirectoryAdapter::default().populate(&mut view, &dir).unwrap();
        assert_eq!(view.len(), 1);
        assert_eq!(view.items()[0].label(), "only");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tmp_dir().join("does-not-exist");
        let mut view = ItemGridView::default();
        view.add_item("stale");
        let err = DirectoryAdapter::default().populate(&mut view, &dir).unwrap_err();
        assert!(matches!(err, DirectoryError::ReadDir { .. }));
        assert!(view.is_empty());
    }

    #[test]
    fn unreadable_entry_type_shows_as_file() {
        let err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "stat failed");
        assert!(!entry_is_dir("locked", Err(err)));

        let dir = tmp_dir();
        let file_type = std::fs::metadata(&dir).unwrap().file_type();
        assert!(entry_is_dir("dir", Ok(file_type)));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn empty_directory_yields_empty_view() {
        let dir = tmp_dir();
        let mut view = ItemGridView::default();
        assert_eq!(DirectoryAdapter::default().populate(&mut view, &dir).unwrap(), 0);
        assert!(view.is_empty());
        let _ = std::fs::remove_dir_all(&dir);
    }
}
