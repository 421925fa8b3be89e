//! Built-in icon table.
//!
//! Real image loading is a painter concern.  [`StockIcons`] only names the
//! stock glyphs and gives each a flat colour, which is all the headless
//! host and the GTK viewer need.

use crate::item::IconId;
use crate::traits::IconTable;
use serde::Serialize;

/// A named glyph with a flat RGB fill.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockIcon {
    pub name: &'static str,
    pub rgb: (f64, f64, f64),
}

/// The stock icons, indexed by the [`IconId`] constants.
#[derive(Debug, Clone)]
pub struct StockIcons {
    icons: Vec<StockIcon>,
}

impl Default for StockIcons {
    fn default() -> Self {
        let mut icons = vec![
            StockIcon {
                name: "file",
                rgb: (0.85, 0.87, 0.90),
            };
            2
        ];
        icons[IconId::DIRECTORY.0] = StockIcon {
            name: "directory",
            rgb: (0.95, 0.75, 0.30),
        };
        Self { icons }
    }
}

impl IconTable for StockIcons {
    type Icon = StockIcon;

    fn icon(&self, id: IconId) -> Option<&StockIcon> {
        self.icons.get(id.0)
    }
}
