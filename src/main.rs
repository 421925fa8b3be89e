//! Entry point for **icongrid**.
//!
//! `icongrid [DIR]` lists `DIR` (default: `$HOME`) into an icon grid.
//!
//! When the `viewer-gtk` feature is enabled the grid is shown in a GTK4
//! window.  Without the feature, pointer events are read as JSON lines from
//! stdin, applied to the grid, and the resulting render list is printed to
//! stdout as JSON.

use icongrid::config::Config;
use icongrid::directory::DirectoryAdapter;
use icongrid::view::ItemGridView;
use log::{error, info};
use std::path::PathBuf;

/// Resolve the config directory (`$XDG_CONFIG_HOME/icongrid`).
fn config_dir() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME").unwrap_or_else(|_| format!("{}/.config", home()));
    PathBuf::from(base).join("icongrid")
}

fn home() -> String {
    std::env::var("HOME").unwrap_or_else(|_| "/tmp".into())
}

/// Try to load the config from `$XDG_CONFIG_HOME/icongrid/config.json`,
/// falling back to compiled-in defaults.
fn load_config() -> Config {
    let path = config_dir().join("config.json");
    match Config::load(&path) {
        Ok(cfg) => {
            info!("loaded config from {}", path.display());
            cfg
        }
        Err(e) => {
            info!("no config file ({}), using defaults", e);
            Config::default()
        }
    }
}

//  Main

fn main() {
    env_logger::init();

    let config = load_config();
    let dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(home()));

    let mut view = config.build_view();
    let adapter = DirectoryAdapter::new(config.directory.clone());
    if let Err(e) = adapter.populate(&mut view, &dir) {
        error!("{}", e);
        std::process::exit(1);
    }

    run(view, &config);
}

//  Hosts

#[cfg(feature = "viewer-gtk")]
fn run(view: ItemGridView, config: &Config) {
    if let Err(e) = icongrid::viewer::gtk::run_main_loop(view, config) {
        error!("viewer error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "viewer-gtk"))]
fn run(mut view: ItemGridView, config: &Config) {
    use icongrid::geometry::Rect;
    use icongrid::input::jsonl::JsonLinesSource;
    use icongrid::pointer::PointerEvent;
    use icongrid::traits::EventSource;
    use std::io::BufReader;
    use std::sync::mpsc;

    let (tx, rx) = mpsc::channel::<PointerEvent>();
    let reader = std::thread::spawn(move || {
        let mut source = JsonLinesSource::new(BufReader::new(std::io::stdin()));
        if let Err(e) = source.run(tx) {
            error!("event source error: {}", e);
        }
    });

    info!("replaying pointer events from stdin");
    for event in rx {
        view.handle(event);
    }
    let _ = reader.join();

    let clip = Rect::new(0.0, 0.0, config.canvas.width, config.canvas.height);
    match serde_json::to_string_pretty(&view.visible_items(clip)) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            error!("failed to encode render list: {}", e);
            std::process::exit(1);
        }
    }
}
