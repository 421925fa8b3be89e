//! GTK4 window that hosts an [`ItemGridView`] on the **main thread**.
//!
//! # Widget tree
//!
//! ```text
//! window
//! └ DrawingArea          (cairo painter, owns the GestureDrag)
//! ```
//!
//! A single primary-button [`gtk4::GestureDrag`] drives the view:
//!
//! | GTK signal    | Pointer event                     |
//! |---------------|-----------------------------------|
//! | `drag-begin`  | [`PointerEvent::Press`]           |
//! | `drag-update` | [`PointerEvent::Move`]            |
//! | `drag-end`    | [`PointerEvent::Release`]         |
//!
//! GTK reports update/end as offsets from the start point; they are turned
//! back into absolute canvas coordinates before reaching the view.

use crate::config::Config;
use crate::geometry::{Point, Rect};
use crate::icons::StockIcons;
use crate::pointer::PointerEvent;
use crate::render::{fit_label, Damage, ItemRecord, RenderRecord};
use crate::traits::IconTable;
use crate::view::ItemGridView;
use gtk4::prelude::*;
use gtk4::{cairo, gdk, glib};
use log::{debug, info, warn};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::mpsc;
use std::time::Duration;

//  Colours

const BACKGROUND: (f64, f64, f64) = (1.0, 1.0, 1.0);
const TEXT: (f64, f64, f64) = (0.1, 0.1, 0.1);
const HIGHLIGHT: (f64, f64, f64) = (0.19, 0.48, 0.85);
const HIGHLIGHT_TEXT: (f64, f64, f64) = (1.0, 1.0, 1.0);
const SILHOUETTE_ALPHA: f64 = 0.45;

/// Rough advance of one label character, as a fraction of the font size.
const CHAR_WIDTH: f64 = 0.6;

//  Public API

/// Run the GTK4 main loop on the **current** (main) thread until the
/// window is closed.
pub fn run_main_loop(view: ItemGridView, config: &Config) -> Result<(), glib::BoolError> {
    gtk4::init()?;
    info!("GTK4 initialised on main thread");

    let (redraw_tx, redraw_rx) = mpsc::channel::<Damage>();
    let mut view = view;
    view.set_redraw_notifier(redraw_tx);
    let view = Rc::new(RefCell::new(view));
    let icons = Rc::new(StockIcons::default());

    let window = gtk4::Window::new();
    window.set_title(Some("icongrid"));
    window.set_default_size(config.canvas.width as i32, config.canvas.height as i32);

    let area = gtk4::DrawingArea::new();
    area.set_hexpand(true);
    area.set_vexpand(true);

    {
        let view = Rc::clone(&view);
        let icons = Rc::clone(&icons);
        area.set_draw_func(move |_, cr, width, height| {
            let clip = Rect::new(0.0, 0.0, f64::from(width), f64::from(height));
            let mut view = view.borrow_mut();
            view.take_damage();
            let font_size = view.layout().font_size;
            let lines = view.layout().label_lines as usize;
            let records = view.visible_items(clip);
            if let Err(e) = paint(cr, &records, &icons, font_size, lines) {
                warn!("paint failed: {}", e);
            }
        });
    }

    //  Pointer gestures
    let gesture = gtk4::GestureDrag::new();
    gesture.set_button(gdk::BUTTON_PRIMARY);
    {
        let view = Rc::clone(&view);
        gesture.connect_drag_begin(move |_, x, y| {
            dispatch(&view, PointerEvent::Press(Point::new(x, y)));
        });
    }
    {
        let view = Rc::clone(&view);
        gesture.connect_drag_update(move |gesture, dx, dy| {
            if let Some((x, y)) = gesture.start_point() {
                dispatch(&view, PointerEvent::Move(Point::new(x + dx, y + dy)));
            }
        });
    }
    {
        let view = Rc::clone(&view);
        gesture.connect_drag_end(move |gesture, dx, dy| {
            if let Some((x, y)) = gesture.start_point() {
                dispatch(&view, PointerEvent::Release(Point::new(x + dx, y + dy)));
            }
        });
    }
    area.add_controller(gesture);

    window.set_child(Some(&area));

    //  Redraw wake-ups (~60 fps)
    {
        let area = area.clone();
        glib::timeout_add_local(Duration::from_millis(16), move || {
            let mut wake = false;
            loop {
                match redraw_rx.try_recv() {
                    Ok(damage) => {
                        debug!("redraw requested: {:?}", damage);
                        wake = true;
                    }
                    Err(mpsc::TryRecvError::Empty) => break,
                    Err(mpsc::TryRecvError::Disconnected) => return glib::ControlFlow::Break,
                }
            }
            if wake {
                area.queue_draw();
            }
            glib::ControlFlow::Continue
        });
    }

    let main_loop = glib::MainLoop::new(None, false);
    {
        let main_loop = main_loop.clone();
        window.connect_close_request(move |_| {
            info!("window closed");
            main_loop.quit();
            glib::Propagation::Proceed
        });
    }

    window.present();
    info!("entering GLib main loop");
    main_loop.run();
    info!("GLib main loop exited");
    Ok(())
}

//  Event plumbing

/// Hand `event` to the view.  Repaints are scheduled by the redraw
/// notifier, not here.
fn dispatch(view: &RefCell<ItemGridView>, event: PointerEvent) {
    view.borrow_mut().handle(event);
}

//  Painting

fn paint(
    cr: &cairo::Context,
    records: &[RenderRecord<'_>],
    icons: &StockIcons,
    font_size: f64,
    lines: usize,
) -> Result<(), cairo::Error> {
    set_rgb(cr, BACKGROUND, 1.0);
    cr.paint()?;
    cr.set_font_size(font_size);

    for record in records {
        match record {
            RenderRecord::Item(item) => paint_item(cr, item, icons, font_size, lines, 1.0)?,
            RenderRecord::Silhouette(item) => {
                paint_item(cr, item, icons, font_size, lines, SILHOUETTE_ALPHA)?
            }
            RenderRecord::SelectRect(r) => {
                set_rgb(cr, HIGHLIGHT, 0.2);
                cr.rectangle(r.x, r.y, r.width, r.height);
                cr.fill_preserve()?;
                set_rgb(cr, HIGHLIGHT, 0.9);
                cr.set_line_width(1.0);
                cr.stroke()?;
            }
        }
    }
    debug!("painted {} record(s)", records.len());
    Ok(())
}

fn paint_item(
    cr: &cairo::Context,
    item: &ItemRecord<'_>,
    icons: &StockIcons,
    font_size: f64,
    lines: usize,
    alpha: f64,
) -> Result<(), cairo::Error> {
    let char_width = font_size * CHAR_WIDTH;
    let fitted = fit_label(item.label, item.label_rect, char_width, font_size, lines);

    if item.selected {
        let r = fitted.text_rect;
        set_rgb(cr, HIGHLIGHT, alpha);
        cr.rectangle(r.x, r.y, r.width, r.height);
        cr.fill()?;
    }

    if let Some(icon) = icons.icon_or_default(item.icon) {
        let glyph = item.icon_rect;
        set_rgb(cr, icon.rgb, alpha);
        cr.rectangle(glyph.x, glyph.y, glyph.width, glyph.height);
        cr.fill()?;
    }

    let column = item.label_rect;
    set_rgb(cr, if item.selected { HIGHLIGHT_TEXT } else { TEXT }, alpha);
    for (i, line) in fitted.lines.iter().enumerate() {
        let width = line.chars().count() as f64 * char_width;
        let x = column.x + (column.width - width) / 2.0;
        let y = column.y + font_size * (i as f64 + 1.0);
        cr.move_to(x, y);
        cr.show_text(line)?;
    }
    Ok(())
}

fn set_rgb(cr: &cairo::Context, (r, g, b): (f64, f64, f64), alpha: f64) {
    cr.set_source_rgba(r, g, b, alpha);
}
