//! Shared test utilities and fixtures

#![allow(dead_code)]

use ratatui::Terminal;

use mercattoria_engine::{App, ItemRef, Report, UiOptions};

use crate::vt100_backend::VT100Backend;

pub const WIDTH: u16 = 100;
pub const HEIGHT: u16 = 40;

/// Plain options: no animation, ASCII glyphs.
pub fn still_options() -> UiOptions {
    UiOptions {
        ascii_only: true,
        reduced_motion: true,
        ..UiOptions::default()
    }
}

pub fn still_app() -> App {
    let report = Report::builtin().expect("embedded report parses");
    App::with_report(report, still_options())
}

pub fn terminal() -> Terminal<VT100Backend> {
    Terminal::new(VT100Backend::new(WIDTH, HEIGHT)).expect("failed to create terminal")
}

pub fn draw(terminal: &mut Terminal<VT100Backend>, app: &mut App) {
    terminal
        .draw(|frame| mercattoria_tui::draw(frame, app))
        .expect("failed to draw");
}

/// Scroll `item` into view and return a screen cell inside it.
pub fn item_cell(terminal: &mut Terminal<VT100Backend>, app: &mut App, item: ItemRef) -> (u16, u16) {
    app.ensure_visible(item);
    draw(terminal, app);
    let layout = &app.view().layout;
    let span = layout.page.item_span(item).expect("item was laid out");
    let row = layout.page_area.y + span.top - app.view().scroll;
    (span.left + 1, row + 1)
}

pub fn sized_terminal(width: u16, height: u16) -> Terminal<VT100Backend> {
    Terminal::new(VT100Backend::new(width, height)).expect("failed to create terminal")
}

/// Text rows of the open detail overlay, as last drawn.
pub fn detail_rows(terminal: &Terminal<VT100Backend>, app: &App) -> Vec<String> {
    let area = app
        .view()
        .layout
        .detail_area
        .expect("a detail overlay was drawn");
    terminal
        .backend()
        .region(area.x, area.y, area.width, area.height)
}
