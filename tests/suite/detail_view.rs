//! Opening, reading and dismissing the detail overlay.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use mercattoria_engine::{CatalogKind, ClickOutcome, ItemRef};
use mercattoria_tui::apply_event;

use crate::common::{HEIGHT, detail_rows, draw, item_cell, sized_terminal, still_app, terminal};

fn left_click(column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn row_of(rows: &[String], needle: &str) -> usize {
    rows.iter()
        .position(|row| row.contains(needle))
        .unwrap_or_else(|| panic!("{needle:?} not in detail:\n{}", rows.join("\n")))
}

#[test]
fn clicking_a_next_step_shows_its_details_in_source_order() {
    let mut terminal = terminal();
    let mut app = still_app();
    draw(&mut terminal, &mut app);

    let course = ItemRef::new(CatalogKind::NextSteps, 0);
    let (column, row) = item_cell(&mut terminal, &mut app, course);
    apply_event(&mut app, left_click(column, row));
    assert_eq!(app.open_item(), Some(course));

    draw(&mut terminal, &mut app);
    let rows = detail_rows(&terminal, &app);
    assert!(rows.iter().any(|row| row.contains("Curso de Liderança")));

    let order: Vec<usize> = ["Apostila", "Aplicacao", "Inicio", "Termino", "Recursos"]
        .iter()
        .map(|label| row_of(&rows, label))
        .collect();
    assert!(
        order.windows(2).all(|pair| pair[0] < pair[1]),
        "detail rows out of order: {order:?}"
    );
}

#[test]
fn indicator_detail_lists_formula_meta_and_application() {
    let mut terminal = terminal();
    let mut app = still_app();
    app.select(ItemRef::new(CatalogKind::Indicators, 0))
        .expect("first indicator exists");
    draw(&mut terminal, &mut app);

    let rows = detail_rows(&terminal, &app);
    let formula = row_of(&rows, "Fórmula de Cálculo");
    let meta = row_of(&rows, "Meta");
    assert!(formula < meta);
}

#[test]
fn clicks_inside_keep_the_detail_and_outside_close_it() {
    let mut terminal = terminal();
    let mut app = still_app();
    app.select(ItemRef::new(CatalogKind::Meetings, 1))
        .expect("second meeting exists");
    draw(&mut terminal, &mut app);

    let area = app.view().layout.detail_area.expect("overlay drawn");
    let inside = app.click(area.x + area.width / 2, area.y + area.height / 2);
    assert_eq!(inside, ClickOutcome::Consumed);
    assert!(app.open_item().is_some());

    let outside = app.click(0, HEIGHT - 1);
    assert_eq!(outside, ClickOutcome::Closed);
    assert_eq!(app.open_item(), None);

    draw(&mut terminal, &mut app);
    assert_eq!(app.view().layout.detail_area, None);
}

#[test]
fn conclusions_never_open() {
    let mut terminal = terminal();
    let mut app = still_app();
    draw(&mut terminal, &mut app);

    for index in 0..app.report().len_of(CatalogKind::Conclusions) {
        let item = ItemRef::new(CatalogKind::Conclusions, index);
        let (column, row) = item_cell(&mut terminal, &mut app, item);
        assert_eq!(app.click(column, row), ClickOutcome::Ignored);
        assert_eq!(app.select(item), Ok(false));
        assert_eq!(app.open_item(), None);
    }
}

#[test]
fn selecting_in_another_catalog_replaces_the_open_detail() {
    let mut terminal = terminal();
    let mut app = still_app();
    app.select(ItemRef::new(CatalogKind::Indicators, 2))
        .expect("third indicator exists");
    app.select(ItemRef::new(CatalogKind::PreventionRoutines, 0))
        .expect("first routine exists");
    assert!(app.indicators().current().is_none());

    draw(&mut terminal, &mut app);
    let title = &app.report().prevention_routines.get(0).expect("routine").title;
    let rows = detail_rows(&terminal, &app);
    assert!(rows.iter().any(|row| row.contains(title.as_str())));
}

#[test]
fn escape_closes_and_the_page_keeps_its_scroll() {
    let mut terminal = terminal();
    let mut app = still_app();
    draw(&mut terminal, &mut app);
    app.scroll_by(12);
    app.select(ItemRef::new(CatalogKind::Implementations, 0))
        .expect("first implementation exists");
    draw(&mut terminal, &mut app);

    apply_event(
        &mut app,
        Event::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)),
    );
    assert_eq!(app.open_item(), None);
    assert!(!app.should_quit());
    assert_eq!(app.view().scroll, 12);
}

#[test]
fn long_details_scroll_inside_a_short_terminal() {
    let mut terminal = sized_terminal(60, 16);
    let mut app = still_app();
    app.select(ItemRef::new(CatalogKind::NextSteps, 0))
        .expect("first next step exists");
    draw(&mut terminal, &mut app);
    assert!(app.view().layout.detail_scroll_max > 0);

    apply_event(
        &mut app,
        Event::Key(KeyEvent::new(KeyCode::PageDown, KeyModifiers::NONE)),
    );
    assert!(app.view().detail_scroll > 0);
    assert_eq!(app.view().scroll, 0);

    apply_event(
        &mut app,
        Event::Key(KeyEvent::new(KeyCode::Char('g'), KeyModifiers::NONE)),
    );
    assert_eq!(app.view().detail_scroll, 0);
}
