//! Section jumps, focus and scrolling through the real renderer.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

use mercattoria_engine::{CatalogKind, ClickOutcome, ItemRef};
use mercattoria_tui::apply_event;

use crate::common::{draw, still_app, terminal};

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

#[test]
fn number_keys_jump_to_sections() {
    let mut terminal = terminal();
    let mut app = still_app();
    draw(&mut terminal, &mut app);

    apply_event(&mut app, key(KeyCode::Char('3')));
    assert_eq!(app.current_section(), Some(CatalogKind::NextSteps));
    draw(&mut terminal, &mut app);

    let title = &app.report().sections.next_steps.title;
    let top_rows = terminal.backend().region(0, 2, 100, 3);
    assert!(
        top_rows.iter().any(|row| row.contains(title.as_str())),
        "section title not at top: {top_rows:?}"
    );

    apply_event(&mut app, key(KeyCode::Char('1')));
    assert_eq!(app.current_section(), Some(CatalogKind::Meetings));
}

#[test]
fn header_links_navigate() {
    let mut terminal = terminal();
    let mut app = still_app();
    draw(&mut terminal, &mut app);

    let (column, row) = terminal
        .backend()
        .find(CatalogKind::Implementations.nav_label())
        .expect("header shows the section links");
    assert_eq!(row, 0);
    assert_eq!(
        app.click(column, row),
        ClickOutcome::Navigated(CatalogKind::Implementations)
    );
    assert_eq!(app.current_section(), Some(CatalogKind::Implementations));
}

#[test]
fn hero_button_scrolls_to_the_timeline() {
    let mut terminal = terminal();
    let mut app = still_app();
    draw(&mut terminal, &mut app);

    let (column, row) = terminal
        .backend()
        .find("[ Ver Timeline ]")
        .expect("hero buttons are on the first screen");
    assert_eq!(
        app.click(column + 2, row),
        ClickOutcome::Navigated(CatalogKind::Meetings)
    );
    assert_eq!(app.current_section(), Some(CatalogKind::Meetings));
}

#[test]
fn tab_walks_focus_past_the_timeline_and_keeps_it_visible() {
    let mut terminal = terminal();
    let mut app = still_app();
    draw(&mut terminal, &mut app);

    let meetings = app.report().len_of(CatalogKind::Meetings);
    for _ in 0..=meetings {
        apply_event(&mut app, key(KeyCode::Tab));
    }
    let focused = ItemRef::new(CatalogKind::Implementations, 0);
    assert_eq!(app.focus(), Some(focused));

    draw(&mut terminal, &mut app);
    let view = app.view();
    let span = view.layout.page.item_span(focused).expect("laid out");
    assert!(span.top >= view.scroll);
    assert!(span.bottom() <= view.scroll + view.layout.page_area.height);

    apply_event(&mut app, key(KeyCode::Enter));
    assert_eq!(app.open_item(), Some(focused));
}

#[test]
fn wheel_and_keys_scroll_within_bounds() {
    let mut terminal = terminal();
    let mut app = still_app();
    draw(&mut terminal, &mut app);

    let wheel = Event::Mouse(MouseEvent {
        kind: MouseEventKind::ScrollDown,
        column: 10,
        row: 10,
        modifiers: KeyModifiers::NONE,
    });
    apply_event(&mut app, wheel);
    assert_eq!(app.view().scroll, 3);

    apply_event(&mut app, key(KeyCode::Char('G')));
    assert_eq!(app.view().scroll, app.view().scroll_max);
    apply_event(&mut app, key(KeyCode::PageDown));
    assert_eq!(app.view().scroll, app.view().scroll_max);

    apply_event(&mut app, key(KeyCode::Char('g')));
    apply_event(&mut app, key(KeyCode::Up));
    assert_eq!(app.view().scroll, 0);
}
