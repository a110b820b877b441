//! Full-frame rendering of the report page.

use std::time::Duration;

use mercattoria_engine::{App, CatalogKind, Report, UiOptions};

use crate::common::{draw, sized_terminal, still_app, terminal};

#[test]
fn first_screen_shows_brand_hero_and_links() {
    let mut terminal = terminal();
    let mut app = still_app();
    draw(&mut terminal, &mut app);

    let screen = terminal.backend().contents();
    assert!(terminal.backend().row_text(0).contains("Mercattoria"));
    assert!(screen.contains("Consultoria Mercattoria"));
    assert!(screen.contains("[ Ver Timeline ]"));
    assert!(screen.contains("[ Ver Resultados ]"));
    for kind in CatalogKind::ALL {
        assert!(screen.contains(kind.nav_label()), "missing nav link {kind}");
    }
    assert_eq!(app.view().layout.nav.len(), CatalogKind::ALL.len());
}

#[test]
fn every_listing_item_is_laid_out_in_page_order() {
    let mut terminal = terminal();
    let mut app = still_app();
    draw(&mut terminal, &mut app);

    let layout = &app.view().layout.page;
    let expected: Vec<_> = app.report().items().collect();
    let placed: Vec<_> = layout.items.iter().map(|placed| placed.item).collect();
    assert_eq!(placed, expected);

    let anchors: Vec<_> = layout.anchors.iter().map(|(kind, _)| *kind).collect();
    assert_eq!(anchors, CatalogKind::ALL);
    assert!(layout.anchors.windows(2).all(|pair| pair[0].1 < pair[1].1));
}

#[test]
fn footer_closes_the_page() {
    let mut terminal = terminal();
    let mut app = still_app();
    draw(&mut terminal, &mut app);
    app.scroll_to_bottom();
    draw(&mut terminal, &mut app);

    let screen = terminal.backend().contents();
    assert!(screen.contains("Consultor: Ricardo Higa"));
    assert!(screen.contains("(c)"));
    assert!(screen.contains("Todos os direitos reservados."));
}

#[test]
fn reduced_motion_shows_everything_at_once() {
    let mut terminal = terminal();
    let mut app = still_app();
    draw(&mut terminal, &mut app);
    assert!(!app.is_animating());

    let first_meeting = &app.report().meetings.get(0).expect("meeting").title;
    assert!(terminal.backend().contents().contains(first_meeting.as_str()));
}

#[test]
fn animated_items_start_hidden_and_settle() {
    let mut terminal = terminal();
    let report = Report::builtin().expect("embedded report parses");
    let mut app = App::with_report(
        report,
        UiOptions {
            ascii_only: true,
            ..UiOptions::default()
        },
    );
    draw(&mut terminal, &mut app);

    let first_meeting = app.report().meetings.get(0).expect("meeting").title.clone();
    assert!(!terminal.backend().contents().contains(first_meeting.as_str()));
    assert!(app.is_animating());

    for _ in 0..60 {
        app.advance(Duration::from_millis(50));
        draw(&mut terminal, &mut app);
    }
    assert!(!app.is_animating());
    assert!(terminal.backend().contents().contains(first_meeting.as_str()));
}

#[test]
fn narrow_terminals_stack_cards_in_one_column() {
    let mut terminal = sized_terminal(50, 30);
    let mut app = still_app();
    draw(&mut terminal, &mut app);

    let layout = &app.view().layout.page;
    let lefts: Vec<u16> = layout
        .items
        .iter()
        .filter(|placed| placed.item.catalog == CatalogKind::Indicators)
        .map(|placed| placed.span.left)
        .collect();
    assert!(lefts.windows(2).all(|pair| pair[0] == pair[1]));
}
