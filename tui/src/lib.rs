//! TUI rendering for Mercattoria using ratatui.

mod detail;
mod doc;
mod effects;
mod input;
mod page;
mod theme;

pub use detail::{
    detail_lines, implementation_lines, indicator_lines, meeting_lines, next_step_lines,
    prevention_routine_lines,
};
pub use effects::{RevealStyle, apply_modal_effect, reveal_style};
pub use input::{InputPump, apply_event, handle_events};
pub use theme::{Glyphs, Palette, glyphs, palette, styles};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use mercattoria_engine::{App, Area, CatalogKind, FrameLayout, NavHit};

/// Main draw function
///
/// Reports the geometry of what was drawn back to `app` so clicks and
/// entrance reveals line up with the screen.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);
    // Clear with background color
    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(1),    // Page
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    let nav = draw_header(frame, app, chunks[0], &palette);
    let page = page::draw_page(frame, app, chunks[1], &palette, &glyphs);
    draw_status_bar(frame, app, chunks[2], &palette);
    let detail = detail::draw_detail(frame, app, &palette, &glyphs);

    app.update_layout(FrameLayout {
        page_area: to_area(chunks[1]),
        page,
        nav,
        detail_area: detail.map(|(area, _)| area),
        detail_scroll_max: detail.map_or(0, |(_, max)| max),
    });
}

fn to_area(rect: Rect) -> Area {
    Area::new(rect.x, rect.y, rect.width, rect.height)
}

/// Brand on the left, section links on the right. Returns the link hit areas.
fn draw_header(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) -> Vec<NavHit> {
    let brand = app.report().page.brand.as_str();
    let current = app.current_section();

    let labels: Vec<(CatalogKind, &str)> = CatalogKind::ALL
        .into_iter()
        .map(|kind| (kind, kind.nav_label()))
        .collect();
    let links_width: usize = labels.iter().map(|(_, label)| label.width() + 2).sum();

    let mut spans = vec![Span::raw(" "), Span::styled(brand, styles::brand(palette))];
    let mut hits = Vec::new();
    let row = area.y;

    // Links are dropped on terminals too narrow to show them next to the brand.
    let used = 1 + brand.width();
    let available = usize::from(area.width).saturating_sub(used + 1);
    if links_width <= available {
        spans.push(Span::raw(" ".repeat(available - links_width)));
        let mut column = area.x + (usize::from(area.width) - links_width - 1) as u16;
        for (kind, label) in labels {
            let style = if current == Some(kind) {
                styles::nav_active(palette)
            } else {
                styles::subtitle(palette)
            };
            spans.push(Span::raw(" "));
            spans.push(Span::styled(label, style));
            spans.push(Span::raw(" "));
            let width = label.width() as u16;
            hits.push(NavHit {
                target: kind,
                area: Area::new(column + 1, row, width, 1),
            });
            column += width + 2;
        }
    }

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(palette.bg_border)),
    );
    frame.render_widget(header, area);
    hits
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let hints: &[(&str, &str)] = if app.open_item().is_some() {
        &[("Esc", "fechar"), ("j/k", "rolar"), ("PgUp/PgDn", "página")]
    } else {
        &[
            ("j/k", "rolar"),
            ("Tab", "próximo"),
            ("Enter", "abrir"),
            ("1-6", "seções"),
            ("q", "sair"),
        ]
    };

    let mut spans = vec![Span::raw(" ")];
    for (index, (key, action)) in hints.iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled("  ", styles::key_hint(palette)));
        }
        spans.push(Span::styled(*key, styles::key_highlight(palette)));
        spans.push(Span::styled(format!(" {action}"), styles::key_hint(palette)));
    }

    let status = Paragraph::new(Line::from(spans));
    frame.render_widget(status, area);
}
