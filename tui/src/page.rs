//! The scrolling report page: hero, the six sections and the footer.

use chrono::Datelike;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
};
use unicode_width::UnicodeWidthStr;

use mercattoria_engine::{
    App, Catalog, CatalogEntry, CatalogKind, DocSpan, Implementation, Indicator, ItemRef, ItemSpan, LinkSpan,
    NextStep, PageLayout, PreventionRoutine,
};

use crate::doc::{Doc, boxed, centered, hanging, with_reveal};
use crate::effects::reveal_style;
use crate::theme::{Glyphs, Palette, styles};

const CARD_GAP: usize = 2;

/// Page lines plus where everything landed.
pub(crate) struct PageRender {
    pub(crate) lines: Vec<Line<'static>>,
    pub(crate) layout: PageLayout,
}

struct PageBuilder<'a> {
    app: &'a App,
    palette: &'a Palette,
    glyphs: &'a Glyphs,
    doc: Doc,
    layout: PageLayout,
    /// Full document width.
    width: usize,
    /// Left margin of the content column.
    margin: usize,
    /// Width of the content column.
    content: usize,
    /// Screen column of the document's first column.
    origin: u16,
}

/// Lay the page out at `width` columns, starting at screen column `origin`.
pub(crate) fn build_page(
    app: &App,
    width: u16,
    origin: u16,
    palette: &Palette,
    glyphs: &Glyphs,
) -> PageRender {
    let width = usize::from(width.max(1));
    let margin = match width {
        80.. => 4,
        40..80 => 2,
        _ => 1,
    };
    let mut builder = PageBuilder {
        app,
        palette,
        glyphs,
        doc: Doc::new(),
        layout: PageLayout::default(),
        width,
        margin,
        content: width.saturating_sub(2 * margin).max(1),
        origin,
    };

    builder.hero();
    for kind in CatalogKind::ALL {
        builder.section(kind);
    }
    builder.footer();

    builder.layout.height = builder.doc.row();
    PageRender {
        lines: builder.doc.into_lines(),
        layout: builder.layout,
    }
}

impl PageBuilder<'_> {
    fn column(&self, offset: usize) -> u16 {
        self.origin
            .saturating_add(u16::try_from(self.margin + offset).unwrap_or(u16::MAX))
    }

    fn place_item(&mut self, item: ItemRef, top: u16, height: usize, left: usize, width: usize) {
        self.layout.items.push(ItemSpan {
            item,
            span: DocSpan {
                top,
                height: u16::try_from(height).unwrap_or(u16::MAX),
                left: self.column(left),
                width: u16::try_from(width).unwrap_or(u16::MAX),
            },
        });
    }

    fn border_style(&self, item: ItemRef) -> Style {
        if self.app.focus() == Some(item) {
            Style::default()
                .fg(self.palette.highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.palette.bg_border)
        }
    }

    fn hero(&mut self) {
        let palette = self.palette;
        let app = self.app;
        let page = &app.report().page;

        self.doc.blank();
        self.doc
            .push(centered(page.hero_title.clone(), self.width, styles::hero_title(palette)));
        self.doc.blank();
        self.doc
            .centered_paragraph(&page.hero_lead, self.width, 70, styles::body(palette));
        self.doc.blank();

        let primary = format!("[ {} ]", page.hero_primary);
        let secondary = format!("[ {} ]", page.hero_secondary);
        let gap = 3;
        let total = primary.width() + gap + secondary.width();
        let pad = self.width.saturating_sub(total) / 2;
        let row = self.doc.row();
        let origin = self.origin;
        let at = |offset: usize| origin.saturating_add(u16::try_from(offset).unwrap_or(u16::MAX));
        self.layout.links.push(LinkSpan {
            target: CatalogKind::Meetings,
            span: DocSpan {
                top: row,
                height: 1,
                left: at(pad),
                width: u16::try_from(primary.width()).unwrap_or(u16::MAX),
            },
        });
        self.layout.links.push(LinkSpan {
            target: CatalogKind::Implementations,
            span: DocSpan {
                top: row,
                height: 1,
                left: at(pad + primary.width() + gap),
                width: u16::try_from(secondary.width()).unwrap_or(u16::MAX),
            },
        });
        self.doc.push(Line::from(vec![
            Span::raw(" ".repeat(pad)),
            Span::styled(primary, styles::button_primary(palette)),
            Span::raw(" ".repeat(gap)),
            Span::styled(secondary, styles::button_secondary(palette)),
        ]));
        self.doc.blank();
        self.doc.blank();
    }

    fn section(&mut self, kind: CatalogKind) {
        let palette = self.palette;
        let app = self.app;
        let report = app.report();
        let copy = report.sections.get(kind);

        self.layout.anchors.push((kind, self.doc.row()));
        self.doc.push(centered(
            copy.title.clone(),
            self.width,
            styles::section_title(palette),
        ));
        self.doc
            .centered_paragraph(&copy.subtitle, self.width, 70, styles::subtitle(palette));
        self.doc.blank();

        match kind {
            CatalogKind::Meetings => self.timeline(),
            CatalogKind::Conclusions => self.conclusions(),
            CatalogKind::Implementations => {
                let cards = self.cards_of(&report.implementations);
                self.card_grid(cards);
            }
            CatalogKind::NextSteps => {
                let cards = self.cards_of(&report.next_steps);
                self.card_grid(cards);
            }
            CatalogKind::PreventionRoutines => {
                let cards = self.cards_of(&report.prevention_routines);
                self.card_grid(cards);
            }
            CatalogKind::Indicators => {
                let cards = self.cards_of(&report.indicators);
                self.card_grid(cards);
            }
        }
        self.doc.blank();
        self.doc.blank();
    }

    fn timeline(&mut self) {
        let palette = self.palette;
        let glyphs = self.glyphs;
        let app = self.app;
        let meetings = &app.report().meetings;
        let hint = &app.report().page.timeline_hint;
        let rail_style = Style::default().fg(palette.primary_dim);
        let dot_style = Style::default().fg(palette.primary);
        let card_width = self.content.saturating_sub(3).max(6);
        let inner = card_width.saturating_sub(4).max(1);

        for (index, meeting) in meetings.iter().enumerate() {
            let item = ItemRef::new(CatalogKind::Meetings, index);
            let mut body = Doc::new();
            body.paragraph(&meeting.title, 0, inner, styles::card_title(palette));
            body.push(Line::from(Span::styled(
                format!("{} {}", glyphs.calendar, meeting.date),
                Style::default()
                    .fg(palette.primary)
                    .add_modifier(Modifier::BOLD),
            )));
            body.paragraph(hint, 0, inner, styles::subtitle(palette));

            let card = boxed(body.into_lines(), 0, card_width, glyphs, self.border_style(item));
            let card = with_reveal(card, reveal_style(self.app.reveal_phase(item)));
            let top = self.doc.row();
            let height = card.len();
            for (row, line) in card.into_iter().enumerate() {
                let marker = if row == 1 {
                    Span::styled(glyphs.timeline_dot, dot_style)
                } else {
                    Span::styled(glyphs.timeline_rail, rail_style)
                };
                let mut spans = vec![Span::raw(" ".repeat(self.margin)), marker, Span::raw("  ")];
                spans.extend(line.spans);
                self.doc.push(Line::from(spans));
            }
            self.place_item(item, top, height, 3, card_width);

            if index + 1 < meetings.len() {
                self.doc.push(Line::from(vec![
                    Span::raw(" ".repeat(self.margin)),
                    Span::styled(glyphs.timeline_rail, rail_style),
                ]));
            }
        }
    }

    fn columns(&self) -> usize {
        match self.content {
            100.. => 3,
            64..100 => 2,
            _ => 1,
        }
    }

    fn card_width(&self) -> usize {
        let columns = self.columns();
        (self.content.saturating_sub(CARD_GAP * (columns - 1)) / columns).max(6)
    }

    fn cards_of<T: CardEntry>(&self, catalog: &Catalog<T>) -> Vec<(ItemRef, Vec<Line<'static>>)> {
        let palette = self.palette;
        let inner = self.card_width().saturating_sub(4).max(1);
        catalog
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let mut body = Doc::new();
                body.extend(hanging(
                    Span::raw(format!("{} ", self.glyphs.icon(entry.icon()))),
                    entry.card_title(),
                    inner,
                    styles::card_title(palette),
                ));
                body.blank();
                body.paragraph(entry.card_description(), 0, inner, styles::body(palette));
                (ItemRef::new(T::KIND, index), body.into_lines())
            })
            .collect()
    }

    /// Cards in rows of equal height.
    fn card_grid(&mut self, cards: Vec<(ItemRef, Vec<Line<'static>>)>) {
        let columns = self.columns();
        let card_width = self.card_width();
        let mut cards = cards.into_iter().peekable();

        while cards.peek().is_some() {
            let row: Vec<_> = cards.by_ref().take(columns).collect();
            let body_height = row.iter().map(|(_, body)| body.len()).max().unwrap_or(0);
            let top = self.doc.row();

            let mut rendered = Vec::with_capacity(row.len());
            for (slot, (item, mut body)) in row.into_iter().enumerate() {
                body.resize(body_height, Line::default());
                let card = boxed(body, 0, card_width, self.glyphs, self.border_style(item));
                let card = with_reveal(card, reveal_style(self.app.reveal_phase(item)));
                self.place_item(item, top, card.len(), slot * (card_width + CARD_GAP), card_width);
                rendered.push(card);
            }

            let height = body_height + 2;
            for line_index in 0..height {
                let mut spans = vec![Span::raw(" ".repeat(self.margin))];
                for card in &rendered {
                    let line = card.get(line_index).cloned().unwrap_or_default();
                    let pad = card_width.saturating_sub(line.width());
                    spans.extend(line.spans);
                    spans.push(Span::raw(" ".repeat(pad + CARD_GAP)));
                }
                self.doc.push(Line::from(spans));
            }
            self.doc.blank();
        }
    }

    fn conclusions(&mut self) {
        let palette = self.palette;
        let glyphs = self.glyphs;
        let app = self.app;
        let page = &app.report().page;
        let conclusions = &app.report().conclusions;
        let content = self.content;
        let margin = self.margin;

        self.doc
            .paragraph(&page.achievements_heading, margin, content, styles::detail_heading(palette));
        self.doc.blank();

        for (index, conclusion) in conclusions.iter().enumerate() {
            let item = ItemRef::new(CatalogKind::Conclusions, index);
            let icon = format!("{} ", glyphs.icon(&conclusion.icon));
            let indent = icon.width();
            let mut lines = hanging(
                Span::styled(icon, Style::default().fg(palette.primary)),
                &conclusion.title,
                content,
                styles::card_title(palette),
            );
            lines.extend(hanging(
                Span::raw(" ".repeat(indent)),
                &conclusion.description,
                content,
                styles::subtitle(palette),
            ));
            let lines = with_reveal(lines, reveal_style(self.app.reveal_phase(item)));

            let top = self.doc.row();
            let height = lines.len();
            self.doc.extend(lines.into_iter().map(|line| {
                let mut spans = vec![Span::raw(" ".repeat(margin))];
                spans.extend(line.spans);
                Line::from(spans)
            }));
            self.place_item(item, top, height, 0, content);
            self.doc.blank();
        }

        self.doc.blank();
        self.doc
            .paragraph(&page.impact_heading, margin, content, styles::detail_heading(palette));
        self.doc.blank();
        self.doc
            .paragraph(&page.impact_lead, margin, content, styles::body(palette));
        self.doc.blank();
        for recommendation in &page.recommendations {
            for line in hanging(
                Span::styled(format!("{} ", glyphs.bullet), Style::default().fg(palette.primary)),
                recommendation,
                content,
                styles::body(palette),
            ) {
                let mut spans = vec![Span::raw(" ".repeat(margin))];
                spans.extend(line.spans);
                self.doc.push(Line::from(spans));
            }
        }
    }

    fn footer(&mut self) {
        let palette = self.palette;
        let app = self.app;
        let page = &app.report().page;
        let year = chrono::Local::now().year();
        let copyright = if self.glyphs.ascii { "(c)" } else { "©" };

        self.doc.push(Line::from(Span::styled(
            self.glyphs.horizontal.repeat(self.width),
            Style::default().fg(palette.bg_border),
        )));
        self.doc.blank();
        self.doc
            .push(centered(page.brand.clone(), self.width, styles::brand(palette)));
        self.doc.push(centered(
            format!("{copyright} {year} {}. {}", page.brand, page.rights),
            self.width,
            styles::subtitle(palette),
        ));
        self.doc.push(centered(
            format!("Consultor: {}", page.consultant),
            self.width,
            styles::subtitle(palette),
        ));
        self.doc.blank();
    }
}

/// What a listing card shows.
trait CardEntry: CatalogEntry {
    fn icon(&self) -> &str;
    fn card_title(&self) -> &str;
    fn card_description(&self) -> &str;
}

macro_rules! card_entry {
    ($($ty:ty),*) => {
        $(impl CardEntry for $ty {
            fn icon(&self) -> &str {
                &self.icon
            }

            fn card_title(&self) -> &str {
                &self.title
            }

            fn card_description(&self) -> &str {
                &self.description
            }
        })*
    };
}

card_entry!(Implementation, NextStep, PreventionRoutine, Indicator);

/// Draw the page into `area` and report its layout.
pub(crate) fn draw_page(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) -> PageLayout {
    let width = area.width.saturating_sub(1);
    let page = build_page(app, width, area.x, palette, glyphs);

    let max_scroll = page.layout.height.saturating_sub(area.height);
    let scroll = app.view().scroll.min(max_scroll);

    frame.render_widget(
        Paragraph::new(page.lines).scroll((scroll, 0)),
        Rect { width, ..area },
    );

    // Only render scrollbar when content exceeds viewport
    if max_scroll > 0 {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some(glyphs.arrow_up))
            .end_symbol(Some(glyphs.arrow_down))
            .track_symbol(Some(glyphs.track))
            .thumb_symbol(glyphs.thumb)
            .style(Style::default().fg(palette.text_muted));
        let mut scrollbar_state =
            ScrollbarState::new(usize::from(max_scroll)).position(usize::from(scroll));
        frame.render_stateful_widget(scrollbar, area, &mut scrollbar_state);
    }

    page.layout
}
