//! Detail view: one body renderer per catalog plus the overlay that hosts it.

use ratatui::{
    Frame,
    layout::{Margin, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{
        Block, BorderType, Borders, Clear, Padding, Paragraph, Scrollbar, ScrollbarOrientation,
        ScrollbarState,
    },
};

use mercattoria_engine::{
    App, Area, Implementation, Indicator, Meeting, NextStep, OpenDetail, PreventionRoutine,
    humanize_key,
};

use crate::doc::{Doc, hanging};
use crate::effects::apply_modal_effect;
use crate::theme::{Glyphs, Palette, styles};

const MAX_WIDTH: u16 = 76;

/// Body lines for whichever entry is open, wrapped to `width`.
#[must_use]
pub fn detail_lines(
    detail: OpenDetail<'_>,
    width: usize,
    palette: &Palette,
    glyphs: &Glyphs,
) -> Vec<Line<'static>> {
    match detail {
        OpenDetail::Meeting(entry) => meeting_lines(entry, width, palette, glyphs),
        OpenDetail::Implementation(entry) => implementation_lines(entry, width, palette, glyphs),
        OpenDetail::NextStep(entry) => next_step_lines(entry, width, palette, glyphs),
        OpenDetail::PreventionRoutine(entry) => {
            prevention_routine_lines(entry, width, palette, glyphs)
        }
        OpenDetail::Indicator(entry) => indicator_lines(entry, width, palette, glyphs),
    }
}

struct Body<'a> {
    doc: Doc,
    width: usize,
    palette: &'a Palette,
    glyphs: &'a Glyphs,
}

impl<'a> Body<'a> {
    fn new(title: &str, width: usize, palette: &'a Palette, glyphs: &'a Glyphs) -> Self {
        let mut doc = Doc::new();
        doc.paragraph(title, 0, width, styles::hero_title(palette));
        Self {
            doc,
            width,
            palette,
            glyphs,
        }
    }

    fn heading(&mut self, text: &str) {
        self.doc.blank();
        self.doc
            .paragraph(text, 0, self.width, styles::detail_heading(self.palette));
    }

    fn text(&mut self, text: &str) {
        self.doc
            .paragraph(text, 0, self.width, styles::body(self.palette));
    }

    /// A paragraph set off by a blank line, skipped when empty.
    fn lead(&mut self, text: Option<&str>) {
        if let Some(text) = text.filter(|text| !text.trim().is_empty()) {
            self.doc.blank();
            self.text(text);
        }
    }

    fn bullets(&mut self, items: &[String], marker: &'static str) {
        let marker_style = Style::default().fg(self.palette.primary);
        for item in items {
            self.doc.extend(hanging(
                Span::styled(format!("{marker} "), marker_style),
                item,
                self.width,
                styles::body(self.palette),
            ));
        }
    }

    fn numbered(&mut self, items: &[String]) {
        let digits = items.len().to_string().len();
        let number_style = styles::key_highlight(self.palette).fg(self.palette.primary);
        for (index, item) in items.iter().enumerate() {
            self.doc.extend(hanging(
                Span::styled(format!("{:>digits$}. ", index + 1), number_style),
                item,
                self.width,
                styles::body(self.palette),
            ));
        }
    }

    fn finish(self) -> Vec<Line<'static>> {
        let mut lines = self.doc.into_lines();
        while matches!(lines.last(), Some(line) if line.width() == 0) {
            lines.pop();
        }
        lines
    }
}

#[must_use]
pub fn meeting_lines(
    meeting: &Meeting,
    width: usize,
    palette: &Palette,
    glyphs: &Glyphs,
) -> Vec<Line<'static>> {
    let mut body = Body::new(&meeting.title, width, palette, glyphs);
    body.doc.push(Line::from(Span::styled(
        format!("{} {}", glyphs.calendar, meeting.date),
        styles::key_highlight(palette).fg(palette.primary),
    )));
    if !meeting.objective.trim().is_empty() {
        body.heading("Contexto e Objetivo");
        body.text(&meeting.objective);
    }
    if !meeting.discussions.is_empty() {
        body.heading("Principais Discussões");
        body.bullets(&meeting.discussions, glyphs.bullet);
    }
    if !meeting.actions.is_empty() {
        body.heading("Ações Definidas/Implementadas");
        body.bullets(&meeting.actions, glyphs.check);
    }
    body.finish()
}

#[must_use]
pub fn implementation_lines(
    implementation: &Implementation,
    width: usize,
    palette: &Palette,
    glyphs: &Glyphs,
) -> Vec<Line<'static>> {
    let mut body = Body::new(&implementation.title, width, palette, glyphs);
    body.lead(implementation.full_description.as_deref());
    if !implementation.subpoints.is_empty() {
        body.heading("Ações e Resultados");
        body.bullets(&implementation.subpoints, glyphs.bullet);
    }
    body.finish()
}

#[must_use]
pub fn next_step_lines(
    step: &NextStep,
    width: usize,
    palette: &Palette,
    glyphs: &Glyphs,
) -> Vec<Line<'static>> {
    let mut body = Body::new(&step.title, width, palette, glyphs);
    body.lead(step.full_description.as_deref());

    let bar = Span::styled(format!("{} ", body.glyphs.vertical), Style::default().fg(palette.info));
    for row in step.details.iter() {
        body.doc.blank();
        body.doc.extend(hanging(
            bar.clone(),
            &humanize_key(&row.key),
            width,
            styles::card_title(palette),
        ));
        body.doc
            .extend(hanging(bar.clone(), &row.value, width, styles::body(palette)));
    }
    body.finish()
}

#[must_use]
pub fn prevention_routine_lines(
    routine: &PreventionRoutine,
    width: usize,
    palette: &Palette,
    glyphs: &Glyphs,
) -> Vec<Line<'static>> {
    let mut body = Body::new(&routine.title, width, palette, glyphs);
    body.lead(routine.full_description.as_deref());
    if !routine.processes.is_empty() {
        body.heading("Processos Incluídos");
        body.numbered(&routine.processes);
    }
    body.finish()
}

#[must_use]
pub fn indicator_lines(
    indicator: &Indicator,
    width: usize,
    palette: &Palette,
    glyphs: &Glyphs,
) -> Vec<Line<'static>> {
    let mut body = Body::new(&indicator.title, width, palette, glyphs);
    body.lead(Some(indicator.description.as_str()));
    for (heading, value) in [
        ("Fórmula de Cálculo", indicator.formula.as_deref()),
        ("Meta", indicator.meta.as_deref()),
        ("Aplicação", indicator.application.as_deref()),
    ] {
        if let Some(value) = value.filter(|value| !value.trim().is_empty()) {
            body.heading(heading);
            body.text(value);
        }
    }
    body.finish()
}

/// Draw the overlay for the open entry, if any.
///
/// Returns the overlay's resting area and how far its body can scroll.
pub(crate) fn draw_detail(
    frame: &mut Frame,
    app: &App,
    palette: &Palette,
    glyphs: &Glyphs,
) -> Option<(Area, u16)> {
    let detail = app.open_detail()?;
    let area = frame.area();
    if area.width < 8 || area.height < 6 {
        return None;
    }

    let width = MAX_WIDTH.min(area.width.saturating_sub(4)).max(area.width.min(24));
    let content_width = width.saturating_sub(4).max(1);
    let lines = detail_lines(detail, usize::from(content_width), palette, glyphs);

    let total = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    let max_height = area.height.saturating_sub(2).max(6);
    let height = total.saturating_add(4).min(max_height);
    let inner_height = height.saturating_sub(4);
    let scroll_max = total.saturating_sub(inner_height);
    let scroll = app.view().detail_scroll.min(scroll_max);

    let base_area = Rect {
        x: area.x + (area.width.saturating_sub(width) / 2),
        y: area.y + (area.height.saturating_sub(height) / 2),
        width,
        height,
    };
    let detail_area = match app.modal_effect() {
        Some(effect) => apply_modal_effect(effect, base_area, area),
        None => base_area,
    };

    frame.render_widget(Clear, detail_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(if glyphs.ascii {
            BorderType::Plain
        } else {
            BorderType::Rounded
        })
        .border_style(Style::default().fg(palette.primary))
        .style(Style::default().bg(palette.bg_popup))
        .padding(Padding::uniform(1))
        .title(Line::from(Span::styled(
            format!(" {} ", detail.kind().nav_label()),
            styles::brand(palette),
        )))
        .title_bottom(
            Line::from(vec![
                Span::styled(" Esc", styles::key_highlight(palette)),
                Span::styled(" fechar ", styles::key_hint(palette)),
            ])
            .right_aligned(),
        );

    frame.render_widget(
        Paragraph::new(lines).block(block).scroll((scroll, 0)),
        detail_area,
    );

    if scroll_max > 0 && detail_area == base_area {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some(glyphs.arrow_up))
            .end_symbol(Some(glyphs.arrow_down))
            .track_symbol(Some(glyphs.track))
            .thumb_symbol(glyphs.thumb)
            .style(Style::default().fg(palette.text_muted));
        let mut state = ScrollbarState::new(usize::from(scroll_max)).position(usize::from(scroll));
        frame.render_stateful_widget(
            scrollbar,
            detail_area.inner(Margin {
                vertical: 1,
                horizontal: 0,
            }),
            &mut state,
        );
    }

    Some((
        Area::new(base_area.x, base_area.y, base_area.width, base_area.height),
        scroll_max,
    ))
}

#[cfg(test)]
mod tests {
    use ratatui::text::Line;

    use super::{implementation_lines, indicator_lines, meeting_lines, next_step_lines};
    use crate::theme::{glyphs, palette};
    use mercattoria_engine::{DetailRow, DetailRows, Implementation, Indicator, Meeting, NextStep, UiOptions};

    fn text(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|span| span.content.as_ref()).collect())
            .collect()
    }

    fn render<F>(f: F) -> Vec<String>
    where
        F: FnOnce(&crate::Palette, &crate::Glyphs) -> Vec<Line<'static>>,
    {
        let options = UiOptions {
            ascii_only: true,
            ..UiOptions::default()
        };
        text(&f(&palette(options), &glyphs(options)))
    }

    fn implementation(subpoints: Vec<String>) -> Implementation {
        Implementation {
            title: "Balanço".to_string(),
            description: "Resumo".to_string(),
            icon: "📊".to_string(),
            full_description: Some("Descrição completa".to_string()),
            subpoints,
        }
    }

    #[test]
    fn implementation_without_subpoints_has_no_results_heading() {
        let lines = render(|p, g| implementation_lines(&implementation(Vec::new()), 40, p, g));
        assert_eq!(lines, ["Balanço", "", "Descrição completa"]);
    }

    #[test]
    fn implementation_subpoints_render_in_order() {
        let entry = implementation(vec!["primeiro".to_string(), "segundo".to_string()]);
        let lines = render(|p, g| implementation_lines(&entry, 40, p, g));
        assert_eq!(
            lines,
            [
                "Balanço",
                "",
                "Descrição completa",
                "",
                "Ações e Resultados",
                "* primeiro",
                "* segundo"
            ]
        );
    }

    #[test]
    fn next_step_rows_keep_insertion_order() {
        let step = NextStep {
            title: "Curso".to_string(),
            description: "d".to_string(),
            icon: "🎓".to_string(),
            full_description: None,
            details: DetailRows::new(vec![
                DetailRow {
                    key: "termino".to_string(),
                    value: "12/12".to_string(),
                },
                DetailRow {
                    key: "cargaHoraria".to_string(),
                    value: "20h".to_string(),
                },
            ]),
        };
        let lines = render(|p, g| next_step_lines(&step, 40, p, g));
        assert_eq!(
            lines,
            [
                "Curso",
                "",
                "| Termino",
                "| 12/12",
                "",
                "| Carga Horaria",
                "| 20h"
            ]
        );
    }

    #[test]
    fn meeting_sections_appear_only_when_present() {
        let meeting = Meeting {
            title: "Reunião".to_string(),
            date: "10/04/2025".to_string(),
            objective: String::new(),
            discussions: vec!["pauta".to_string()],
            actions: Vec::new(),
        };
        let lines = render(|p, g| meeting_lines(&meeting, 40, p, g));
        assert_eq!(
            lines,
            ["Reunião", "@ 10/04/2025", "", "Principais Discussões", "* pauta"]
        );
    }

    #[test]
    fn indicator_skips_missing_fields() {
        let indicator = Indicator {
            title: "Perdas".to_string(),
            description: "Mede perdas".to_string(),
            icon: "📉".to_string(),
            formula: Some("a / b".to_string()),
            meta: None,
            application: Some("Semanal".to_string()),
        };
        let lines = render(|p, g| indicator_lines(&indicator, 40, p, g));
        assert_eq!(
            lines,
            [
                "Perdas",
                "",
                "Mede perdas",
                "",
                "Fórmula de Cálculo",
                "a / b",
                "",
                "Aplicação",
                "Semanal"
            ]
        );
    }
}
