//! Pre-wrapped line documents.
//!
//! The page and the detail body are built as plain `Vec<Line>` at a known
//! width, so row positions are exact and can be reported for hit-testing.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::effects::RevealStyle;
use crate::theme::Glyphs;

/// Greedy word wrap by display width. Words wider than `width` are split
/// on grapheme boundaries.
pub(crate) fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0usize;

    for word in text.split_whitespace() {
        let word_width = word.width();
        let needed = if current.is_empty() {
            word_width
        } else {
            current_width + 1 + word_width
        };
        if needed <= width {
            if !current.is_empty() {
                current.push(' ');
                current_width += 1;
            }
            current.push_str(word);
            current_width += word_width;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }
        if word_width <= width {
            current.push_str(word);
            current_width = word_width;
            continue;
        }
        for grapheme in word.graphemes(true) {
            let grapheme_width = grapheme.width();
            if current_width + grapheme_width > width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current.push_str(grapheme);
            current_width += grapheme_width;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Wrap `text` after a fixed first-line prefix, indenting continuation lines
/// to line up with the text.
pub(crate) fn hanging(
    prefix: Span<'static>,
    text: &str,
    width: usize,
    style: Style,
) -> Vec<Line<'static>> {
    let indent = prefix.width();
    let body = width.saturating_sub(indent).max(1);
    let mut prefix = Some(prefix);
    wrap(text, body)
        .into_iter()
        .map(|chunk| {
            let lead = prefix
                .take()
                .unwrap_or_else(|| Span::raw(" ".repeat(indent)));
            Line::from(vec![lead, Span::styled(chunk, style)])
        })
        .collect()
}

pub(crate) fn centered(text: String, width: usize, style: Style) -> Line<'static> {
    let pad = width.saturating_sub(text.width()) / 2;
    Line::from(vec![Span::raw(" ".repeat(pad)), Span::styled(text, style)])
}

/// A document under construction.
#[derive(Debug, Default)]
pub(crate) struct Doc {
    lines: Vec<Line<'static>>,
}

impl Doc {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Row the next pushed line will occupy.
    pub(crate) fn row(&self) -> u16 {
        u16::try_from(self.lines.len()).unwrap_or(u16::MAX)
    }

    pub(crate) fn push(&mut self, line: Line<'static>) {
        self.lines.push(line);
    }

    pub(crate) fn extend(&mut self, lines: impl IntoIterator<Item = Line<'static>>) {
        self.lines.extend(lines);
    }

    pub(crate) fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    /// Wrapped paragraph with a left margin.
    pub(crate) fn paragraph(&mut self, text: &str, margin: usize, width: usize, style: Style) {
        for chunk in wrap(text, width) {
            self.lines.push(Line::from(vec![
                Span::raw(" ".repeat(margin)),
                Span::styled(chunk, style),
            ]));
        }
    }

    /// Wrapped paragraph with every line centered in `width`.
    pub(crate) fn centered_paragraph(&mut self, text: &str, width: usize, max: usize, style: Style) {
        for chunk in wrap(text, max.min(width)) {
            self.lines.push(centered(chunk, width, style));
        }
    }

    pub(crate) fn into_lines(self) -> Vec<Line<'static>> {
        self.lines
    }
}

/// Frame `body` in a box `width` columns wide, `margin` columns from the left.
pub(crate) fn boxed(
    body: Vec<Line<'static>>,
    margin: usize,
    width: usize,
    glyphs: &Glyphs,
    border: Style,
) -> Vec<Line<'static>> {
    let inner = width.saturating_sub(4);
    let rule = glyphs.horizontal.repeat(width.saturating_sub(2));
    let left = " ".repeat(margin);

    let mut lines = Vec::with_capacity(body.len() + 2);
    lines.push(Line::from(vec![
        Span::raw(left.clone()),
        Span::styled(
            format!("{}{rule}{}", glyphs.corner_top_left, glyphs.corner_top_right),
            border,
        ),
    ]));
    for line in body {
        let pad = inner.saturating_sub(line.width());
        let mut spans = vec![
            Span::raw(left.clone()),
            Span::styled(format!("{} ", glyphs.vertical), border),
        ];
        spans.extend(line.spans);
        spans.push(Span::raw(" ".repeat(pad)));
        spans.push(Span::styled(format!(" {}", glyphs.vertical), border));
        lines.push(Line::from(spans));
    }
    lines.push(Line::from(vec![
        Span::raw(left),
        Span::styled(
            format!(
                "{}{rule}{}",
                glyphs.corner_bottom_left, glyphs.corner_bottom_right
            ),
            border,
        ),
    ]));
    lines
}

/// Apply an entrance style to an item's lines without changing its height.
pub(crate) fn with_reveal(lines: Vec<Line<'static>>, style: RevealStyle) -> Vec<Line<'static>> {
    let height = lines.len();
    if style.blank {
        return vec![Line::default(); height];
    }
    let offset = usize::from(style.offset).min(height);
    let mut out = vec![Line::default(); offset];
    let dim = Style::default().add_modifier(Modifier::DIM);
    out.extend(lines.into_iter().take(height - offset).map(|line| {
        if style.dim {
            Line::from(
                line.spans
                    .into_iter()
                    .map(|span| span.patch_style(dim))
                    .collect::<Vec<_>>(),
            )
        } else {
            line
        }
    }));
    out
}
