//! Color theme and glyphs for the Mercattoria TUI.
//!
//! Teal and green on a dark ground by default, with an optional high-contrast override.

use ratatui::style::{Color, Modifier, Style};

use mercattoria_engine::UiOptions;

/// Brand palette constants.
mod colors {
    use super::Color;

    // === Backgrounds ===
    pub const BG_DARK: Color = Color::Rgb(16, 24, 28);
    pub const BG_PANEL: Color = Color::Rgb(24, 35, 40);
    pub const BG_HIGHLIGHT: Color = Color::Rgb(30, 52, 56);
    pub const BG_POPUP: Color = Color::Rgb(28, 40, 46);
    pub const BG_BORDER: Color = Color::Rgb(70, 96, 102);

    // === Foregrounds ===
    pub const TEXT_PRIMARY: Color = Color::Rgb(229, 231, 235); // gray-200
    pub const TEXT_SECONDARY: Color = Color::Rgb(209, 213, 219); // gray-300
    pub const TEXT_MUTED: Color = Color::Rgb(156, 163, 175); // gray-400
    pub const TEXT_DISABLED: Color = Color::Rgb(75, 85, 99); // gray-600

    // === Brand ===
    pub const TEAL: Color = Color::Rgb(20, 184, 166); // teal-500
    pub const TEAL_DIM: Color = Color::Rgb(15, 118, 110); // teal-700
    pub const TEAL_LIGHT: Color = Color::Rgb(94, 234, 212); // teal-300

    // === Accents ===
    pub const GREEN: Color = Color::Rgb(74, 222, 128); // green-400
    pub const YELLOW: Color = Color::Rgb(250, 204, 21); // yellow-400
    pub const BLUE: Color = Color::Rgb(96, 165, 250); // blue-400
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_dark: Color,
    pub bg_panel: Color,
    pub bg_highlight: Color,
    pub bg_popup: Color,
    pub bg_border: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub text_disabled: Color,
    pub primary: Color,
    pub primary_dim: Color,
    pub accent: Color,
    pub success: Color,
    pub highlight: Color,
    pub info: Color,
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bg_dark: colors::BG_DARK,
            bg_panel: colors::BG_PANEL,
            bg_highlight: colors::BG_HIGHLIGHT,
            bg_popup: colors::BG_POPUP,
            bg_border: colors::BG_BORDER,
            text_primary: colors::TEXT_PRIMARY,
            text_secondary: colors::TEXT_SECONDARY,
            text_muted: colors::TEXT_MUTED,
            text_disabled: colors::TEXT_DISABLED,
            primary: colors::TEAL,
            primary_dim: colors::TEAL_DIM,
            accent: colors::TEAL_LIGHT,
            success: colors::GREEN,
            highlight: colors::YELLOW,
            info: colors::BLUE,
        }
    }

    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            bg_dark: Color::Black,
            bg_panel: Color::Black,
            bg_highlight: Color::DarkGray,
            bg_popup: Color::Black,
            bg_border: Color::White,
            text_primary: Color::White,
            text_secondary: Color::White,
            text_muted: Color::Gray,
            text_disabled: Color::DarkGray,
            primary: Color::Cyan,
            primary_dim: Color::Cyan,
            accent: Color::White,
            success: Color::Green,
            highlight: Color::Yellow,
            info: Color::Cyan,
        }
    }
}

#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    if options.high_contrast {
        Palette::high_contrast()
    } else {
        Palette::standard()
    }
}

/// ASCII/Unicode glyphs for markers and card borders.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub bullet: &'static str,
    pub check: &'static str,
    pub arrow: &'static str,
    pub selected: &'static str,
    pub timeline_dot: &'static str,
    pub timeline_rail: &'static str,
    pub calendar: &'static str,
    pub corner_top_left: &'static str,
    pub corner_top_right: &'static str,
    pub corner_bottom_left: &'static str,
    pub corner_bottom_right: &'static str,
    pub horizontal: &'static str,
    pub vertical: &'static str,
    pub arrow_up: &'static str,
    pub arrow_down: &'static str,
    pub track: &'static str,
    pub thumb: &'static str,
    /// Shown instead of entry icons when icons cannot be drawn.
    pub icon_fallback: &'static str,
    pub ascii: bool,
}

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            bullet: "*",
            check: "+",
            arrow: "->",
            selected: ">",
            timeline_dot: "o",
            timeline_rail: "|",
            calendar: "@",
            corner_top_left: "+",
            corner_top_right: "+",
            corner_bottom_left: "+",
            corner_bottom_right: "+",
            horizontal: "-",
            vertical: "|",
            arrow_up: "^",
            arrow_down: "v",
            track: "|",
            thumb: "#",
            icon_fallback: "*",
            ascii: true,
        }
    } else {
        Glyphs {
            bullet: "•",
            check: "✓",
            arrow: "→",
            selected: "▸",
            timeline_dot: "●",
            timeline_rail: "│",
            calendar: "◷",
            corner_top_left: "╭",
            corner_top_right: "╮",
            corner_bottom_left: "╰",
            corner_bottom_right: "╯",
            horizontal: "─",
            vertical: "│",
            arrow_up: "↑",
            arrow_down: "↓",
            track: "│",
            thumb: "█",
            icon_fallback: "◆",
            ascii: false,
        }
    }
}

impl Glyphs {
    /// The entry icon, or the fallback marker in ASCII mode.
    #[must_use]
    pub fn icon<'a>(&self, icon: &'a str) -> &'a str {
        if self.ascii || icon.trim().is_empty() {
            self.icon_fallback
        } else {
            icon
        }
    }
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{Modifier, Palette, Style};

    #[must_use]
    pub fn brand(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn hero_title(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn section_title(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn subtitle(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn body(palette: &Palette) -> Style {
        Style::default().fg(palette.text_secondary)
    }

    #[must_use]
    pub fn card_title(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn detail_heading(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn button_primary(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.bg_dark)
            .bg(palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn button_secondary(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn nav_active(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    #[must_use]
    pub fn key_hint(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn key_highlight(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.highlight)
            .add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use mercattoria_engine::UiOptions;

    use super::{glyphs, palette};

    #[test]
    fn ascii_glyphs_stay_ascii() {
        let options = UiOptions {
            ascii_only: true,
            ..UiOptions::default()
        };
        let glyphs = glyphs(options);
        for glyph in [
            glyphs.bullet,
            glyphs.check,
            glyphs.arrow,
            glyphs.selected,
            glyphs.timeline_dot,
            glyphs.timeline_rail,
            glyphs.corner_top_left,
            glyphs.horizontal,
            glyphs.vertical,
            glyphs.thumb,
            glyphs.icon_fallback,
        ] {
            assert!(glyph.is_ascii(), "{glyph:?} is not ascii");
        }
    }

    #[test]
    fn ascii_mode_replaces_entry_icons() {
        let ascii = glyphs(UiOptions {
            ascii_only: true,
            ..UiOptions::default()
        });
        assert_eq!(ascii.icon("📊"), "*");

        let unicode = glyphs(UiOptions::default());
        assert_eq!(unicode.icon("📊"), "📊");
        assert_eq!(unicode.icon(""), unicode.icon_fallback);
    }

    #[test]
    fn high_contrast_uses_plain_colors() {
        let palette = palette(UiOptions {
            high_contrast: true,
            ..UiOptions::default()
        });
        assert_eq!(palette.bg_dark, ratatui::style::Color::Black);
        assert_eq!(palette.text_primary, ratatui::style::Color::White);
    }
}
