//! Entrance effects for the detail overlay and listing items.

use ratatui::layout::Rect;

use mercattoria_engine::{ModalEffect, ModalEffectKind, RevealPhase};

/// Apply a modal effect to transform the base rectangle.
#[must_use]
pub fn apply_modal_effect(effect: &ModalEffect, base: Rect, viewport: Rect) -> Rect {
    let t = ease_out_cubic(effect.progress());
    match effect.kind() {
        ModalEffectKind::PopScale => scale_rect(base, 0.6 + 0.4 * t),
        ModalEffectKind::SlideUp => {
            let viewport_bottom = viewport.y.saturating_add(viewport.height);
            let base_bottom = base.y.saturating_add(base.height);
            let max_offset = viewport_bottom.saturating_sub(base_bottom);
            let offset = max_offset.min(base.height.saturating_div(2)).min(6);
            let y_offset = ((1.0 - t) * f32::from(offset)).round() as u16;
            Rect {
                y: base.y.saturating_add(y_offset),
                ..base
            }
        }
    }
}

/// How far a listing item is from its resting place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealStyle {
    /// Rows to push the item down inside its own span.
    pub offset: u16,
    /// Draw in muted colors.
    pub dim: bool,
    /// Draw nothing but blank rows.
    pub blank: bool,
}

impl RevealStyle {
    pub const RESTING: Self = Self {
        offset: 0,
        dim: false,
        blank: false,
    };
}

/// Terminal rendition of a fade-and-slide entrance.
#[must_use]
pub fn reveal_style(phase: RevealPhase) -> RevealStyle {
    match phase {
        RevealPhase::Hidden | RevealPhase::Pending => RevealStyle {
            offset: 0,
            dim: false,
            blank: true,
        },
        RevealPhase::Revealing { progress } => {
            let t = ease_out_cubic(progress);
            RevealStyle {
                offset: ((1.0 - t) * 2.0).round() as u16,
                dim: t < 0.6,
                blank: false,
            }
        }
        RevealPhase::Shown => RevealStyle::RESTING,
    }
}

fn scale_rect(base: Rect, scale: f32) -> Rect {
    let width = (f32::from(base.width) * scale).round() as u16;
    let height = (f32::from(base.height) * scale).round() as u16;
    let width = width.max(1).min(base.width);
    let height = height.max(1).min(base.height);
    let x = base.x + (base.width.saturating_sub(width) / 2);
    let y = base.y + (base.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use ratatui::layout::Rect;

    use super::{RevealStyle, apply_modal_effect, reveal_style};
    use mercattoria_engine::{ModalEffect, RevealPhase};

    const BASE: Rect = Rect {
        x: 10,
        y: 5,
        width: 40,
        height: 20,
    };
    const VIEWPORT: Rect = Rect {
        x: 0,
        y: 0,
        width: 60,
        height: 40,
    };

    #[test]
    fn pop_scale_starts_small_and_centered() {
        let effect = ModalEffect::pop_scale(Duration::from_millis(300));
        let rect = apply_modal_effect(&effect, BASE, VIEWPORT);
        assert_eq!(rect.width, 24);
        assert_eq!(rect.height, 12);
        assert_eq!(rect.x, 18);
        assert_eq!(rect.y, 9);
    }

    #[test]
    fn finished_effects_land_on_the_base_rect() {
        for mut effect in [
            ModalEffect::pop_scale(Duration::from_millis(300)),
            ModalEffect::slide_up(Duration::from_millis(300)),
        ] {
            effect.advance(Duration::from_secs(1));
            assert_eq!(apply_modal_effect(&effect, BASE, VIEWPORT), BASE);
        }
    }

    #[test]
    fn slide_up_starts_lower() {
        let effect = ModalEffect::slide_up(Duration::from_millis(300));
        let rect = apply_modal_effect(&effect, BASE, VIEWPORT);
        assert_eq!(rect.y, BASE.y + 6);
        assert_eq!(rect.height, BASE.height);
    }

    #[test]
    fn hidden_items_are_blank_and_shown_items_rest() {
        assert!(reveal_style(RevealPhase::Hidden).blank);
        assert!(reveal_style(RevealPhase::Pending).blank);
        assert_eq!(reveal_style(RevealPhase::Shown), RevealStyle::RESTING);
        let early = reveal_style(RevealPhase::Revealing { progress: 0.0 });
        assert_eq!(early.offset, 2);
        assert!(early.dim);
    }
}
