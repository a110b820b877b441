//! Modal animation effects for the detail overlay.

use std::time::Duration;

use super::animation::{AnimPhase, EffectTimer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalEffectKind {
    #[default]
    PopScale,
    SlideUp,
}

impl ModalEffectKind {
    /// Parse the config spelling (`pop` / `slide`).
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "pop" | "pop-scale" | "scale" => Some(ModalEffectKind::PopScale),
            "slide" | "slide-up" => Some(ModalEffectKind::SlideUp),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ModalEffect {
    kind: ModalEffectKind,
    timer: EffectTimer,
}

impl ModalEffect {
    #[must_use]
    pub fn new(kind: ModalEffectKind, duration: Duration) -> Self {
        Self {
            kind,
            timer: EffectTimer::new(duration),
        }
    }

    #[must_use]
    pub fn pop_scale(duration: Duration) -> Self {
        Self::new(ModalEffectKind::PopScale, duration)
    }

    #[must_use]
    pub fn slide_up(duration: Duration) -> Self {
        Self::new(ModalEffectKind::SlideUp, duration)
    }

    pub fn advance(&mut self, delta: Duration) {
        self.timer.advance(delta);
    }

    #[must_use]
    pub fn phase(&self) -> AnimPhase {
        self.timer.phase()
    }

    #[must_use]
    pub fn progress(&self) -> f32 {
        self.timer.progress()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.timer.is_finished()
    }

    #[must_use]
    pub fn kind(&self) -> ModalEffectKind {
        self.kind
    }
}
