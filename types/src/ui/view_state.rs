//! View state for rendering.
//!
//! Groups everything the renderer reads or reports back, separate from the
//! report content and the disclosure controllers.

use std::time::{Duration, Instant};

use super::{FrameLayout, ModalEffect, ModalEffectKind};
use crate::catalog::ItemRef;

/// UI configuration options derived from config/environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiOptions {
    pub ascii_only: bool,
    pub high_contrast: bool,
    /// Disable entrance reveals and modal effects.
    pub reduced_motion: bool,
    /// Capture the mouse for click-to-open and wheel scrolling.
    pub mouse: bool,
    pub modal_effect: ModalEffectKind,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            ascii_only: false,
            high_contrast: false,
            reduced_motion: false,
            mouse: true,
            modal_effect: ModalEffectKind::PopScale,
        }
    }
}

#[derive(Debug)]
pub struct ViewState {
    /// Page scroll offset from the top, in rows.
    pub scroll: u16,
    /// Maximum page scroll offset (document height - viewport).
    pub scroll_max: u16,
    /// Detail overlay body scroll offset.
    pub detail_scroll: u16,
    pub modal_effect: Option<ModalEffect>,
    /// Keyboard focus among selectable listing items.
    pub focus: Option<ItemRef>,
    pub ui_options: UiOptions,
    /// Timestamp of last frame (for animation timing).
    pub last_frame: Instant,
    /// Time between the two most recent ticks.
    pub frame_delta: Duration,
    /// Geometry of the last drawn frame.
    pub layout: FrameLayout,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            scroll: 0,
            scroll_max: 0,
            detail_scroll: 0,
            modal_effect: None,
            focus: None,
            ui_options: UiOptions::default(),
            last_frame: Instant::now(),
            frame_delta: Duration::ZERO,
            layout: FrameLayout::default(),
        }
    }
}

impl ViewState {
    #[must_use]
    pub fn new(ui_options: UiOptions) -> Self {
        Self {
            ui_options,
            ..Self::default()
        }
    }

    /// Viewport height of the scrolling page on the last frame.
    #[must_use]
    pub fn viewport_height(&self) -> u16 {
        self.layout.page_area.height
    }
}
