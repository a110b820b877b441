//! Scrolling, section jumps and keyboard focus over the laid-out page.

use mercattoria_types::{CatalogKind, ItemRef, SelectError, ui::FrameLayout};

use crate::App;

impl App {
    /// Store the geometry of the frame just drawn.
    ///
    /// Clamps both scroll offsets to the new bounds and reports item
    /// visibility to the reveal tracks.
    pub fn update_layout(&mut self, layout: FrameLayout) {
        let viewport = layout.page_area.height;
        self.view.scroll_max = layout.page.height.saturating_sub(viewport);
        self.view.scroll = self.view.scroll.min(self.view.scroll_max);
        self.view.detail_scroll = self.view.detail_scroll.min(layout.detail_scroll_max);

        if !self.view.ui_options.reduced_motion {
            for placed in &layout.page.items {
                let fraction = placed.span.visible_fraction(self.view.scroll, viewport);
                if self.reveals.observe(placed.item, fraction) {
                    tracing::trace!(catalog = %placed.item.catalog, index = placed.item.index, "reveal armed");
                }
            }
        }
        self.view.layout = layout;
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let target = i32::from(self.view.scroll).saturating_add(delta);
        self.view.scroll = clamp_row(target, self.view.scroll_max);
    }

    pub fn page_down(&mut self) {
        self.scroll_by(i32::from(self.page_step()));
    }

    pub fn page_up(&mut self) {
        self.scroll_by(-i32::from(self.page_step()));
    }

    fn page_step(&self) -> u16 {
        self.view.viewport_height().saturating_sub(2).max(1)
    }

    pub fn scroll_to_top(&mut self) {
        self.view.scroll = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.view.scroll = self.view.scroll_max;
    }

    /// Scroll the section anchor to the top of the page area.
    ///
    /// Returns `false` before the first frame has been laid out.
    pub fn jump_to(&mut self, target: CatalogKind) -> bool {
        let Some(row) = self.view.layout.page.anchor_row(target) else {
            return false;
        };
        self.view.scroll = row.min(self.view.scroll_max);
        tracing::debug!(section = %target, row, "jumped to section");
        true
    }

    /// Section at the top of the page area.
    #[must_use]
    pub fn current_section(&self) -> Option<CatalogKind> {
        self.view.layout.page.section_at(self.view.scroll)
    }

    #[must_use]
    pub fn focus(&self) -> Option<ItemRef> {
        self.view.focus
    }

    pub fn focus_next(&mut self) {
        self.move_focus(true);
    }

    pub fn focus_prev(&mut self) {
        self.move_focus(false);
    }

    fn move_focus(&mut self, forward: bool) {
        let items: Vec<ItemRef> = self.report.selectable_items().collect();
        if items.is_empty() {
            return;
        }
        let current = self
            .view
            .focus
            .and_then(|focus| items.iter().position(|item| *item == focus));
        let next = match (current, forward) {
            (None, true) => 0,
            (None, false) => items.len() - 1,
            (Some(pos), true) => (pos + 1) % items.len(),
            (Some(pos), false) => (pos + items.len() - 1) % items.len(),
        };
        let item = items[next];
        self.view.focus = Some(item);
        self.ensure_visible(item);
    }

    /// Open the detail view on the focused item.
    pub fn activate_focused(&mut self) -> Result<bool, SelectError> {
        match self.view.focus {
            Some(item) => self.select(item),
            None => Ok(false),
        }
    }

    /// Scroll the least distance that puts `item` fully on screen.
    pub fn ensure_visible(&mut self, item: ItemRef) {
        let Some(span) = self.view.layout.page.item_span(item) else {
            return;
        };
        let viewport = self.view.viewport_height();
        if span.top < self.view.scroll {
            self.view.scroll = span.top;
        } else if span.bottom() > self.view.scroll.saturating_add(viewport) {
            self.view.scroll = span.bottom().saturating_sub(viewport).min(span.top);
        }
        self.view.scroll = self.view.scroll.min(self.view.scroll_max);
    }

    pub fn detail_scroll_by(&mut self, delta: i32) {
        let target = i32::from(self.view.detail_scroll).saturating_add(delta);
        self.view.detail_scroll = clamp_row(target, self.view.layout.detail_scroll_max);
    }

    /// Mouse wheel: scrolls the detail body while one is open, the page otherwise.
    pub fn scroll_wheel(&mut self, delta: i32) {
        if self.open_item().is_some() {
            self.detail_scroll_by(delta);
        } else {
            self.scroll_by(delta);
        }
    }
}

fn clamp_row(target: i32, max: u16) -> u16 {
    u16::try_from(target.clamp(0, i32::from(max))).unwrap_or(max)
}
