//! Geometry reported by the renderer after each frame.
//!
//! The renderer lays the page out as one tall document; the engine uses this
//! to drive reveals (what is on screen) and to hit-test mouse clicks.

use crate::catalog::{CatalogKind, ItemRef};

/// A screen rectangle, in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Area {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Area {
    #[must_use]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.x
            && row >= self.y
            && u32::from(column) < u32::from(self.x) + u32::from(self.width)
            && u32::from(row) < u32::from(self.y) + u32::from(self.height)
    }
}

/// Rows `top..top + height` of the document, columns `left..left + width`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocSpan {
    pub top: u16,
    pub height: u16,
    pub left: u16,
    pub width: u16,
}

impl DocSpan {
    #[must_use]
    pub fn bottom(&self) -> u16 {
        self.top.saturating_add(self.height)
    }

    /// Fraction of this span that lies inside the rows `scroll..scroll + viewport`.
    #[must_use]
    pub fn visible_fraction(&self, scroll: u16, viewport: u16) -> f32 {
        if self.height == 0 || viewport == 0 {
            return 0.0;
        }
        let view_end = scroll.saturating_add(viewport);
        let start = self.top.max(scroll);
        let end = self.bottom().min(view_end);
        if end <= start {
            return 0.0;
        }
        f32::from(end - start) / f32::from(self.height)
    }

    #[must_use]
    pub fn contains(&self, column: u16, doc_row: u16) -> bool {
        doc_row >= self.top
            && doc_row < self.bottom()
            && column >= self.left
            && u32::from(column) < u32::from(self.left) + u32::from(self.width)
    }
}

/// A listing item placed in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemSpan {
    pub item: ItemRef,
    pub span: DocSpan,
}

/// An in-document link to a section anchor (hero buttons).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkSpan {
    pub target: CatalogKind,
    pub span: DocSpan,
}

/// A header navigation entry, in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavHit {
    pub target: CatalogKind,
    pub area: Area,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLayout {
    /// Total document height in rows.
    pub height: u16,
    /// Section anchors as `(section, first row)`, in page order.
    pub anchors: Vec<(CatalogKind, u16)>,
    pub items: Vec<ItemSpan>,
    pub links: Vec<LinkSpan>,
}

impl PageLayout {
    #[must_use]
    pub fn anchor_row(&self, target: CatalogKind) -> Option<u16> {
        self.anchors
            .iter()
            .find(|(kind, _)| *kind == target)
            .map(|(_, row)| *row)
    }

    #[must_use]
    pub fn item_span(&self, item: ItemRef) -> Option<DocSpan> {
        self.items
            .iter()
            .find(|placed| placed.item == item)
            .map(|placed| placed.span)
    }

    /// Section whose anchor is the last one at or above `row`.
    #[must_use]
    pub fn section_at(&self, row: u16) -> Option<CatalogKind> {
        self.anchors
            .iter()
            .take_while(|(_, top)| *top <= row)
            .last()
            .map(|(kind, _)| *kind)
    }
}

/// Everything the renderer placed on the last frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameLayout {
    /// Screen area the scrolling page is drawn into.
    pub page_area: Area,
    pub page: PageLayout,
    pub nav: Vec<NavHit>,
    /// Screen area of the detail overlay, when one is drawn.
    pub detail_area: Option<Area>,
    /// Rows of detail content that do not fit in the overlay.
    pub detail_scroll_max: u16,
}

impl FrameLayout {
    /// Map a screen row inside the page area to a document row.
    #[must_use]
    pub fn doc_row(&self, row: u16, scroll: u16) -> Option<u16> {
        if row < self.page_area.y || row >= self.page_area.y.saturating_add(self.page_area.height) {
            return None;
        }
        Some(scroll.saturating_add(row - self.page_area.y))
    }
}
