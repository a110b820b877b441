//! Entrance state for every listing item on the page.

use std::time::Duration;

use mercattoria_types::{
    CatalogKind, ItemRef,
    ui::{RevealPhase, RevealTrack},
};

use crate::content::Report;

/// One [`RevealTrack`] per listing item, grouped by catalog.
#[derive(Debug, Clone)]
pub struct RevealBoard {
    tracks: [Vec<RevealTrack>; 6],
}

impl RevealBoard {
    #[must_use]
    pub fn new(report: &Report) -> Self {
        let tracks = CatalogKind::ALL.map(|kind| {
            (0..report.len_of(kind))
                .map(|index| RevealTrack::new(kind.stagger(), index))
                .collect()
        });
        Self { tracks }
    }

    fn track_mut(&mut self, item: ItemRef) -> Option<&mut RevealTrack> {
        self.tracks[item.catalog.ordinal()].get_mut(item.index)
    }

    /// Report the visible fraction of an item. Returns `true` when this
    /// observation armed the item's reveal.
    pub fn observe(&mut self, item: ItemRef, visible_fraction: f32) -> bool {
        self.track_mut(item)
            .is_some_and(|track| track.observe(visible_fraction))
    }

    pub fn advance(&mut self, delta: Duration) {
        for track in self.tracks.iter_mut().flatten() {
            track.advance(delta);
        }
    }

    /// Unknown items render as shown.
    #[must_use]
    pub fn phase(&self, item: ItemRef) -> RevealPhase {
        self.tracks[item.catalog.ordinal()]
            .get(item.index)
            .map_or(RevealPhase::Shown, RevealTrack::phase)
    }

    pub fn show_all(&mut self) {
        for track in self.tracks.iter_mut().flatten() {
            track.show_now();
        }
    }

    /// Drop every observation and pending timer.
    pub fn reset(&mut self) {
        for track in self.tracks.iter_mut().flatten() {
            track.reset();
        }
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.tracks.iter().flatten().any(RevealTrack::is_animating)
    }
}
