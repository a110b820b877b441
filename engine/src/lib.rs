//! Core engine for Mercattoria - report state and interaction.
//!
//! This crate contains the App state machine without TUI dependencies.

use std::time::{Duration, Instant};

use anyhow::Context;

pub use mercattoria_types::{
    Catalog, CatalogEntry, CatalogKind, Conclusion, DetailRow, DetailRows, Disclosable,
    Disclosure, DisclosureState, Implementation, Indicator, ItemRef, Meeting, NextStep,
    PreventionRoutine, SelectError, humanize_key,
};
pub use mercattoria_types::ui::{
    Area, DocSpan, FrameLayout, ItemSpan, LinkSpan, ModalEffect, ModalEffectKind, NavHit,
    PageLayout, RevealPhase, UiOptions, ViewState,
};

mod config;
mod content;
mod navigation;
mod reveal;

pub use config::{
    AppConfig, CONFIG_ENV, ConfigError, REDUCED_MOTION_ENV, ReportConfig, config_path,
    resolve_ui_options,
};
pub use content::{ContentError, PageCopy, Report, SectionCopy, SectionsCopy};
pub use reveal::RevealBoard;

/// Length of the detail overlay entrance effect.
pub const MODAL_EFFECT_DURATION: Duration = Duration::from_millis(300);

/// The entry currently shown in the detail view.
#[derive(Debug, Clone, Copy)]
pub enum OpenDetail<'a> {
    Meeting(&'a Meeting),
    Implementation(&'a Implementation),
    NextStep(&'a NextStep),
    PreventionRoutine(&'a PreventionRoutine),
    Indicator(&'a Indicator),
}

impl OpenDetail<'_> {
    #[must_use]
    pub fn kind(&self) -> CatalogKind {
        match self {
            OpenDetail::Meeting(_) => CatalogKind::Meetings,
            OpenDetail::Implementation(_) => CatalogKind::Implementations,
            OpenDetail::NextStep(_) => CatalogKind::NextSteps,
            OpenDetail::PreventionRoutine(_) => CatalogKind::PreventionRoutines,
            OpenDetail::Indicator(_) => CatalogKind::Indicators,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            OpenDetail::Meeting(entry) => entry.title(),
            OpenDetail::Implementation(entry) => entry.title(),
            OpenDetail::NextStep(entry) => entry.title(),
            OpenDetail::PreventionRoutine(entry) => entry.title(),
            OpenDetail::Indicator(entry) => entry.title(),
        }
    }
}

/// What a mouse click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Landed inside the open detail view.
    Consumed,
    /// Landed outside the open detail view and closed it.
    Closed,
    Opened(ItemRef),
    Navigated(CatalogKind),
    Ignored,
}

#[derive(Debug)]
pub struct App {
    report: Report,
    meetings: Disclosure<Meeting>,
    implementations: Disclosure<Implementation>,
    next_steps: Disclosure<NextStep>,
    prevention_routines: Disclosure<PreventionRoutine>,
    indicators: Disclosure<Indicator>,
    reveals: RevealBoard,
    view: ViewState,
    should_quit: bool,
}

impl App {
    /// Load the built-in report and apply configuration plus environment overrides.
    pub fn new(config: Option<&ReportConfig>) -> anyhow::Result<Self> {
        let report = Report::builtin().context("failed to load the built-in report")?;
        let options = resolve_ui_options(config);
        tracing::info!(
            reduced_motion = options.reduced_motion,
            mouse = options.mouse,
            "report loaded"
        );
        Ok(Self::with_report(report, options))
    }

    #[must_use]
    pub fn with_report(report: Report, ui_options: UiOptions) -> Self {
        let mut reveals = RevealBoard::new(&report);
        if ui_options.reduced_motion {
            reveals.show_all();
        }
        Self {
            meetings: Disclosure::new(report.meetings.clone()),
            implementations: Disclosure::new(report.implementations.clone()),
            next_steps: Disclosure::new(report.next_steps.clone()),
            prevention_routines: Disclosure::new(report.prevention_routines.clone()),
            indicators: Disclosure::new(report.indicators.clone()),
            reveals,
            view: ViewState::new(ui_options),
            should_quit: false,
            report,
        }
    }

    #[must_use]
    pub fn report(&self) -> &Report {
        &self.report
    }

    #[must_use]
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.view.ui_options
    }

    /// Apply new UI options. Turning reduced motion on cancels every running
    /// reveal and the modal effect.
    pub fn set_ui_options(&mut self, options: UiOptions) {
        if options.reduced_motion && !self.view.ui_options.reduced_motion {
            self.reveals.show_all();
            self.view.modal_effect = None;
        }
        self.view.ui_options = options;
    }

    // ------------------------------------------------------------------
    // Timing
    // ------------------------------------------------------------------

    /// Advance animations by the wall-clock time since the previous tick.
    pub fn tick(&mut self) {
        let now = Instant::now();
        let delta = now.duration_since(self.view.last_frame);
        self.view.last_frame = now;
        self.advance(delta);
    }

    /// Advance animations by an explicit amount of time.
    pub fn advance(&mut self, delta: Duration) {
        self.view.frame_delta = delta;
        if let Some(effect) = self.view.modal_effect.as_mut() {
            effect.advance(delta);
            if effect.is_finished() {
                self.view.modal_effect = None;
            }
        }
        self.reveals.advance(delta);
    }

    #[must_use]
    pub fn modal_effect(&self) -> Option<&ModalEffect> {
        self.view.modal_effect.as_ref()
    }

    #[must_use]
    pub fn reveal_phase(&self, item: ItemRef) -> RevealPhase {
        self.reveals.phase(item)
    }

    /// Whether anything still needs frames to finish animating.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.view.modal_effect.is_some() || self.reveals.is_animating()
    }

    // ------------------------------------------------------------------
    // Disclosure
    // ------------------------------------------------------------------

    #[must_use]
    pub fn meetings(&self) -> &Disclosure<Meeting> {
        &self.meetings
    }

    #[must_use]
    pub fn implementations(&self) -> &Disclosure<Implementation> {
        &self.implementations
    }

    #[must_use]
    pub fn next_steps(&self) -> &Disclosure<NextStep> {
        &self.next_steps
    }

    #[must_use]
    pub fn prevention_routines(&self) -> &Disclosure<PreventionRoutine> {
        &self.prevention_routines
    }

    #[must_use]
    pub fn indicators(&self) -> &Disclosure<Indicator> {
        &self.indicators
    }

    /// Open the detail view on `item`.
    ///
    /// Returns `Ok(false)` for catalogs without a detail view. Any other open
    /// detail is closed so at most one is shown.
    pub fn select(&mut self, item: ItemRef) -> Result<bool, SelectError> {
        let was_open = self.open_item().is_some();
        match item.catalog {
            CatalogKind::Meetings => {
                self.meetings.select(item.index)?;
            }
            CatalogKind::Implementations => {
                self.implementations.select(item.index)?;
            }
            CatalogKind::NextSteps => {
                self.next_steps.select(item.index)?;
            }
            CatalogKind::PreventionRoutines => {
                self.prevention_routines.select(item.index)?;
            }
            CatalogKind::Indicators => {
                self.indicators.select(item.index)?;
            }
            CatalogKind::Conclusions => return Ok(false),
        }
        self.close_others(item.catalog);

        self.view.focus = Some(item);
        self.view.detail_scroll = 0;
        if !was_open && !self.view.ui_options.reduced_motion {
            self.view.modal_effect = Some(ModalEffect::new(
                self.view.ui_options.modal_effect,
                MODAL_EFFECT_DURATION,
            ));
        }
        tracing::debug!(
            catalog = %item.catalog,
            index = item.index,
            title = self.report.title_of(item).unwrap_or_default(),
            "detail opened"
        );
        Ok(true)
    }

    fn close_others(&mut self, keep: CatalogKind) {
        if keep != CatalogKind::Meetings {
            self.meetings.close();
        }
        if keep != CatalogKind::Implementations {
            self.implementations.close();
        }
        if keep != CatalogKind::NextSteps {
            self.next_steps.close();
        }
        if keep != CatalogKind::PreventionRoutines {
            self.prevention_routines.close();
        }
        if keep != CatalogKind::Indicators {
            self.indicators.close();
        }
    }

    /// Close whichever detail is open. Returns `false` when none was.
    pub fn close_detail(&mut self) -> bool {
        let closed = [
            self.meetings.close(),
            self.implementations.close(),
            self.next_steps.close(),
            self.prevention_routines.close(),
            self.indicators.close(),
        ]
        .contains(&true);
        self.view.modal_effect = None;
        self.view.detail_scroll = 0;
        if closed {
            tracing::debug!("detail closed");
        }
        closed
    }

    /// The entry shown in the detail view, if any.
    #[must_use]
    pub fn open_detail(&self) -> Option<OpenDetail<'_>> {
        if let Some(entry) = self.indicators.current() {
            return Some(OpenDetail::Indicator(entry));
        }
        if let Some(entry) = self.prevention_routines.current() {
            return Some(OpenDetail::PreventionRoutine(entry));
        }
        if let Some(entry) = self.next_steps.current() {
            return Some(OpenDetail::NextStep(entry));
        }
        if let Some(entry) = self.implementations.current() {
            return Some(OpenDetail::Implementation(entry));
        }
        self.meetings.current().map(OpenDetail::Meeting)
    }

    #[must_use]
    pub fn open_item(&self) -> Option<ItemRef> {
        [
            (CatalogKind::Indicators, self.indicators.selected_index()),
            (
                CatalogKind::PreventionRoutines,
                self.prevention_routines.selected_index(),
            ),
            (CatalogKind::NextSteps, self.next_steps.selected_index()),
            (
                CatalogKind::Implementations,
                self.implementations.selected_index(),
            ),
            (CatalogKind::Meetings, self.meetings.selected_index()),
        ]
        .into_iter()
        .find_map(|(kind, index)| index.map(|index| ItemRef::new(kind, index)))
    }

    // ------------------------------------------------------------------
    // Pointer
    // ------------------------------------------------------------------

    /// Handle a left click at screen position (`column`, `row`).
    ///
    /// While a detail is open the overlay captures every click: inside it the
    /// click is consumed, outside it closes the detail.
    pub fn click(&mut self, column: u16, row: u16) -> ClickOutcome {
        if self.open_item().is_some() {
            let inside = self
                .view
                .layout
                .detail_area
                .is_some_and(|area| area.contains(column, row));
            if inside {
                return ClickOutcome::Consumed;
            }
            self.close_detail();
            return ClickOutcome::Closed;
        }

        let layout = &self.view.layout;
        let nav_target = layout
            .nav
            .iter()
            .find(|hit| hit.area.contains(column, row))
            .map(|hit| hit.target);
        if let Some(target) = nav_target {
            self.jump_to(target);
            return ClickOutcome::Navigated(target);
        }

        let Some(doc_row) = layout.doc_row(row, self.view.scroll) else {
            return ClickOutcome::Ignored;
        };
        let hit_item = layout
            .page
            .items
            .iter()
            .find(|placed| placed.span.contains(column, doc_row))
            .map(|placed| placed.item);
        let hit_link = layout
            .page
            .links
            .iter()
            .find(|link| link.span.contains(column, doc_row))
            .map(|link| link.target);

        if let Some(item) = hit_item {
            if !item.catalog.has_detail() {
                return ClickOutcome::Ignored;
            }
            return match self.select(item) {
                Ok(true) => ClickOutcome::Opened(item),
                Ok(false) => ClickOutcome::Ignored,
                Err(err) => {
                    tracing::warn!("stale layout: {err}");
                    ClickOutcome::Ignored
                }
            };
        }
        if let Some(target) = hit_link {
            self.jump_to(target);
            return ClickOutcome::Navigated(target);
        }

        ClickOutcome::Ignored
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
