//! The report content: catalogs plus the page copy around them.
//!
//! Content is compiled into the binary and parsed once at startup.

use serde::Deserialize;
use thiserror::Error;

use mercattoria_types::{
    Catalog, CatalogEntry, CatalogKind, Conclusion, Implementation, Indicator, ItemRef, Meeting,
    NextStep, PreventionRoutine,
};

const REPORT_SOURCE: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/report.toml"));

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("report content is malformed: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("catalog `{0}` has no entries")]
    EmptyCatalog(CatalogKind),
    #[error("catalog `{catalog}` entry {index} has an empty title")]
    UntitledEntry { catalog: CatalogKind, index: usize },
}

/// Copy for the hero, the conclusions sidebar and the footer.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageCopy {
    pub brand: String,
    pub hero_title: String,
    pub hero_lead: String,
    pub hero_primary: String,
    pub hero_secondary: String,
    pub timeline_hint: String,
    pub achievements_heading: String,
    pub impact_heading: String,
    pub impact_lead: String,
    pub recommendations: Vec<String>,
    pub rights: String,
    pub consultant: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SectionCopy {
    pub title: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SectionsCopy {
    pub timeline: SectionCopy,
    pub implementations: SectionCopy,
    pub next_steps: SectionCopy,
    pub prevention_routines: SectionCopy,
    pub indicators: SectionCopy,
    pub conclusions: SectionCopy,
}

impl SectionsCopy {
    #[must_use]
    pub fn get(&self, kind: CatalogKind) -> &SectionCopy {
        match kind {
            CatalogKind::Meetings => &self.timeline,
            CatalogKind::Implementations => &self.implementations,
            CatalogKind::NextSteps => &self.next_steps,
            CatalogKind::PreventionRoutines => &self.prevention_routines,
            CatalogKind::Indicators => &self.indicators,
            CatalogKind::Conclusions => &self.conclusions,
        }
    }
}

/// The whole report. Cloning shares the catalogs.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Report {
    pub page: PageCopy,
    pub sections: SectionsCopy,
    pub meetings: Catalog<Meeting>,
    pub implementations: Catalog<Implementation>,
    pub next_steps: Catalog<NextStep>,
    pub prevention_routines: Catalog<PreventionRoutine>,
    pub indicators: Catalog<Indicator>,
    pub conclusions: Catalog<Conclusion>,
}

impl Report {
    /// The report compiled into the binary.
    pub fn builtin() -> Result<Self, ContentError> {
        Self::parse(REPORT_SOURCE)
    }

    pub fn parse(source: &str) -> Result<Self, ContentError> {
        let report: Report = toml::from_str(source)?;
        report.validate()?;
        Ok(report)
    }

    fn validate(&self) -> Result<(), ContentError> {
        fn check<T: CatalogEntry>(catalog: &Catalog<T>) -> Result<(), ContentError> {
            if catalog.is_empty() {
                return Err(ContentError::EmptyCatalog(T::KIND));
            }
            match catalog.iter().position(|entry| entry.title().trim().is_empty()) {
                Some(index) => Err(ContentError::UntitledEntry {
                    catalog: T::KIND,
                    index,
                }),
                None => Ok(()),
            }
        }

        check(&self.meetings)?;
        check(&self.implementations)?;
        check(&self.next_steps)?;
        check(&self.prevention_routines)?;
        check(&self.indicators)?;
        check(&self.conclusions)
    }

    #[must_use]
    pub fn len_of(&self, kind: CatalogKind) -> usize {
        match kind {
            CatalogKind::Meetings => self.meetings.len(),
            CatalogKind::Implementations => self.implementations.len(),
            CatalogKind::NextSteps => self.next_steps.len(),
            CatalogKind::PreventionRoutines => self.prevention_routines.len(),
            CatalogKind::Indicators => self.indicators.len(),
            CatalogKind::Conclusions => self.conclusions.len(),
        }
    }

    #[must_use]
    pub fn title_of(&self, item: ItemRef) -> Option<&str> {
        fn title<T: CatalogEntry>(catalog: &Catalog<T>, index: usize) -> Option<&str> {
            catalog.get(index).map(|entry| entry.title())
        }

        match item.catalog {
            CatalogKind::Meetings => title(&self.meetings, item.index),
            CatalogKind::Implementations => title(&self.implementations, item.index),
            CatalogKind::NextSteps => title(&self.next_steps, item.index),
            CatalogKind::PreventionRoutines => title(&self.prevention_routines, item.index),
            CatalogKind::Indicators => title(&self.indicators, item.index),
            CatalogKind::Conclusions => title(&self.conclusions, item.index),
        }
    }

    /// Every listing item in page order.
    pub fn items(&self) -> impl Iterator<Item = ItemRef> + '_ {
        CatalogKind::ALL
            .into_iter()
            .flat_map(move |kind| (0..self.len_of(kind)).map(move |index| ItemRef::new(kind, index)))
    }

    /// Listing items that open a detail view, in page order.
    pub fn selectable_items(&self) -> impl Iterator<Item = ItemRef> + '_ {
        self.items().filter(|item| item.catalog.has_detail())
    }
}
