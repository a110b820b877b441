//! Content catalogs: the fixed, typed record collections shown by the report.
//!
//! Every catalog holds one closed entry shape. Catalogs are built once from the
//! embedded report asset and shared immutably for the rest of the process.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::ui::StaggerProfile;

/// Identifies one of the six catalogs (and the page section that lists it).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CatalogKind {
    Meetings,
    Implementations,
    NextSteps,
    PreventionRoutines,
    Indicators,
    Conclusions,
}

impl CatalogKind {
    /// All catalogs in page order.
    pub const ALL: [CatalogKind; 6] = [
        CatalogKind::Meetings,
        CatalogKind::Implementations,
        CatalogKind::NextSteps,
        CatalogKind::PreventionRoutines,
        CatalogKind::Indicators,
        CatalogKind::Conclusions,
    ];

    /// Position in [`CatalogKind::ALL`].
    #[must_use]
    pub const fn ordinal(self) -> usize {
        match self {
            CatalogKind::Meetings => 0,
            CatalogKind::Implementations => 1,
            CatalogKind::NextSteps => 2,
            CatalogKind::PreventionRoutines => 3,
            CatalogKind::Indicators => 4,
            CatalogKind::Conclusions => 5,
        }
    }

    /// In-page anchor of the section listing this catalog.
    #[must_use]
    pub const fn anchor(self) -> &'static str {
        match self {
            CatalogKind::Meetings => "timeline",
            CatalogKind::Implementations => "implementacoes",
            CatalogKind::NextSteps => "proximas-etapas",
            CatalogKind::PreventionRoutines => "rotinas-prevencao",
            CatalogKind::Indicators => "indicadores",
            CatalogKind::Conclusions => "conclusoes",
        }
    }

    /// Short label used in the header navigation.
    #[must_use]
    pub const fn nav_label(self) -> &'static str {
        match self {
            CatalogKind::Meetings => "Timeline",
            CatalogKind::Implementations => "Implementações",
            CatalogKind::NextSteps => "Próximas Etapas",
            CatalogKind::PreventionRoutines => "Rotinas",
            CatalogKind::Indicators => "Indicadores",
            CatalogKind::Conclusions => "Conclusões",
        }
    }

    /// Resolve an anchor (with or without the leading `#`).
    #[must_use]
    pub fn from_anchor(anchor: &str) -> Option<Self> {
        let anchor = anchor.strip_prefix('#').unwrap_or(anchor);
        Self::ALL.into_iter().find(|kind| kind.anchor() == anchor)
    }

    /// Whether entries of this catalog open a detail view.
    #[must_use]
    pub const fn has_detail(self) -> bool {
        !matches!(self, CatalogKind::Conclusions)
    }

    /// Entrance animation timing for items listed in this section.
    #[must_use]
    pub const fn stagger(self) -> StaggerProfile {
        match self {
            CatalogKind::Meetings => StaggerProfile::TIMELINE,
            CatalogKind::Conclusions => StaggerProfile::CONCLUSIONS,
            _ => StaggerProfile::CARDS,
        }
    }
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

/// A listing item on the page: one entry of one catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemRef {
    pub catalog: CatalogKind,
    pub index: usize,
}

impl ItemRef {
    #[must_use]
    pub const fn new(catalog: CatalogKind, index: usize) -> Self {
        Self { catalog, index }
    }
}

/// Common read access shared by every entry shape.
pub trait CatalogEntry {
    const KIND: CatalogKind;

    fn title(&self) -> &str;
}

/// Marker for entry shapes that have a detail view.
///
/// [`Conclusion`] deliberately does not implement it, so no disclosure
/// controller can exist for conclusions.
pub trait Disclosable: CatalogEntry {}

/// A consultancy meeting on the timeline.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Meeting {
    pub title: String,
    pub date: String,
    pub objective: String,
    /// Empty when the meeting lists no discussions.
    #[serde(default)]
    pub discussions: Vec<String>,
    /// Empty when the meeting lists no actions.
    #[serde(default)]
    pub actions: Vec<String>,
}

/// An implemented measure and its results.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Implementation {
    pub title: String,
    pub description: String,
    pub icon: String,
    #[serde(default)]
    pub full_description: Option<String>,
    #[serde(default)]
    pub subpoints: Vec<String>,
}

/// A planned next step (training course).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NextStep {
    pub title: String,
    pub description: String,
    pub icon: String,
    #[serde(default)]
    pub full_description: Option<String>,
    #[serde(default)]
    pub details: DetailRows,
}

/// A loss-prevention routine for one store department.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PreventionRoutine {
    pub title: String,
    pub description: String,
    pub icon: String,
    #[serde(default)]
    pub full_description: Option<String>,
    #[serde(default)]
    pub processes: Vec<String>,
}

/// A performance indicator with its formula and target.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Indicator {
    pub title: String,
    pub description: String,
    pub icon: String,
    #[serde(default)]
    pub formula: Option<String>,
    #[serde(default)]
    pub meta: Option<String>,
    #[serde(default, rename = "aplicacao")]
    pub application: Option<String>,
}

/// A closing achievement. Listed only; never opens a detail view.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Conclusion {
    pub title: String,
    pub description: String,
    pub icon: String,
}

macro_rules! catalog_entry {
    ($ty:ty, $kind:ident) => {
        impl CatalogEntry for $ty {
            const KIND: CatalogKind = CatalogKind::$kind;

            fn title(&self) -> &str {
                &self.title
            }
        }
    };
}

catalog_entry!(Meeting, Meetings);
catalog_entry!(Implementation, Implementations);
catalog_entry!(NextStep, NextSteps);
catalog_entry!(PreventionRoutine, PreventionRoutines);
catalog_entry!(Indicator, Indicators);
catalog_entry!(Conclusion, Conclusions);

impl Disclosable for Meeting {}
impl Disclosable for Implementation {}
impl Disclosable for NextStep {}
impl Disclosable for PreventionRoutine {}
impl Disclosable for Indicator {}

/// One labelled row of a next step's details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    pub key: String,
    pub value: String,
}

/// Insertion-ordered `key -> value` rows.
///
/// Deserialized from a map; rows keep the order in which the source listed
/// them, which is the order they are rendered in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailRows(Vec<DetailRow>);

impl DetailRows {
    #[must_use]
    pub fn new(rows: Vec<DetailRow>) -> Self {
        Self(rows)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|row| row.key == key)
            .map(|row| row.value.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|row| row.key.as_str())
    }
}

impl Deref for DetailRows {
    type Target = [DetailRow];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'de> Deserialize<'de> for DetailRows {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RowsVisitor;

        impl<'de> Visitor<'de> for RowsVisitor {
            type Value = DetailRows;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a table of string values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut rows = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<String, String>()? {
                    if rows.iter().any(|row: &DetailRow| row.key == key) {
                        return Err(serde::de::Error::custom(format!(
                            "duplicate detail key `{key}`"
                        )));
                    }
                    rows.push(DetailRow { key, value });
                }
                Ok(DetailRows(rows))
            }
        }

        deserializer.deserialize_map(RowsVisitor)
    }
}

/// An immutable, cheaply cloneable collection of entries of one shape.
#[derive(Debug)]
pub struct Catalog<T> {
    entries: Arc<[T]>,
}

impl<T> Catalog<T> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.entries
    }
}

impl<T: CatalogEntry> Catalog<T> {
    #[must_use]
    pub fn kind(&self) -> CatalogKind {
        T::KIND
    }

    /// Index of the first entry with the given title.
    #[must_use]
    pub fn position_of(&self, title: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.title() == title)
    }
}

impl<T> Clone for Catalog<T> {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
        }
    }
}

impl<T> From<Vec<T>> for Catalog<T> {
    fn from(entries: Vec<T>) -> Self {
        Self {
            entries: entries.into(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Catalog<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Catalog<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(Self::from)
    }
}
