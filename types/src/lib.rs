//! Core domain types for the Mercattoria report viewer.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies:
//! the content catalogs, the disclosure controller, and the UI state the renderer and
//! the engine share.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory

mod catalog;
mod disclosure;
mod text;
pub mod ui;

pub use catalog::{
    Catalog, CatalogEntry, CatalogKind, Conclusion, DetailRow, DetailRows, Disclosable,
    Implementation, Indicator, ItemRef, Meeting, NextStep, PreventionRoutine,
};
pub use disclosure::{Disclosure, DisclosureState, SelectError};
pub use text::humanize_key;
