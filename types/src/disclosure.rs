//! Selection and detail-disclosure state for one catalog.
//!
//! A [`Disclosure`] is either `Closed` or `Open` on exactly one entry of the
//! catalog it owns. Selection goes through an index that is checked against
//! that catalog, so an open controller always points at a real entry.
//!
//! Conclusions have no detail view, so no controller can be built for them:
//!
//! ```compile_fail
//! use mercattoria_types::{Catalog, Conclusion, Disclosure};
//!
//! let conclusions: Catalog<Conclusion> = Vec::new().into();
//! let _ = Disclosure::new(conclusions);
//! ```

use thiserror::Error;

use crate::catalog::{Catalog, CatalogKind, Disclosable};

/// Observable state of a disclosure controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisclosureState {
    #[default]
    Closed,
    /// Detail view open on the entry at this catalog index.
    Open(usize),
}

/// Selecting an index that does not exist in the owning catalog.
///
/// This is a caller bug, not a user-facing failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("catalog `{catalog}` has no entry {index} (it holds {len})")]
pub struct SelectError {
    pub catalog: CatalogKind,
    pub index: usize,
    pub len: usize,
}

#[derive(Debug, Clone)]
pub struct Disclosure<T> {
    catalog: Catalog<T>,
    state: DisclosureState,
}

impl<T: Disclosable> Disclosure<T> {
    #[must_use]
    pub fn new(catalog: Catalog<T>) -> Self {
        Self {
            catalog,
            state: DisclosureState::Closed,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog<T> {
        &self.catalog
    }

    /// Open the detail view on the entry at `index`.
    ///
    /// Selecting while already open replaces the shown entry without passing
    /// through `Closed`. An out-of-range index leaves the state untouched.
    pub fn select(&mut self, index: usize) -> Result<&T, SelectError> {
        if index >= self.catalog.len() {
            return Err(SelectError {
                catalog: T::KIND,
                index,
                len: self.catalog.len(),
            });
        }
        self.state = DisclosureState::Open(index);
        Ok(&self.catalog.as_slice()[index])
    }

    /// Close the detail view and drop the selection.
    ///
    /// Returns `false` when it was already closed.
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        self.state = DisclosureState::Closed;
        was_open
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.state, DisclosureState::Open(_))
    }

    #[must_use]
    pub fn state(&self) -> DisclosureState {
        self.state
    }

    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        match self.state {
            DisclosureState::Open(index) => Some(index),
            DisclosureState::Closed => None,
        }
    }

    /// The entry shown in detail, `None` whenever closed.
    #[must_use]
    pub fn current(&self) -> Option<&T> {
        self.selected_index()
            .and_then(|index| self.catalog.get(index))
    }
}

#[cfg(test)]
mod tests {
    use super::{Disclosure, DisclosureState, SelectError};
    use crate::catalog::{Catalog, CatalogKind, Indicator, Meeting};

    fn meeting(title: &str) -> Meeting {
        Meeting {
            title: title.to_string(),
            date: "date".to_string(),
            objective: "objective".to_string(),
            discussions: Vec::new(),
            actions: Vec::new(),
        }
    }

    fn meetings() -> Disclosure<Meeting> {
        let catalog: Catalog<Meeting> = vec![meeting("a"), meeting("b"), meeting("c")].into();
        Disclosure::new(catalog)
    }

    #[test]
    fn starts_closed() {
        let disclosure = meetings();
        assert!(!disclosure.is_open());
        assert_eq!(disclosure.current(), None);
        assert_eq!(disclosure.state(), DisclosureState::Closed);
    }

    #[test]
    fn select_opens_on_every_entry() {
        let mut disclosure = meetings();
        for index in 0..disclosure.catalog().len() {
            let title = disclosure.select(index).expect("in range").title.clone();
            assert!(disclosure.is_open());
            assert_eq!(disclosure.current().map(|m| m.title.as_str()), Some(title.as_str()));
            assert_eq!(disclosure.selected_index(), Some(index));
        }
    }

    #[test]
    fn close_clears_selection_from_any_state() {
        let mut disclosure = meetings();
        assert!(!disclosure.close());
        assert_eq!(disclosure.current(), None);

        disclosure.select(1).expect("in range");
        assert!(disclosure.close());
        assert!(!disclosure.is_open());
        assert_eq!(disclosure.current(), None);
        assert_eq!(disclosure.selected_index(), None);
    }

    #[test]
    fn close_is_idempotent() {
        let mut once = meetings();
        once.select(0).expect("in range");
        once.close();

        let mut twice = meetings();
        twice.select(0).expect("in range");
        twice.close();
        twice.close();

        assert_eq!(once.state(), twice.state());
        assert_eq!(once.current(), twice.current());
    }

    #[test]
    fn reselect_replaces_without_closing() {
        let mut disclosure = meetings();
        disclosure.select(0).expect("in range");
        disclosure.select(2).expect("in range");
        assert_eq!(disclosure.state(), DisclosureState::Open(2));
        assert_eq!(disclosure.current().map(|m| m.title.as_str()), Some("c"));
    }

    #[test]
    fn out_of_range_select_is_rejected_and_keeps_state() {
        let mut disclosure = meetings();
        disclosure.select(1).expect("in range");

        let err = disclosure.select(3).unwrap_err();
        assert_eq!(
            err,
            SelectError {
                catalog: CatalogKind::Meetings,
                index: 3,
                len: 3,
            }
        );
        assert_eq!(disclosure.state(), DisclosureState::Open(1));
    }

    #[test]
    fn empty_catalog_never_opens() {
        let catalog: Catalog<Indicator> = Vec::new().into();
        let mut disclosure = Disclosure::new(catalog);
        assert!(disclosure.select(0).is_err());
        assert!(!disclosure.is_open());
    }
}
