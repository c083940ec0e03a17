//! Active search filters and filtered-set computation
//!
//! Filters are plain strings entered in the search bar. They are kept in
//! insertion order, unique, and applied together: an asset is shown only
//! if every active term matches it.
use super::data::Asset;

/// Why a commit did not add a filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejected {
    Empty,
    Duplicate,
}

/// Ordered, duplicate-free list of filter terms
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveFilters {
    terms: Vec<String>,
}

impl ActiveFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Append a trimmed term. Comparison with existing terms is case-sensitive.
    pub fn commit(&mut self, raw: &str) -> Result<(), Rejected> {
        let term = raw.trim();
        if term.is_empty() {
            return Err(Rejected::Empty);
        }
        if self.terms.iter().any(|t| t == term) {
            return Err(Rejected::Duplicate);
        }

        self.terms.push(term.to_string());
        Ok(())
    }

    /// Remove the term at `index`, returning it. Out-of-range is a no-op.
    pub fn remove(&mut self, index: usize) -> Option<String> {
        if index < self.terms.len() {
            Some(self.terms.remove(index))
        } else {
            None
        }
    }
}

/// Decides whether an asset matches a single filter term
pub trait TermMatcher {
    /// `index` is the asset's position in the full library listing
    fn matches(&self, index: usize, asset: &Asset, term: &str) -> bool;
}

/// Stand-in matcher until content-based matching exists.
///
/// Ignores the term entirely and keeps assets at even positions.
#[derive(Debug, Clone, Copy, Default)]
pub struct EvenIndexPlaceholder;

impl TermMatcher for EvenIndexPlaceholder {
    fn matches(&self, index: usize, _asset: &Asset, _term: &str) -> bool {
        index % 2 == 0
    }
}

/// Select the assets of `all` matching every active term.
///
/// With no terms every asset matches.
pub fn apply_filters<M: TermMatcher>(
    matcher: &M,
    all: &[Asset],
    filters: &ActiveFilters,
) -> Vec<Asset> {
    if filters.is_empty() {
        return all.to_vec();
    }

    all.iter()
        .enumerate()
        .filter(|(index, asset)| {
            filters
                .terms()
                .iter()
                .all(|term| matcher.matches(*index, asset, term))
        })
        .map(|(_, asset)| asset.clone())
        .collect()
}
