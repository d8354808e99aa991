use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Selector value meaning "no constraint" on a facet.
pub const ALL: &str = "all";

/// Returns true when a facet selection imposes no constraint.
pub fn is_unconstrained(value: &str) -> bool {
    value.is_empty() || value == ALL
}

/// User-controlled filter state: a free-text search term plus one selection per facet.
///
/// Facets left at a sentinel value (`"all"` or `""`) are not stored, so every entry in
/// the facet map is an active constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    search_term: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    facets: BTreeMap<String, String>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.set_search_term(term);
        self
    }

    pub fn with_facet(mut self, facet: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_facet(facet, value);
        self
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// The active selection for `facet`, if any.
    pub fn facet(&self, facet: &str) -> Option<&str> {
        self.facets.get(facet).map(String::as_str)
    }

    pub fn active_facets(&self) -> impl Iterator<Item = (&str, &str)> {
        self.facets
            .iter()
            .map(|(facet, value)| (facet.as_str(), value.as_str()))
    }

    /// True when neither the search term nor any facet constrains the view.
    pub fn is_default(&self) -> bool {
        self.search_term.is_empty() && self.facets.is_empty()
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn set_facet(&mut self, facet: impl Into<String>, value: impl Into<String>) {
        let facet = facet.into();
        let value = value.into();
        if is_unconstrained(&value) {
            self.facets.remove(&facet);
        } else {
            self.facets.insert(facet, value);
        }
    }

    pub fn clear_facet(&mut self, facet: &str) {
        self.facets.remove(facet);
    }

    pub fn reset(&mut self) {
        self.search_term.clear();
        self.facets.clear();
    }
}
