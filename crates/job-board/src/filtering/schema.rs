use serde::Serialize;

use super::criteria::FilterCriteria;
use super::error::FilterError;

/// Borrows a single textual attribute from a record.
pub type TextExtractor<R> = for<'a> fn(&'a R) -> &'a str;

/// Borrows a list of textual attributes (tags, benefits) from a record.
pub type ListExtractor<R> = for<'a> fn(&'a R) -> &'a [&'a str];

/// How a facet selection is compared against the record attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FacetMatch {
    /// Case-sensitive equality, used for status/type-like enums.
    Exact,
    /// Equality after lower-casing both sides.
    IgnoreCase,
    /// Case-sensitive substring, for selectors offering a prefix of the stored value.
    Contains,
}

impl FacetMatch {
    pub fn accepts(self, attribute: &str, selected: &str) -> bool {
        match self {
            Self::Exact => attribute == selected,
            Self::IgnoreCase => attribute.to_lowercase() == selected.to_lowercase(),
            Self::Contains => attribute.contains(selected),
        }
    }

    fn normalize(self, attribute: &str) -> String {
        match self {
            Self::IgnoreCase => attribute.to_lowercase(),
            Self::Exact | Self::Contains => attribute.to_string(),
        }
    }
}

enum TextField<R> {
    Single(TextExtractor<R>),
    List(ListExtractor<R>),
}

struct SearchField<R> {
    name: &'static str,
    field: TextField<R>,
}

/// A named categorical dimension of a record type.
pub struct Facet<R> {
    name: &'static str,
    mode: FacetMatch,
    extract: TextExtractor<R>,
}

impl<R> Facet<R> {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn mode(&self) -> FacetMatch {
        self.mode
    }

    pub fn value<'a>(&self, record: &'a R) -> &'a str {
        (self.extract)(record)
    }

    /// Distinct values of this facet across `records`, in first-appearance order.
    ///
    /// Case-insensitive facets report lower-cased values so each option selects
    /// exactly the records it counts.
    pub fn options(&self, records: &[R]) -> Vec<FacetOption> {
        let mut options: Vec<FacetOption> = Vec::new();
        for record in records {
            let value = self.mode.normalize(self.value(record));
            match options.iter_mut().find(|option| option.value == value) {
                Some(option) => option.count += 1,
                None => options.push(FacetOption { value, count: 1 }),
            }
        }
        options
    }

    fn accepts(&self, record: &R, selected: &str) -> bool {
        self.mode.accepts((self.extract)(record), selected)
    }
}

/// Distinct facet value with the number of records carrying it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetOption {
    pub value: String,
    pub count: usize,
}

/// Describes which attributes of `R` the search term and facets look at.
pub struct RecordSchema<R> {
    collection: &'static str,
    singular: &'static str,
    plural: &'static str,
    search_fields: Vec<SearchField<R>>,
    facets: Vec<Facet<R>>,
}

impl<R> RecordSchema<R> {
    pub fn new(collection: &'static str, singular: &'static str, plural: &'static str) -> Self {
        Self {
            collection,
            singular,
            plural,
            search_fields: Vec::new(),
            facets: Vec::new(),
        }
    }

    pub fn text(mut self, name: &'static str, extract: TextExtractor<R>) -> Self {
        self.search_fields.push(SearchField {
            name,
            field: TextField::Single(extract),
        });
        self
    }

    pub fn text_list(mut self, name: &'static str, extract: ListExtractor<R>) -> Self {
        self.search_fields.push(SearchField {
            name,
            field: TextField::List(extract),
        });
        self
    }

    pub fn facet(
        mut self,
        name: &'static str,
        mode: FacetMatch,
        extract: TextExtractor<R>,
    ) -> Self {
        self.facets.push(Facet {
            name,
            mode,
            extract,
        });
        self
    }

    pub fn collection(&self) -> &'static str {
        self.collection
    }

    pub fn singular(&self) -> &'static str {
        self.singular
    }

    pub fn plural(&self) -> &'static str {
        self.plural
    }

    pub fn search_field_names(&self) -> Vec<&'static str> {
        self.search_fields.iter().map(|field| field.name).collect()
    }

    pub fn facets(&self) -> &[Facet<R>] {
        &self.facets
    }

    pub fn facet_named(&self, name: &str) -> Result<&Facet<R>, FilterError> {
        self.facets
            .iter()
            .find(|facet| facet.name == name)
            .ok_or_else(|| FilterError::UnknownFacet {
                facet: name.to_string(),
                collection: self.collection,
            })
    }

    /// Store a facet selection after checking the facet belongs to this schema.
    pub fn select(
        &self,
        criteria: &mut FilterCriteria,
        facet: &str,
        value: impl Into<String>,
    ) -> Result<(), FilterError> {
        let facet = self.facet_named(facet)?;
        criteria.set_facet(facet.name, value);
        Ok(())
    }

    /// Build criteria from a search term and `(facet, value)` pairs.
    pub fn criteria<I, K, V>(
        &self,
        search: Option<&str>,
        selections: I,
    ) -> Result<FilterCriteria, FilterError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut criteria = FilterCriteria::new();
        if let Some(term) = search {
            criteria.set_search_term(term);
        }
        for (facet, value) in selections {
            self.select(&mut criteria, facet.as_ref(), value)?;
        }
        Ok(criteria)
    }

    /// Evaluate every active constraint in `criteria` against `record`.
    pub fn matches(&self, record: &R, criteria: &FilterCriteria) -> bool {
        let needle = criteria.search_term().to_lowercase();
        self.matches_prepared(record, &needle, criteria)
    }

    /// Same as [`matches`](Self::matches) with the search term already lower-cased.
    pub(crate) fn matches_prepared(
        &self,
        record: &R,
        needle: &str,
        criteria: &FilterCriteria,
    ) -> bool {
        self.matches_search(record, needle) && self.matches_facets(record, criteria)
    }

    fn matches_search(&self, record: &R, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }

        let contains = |text: &str| text.to_lowercase().contains(needle);
        self.search_fields.iter().any(|field| match field.field {
            TextField::Single(extract) => contains(extract(record)),
            TextField::List(extract) => extract(record).iter().any(|item| contains(*item)),
        })
    }

    fn matches_facets(&self, record: &R, criteria: &FilterCriteria) -> bool {
        self.facets.iter().all(|facet| match criteria.facet(facet.name) {
            Some(selected) => facet.accepts(record, selected),
            None => true,
        })
    }

    /// [`Facet::options`] for the facet called `facet`.
    pub fn facet_options(
        &self,
        records: &[R],
        facet: &str,
    ) -> Result<Vec<FacetOption>, FilterError> {
        Ok(self.facet_named(facet)?.options(records))
    }
}
