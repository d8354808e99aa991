use std::collections::BTreeMap;

use crate::filtering::{FilterCriteria, FilterError, RecordSchema};

const SEARCH_KEY: &str = "search";
const PAGE_KEY: &str = "page";
const PER_PAGE_KEY: &str = "per_page";

/// Collection-independent listing request, as received from a URL or the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingQuery {
    pub search: Option<String>,
    pub facets: Vec<(String, String)>,
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}

impl ListingQuery {
    /// Split URL query parameters into the reserved keys and facet selections.
    pub fn from_params(params: BTreeMap<String, String>) -> Result<Self, FilterError> {
        let mut query = Self::default();
        for (key, value) in params {
            match key.as_str() {
                SEARCH_KEY => query.search = Some(value),
                PAGE_KEY => query.page = Some(parse_page_number(PAGE_KEY, &value)?),
                PER_PAGE_KEY => {
                    query.per_page = Some(parse_page_number(PER_PAGE_KEY, &value)?)
                }
                _ => query.facets.push((key, value)),
            }
        }
        Ok(query)
    }

    /// Parse a `NAME=VALUE` facet argument.
    pub fn parse_facet_argument(raw: &str) -> Result<(String, String), FilterError> {
        match raw.split_once('=') {
            Some((facet, value)) if !facet.trim().is_empty() => {
                Ok((facet.trim().to_string(), value.to_string()))
            }
            _ => Err(FilterError::InvalidFacetArgument(raw.to_string())),
        }
    }

    pub fn criteria<R>(&self, schema: &RecordSchema<R>) -> Result<FilterCriteria, FilterError> {
        schema.criteria(
            self.search.as_deref(),
            self.facets
                .iter()
                .map(|(facet, value)| (facet.as_str(), value.as_str())),
        )
    }

    pub fn page_or_first(&self) -> usize {
        self.page.unwrap_or(1)
    }

    pub fn per_page_or(&self, default_page_size: usize) -> usize {
        self.per_page.unwrap_or(default_page_size)
    }
}

fn parse_page_number(key: &str, raw: &str) -> Result<usize, FilterError> {
    raw.trim().parse::<usize>().map_err(|_| {
        FilterError::InvalidPage(format!("{key} must be a positive integer, got '{raw}'"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_keys_are_not_facets() {
        let params = BTreeMap::from([
            ("search".to_string(), "react".to_string()),
            ("page".to_string(), "2".to_string()),
            ("type".to_string(), "Full-time".to_string()),
        ]);

        let query = ListingQuery::from_params(params).expect("valid params");
        assert_eq!(query.search.as_deref(), Some("react"));
        assert_eq!(query.page, Some(2));
        assert_eq!(query.per_page, None);
        assert_eq!(
            query.facets,
            vec![("type".to_string(), "Full-time".to_string())]
        );
    }

    #[test]
    fn malformed_page_numbers_are_rejected() {
        let params = BTreeMap::from([("per_page".to_string(), "ten".to_string())]);
        assert!(matches!(
            ListingQuery::from_params(params),
            Err(FilterError::InvalidPage(_))
        ));
    }

    #[test]
    fn facet_arguments_split_on_the_first_equals_sign() {
        assert_eq!(
            ListingQuery::parse_facet_argument("location=San Francisco").expect("valid"),
            ("location".to_string(), "San Francisco".to_string())
        );
        assert_eq!(
            ListingQuery::parse_facet_argument("status=").expect("valid"),
            ("status".to_string(), String::new())
        );
        assert!(ListingQuery::parse_facet_argument("Full-time").is_err());
        assert!(ListingQuery::parse_facet_argument("=Remote").is_err());
    }
}
