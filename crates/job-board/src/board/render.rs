//! Collection-agnostic renderings of a filtered listing.
//!
//! Each renderer is a [`ListingVisitor`], so callers pick a [`Collection`] at
//! runtime and still get the statically typed schema of its records.

use serde::Serialize;
use serde_json::{json, Value};

use super::collection::{Collection, Listing, ListingVisitor};
use super::query::ListingQuery;
use crate::filtering::{derive_view, export_csv, ExportError, FilterError, Page, ResultSummary};

/// JSON body for one page of a filtered collection.
pub struct JsonListing<'q> {
    pub query: &'q ListingQuery,
    pub default_page_size: usize,
}

impl ListingVisitor for JsonListing<'_> {
    type Output = Result<Value, FilterError>;

    fn visit<L: Listing>(self, records: &[L]) -> Self::Output {
        let schema = L::schema();
        let criteria = self.query.criteria(&schema)?;
        let derived = derive_view(records, &schema, &criteria);
        let summary = ResultSummary::new(&schema, records.len(), derived.len(), &criteria);
        let page = Page::of(
            derived,
            self.query.page_or_first(),
            self.query.per_page_or(self.default_page_size),
        )?;

        Ok(json!({
            "collection": L::COLLECTION,
            "criteria": criteria,
            "summary": summary,
            "page": {
                "page": page.page,
                "per_page": page.per_page,
                "total_items": page.total_items,
                "total_pages": page.total_pages,
                "has_previous": page.has_previous,
                "has_next": page.has_next,
            },
            "items": page.items,
        }))
    }
}

/// Plain-text table rows for terminal output.
#[derive(Debug, Clone)]
pub struct RenderedTable {
    pub summary: ResultSummary,
    pub columns: &'static [&'static str],
    pub rows: Vec<Vec<String>>,
    pub page_label: String,
}

pub struct TableListing<'q> {
    pub query: &'q ListingQuery,
    pub default_page_size: usize,
}

impl ListingVisitor for TableListing<'_> {
    type Output = Result<RenderedTable, FilterError>;

    fn visit<L: Listing>(self, records: &[L]) -> Self::Output {
        let schema = L::schema();
        let criteria = self.query.criteria(&schema)?;
        let derived = derive_view(records, &schema, &criteria);
        let summary = ResultSummary::new(&schema, records.len(), derived.len(), &criteria);
        let page = Page::of(
            derived,
            self.query.page_or_first(),
            self.query.per_page_or(self.default_page_size),
        )?;

        Ok(RenderedTable {
            summary,
            columns: L::COLUMNS,
            rows: page.items.iter().map(|record| record.cells()).collect(),
            page_label: page.label(),
        })
    }
}

/// Failure while producing a CSV export.
#[derive(Debug, thiserror::Error)]
pub enum CsvListingError {
    #[error(transparent)]
    Filter(#[from] FilterError),
    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Every matching record (unpaginated) as CSV bytes.
pub struct CsvListing<'q> {
    pub query: &'q ListingQuery,
}

impl ListingVisitor for CsvListing<'_> {
    type Output = Result<CsvExport, CsvListingError>;

    fn visit<L: Listing>(self, records: &[L]) -> Self::Output {
        let schema = L::schema();
        let criteria = self.query.criteria(&schema)?;
        let derived = derive_view(records, &schema, &criteria);

        let mut bytes = Vec::new();
        export_csv(&mut bytes, &derived)?;

        Ok(CsvExport {
            collection: L::COLLECTION,
            rows: derived.len(),
            bytes,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CsvExport {
    pub collection: Collection,
    pub rows: usize,
    pub bytes: Vec<u8>,
}

impl CsvExport {
    pub fn file_name(&self) -> String {
        format!("{}.csv", self.collection.key())
    }
}

/// Search fields and facet options a client needs to build filter controls.
#[derive(Debug, Clone, Serialize)]
pub struct CollectionDescriptor {
    pub collection: Collection,
    pub label: &'static str,
    pub total: usize,
    pub search_fields: Vec<&'static str>,
    pub facets: Vec<FacetDescriptor>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FacetDescriptor {
    pub name: &'static str,
    #[serde(rename = "match")]
    pub mode: crate::filtering::FacetMatch,
    pub options: Vec<crate::filtering::FacetOption>,
}

pub struct DescribeCollection;

impl ListingVisitor for DescribeCollection {
    type Output = CollectionDescriptor;

    fn visit<L: Listing>(self, records: &[L]) -> Self::Output {
        let schema = L::schema();
        let facets = schema
            .facets()
            .iter()
            .map(|facet| FacetDescriptor {
                name: facet.name(),
                mode: facet.mode(),
                options: facet.options(records),
            })
            .collect();

        CollectionDescriptor {
            collection: L::COLLECTION,
            label: L::COLLECTION.label(),
            total: records.len(),
            search_fields: schema.search_field_names(),
            facets,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardFixture;

    fn query(search: Option<&str>, facets: &[(&str, &str)]) -> ListingQuery {
        ListingQuery {
            search: search.map(str::to_string),
            facets: facets
                .iter()
                .map(|(facet, value)| (facet.to_string(), value.to_string()))
                .collect(),
            page: None,
            per_page: None,
        }
    }

    #[test]
    fn json_listing_reports_summary_and_items() {
        let fixture = BoardFixture::sample();
        let query = query(None, &[("type", "Contract")]);

        let body = Collection::Jobs
            .visit(
                &fixture,
                JsonListing {
                    query: &query,
                    default_page_size: 10,
                },
            )
            .expect("listing renders");

        assert_eq!(body["collection"], "jobs");
        assert_eq!(body["summary"]["heading"], "1 Job Found");
        assert_eq!(body["items"][0]["title"], "UX/UI Designer");
        assert_eq!(body["items"][0]["type"], "Contract");
        assert_eq!(body["page"]["total_pages"], 1);
    }

    #[test]
    fn table_listing_paginates_rows() {
        let fixture = BoardFixture::sample();
        let mut query = query(None, &[]);
        query.page = Some(2);
        query.per_page = Some(5);

        let table = Collection::Resources
            .visit(
                &fixture,
                TableListing {
                    query: &query,
                    default_page_size: 10,
                },
            )
            .expect("table renders");

        assert_eq!(table.summary.matched, 12);
        assert_eq!(table.rows.len(), 5);
        assert_eq!(table.rows[0][0], "6");
        assert_eq!(table.page_label, "Page 2 of 3");
    }

    #[test]
    fn csv_listing_exports_every_match() {
        let fixture = BoardFixture::sample();
        let query = query(None, &[("status", "approved")]);

        let export = Collection::Postings
            .visit(&fixture, CsvListing { query: &query })
            .expect("export renders");

        assert_eq!(export.rows, 3);
        assert_eq!(export.file_name(), "postings.csv");
        let text = String::from_utf8(export.bytes).expect("utf8");
        assert_eq!(text.lines().count(), 4);
        assert!(text.starts_with("id,title,company,location,status,applicants,posted"));
    }

    #[test]
    fn unknown_facets_fail_every_renderer() {
        let fixture = BoardFixture::sample();
        let query = query(None, &[("salary", "high")]);

        assert!(Collection::Jobs
            .visit(&fixture, CsvListing { query: &query })
            .is_err());
        assert!(Collection::Jobs
            .visit(
                &fixture,
                JsonListing {
                    query: &query,
                    default_page_size: 10,
                },
            )
            .is_err());
    }

    #[test]
    fn descriptor_lists_lowercased_industries() {
        let fixture = BoardFixture::sample();
        let descriptor = Collection::Companies.visit(&fixture, DescribeCollection);

        assert_eq!(descriptor.total, 6);
        let industry = &descriptor.facets[0];
        assert_eq!(industry.name, "industry");
        let values: Vec<&str> = industry
            .options
            .iter()
            .map(|option| option.value.as_str())
            .collect();
        assert_eq!(
            values,
            vec![
                "technology",
                "design",
                "finance",
                "sustainability",
                "data analytics",
                "healthcare"
            ]
        );
    }

    #[test]
    fn descriptor_counts_every_facet_option() {
        let fixture = BoardFixture::sample();
        let descriptor = Collection::Companies.visit(&fixture, DescribeCollection);

        let featured = &descriptor.facets[1];
        assert_eq!(featured.name, "featured");
        let counts: Vec<(&str, usize)> = featured
            .options
            .iter()
            .map(|option| (option.value.as_str(), option.count))
            .collect();
        assert_eq!(counts, vec![("true", 3), ("false", 3)]);
    }
}
