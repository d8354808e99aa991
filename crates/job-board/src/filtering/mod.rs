//! Generic search-and-facet filtering over fixed in-memory record collections.
//!
//! A [`RecordSchema`] names the free-text and categorical attributes of a record
//! type; [`derive_view`] applies a [`FilterCriteria`] to a collection, and
//! [`FilterableView`] owns the criteria for an interactive session.

pub mod criteria;
pub mod error;
pub mod export;
pub mod schema;
pub mod summary;
pub mod view;

pub use criteria::{is_unconstrained, FilterCriteria, ALL};
pub use error::{ExportError, FilterError};
pub use export::{export_csv, join_cell, TableRow};
pub use schema::{Facet, FacetMatch, FacetOption, ListExtractor, RecordSchema, TextExtractor};
pub use summary::{EmptyState, Page, ResultSummary};
pub use view::{derive_view, FilterableView};
