//! The job board's record collections and their filter configuration.

mod bookmarks;
mod collection;
pub mod domain;
mod fixture;
mod listings;
mod query;
pub mod render;
pub mod router;

pub use bookmarks::Bookmarks;
pub use collection::{Collection, Listing, ListingVisitor};
pub use domain::{
    AccountRole, AccountStatus, Company, EmploymentType, Job, JobPosting, ModerationReport,
    PostingStatus, ReportStatus, ReportSubject, Resource, ResourceDetail, ResourceKind,
    UserAccount,
};
pub use fixture::BoardFixture;
pub use query::ListingQuery;
pub use render::{
    CollectionDescriptor, CsvExport, CsvListing, CsvListingError, DescribeCollection, JsonListing,
    RenderedTable, TableListing,
};
pub use router::{collection_router, ListingState};
