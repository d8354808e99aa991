use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::fixture::BoardFixture;
use crate::filtering::{FilterError, RecordSchema, TableRow};

/// The filterable collections of the job board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    Jobs,
    Companies,
    Users,
    Postings,
    Reports,
    Resources,
}

impl Collection {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Jobs,
            Self::Companies,
            Self::Users,
            Self::Postings,
            Self::Reports,
            Self::Resources,
        ]
    }

    /// Identifier used on the command line and in URLs.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Jobs => "jobs",
            Self::Companies => "companies",
            Self::Users => "users",
            Self::Postings => "postings",
            Self::Reports => "reports",
            Self::Resources => "resources",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Jobs => "Job Listings",
            Self::Companies => "Company Directory",
            Self::Users => "Admin: Users",
            Self::Postings => "Admin: Job Postings",
            Self::Reports => "Admin: Reports & Issues",
            Self::Resources => "Career Resources",
        }
    }

    /// Run `visitor` against the records of this collection.
    pub fn visit<V: ListingVisitor>(self, fixture: &BoardFixture, visitor: V) -> V::Output {
        match self {
            Self::Jobs => visitor.visit(fixture.jobs()),
            Self::Companies => visitor.visit(fixture.companies()),
            Self::Users => visitor.visit(fixture.users()),
            Self::Postings => visitor.visit(fixture.postings()),
            Self::Reports => visitor.visit(fixture.reports()),
            Self::Resources => visitor.visit(fixture.resources()),
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Collection {
    type Err = FilterError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let wanted = raw.trim().to_ascii_lowercase();
        Self::ordered()
            .into_iter()
            .find(|collection| collection.key() == wanted)
            .ok_or_else(|| FilterError::UnknownCollection(raw.to_string()))
    }
}

/// A record type that can be listed, filtered, and exported.
pub trait Listing: Serialize + TableRow + Sized {
    const COLLECTION: Collection;

    fn schema() -> RecordSchema<Self>;

    fn id(&self) -> u32;
}

/// Operation that is generic over the listing type of a [`Collection`].
pub trait ListingVisitor {
    type Output;

    fn visit<L: Listing>(self, records: &[L]) -> Self::Output;
}
