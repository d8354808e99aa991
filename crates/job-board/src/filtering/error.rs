/// Errors raised at the edges of the filtering engine.
///
/// Deriving a view never fails; these only surface when a caller names a
/// facet, collection, or page the engine does not know about.
#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    #[error("collection '{collection}' has no facet named '{facet}'")]
    UnknownFacet {
        facet: String,
        collection: &'static str,
    },
    #[error("unknown collection '{0}'")]
    UnknownCollection(String),
    #[error("facet arguments must look like NAME=VALUE, got '{0}'")]
    InvalidFacetArgument(String),
    #[error("invalid page request: {0}")]
    InvalidPage(String),
}

/// Failure while writing a derived view out as CSV.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
