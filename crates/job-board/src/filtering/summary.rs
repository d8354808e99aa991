use serde::Serialize;

use super::criteria::FilterCriteria;
use super::error::FilterError;
use super::schema::RecordSchema;

/// Display-ready description of a derived view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultSummary {
    pub collection: &'static str,
    pub total: usize,
    pub matched: usize,
    pub filtered: bool,
    pub heading: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_state: Option<EmptyState>,
}

/// Message shown instead of a list when nothing matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyState {
    pub message: String,
    pub hint: &'static str,
}

impl ResultSummary {
    pub fn new<R>(
        schema: &RecordSchema<R>,
        total: usize,
        matched: usize,
        criteria: &FilterCriteria,
    ) -> Self {
        let noun = if matched == 1 {
            schema.singular()
        } else {
            schema.plural()
        };

        let empty_state = (matched == 0).then(|| EmptyState {
            message: format!("No {} found", schema.plural().to_lowercase()),
            hint: "Try adjusting your search or filters, or reset them to see every entry.",
        });

        Self {
            collection: schema.collection(),
            total,
            matched,
            filtered: !criteria.is_default(),
            heading: format!("{matched} {noun} Found"),
            empty_state,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.matched == 0
    }
}

/// One page of a derived view. Pages are 1-based.
#[derive(Debug, Clone, Serialize)]
pub struct Page<'r, R> {
    pub items: Vec<&'r R>,
    pub page: usize,
    pub per_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

impl<'r, R> Page<'r, R> {
    /// Slice `derived` into the requested page, clamping past-the-end pages to the last one.
    pub fn of(derived: Vec<&'r R>, page: usize, per_page: usize) -> Result<Self, FilterError> {
        if page == 0 {
            return Err(FilterError::InvalidPage("pages start at 1".to_string()));
        }
        if per_page == 0 {
            return Err(FilterError::InvalidPage(
                "per_page must be at least 1".to_string(),
            ));
        }

        let total_items = derived.len();
        let total_pages = total_items.div_ceil(per_page).max(1);
        let page = page.min(total_pages);
        let items = derived
            .into_iter()
            .skip((page - 1) * per_page)
            .take(per_page)
            .collect();

        Ok(Self {
            items,
            page,
            per_page,
            total_items,
            total_pages,
            has_previous: page > 1,
            has_next: page < total_pages,
        })
    }

    pub fn label(&self) -> String {
        format!("Page {} of {}", self.page, self.total_pages)
    }
}
