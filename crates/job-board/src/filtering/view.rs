use tracing::debug;

use super::criteria::FilterCriteria;
use super::error::FilterError;
use super::schema::RecordSchema;
use super::summary::ResultSummary;

/// Records of `records` matching `criteria`, in source order.
///
/// Always recomputed from the full collection; nothing from earlier calls is reused.
pub fn derive_view<'r, R>(
    records: &'r [R],
    schema: &RecordSchema<R>,
    criteria: &FilterCriteria,
) -> Vec<&'r R> {
    let needle = criteria.search_term().to_lowercase();
    let derived: Vec<&'r R> = records
        .iter()
        .filter(|record| schema.matches_prepared(record, &needle, criteria))
        .collect();

    debug!(
        collection = schema.collection(),
        total = records.len(),
        matched = derived.len(),
        "derived record view"
    );

    derived
}

type Subscriber<'r, R> = Box<dyn FnMut(&FilterCriteria, &[&'r R]) + 'r>;

/// Owned filter state over a fixed record collection.
///
/// Every criteria mutation recomputes the derived view and hands it to the
/// subscriber, if one is registered.
pub struct FilterableView<'r, R> {
    records: &'r [R],
    schema: RecordSchema<R>,
    criteria: FilterCriteria,
    subscriber: Option<Subscriber<'r, R>>,
}

impl<'r, R> FilterableView<'r, R> {
    pub fn new(records: &'r [R], schema: RecordSchema<R>) -> Self {
        Self {
            records,
            schema,
            criteria: FilterCriteria::default(),
            subscriber: None,
        }
    }

    /// Register the rendering callback, replacing any previous one, and render once.
    pub fn subscribe<F>(&mut self, subscriber: F)
    where
        F: FnMut(&FilterCriteria, &[&'r R]) + 'r,
    {
        self.subscriber = Some(Box::new(subscriber));
        self.refresh();
    }

    pub fn records(&self) -> &'r [R] {
        self.records
    }

    pub fn schema(&self) -> &RecordSchema<R> {
        &self.schema
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn results(&self) -> Vec<&'r R> {
        derive_view(self.records, &self.schema, &self.criteria)
    }

    pub fn summary(&self) -> ResultSummary {
        ResultSummary::new(
            &self.schema,
            self.records.len(),
            self.results().len(),
            &self.criteria,
        )
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.criteria.set_search_term(term);
        debug!(
            collection = self.schema.collection(),
            search = self.criteria.search_term(),
            "search term changed"
        );
        self.refresh();
    }

    pub fn select_facet(
        &mut self,
        facet: &str,
        value: impl Into<String>,
    ) -> Result<(), FilterError> {
        self.schema.select(&mut self.criteria, facet, value)?;
        debug!(
            collection = self.schema.collection(),
            facet,
            value = self.criteria.facet(facet).unwrap_or(super::ALL),
            "facet selection changed"
        );
        self.refresh();
        Ok(())
    }

    pub fn clear_facet(&mut self, facet: &str) -> Result<(), FilterError> {
        self.schema.facet_named(facet)?;
        self.criteria.clear_facet(facet);
        debug!(
            collection = self.schema.collection(),
            facet,
            "facet cleared"
        );
        self.refresh();
        Ok(())
    }

    /// Drop every constraint, restoring the full collection.
    pub fn reset(&mut self) {
        self.criteria.reset();
        debug!(collection = self.schema.collection(), "filters reset");
        self.refresh();
    }

    fn refresh(&mut self) {
        let derived = derive_view(self.records, &self.schema, &self.criteria);
        if let Some(subscriber) = self.subscriber.as_mut() {
            subscriber(&self.criteria, &derived);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filtering::FacetMatch;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Account {
        name: &'static str,
        status: &'static str,
    }

    fn accounts() -> Vec<Account> {
        vec![
            Account {
                name: "Emma Wilson",
                status: "active",
            },
            Account {
                name: "Sarah Johnson",
                status: "inactive",
            },
            Account {
                name: "Jennifer Lee",
                status: "active",
            },
        ]
    }

    fn schema() -> RecordSchema<Account> {
        RecordSchema::<Account>::new("accounts", "Account", "Accounts")
            .text("name", |account| account.name)
            .facet("status", FacetMatch::Exact, |account| account.status)
    }

    #[test]
    fn subscriber_sees_every_recomputation() {
        let records = accounts();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut view = FilterableView::new(&records, schema());

        let sink = Rc::clone(&seen);
        view.subscribe(move |_, derived| {
            let names: Vec<&str> = derived.iter().map(|account| account.name).collect();
            sink.borrow_mut().push(names);
        });

        view.select_facet("status", "active").expect("status facet");
        view.set_search_term("lee");
        view.reset();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 4);
        assert_eq!(seen[0].len(), 3);
        assert_eq!(seen[1], vec!["Emma Wilson", "Jennifer Lee"]);
        assert_eq!(seen[2], vec!["Jennifer Lee"]);
        assert_eq!(seen[3].len(), 3);
    }

    #[test]
    fn unknown_facet_leaves_criteria_untouched() {
        let records = accounts();
        let mut view = FilterableView::new(&records, schema());

        assert!(view.select_facet("role", "Recruiter").is_err());
        assert!(view.clear_facet("role").is_err());
        assert!(view.criteria().is_default());
        assert_eq!(view.results().len(), 3);
    }

    #[test]
    fn clearing_a_facet_restores_its_records() {
        let records = accounts();
        let mut view = FilterableView::new(&records, schema());

        view.select_facet("status", "inactive").expect("status facet");
        assert_eq!(view.results().len(), 1);

        view.clear_facet("status").expect("status facet");
        assert_eq!(view.results().len(), 3);
    }
}
