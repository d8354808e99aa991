use job_board::board::{BoardFixture, ListingState};
use job_board::config::ListingConfig;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Listing state over the sample fixture, loaded once per process.
pub(crate) fn listing_state(config: &ListingConfig) -> ListingState {
    ListingState {
        fixture: Arc::new(BoardFixture::sample()),
        default_page_size: config.default_page_size,
    }
}
