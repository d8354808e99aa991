use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tracing::{info, warn};

use super::collection::Collection;
use super::fixture::BoardFixture;
use super::query::ListingQuery;
use super::render::{CsvListing, DescribeCollection, JsonListing};
use crate::error::AppError;

/// Shared, read-only state of the listing endpoints.
#[derive(Debug, Clone)]
pub struct ListingState {
    pub fixture: Arc<BoardFixture>,
    pub default_page_size: usize,
}

/// Router builder exposing filtered views of every collection.
pub fn collection_router(state: ListingState) -> Router {
    Router::new()
        .route("/api/v1/collections", get(catalog_handler))
        .route("/api/v1/collections/:collection", get(listing_handler))
        .route(
            "/api/v1/collections/:collection/export",
            get(export_handler),
        )
        .with_state(state)
}

pub(crate) async fn catalog_handler(State(state): State<ListingState>) -> Json<Value> {
    let collections: Vec<_> = Collection::ordered()
        .into_iter()
        .map(|collection| collection.visit(&state.fixture, DescribeCollection))
        .collect();

    Json(json!({ "collections": collections }))
}

pub(crate) async fn listing_handler(
    State(state): State<ListingState>,
    Path(collection): Path<String>,
    Query(params): Query<BTreeMap<String, String>>,
) -> Result<Json<Value>, AppError> {
    let collection: Collection = collection.parse().map_err(reject)?;
    let query = ListingQuery::from_params(params).map_err(reject)?;

    let body = collection
        .visit(
            &state.fixture,
            JsonListing {
                query: &query,
                default_page_size: state.default_page_size,
            },
        )
        .map_err(reject)?;

    Ok(Json(body))
}

pub(crate) async fn export_handler(
    State(state): State<ListingState>,
    Path(collection): Path<String>,
    Query(params): Query<BTreeMap<String, String>>,
) -> Result<Response, AppError> {
    let collection: Collection = collection.parse().map_err(reject)?;
    let query = ListingQuery::from_params(params).map_err(reject)?;

    let export = collection
        .visit(&state.fixture, CsvListing { query: &query })
        .map_err(reject)?;

    info!(%collection, rows = export.rows, "exported collection as csv");

    let disposition = format!("attachment; filename=\"{}\"", export.file_name());
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        export.bytes,
    )
        .into_response())
}

fn reject<E: Into<AppError>>(err: E) -> AppError {
    let err = err.into();
    warn!(error = %err, "rejected listing request");
    err
}
