//! Handlers for the quote catalog.
//!
//! Each handler decodes the request, calls [`CatalogService`], and lets
//! [`AppError`] turn domain failures into JSON error responses.
//!
//! [`CatalogService`]: quotes_core::service::CatalogService

use axum::body::Bytes;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use quotes_core::quote::NewQuote;
use quotes_core::types::QuoteId;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /quotes
///
/// Create a quote from `{ "author": ..., "quote": ... }`. Returns 201.
/// The body is decoded as JSON whatever `Content-Type` says.
pub async fn create_quote(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<impl IntoResponse> {
    let input: NewQuote = serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!(error = %e, "Rejected create request body");
        AppError::BadRequest("Invalid request body".into())
    })?;

    let quote = state.catalog.create(input)?;

    tracing::info!(quote_id = quote.id, author = %quote.author, "Quote created");

    Ok((StatusCode::CREATED, Json(quote)))
}

/// GET /quotes
///
/// List every quote, or only those by `?author=`. Only the first `author`
/// value counts; an empty one is treated as absent.
pub async fn list_quotes(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(pairs) = query.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Rejected list query string");
        AppError::BadRequest("Invalid query string".into())
    })?;
    let author = pairs
        .into_iter()
        .find_map(|(key, value)| (key == "author").then_some(value));

    let quotes = match author.as_deref() {
        Some(author) if !author.is_empty() => state.catalog.get_by_author(author)?,
        _ => state.catalog.get_all()?,
    };

    Ok(Json(quotes))
}

/// GET /quotes/random
pub async fn random_quote(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let quote = state.catalog.get_random()?;

    Ok(Json(quote))
}

/// GET /quotes/{id}
pub async fn get_quote(
    State(state): State<AppState>,
    id: Result<Path<QuoteId>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let id = parse_quote_id(id)?;
    let quote = state.catalog.get(id)?;

    Ok(Json(quote))
}

/// DELETE /quotes/{id}
///
/// Returns 204 on success, 404 if the quote does not exist.
pub async fn delete_quote(
    State(state): State<AppState>,
    id: Result<Path<QuoteId>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let id = parse_quote_id(id)?;
    state.catalog.delete(id)?;

    tracing::info!(quote_id = id, "Quote deleted");

    Ok(StatusCode::NO_CONTENT)
}

fn parse_quote_id(id: Result<Path<QuoteId>, PathRejection>) -> AppResult<QuoteId> {
    id.map(|Path(id)| id)
        .map_err(|_| AppError::BadRequest("Invalid quote ID".into()))
}
