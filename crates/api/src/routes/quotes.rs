use axum::routing::get;
use axum::Router;

use crate::handlers::quotes;
use crate::state::AppState;

/// Quote catalog routes.
///
/// ```text
/// GET    /quotes            -> list_quotes
/// POST   /quotes            -> create_quote
/// GET    /quotes/random     -> random_quote
/// GET    /quotes/{id}       -> get_quote
/// DELETE /quotes/{id}       -> delete_quote
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/quotes", get(quotes::list_quotes).post(quotes::create_quote))
        .route("/quotes/random", get(quotes::random_quote))
        .route(
            "/quotes/{id}",
            get(quotes::get_quote).delete(quotes::delete_quote),
        )
}
