pub mod health;
pub mod quotes;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree (health is mounted separately).
///
/// ```text
/// /quotes                list (GET, ?author=), create (POST)
/// /quotes/random         random quote (GET)
/// /quotes/{id}           get (GET), delete (DELETE)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(quotes::router())
}
