pub mod films;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /films                 paginated film list (GET)
/// /films/{id}            film detail (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(films::router())
}
