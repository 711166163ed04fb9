//! Route definitions for the film catalog.

use axum::routing::get;
use axum::Router;

use crate::handlers::films;
use crate::state::AppState;

/// Routes for the film catalog, merged into `/api/v1`.
///
/// Each path is also served with a trailing slash.
///
/// ```text
/// GET /films            -> list
/// GET /films/{id}       -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/films", get(films::list))
        .route("/films/", get(films::list))
        .route("/films/{id}", get(films::get_by_id))
        .route("/films/{id}/", get(films::get_by_id))
}
