//! Handlers for the read-only `/films` resource.
//!
//! Film works are served with their genre names and the names of their
//! actors, directors and writers, either one page at a time or individually.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use catalog_core::error::CoreError;
use catalog_core::film_work::FILM_WORK_ENTITY;
use catalog_core::pagination::DEFAULT_PAGE_SIZE;
use catalog_core::types::DbId;
use catalog_db::repositories::FilmWorkRepo;

use crate::error::{AppError, AppResult};
use crate::query::PageParams;
use crate::state::AppState;

/// GET /api/v1/films?page=N
///
/// One page of film works (50 per page) wrapped in the list envelope.
/// A missing or malformed `page` means page 1; `page=last` means the final
/// page; a page past the end comes back with empty `results`.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<impl IntoResponse> {
    let page =
        FilmWorkRepo::list_page(&state.pool, params.page_request(), DEFAULT_PAGE_SIZE).await?;
    Ok(Json(page))
}

/// GET /api/v1/films/{id}
///
/// A single film work. Unknown ids, including ones that are not valid UUIDs,
/// are 404s.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let not_found = || {
        AppError::Core(CoreError::NotFound {
            entity: FILM_WORK_ENTITY,
            id: raw_id.clone(),
        })
    };

    let id: DbId = raw_id.parse().map_err(|_| not_found())?;
    let record = FilmWorkRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(not_found)?;
    Ok(Json(record))
}
