//! `GET /health`: liveness plus a read of the catalog itself.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use catalog_db::repositories::FilmWorkRepo;
use catalog_db::DbPool;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok` when the catalog can be read, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Number of film works the list endpoint would page over. `null` when
    /// the catalog tables cannot be read.
    pub film_works: Option<i64>,
}

async fn catalog_size(pool: &DbPool) -> Option<i64> {
    let mut conn = pool.acquire().await.ok()?;
    match FilmWorkRepo::count(&mut conn).await {
        Ok(count) => Some(count),
        Err(err) => {
            tracing::warn!(error = %err, "Catalog unreadable during health check");
            None
        }
    }
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = catalog_db::health_check(&state.pool).await.is_ok();
    let film_works = if db_healthy {
        catalog_size(&state.pool).await
    } else {
        None
    };

    Json(HealthResponse {
        status: if film_works.is_some() { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        film_works,
    })
}

/// Mounted at the root, outside `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
