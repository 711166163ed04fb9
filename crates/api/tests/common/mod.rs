//! Shared helpers for the HTTP integration tests.
//!
//! Tests build the production router against the per-test database that
//! `#[sqlx::test]` provides, send requests with `tower::ServiceExt::oneshot`
//! and seed catalog rows directly with SQL.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use chrono::{Duration, NaiveDate, TimeZone, Utc};
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use catalog_api::config::{LogFormat, ServerConfig};
use catalog_api::router::build_app_router;
use catalog_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        database_url: String::new(),
        db_max_connections: 5,
        log_format: LogFormat::Pretty,
    }
}

/// Build the full application router (same middleware stack as `main.rs`).
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_router(AppState { pool }, &test_config())
}

/// Send a GET request through the router.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body into raw bytes.
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

// ---------------------------------------------------------------------------
// Seed data
// ---------------------------------------------------------------------------

// These helpers mirror the ones in `crates/db/tests/film_work.rs` row for row
// (same columns, same fixed values) so both suites describe the same catalog.
// Keep the two copies in sync.

/// Insert a film work created `seq` seconds after a fixed epoch.
pub async fn insert_film(pool: &PgPool, title: &str, seq: i64) -> Uuid {
    let id = Uuid::new_v4();
    let created = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::seconds(seq);
    sqlx::query(
        "INSERT INTO film_work (id, title, description, creation_date, rating, type, created) \
         VALUES ($1, $2, $3, $4, 8.5, 'movie', $5)",
    )
    .bind(id)
    .bind(title)
    .bind(format!("About {title}"))
    .bind(NaiveDate::from_ymd_opt(1999, 3, 31).unwrap())
    .bind(created)
    .execute(pool)
    .await
    .unwrap();
    id
}

pub async fn insert_genre(pool: &PgPool, name: &str) -> Uuid {
    let id = Uuid::new_v4();
    sqlx::query("INSERT INTO genre (id, name) VALUES ($1, $2)")
        .bind(id)
        .bind(name)
        .execute(pool)
        .await
        .unwrap();
    id
}

pub async fn insert_person(pool: &PgPool, full_name: &str) -> Uuid {
    let id = Uuid::new_v4();
    sqlx::query("INSERT INTO person (id, full_name) VALUES ($1, $2)")
        .bind(id)
        .bind(full_name)
        .execute(pool)
        .await
        .unwrap();
    id
}

pub async fn link_genre(pool: &PgPool, film_id: Uuid, genre_id: Uuid) {
    sqlx::query("INSERT INTO genre_film_work (id, film_work_id, genre_id) VALUES ($1, $2, $3)")
        .bind(Uuid::new_v4())
        .bind(film_id)
        .bind(genre_id)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn link_person(pool: &PgPool, film_id: Uuid, person_id: Uuid, role: &str) {
    sqlx::query(
        "INSERT INTO person_film_work (id, film_work_id, person_id, role) \
         VALUES ($1, $2, $3, $4)",
    )
    .bind(Uuid::new_v4())
    .bind(film_id)
    .bind(person_id)
    .bind(role)
    .execute(pool)
    .await
    .unwrap();
}

/// Insert `n` film works in a known order and return their ids in that order.
pub async fn seed_films(pool: &PgPool, n: i64) -> Vec<Uuid> {
    let mut ids = Vec::with_capacity(n as usize);
    for i in 0..n {
        ids.push(insert_film(pool, &format!("Film {i:03}"), i).await);
    }
    ids
}
