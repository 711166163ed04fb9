//! Film work projection returned by the catalog endpoints.
//!
//! A `FilmWorkRecord` is not a table row: it is one `film_work` row with the
//! names of its genres and of its people, grouped by role, aggregated in SQL.

use catalog_core::film_work::FilmWorkType;
use catalog_core::types::DbId;
use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

/// A film work with its genre names and role-partitioned person names.
///
/// The four list fields are always present. They are empty when nothing is
/// linked, sorted, and free of duplicates.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct FilmWorkRecord {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub creation_date: NaiveDate,
    pub rating: f64,
    #[sqlx(rename = "type", try_from = "String")]
    #[serde(rename = "type")]
    pub kind: FilmWorkType,
    pub genres: Vec<String>,
    pub actors: Vec<String>,
    pub directors: Vec<String>,
    pub writers: Vec<String>,
}
