//! Film work categories.
//!
//! The string values must match the `film_work.type` CHECK constraint.

use serde::Serialize;

use crate::error::CoreError;

pub const TYPE_MOVIE: &str = "movie";
pub const TYPE_TV_SHOW: &str = "tv_show";

/// Entity name used in not-found errors.
pub const FILM_WORK_ENTITY: &str = "FilmWork";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FilmWorkType {
    Movie,
    TvShow,
}

impl FilmWorkType {
    pub const ALL: [FilmWorkType; 2] = [FilmWorkType::Movie, FilmWorkType::TvShow];

    pub fn as_str(self) -> &'static str {
        match self {
            FilmWorkType::Movie => TYPE_MOVIE,
            FilmWorkType::TvShow => TYPE_TV_SHOW,
        }
    }
}

/// Used when decoding the `type` column, which sqlx hands over as a `String`.
impl TryFrom<String> for FilmWorkType {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        FilmWorkType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .ok_or_else(|| CoreError::Validation(format!("unknown film work type '{value}'")))
    }
}
