//! Read-only repository for film works and their genre/person aggregates.

use catalog_core::pagination::{Page, PageRequest, Paginator};
use catalog_core::roles::Role;
use catalog_core::types::DbId;
use sqlx::postgres::PgArguments;
use sqlx::query::QueryAs;
use sqlx::{PgConnection, PgPool, Postgres};

use crate::models::film_work::FilmWorkRecord;

/// Film work columns carried into the projection. `created` is grouped on
/// as well so the outer query can keep insertion order.
const FILM_WORK_COLUMNS: &str =
    "fw.id, fw.title, fw.description, fw.creation_date, fw.rating, fw.type";

/// First bind slot free after the per-role parameters.
const FIRST_FREE_PARAM: usize = Role::ALL.len() + 1;

/// Build the projection query shared by the list and detail lookups.
///
/// `source` selects the film work rows to project and is aliased `fw`; it is
/// narrowed before any join so only those rows are aggregated. Genres and
/// people are then joined once each and folded back to one row per film work
/// with `GROUP BY`. Each role list is a conditional aggregate over the same
/// person join, so names never leak between roles. `DISTINCT` removes the
/// duplicates the double join produces and sorts each array.
///
/// Bind order: one slot per [`Role::ALL`] entry, then whatever `source`
/// adds (starting at [`FIRST_FREE_PARAM`]).
fn projection_query(source: &str) -> String {
    let role_columns: String = Role::ALL
        .iter()
        .enumerate()
        .map(|(i, role)| {
            format!(
                ", COALESCE(ARRAY_AGG(DISTINCT p.full_name) FILTER (WHERE pfw.role = ${}), \
                     ARRAY[]::text[]) AS {}",
                i + 1,
                role.column()
            )
        })
        .collect();

    format!(
        "SELECT {FILM_WORK_COLUMNS}, \
            COALESCE(ARRAY_AGG(DISTINCT g.name) FILTER (WHERE g.id IS NOT NULL), \
                ARRAY[]::text[]) AS genres\
            {role_columns} \
         FROM ({source}) fw \
         LEFT JOIN genre_film_work gfw ON gfw.film_work_id = fw.id \
         LEFT JOIN genre g ON g.id = gfw.genre_id \
         LEFT JOIN person_film_work pfw ON pfw.film_work_id = fw.id \
         LEFT JOIN person p ON p.id = pfw.person_id \
         GROUP BY {FILM_WORK_COLUMNS}, fw.created \
         ORDER BY fw.created, fw.id"
    )
}

/// Page query: the `LIMIT`/`OFFSET` window is cut from `film_work` by the
/// `(created, id)` index, then only that window is joined and aggregated.
fn list_query() -> String {
    projection_query(&format!(
        "SELECT * FROM film_work ORDER BY created, id LIMIT ${} OFFSET ${}",
        FIRST_FREE_PARAM,
        FIRST_FREE_PARAM + 1
    ))
}

fn detail_query() -> String {
    projection_query(&format!(
        "SELECT * FROM film_work WHERE id = ${FIRST_FREE_PARAM}"
    ))
}

/// Bind the role filters in [`Role::ALL`] order.
fn bind_roles<'q>(
    query: QueryAs<'q, Postgres, FilmWorkRecord, PgArguments>,
) -> QueryAs<'q, Postgres, FilmWorkRecord, PgArguments> {
    Role::ALL
        .iter()
        .fold(query, |query, role| query.bind(role.as_str()))
}

/// Provides the list and detail lookups behind the `/films` endpoints.
pub struct FilmWorkRepo;

impl FilmWorkRepo {
    /// Total number of film works.
    pub async fn count(conn: &mut PgConnection) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM film_work")
            .fetch_one(conn)
            .await
    }

    /// Fetch projected records in insertion order, `limit` rows from `offset`.
    pub async fn list(
        conn: &mut PgConnection,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<FilmWorkRecord>, sqlx::Error> {
        let query = list_query();
        bind_roles(sqlx::query_as(&query))
            .bind(limit)
            .bind(offset)
            .fetch_all(conn)
            .await
    }

    /// Resolve `request` against the current row count and fetch that page.
    ///
    /// The count and the page are read from one repeatable-read snapshot so
    /// the envelope always describes the rows it carries.
    pub async fn list_page(
        pool: &PgPool,
        request: PageRequest,
        page_size: i64,
    ) -> Result<Page<FilmWorkRecord>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
            .execute(&mut *tx)
            .await?;

        let paginator = Paginator::new(Self::count(&mut tx).await?, page_size);
        let window = paginator.window(request);
        let records = if window.is_empty() {
            Vec::new()
        } else {
            Self::list(&mut tx, window.offset, window.limit).await?
        };

        tx.commit().await?;

        tracing::debug!(
            page = window.number,
            count = paginator.count(),
            returned = records.len(),
            "Fetched film work page"
        );
        Ok(paginator.page(window, records))
    }

    /// Find one projected record by its ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<FilmWorkRecord>, sqlx::Error> {
        let query = detail_query();
        bind_roles(sqlx::query_as(&query))
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
