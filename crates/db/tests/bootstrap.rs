use sqlx::PgPool;

/// Connect, migrate, verify the read-model tables exist.
#[sqlx::test(migrations = "./migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    catalog_db::health_check(&pool).await.unwrap();

    let tables = [
        "film_work",
        "genre",
        "genre_film_work",
        "person",
        "person_film_work",
    ];

    for table in tables {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should start empty");
    }
}

/// The role CHECK constraint rejects values outside the known set.
#[sqlx::test(migrations = "./migrations")]
async fn test_unknown_role_is_rejected(pool: PgPool) {
    let film = uuid::Uuid::new_v4();
    let person = uuid::Uuid::new_v4();
    sqlx::query(
        "INSERT INTO film_work (id, title, creation_date, type) \
         VALUES ($1, 'Any', DATE '2001-01-01', 'movie')",
    )
    .bind(film)
    .execute(&pool)
    .await
    .unwrap();
    sqlx::query("INSERT INTO person (id, full_name) VALUES ($1, 'Someone')")
        .bind(person)
        .execute(&pool)
        .await
        .unwrap();

    let result = sqlx::query(
        "INSERT INTO person_film_work (id, film_work_id, person_id, role) \
         VALUES ($1, $2, $3, 'producer')",
    )
    .bind(uuid::Uuid::new_v4())
    .bind(film)
    .bind(person)
    .execute(&pool)
    .await;

    assert!(result.is_err(), "producer is not a catalog role");
}
