pub mod admin;
pub mod event;
pub mod participant;
pub mod prize;

#[cfg(test)]
pub(crate) mod testing {
    use sqlx::PgPool;
    use uuid::Uuid;

    use crate::Database;

    /// Migrated pool on `DATABASE_URL`
    pub async fn pool() -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let db = Database::new(&url).await.unwrap();
        db.run_migrations().await.unwrap();
        db.pool().clone()
    }

    pub async fn insert_admin(pool: &PgPool, name: &str) -> Uuid {
        sqlx::query_scalar(
            "INSERT INTO admins (email, name, password_hash) VALUES ($1, $2, 'x') RETURNING admin_id",
        )
        .bind(format!("{}@example.com", Uuid::new_v4()))
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
    }

    pub async fn insert_event(pool: &PgPool, created_by: Uuid, name: &str) -> Uuid {
        sqlx::query_scalar(
            "INSERT INTO events (name, event_date, created_by) VALUES ($1, '2025-08-17', $2) RETURNING event_id",
        )
        .bind(name)
        .bind(created_by)
        .fetch_one(pool)
        .await
        .unwrap()
    }

    pub async fn insert_participant(pool: &PgPool, event_id: Uuid, name: &str, number: &str) -> Uuid {
        sqlx::query_scalar(
            r#"
            INSERT INTO participants (event_id, name, nik, registration_number)
            VALUES ($1, $2, '3201234567890001', $3)
            RETURNING participant_id
            "#,
        )
        .bind(event_id)
        .bind(name)
        .bind(number)
        .fetch_one(pool)
        .await
        .unwrap()
    }
}
