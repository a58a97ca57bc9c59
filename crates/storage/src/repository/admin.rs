use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::Admin;

/// Repository for administrator accounts
pub struct AdminRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AdminRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<Admin>> {
        let admin = sqlx::query_as::<_, Admin>(
            r#"
            SELECT admin_id, email, name, password_hash, created_at, updated_at
            FROM admins
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(self.pool)
        .await?;

        Ok(admin)
    }

    pub async fn create(&self, email: &str, name: &str, password_hash: &str) -> Result<Admin> {
        let admin = sqlx::query_as::<_, Admin>(
            r#"
            INSERT INTO admins (email, name, password_hash)
            VALUES ($1, $2, $3)
            RETURNING admin_id, email, name, password_hash, created_at, updated_at
            "#,
        )
        .bind(email)
        .bind(name)
        .bind(password_hash)
        .fetch_one(self.pool)
        .await
        .map_err(StorageError::from)
        .map_err(|e| {
            if e.is_unique_violation() {
                StorageError::ConstraintViolation("Email already exists".to_string())
            } else {
                e
            }
        })?;

        Ok(admin)
    }

    /// Overwrite the display name and password hash of an existing account
    pub async fn update_credentials(
        &self,
        admin_id: Uuid,
        name: &str,
        password_hash: &str,
    ) -> Result<Admin> {
        let admin = sqlx::query_as::<_, Admin>(
            r#"
            UPDATE admins
            SET name = $2, password_hash = $3, updated_at = NOW()
            WHERE admin_id = $1
            RETURNING admin_id, email, name, password_hash, created_at, updated_at
            "#,
        )
        .bind(admin_id)
        .bind(name)
        .bind(password_hash)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::testing;

    #[tokio::test]
    #[ignore] // Only run against a live database
    async fn test_create_find_and_update_admin() {
        let pool = testing::pool().await;
        let repo = AdminRepository::new(&pool);
        let email = format!("{}@example.com", Uuid::new_v4());

        assert!(repo.find_by_email(&email).await.unwrap().is_none());

        let created = repo.create(&email, "Admin", "hash-1").await.unwrap();
        let found = repo.find_by_email(&email).await.unwrap().unwrap();
        assert_eq!(found.admin_id, created.admin_id);

        let updated = repo
            .update_credentials(created.admin_id, "Renamed", "hash-2")
            .await
            .unwrap();
        assert_eq!(updated.admin_id, created.admin_id);
        assert_eq!(updated.name, "Renamed");
        assert_eq!(updated.password_hash, "hash-2");
        assert!(updated.updated_at >= created.updated_at);

        let duplicate = repo.create(&email, "Other", "hash-3").await.unwrap_err();
        assert!(matches!(duplicate, StorageError::ConstraintViolation(_)));

        let missing = repo
            .update_credentials(Uuid::new_v4(), "Nobody", "hash")
            .await
            .unwrap_err();
        assert!(matches!(missing, StorageError::NotFound));
    }
}
