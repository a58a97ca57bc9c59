use std::fmt;

use sqlx::PgPool;
use storage::{models::Admin, repository::admin::AdminRepository};
use uuid::Uuid;
use validator::Validate;

use crate::Result;
use crate::traits::AdminStore;

#[derive(Debug, Clone, Validate)]
pub struct AdminCredentials {
    #[validate(email(message = "Admin email must be a valid address"))]
    pub email: String,

    #[validate(length(min = 1, message = "Admin password must not be empty"))]
    pub password: String,

    #[validate(length(min = 1, max = 255, message = "Admin name must be between 1 and 255 characters"))]
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Created,
    Updated,
}

impl fmt::Display for SeedOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created => write!(f, "created"),
            Self::Updated => write!(f, "updated"),
        }
    }
}

/// Ensures a single admin account exists with the configured credentials
pub struct AdminSeeder<S> {
    store: S,
    cost: u32,
}

impl<S: AdminStore> AdminSeeder<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            cost: bcrypt::DEFAULT_COST,
        }
    }

    /// bcrypt work factor used for the stored hash
    pub fn with_cost(mut self, cost: u32) -> Self {
        self.cost = cost;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Look the account up by email, then overwrite it or create it
    pub async fn seed(&self, credentials: &AdminCredentials) -> Result<SeedOutcome> {
        credentials.validate()?;

        let password_hash = bcrypt::hash(&credentials.password, self.cost)?;

        match self.store.find_by_email(&credentials.email).await? {
            Some(existing) => {
                tracing::debug!(admin_id = %existing.admin_id, "Admin account found, updating");
                self.store
                    .update_credentials(existing.admin_id, &credentials.name, &password_hash)
                    .await?;
                Ok(SeedOutcome::Updated)
            }
            None => {
                tracing::debug!("No admin account for {}, creating", credentials.email);
                self.store
                    .create(&credentials.email, &credentials.name, &password_hash)
                    .await?;
                Ok(SeedOutcome::Created)
            }
        }
    }
}

/// `AdminStore` backed by the admins table
pub struct PgAdminStore {
    pool: PgPool,
}

impl PgAdminStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl AdminStore for PgAdminStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<Admin>> {
        Ok(AdminRepository::new(&self.pool).find_by_email(email).await?)
    }

    async fn create(&self, email: &str, name: &str, password_hash: &str) -> Result<Admin> {
        Ok(AdminRepository::new(&self.pool)
            .create(email, name, password_hash)
            .await?)
    }

    async fn update_credentials(
        &self,
        admin_id: Uuid,
        name: &str,
        password_hash: &str,
    ) -> Result<Admin> {
        Ok(AdminRepository::new(&self.pool)
            .update_credentials(admin_id, name, password_hash)
            .await?)
    }
}
