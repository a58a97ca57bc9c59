use uuid::Uuid;

use crate::Result;
use storage::models::Admin;

/// Persistence seam of the admin seeder
#[async_trait::async_trait]
pub trait AdminStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<Admin>>;

    async fn create(&self, email: &str, name: &str, password_hash: &str) -> Result<Admin>;

    async fn update_credentials(
        &self,
        admin_id: Uuid,
        name: &str,
        password_hash: &str,
    ) -> Result<Admin>;
}
