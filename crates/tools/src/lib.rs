pub mod cards;
pub mod error;
pub mod reports;
pub mod seed;
pub mod traits;

pub use cards::{CardClient, CardDocument};
pub use error::{Result, ToolsError};
pub use seed::{AdminCredentials, AdminSeeder, PgAdminStore, SeedOutcome};
pub use traits::AdminStore;
