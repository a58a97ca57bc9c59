use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::Participant;

/// Repository for Participant database operations
pub struct ParticipantRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ParticipantRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get a participant registered to the given event
    pub async fn find_in_event(&self, event_id: Uuid, participant_id: Uuid) -> Result<Participant> {
        let participant = sqlx::query_as::<_, Participant>(
            r#"
            SELECT participant_id AS id, event_id, name, nik, phone, institution,
                   email, registration_number
            FROM participants
            WHERE participant_id = $1 AND event_id = $2
            "#,
        )
        .bind(participant_id)
        .bind(event_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(participant)
    }
}
