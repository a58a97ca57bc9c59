use chrono::NaiveDate;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::{Banner, Creator, Event};

#[derive(FromRow)]
struct EventRow {
    event_id: Uuid,
    name: String,
    location: Option<String>,
    event_date: Option<NaiveDate>,
    creator_name: String,
    banner_mime: Option<String>,
    banner_image: Option<Vec<u8>>,
}

impl From<EventRow> for Event {
    fn from(row: EventRow) -> Self {
        let banner = match (row.banner_mime, row.banner_image) {
            (Some(mime_type), Some(bytes)) if !bytes.is_empty() => Some(Banner { mime_type, bytes }),
            _ => None,
        };

        Self {
            id: row.event_id,
            name: row.name,
            location: row.location,
            event_date: row.event_date,
            creator: Creator {
                name: row.creator_name,
            },
            banner,
        }
    }
}

/// Repository for Event database operations
pub struct EventRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> EventRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get an event by ID, joined with its creator's name
    pub async fn find_by_id(&self, id: Uuid) -> Result<Event> {
        let row = sqlx::query_as::<_, EventRow>(
            r#"
            SELECT e.event_id, e.name, e.location, e.event_date,
                   a.name AS creator_name, e.banner_mime, e.banner_image
            FROM events e
            JOIN admins a ON a.admin_id = e.created_by
            WHERE e.event_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(Event::from(row))
    }
}
