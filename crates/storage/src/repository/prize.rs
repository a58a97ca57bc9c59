use std::collections::HashMap;

use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::error::Result;
use crate::models::{Prize, Winner};

#[derive(FromRow)]
struct PrizeRow {
    prize_id: Uuid,
    name: String,
    quantity: i32,
}

#[derive(FromRow)]
struct WinnerRow {
    prize_id: Uuid,
    name: String,
    participant_number: String,
}

/// Repository for Prize database operations
pub struct PrizeRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> PrizeRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List an event's prizes with their winners in draw order
    pub async fn list_with_winners(&self, event_id: Uuid) -> Result<Vec<Prize>> {
        let prizes = sqlx::query_as::<_, PrizeRow>(
            r#"
            SELECT prize_id, name, quantity
            FROM prizes
            WHERE event_id = $1
            ORDER BY created_at, name
            "#,
        )
        .bind(event_id)
        .fetch_all(self.pool)
        .await?;

        let winners = sqlx::query_as::<_, WinnerRow>(
            r#"
            SELECT w.prize_id, p.name, p.registration_number AS participant_number
            FROM prize_winners w
            JOIN prizes z ON z.prize_id = w.prize_id
            JOIN participants p ON p.participant_id = w.participant_id
            WHERE z.event_id = $1
            ORDER BY w.won_at, w.winner_id
            "#,
        )
        .bind(event_id)
        .fetch_all(self.pool)
        .await?;

        Ok(assemble(prizes, winners))
    }
}

fn assemble(prizes: Vec<PrizeRow>, winners: Vec<WinnerRow>) -> Vec<Prize> {
    let mut by_prize: HashMap<Uuid, Vec<Winner>> = HashMap::new();
    for row in winners {
        by_prize.entry(row.prize_id).or_default().push(Winner {
            name: row.name,
            participant_number: row.participant_number,
        });
    }

    prizes
        .into_iter()
        .map(|row| Prize {
            id: row.prize_id,
            name: row.name,
            quantity: row.quantity,
            winners: by_prize.remove(&row.prize_id).unwrap_or_default(),
        })
        .collect()
}
