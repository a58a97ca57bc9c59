use documents::WinnerListReport;
use sqlx::PgPool;
use storage::repository::{event::EventRepository, prize::PrizeRepository};
use uuid::Uuid;

use crate::error::WebResult;

/// Render the winner list of an event
pub async fn render_winner_list(pool: &PgPool, event_id: Uuid) -> WebResult<Vec<u8>> {
    let event = EventRepository::new(pool).find_by_id(event_id).await?;
    let prizes = PrizeRepository::new(pool).list_with_winners(event_id).await?;

    Ok(WinnerListReport::new(&event, &prizes).render()?)
}
