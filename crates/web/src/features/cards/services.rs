use documents::{ParticipantCard, compose_card_data};
use sqlx::PgPool;
use storage::{
    dto::card::CardData,
    models::{Event, Participant},
    repository::{event::EventRepository, participant::ParticipantRepository},
};
use uuid::Uuid;

use crate::error::WebResult;

async fn load(pool: &PgPool, event_id: Uuid, participant_id: Uuid) -> WebResult<(Event, Participant)> {
    let event = EventRepository::new(pool).find_by_id(event_id).await?;
    let participant = ParticipantRepository::new(pool)
        .find_in_event(event_id, participant_id)
        .await?;

    Ok((event, participant))
}

/// Compose the card view of a participant
pub async fn get_card_data(pool: &PgPool, event_id: Uuid, participant_id: Uuid) -> WebResult<CardData> {
    let (event, participant) = load(pool, event_id, participant_id).await?;

    Ok(compose_card_data(&event, &participant)?)
}

/// Render the participant's card, returning its registration number with the PDF
pub async fn render_card(
    pool: &PgPool,
    event_id: Uuid,
    participant_id: Uuid,
) -> WebResult<(String, Vec<u8>)> {
    let (event, participant) = load(pool, event_id, participant_id).await?;
    let bytes = ParticipantCard::new(&event, &participant).render()?;

    Ok((participant.registration_number, bytes))
}
