use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::card::{CardData, CardDownloadQuery, card_filename},
};
use uuid::Uuid;

use crate::error::WebError;
use crate::features::pdf_response;

use super::services;

#[utoipa::path(
    get,
    path = "/api/events/{event_id}/participants/{participant_id}/card_data",
    params(
        ("event_id" = Uuid, Path, description = "Event ID"),
        ("participant_id" = Uuid, Path, description = "Participant ID")
    ),
    responses(
        (status = 200, description = "Card data composed successfully", body = CardData),
        (status = 404, description = "Event or participant not found")
    ),
    tag = "cards"
)]
pub async fn get_card_data(
    State(db): State<Database>,
    Path((event_id, participant_id)): Path<(Uuid, Uuid)>,
) -> Result<Response, WebError> {
    let card = services::get_card_data(db.pool(), event_id, participant_id).await?;

    Ok(Json(card).into_response())
}

#[utoipa::path(
    get,
    path = "/api/events/{event_id}/participants/{participant_id}/download_card",
    params(
        ("event_id" = Uuid, Path, description = "Event ID"),
        ("participant_id" = Uuid, Path, description = "Participant ID"),
        CardDownloadQuery
    ),
    responses(
        (status = 200, description = "Participant card as PDF"),
        (status = 400, description = "Invalid disposition"),
        (status = 404, description = "Event or participant not found")
    ),
    tag = "cards"
)]
pub async fn download_card(
    State(db): State<Database>,
    Path((event_id, participant_id)): Path<(Uuid, Uuid)>,
    Query(query): Query<CardDownloadQuery>,
) -> Result<Response, WebError> {
    let (registration_number, bytes) =
        services::render_card(db.pool(), event_id, participant_id).await?;

    tracing::info!(
        %event_id,
        %participant_id,
        disposition = query.disposition.as_str(),
        "Serving participant card"
    );

    Ok(pdf_response(
        bytes,
        query.disposition,
        &card_filename(&registration_number),
    ))
}
