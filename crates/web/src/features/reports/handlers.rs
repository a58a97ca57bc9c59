use axum::{
    extract::{Path, State},
    response::Response,
};
use storage::{Database, dto::card::Disposition};
use uuid::Uuid;

use crate::error::WebError;
use crate::features::pdf_response;

use super::services;

#[utoipa::path(
    get,
    path = "/api/events/{event_id}/winners/pdf",
    params(
        ("event_id" = Uuid, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Winner list as PDF"),
        (status = 404, description = "Event not found")
    ),
    tag = "reports"
)]
pub async fn download_winner_list(
    State(db): State<Database>,
    Path(event_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let bytes = services::render_winner_list(db.pool(), event_id).await?;

    Ok(pdf_response(
        bytes,
        Disposition::Attachment,
        &format!("daftar-pemenang-{}.pdf", event_id),
    ))
}
