use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{download_card, get_card_data};

pub fn routes() -> Router<Database> {
    Router::new()
        .route(
            "/:event_id/participants/:participant_id/card_data",
            get(get_card_data),
        )
        .route(
            "/:event_id/participants/:participant_id/download_card",
            get(download_card),
        )
}
