use axum::{Router, routing::get};
use storage::Database;

use super::handlers::download_winner_list;

pub fn routes() -> Router<Database> {
    Router::new().route("/:event_id/winners/pdf", get(download_winner_list))
}
