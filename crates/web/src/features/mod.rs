pub mod cards;
pub mod reports;

use axum::{
    http::header,
    response::{IntoResponse, Response},
};
use storage::dto::card::Disposition;

/// PDF body with content type and disposition headers set
pub fn pdf_response(bytes: Vec<u8>, disposition: Disposition, filename: &str) -> Response {
    (
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, disposition.header_value(filename)),
        ],
        bytes,
    )
        .into_response()
}
