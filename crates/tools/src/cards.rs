use std::path::Path;
use std::time::Duration;

use reqwest::{Client, header::CONTENT_DISPOSITION};
use storage::dto::card::{CardData, CardDataPayload, Disposition, filename_from_header};
use uuid::Uuid;

use crate::error::Result;

/// A rendered participant card and how the caller should present it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardDocument {
    pub bytes: Vec<u8>,
    pub disposition: Disposition,
    pub filename: String,
}

impl CardDocument {
    pub async fn save(&self, path: &Path) -> Result<()> {
        tokio::fs::write(path, &self.bytes).await?;
        Ok(())
    }
}

/// Client for the participant card endpoints.
///
/// Transport and HTTP status failures are returned as the underlying
/// `reqwest::Error`; nothing is retried.
pub struct CardClient {
    base_url: String,
    client: Client,
}

impl CardClient {
    /// # Arguments
    /// * `base_url` - API root, e.g. "http://localhost:8000"
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;

        Ok(Self::with_client(base_url, client))
    }

    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        }
    }

    fn card_url(&self, event_id: Uuid, participant_id: Uuid, resource: &str) -> String {
        format!(
            "{}/api/events/{}/participants/{}/{}",
            self.base_url, event_id, participant_id, resource
        )
    }

    pub async fn get_card_data(&self, event_id: Uuid, participant_id: Uuid) -> Result<CardData> {
        let url = self.card_url(event_id, participant_id, "card_data");
        tracing::debug!("Fetching card data from {}", url);

        let payload = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<CardDataPayload>()
            .await?;

        Ok(CardData::try_from(payload)?)
    }

    /// Fetch the card PDF for inline display
    pub async fn preview_card(&self, event_id: Uuid, participant_id: Uuid) -> Result<CardDocument> {
        self.fetch_card(event_id, participant_id, Disposition::Inline)
            .await
    }

    /// Fetch the card PDF for saving as a file
    pub async fn download_card(&self, event_id: Uuid, participant_id: Uuid) -> Result<CardDocument> {
        self.fetch_card(event_id, participant_id, Disposition::Attachment)
            .await
    }

    async fn fetch_card(
        &self,
        event_id: Uuid,
        participant_id: Uuid,
        disposition: Disposition,
    ) -> Result<CardDocument> {
        let url = self.card_url(event_id, participant_id, "download_card");
        tracing::debug!("Fetching card PDF from {} ({})", url, disposition.as_str());

        let response = self
            .client
            .get(&url)
            .query(&[("disposition", disposition.as_str())])
            .send()
            .await?
            .error_for_status()?;

        let filename = response
            .headers()
            .get(CONTENT_DISPOSITION)
            .and_then(|value| value.to_str().ok())
            .and_then(filename_from_header)
            .unwrap_or_else(|| format!("kartu-{}.pdf", participant_id));
        let bytes = response.bytes().await?.to_vec();

        Ok(CardDocument {
            bytes,
            disposition,
            filename,
        })
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        Json, Router,
        extract::{Path as UrlPath, Query},
        http::{StatusCode, header},
        response::IntoResponse,
        routing::get,
    };
    use serde_json::json;
    use storage::dto::card::CardDownloadQuery;

    use super::*;
    use crate::ToolsError;

    const EVENT: &str = "6f1c1d2e-0000-4000-8000-000000000001";
    const PARTICIPANT: &str = "6f1c1d2e-0000-4000-8000-000000000003";

    async fn card_data(UrlPath((event_id, participant_id)): UrlPath<(Uuid, Uuid)>) -> impl IntoResponse {
        if participant_id.to_string() != PARTICIPANT {
            return (StatusCode::NOT_FOUND, Json(json!({ "error": "Resource not found" })));
        }

        (
            StatusCode::OK,
            Json(json!({
                "event": {
                    "event_id": event_id,
                    "name": "Seminar",
                    "eventDate": "2025-08-17",
                    "creator_name": "Panitia"
                },
                "participant": {
                    "id": participant_id,
                    "event_id": event_id,
                    "name": "Siti",
                    "nik": "3201234567890001",
                    "phone": null,
                    "institution": null,
                    "email": "siti@example.com",
                    "registration_number": "SEM-001"
                },
                "qr_code_svg": "<svg></svg>",
                "banner_image": null
            })),
        )
    }

    async fn download_card(Query(query): Query<CardDownloadQuery>) -> impl IntoResponse {
        (
            [
                (header::CONTENT_TYPE, "application/pdf".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    query.disposition.header_value("kartu-SEM-001.pdf"),
                ),
            ],
            format!("%PDF-{}", query.disposition.as_str()),
        )
    }

    async fn spawn_server() -> String {
        let app = Router::new()
            .route(
                "/api/events/:event_id/participants/:participant_id/card_data",
                get(card_data),
            )
            .route(
                "/api/events/:event_id/participants/:participant_id/download_card",
                get(download_card),
            );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{}/", addr)
    }

    fn ids() -> (Uuid, Uuid) {
        (EVENT.parse().unwrap(), PARTICIPANT.parse().unwrap())
    }

    #[tokio::test]
    async fn test_get_card_data_adapts_legacy_event_fields() {
        let client = CardClient::new(spawn_server().await).unwrap();
        let (event_id, participant_id) = ids();

        let card = client.get_card_data(event_id, participant_id).await.unwrap();

        assert_eq!(card.event.id, event_id);
        assert_eq!(card.event.creator.name, "Panitia");
        assert_eq!(
            card.event.event_date,
            chrono::NaiveDate::from_ymd_opt(2025, 8, 17)
        );
        assert_eq!(card.participant.registration_number, "SEM-001");
        assert_eq!(card.banner_image, None);
    }

    #[tokio::test]
    async fn test_get_card_data_propagates_http_status() {
        let client = CardClient::new(spawn_server().await).unwrap();
        let (event_id, _) = ids();

        let error = client
            .get_card_data(event_id, Uuid::new_v4())
            .await
            .unwrap_err();

        match error {
            ToolsError::RequestError(e) => {
                assert_eq!(e.status(), Some(reqwest::StatusCode::NOT_FOUND))
            }
            other => panic!("expected request error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_preview_and_download_dispositions() {
        let client = CardClient::new(spawn_server().await).unwrap();
        let (event_id, participant_id) = ids();

        let preview = client.preview_card(event_id, participant_id).await.unwrap();
        assert_eq!(preview.disposition, Disposition::Inline);
        assert_eq!(preview.bytes, b"%PDF-inline");
        assert_eq!(preview.filename, "kartu-SEM-001.pdf");

        let download = client.download_card(event_id, participant_id).await.unwrap();
        assert_eq!(download.disposition, Disposition::Attachment);
        assert_eq!(download.bytes, b"%PDF-attachment");
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        let client = CardClient::new("http://127.0.0.1:1").unwrap();
        let (event_id, participant_id) = ids();

        let error = client
            .download_card(event_id, participant_id)
            .await
            .unwrap_err();

        assert!(matches!(error, ToolsError::RequestError(ref e) if e.is_connect()));
    }
}
