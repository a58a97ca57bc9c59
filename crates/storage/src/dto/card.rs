use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::{PayloadError, event::EventPayload};
use crate::models::{Event, Participant};

/// Composed, read-only view used to render one participant's badge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CardData {
    pub event: Event,
    pub participant: Participant,
    pub qr_code_svg: String,
    /// `data:` URI of the event banner, when the event has one
    pub banner_image: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CardDataPayload {
    pub event: EventPayload,
    pub participant: Participant,
    pub qr_code_svg: String,
    #[serde(default, alias = "banner")]
    pub banner_image: Option<String>,
}

impl TryFrom<CardDataPayload> for CardData {
    type Error = PayloadError;

    fn try_from(payload: CardDataPayload) -> Result<Self, Self::Error> {
        Ok(Self {
            event: Event::try_from(payload.event)?,
            participant: payload.participant,
            qr_code_svg: payload.qr_code_svg,
            banner_image: payload.banner_image,
        })
    }
}

/// How a rendered PDF should be presented by the receiving client
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Disposition {
    Inline,
    #[default]
    Attachment,
}

impl Disposition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inline => "inline",
            Self::Attachment => "attachment",
        }
    }

    pub fn header_value(&self, filename: &str) -> String {
        format!("{}; filename=\"{}\"", self.as_str(), filename)
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CardDownloadQuery {
    /// `inline` to preview, `attachment` (default) to download
    #[serde(default)]
    pub disposition: Disposition,
}

/// `kartu-{registration_number}.pdf`, restricted to header-safe characters
pub fn card_filename(registration_number: &str) -> String {
    let safe: String = registration_number
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '-'
            }
        })
        .collect();

    format!("kartu-{safe}.pdf")
}

/// Extracts the `filename` parameter of a `Content-Disposition` header
pub fn filename_from_header(value: &str) -> Option<String> {
    value
        .split(';')
        .map(str::trim)
        .find_map(|part| part.strip_prefix("filename="))
        .map(|name| name.trim_matches('"').to_string())
        .filter(|name| !name.is_empty())
}
