use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Creator {
    pub name: String,
}

/// Event banner image as stored alongside the event row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl Banner {
    /// Renders the banner as an inline `data:` URI
    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, STANDARD.encode(&self.bytes))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Event {
    pub id: Uuid,
    pub name: String,
    pub location: Option<String>,
    pub event_date: Option<NaiveDate>,
    pub creator: Creator,
    #[serde(skip)]
    pub banner: Option<Banner>,
}
