use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, de};
use uuid::Uuid;

use super::PayloadError;
use crate::formatting::parse_date;
use crate::models::{Creator, Event};

#[derive(Debug, Clone, Deserialize)]
pub struct CreatorPayload {
    pub name: String,
}

/// Event as received from external payloads, legacy field names included
#[derive(Debug, Clone, Deserialize)]
pub struct EventPayload {
    #[serde(alias = "event_id")]
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(
        default,
        alias = "eventDate",
        alias = "date",
        deserialize_with = "lenient_date"
    )]
    pub event_date: Option<NaiveDate>,
    #[serde(default)]
    pub creator: Option<CreatorPayload>,
    #[serde(default, alias = "createdBy")]
    pub creator_name: Option<String>,
}

impl TryFrom<EventPayload> for Event {
    type Error = PayloadError;

    fn try_from(payload: EventPayload) -> Result<Self, Self::Error> {
        let creator_name = payload
            .creator
            .map(|c| c.name)
            .or(payload.creator_name)
            .ok_or(PayloadError::MissingField("creator"))?;

        Ok(Self {
            id: payload.id,
            name: payload.name,
            location: payload.location,
            event_date: payload.event_date,
            creator: Creator { name: creator_name },
            banner: None,
        })
    }
}

fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;

    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => parse_date(value)
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("invalid date: {value}"))),
    }
}
