use serde::Deserialize;
use uuid::Uuid;

use super::{PayloadError, event::EventPayload};
use crate::models::{Event, Prize, Winner};

#[derive(Debug, Clone, Deserialize)]
pub struct WinnerPayload {
    pub name: String,
    #[serde(alias = "participantNumber", alias = "registration_number")]
    pub participant_number: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PrizePayload {
    #[serde(alias = "prize_id")]
    pub id: Uuid,
    pub name: String,
    #[serde(alias = "stock")]
    pub quantity: i32,
    #[serde(default, alias = "participants")]
    pub winners: Vec<WinnerPayload>,
}

/// Input of an offline winner-list render: one event and its prizes
#[derive(Debug, Clone, Deserialize)]
pub struct WinnerReportPayload {
    pub event: EventPayload,
    #[serde(default)]
    pub prizes: Vec<PrizePayload>,
}

impl From<WinnerPayload> for Winner {
    fn from(payload: WinnerPayload) -> Self {
        Self {
            name: payload.name,
            participant_number: payload.participant_number,
        }
    }
}

impl From<PrizePayload> for Prize {
    fn from(payload: PrizePayload) -> Self {
        Self {
            id: payload.id,
            name: payload.name,
            quantity: payload.quantity,
            winners: payload.winners.into_iter().map(Winner::from).collect(),
        }
    }
}

impl WinnerReportPayload {
    pub fn into_parts(self) -> Result<(Event, Vec<Prize>), PayloadError> {
        let event = Event::try_from(self.event)?;
        let prizes = self.prizes.into_iter().map(Prize::from).collect();
        Ok((event, prizes))
    }
}
