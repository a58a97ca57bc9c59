use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Winner {
    pub name: String,
    pub participant_number: String,
}

/// A prize with its winners in draw order.
///
/// `winners.len() <= quantity` is expected but never enforced here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Prize {
    pub id: Uuid,
    pub name: String,
    pub quantity: i32,
    pub winners: Vec<Winner>,
}

impl Prize {
    pub fn winner_count(&self) -> usize {
        self.winners.len()
    }

    pub fn has_winners(&self) -> bool {
        !self.winners.is_empty()
    }
}
