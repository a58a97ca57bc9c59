//! Wire shapes at the API boundary and their adapters into the canonical models.

pub mod card;
pub mod event;
pub mod prize;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PayloadError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}
