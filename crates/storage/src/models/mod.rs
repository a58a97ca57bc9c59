pub mod admin;
pub mod event;
pub mod participant;
pub mod prize;

pub use admin::Admin;
pub use event::{Banner, Creator, Event};
pub use participant::Participant;
pub use prize::{Prize, Winner};
