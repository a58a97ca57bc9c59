pub mod card;
pub mod engine;
pub mod error;
pub mod qr;
pub mod winners;

pub use card::{ParticipantCard, compose_card_data};
pub use engine::{Document, PageLayout, PdfRenderer};
pub use error::{DocumentError, Result};
pub use winners::WinnerListReport;
