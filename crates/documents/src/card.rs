use storage::dto::card::CardData;
use storage::formatting::{QrPayload, censor_nik, indonesian_long_date};
use storage::models::{Event, Participant};

use crate::engine::{Document, PageLayout, PdfRenderer, TextStyle};
use crate::error::Result;
use crate::qr::{QrMatrix, render_svg};

const QR_SIZE_MM: f32 = 45.0;

fn qr_payload(event: &Event, participant: &Participant) -> QrPayload {
    QrPayload::new(
        event.id,
        participant.id,
        &participant.registration_number,
        &participant.name,
    )
}

/// Builds the card view of one participant, QR markup included
pub fn compose_card_data(event: &Event, participant: &Participant) -> Result<CardData> {
    let data = qr_payload(event, participant).encode()?;

    Ok(CardData {
        event: event.clone(),
        participant: participant.clone(),
        qr_code_svg: render_svg(&data)?,
        banner_image: event.banner.as_ref().map(|banner| banner.to_data_uri()),
    })
}

/// Printable A6 badge of one participant
pub struct ParticipantCard<'a> {
    event: &'a Event,
    participant: &'a Participant,
}

impl<'a> ParticipantCard<'a> {
    pub fn new(event: &'a Event, participant: &'a Participant) -> Self {
        Self { event, participant }
    }

    pub fn document(&self) -> Result<Document> {
        let data = qr_payload(self.event, self.participant).encode()?;
        let matrix = QrMatrix::encode(&data)?;

        let mut document = Document::new(format!(
            "Kartu Peserta {}",
            self.participant.registration_number
        ));
        let heading = TextStyle::regular(14.0).bold().centered();
        let detail = TextStyle::regular(9.0).centered();

        document.text(&self.event.name, heading);
        if let Some(date) = self.event.event_date {
            document.text(indonesian_long_date(date), detail);
        }
        if let Some(location) = &self.event.location {
            document.text(location, detail);
        }

        document
            .spacing(4.0)
            .qr_code(matrix, QR_SIZE_MM)
            .spacing(4.0)
            .text(&self.participant.name, TextStyle::regular(13.0).bold().centered())
            .text(
                format!("No. Registrasi: {}", self.participant.registration_number),
                detail,
            );

        if let Some(institution) = &self.participant.institution {
            document.text(institution, detail);
        }
        document.text(
            format!("NIK: {}", censor_nik(&self.participant.nik)),
            detail,
        );

        Ok(document)
    }

    pub fn render(&self) -> Result<Vec<u8>> {
        PdfRenderer::new(PageLayout::A6).render(&self.document()?)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use storage::models::{Banner, Creator};
    use uuid::Uuid;

    use super::*;
    use crate::engine::Block;

    fn fixtures() -> (Event, Participant) {
        let event = Event {
            id: Uuid::new_v4(),
            name: "Seminar Nasional".to_string(),
            location: Some("Aula Utama".to_string()),
            event_date: NaiveDate::from_ymd_opt(2025, 8, 17),
            creator: Creator {
                name: "Panitia".to_string(),
            },
            banner: None,
        };
        let participant = Participant {
            id: Uuid::new_v4(),
            event_id: event.id,
            name: "Siti Aminah".to_string(),
            nik: "3201234567890001".to_string(),
            phone: None,
            institution: Some("Universitas Indonesia".to_string()),
            email: None,
            registration_number: "SEM-0042".to_string(),
        };
        (event, participant)
    }

    #[test]
    fn test_card_lines_censor_nik() {
        let (event, participant) = fixtures();
        let document = ParticipantCard::new(&event, &participant).document().unwrap();
        let lines: Vec<_> = document.lines().collect();

        assert_eq!(
            lines,
            [
                "Seminar Nasional",
                "Minggu, 17 Agustus 2025",
                "Aula Utama",
                "Siti Aminah",
                "No. Registrasi: SEM-0042",
                "Universitas Indonesia",
                "NIK: 3201****0001",
            ]
        );
        assert!(
            document
                .blocks()
                .iter()
                .any(|block| matches!(block, Block::QrCode { .. }))
        );
    }

    #[test]
    fn test_card_render_is_pdf() {
        let (event, participant) = fixtures();
        let bytes = ParticipantCard::new(&event, &participant).render().unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_compose_card_data() {
        let (mut event, participant) = fixtures();
        event.banner = Some(Banner {
            mime_type: "image/jpeg".to_string(),
            bytes: vec![0xff, 0xd8],
        });

        let card = compose_card_data(&event, &participant).unwrap();

        assert!(card.qr_code_svg.contains("<svg"));
        assert_eq!(card.banner_image.as_deref(), Some("data:image/jpeg;base64,/9g="));
        assert_eq!(card.participant.nik, participant.nik);
    }
}
