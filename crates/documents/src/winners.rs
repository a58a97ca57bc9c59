use storage::formatting::format_report_date;
use storage::models::{Event, Prize, Winner};

use crate::engine::{Document, PageLayout, PdfRenderer, TextStyle};
use crate::error::Result;

pub const NO_WINNERS_LINE: &str = "   Belum ada pemenang.";

const TITLE_STYLE: TextStyle = TextStyle::regular(18.0).bold().centered();
const META_STYLE: TextStyle = TextStyle::regular(12.0);
const PRIZE_STYLE: TextStyle = TextStyle::regular(12.0).bold();
const WINNER_STYLE: TextStyle = TextStyle::regular(11.0).italic();
const PRIZE_GAP_MM: f32 = 4.0;

/// Winner list of one event, prizes in the order given
pub struct WinnerListReport<'a> {
    event: &'a Event,
    prizes: &'a [Prize],
}

impl<'a> WinnerListReport<'a> {
    pub fn new(event: &'a Event, prizes: &'a [Prize]) -> Self {
        Self { event, prizes }
    }

    pub fn document(&self) -> Document {
        let mut document = Document::new(self.title());

        document
            .text(self.title(), TITLE_STYLE)
            .spacing(2.0)
            .text(
                format!("Tanggal: {}", format_report_date(self.event.event_date)),
                META_STYLE,
            )
            .text(format!("Dibuat oleh: {}", self.event.creator.name), META_STYLE)
            .spacing(6.0);

        for (index, prize) in self.prizes.iter().enumerate() {
            document.text(prize_heading(index + 1, prize), PRIZE_STYLE);

            if prize.has_winners() {
                for winner in &prize.winners {
                    document.text(winner_line(winner), WINNER_STYLE);
                }
            } else {
                document.text(NO_WINNERS_LINE, WINNER_STYLE);
            }

            document.spacing(PRIZE_GAP_MM);
        }

        document
    }

    pub fn render(&self) -> Result<Vec<u8>> {
        tracing::info!(
            event = %self.event.id,
            prizes = self.prizes.len(),
            "Rendering winner list"
        );
        PdfRenderer::new(PageLayout::A4).render(&self.document())
    }

    fn title(&self) -> String {
        format!("Daftar Pemenang {}", self.event.name)
    }
}

pub fn prize_heading(position: usize, prize: &Prize) -> String {
    format!(
        "{}. {} ({}/{} Pemenang)",
        position,
        prize.name,
        prize.winner_count(),
        prize.quantity
    )
}

pub fn winner_line(winner: &Winner) -> String {
    format!(
        "   - {} (No. Peserta: {})",
        winner.name, winner.participant_number
    )
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use storage::models::Creator;
    use uuid::Uuid;

    use super::*;
    use crate::engine::{Block, FontWeight};

    fn event(date: Option<NaiveDate>) -> Event {
        Event {
            id: Uuid::new_v4(),
            name: "Gebyar Agustus".to_string(),
            location: Some("Jakarta".to_string()),
            event_date: date,
            creator: Creator {
                name: "Budi Santoso".to_string(),
            },
            banner: None,
        }
    }

    fn prize(name: &str, quantity: i32, winners: &[(&str, &str)]) -> Prize {
        Prize {
            id: Uuid::new_v4(),
            name: name.to_string(),
            quantity,
            winners: winners
                .iter()
                .map(|(name, number)| Winner {
                    name: name.to_string(),
                    participant_number: number.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_header_and_metadata() {
        let event = event(NaiveDate::from_ymd_opt(2025, 8, 17));
        let document = WinnerListReport::new(&event, &[]).document();
        let lines: Vec<_> = document.lines().collect();

        assert_eq!(
            lines,
            [
                "Daftar Pemenang Gebyar Agustus",
                "Tanggal: 17 Agustus 2025",
                "Dibuat oleh: Budi Santoso",
            ]
        );

        match &document.blocks()[0] {
            Block::Text { style, .. } => {
                assert_eq!(style.weight, FontWeight::Bold);
                assert_eq!(style.align, crate::engine::Align::Center);
            }
            other => panic!("unexpected first block: {other:?}"),
        }
    }

    #[test]
    fn test_prize_with_winners() {
        let event = event(None);
        let prizes = [prize("Sepeda", 3, &[("Alice", "001"), ("Bob", "002")])];
        let document = WinnerListReport::new(&event, &prizes).document();
        let lines: Vec<_> = document.lines().skip(3).collect();

        assert_eq!(
            lines,
            [
                "1. Sepeda (2/3 Pemenang)",
                "   - Alice (No. Peserta: 001)",
                "   - Bob (No. Peserta: 002)",
            ]
        );
    }

    #[test]
    fn test_prize_without_winners_has_placeholder() {
        let event = event(None);
        let prizes = [prize("Kulkas", 1, &[])];
        let document = WinnerListReport::new(&event, &prizes).document();
        let lines: Vec<_> = document.lines().skip(3).collect();

        assert_eq!(lines, ["1. Kulkas (0/1 Pemenang)", NO_WINNERS_LINE]);

        let placeholder_is_italic = document.blocks().iter().any(|block| {
            matches!(block, Block::Text { content, style } if content == NO_WINNERS_LINE && style.italic)
        });
        assert!(placeholder_is_italic);
    }

    #[test]
    fn test_missing_date_renders_empty() {
        let event = event(None);
        let document = WinnerListReport::new(&event, &[]).document();

        assert_eq!(document.lines().nth(1), Some("Tanggal: "));
    }

    #[test]
    fn test_prizes_keep_input_order_and_spacing() {
        let event = event(None);
        let prizes = [
            prize("Motor", 1, &[("Citra", "010")]),
            prize("Kipas", 2, &[]),
        ];
        let document = WinnerListReport::new(&event, &prizes).document();

        let headings: Vec<_> = document
            .lines()
            .filter(|line| line.contains("Pemenang)"))
            .collect();
        assert_eq!(headings, ["1. Motor (1/1 Pemenang)", "2. Kipas (0/2 Pemenang)"]);

        assert_eq!(document.blocks().last(), Some(&Block::Spacing(PRIZE_GAP_MM)));
    }

    #[test]
    fn test_overfilled_prize_is_reported_as_is() {
        let event = event(None);
        let prizes = [prize("Voucher", 1, &[("A", "1"), ("B", "2")])];
        let document = WinnerListReport::new(&event, &prizes).document();

        assert_eq!(document.lines().nth(3), Some("1. Voucher (2/1 Pemenang)"));
    }

    #[test]
    fn test_render_many_prizes_spans_pages() {
        let event = event(NaiveDate::from_ymd_opt(2025, 1, 5));
        let prizes: Vec<Prize> = (0..40)
            .map(|i| prize(&format!("Hadiah {i}"), 2, &[("Peserta", "0001")]))
            .collect();
        let report = WinnerListReport::new(&event, &prizes);

        let pages = PdfRenderer::new(PageLayout::A4).paginate(&report.document());
        assert!(pages.len() > 1);

        let bytes = report.render().unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
