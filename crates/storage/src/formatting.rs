//! Display helpers shared by the API, the rendered documents and the CLI.

use std::fmt::Display;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

const NIK_MASK: &str = "****";
const NIK_VISIBLE: usize = 4;

const WEEKDAYS: [&str; 7] = [
    "Senin", "Selasa", "Rabu", "Kamis", "Jumat", "Sabtu", "Minggu",
];

const MONTHS: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// Masks the middle of a NIK for display.
///
/// Inputs of 8 characters or fewer are returned unchanged. Longer inputs keep
/// their first and last 4 characters around a fixed 4-character mask, so a
/// 9-character NIK comes out longer than it went in.
pub fn censor_nik(nik: &str) -> String {
    let chars: Vec<char> = nik.chars().collect();
    if chars.len() <= NIK_VISIBLE * 2 {
        return nik.to_string();
    }

    let head: String = chars[..NIK_VISIBLE].iter().collect();
    let tail: String = chars[chars.len() - NIK_VISIBLE..].iter().collect();

    format!("{head}{NIK_MASK}{tail}")
}

/// Parses the date forms the API and legacy payloads produce:
/// `YYYY-MM-DD`, RFC 3339 timestamps and `YYYY-MM-DD HH:MM:SS`.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Some(datetime.date_naive());
    }

    [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
    ]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|datetime| datetime.date())
}

pub fn month_name(date: NaiveDate) -> &'static str {
    MONTHS[date.month0() as usize]
}

pub fn weekday_name(date: NaiveDate) -> &'static str {
    WEEKDAYS[date.weekday().num_days_from_monday() as usize]
}

/// `Minggu, 17 Agustus 2025`
pub fn indonesian_long_date(date: NaiveDate) -> String {
    format!(
        "{}, {} {} {}",
        weekday_name(date),
        date.day(),
        month_name(date),
        date.year()
    )
}

/// Formats a date string with Indonesian weekday and month names.
///
/// Input that cannot be parsed as a date is returned as-is.
pub fn format_indonesian_date(value: &str) -> String {
    match parse_date(value) {
        Some(date) => indonesian_long_date(date),
        None => value.to_string(),
    }
}

/// `05 Agustus 2025`, or an empty string when the date is unknown
pub fn format_report_date(date: Option<NaiveDate>) -> String {
    date.map(|d| format!("{:02} {} {}", d.day(), month_name(d), d.year()))
        .unwrap_or_default()
}

/// Identifying payload encoded into a participant's QR code.
///
/// Field declaration order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QrPayload {
    pub event_id: String,
    pub participant_id: String,
    pub registration_number: String,
    pub name: String,
}

impl QrPayload {
    pub fn new(
        event_id: impl Display,
        participant_id: impl Display,
        registration_number: &str,
        name: &str,
    ) -> Self {
        Self {
            event_id: event_id.to_string(),
            participant_id: participant_id.to_string(),
            registration_number: registration_number.to_string(),
            name: name.to_string(),
        }
    }

    pub fn encode(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn decode(data: &str) -> serde_json::Result<Self> {
        serde_json::from_str(data)
    }
}

pub fn generate_qr_data(
    event_id: impl Display,
    participant_id: impl Display,
    registration_number: &str,
    name: &str,
) -> serde_json::Result<String> {
    QrPayload::new(event_id, participant_id, registration_number, name).encode()
}
