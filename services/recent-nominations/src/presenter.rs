//! Maps nomination records to display cards

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use nominations_core::{NominationRecord, TagColor};
use serde::{Deserialize, Serialize};

/// Avatar shown when a record has no image
pub const DEFAULT_AVATAR: &str = "/user.jpg";

/// A record ready for rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NominationCard {
    pub key: String,
    pub avatar_url: String,
    pub name: String,
    pub nominated_by: String,
    pub nominated_for: String,
    pub created_on: String,
    pub status_label: String,
    pub status_color: TagColor,
}

impl NominationCard {
    pub fn from_record(record: &NominationRecord) -> Self {
        let avatar_url = record
            .image_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(DEFAULT_AVATAR)
            .to_string();

        Self {
            key: record.display_key(),
            avatar_url,
            name: record.name.clone(),
            nominated_by: record.nominated_by.clone(),
            nominated_for: record.name.clone(),
            created_on: record
                .created_date
                .as_deref()
                .and_then(parse_date)
                .map(|date| date.format("%m/%d/%Y").to_string())
                .unwrap_or_default(),
            status_label: record.status_label().to_string(),
            status_color: record.status_color(),
        }
    }
}

/// Displayable records as cards, in their original order
pub fn recent_nominations(records: &[NominationRecord]) -> Vec<NominationCard> {
    records
        .iter()
        .filter(|record| record.is_displayable())
        .map(NominationCard::from_record)
        .collect()
}

/// Calendar date of an upstream timestamp
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
        let millis: i64 = raw.parse().ok()?;
        return DateTime::from_timestamp_millis(millis).map(|timestamp| timestamp.date_naive());
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.date_naive());
    }
    for format in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(timestamp) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(timestamp.date());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}
