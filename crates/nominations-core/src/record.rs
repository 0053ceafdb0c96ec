//! Nomination records and the API response envelope
//!
//! Deserialization is lenient: upstream data is trusted for shape, and any
//! field that is missing or mistyped falls back to a default instead of
//! failing the whole record list.

use serde::{Deserialize, Deserializer, Serialize};

use crate::status::{self, TagColor, UNKNOWN_LABEL};

/// A single nomination as returned by the HR list endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NominationRecord {
    /// Opaque identifier, only used as a display key
    #[serde(default)]
    pub id: serde_json::Value,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, rename = "nominatedby", deserialize_with = "lenient_string")]
    pub nominated_by: String,
    #[serde(default, deserialize_with = "lenient_status")]
    pub status: Option<i64>,
    #[serde(default, rename = "imgurl", deserialize_with = "lenient_optional_string")]
    pub image_url: Option<String>,
    /// Timestamp text, or epoch milliseconds as decimal digits
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_date: Option<String>,
}

impl NominationRecord {
    pub fn status_color(&self) -> TagColor {
        self.status.map_or(TagColor::Gray, status::color_for)
    }

    pub fn status_label(&self) -> &'static str {
        self.status.map_or(UNKNOWN_LABEL, status::label_for)
    }

    /// Records without a usable status are never displayed
    pub fn is_displayable(&self) -> bool {
        self.status.is_some_and(status::is_displayable)
    }

    /// Identifier rendered as a string key; strings are used verbatim
    pub fn display_key(&self) -> String {
        match &self.id {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Null => String::new(),
            other => other.to_string(),
        }
    }
}

/// Accept any JSON value for `status`, keeping only whole numbers
fn lenient_status<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
            .map(|f| f as i64)
    }))
}

/// Strings are kept; null and any other type become empty
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_optional_string(deserializer)?.unwrap_or_default())
}

fn lenient_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

/// Strings are kept; integer epoch milliseconds are kept as their digits
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(Some(s)),
        serde_json::Value::Number(n) => Ok(n.as_i64().map(|ms| ms.to_string())),
        _ => Ok(None),
    }
}

/// `{ "data": { "nominationData": [...] } }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NominationEnvelope {
    #[serde(default)]
    pub data: Option<NominationData>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NominationData {
    #[serde(default, rename = "nominationData")]
    pub nomination_data: Option<Vec<NominationRecord>>,
}

impl NominationEnvelope {
    pub fn new(records: Vec<NominationRecord>) -> Self {
        Self {
            data: Some(NominationData {
                nomination_data: Some(records),
            }),
        }
    }

    /// The nested record list; an absent path yields an empty list
    pub fn into_records(self) -> Vec<NominationRecord> {
        self.data
            .and_then(|data| data.nomination_data)
            .unwrap_or_default()
    }
}
