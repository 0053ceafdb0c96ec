//! Nomination workflow status codes and their display mapping

use serde::{Deserialize, Serialize};
use std::fmt;

/// Records at or beyond this status are surfaced as recent nominations
pub const DISPLAY_THRESHOLD: i64 = 7;

/// Label shown for any code outside the known table
pub const UNKNOWN_LABEL: &str = "Unknown Status";

/// Color token used by a status tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagColor {
    Gray,
    Gold,
    Blue,
    Purple,
    Red,
    LightGray,
    Cyan,
    Green,
}

impl TagColor {
    /// The color token as understood by the UI layer
    pub fn token(self) -> &'static str {
        match self {
            TagColor::Gray => "gray",
            TagColor::Gold => "gold",
            TagColor::Blue => "blue",
            TagColor::Purple => "purple",
            TagColor::Red => "red",
            TagColor::LightGray => "lightgray",
            TagColor::Cyan => "cyan",
            TagColor::Green => "green",
        }
    }

    /// Foreground and background CSS colors for rendering a tag
    pub fn css(self) -> (&'static str, &'static str) {
        match self {
            TagColor::Gray => ("#383d41", "#e2e3e5"),
            TagColor::Gold => ("#874d00", "#fffbe6"),
            TagColor::Blue => ("#0958d9", "#e6f4ff"),
            TagColor::Purple => ("#531dab", "#f9f0ff"),
            TagColor::Red => ("#cf1322", "#fff1f0"),
            TagColor::LightGray => ("#6c757d", "#f8f9fa"),
            TagColor::Cyan => ("#08979c", "#e6fffb"),
            TagColor::Green => ("#389e0d", "#f6ffed"),
        }
    }
}

impl fmt::Display for TagColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// The nine known workflow stages of a nomination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NominationStatus {
    Draft,
    Nominated,
    NomineeReview,
    WitnessReview,
    RejectedByNominee,
    Cancelled,
    Withdrawn,
    HrReviewed,
    Completed,
}

/// code, status, color, label
static STATUS_TABLE: [(i64, NominationStatus, TagColor, &str); 9] = [
    (0, NominationStatus::Draft, TagColor::Gray, "Draft"),
    (1, NominationStatus::Nominated, TagColor::Gold, "Nominated"),
    (2, NominationStatus::NomineeReview, TagColor::Blue, "Nominee Review"),
    (3, NominationStatus::WitnessReview, TagColor::Purple, "Witness Review"),
    (
        4,
        NominationStatus::RejectedByNominee,
        TagColor::Red,
        "Rejected by Nominee",
    ),
    (5, NominationStatus::Cancelled, TagColor::Red, "Cancelled"),
    (6, NominationStatus::Withdrawn, TagColor::LightGray, "Withdrawn"),
    (7, NominationStatus::HrReviewed, TagColor::Cyan, "HR Reviewed"),
    (8, NominationStatus::Completed, TagColor::Green, "Completed"),
];

fn lookup(code: i64) -> Option<&'static (i64, NominationStatus, TagColor, &'static str)> {
    STATUS_TABLE.iter().find(|(c, ..)| *c == code)
}

impl NominationStatus {
    /// Every known status in code order
    pub fn all() -> impl Iterator<Item = NominationStatus> {
        STATUS_TABLE.iter().map(|(_, status, ..)| *status)
    }

    pub fn from_code(code: i64) -> Option<Self> {
        lookup(code).map(|(_, status, ..)| *status)
    }

    pub fn code(self) -> i64 {
        self.entry().0
    }

    pub fn color(self) -> TagColor {
        self.entry().2
    }

    pub fn label(self) -> &'static str {
        self.entry().3
    }

    fn entry(self) -> &'static (i64, NominationStatus, TagColor, &'static str) {
        // The table holds one row per variant, in declaration order.
        &STATUS_TABLE[self as usize]
    }
}

impl fmt::Display for NominationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Tag color for a status code; unknown codes are gray
pub fn color_for(status: i64) -> TagColor {
    lookup(status).map_or(TagColor::Gray, |(_, _, color, _)| *color)
}

/// Human-readable label for a status code
pub fn label_for(status: i64) -> &'static str {
    lookup(status).map_or(UNKNOWN_LABEL, |(.., label)| *label)
}

/// Whether a record with this status belongs on the recent nominations surface
pub fn is_displayable(status: i64) -> bool {
    status >= DISPLAY_THRESHOLD
}
