//! Client-side API fetch helpers
//!
//! These types mirror the server-side JSON response structures
//! and are shared between SSR and client-side hydration.

use nominations_core::TagColor;
use serde::{Deserialize, Serialize};

/// A nomination card as returned by /api/nominations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NominationCardResponse {
    pub key: String,
    pub avatar_url: String,
    pub name: String,
    pub nominated_by: String,
    pub nominated_for: String,
    pub created_on: String,
    pub status_label: String,
    pub status_color: TagColor,
}

/// Body of /api/nominations
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecentNominationsResponse {
    pub loading: bool,
    pub nominations: Vec<NominationCardResponse>,
}
