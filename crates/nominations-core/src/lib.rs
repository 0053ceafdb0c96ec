//! Nominations core - record model and status classification
//!
//! Shared by the recent nominations service and its Leptos frontend.

pub mod record;
pub mod status;

pub use record::{NominationData, NominationEnvelope, NominationRecord};
pub use status::{
    color_for, is_displayable, label_for, NominationStatus, TagColor, DISPLAY_THRESHOLD,
    UNKNOWN_LABEL,
};
