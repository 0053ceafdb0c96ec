//! UI components

pub mod nomination_card;
pub mod recent_nominations;
pub mod status_tag;
