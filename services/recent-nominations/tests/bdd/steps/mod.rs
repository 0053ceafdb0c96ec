//! BDD step definitions for the recent nominations service

pub mod classifier_steps;
pub mod loader_steps;
