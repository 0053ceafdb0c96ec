//! Static nomination data substituted when the live fetch fails

use std::path::Path;

use nominations_core::{NominationEnvelope, NominationRecord};

const BUNDLED_FALLBACK: &str = include_str!("../data/nomination_fallback.json");

/// Records from the dataset compiled into the binary
pub fn bundled() -> crate::Result<Vec<NominationRecord>> {
    parse(BUNDLED_FALLBACK)
}

/// Records from an envelope-shaped JSON file, or the bundled set when no path is given
pub fn load_fallback(path: Option<&Path>) -> crate::Result<Vec<NominationRecord>> {
    let Some(path) = path else {
        tracing::debug!("Using bundled fallback dataset");
        return bundled();
    };

    tracing::debug!("Loading fallback dataset from {:?}", path);
    let content = std::fs::read_to_string(path).map_err(|e| {
        crate::NominationsError::Config(format!("Failed to read fallback file {:?}: {}", path, e))
    })?;
    parse(&content)
}

fn parse(content: &str) -> crate::Result<Vec<NominationRecord>> {
    let envelope: NominationEnvelope = serde_json::from_str(content)?;
    Ok(envelope.into_records())
}
