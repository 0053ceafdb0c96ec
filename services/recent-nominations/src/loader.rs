//! Nomination loader: one fetch, with fallback to static data on failure

use std::sync::Arc;

use nominations_core::{NominationEnvelope, NominationRecord};

use crate::config::ApiConfig;
use crate::io::HttpClient;

/// Fetches the recent nominations list from the HR API
pub struct NominationLoader {
    endpoint: String,
    token: Option<String>,
    fallback: Vec<NominationRecord>,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for NominationLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NominationLoader")
            .field("endpoint", &self.endpoint)
            .field("authenticated", &self.token.is_some())
            .field("fallback_records", &self.fallback.len())
            .finish()
    }
}

impl NominationLoader {
    pub fn new(
        endpoint: impl Into<String>,
        token: Option<String>,
        fallback: Vec<NominationRecord>,
        http: Arc<dyn HttpClient>,
    ) -> Self {
        let endpoint = endpoint.into();
        tracing::debug!(
            "Created NominationLoader for {} ({} fallback records)",
            endpoint,
            fallback.len()
        );

        Self {
            endpoint,
            token,
            fallback,
            http,
        }
    }

    pub fn from_config(
        config: &ApiConfig,
        fallback: Vec<NominationRecord>,
        http: Arc<dyn HttpClient>,
    ) -> Self {
        Self::new(config.endpoint(), config.token.clone(), fallback, http)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn fallback(&self) -> &[NominationRecord] {
        &self.fallback
    }

    /// Request the list once, surfacing any failure
    pub async fn fetch(&self) -> crate::Result<Vec<NominationRecord>> {
        let authorization = self.token.as_ref().map(|t| format!("Bearer {}", t));
        let headers: Vec<(&str, &str)> = authorization
            .as_deref()
            .map(|value| ("Authorization", value))
            .into_iter()
            .collect();

        let response = self.http.get(&self.endpoint, &headers).await?;

        if !response.is_success() {
            return Err(crate::NominationsError::UnexpectedStatus {
                status: response.status,
                body: response.body,
            });
        }

        let envelope: NominationEnvelope = serde_json::from_str(&response.body)?;
        let records = envelope.into_records();
        tracing::debug!("Fetched {} nominations", records.len());
        Ok(records)
    }

    /// Live records, or the fallback set if the fetch fails for any reason
    pub async fn load(&self) -> Vec<NominationRecord> {
        match self.fetch().await {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!("Error fetching nominations: {}", e);
                self.fallback.clone()
            }
        }
    }
}
