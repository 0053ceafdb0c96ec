//! Configuration types for the recent nominations service

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub fallback: FallbackConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

/// Upstream nominations API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_path")]
    pub path: String,
    #[serde(default = "default_page")]
    pub page_size: u32,
    #[serde(default = "default_page")]
    pub page_number: u32,
    /// Bearer token; resolved from `token_env` at startup when unset
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default = "default_token_env")]
    pub token_env: String,
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            path: default_path(),
            page_size: default_page(),
            page_number: default_page(),
            token: None,
            token_env: default_token_env(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl ApiConfig {
    /// Full list URL including the paging query
    pub fn endpoint(&self) -> String {
        format!(
            "{}/{}?pageSize={}&pageNumber={}",
            self.base_url.trim_end_matches('/'),
            self.path.trim_start_matches('/'),
            self.page_size,
            self.page_number
        )
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

/// Static data used when the live fetch fails
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FallbackConfig {
    /// Envelope-shaped JSON file replacing the bundled dataset
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Dashboard configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_dashboard_port")]
    pub port: u16,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            port: default_dashboard_port(),
        }
    }
}

impl Config {
    /// Fill in the API token from the environment if the file did not set one
    pub fn resolve_secrets(&mut self) -> crate::Result<()> {
        if self.api.token.is_some() || self.api.token_env.is_empty() {
            return Ok(());
        }

        match std::env::var(&self.api.token_env) {
            Ok(token) if !token.is_empty() => {
                tracing::debug!("Resolved API token from ${}", self.api.token_env);
                self.api.token = Some(token);
                Ok(())
            }
            Ok(_) | Err(std::env::VarError::NotPresent) => {
                tracing::warn!(
                    "No API token configured and ${} is not set; requests will be unauthenticated",
                    self.api.token_env
                );
                Ok(())
            }
            Err(std::env::VarError::NotUnicode(_)) => Err(crate::NominationsError::Config(
                format!("${} is not valid unicode", self.api.token_env),
            )),
        }
    }

    /// Reject settings the loader cannot work with
    pub fn validate(&self) -> crate::Result<()> {
        let base_url = &self.api.base_url;
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(crate::NominationsError::Config(format!(
                "api.base_url must be an http(s) URL, got {:?}",
                base_url
            )));
        }
        if self.api.timeout_seconds == 0 {
            return Err(crate::NominationsError::Config(
                "api.timeout_seconds must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_base_url() -> String {
    "https://umbznza169.execute-api.us-east-2.amazonaws.com".to_string()
}

fn default_path() -> String {
    "/hr/home/list/company_id".to_string()
}

fn default_page() -> u32 {
    1
}

fn default_token_env() -> String {
    "TOKEN".to_string()
}

fn default_timeout() -> u64 {
    10
}

fn default_true() -> bool {
    true
}

fn default_dashboard_port() -> u16 {
    11120
}

/// Load configuration from a JSON file
pub fn load_config(path: &Path) -> crate::Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        crate::NominationsError::Config(format!("Failed to read config file {:?}: {}", path, e))
    })?;
    let config: Config = serde_json::from_str(&content)?;
    Ok(config)
}
