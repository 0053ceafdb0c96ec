//! Recent Nominations - HR admin dashboard service
//!
//! Loads the latest nominations from the HR API once per activation, falls back
//! to bundled data when the API is unavailable, and serves the nominations that
//! reached HR review as status-tagged cards.

pub mod config;
pub mod dashboard;
pub mod error;
pub mod fallback;
pub mod io;
pub mod loader;
pub mod presenter;
pub mod view;

pub use config::{load_config, Config};
pub use error::{NominationsError, Result};
pub use loader::NominationLoader;
pub use presenter::{recent_nominations, NominationCard};
pub use view::{activate, Activation, ViewState};

use std::net::SocketAddr;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::io::ReqwestHttpClient;

/// Build a loader from configuration, reading the fallback dataset eagerly
pub fn build_loader(config: &Config) -> Result<NominationLoader> {
    let http: Arc<dyn io::HttpClient> =
        Arc::new(ReqwestHttpClient::with_timeout(config.api.timeout())?);
    let fallback = fallback::load_fallback(config.fallback.path.as_deref())?;
    Ok(NominationLoader::from_config(&config.api, fallback, http))
}

/// Activate the view once and return the cards it settles on
pub async fn render_once(config: &Config) -> Result<Vec<NominationCard>> {
    let loader = Arc::new(build_loader(config)?);
    let mut activation = activate(loader);
    activation.settled().await;
    let view = activation.snapshot().await;
    Ok(recent_nominations(&view.nominations))
}

/// Run the service with the given configuration until interrupted
pub async fn run(config: Config) -> Result<()> {
    let loader = Arc::new(build_loader(&config)?);
    let cancel = CancellationToken::new();

    let cancel_for_signal = cancel.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for ctrl-c: {}", e);
            return;
        }
        tracing::info!("Shutdown signal received");
        cancel_for_signal.cancel();
    });

    let mut activation = activate(loader);

    if config.dashboard.enabled {
        let addr = SocketAddr::from(([0, 0, 0, 0], config.dashboard.port));
        let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
            NominationsError::Dashboard(format!(
                "Failed to bind dashboard to port {}: {}",
                config.dashboard.port, e
            ))
        })?;
        tracing::info!("Dashboard listening on http://{}", addr);

        let router = dashboard::build_router(activation.state());
        let cancel_for_dashboard = cancel.clone();
        axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                cancel_for_dashboard.cancelled().await;
            })
            .await
            .map_err(|e| NominationsError::Dashboard(e.to_string()))?;

        tracing::debug!("Dashboard stopped");
    } else {
        tokio::select! {
            _ = cancel.cancelled() => {}
            _ = activation.settled() => {
                let view = activation.snapshot().await;
                for card in recent_nominations(&view.nominations) {
                    tracing::info!(
                        "{} (by {}) - {} [{}]",
                        card.name,
                        card.nominated_by,
                        card.status_label,
                        card.status_color
                    );
                }
            }
        }
    }

    activation.teardown();
    tracing::info!("Recent nominations service stopped");
    Ok(())
}
