//! One activation of the recent nominations view
//!
//! An activation spawns exactly one load and owns the resulting state. Once
//! torn down, a load that settles later is dropped instead of applied.

use std::sync::Arc;

use nominations_core::NominationRecord;
use serde::Serialize;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::loader::NominationLoader;

/// What the view currently shows
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ViewState {
    pub loading: bool,
    pub nominations: Vec<NominationRecord>,
}

/// Shared state handle read by the dashboard
pub type ViewHandle = Arc<RwLock<ViewState>>;

/// A live view activation
#[derive(Debug)]
pub struct Activation {
    state: ViewHandle,
    cancel: CancellationToken,
    task: Option<JoinHandle<()>>,
}

/// Start a view: mark it loading and spawn the single fetch
pub fn activate(loader: Arc<NominationLoader>) -> Activation {
    let state: ViewHandle = Arc::new(RwLock::new(ViewState {
        loading: true,
        nominations: Vec::new(),
    }));
    let cancel = CancellationToken::new();

    let task = tokio::spawn(resolve(loader, Arc::clone(&state), cancel.clone()));

    Activation {
        state,
        cancel,
        task: Some(task),
    }
}

async fn resolve(loader: Arc<NominationLoader>, state: ViewHandle, cancel: CancellationToken) {
    let nominations = tokio::select! {
        _ = cancel.cancelled() => {
            tracing::debug!("View torn down before nominations loaded");
            return;
        }
        records = loader.load() => records,
    };

    let mut view = state.write().await;
    if cancel.is_cancelled() {
        tracing::debug!("Discarding {} nominations for torn down view", nominations.len());
        return;
    }
    view.nominations = nominations;
    view.loading = false;
    tracing::info!("Loaded {} nominations", view.nominations.len());
}

impl Activation {
    pub fn state(&self) -> ViewHandle {
        Arc::clone(&self.state)
    }

    pub async fn snapshot(&self) -> ViewState {
        self.state.read().await.clone()
    }

    pub fn is_torn_down(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Wait until the load has been applied or discarded
    pub async fn settled(&mut self) {
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                tracing::warn!("Nomination load task failed: {}", e);
            }
        }
    }

    /// Stop accepting the pending load result
    pub fn teardown(&self) {
        self.cancel.cancel();
    }
}

impl Drop for Activation {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
