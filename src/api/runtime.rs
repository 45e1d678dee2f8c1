//! Single-threaded async driver for a [`ScatterExplorer`].
//!
//! Renderer and UI adapters post events through an [`ExplorerHandle`]; the
//! runtime applies them one at a time, performs requested effects and renders
//! after every state change. The warm-up effect is a fire-and-forget task that
//! sleeps and posts [`ExplorerEvent::WarmupElapsed`].

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, trace, warn};

use crate::api::{ScatterExplorer, load_points};
use crate::core::CategoryId;
use crate::error::{AtlasError, AtlasResult};
use crate::interaction::{ExplorerEffect, ExplorerEvent};
use crate::render::Renderer;

/// Sender side given to renderer and UI adapters.
#[derive(Debug, Clone)]
pub struct ExplorerHandle {
    tx: mpsc::UnboundedSender<ExplorerEvent>,
}

impl ExplorerHandle {
    pub fn send(&self, event: ExplorerEvent) -> AtlasResult<()> {
        self.tx.send(event).map_err(|_| AtlasError::RuntimeClosed)
    }

    pub fn renderer_initialized(&self) -> AtlasResult<()> {
        self.send(ExplorerEvent::RendererInitialized)
    }

    pub fn renderer_updated(&self) -> AtlasResult<()> {
        self.send(ExplorerEvent::RendererUpdated)
    }

    /// Reports a renderer click at the given array position.
    pub fn point_clicked(&self, position: Option<usize>) -> AtlasResult<()> {
        self.send(ExplorerEvent::PointClicked(position))
    }

    pub fn dismiss_point(&self) -> AtlasResult<()> {
        self.send(ExplorerEvent::PointDismissed)
    }

    pub fn select_category(&self, category: Option<CategoryId>) -> AtlasResult<()> {
        self.send(ExplorerEvent::CategorySelected(category))
    }
}

pub struct ExplorerRuntime<R: Renderer> {
    explorer: ScatterExplorer<R>,
    rx: mpsc::UnboundedReceiver<ExplorerEvent>,
    // Weak so `run` ends once every external handle and pending warm-up is gone.
    tx: mpsc::WeakUnboundedSender<ExplorerEvent>,
}

impl<R: Renderer> ExplorerRuntime<R> {
    #[must_use]
    pub fn new(explorer: ScatterExplorer<R>) -> (Self, ExplorerHandle) {
        let (tx, rx) = mpsc::unbounded_channel();
        let runtime = Self {
            explorer,
            rx,
            tx: tx.downgrade(),
        };
        (runtime, ExplorerHandle { tx })
    }

    /// Another handle, while at least one is still alive.
    #[must_use]
    pub fn handle(&self) -> Option<ExplorerHandle> {
        self.tx.upgrade().map(|tx| ExplorerHandle { tx })
    }

    #[must_use]
    pub fn explorer(&self) -> &ScatterExplorer<R> {
        &self.explorer
    }

    /// Loads the configured dataset and moves the explorer to the ready phase.
    ///
    /// Load failures end up as an empty dataset. Returns the point count.
    pub async fn load_dataset(&mut self) -> usize {
        let config = self.explorer.config();
        let points = load_points(&config.data_source, config.wrap_width).await;
        let count = points.len();
        self.apply(ExplorerEvent::DatasetLoaded(Arc::from(points)));
        count
    }

    /// Processes events until every handle is dropped, then returns the explorer.
    pub async fn run(mut self) -> ScatterExplorer<R> {
        while let Some(event) = self.rx.recv().await {
            self.apply(event);
        }
        debug!("explorer runtime stopped");
        self.explorer
    }

    fn apply(&mut self, event: ExplorerEvent) {
        let dispatched = self.explorer.dispatch(event);
        if let Some(effect) = dispatched.effect {
            self.schedule(effect);
        }
        if dispatched.changed {
            if let Err(err) = self.explorer.render() {
                warn!(error = %err, "render failed after state change");
            }
        }
    }

    fn schedule(&self, effect: ExplorerEffect) {
        match effect {
            ExplorerEffect::ScheduleClickEnable(delay) => {
                let Some(tx) = self.tx.upgrade() else {
                    trace!("no handles left, skipping warm-up");
                    return;
                };
                tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    if tx.send(ExplorerEvent::WarmupElapsed).is_err() {
                        trace!("runtime gone before warm-up elapsed");
                    }
                });
            }
        }
    }
}
