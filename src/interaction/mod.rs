//! Explorer interaction state and its pure transition function.
//!
//! Point selection and category selection are independent sub-states. Clicks
//! coming from the renderer are ignored until a one-shot warm-up has elapsed
//! after the renderer reported itself initialized: freshly (re)initialized
//! plots fire synthetic clicks that must not select anything.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{CategoryId, PointRecord};

/// Default grace period between renderer initialization and accepted clicks.
pub const DEFAULT_WARMUP_DELAY: Duration = Duration::from_millis(1_000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExplorerPhase {
    Loading,
    Ready,
}

/// Current point and category selection.
///
/// `selected_point` is a position in the dataset list, never a feature index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelectionState {
    pub selected_category: Option<CategoryId>,
    pub selected_point: Option<usize>,
}

/// Inputs accepted by the state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum ExplorerEvent {
    /// A dataset finished loading (possibly empty after a failed fetch).
    DatasetLoaded(Arc<[PointRecord]>),
    RendererInitialized,
    RendererUpdated,
    /// The scheduled warm-up delay has passed.
    WarmupElapsed,
    /// Renderer click carrying the clicked point's array position, if any.
    PointClicked(Option<usize>),
    /// The detail panel's close control.
    PointDismissed,
    /// Category chosen in the selector; `None` is the selector's clear control.
    CategorySelected(Option<CategoryId>),
}

/// Deferred work requested by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplorerEffect {
    /// Post [`ExplorerEvent::WarmupElapsed`] after the given delay.
    ScheduleClickEnable(Duration),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExplorerState {
    phase: ExplorerPhase,
    points: Arc<[PointRecord]>,
    selection: SelectionState,
    clicks_enabled: bool,
}

impl Default for ExplorerState {
    fn default() -> Self {
        Self {
            phase: ExplorerPhase::Loading,
            points: Arc::from(Vec::new()),
            selection: SelectionState::default(),
            clicks_enabled: false,
        }
    }
}

/// Result of one [`reduce`] step.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: ExplorerState,
    pub effect: Option<ExplorerEffect>,
    pub changed: bool,
}

/// Pure transition function `(state, event) -> state'`.
#[must_use]
pub fn reduce(state: ExplorerState, event: ExplorerEvent, warmup_delay: Duration) -> Transition {
    let mut next = state.clone();
    let effect = next.apply(event, warmup_delay);
    let changed = next != state;
    Transition {
        state: next,
        effect,
        changed,
    }
}

impl ExplorerState {
    #[must_use]
    pub fn phase(&self) -> ExplorerPhase {
        self.phase
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.phase == ExplorerPhase::Ready
    }

    #[must_use]
    pub fn points(&self) -> &[PointRecord] {
        &self.points
    }

    /// Shared handle to the current point list.
    #[must_use]
    pub fn points_handle(&self) -> Arc<[PointRecord]> {
        Arc::clone(&self.points)
    }

    #[must_use]
    pub fn selection(&self) -> SelectionState {
        self.selection
    }

    #[must_use]
    pub fn selected_category(&self) -> Option<CategoryId> {
        self.selection.selected_category
    }

    #[must_use]
    pub fn selected_point(&self) -> Option<&PointRecord> {
        self.selection
            .selected_point
            .and_then(|position| self.points.get(position))
    }

    #[must_use]
    pub fn clicks_enabled(&self) -> bool {
        self.clicks_enabled
    }

    /// Applies `event` in place and returns any deferred effect.
    pub fn apply(
        &mut self,
        event: ExplorerEvent,
        warmup_delay: Duration,
    ) -> Option<ExplorerEffect> {
        match event {
            ExplorerEvent::DatasetLoaded(points) => {
                self.phase = ExplorerPhase::Ready;
                self.points = points;
                self.selection.selected_point = None;
                None
            }
            ExplorerEvent::RendererInitialized | ExplorerEvent::RendererUpdated => {
                if self.clicks_enabled {
                    None
                } else {
                    Some(ExplorerEffect::ScheduleClickEnable(warmup_delay))
                }
            }
            ExplorerEvent::WarmupElapsed => {
                self.clicks_enabled = true;
                None
            }
            ExplorerEvent::PointClicked(position) => {
                self.on_point_click(position);
                None
            }
            ExplorerEvent::PointDismissed => {
                self.selection.selected_point = None;
                None
            }
            ExplorerEvent::CategorySelected(category) => {
                self.on_category_selected(category);
                None
            }
        }
    }

    fn on_point_click(&mut self, position: Option<usize>) {
        if !self.is_ready() || !self.clicks_enabled {
            trace!(?position, "ignoring click before warm-up");
            return;
        }
        match position {
            Some(position) if position < self.points.len() => {
                self.selection.selected_point = Some(position);
            }
            _ => trace!(?position, "ignoring click on unresolvable point"),
        }
    }

    fn on_category_selected(&mut self, category: Option<CategoryId>) {
        self.selection.selected_category = match category {
            Some(id) if self.selection.selected_category == Some(id) => None,
            other => other,
        };
    }
}
