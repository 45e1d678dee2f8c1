use std::sync::Arc;

use tracing::{debug, trace};

use crate::core::{
    AxisBounds, CategoryCatalog, PointRecord, PointStyle, compute_bounds, compute_point_styles,
};
use crate::error::AtlasResult;
use crate::interaction::{ExplorerEffect, ExplorerEvent, ExplorerState, reduce};
use crate::render::{Renderer, ScatterFrame};

use super::{CategorySelectorView, DetailView, ExplorerConfig};

/// Outcome of feeding one event to the explorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dispatched {
    pub changed: bool,
    pub effect: Option<ExplorerEffect>,
}

/// Owns the interaction state and turns it into frames for a renderer.
///
/// Derived values are never stored on points: bounds are recomputed whenever
/// the point list is replaced, styles whenever a frame is built.
pub struct ScatterExplorer<R: Renderer> {
    renderer: R,
    config: ExplorerConfig,
    catalog: CategoryCatalog,
    state: ExplorerState,
    bounds: Option<AxisBounds>,
}

impl<R: Renderer> ScatterExplorer<R> {
    /// Creates an explorer over the built-in clinical catalog.
    pub fn new(renderer: R, config: ExplorerConfig) -> AtlasResult<Self> {
        Self::with_catalog(renderer, config, CategoryCatalog::clinical().clone())
    }

    pub fn with_catalog(
        renderer: R,
        config: ExplorerConfig,
        catalog: CategoryCatalog,
    ) -> AtlasResult<Self> {
        config.validate()?;
        Ok(Self {
            renderer,
            config,
            catalog,
            state: ExplorerState::default(),
            bounds: None,
        })
    }

    /// Applies one event and refreshes derived state.
    pub fn dispatch(&mut self, event: ExplorerEvent) -> Dispatched {
        trace!(?event, "dispatch explorer event");
        let previous_points = self.state.points_handle();
        let state = std::mem::take(&mut self.state);
        let transition = reduce(state, event, self.config.warmup_delay());
        self.state = transition.state;

        if !Arc::ptr_eq(&previous_points, &self.state.points_handle()) {
            self.bounds = compute_bounds(self.state.points(), self.config.bounds_padding);
            debug!(
                point_count = self.state.points().len(),
                has_bounds = self.bounds.is_some(),
                "dataset replaced"
            );
        }

        Dispatched {
            changed: transition.changed,
            effect: transition.effect,
        }
    }

    /// Replaces the dataset, moving the explorer to the ready phase.
    pub fn set_points(&mut self, points: Vec<PointRecord>) -> Dispatched {
        self.dispatch(ExplorerEvent::DatasetLoaded(Arc::from(points)))
    }

    #[must_use]
    pub fn state(&self) -> &ExplorerState {
        &self.state
    }

    #[must_use]
    pub fn points(&self) -> &[PointRecord] {
        self.state.points()
    }

    #[must_use]
    pub fn bounds(&self) -> Option<AxisBounds> {
        self.bounds
    }

    #[must_use]
    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    #[must_use]
    pub fn catalog(&self) -> &CategoryCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Styles for every point under the current category selection.
    #[must_use]
    pub fn point_styles(&self) -> Vec<PointStyle> {
        compute_point_styles(
            self.state.points(),
            self.state.selected_category(),
            &self.catalog,
            &self.config.style,
        )
    }

    /// Builds the current frame, or `None` while there are no bounds to draw.
    pub fn frame(&self) -> AtlasResult<Option<ScatterFrame>> {
        let Some(bounds) = self.bounds else {
            return Ok(None);
        };
        let styles = self.point_styles();
        ScatterFrame::build(self.state.points(), &styles, bounds, &self.config.style).map(Some)
    }

    /// Renders the current frame. Returns `false` when nothing was drawn.
    pub fn render(&mut self) -> AtlasResult<bool> {
        let Some(frame) = self.frame()? else {
            trace!("skipping render without bounds");
            return Ok(false);
        };
        self.renderer.render(&frame)?;
        Ok(true)
    }

    /// Detail panel content for the selected point.
    #[must_use]
    pub fn detail_view(&self) -> Option<DetailView> {
        self.state
            .selected_point()
            .map(|point| DetailView::from_point(point, &self.catalog, &self.config))
    }

    #[must_use]
    pub fn selector_view(&self) -> CategorySelectorView {
        CategorySelectorView::new(&self.catalog, self.state.selected_category())
    }
}
