//! Per-point emphasis derived from the active category.
//!
//! Everything here is a pure function of `(points, selected, catalog, style)`.
//! Point records are never touched; callers get a parallel vector instead.

use serde::{Deserialize, Serialize};

use crate::core::{CategoryCatalog, CategoryId, PointRecord};
use crate::render::{Color, ScatterStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Emphasis {
    /// No category is active.
    Unfiltered,
    /// The point carries the active category.
    Highlighted,
    /// A category is active and the point does not carry it.
    Dimmed,
}

/// Derived visual attributes of one point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointStyle {
    pub emphasis: Emphasis,
    pub fill: Color,
    pub opacity: f64,
    pub border: Color,
}

/// Classifies one point against the active category.
///
/// Labels unknown to `catalog` never count as a match, even when they equal
/// `selected`.
#[must_use]
pub fn emphasis_for(
    point: &PointRecord,
    selected: Option<CategoryId>,
    catalog: &CategoryCatalog,
) -> Emphasis {
    let Some(selected) = selected else {
        return Emphasis::Unfiltered;
    };
    if catalog.valid_labels(point.labels()).contains(&selected) {
        Emphasis::Highlighted
    } else {
        Emphasis::Dimmed
    }
}

/// Maps an emphasis state to its fill, opacity and outline.
#[must_use]
pub fn style_for(emphasis: Emphasis, style: &ScatterStyle) -> PointStyle {
    let (fill, opacity) = match emphasis {
        Emphasis::Unfiltered => (style.accent, style.unfiltered_opacity),
        Emphasis::Highlighted => (style.highlight, style.highlighted_opacity),
        Emphasis::Dimmed => (style.accent, style.dimmed_opacity),
    };
    PointStyle {
        emphasis,
        fill,
        opacity,
        border: fill.darken(style.border_darken),
    }
}

/// Recomputes the style of every point for the given category selection.
#[must_use]
pub fn compute_point_styles(
    points: &[PointRecord],
    selected: Option<CategoryId>,
    catalog: &CategoryCatalog,
    style: &ScatterStyle,
) -> Vec<PointStyle> {
    points
        .iter()
        .map(|point| style_for(emphasis_for(point, selected, catalog), style))
        .collect()
}
