use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::PointRecord;

/// Margin added on every side of the tight data box.
pub const DEFAULT_BOUNDS_PADDING: f64 = 5.0;

/// Axis ranges handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl AxisBounds {
    #[must_use]
    pub fn x_range(self) -> (f64, f64) {
        (self.x_min, self.x_max)
    }

    #[must_use]
    pub fn y_range(self) -> (f64, f64) {
        (self.y_min, self.y_max)
    }

    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        (self.x_min..=self.x_max).contains(&x) && (self.y_min..=self.y_max).contains(&y)
    }
}

/// Computes the padded bounding box of `points`.
///
/// Returns `None` for an empty list so callers hold off on drawing axes.
#[must_use]
pub fn compute_bounds(points: &[PointRecord], padding: f64) -> Option<AxisBounds> {
    let x_min = points.iter().map(|p| OrderedFloat(p.x())).min()?.0;
    let x_max = points.iter().map(|p| OrderedFloat(p.x())).max()?.0;
    let y_min = points.iter().map(|p| OrderedFloat(p.y())).min()?.0;
    let y_max = points.iter().map(|p| OrderedFloat(p.y())).max()?.0;

    Some(AxisBounds {
        x_min: x_min - padding,
        x_max: x_max + padding,
        y_min: y_min - padding,
        y_max: y_max + padding,
    })
}
