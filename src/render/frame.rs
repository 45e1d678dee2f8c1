use serde::{Deserialize, Serialize};

use crate::core::{AxisBounds, PointRecord, PointStyle};
use crate::error::{AtlasError, AtlasResult};
use crate::render::{Color, ScatterStyle};

/// Backend-agnostic scatter scene for one draw pass.
///
/// All per-point vectors are parallel and indexed by the point's position in
/// the dataset list. `ids` holds that position as a string so click events
/// coming back from the renderer can be correlated without the feature index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterFrame {
    pub bounds: AxisBounds,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub fill_colors: Vec<Color>,
    pub opacities: Vec<f64>,
    pub border_colors: Vec<Color>,
    pub border_width: f64,
    pub marker_size: f64,
    pub hover_texts: Vec<String>,
    pub ids: Vec<String>,
}

impl ScatterFrame {
    /// Materializes a frame from points and their already computed styles.
    pub fn build(
        points: &[PointRecord],
        styles: &[PointStyle],
        bounds: AxisBounds,
        style: &ScatterStyle,
    ) -> AtlasResult<Self> {
        if points.len() != styles.len() {
            return Err(AtlasError::InvalidData(format!(
                "style count {} does not match point count {}",
                styles.len(),
                points.len()
            )));
        }

        Ok(Self {
            bounds,
            x: points.iter().map(PointRecord::x).collect(),
            y: points.iter().map(PointRecord::y).collect(),
            fill_colors: styles.iter().map(|s| s.fill).collect(),
            opacities: styles.iter().map(|s| s.opacity).collect(),
            border_colors: styles.iter().map(|s| s.border).collect(),
            border_width: style.border_width,
            marker_size: style.marker_size,
            hover_texts: points
                .iter()
                .map(|p| p.wrapped_description().to_owned())
                .collect(),
            ids: (0..points.len()).map(|position| position.to_string()).collect(),
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn validate(&self) -> AtlasResult<()> {
        let bounds = self.bounds;
        if ![bounds.x_min, bounds.x_max, bounds.y_min, bounds.y_max]
            .iter()
            .all(|v| v.is_finite())
            || bounds.x_min > bounds.x_max
            || bounds.y_min > bounds.y_max
        {
            return Err(AtlasError::InvalidData(
                "frame bounds must be finite and ordered".to_owned(),
            ));
        }

        let len = self.len();
        for (name, other) in [
            ("y", self.y.len()),
            ("fill_colors", self.fill_colors.len()),
            ("opacities", self.opacities.len()),
            ("border_colors", self.border_colors.len()),
            ("hover_texts", self.hover_texts.len()),
            ("ids", self.ids.len()),
        ] {
            if other != len {
                return Err(AtlasError::InvalidData(format!(
                    "frame array `{name}` has {other} entries, expected {len}"
                )));
            }
        }

        if !self.x.iter().chain(&self.y).all(|v| v.is_finite()) {
            return Err(AtlasError::InvalidData(
                "point coordinates must be finite".to_owned(),
            ));
        }
        if !self
            .opacities
            .iter()
            .all(|v| v.is_finite() && (0.0..=1.0).contains(v))
        {
            return Err(AtlasError::InvalidData(
                "point opacity must be finite and in [0, 1]".to_owned(),
            ));
        }
        for color in self.fill_colors.iter().chain(&self.border_colors) {
            color.validate()?;
        }
        if !self.border_width.is_finite() || self.border_width <= 0.0 {
            return Err(AtlasError::InvalidData(
                "border width must be finite and > 0".to_owned(),
            ));
        }
        if !self.marker_size.is_finite() || self.marker_size <= 0.0 {
            return Err(AtlasError::InvalidData(
                "marker size must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}
