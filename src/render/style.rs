use serde::{Deserialize, Serialize};

use crate::error::{AtlasError, AtlasResult};
use crate::render::Color;

/// Marker styling used by the category filter and the frame builder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScatterStyle {
    /// Fill for unfiltered and dimmed points.
    #[serde(default = "default_accent")]
    pub accent: Color,
    /// Fill for points matching the active category.
    #[serde(default = "default_highlight")]
    pub highlight: Color,
    #[serde(default = "default_unfiltered_opacity")]
    pub unfiltered_opacity: f64,
    #[serde(default = "default_highlighted_opacity")]
    pub highlighted_opacity: f64,
    #[serde(default = "default_dimmed_opacity")]
    pub dimmed_opacity: f64,
    /// Darkening applied to a point's fill to obtain its outline.
    #[serde(default = "default_border_darken")]
    pub border_darken: f64,
    #[serde(default = "default_border_width")]
    pub border_width: f64,
    #[serde(default = "default_marker_size")]
    pub marker_size: f64,
}

impl Default for ScatterStyle {
    fn default() -> Self {
        Self {
            accent: default_accent(),
            highlight: default_highlight(),
            unfiltered_opacity: default_unfiltered_opacity(),
            highlighted_opacity: default_highlighted_opacity(),
            dimmed_opacity: default_dimmed_opacity(),
            border_darken: default_border_darken(),
            border_width: default_border_width(),
            marker_size: default_marker_size(),
        }
    }
}

impl ScatterStyle {
    pub fn validate(self) -> AtlasResult<Self> {
        self.accent.validate()?;
        self.highlight.validate()?;
        for (value, name) in [
            (self.unfiltered_opacity, "unfiltered_opacity"),
            (self.highlighted_opacity, "highlighted_opacity"),
            (self.dimmed_opacity, "dimmed_opacity"),
            (self.border_darken, "border_darken"),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(AtlasError::InvalidConfig(format!(
                    "style `{name}` must be finite and in [0, 1]"
                )));
            }
        }
        for (value, name) in [
            (self.border_width, "border_width"),
            (self.marker_size, "marker_size"),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(AtlasError::InvalidConfig(format!(
                    "style `{name}` must be finite and > 0"
                )));
            }
        }
        Ok(self)
    }
}

fn default_accent() -> Color {
    Color::rgb8(0x0e, 0xa5, 0xe9)
}

fn default_highlight() -> Color {
    Color::rgb8(0x22, 0xc5, 0x5e)
}

fn default_unfiltered_opacity() -> f64 {
    0.6
}

fn default_highlighted_opacity() -> f64 {
    1.0
}

fn default_dimmed_opacity() -> f64 {
    0.3
}

fn default_border_darken() -> f64 {
    0.5
}

fn default_border_width() -> f64 {
    1.0
}

fn default_marker_size() -> f64 {
    6.0
}
