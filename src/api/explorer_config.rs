use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::api::DataSource;
use crate::core::{DEFAULT_BOUNDS_PADDING, DEFAULT_WRAP_WIDTH, FeatureIndex};
use crate::error::{AtlasError, AtlasResult};
use crate::interaction::DEFAULT_WARMUP_DELAY;
use crate::render::ScatterStyle;

/// Host serving one highest-activating image per feature.
pub const DEFAULT_IMAGE_HOST: &str = "https://d1kcxzhfa4ovsd.cloudfront.net";

/// Public explorer bootstrap configuration.
///
/// Serializable so hosts can persist and load setup without inventing their
/// own format. Every field has a default, so `{}` is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplorerConfig {
    #[serde(default)]
    pub data_source: DataSource,
    #[serde(default = "default_image_host")]
    pub image_host: String,
    #[serde(default = "default_wrap_width")]
    pub wrap_width: usize,
    #[serde(default = "default_bounds_padding")]
    pub bounds_padding: f64,
    #[serde(default = "default_warmup_delay_ms")]
    pub warmup_delay_ms: u64,
    #[serde(default)]
    pub style: ScatterStyle,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            data_source: DataSource::default(),
            image_host: default_image_host(),
            wrap_width: default_wrap_width(),
            bounds_padding: default_bounds_padding(),
            warmup_delay_ms: default_warmup_delay_ms(),
            style: ScatterStyle::default(),
        }
    }
}

impl ExplorerConfig {
    #[must_use]
    pub fn new(data_source: DataSource) -> Self {
        Self {
            data_source,
            ..Self::default()
        }
    }

    /// Sets the host used for per-feature images.
    #[must_use]
    pub fn with_image_host(mut self, image_host: impl Into<String>) -> Self {
        self.image_host = image_host.into();
        self
    }

    /// Sets the tooltip line budget in characters.
    #[must_use]
    pub fn with_wrap_width(mut self, wrap_width: usize) -> Self {
        self.wrap_width = wrap_width;
        self
    }

    #[must_use]
    pub fn with_bounds_padding(mut self, padding: f64) -> Self {
        self.bounds_padding = padding;
        self
    }

    /// Sets the delay between renderer initialization and accepted clicks.
    #[must_use]
    pub fn with_warmup_delay(mut self, delay: Duration) -> Self {
        self.warmup_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: ScatterStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn warmup_delay(&self) -> Duration {
        Duration::from_millis(self.warmup_delay_ms)
    }

    /// URL of the highest-activating image for `index`.
    #[must_use]
    pub fn image_url(&self, index: FeatureIndex) -> String {
        format!(
            "{}/highest_activating_images/{index}.png",
            self.image_host.trim_end_matches('/')
        )
    }

    pub fn validate(&self) -> AtlasResult<()> {
        if self.wrap_width == 0 {
            return Err(AtlasError::InvalidConfig(
                "wrap_width must be > 0".to_owned(),
            ));
        }
        if !self.bounds_padding.is_finite() || self.bounds_padding < 0.0 {
            return Err(AtlasError::InvalidConfig(
                "bounds_padding must be finite and >= 0".to_owned(),
            ));
        }
        if self.image_host.trim().is_empty() {
            return Err(AtlasError::InvalidConfig(
                "image_host must not be empty".to_owned(),
            ));
        }
        self.style.validate()?;
        Ok(())
    }

    pub fn from_json_str(input: &str) -> AtlasResult<Self> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> AtlasResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn default_image_host() -> String {
    DEFAULT_IMAGE_HOST.to_owned()
}

fn default_wrap_width() -> usize {
    DEFAULT_WRAP_WIDTH
}

fn default_bounds_padding() -> f64 {
    DEFAULT_BOUNDS_PADDING
}

fn default_warmup_delay_ms() -> u64 {
    u64::try_from(DEFAULT_WARMUP_DELAY.as_millis()).unwrap_or(u64::MAX)
}
