use serde::Serialize;

use crate::core::text_wrap::wrap;

/// Stable identity of one learned feature, taken from the dataset key.
pub type FeatureIndex = u64;

/// Identifier of a curated category (and of the raw labels attached to points).
pub type CategoryId = i64;

/// One normalized, plot-ready feature.
///
/// Records are immutable once built: the wrapped description is derived from
/// `description` at construction and never patched afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointRecord {
    index: FeatureIndex,
    x: f64,
    y: f64,
    description: String,
    wrapped_description: String,
    labels: Vec<CategoryId>,
}

impl PointRecord {
    #[must_use]
    pub fn new(
        index: FeatureIndex,
        x: f64,
        y: f64,
        description: impl Into<String>,
        labels: Vec<CategoryId>,
        wrap_width: usize,
    ) -> Self {
        let description = description.into();
        let wrapped_description = wrap(&description, wrap_width);
        Self {
            index,
            x,
            y,
            description,
            wrapped_description,
            labels,
        }
    }

    #[must_use]
    pub fn index(&self) -> FeatureIndex {
        self.index
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[must_use]
    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Tooltip form of the description with `<br>` line breaks.
    #[must_use]
    pub fn wrapped_description(&self) -> &str {
        &self.wrapped_description
    }

    /// Raw labels in source order, including ids unknown to any catalog.
    #[must_use]
    pub fn labels(&self) -> &[CategoryId] {
        &self.labels
    }

    /// Returns a copy with a new description and a freshly wrapped tooltip.
    #[must_use]
    pub fn with_description(&self, description: impl Into<String>, wrap_width: usize) -> Self {
        Self::new(
            self.index,
            self.x,
            self.y,
            description,
            self.labels.clone(),
            wrap_width,
        )
    }
}
