//! Fetching and normalizing the feature dataset.
//!
//! The document is a JSON object keyed by decimal feature indices:
//!
//! ```json
//! { "12": { "embedding": [1.5, -3.0], "description": "...", "labels": [11] } }
//! ```
//!
//! Records are normalized one by one. A bad key or a malformed record drops
//! that record only; a document that cannot be fetched or parsed at all
//! degrades to an empty dataset in [`load_points`].

use std::collections::HashSet;
use std::fmt;
use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;
use tracing::{debug, warn};

use crate::core::{CategoryId, FeatureIndex, PointRecord};
use crate::error::{AtlasError, AtlasResult};

/// Location of the dataset document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DataSource {
    File(PathBuf),
    Url(String),
}

impl DataSource {
    /// Interprets `http://` and `https://` locations as URLs, anything else as a path.
    #[must_use]
    pub fn parse(location: &str) -> Self {
        let trimmed = location.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            Self::Url(trimmed.to_owned())
        } else {
            Self::File(PathBuf::from(trimmed))
        }
    }
}

impl Default for DataSource {
    fn default() -> Self {
        Self::File(PathBuf::from("data/features.json"))
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => f.write_str(url),
        }
    }
}

impl From<String> for DataSource {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<DataSource> for String {
    fn from(value: DataSource) -> Self {
        value.to_string()
    }
}

/// Raw record shape as found in the document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FeatureRecord {
    pub embedding: Vec<f64>,
    pub description: String,
    #[serde(default)]
    pub labels: Option<Vec<CategoryId>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RejectionReason {
    /// The key is not a non-negative decimal integer.
    InvalidKey,
    /// Another key already normalized to the same index (e.g. `"7"` and `"07"`).
    DuplicateIndex(FeatureIndex),
    /// The value does not match the record shape.
    MalformedRecord(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordRejection {
    pub key: String,
    pub reason: RejectionReason,
}

/// Normalized dataset plus the records that were left out.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoadedDataset {
    pub points: Vec<PointRecord>,
    pub rejections: Vec<RecordRejection>,
}

/// Retrieves the raw document text.
pub async fn fetch_document(source: &DataSource) -> AtlasResult<String> {
    match source {
        DataSource::File(path) => {
            tokio::fs::read_to_string(path)
                .await
                .map_err(|source| AtlasError::Io {
                    path: path.display().to_string(),
                    source,
                })
        }
        #[cfg(feature = "http")]
        DataSource::Url(url) => {
            let response = reqwest::get(url.as_str()).await?.error_for_status()?;
            Ok(response.text().await?)
        }
        #[cfg(not(feature = "http"))]
        DataSource::Url(url) => Err(AtlasError::UnsupportedSource(url.clone())),
    }
}

/// Parses and normalizes a dataset document, keeping document order.
///
/// Fails only when the document itself is not a JSON object.
pub fn normalize_document(text: &str, wrap_width: usize) -> AtlasResult<LoadedDataset> {
    // Records stay raw here so one undecodable value only costs its own entry.
    let document: IndexMap<String, Box<RawValue>> = serde_json::from_str(text)?;
    let mut dataset = LoadedDataset {
        points: Vec::with_capacity(document.len()),
        rejections: Vec::new(),
    };
    let mut seen = HashSet::with_capacity(document.len());

    for (key, value) in document {
        match normalize_entry(&key, &value, wrap_width) {
            Ok(point) => {
                if seen.insert(point.index()) {
                    dataset.points.push(point);
                } else {
                    let reason = RejectionReason::DuplicateIndex(point.index());
                    reject(&mut dataset, key, reason);
                }
            }
            Err(reason) => reject(&mut dataset, key, reason),
        }
    }

    Ok(dataset)
}

fn normalize_entry(
    key: &str,
    value: &RawValue,
    wrap_width: usize,
) -> Result<PointRecord, RejectionReason> {
    let index = parse_index(key).ok_or(RejectionReason::InvalidKey)?;
    let record: FeatureRecord = serde_json::from_str(value.get())
        .map_err(|err| RejectionReason::MalformedRecord(err.to_string()))?;

    let [x, y, ..] = record.embedding.as_slice() else {
        return Err(RejectionReason::MalformedRecord(format!(
            "embedding needs 2 coordinates, found {}",
            record.embedding.len()
        )));
    };

    Ok(PointRecord::new(
        index,
        *x,
        *y,
        record.description,
        record.labels.unwrap_or_default(),
        wrap_width,
    ))
}

fn parse_index(key: &str) -> Option<FeatureIndex> {
    if key.is_empty() || !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    key.parse().ok()
}

fn reject(dataset: &mut LoadedDataset, key: String, reason: RejectionReason) {
    warn!(key = %key, reason = ?reason, "excluding dataset record");
    dataset.rejections.push(RecordRejection { key, reason });
}

/// Fetches and normalizes the dataset at `source`.
pub async fn try_load_dataset(
    source: &DataSource,
    wrap_width: usize,
) -> AtlasResult<LoadedDataset> {
    let text = fetch_document(source).await?;
    let dataset = normalize_document(&text, wrap_width)?;
    debug!(
        source = %source,
        point_count = dataset.points.len(),
        rejected_count = dataset.rejections.len(),
        "loaded dataset"
    );
    Ok(dataset)
}

/// Loads the dataset, resolving to an empty list on any document-level failure.
pub async fn load_points(source: &DataSource, wrap_width: usize) -> Vec<PointRecord> {
    match try_load_dataset(source, wrap_width).await {
        Ok(dataset) => dataset.points,
        Err(err) => {
            warn!(source = %source, error = %err, "failed to load dataset, using empty set");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_source_parse_distinguishes_urls() {
        assert_eq!(
            DataSource::parse("https://example.org/features.json"),
            DataSource::Url("https://example.org/features.json".to_owned())
        );
        assert_eq!(
            DataSource::parse("data/features.json"),
            DataSource::File(PathBuf::from("data/features.json"))
        );
    }

    #[test]
    fn parse_index_rejects_signs_and_blanks() {
        assert_eq!(parse_index("42"), Some(42));
        assert_eq!(parse_index("007"), Some(7));
        assert_eq!(parse_index("-1"), None);
        assert_eq!(parse_index("+1"), None);
        assert_eq!(parse_index(""), None);
        assert_eq!(parse_index("1.5"), None);
        assert_eq!(parse_index("99999999999999999999999"), None);
    }

    #[test]
    fn extra_embedding_dimensions_are_ignored() {
        let dataset = normalize_document(
            r#"{"3": {"embedding": [1.0, 2.0, 3.0], "description": "d"}}"#,
            50,
        )
        .expect("document");
        assert_eq!(dataset.points[0].position(), (1.0, 2.0));
    }

    #[test]
    fn out_of_range_number_rejects_only_its_record() {
        let dataset = normalize_document(
            r#"{"1": {"embedding": [0, 0], "description": "kept"},
                "2": {"embedding": [1e400, 0], "description": "overflow"}}"#,
            50,
        )
        .expect("document");
        assert_eq!(dataset.points.len(), 1);
        assert_eq!(dataset.points[0].index(), 1);
        assert_eq!(dataset.rejections.len(), 1);
        assert_eq!(dataset.rejections[0].key, "2");
        assert!(matches!(
            dataset.rejections[0].reason,
            RejectionReason::MalformedRecord(_)
        ));
    }

    #[test]
    fn equivalent_keys_keep_first_record() {
        let dataset = normalize_document(
            r#"{"7": {"embedding": [0, 0], "description": "first"},
                "07": {"embedding": [1, 1], "description": "second"}}"#,
            50,
        )
        .expect("document");
        assert_eq!(dataset.points.len(), 1);
        assert_eq!(dataset.points[0].description(), "first");
        assert_eq!(
            dataset.rejections[0].reason,
            RejectionReason::DuplicateIndex(7)
        );
    }
}
