use std::sync::OnceLock;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::CategoryId;
use crate::error::{AtlasError, AtlasResult};

/// One curated category entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

impl Category {
    #[must_use]
    pub fn new(id: CategoryId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

const CLINICAL_CATEGORIES: &[(CategoryId, &str)] = &[
    (1, "Atelectasis"),
    (2, "Cardiomegaly"),
    (3, "Consolidation"),
    (4, "Pulmonary Edema"),
    (5, "Pleural Effusion"),
    (6, "Pneumonia"),
    (7, "Pneumothorax"),
    (8, "Lung Opacity"),
    (9, "Lung Nodule"),
    (10, "Rib Fracture"),
    (11, "Pacemaker"),
    (12, "COPD"),
    (13, "Hiatus Hernia"),
    (14, "Nasogastric Tube"),
    (15, "Endotracheal Tube"),
    (16, "Central Venous Catheter"),
    (17, "Sternotomy Wires"),
    (18, "Calcified Granuloma"),
    (19, "Scoliosis"),
    (20, "Pleural Thickening"),
    (21, "Aortic Unfolding"),
    (22, "Text Annotation"),
];

/// Ordered category catalog with constant-time id lookup.
///
/// Label ids found on points are only meaningful when they appear here; every
/// category computation goes through [`CategoryCatalog::valid_labels`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategoryCatalog {
    entries: IndexMap<CategoryId, String>,
}

impl CategoryCatalog {
    /// Builds a catalog, rejecting duplicate ids.
    pub fn new(categories: impl IntoIterator<Item = Category>) -> AtlasResult<Self> {
        let mut entries = IndexMap::new();
        for category in categories {
            if entries.insert(category.id, category.name).is_some() {
                return Err(AtlasError::InvalidData(format!(
                    "duplicate category id {}",
                    category.id
                )));
            }
        }
        Ok(Self { entries })
    }

    /// The built-in chest X-ray finding catalog.
    #[must_use]
    pub fn clinical() -> &'static CategoryCatalog {
        static CATALOG: OnceLock<CategoryCatalog> = OnceLock::new();
        CATALOG.get_or_init(|| Self {
            entries: CLINICAL_CATEGORIES
                .iter()
                .map(|&(id, name)| (id, name.to_owned()))
                .collect(),
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: CategoryId) -> bool {
        self.entries.contains_key(&id)
    }

    #[must_use]
    pub fn name_of(&self, id: CategoryId) -> Option<&str> {
        self.entries.get(&id).map(String::as_str)
    }

    /// Iterates categories in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (CategoryId, &str)> + '_ {
        self.entries.iter().map(|(id, name)| (*id, name.as_str()))
    }

    /// Keeps only the labels known to this catalog, in source order.
    #[must_use]
    pub fn valid_labels(&self, labels: &[CategoryId]) -> SmallVec<[CategoryId; 4]> {
        labels
            .iter()
            .copied()
            .filter(|id| self.contains(*id))
            .collect()
    }

    /// Display names of the valid labels, in source order, without repeats.
    #[must_use]
    pub fn label_names(&self, labels: &[CategoryId]) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for id in self.valid_labels(labels) {
            if let Some(name) = self.name_of(id) {
                if !names.iter().any(|existing| existing == name) {
                    names.push(name.to_owned());
                }
            }
        }
        names
    }
}
