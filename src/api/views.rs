use serde::{Deserialize, Serialize};

use crate::core::{CategoryCatalog, CategoryId, FeatureIndex, PointRecord};

use super::ExplorerConfig;

/// Content for the detail panel of one selected feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailView {
    pub index: FeatureIndex,
    pub title: String,
    pub description: String,
    /// Names of the point's catalog labels; unknown label ids are omitted.
    pub category_names: Vec<String>,
    pub image_url: String,
}

impl DetailView {
    #[must_use]
    pub fn from_point(
        point: &PointRecord,
        catalog: &CategoryCatalog,
        config: &ExplorerConfig,
    ) -> Self {
        Self {
            index: point.index(),
            title: format!("Feature {}", point.index()),
            description: point.description().to_owned(),
            category_names: catalog.label_names(point.labels()),
            image_url: config.image_url(point.index()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryEntry {
    pub id: CategoryId,
    pub name: String,
    pub selected: bool,
}

/// Catalog listing for the category selector, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySelectorView {
    pub entries: Vec<CategoryEntry>,
    /// Name shown on the active-category pill, if any.
    pub selected_name: Option<String>,
}

impl CategorySelectorView {
    #[must_use]
    pub fn new(catalog: &CategoryCatalog, selected: Option<CategoryId>) -> Self {
        let entries = catalog
            .iter()
            .map(|(id, name)| CategoryEntry {
                id,
                name: name.to_owned(),
                selected: selected == Some(id),
            })
            .collect();
        let selected_name = selected
            .and_then(|id| catalog.name_of(id))
            .map(str::to_owned);
        Self {
            entries,
            selected_name,
        }
    }
}
