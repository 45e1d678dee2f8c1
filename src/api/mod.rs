mod dataset_loader;
mod explorer;
mod explorer_config;
mod json_contract;
mod runtime;
mod views;

pub use dataset_loader::{
    DataSource, FeatureRecord, LoadedDataset, RecordRejection, RejectionReason, fetch_document,
    load_points, normalize_document, try_load_dataset,
};
pub use explorer::{Dispatched, ScatterExplorer};
pub use explorer_config::{DEFAULT_IMAGE_HOST, ExplorerConfig};
pub use json_contract::{
    EXPLORER_VIEW_JSON_SCHEMA_V1, ExplorerViewJsonContractV1, SCATTER_FRAME_JSON_SCHEMA_V1,
    ScatterFrameJsonContractV1,
};
pub use runtime::{ExplorerHandle, ExplorerRuntime};
pub use views::{CategoryEntry, CategorySelectorView, DetailView};
