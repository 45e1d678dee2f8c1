//! feature-atlas: exploration model for scatter plots of learned features.
//!
//! The crate normalizes an embedding dataset, derives per-point emphasis from
//! the active category filter, and tracks point/category selection. Drawing,
//! hit-testing and zoom/pan belong to the [`render::Renderer`] backend.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ExplorerConfig, ScatterExplorer};
pub use error::{AtlasError, AtlasResult};
