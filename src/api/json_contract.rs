use serde::{Deserialize, Serialize};

use crate::error::{AtlasError, AtlasResult};
use crate::render::{Renderer, ScatterFrame};

use super::{CategorySelectorView, DetailView, ScatterExplorer};

pub const SCATTER_FRAME_JSON_SCHEMA_V1: u32 = 1;
pub const EXPLORER_VIEW_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterFrameJsonContractV1 {
    pub schema_version: u32,
    pub frame: ScatterFrame,
}

/// Everything a host UI needs for one paint: frame, selector and detail panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplorerViewJsonContractV1 {
    pub schema_version: u32,
    pub frame: Option<ScatterFrame>,
    pub selector: CategorySelectorView,
    pub detail: Option<DetailView>,
}

impl ScatterFrame {
    pub fn to_json_contract_v1_pretty(&self) -> AtlasResult<String> {
        let payload = ScatterFrameJsonContractV1 {
            schema_version: SCATTER_FRAME_JSON_SCHEMA_V1,
            frame: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            AtlasError::InvalidData(format!("failed to serialize frame contract v1: {e}"))
        })
    }

    /// Accepts either a bare frame or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> AtlasResult<Self> {
        if let Ok(frame) = serde_json::from_str::<ScatterFrame>(input) {
            return Ok(frame);
        }
        let payload: ScatterFrameJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            AtlasError::InvalidData(format!("failed to parse frame json payload: {e}"))
        })?;
        if payload.schema_version != SCATTER_FRAME_JSON_SCHEMA_V1 {
            return Err(AtlasError::InvalidData(format!(
                "unsupported frame schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.frame)
    }
}

impl<R: Renderer> ScatterExplorer<R> {
    pub fn view_json_contract_v1(&self) -> AtlasResult<ExplorerViewJsonContractV1> {
        Ok(ExplorerViewJsonContractV1 {
            schema_version: EXPLORER_VIEW_JSON_SCHEMA_V1,
            frame: self.frame()?,
            selector: self.selector_view(),
            detail: self.detail_view(),
        })
    }

    pub fn view_json_contract_v1_pretty(&self) -> AtlasResult<String> {
        let payload = self.view_json_contract_v1()?;
        serde_json::to_string_pretty(&payload).map_err(|e| {
            AtlasError::InvalidData(format!("failed to serialize explorer view contract v1: {e}"))
        })
    }
}
