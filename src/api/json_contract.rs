use serde::{Deserialize, Serialize};

use crate::error::{SliderError, SliderResult};

use super::{SliderConfig, SliderSnapshot};

pub const SLIDER_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;
pub const SLIDER_CONFIG_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: SliderSnapshot,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: SliderConfig,
}

impl SliderSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> SliderResult<String> {
        let payload = SliderSnapshotJsonContractV1 {
            schema_version: SLIDER_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            SliderError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    pub fn from_json_compat_str(input: &str) -> SliderResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<SliderSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: SliderSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            SliderError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != SLIDER_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(SliderError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl SliderConfig {
    pub fn to_json_contract_v1_pretty(&self) -> SliderResult<String> {
        let payload = SliderConfigJsonContractV1 {
            schema_version: SLIDER_CONFIG_JSON_SCHEMA_V1,
            config: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            SliderError::InvalidData(format!("failed to serialize config contract v1: {e}"))
        })
    }

    /// Accepts either a contract v1 payload or a bare config document.
    pub fn from_json_compat_str(input: &str) -> SliderResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input)
            .map_err(|e| SliderError::InvalidData(format!("failed to parse config json: {e}")))?;
        if value.get("schema_version").is_none() {
            return Self::from_json_str(input);
        }
        let payload: SliderConfigJsonContractV1 = serde_json::from_value(value).map_err(|e| {
            SliderError::InvalidData(format!("failed to parse config json payload: {e}"))
        })?;
        if payload.schema_version != SLIDER_CONFIG_JSON_SCHEMA_V1 {
            return Err(SliderError::InvalidData(format!(
                "unsupported config schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.config)
    }
}
