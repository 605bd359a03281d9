use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::{AxisGeometry, Tick};
use crate::error::{SkipError, SkipResult};

use super::{TickOptions, select_visible_indices};

pub const AUTOSKIP_REQUEST_JSON_SCHEMA_V1: u32 = 1;
pub const AUTOSKIP_RESPONSE_JSON_SCHEMA_V1: u32 = 1;

/// Ticks, axis geometry and options for one auto-skip run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutoSkipRequest {
    pub geometry: AxisGeometry,
    #[serde(default)]
    pub options: TickOptions,
    pub ticks: Vec<Tick<Value>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutoSkipRequestJsonContractV1 {
    pub schema_version: u32,
    pub request: AutoSkipRequest,
}

/// Outcome of an auto-skip run: the kept positions and their ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutoSkipResponse {
    pub capacity: usize,
    pub limit: usize,
    pub indices: Vec<usize>,
    pub ticks: Vec<Tick<Value>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutoSkipResponseJsonContractV1 {
    pub schema_version: u32,
    pub response: AutoSkipResponse,
}

impl AutoSkipRequest {
    #[must_use]
    pub fn run(&self) -> AutoSkipResponse {
        let capacity = self.geometry.capacity();
        let indices = select_visible_indices(self.geometry, self.options, &self.ticks);
        let ticks = indices
            .iter()
            .map(|index| self.ticks[*index].clone())
            .collect();

        AutoSkipResponse {
            capacity,
            limit: self.options.resolve_limit(capacity),
            indices,
            ticks,
        }
    }

    pub fn to_json_contract_v1_pretty(&self) -> SkipResult<String> {
        let payload = AutoSkipRequestJsonContractV1 {
            schema_version: AUTOSKIP_REQUEST_JSON_SCHEMA_V1,
            request: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            SkipError::InvalidData(format!("failed to serialize auto-skip request v1: {e}"))
        })
    }

    /// Accepts either a bare request or a versioned v1 contract.
    pub fn from_json_compat_str(input: &str) -> SkipResult<Self> {
        if let Ok(request) = serde_json::from_str::<AutoSkipRequest>(input) {
            return Ok(request);
        }
        let payload: AutoSkipRequestJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            SkipError::InvalidData(format!("failed to parse auto-skip request json: {e}"))
        })?;
        if payload.schema_version != AUTOSKIP_REQUEST_JSON_SCHEMA_V1 {
            return Err(SkipError::InvalidData(format!(
                "unsupported auto-skip request schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.request)
    }
}

impl AutoSkipResponse {
    pub fn to_json_contract_v1_pretty(&self) -> SkipResult<String> {
        let payload = AutoSkipResponseJsonContractV1 {
            schema_version: AUTOSKIP_RESPONSE_JSON_SCHEMA_V1,
            response: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            SkipError::InvalidData(format!("failed to serialize auto-skip response v1: {e}"))
        })
    }
}
