use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

use super::YAxisOptions;

pub const Y_AXIS_OPTIONS_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YAxisOptionsJsonContractV1 {
    pub schema_version: u32,
    pub options: YAxisOptions,
}

impl YAxisOptions {
    pub fn to_json_contract_v1_pretty(self) -> ChartResult<String> {
        let payload = YAxisOptionsJsonContractV1 {
            schema_version: Y_AXIS_OPTIONS_JSON_SCHEMA_V1,
            options: self,
        };
        serde_json::to_string_pretty(&payload)
            .map_err(|e| ChartError::Contract(format!("failed to serialize v1 payload: {e}")))
    }

    /// Parses either a versioned contract or a bare `YAxisOptions` payload.
    ///
    /// The versioned shape must be tried first: every bare field has a serde
    /// default, so a bare parse accepts any versioned payload as all-default
    /// options.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(payload) = serde_json::from_str::<YAxisOptionsJsonContractV1>(input) {
            if payload.schema_version != Y_AXIS_OPTIONS_JSON_SCHEMA_V1 {
                return Err(ChartError::Contract(format!(
                    "unsupported schema version: {}",
                    payload.schema_version
                )));
            }
            return Ok(payload.options);
        }
        serde_json::from_str::<Self>(input)
            .map_err(|e| ChartError::Contract(format!("failed to parse payload: {e}")))
    }
}
