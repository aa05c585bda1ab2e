use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

use super::RenderConfiguration;

pub const RENDER_CONFIGURATION_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfigurationJsonContractV1 {
    pub schema_version: u32,
    pub configuration: RenderConfiguration,
}

impl RenderConfiguration {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize render configuration: {e}"))
        })
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = RenderConfigurationJsonContractV1 {
            schema_version: RENDER_CONFIGURATION_JSON_SCHEMA_V1,
            configuration: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!(
                "failed to serialize render configuration contract v1: {e}"
            ))
        })
    }

    /// Accepts either a bare configuration or a versioned contract envelope.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(configuration) = serde_json::from_str::<RenderConfiguration>(input) {
            return Ok(configuration);
        }
        let payload: RenderConfigurationJsonContractV1 =
            serde_json::from_str(input).map_err(|e| {
                ChartError::InvalidPayload(format!(
                    "failed to parse render configuration json payload: {e}"
                ))
            })?;
        if payload.schema_version != RENDER_CONFIGURATION_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidPayload(format!(
                "unsupported render configuration schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.configuration)
    }
}
