//! Scenario history request/response bodies

use serde::{Deserialize, Serialize};

use crate::application::dto::generate::GenerateRequestDto;
use crate::domain::entities::ScenarioRecord;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SaveScenarioRequestDto {
    pub input: GenerateRequestDto,
    pub narrative: String,
    pub ai_used: bool,
    pub campaign_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioListQuery {
    pub campaign_id: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioResponseDto {
    pub id: String,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign_id: Option<String>,
    pub input: GenerateRequestDto,
    pub narrative: String,
    pub ai_used: bool,
}

impl From<ScenarioRecord> for ScenarioResponseDto {
    fn from(record: ScenarioRecord) -> Self {
        Self {
            id: record.id.to_string(),
            created_at: record.created_at.to_rfc3339(),
            campaign_id: record.campaign_id.map(|id| id.to_string()),
            input: GenerateRequestDto::from(record.input),
            narrative: record.narrative,
            ai_used: record.ai_used,
        }
    }
}
