//! Campaign request/response bodies

use serde::{Deserialize, Serialize};

use crate::application::dto::generate::{EpisodeMetaDto, GenerateRequestDto};
use crate::application::services::{CreateCampaignRequest, GeneratedEpisode, NextEpisodeRequest};
use crate::domain::entities::Campaign;
use crate::domain::value_objects::CampaignMode;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateCampaignRequestDto {
    pub name: String,
    pub tone: Option<String>,
    pub mode: CampaignMode,
    pub planet_name: Option<String>,
}

impl From<CreateCampaignRequestDto> for CreateCampaignRequest {
    fn from(dto: CreateCampaignRequestDto) -> Self {
        Self {
            name: dto.name,
            tone: dto.tone,
            mode: dto.mode,
            planet_name: dto.planet_name,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignResponseDto {
    pub id: String,
    pub name: String,
    pub tone: Option<String>,
    pub mode: CampaignMode,
    pub planet_name: Option<String>,
    pub created_at: String,
    pub scenario_ids: Vec<String>,
    pub episodes: Vec<EpisodeMetaDto>,
}

impl From<Campaign> for CampaignResponseDto {
    fn from(campaign: Campaign) -> Self {
        Self {
            id: campaign.id.to_string(),
            episodes: campaign
                .episodes()
                .iter()
                .cloned()
                .map(EpisodeMetaDto::from)
                .collect(),
            name: campaign.name,
            tone: campaign.tone,
            mode: campaign.mode,
            planet_name: campaign.planet_name,
            created_at: campaign.created_at.to_rfc3339(),
            scenario_ids: campaign.scenario_ids.iter().map(|id| id.to_string()).collect(),
        }
    }
}

/// Body of `POST /api/campaigns/{id}/generate`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextEpisodeRequestDto {
    #[serde(flatten)]
    pub scenario: GenerateRequestDto,
    pub requested_planet: Option<String>,
}

impl From<NextEpisodeRequestDto> for NextEpisodeRequest {
    fn from(dto: NextEpisodeRequestDto) -> Self {
        Self {
            input: dto.scenario.into_input(),
            requested_planet: dto.requested_planet,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeResponseDto {
    pub scenario_id: String,
    pub narrative: String,
    pub ai_used: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_error: Option<String>,
}

impl From<GeneratedEpisode> for EpisodeResponseDto {
    fn from(episode: GeneratedEpisode) -> Self {
        Self {
            scenario_id: episode.record.id.to_string(),
            narrative: episode.result.narrative,
            ai_used: episode.result.ai_used,
            ai_error: episode.result.ai_error,
        }
    }
}
