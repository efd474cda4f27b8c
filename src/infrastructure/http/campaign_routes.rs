//! Campaign API routes

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::{
    CampaignResponseDto, CreateCampaignRequestDto, EpisodeMetaDto, EpisodeResponseDto,
    NextEpisodeRequestDto,
};
use crate::application::services::{CampaignError, CampaignService};
use crate::domain::value_objects::CampaignId;
use crate::infrastructure::state::AppState;

fn parse_campaign_id(id: &str) -> Result<CampaignId, (StatusCode, String)> {
    id.parse()
        .map_err(|_| (StatusCode::BAD_REQUEST, "Invalid campaign ID".to_string()))
}

fn campaign_error(e: CampaignError) -> (StatusCode, String) {
    match e {
        CampaignError::NotFound(_) => (StatusCode::NOT_FOUND, "Campaign not found".to_string()),
        CampaignError::Repository(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    }
}

/// List all campaigns
pub async fn list_campaigns(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CampaignResponseDto>>, (StatusCode, String)> {
    let campaigns = state
        .campaign_service
        .list_campaigns()
        .await
        .map_err(campaign_error)?;

    Ok(Json(
        campaigns.into_iter().map(CampaignResponseDto::from).collect(),
    ))
}

/// Create a new campaign
pub async fn create_campaign(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateCampaignRequestDto>,
) -> Result<(StatusCode, Json<CampaignResponseDto>), (StatusCode, String)> {
    let campaign = state
        .campaign_service
        .create_campaign(req.into())
        .await
        .map_err(campaign_error)?;

    Ok((StatusCode::CREATED, Json(CampaignResponseDto::from(campaign))))
}

/// Get a campaign by ID
pub async fn get_campaign(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<CampaignResponseDto>, (StatusCode, String)> {
    let id = parse_campaign_id(&id)?;
    let campaign = state
        .campaign_service
        .get_campaign(id)
        .await
        .map_err(campaign_error)?;

    Ok(Json(CampaignResponseDto::from(campaign)))
}

/// Delete a campaign
pub async fn delete_campaign(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, (StatusCode, String)> {
    let id = parse_campaign_id(&id)?;
    state
        .campaign_service
        .delete_campaign(id)
        .await
        .map_err(campaign_error)?;

    Ok(StatusCode::NO_CONTENT)
}

/// Append a finished battle to the campaign history
pub async fn record_outcome(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<EpisodeMetaDto>,
) -> Result<Json<CampaignResponseDto>, (StatusCode, String)> {
    let id = parse_campaign_id(&id)?;
    let campaign = state
        .campaign_service
        .record_outcome(id, req.into())
        .await
        .map_err(campaign_error)?;

    Ok(Json(CampaignResponseDto::from(campaign)))
}

/// Generate the next episode of a stored campaign
pub async fn generate_episode(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<NextEpisodeRequestDto>,
) -> Result<Json<EpisodeResponseDto>, (StatusCode, String)> {
    let id = parse_campaign_id(&id)?;
    let settings = state.config.generation_settings();
    let episode = state
        .campaign_service
        .generate_episode(id, req.into(), &settings)
        .await
        .map_err(campaign_error)?;

    Ok(Json(EpisodeResponseDto::from(episode)))
}
