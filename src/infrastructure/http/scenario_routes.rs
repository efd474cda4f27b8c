//! Scenario history API routes

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::{ScenarioListQuery, ScenarioResponseDto, SaveScenarioRequestDto};
use crate::application::services::{SaveScenarioRequest, ScenarioError, ScenarioService};
use crate::domain::value_objects::{CampaignId, ScenarioId};
use crate::infrastructure::state::AppState;

fn parse_scenario_id(id: &str) -> Result<ScenarioId, (StatusCode, String)> {
    id.parse()
        .map_err(|_| (StatusCode::BAD_REQUEST, "Invalid scenario ID".to_string()))
}

fn scenario_error(e: ScenarioError) -> (StatusCode, String) {
    match e {
        ScenarioError::EmptyNarrative => (StatusCode::BAD_REQUEST, e.to_string()),
        ScenarioError::Repository(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    }
}

fn parse_optional_campaign_id(
    id: Option<String>,
) -> Result<Option<CampaignId>, (StatusCode, String)> {
    id.filter(|id| !id.trim().is_empty())
        .map(|id| {
            id.parse()
                .map_err(|_| (StatusCode::BAD_REQUEST, "Invalid campaign ID".to_string()))
        })
        .transpose()
}

/// List saved scenarios, newest first
pub async fn list_scenarios(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ScenarioListQuery>,
) -> Result<Json<Vec<ScenarioResponseDto>>, (StatusCode, String)> {
    let campaign_id = parse_optional_campaign_id(query.campaign_id)?;
    let records = state
        .scenario_service
        .list_scenarios(campaign_id)
        .await
        .map_err(scenario_error)?;

    Ok(Json(
        records.into_iter().map(ScenarioResponseDto::from).collect(),
    ))
}

/// Save a generated scenario
pub async fn save_scenario(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SaveScenarioRequestDto>,
) -> Result<(StatusCode, Json<ScenarioResponseDto>), (StatusCode, String)> {
    let campaign_id = parse_optional_campaign_id(req.campaign_id)?;
    let record = state
        .scenario_service
        .save_scenario(SaveScenarioRequest {
            input: req.input.into_input(),
            narrative: req.narrative,
            ai_used: req.ai_used,
            campaign_id,
        })
        .await
        .map_err(scenario_error)?;

    Ok((StatusCode::CREATED, Json(ScenarioResponseDto::from(record))))
}

/// Get a saved scenario by ID
pub async fn get_scenario(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ScenarioResponseDto>, (StatusCode, String)> {
    let id = parse_scenario_id(&id)?;
    let record = state
        .scenario_service
        .get_scenario(id)
        .await
        .map_err(scenario_error)?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Scenario not found".to_string()))?;

    Ok(Json(ScenarioResponseDto::from(record)))
}

/// Delete a saved scenario
pub async fn delete_scenario(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, (StatusCode, String)> {
    let id = parse_scenario_id(&id)?;
    let deleted = state
        .scenario_service
        .delete_scenario(id)
        .await
        .map_err(scenario_error)?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err((StatusCode::NOT_FOUND, "Scenario not found".to_string()))
    }
}
