//! Generation API routes

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::application::dto::{CampaignGenerateRequestDto, GenerateRequestDto, GenerateResponseDto};
use crate::application::services::prepare_episode;
use crate::domain::entities::CampaignContext;
use crate::infrastructure::state::AppState;

/// Campaign-agnostic generation
pub async fn generate(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GenerateRequestDto>,
) -> Json<GenerateResponseDto> {
    let settings = state.config.generation_settings();
    let result = state
        .generation_service
        .generate(&req.into_input(), &settings, None)
        .await;

    Json(GenerateResponseDto::from(result))
}

/// Generation with an inline campaign snapshot
///
/// Without a campaign object this behaves like `generate`, except that a
/// requested planet still overrides the input planet.
pub async fn campaign_generate(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CampaignGenerateRequestDto>,
) -> Json<GenerateResponseDto> {
    let settings = state.config.generation_settings();
    let mut input = req.scenario.into_input();

    let result = match req.campaign {
        Some(campaign) => {
            let context = CampaignContext::from(campaign);
            let (input, legacy_context) =
                prepare_episode(&context, input, req.requested_planet.as_deref());
            state
                .generation_service
                .generate(&input, &settings, Some(&legacy_context))
                .await
        }
        None => {
            if let Some(planet) = req.requested_planet.filter(|p| !p.trim().is_empty()) {
                input.planet = Some(planet);
            }
            state
                .generation_service
                .generate(&input, &settings, None)
                .await
        }
    };

    Json(GenerateResponseDto::from(result))
}
