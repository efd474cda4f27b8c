//! HTTP REST API routes

mod campaign_routes;
mod generate_routes;
mod option_routes;
mod scenario_routes;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::infrastructure::state::AppState;

/// Create all API routes
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        // Generation routes
        .route("/api/generate", post(generate_routes::generate))
        .route(
            "/api/campaign-generate",
            post(generate_routes::campaign_generate),
        )
        // Campaign routes
        .route(
            "/api/campaigns",
            get(campaign_routes::list_campaigns).post(campaign_routes::create_campaign),
        )
        .route(
            "/api/campaigns/{id}",
            get(campaign_routes::get_campaign).delete(campaign_routes::delete_campaign),
        )
        .route(
            "/api/campaigns/{id}/outcomes",
            post(campaign_routes::record_outcome),
        )
        .route(
            "/api/campaigns/{id}/generate",
            post(campaign_routes::generate_episode),
        )
        // Scenario history routes
        .route(
            "/api/scenarios",
            get(scenario_routes::list_scenarios).post(scenario_routes::save_scenario),
        )
        .route(
            "/api/scenarios/{id}",
            get(scenario_routes::get_scenario).delete(scenario_routes::delete_scenario),
        )
        // Option catalog routes
        .route("/api/options/factions", get(option_routes::list_factions))
        .route(
            "/api/options/factions/{key}/subfactions",
            get(option_routes::list_subfactions),
        )
        .route("/api/options/segmentums", get(option_routes::list_segmentums))
        .route("/api/options/planets", get(option_routes::list_planets))
        .route("/api/options/tones", get(option_routes::list_tones))
        .route(
            "/api/options/formats/{format}/slots",
            get(option_routes::format_slots),
        )
        .route("/api/options/planet-pick", post(option_routes::pick_planet))
}
