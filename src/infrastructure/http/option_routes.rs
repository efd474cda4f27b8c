//! Option catalog API routes

use axum::{
    extract::{Path, Query},
    http::StatusCode,
    Json,
};

use crate::application::dto::{
    FormatSlotsResponseDto, OptionDto, PlanetListQuery, PlanetPickRequestDto, PlanetResponseDto,
};
use crate::domain::catalog::{self, PlanetQuery, Segmentum};
use crate::domain::value_objects::BattleFormat;

fn to_dtos(options: Vec<catalog::CatalogOption>) -> Vec<OptionDto> {
    options.into_iter().map(OptionDto::from).collect()
}

pub async fn list_factions() -> Json<Vec<OptionDto>> {
    Json(to_dtos(catalog::faction_options()))
}

/// Subfactions of one faction; unknown factions have none
pub async fn list_subfactions(Path(key): Path<String>) -> Json<Vec<OptionDto>> {
    Json(to_dtos(catalog::subfaction_options(&key)))
}

pub async fn list_segmentums() -> Json<Vec<String>> {
    Json(
        catalog::segmentums()
            .into_iter()
            .map(|s| s.label().to_string())
            .collect(),
    )
}

/// Planets, optionally restricted to a segmentum. An unknown segmentum has
/// no planets.
pub async fn list_planets(Query(query): Query<PlanetListQuery>) -> Json<Vec<OptionDto>> {
    let options = match query.segmentum.as_deref().filter(|s| !s.trim().is_empty()) {
        Some(raw) => match Segmentum::parse(raw) {
            Some(segmentum) => catalog::planet_options(Some(segmentum)),
            None => Vec::new(),
        },
        None => catalog::planet_options(None),
    };
    Json(to_dtos(options))
}

pub async fn list_tones() -> Json<Vec<OptionDto>> {
    Json(to_dtos(catalog::tone_options()))
}

/// Player-slot layout of a battle format
pub async fn format_slots(
    Path(format): Path<String>,
) -> Result<Json<FormatSlotsResponseDto>, (StatusCode, String)> {
    let format = BattleFormat::coerce(&format)
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Unknown battle format".to_string()))?;

    Ok(Json(FormatSlotsResponseDto {
        format: format.as_str().to_string(),
        team_count: format.team_count(),
        slots: format.slot_layout(),
    }))
}

/// Deterministic planet suggestion from optional hints
pub async fn pick_planet(Json(req): Json<PlanetPickRequestDto>) -> Json<PlanetResponseDto> {
    let planet = catalog::pick_planet(&PlanetQuery::from(req));
    Json(PlanetResponseDto::from(planet))
}
