//! Option catalog response bodies

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{Biome, CatalogOption, PlanetDef, PlanetQuery, Segmentum};
use crate::domain::value_objects::PlayerSlot;

#[derive(Debug, Clone, Serialize)]
pub struct OptionDto {
    pub value: String,
    pub label: String,
}

impl From<CatalogOption> for OptionDto {
    fn from(option: CatalogOption) -> Self {
        Self {
            value: option.value,
            label: option.label,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlanetListQuery {
    pub segmentum: Option<String>,
}

/// Body of `POST /api/options/planet-pick`; unparseable hints are ignored
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlanetPickRequestDto {
    pub segmentum: Option<String>,
    pub biome: Option<String>,
    pub faction_key: Option<String>,
    pub seed: Option<String>,
}

impl From<PlanetPickRequestDto> for PlanetQuery {
    fn from(dto: PlanetPickRequestDto) -> Self {
        Self {
            segmentum: dto.segmentum.as_deref().and_then(Segmentum::parse),
            biome: dto.biome.as_deref().and_then(Biome::parse),
            faction_key: dto.faction_key.filter(|k| !k.trim().is_empty()),
            seed: dto.seed.filter(|s| !s.is_empty()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetResponseDto {
    pub key: String,
    pub name: String,
    pub segmentum: String,
    pub biomes: Vec<String>,
    pub notes: String,
}

impl From<&PlanetDef> for PlanetResponseDto {
    fn from(planet: &PlanetDef) -> Self {
        Self {
            key: planet.key.to_string(),
            name: planet.name.to_string(),
            segmentum: planet.segmentum.label().to_string(),
            biomes: planet.biomes.iter().map(|b| b.label().to_string()).collect(),
            notes: planet.notes.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatSlotsResponseDto {
    pub format: String,
    pub team_count: usize,
    pub slots: Vec<PlayerSlot>,
}
