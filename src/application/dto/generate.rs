//! Generation request/response bodies
//!
//! Request bodies are lenient: every field is optional, unknown battle
//! formats fall back to 1v1 and odd player counts are ignored. A request
//! never fails validation once it is valid JSON.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::application::services::GenerationResult;
use crate::domain::catalog::tone_label;
use crate::domain::entities::{CampaignContext, EpisodeMeta, ScenarioInput, Warhost, WarhostPlayer};
use crate::domain::value_objects::{BattleFormat, CampaignMode};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerDto {
    #[serde(deserialize_with = "lenient")]
    pub faction_key: String,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub sub_key: Option<String>,
}

impl From<PlayerDto> for WarhostPlayer {
    fn from(dto: PlayerDto) -> Self {
        Self {
            faction_key: dto.faction_key,
            sub_key: dto.sub_key.filter(|k| !k.trim().is_empty()),
        }
    }
}

impl From<WarhostPlayer> for PlayerDto {
    fn from(player: WarhostPlayer) -> Self {
        Self {
            faction_key: player.faction_key,
            sub_key: player.sub_key,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WarhostDto {
    #[serde(deserialize_with = "lenient")]
    pub name: String,
    #[serde(deserialize_with = "lenient_list")]
    pub players: Vec<PlayerDto>,
}

impl From<WarhostDto> for Warhost {
    fn from(dto: WarhostDto) -> Self {
        Self {
            name: dto.name,
            players: dto.players.into_iter().map(WarhostPlayer::from).collect(),
        }
    }
}

impl From<Warhost> for WarhostDto {
    fn from(warhost: Warhost) -> Self {
        Self {
            name: warhost.name,
            players: warhost.players.into_iter().map(PlayerDto::from).collect(),
        }
    }
}

/// Body of `POST /api/generate`, also the stored shape of a scenario input
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerateRequestDto {
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub campaign_name: Option<String>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub battle_format: Option<String>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub player_faction: Option<String>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub other_factions: Option<String>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub planet: Option<String>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub stakes: Option<String>,
    #[serde(deserialize_with = "lenient_list")]
    pub warhosts: Vec<WarhostDto>,
    #[serde(
        deserialize_with = "lenient_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub players_count: Option<u32>,
}

impl GenerateRequestDto {
    /// Normalize into the domain input. Tone catalog keys become their labels.
    pub fn into_input(self) -> ScenarioInput {
        ScenarioInput {
            campaign_name: self.campaign_name,
            battle_format: self
                .battle_format
                .as_deref()
                .and_then(BattleFormat::coerce)
                .unwrap_or_default(),
            player_faction: self.player_faction,
            other_factions: self.other_factions,
            planet: self.planet,
            tone: self.tone.map(|t| tone_label(t.trim())),
            stakes: self.stakes,
            warhosts: self.warhosts.into_iter().map(Warhost::from).collect(),
            players_count: self.players_count,
        }
    }
}

impl From<ScenarioInput> for GenerateRequestDto {
    fn from(input: ScenarioInput) -> Self {
        Self {
            campaign_name: input.campaign_name,
            battle_format: Some(input.battle_format.as_str().to_string()),
            player_faction: input.player_faction,
            other_factions: input.other_factions,
            planet: input.planet,
            tone: input.tone,
            stakes: input.stakes,
            warhosts: input.warhosts.into_iter().map(WarhostDto::from).collect(),
            players_count: input.players_count,
        }
    }
}

/// Null or a value of the wrong type reads as the field's default
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Anything but an array reads as empty; malformed elements are dropped
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

/// Positive whole numbers only; anything else reads as absent
fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value
        .and_then(|v| v.as_u64())
        .and_then(|n| u32::try_from(n).ok())
        .filter(|n| *n > 0))
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EpisodeMetaDto {
    pub scenario_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planet_name: Option<String>,
    pub factions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome_summary: Option<String>,
    pub rp_delta_by_faction: BTreeMap<String, i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cgp_delta: Option<i32>,
}

impl From<EpisodeMetaDto> for EpisodeMeta {
    fn from(dto: EpisodeMetaDto) -> Self {
        Self {
            scenario_id: dto.scenario_id,
            planet_name: dto.planet_name,
            factions: dto.factions,
            outcome_summary: dto.outcome_summary,
            rp_delta_by_faction: dto.rp_delta_by_faction,
            cgp_delta: dto.cgp_delta,
        }
    }
}

impl From<EpisodeMeta> for EpisodeMetaDto {
    fn from(episode: EpisodeMeta) -> Self {
        Self {
            scenario_id: episode.scenario_id,
            planet_name: episode.planet_name,
            factions: episode.factions,
            outcome_summary: episode.outcome_summary,
            rp_delta_by_faction: episode.rp_delta_by_faction,
            cgp_delta: episode.cgp_delta,
        }
    }
}

/// Inline campaign snapshot sent by callers that keep campaigns themselves
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CampaignContextDto {
    pub id: String,
    pub name: String,
    pub tone: Option<String>,
    /// Unknown or missing modes read as planetary
    pub mode: Option<String>,
    pub planet_name: Option<String>,
    pub previous_episodes: Vec<EpisodeMetaDto>,
}

impl From<CampaignContextDto> for CampaignContext {
    fn from(dto: CampaignContextDto) -> Self {
        let mode = match dto.mode.as_deref().map(str::trim) {
            Some(m) if m.eq_ignore_ascii_case("interplanetary") => CampaignMode::Interplanetary,
            _ => CampaignMode::Planetary,
        };
        Self {
            id: dto.id,
            name: dto.name,
            tone: dto.tone,
            mode,
            planet_name: dto.planet_name,
            previous_episodes: dto
                .previous_episodes
                .into_iter()
                .map(EpisodeMeta::from)
                .collect(),
        }
    }
}

/// Body of `POST /api/campaign-generate`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignGenerateRequestDto {
    #[serde(flatten)]
    pub scenario: GenerateRequestDto,
    pub campaign: Option<CampaignContextDto>,
    pub requested_planet: Option<String>,
}

/// Envelope returned by every generation endpoint
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponseDto {
    pub narrative: String,
    pub ai_used: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_error: Option<String>,
}

impl From<GenerationResult> for GenerateResponseDto {
    fn from(result: GenerationResult) -> Self {
        Self {
            narrative: result.narrative,
            ai_used: result.ai_used,
            ai_error: result.ai_error,
        }
    }
}
