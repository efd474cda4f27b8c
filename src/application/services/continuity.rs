//! Continuity composer - folds a campaign's history into the next generation
//!
//! Produces a human-readable continuity tag (appended to the stakes, never
//! replacing them) and a reduced campaign context for the rewrite step. Both
//! outputs are pure functions of the campaign snapshot and the request.

use serde::Serialize;

use crate::domain::entities::{CampaignContext, ScenarioInput};
use crate::domain::value_objects::CampaignMode;

/// How many prior episodes are folded into the tag and the reduced context
pub const PRIOR_EPISODE_LIMIT: usize = 6;

const TAG_PREFIX: &str = "Continuity → ";
const STAKES_SEPARATOR: &str = " || ";
const UNSPECIFIED_WORLD: &str = "Unspecified World";

/// Reduced campaign context handed to the rewrite step
///
/// Battle winners are deliberately absent: only the free-text notes of
/// prior outcomes are carried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyCampaignContext {
    pub mode: CampaignMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_planet: Option<String>,
    /// Number of battles already fought in the campaign
    pub battle_index: usize,
    pub last_outcomes: Vec<PriorOutcome>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriorOutcome {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Everything the continuity composer derives for one generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContinuityComposition {
    /// Planet for the next battle: the requested one, else the fixed world of
    /// a planetary campaign
    pub planet: Option<String>,
    /// Always carries at least the campaign mode
    pub continuity_tag: String,
    pub stakes_with_tag: String,
    pub legacy_context: LegacyCampaignContext,
}

pub fn compose_continuity(
    campaign: &CampaignContext,
    requested_planet: Option<&str>,
    stakes: Option<&str>,
) -> ContinuityComposition {
    let anchor = campaign.anchor_planet();
    let planet = non_blank(requested_planet).or_else(|| fixed_planet(campaign));

    let continuity_tag = build_continuity_tag(campaign, anchor, planet);
    let stakes_with_tag = merge_stakes(stakes, &continuity_tag);

    ContinuityComposition {
        planet: planet.map(str::to_string),
        continuity_tag,
        stakes_with_tag,
        legacy_context: build_legacy_context(campaign, anchor),
    }
}

/// Fold a campaign snapshot into the input of its next battle
///
/// Blank request fields fall back to the campaign's name and tone. The next
/// planet is the requested one, else the fixed world of a planetary campaign,
/// else the planet already on the input. Stakes always carry the continuity
/// tag.
pub fn prepare_episode(
    campaign: &CampaignContext,
    mut input: ScenarioInput,
    requested_planet: Option<&str>,
) -> (ScenarioInput, LegacyCampaignContext) {
    let next_planet = non_blank(requested_planet)
        .or_else(|| fixed_planet(campaign))
        .or_else(|| non_blank(input.planet.as_deref()));
    let composition = compose_continuity(campaign, next_planet, input.stakes.as_deref());

    if non_blank(input.campaign_name.as_deref()).is_none() {
        input.campaign_name = non_blank(Some(campaign.name.as_str())).map(str::to_string);
    }
    if non_blank(input.tone.as_deref()).is_none() {
        input.tone = campaign.tone.clone();
    }
    if let Some(planet) = composition.planet {
        input.planet = Some(planet);
    }
    input.stakes = Some(composition.stakes_with_tag);

    (input, composition.legacy_context)
}

fn build_continuity_tag(
    campaign: &CampaignContext,
    anchor: Option<&str>,
    next: Option<&str>,
) -> String {
    let mut parts = vec![format!("Mode={}", campaign.mode)];

    if let Some(anchor) = anchor {
        parts.push(format!("Planet={}", anchor));
    }
    if let Some(next) = next.filter(|n| Some(*n) != anchor) {
        parts.push(format!("Next={}", next));
    }

    let prior: Vec<String> = campaign
        .recent_episodes(PRIOR_EPISODE_LIMIT)
        .iter()
        .map(|episode| {
            let world = non_blank(episode.planet_name.as_deref()).unwrap_or(UNSPECIFIED_WORLD);
            match non_blank(episode.outcome_summary.as_deref()) {
                Some(brief) => format!("{}: {}", world, brief),
                None => world.to_string(),
            }
        })
        .collect();
    if !prior.is_empty() {
        parts.push(format!("Prior={}", prior.join(" | ")));
    }

    format!("{}{}", TAG_PREFIX, parts.join("; "))
}

/// Caller stakes first, tag second; empty pieces are dropped
fn merge_stakes(stakes: Option<&str>, tag: &str) -> String {
    [stakes.unwrap_or_default(), tag]
        .into_iter()
        .filter(|piece| !piece.is_empty())
        .collect::<Vec<_>>()
        .join(STAKES_SEPARATOR)
}

fn build_legacy_context(campaign: &CampaignContext, anchor: Option<&str>) -> LegacyCampaignContext {
    LegacyCampaignContext {
        mode: campaign.mode,
        primary_planet: anchor.map(str::to_string),
        battle_index: campaign.previous_episodes.len(),
        last_outcomes: campaign
            .recent_episodes(PRIOR_EPISODE_LIMIT)
            .iter()
            .map(|episode| PriorOutcome {
                notes: episode.outcome_summary.clone(),
            })
            .collect(),
    }
}

/// The world a planetary campaign is fought on
fn fixed_planet(campaign: &CampaignContext) -> Option<&str> {
    match campaign.mode {
        CampaignMode::Planetary => non_blank(campaign.planet_name.as_deref()),
        CampaignMode::Interplanetary => None,
    }
}

pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::EpisodeMeta;

    fn episode(planet: Option<&str>, summary: Option<&str>) -> EpisodeMeta {
        EpisodeMeta {
            scenario_id: "s".to_string(),
            planet_name: planet.map(str::to_string),
            outcome_summary: summary.map(str::to_string),
            ..Default::default()
        }
    }

    fn armageddon_campaign() -> CampaignContext {
        CampaignContext {
            id: "c1".to_string(),
            name: "Ash Road".to_string(),
            mode: CampaignMode::Planetary,
            planet_name: Some("Armageddon".to_string()),
            previous_episodes: vec![
                episode(Some("Armageddon"), Some("Orks repelled")),
                episode(Some("Armageddon"), Some("Fortress held")),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_planetary_tag_with_prior_outcomes() {
        let composed = compose_continuity(&armageddon_campaign(), None, Some("Hold the spire"));

        assert_eq!(
            composed.continuity_tag,
            "Continuity → Mode=planetary; Planet=Armageddon; \
             Prior=Armageddon: Orks repelled | Armageddon: Fortress held"
        );
        assert!(composed.stakes_with_tag.starts_with("Hold the spire || Continuity → "));
        assert!(composed.stakes_with_tag.contains("Mode=planetary"));
        assert!(composed.stakes_with_tag.contains("Planet=Armageddon"));
        assert!(composed
            .stakes_with_tag
            .contains("Prior=Armageddon: Orks repelled | Armageddon: Fortress held"));
        assert_eq!(composed.planet.as_deref(), Some("Armageddon"));
    }

    #[test]
    fn test_next_planet_only_when_different() {
        let campaign = armageddon_campaign();
        let same = compose_continuity(&campaign, Some("Armageddon"), None);
        assert!(!same.continuity_tag.contains("Next="));

        let moved = compose_continuity(&campaign, Some("Cadia"), None);
        assert!(moved.continuity_tag.contains("Planet=Armageddon; Next=Cadia"));
        assert_eq!(moved.planet.as_deref(), Some("Cadia"));
    }

    #[test]
    fn test_empty_stakes_yield_tag_only() {
        let composed = compose_continuity(&armageddon_campaign(), None, Some(""));
        assert_eq!(composed.stakes_with_tag, composed.continuity_tag);
    }

    #[test]
    fn test_prior_keeps_last_six_and_falls_back_to_world() {
        let mut campaign = CampaignContext {
            mode: CampaignMode::Interplanetary,
            ..Default::default()
        };
        for i in 0..8 {
            let world = format!("World {}", i);
            let result = format!("Result {}", i);
            campaign
                .previous_episodes
                .push(episode(Some(world.as_str()), Some(result.as_str())));
        }
        campaign.previous_episodes.push(episode(None, None));

        let composed = compose_continuity(&campaign, None, None);
        assert!(composed.continuity_tag.contains("Prior=World 3: Result 3 | "));
        assert!(!composed.continuity_tag.contains("World 2"));
        assert!(composed.continuity_tag.ends_with("World 7: Result 7 | Unspecified World"));
        // Interplanetary campaigns anchor on the latest named world
        assert!(composed.continuity_tag.contains("Planet=World 7"));
        assert_eq!(composed.planet, None);

        assert_eq!(composed.legacy_context.battle_index, 9);
        assert_eq!(composed.legacy_context.last_outcomes.len(), PRIOR_EPISODE_LIMIT);
        assert_eq!(composed.legacy_context.last_outcomes[5].notes, None);
    }

    #[test]
    fn test_legacy_context_serializes_notes_only() {
        let composed = compose_continuity(&armageddon_campaign(), None, None);
        let json = serde_json::to_value(&composed.legacy_context).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "mode": "planetary",
                "primaryPlanet": "Armageddon",
                "battleIndex": 2,
                "lastOutcomes": [{"notes": "Orks repelled"}, {"notes": "Fortress held"}]
            })
        );
    }

    #[test]
    fn test_prepare_episode_fills_from_campaign() {
        let mut campaign = armageddon_campaign();
        campaign.tone = Some("Grimdark".to_string());
        let input = ScenarioInput {
            planet: Some("Somewhere".to_string()),
            stakes: Some("Hold the spire".to_string()),
            ..Default::default()
        };

        let (prepared, legacy) = prepare_episode(&campaign, input, None);

        assert_eq!(prepared.campaign_name.as_deref(), Some("Ash Road"));
        assert_eq!(prepared.tone.as_deref(), Some("Grimdark"));
        assert_eq!(prepared.planet.as_deref(), Some("Armageddon"));
        assert!(prepared
            .stakes
            .as_deref()
            .is_some_and(|s| s.starts_with("Hold the spire || Continuity → Mode=planetary")));
        assert_eq!(legacy.battle_index, 2);
    }

    #[test]
    fn test_prepare_episode_keeps_request_fields() {
        let campaign = CampaignContext {
            name: "Ash Road".to_string(),
            mode: CampaignMode::Interplanetary,
            ..Default::default()
        };
        let input = ScenarioInput {
            campaign_name: Some("Override".to_string()),
            planet: Some("Cadia".to_string()),
            ..Default::default()
        };

        let (prepared, _) = prepare_episode(&campaign, input, None);

        assert_eq!(prepared.campaign_name.as_deref(), Some("Override"));
        assert_eq!(prepared.planet.as_deref(), Some("Cadia"));
        assert_eq!(
            prepared.stakes.as_deref(),
            Some("Continuity → Mode=interplanetary; Next=Cadia")
        );
    }

    #[test]
    fn test_composition_is_deterministic() {
        let campaign = armageddon_campaign();
        assert_eq!(
            compose_continuity(&campaign, Some("Cadia"), Some("x")),
            compose_continuity(&campaign, Some("Cadia"), Some("x"))
        );
    }
}
