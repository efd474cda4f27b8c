//! Campaign entities - a stored campaign and the read-only context built from it

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::domain::value_objects::{CampaignId, CampaignMode, ScenarioId};

/// What happened in one finished battle of a campaign
///
/// Episodes are history: once recorded they are only ever read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EpisodeMeta {
    pub scenario_id: String,
    pub planet_name: Option<String>,
    /// Faction labels present in the battle
    pub factions: Vec<String>,
    pub outcome_summary: Option<String>,
    pub rp_delta_by_faction: BTreeMap<String, i32>,
    pub cgp_delta: Option<i32>,
}

/// Read-only campaign snapshot handed to the continuity composer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CampaignContext {
    pub id: String,
    pub name: String,
    pub tone: Option<String>,
    pub mode: CampaignMode,
    /// Fixed world for planetary campaigns
    pub planet_name: Option<String>,
    /// Chronological, oldest first
    pub previous_episodes: Vec<EpisodeMeta>,
}

impl CampaignContext {
    /// The campaign's fixed planet, else the planet of the latest episode
    pub fn anchor_planet(&self) -> Option<&str> {
        non_blank(self.planet_name.as_deref()).or_else(|| {
            self.previous_episodes
                .iter()
                .rev()
                .find_map(|e| non_blank(e.planet_name.as_deref()))
        })
    }

    /// Up to `limit` most recent episodes, oldest first
    pub fn recent_episodes(&self, limit: usize) -> &[EpisodeMeta] {
        let start = self.previous_episodes.len().saturating_sub(limit);
        &self.previous_episodes[start..]
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// A campaign as held by the campaign store
#[derive(Debug, Clone)]
pub struct Campaign {
    pub id: CampaignId,
    pub name: String,
    pub tone: Option<String>,
    pub mode: CampaignMode,
    pub planet_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub scenario_ids: Vec<ScenarioId>,
    episodes: Vec<EpisodeMeta>,
}

impl Campaign {
    pub fn new(name: impl Into<String>, mode: CampaignMode) -> Self {
        Self {
            id: CampaignId::new(),
            name: name.into(),
            tone: None,
            mode,
            planet_name: None,
            created_at: Utc::now(),
            scenario_ids: Vec::new(),
            episodes: Vec::new(),
        }
    }

    pub fn with_tone(mut self, tone: impl Into<String>) -> Self {
        self.tone = Some(tone.into());
        self
    }

    pub fn with_planet(mut self, planet_name: impl Into<String>) -> Self {
        self.planet_name = Some(planet_name.into());
        self
    }

    pub fn episodes(&self) -> &[EpisodeMeta] {
        &self.episodes
    }

    /// Append a finished battle to the history
    pub fn record_episode(&mut self, episode: EpisodeMeta) {
        self.episodes.push(episode);
    }

    pub fn link_scenario(&mut self, scenario_id: ScenarioId) {
        if !self.scenario_ids.contains(&scenario_id) {
            self.scenario_ids.push(scenario_id);
        }
    }

    /// Snapshot used for continuity composition
    pub fn context(&self) -> CampaignContext {
        CampaignContext {
            id: self.id.to_string(),
            name: self.name.clone(),
            tone: self.tone.clone(),
            mode: self.mode,
            planet_name: self.planet_name.clone(),
            previous_episodes: self.episodes.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn episode(planet: Option<&str>, summary: &str) -> EpisodeMeta {
        EpisodeMeta {
            scenario_id: ScenarioId::new().to_string(),
            planet_name: planet.map(str::to_string),
            outcome_summary: Some(summary.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_anchor_planet_prefers_fixed_world() {
        let mut campaign = Campaign::new("Ash Road", CampaignMode::Planetary).with_planet("Cadia");
        campaign.record_episode(episode(Some("Krieg"), "Held the line"));
        assert_eq!(campaign.context().anchor_planet(), Some("Cadia"));
    }

    #[test]
    fn test_anchor_planet_falls_back_to_latest_episode() {
        let mut campaign = Campaign::new("Void Crusade", CampaignMode::Interplanetary);
        campaign.record_episode(episode(Some("Baal"), "Hive fleet stalled"));
        campaign.record_episode(episode(None, "Boarding action"));
        assert_eq!(campaign.context().anchor_planet(), Some("Baal"));
    }

    #[test]
    fn test_recent_episodes_keeps_tail() {
        let mut campaign = Campaign::new("Long War", CampaignMode::Planetary);
        for i in 0..9 {
            campaign.record_episode(episode(Some("Armageddon"), &format!("Battle {}", i)));
        }
        let context = campaign.context();
        let recent = context.recent_episodes(6);
        assert_eq!(recent.len(), 6);
        assert_eq!(recent[0].outcome_summary.as_deref(), Some("Battle 3"));
        assert_eq!(recent[5].outcome_summary.as_deref(), Some("Battle 8"));
    }

    #[test]
    fn test_link_scenario_is_idempotent() {
        let mut campaign = Campaign::new("Ash Road", CampaignMode::Planetary);
        let id = ScenarioId::new();
        campaign.link_scenario(id);
        campaign.link_scenario(id);
        assert_eq!(campaign.scenario_ids, vec![id]);
    }
}
