//! Scenario entities - the input of one generation and its saved record

use chrono::{DateTime, Utc};

use crate::domain::catalog::format_faction_choice;
use crate::domain::value_objects::{BattleFormat, CampaignId, ScenarioId};

/// One player's faction selection. Keys are resolved against the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WarhostPlayer {
    pub faction_key: String,
    pub sub_key: Option<String>,
}

impl WarhostPlayer {
    pub fn new(faction_key: impl Into<String>) -> Self {
        Self {
            faction_key: faction_key.into(),
            sub_key: None,
        }
    }

    pub fn with_subfaction(mut self, sub_key: impl Into<String>) -> Self {
        self.sub_key = Some(sub_key.into());
        self
    }

    /// A player with no faction key holds an open slot
    pub fn is_assigned(&self) -> bool {
        !self.faction_key.trim().is_empty()
    }

    /// Catalog label, empty when unassigned or unresolvable
    pub fn label(&self) -> String {
        if !self.is_assigned() {
            return String::new();
        }
        format_faction_choice(&self.faction_key, self.sub_key.as_deref())
    }
}

/// A named team of players
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Warhost {
    pub name: String,
    pub players: Vec<WarhostPlayer>,
}

impl Warhost {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            players: Vec::new(),
        }
    }

    pub fn with_player(mut self, player: WarhostPlayer) -> Self {
        self.players.push(player);
        self
    }

    /// Resolved player labels in seat order, skipping empty ones
    pub fn resolved_labels(&self) -> Vec<String> {
        self.players
            .iter()
            .map(WarhostPlayer::label)
            .filter(|label| !label.is_empty())
            .collect()
    }
}

/// Everything needed to build one scenario narrative
///
/// Free-text fields are kept raw; clamping and defaulting happen when the
/// narrative is built so the input stays a faithful record of the request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScenarioInput {
    pub campaign_name: Option<String>,
    pub battle_format: BattleFormat,
    /// Explicit primary faction label; derived from the first Warhost when absent
    pub player_faction: Option<String>,
    /// Explicit opposition label; derived from the remaining Warhosts when absent
    pub other_factions: Option<String>,
    pub planet: Option<String>,
    pub tone: Option<String>,
    pub stakes: Option<String>,
    pub warhosts: Vec<Warhost>,
    pub players_count: Option<u32>,
}

impl ScenarioInput {
    /// Explicit positive player count, else the number of seated players
    pub fn effective_players_count(&self) -> Option<u32> {
        if let Some(count) = self.players_count.filter(|c| *c > 0) {
            return Some(count);
        }
        let seated: usize = self.warhosts.iter().map(|w| w.players.len()).sum();
        u32::try_from(seated).ok().filter(|c| *c > 0)
    }

    /// Label for the primary side of the battle
    pub fn primary_faction_label(&self) -> Option<String> {
        non_blank(self.player_faction.as_deref()).or_else(|| {
            let labels = self.warhosts.first()?.resolved_labels();
            (!labels.is_empty()).then(|| labels.join(" & "))
        })
    }

    /// Label for everyone opposing the primary side
    pub fn opposition_label(&self) -> Option<String> {
        non_blank(self.other_factions.as_deref()).or_else(|| {
            let labels: Vec<String> = self
                .warhosts
                .iter()
                .skip(1)
                .flat_map(Warhost::resolved_labels)
                .collect();
            (!labels.is_empty()).then(|| labels.join(", "))
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// A generated scenario kept in history
#[derive(Debug, Clone)]
pub struct ScenarioRecord {
    pub id: ScenarioId,
    pub created_at: DateTime<Utc>,
    pub campaign_id: Option<CampaignId>,
    pub input: ScenarioInput,
    pub narrative: String,
    pub ai_used: bool,
}

impl ScenarioRecord {
    pub fn new(input: ScenarioInput, narrative: impl Into<String>, ai_used: bool) -> Self {
        Self {
            id: ScenarioId::new(),
            created_at: Utc::now(),
            campaign_id: None,
            input,
            narrative: narrative.into(),
            ai_used,
        }
    }

    pub fn with_campaign(mut self, campaign_id: CampaignId) -> Self {
        self.campaign_id = Some(campaign_id);
        self
    }
}
