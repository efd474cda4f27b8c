use serde::{Deserialize, Serialize};

/// How a campaign moves between worlds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignMode {
    /// Sequential conquest of one fixed planet
    #[default]
    Planetary,
    /// A new planet for every battle
    Interplanetary,
}

impl CampaignMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignMode::Planetary => "planetary",
            CampaignMode::Interplanetary => "interplanetary",
        }
    }
}

impl std::fmt::Display for CampaignMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
