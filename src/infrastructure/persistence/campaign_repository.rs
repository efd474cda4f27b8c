//! Campaign repository implementation held in memory

use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::ports::outbound::CampaignRepositoryPort;
use crate::domain::entities::{Campaign, EpisodeMeta};
use crate::domain::value_objects::{CampaignId, ScenarioId};

/// Repository for Campaign operations
#[derive(Default)]
pub struct InMemoryCampaignRepository {
    campaigns: RwLock<HashMap<CampaignId, Campaign>>,
}

impl InMemoryCampaignRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CampaignRepositoryPort for InMemoryCampaignRepository {
    async fn create(&self, campaign: &Campaign) -> Result<()> {
        let mut campaigns = self.campaigns.write().await;
        if campaigns.contains_key(&campaign.id) {
            anyhow::bail!("Campaign already exists: {}", campaign.id);
        }
        campaigns.insert(campaign.id, campaign.clone());

        tracing::debug!("Created campaign: {}", campaign.name);
        Ok(())
    }

    async fn get(&self, id: CampaignId) -> Result<Option<Campaign>> {
        Ok(self.campaigns.read().await.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Campaign>> {
        let mut campaigns: Vec<Campaign> = self.campaigns.read().await.values().cloned().collect();
        campaigns.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(campaigns)
    }

    async fn append_episode(
        &self,
        id: CampaignId,
        episode: EpisodeMeta,
    ) -> Result<Option<Campaign>> {
        let mut campaigns = self.campaigns.write().await;
        let Some(campaign) = campaigns.get_mut(&id) else {
            return Ok(None);
        };
        campaign.record_episode(episode);

        tracing::debug!("Appended episode to campaign: {}", id);
        Ok(Some(campaign.clone()))
    }

    async fn link_scenario(&self, id: CampaignId, scenario_id: ScenarioId) -> Result<bool> {
        let mut campaigns = self.campaigns.write().await;
        let Some(campaign) = campaigns.get_mut(&id) else {
            return Ok(false);
        };
        campaign.link_scenario(scenario_id);

        tracing::debug!("Linked scenario {} to campaign {}", scenario_id, id);
        Ok(true)
    }

    async fn delete(&self, id: CampaignId) -> Result<bool> {
        let removed = self.campaigns.write().await.remove(&id).is_some();
        if removed {
            tracing::debug!("Deleted campaign: {}", id);
        }
        Ok(removed)
    }
}
