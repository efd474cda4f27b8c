//! Scenario history repository implementation held in memory

use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::ports::outbound::ScenarioRepositoryPort;
use crate::domain::entities::ScenarioRecord;
use crate::domain::value_objects::{CampaignId, ScenarioId};

/// Repository for generated scenario records
#[derive(Default)]
pub struct InMemoryScenarioRepository {
    records: RwLock<HashMap<ScenarioId, ScenarioRecord>>,
}

impl InMemoryScenarioRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ScenarioRepositoryPort for InMemoryScenarioRepository {
    async fn save(&self, record: &ScenarioRecord) -> Result<()> {
        self.records.write().await.insert(record.id, record.clone());
        tracing::debug!("Saved scenario: {}", record.id);
        Ok(())
    }

    async fn get(&self, id: ScenarioId) -> Result<Option<ScenarioRecord>> {
        Ok(self.records.read().await.get(&id).cloned())
    }

    async fn list(&self, campaign_id: Option<CampaignId>) -> Result<Vec<ScenarioRecord>> {
        let mut records: Vec<ScenarioRecord> = self
            .records
            .read()
            .await
            .values()
            .filter(|r| campaign_id.is_none() || r.campaign_id == campaign_id)
            .cloned()
            .collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records)
    }

    async fn delete(&self, id: ScenarioId) -> Result<bool> {
        let removed = self.records.write().await.remove(&id).is_some();
        if removed {
            tracing::debug!("Deleted scenario: {}", id);
        }
        Ok(removed)
    }

    async fn detach_campaign(&self, campaign_id: CampaignId) -> Result<usize> {
        let mut records = self.records.write().await;
        let mut detached = 0;
        for record in records.values_mut() {
            if record.campaign_id == Some(campaign_id) {
                record.campaign_id = None;
                detached += 1;
            }
        }

        tracing::debug!("Detached {} scenarios from campaign {}", detached, campaign_id);
        Ok(detached)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ScenarioInput;

    #[tokio::test]
    async fn test_list_is_newest_first() {
        let repo = InMemoryScenarioRepository::new();
        let mut older = ScenarioRecord::new(ScenarioInput::default(), "# Older", false);
        older.created_at -= chrono::Duration::minutes(5);
        let newer = ScenarioRecord::new(ScenarioInput::default(), "# Newer", true);
        repo.save(&older).await.unwrap();
        repo.save(&newer).await.unwrap();

        let narratives: Vec<_> = repo
            .list(None)
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.narrative)
            .collect();
        assert_eq!(narratives, vec!["# Newer", "# Older"]);
    }

    #[tokio::test]
    async fn test_detach_campaign_keeps_records() {
        let repo = InMemoryScenarioRepository::new();
        let campaign_id = CampaignId::new();
        let linked = ScenarioRecord::new(ScenarioInput::default(), "# Linked", false)
            .with_campaign(campaign_id);
        let other = ScenarioRecord::new(ScenarioInput::default(), "# Other", false)
            .with_campaign(CampaignId::new());
        repo.save(&linked).await.unwrap();
        repo.save(&other).await.unwrap();

        assert_eq!(repo.detach_campaign(campaign_id).await.unwrap(), 1);
        assert!(repo.list(Some(campaign_id)).await.unwrap().is_empty());
        assert_eq!(repo.get(linked.id).await.unwrap().unwrap().campaign_id, None);
        assert!(repo.get(other.id).await.unwrap().unwrap().campaign_id.is_some());
    }
}
