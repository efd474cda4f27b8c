//! Scenario Service - history of generated scenarios

use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use tracing::{debug, info, instrument};

use crate::application::ports::outbound::ScenarioRepositoryPort;
use crate::domain::entities::{ScenarioInput, ScenarioRecord};
use crate::domain::value_objects::{CampaignId, ScenarioId};

#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error("Scenario narrative cannot be empty")]
    EmptyNarrative,
    #[error(transparent)]
    Repository(#[from] anyhow::Error),
}

/// Request to keep a generated scenario
#[derive(Debug, Clone, Default)]
pub struct SaveScenarioRequest {
    pub input: ScenarioInput,
    pub narrative: String,
    pub ai_used: bool,
    pub campaign_id: Option<CampaignId>,
}

#[async_trait]
pub trait ScenarioService: Send + Sync {
    async fn save_scenario(&self, request: SaveScenarioRequest)
        -> Result<ScenarioRecord, ScenarioError>;

    async fn get_scenario(&self, id: ScenarioId) -> Result<Option<ScenarioRecord>, ScenarioError>;

    /// List records, newest first
    async fn list_scenarios(
        &self,
        campaign_id: Option<CampaignId>,
    ) -> Result<Vec<ScenarioRecord>, ScenarioError>;

    /// Returns false if the record did not exist
    async fn delete_scenario(&self, id: ScenarioId) -> Result<bool, ScenarioError>;
}

pub struct ScenarioServiceImpl {
    repository: Arc<dyn ScenarioRepositoryPort>,
}

impl ScenarioServiceImpl {
    pub fn new(repository: Arc<dyn ScenarioRepositoryPort>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl ScenarioService for ScenarioServiceImpl {
    #[instrument(skip(self, request), fields(ai_used = request.ai_used))]
    async fn save_scenario(
        &self,
        request: SaveScenarioRequest,
    ) -> Result<ScenarioRecord, ScenarioError> {
        if request.narrative.trim().is_empty() {
            return Err(ScenarioError::EmptyNarrative);
        }

        let mut record = ScenarioRecord::new(request.input, request.narrative, request.ai_used);
        if let Some(campaign_id) = request.campaign_id {
            record = record.with_campaign(campaign_id);
        }

        self.repository
            .save(&record)
            .await
            .context("Failed to save scenario record")?;

        info!(scenario_id = %record.id, "Saved scenario");
        Ok(record)
    }

    #[instrument(skip(self))]
    async fn get_scenario(&self, id: ScenarioId) -> Result<Option<ScenarioRecord>, ScenarioError> {
        debug!(scenario_id = %id, "Fetching scenario");
        Ok(self
            .repository
            .get(id)
            .await
            .context("Failed to get scenario from repository")?)
    }

    #[instrument(skip(self))]
    async fn list_scenarios(
        &self,
        campaign_id: Option<CampaignId>,
    ) -> Result<Vec<ScenarioRecord>, ScenarioError> {
        debug!("Listing scenarios");
        Ok(self
            .repository
            .list(campaign_id)
            .await
            .context("Failed to list scenarios from repository")?)
    }

    #[instrument(skip(self), fields(scenario_id = %id))]
    async fn delete_scenario(&self, id: ScenarioId) -> Result<bool, ScenarioError> {
        let deleted = self
            .repository
            .delete(id)
            .await
            .context("Failed to delete scenario from repository")?;
        if deleted {
            info!(scenario_id = %id, "Deleted scenario");
        }
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::InMemoryScenarioRepository;

    fn service() -> ScenarioServiceImpl {
        ScenarioServiceImpl::new(Arc::new(InMemoryScenarioRepository::new()))
    }

    fn request(narrative: &str) -> SaveScenarioRequest {
        SaveScenarioRequest {
            narrative: narrative.to_string(),
            ..Default::default()
        }
    }

    struct UnavailableRepository;

    #[async_trait]
    impl ScenarioRepositoryPort for UnavailableRepository {
        async fn save(&self, _record: &ScenarioRecord) -> anyhow::Result<()> {
            anyhow::bail!("store offline")
        }

        async fn get(&self, _id: ScenarioId) -> anyhow::Result<Option<ScenarioRecord>> {
            anyhow::bail!("store offline")
        }

        async fn list(&self, _campaign_id: Option<CampaignId>) -> anyhow::Result<Vec<ScenarioRecord>> {
            anyhow::bail!("store offline")
        }

        async fn delete(&self, _id: ScenarioId) -> anyhow::Result<bool> {
            anyhow::bail!("store offline")
        }

        async fn detach_campaign(&self, _campaign_id: CampaignId) -> anyhow::Result<usize> {
            anyhow::bail!("store offline")
        }
    }

    #[tokio::test]
    async fn test_save_requires_narrative() {
        assert!(matches!(
            service().save_scenario(request("   ")).await,
            Err(ScenarioError::EmptyNarrative)
        ));
    }

    #[tokio::test]
    async fn test_storage_failure_is_not_a_validation_error() {
        let service = ScenarioServiceImpl::new(Arc::new(UnavailableRepository));
        let err = service.save_scenario(request("# Doc")).await.unwrap_err();

        assert!(matches!(err, ScenarioError::Repository(_)));
        assert_eq!(err.to_string(), "Failed to save scenario record");
    }

    #[tokio::test]
    async fn test_save_get_delete() {
        let service = service();
        let record = service.save_scenario(request("# Doc")).await.unwrap();

        let fetched = service.get_scenario(record.id).await.unwrap().unwrap();
        assert_eq!(fetched.narrative, "# Doc");

        assert!(service.delete_scenario(record.id).await.unwrap());
        assert!(!service.delete_scenario(record.id).await.unwrap());
        assert!(service.get_scenario(record.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_filters_by_campaign() {
        let service = service();
        let campaign_id = CampaignId::new();
        service.save_scenario(request("# One")).await.unwrap();
        service
            .save_scenario(SaveScenarioRequest {
                campaign_id: Some(campaign_id),
                ..request("# Two")
            })
            .await
            .unwrap();

        assert_eq!(service.list_scenarios(None).await.unwrap().len(), 2);
        let linked = service.list_scenarios(Some(campaign_id)).await.unwrap();
        assert_eq!(linked.len(), 1);
        assert_eq!(linked[0].narrative, "# Two");
    }
}
