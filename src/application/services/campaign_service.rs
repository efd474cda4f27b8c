//! Campaign Service - stored campaigns and their episode history
//!
//! Campaigns are the only place continuity comes from. Generating the next
//! episode rebuilds the campaign context from the stored record, runs the
//! generation pipeline, saves the scenario and links it back.

use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use tracing::{debug, info, instrument};

use crate::application::ports::outbound::{
    CampaignRepositoryPort, LlmPort, ScenarioRepositoryPort,
};
use crate::application::services::continuity::{non_blank, prepare_episode};
use crate::application::services::generation_service::{
    GenerationResult, GenerationService, GenerationSettings,
};
use crate::domain::entities::{Campaign, EpisodeMeta, ScenarioInput, ScenarioRecord};
use crate::domain::value_objects::{CampaignId, CampaignMode, TextField};

#[derive(Debug, thiserror::Error)]
pub enum CampaignError {
    #[error("Campaign not found: {0}")]
    NotFound(CampaignId),
    #[error(transparent)]
    Repository(#[from] anyhow::Error),
}

/// Request to create a new campaign
#[derive(Debug, Clone, Default)]
pub struct CreateCampaignRequest {
    pub name: String,
    pub tone: Option<String>,
    pub mode: CampaignMode,
    /// Fixed world; only meaningful for planetary campaigns
    pub planet_name: Option<String>,
}

/// Request to generate the next battle of a stored campaign
#[derive(Debug, Clone, Default)]
pub struct NextEpisodeRequest {
    pub input: ScenarioInput,
    pub requested_planet: Option<String>,
}

/// A generated episode and the history record saved for it
#[derive(Debug, Clone)]
pub struct GeneratedEpisode {
    pub record: ScenarioRecord,
    pub result: GenerationResult,
}

#[async_trait]
pub trait CampaignService: Send + Sync {
    async fn create_campaign(&self, request: CreateCampaignRequest) -> Result<Campaign, CampaignError>;

    async fn get_campaign(&self, id: CampaignId) -> Result<Campaign, CampaignError>;

    /// List all campaigns, newest first
    async fn list_campaigns(&self) -> Result<Vec<Campaign>, CampaignError>;

    async fn delete_campaign(&self, id: CampaignId) -> Result<(), CampaignError>;

    /// Append a finished battle to the campaign history
    async fn record_outcome(
        &self,
        id: CampaignId,
        episode: EpisodeMeta,
    ) -> Result<Campaign, CampaignError>;

    async fn generate_episode(
        &self,
        id: CampaignId,
        request: NextEpisodeRequest,
        settings: &GenerationSettings,
    ) -> Result<GeneratedEpisode, CampaignError>;
}

pub struct CampaignServiceImpl<L: LlmPort> {
    campaigns: Arc<dyn CampaignRepositoryPort>,
    scenarios: Arc<dyn ScenarioRepositoryPort>,
    generation: Arc<GenerationService<L>>,
}

impl<L: LlmPort> CampaignServiceImpl<L> {
    pub fn new(
        campaigns: Arc<dyn CampaignRepositoryPort>,
        scenarios: Arc<dyn ScenarioRepositoryPort>,
        generation: Arc<GenerationService<L>>,
    ) -> Self {
        Self {
            campaigns,
            scenarios,
            generation,
        }
    }

    async fn load(&self, id: CampaignId) -> Result<Campaign, CampaignError> {
        self.campaigns
            .get(id)
            .await
            .context("Failed to get campaign from repository")?
            .ok_or(CampaignError::NotFound(id))
    }
}

#[async_trait]
impl<L: LlmPort> CampaignService for CampaignServiceImpl<L> {
    #[instrument(skip(self), fields(name = %request.name, mode = %request.mode))]
    async fn create_campaign(&self, request: CreateCampaignRequest) -> Result<Campaign, CampaignError> {
        let name = TextField::CampaignName.clamp_or_default(Some(&request.name));
        let mut campaign = Campaign::new(name, request.mode);

        if let Some(tone) = non_blank(request.tone.as_deref()) {
            campaign = campaign.with_tone(tone);
        }
        if let Some(planet) = non_blank(request.planet_name.as_deref()) {
            campaign = campaign.with_planet(planet);
        }

        self.campaigns
            .create(&campaign)
            .await
            .context("Failed to create campaign in repository")?;

        info!(campaign_id = %campaign.id, "Created campaign: {}", campaign.name);
        Ok(campaign)
    }

    #[instrument(skip(self))]
    async fn get_campaign(&self, id: CampaignId) -> Result<Campaign, CampaignError> {
        debug!(campaign_id = %id, "Fetching campaign");
        self.load(id).await
    }

    #[instrument(skip(self))]
    async fn list_campaigns(&self) -> Result<Vec<Campaign>, CampaignError> {
        debug!("Listing all campaigns");
        Ok(self
            .campaigns
            .list()
            .await
            .context("Failed to list campaigns from repository")?)
    }

    #[instrument(skip(self), fields(campaign_id = %id))]
    async fn delete_campaign(&self, id: CampaignId) -> Result<(), CampaignError> {
        let deleted = self
            .campaigns
            .delete(id)
            .await
            .context("Failed to delete campaign from repository")?;
        if !deleted {
            return Err(CampaignError::NotFound(id));
        }

        let detached = self
            .scenarios
            .detach_campaign(id)
            .await
            .context("Failed to detach scenarios from deleted campaign")?;

        info!(campaign_id = %id, detached, "Deleted campaign");
        Ok(())
    }

    #[instrument(skip(self, episode), fields(campaign_id = %id))]
    async fn record_outcome(
        &self,
        id: CampaignId,
        episode: EpisodeMeta,
    ) -> Result<Campaign, CampaignError> {
        let campaign = self
            .campaigns
            .append_episode(id, episode)
            .await
            .context("Failed to append campaign episode")?
            .ok_or(CampaignError::NotFound(id))?;

        info!(
            campaign_id = %id,
            episodes = campaign.episodes().len(),
            "Recorded campaign outcome"
        );
        Ok(campaign)
    }

    #[instrument(skip(self, request, settings), fields(campaign_id = %id))]
    async fn generate_episode(
        &self,
        id: CampaignId,
        request: NextEpisodeRequest,
        settings: &GenerationSettings,
    ) -> Result<GeneratedEpisode, CampaignError> {
        let campaign = self.load(id).await?;

        let (input, legacy_context) = prepare_episode(
            &campaign.context(),
            request.input,
            request.requested_planet.as_deref(),
        );
        let result = self
            .generation
            .generate(&input, settings, Some(&legacy_context))
            .await;

        let record =
            ScenarioRecord::new(input, result.narrative.clone(), result.ai_used).with_campaign(id);
        self.scenarios
            .save(&record)
            .await
            .context("Failed to save scenario record")?;

        // The loaded snapshot may be stale by now, so only the link is written
        let linked = self
            .campaigns
            .link_scenario(id, record.id)
            .await
            .context("Failed to link scenario to campaign")?;
        if !linked {
            self.scenarios
                .detach_campaign(id)
                .await
                .context("Failed to detach scenarios from deleted campaign")?;
            return Err(CampaignError::NotFound(id));
        }

        info!(
            campaign_id = %id,
            scenario_id = %record.id,
            ai_used = result.ai_used,
            "Generated campaign episode"
        );
        Ok(GeneratedEpisode { record, result })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::application::ports::outbound::{
        LlmError, LlmRequest, LlmResponse, MockLlmPort,
    };
    use crate::infrastructure::persistence::{
        InMemoryCampaignRepository, InMemoryScenarioRepository,
    };

    fn service() -> (
        CampaignServiceImpl<MockLlmPort>,
        Arc<InMemoryScenarioRepository>,
    ) {
        let mut llm = MockLlmPort::new();
        llm.expect_generate().never();
        let scenarios = Arc::new(InMemoryScenarioRepository::new());
        let service = CampaignServiceImpl::new(
            Arc::new(InMemoryCampaignRepository::new()),
            scenarios.clone(),
            Arc::new(GenerationService::new(llm)),
        );
        (service, scenarios)
    }

    fn template_only() -> GenerationSettings {
        GenerationSettings {
            ai_enabled: false,
            api_key: None,
            model: "gpt-4o-mini".to_string(),
            temperature: 0.7,
            timeout: Duration::from_secs(15),
        }
    }

    fn planetary_request() -> CreateCampaignRequest {
        CreateCampaignRequest {
            name: "  Ash Road  ".to_string(),
            tone: Some("Grimdark".to_string()),
            mode: CampaignMode::Planetary,
            planet_name: Some("Armageddon".to_string()),
        }
    }

    #[tokio::test]
    async fn test_create_and_get_campaign() {
        let (service, _) = service();
        let created = service.create_campaign(planetary_request()).await.unwrap();

        assert_eq!(created.name, "Ash Road");
        assert_eq!(created.planet_name.as_deref(), Some("Armageddon"));

        let fetched = service.get_campaign(created.id).await.unwrap();
        assert_eq!(fetched.id, created.id);
        assert_eq!(service.list_campaigns().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_missing_campaign_is_not_found() {
        let (service, _) = service();
        let id = CampaignId::new();

        assert!(matches!(
            service.get_campaign(id).await,
            Err(CampaignError::NotFound(missing)) if missing == id
        ));
        assert!(matches!(
            service.delete_campaign(id).await,
            Err(CampaignError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_outcomes_are_appended_in_order() {
        let (service, _) = service();
        let campaign = service.create_campaign(planetary_request()).await.unwrap();

        for summary in ["Orks repelled", "Fortress held"] {
            let episode = EpisodeMeta {
                scenario_id: "s".to_string(),
                planet_name: Some("Armageddon".to_string()),
                outcome_summary: Some(summary.to_string()),
                ..Default::default()
            };
            service.record_outcome(campaign.id, episode).await.unwrap();
        }

        let stored = service.get_campaign(campaign.id).await.unwrap();
        let summaries: Vec<_> = stored
            .episodes()
            .iter()
            .filter_map(|e| e.outcome_summary.as_deref())
            .collect();
        assert_eq!(summaries, vec!["Orks repelled", "Fortress held"]);
    }

    #[tokio::test]
    async fn test_generate_episode_saves_and_links_scenario() {
        let (service, scenarios) = service();
        let campaign = service.create_campaign(planetary_request()).await.unwrap();
        service
            .record_outcome(
                campaign.id,
                EpisodeMeta {
                    planet_name: Some("Armageddon".to_string()),
                    outcome_summary: Some("Orks repelled".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let episode = service
            .generate_episode(campaign.id, NextEpisodeRequest::default(), &template_only())
            .await
            .unwrap();

        assert!(!episode.result.ai_used);
        assert!(episode
            .result
            .narrative
            .starts_with("# Ash Road — Armageddon\n"));
        assert!(episode
            .result
            .narrative
            .contains("Prior=Armageddon: Orks repelled"));
        assert_eq!(episode.record.campaign_id, Some(campaign.id));

        let stored = service.get_campaign(campaign.id).await.unwrap();
        assert_eq!(stored.scenario_ids, vec![episode.record.id]);
        assert_eq!(scenarios.list(Some(campaign.id)).await.unwrap().len(), 1);
    }

    struct SlowLlm;

    #[async_trait]
    impl LlmPort for SlowLlm {
        async fn generate(&self, _request: LlmRequest) -> Result<LlmResponse, LlmError> {
            tokio::time::sleep(Duration::from_millis(300)).await;
            Ok(LlmResponse {
                content: "# Short".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_outcome_recorded_during_generation_is_kept() {
        let service = Arc::new(CampaignServiceImpl::new(
            Arc::new(InMemoryCampaignRepository::new()),
            Arc::new(InMemoryScenarioRepository::new()),
            Arc::new(GenerationService::new(SlowLlm)),
        ));
        let campaign = service.create_campaign(planetary_request()).await.unwrap();
        let settings = GenerationSettings {
            ai_enabled: true,
            api_key: Some("sk-test".to_string()),
            timeout: Duration::from_secs(5),
            ..template_only()
        };

        let generating = {
            let service = service.clone();
            tokio::spawn(async move {
                service
                    .generate_episode(campaign.id, NextEpisodeRequest::default(), &settings)
                    .await
            })
        };
        tokio::time::sleep(Duration::from_millis(50)).await;
        service
            .record_outcome(
                campaign.id,
                EpisodeMeta {
                    outcome_summary: Some("Orks repelled".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let episode = generating.await.unwrap().unwrap();

        let stored = service.get_campaign(campaign.id).await.unwrap();
        assert_eq!(stored.episodes().len(), 1);
        assert_eq!(
            stored.episodes()[0].outcome_summary.as_deref(),
            Some("Orks repelled")
        );
        assert_eq!(stored.scenario_ids, vec![episode.record.id]);
    }

    #[tokio::test]
    async fn test_delete_detaches_saved_scenarios() {
        let (service, scenarios) = service();
        let campaign = service.create_campaign(planetary_request()).await.unwrap();
        let episode = service
            .generate_episode(campaign.id, NextEpisodeRequest::default(), &template_only())
            .await
            .unwrap();

        service.delete_campaign(campaign.id).await.unwrap();

        let record = scenarios.get(episode.record.id).await.unwrap().unwrap();
        assert_eq!(record.campaign_id, None);
        assert!(scenarios.list(Some(campaign.id)).await.unwrap().is_empty());
    }
}
