//! Shared application state

use std::sync::Arc;

use crate::application::ports::outbound::{CampaignRepositoryPort, ScenarioRepositoryPort};
use crate::application::services::{CampaignServiceImpl, GenerationService, ScenarioServiceImpl};
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::openai::OpenAiClient;
use crate::infrastructure::persistence::{InMemoryCampaignRepository, InMemoryScenarioRepository};

/// Shared application state
pub struct AppState {
    pub config: AppConfig,
    // Application services
    pub generation_service: Arc<GenerationService<OpenAiClient>>,
    pub campaign_service: CampaignServiceImpl<OpenAiClient>,
    pub scenario_service: ScenarioServiceImpl,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        // Initialize OpenAI client
        let llm_client = OpenAiClient::from_config(&config);

        // Initialize in-memory stores
        let campaigns: Arc<dyn CampaignRepositoryPort> = Arc::new(InMemoryCampaignRepository::new());
        let scenarios: Arc<dyn ScenarioRepositoryPort> = Arc::new(InMemoryScenarioRepository::new());

        // Initialize application services
        let generation_service = Arc::new(GenerationService::new(llm_client));
        let campaign_service =
            CampaignServiceImpl::new(campaigns, scenarios.clone(), generation_service.clone());
        let scenario_service = ScenarioServiceImpl::new(scenarios);

        Self {
            config,
            generation_service,
            campaign_service,
            scenario_service,
        }
    }
}
