//! Application services - Use case implementations
//!
//! The generation pipeline (roster, template, continuity, enhancement) is pure
//! or port-driven and never touches storage. Campaign and scenario services
//! wrap the repository ports.

pub mod campaign_service;
pub mod continuity;
pub mod enhancement_service;
pub mod generation_service;
pub mod llm;
pub mod narrative_builder;
pub mod roster;
pub mod scenario_service;

// Re-export campaign service types
pub use campaign_service::{
    CampaignError, CampaignService, CampaignServiceImpl, CreateCampaignRequest, GeneratedEpisode,
    NextEpisodeRequest,
};

// Re-export generation pipeline types
pub use continuity::{prepare_episode, LegacyCampaignContext};
pub use generation_service::{GenerationResult, GenerationService, GenerationSettings};

// Re-export scenario service types
pub use scenario_service::{
    SaveScenarioRequest, ScenarioError, ScenarioService, ScenarioServiceImpl,
};
