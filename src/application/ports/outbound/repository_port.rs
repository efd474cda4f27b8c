//! Repository ports - Interfaces for data persistence
//!
//! These traits define the contracts that infrastructure repositories must implement.
//! Application services depend on these traits, not concrete implementations.
//! The generation pipeline itself never touches a repository; only the
//! campaign and scenario services do.

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::entities::{Campaign, EpisodeMeta, ScenarioRecord};
use crate::domain::value_objects::{CampaignId, ScenarioId};

// =============================================================================
// Campaign Repository Port
// =============================================================================

/// Repository port for Campaign operations
#[async_trait]
pub trait CampaignRepositoryPort: Send + Sync {
    /// Create a new campaign
    async fn create(&self, campaign: &Campaign) -> Result<()>;

    /// Get a campaign by ID
    async fn get(&self, id: CampaignId) -> Result<Option<Campaign>>;

    /// List all campaigns, newest first
    async fn list(&self) -> Result<Vec<Campaign>>;

    /// Append an episode to the stored history in one step. Returns the
    /// updated campaign, or `None` if it does not exist.
    async fn append_episode(&self, id: CampaignId, episode: EpisodeMeta)
        -> Result<Option<Campaign>>;

    /// Link a generated scenario in one step. Returns false if the campaign
    /// does not exist.
    async fn link_scenario(&self, id: CampaignId, scenario_id: ScenarioId) -> Result<bool>;

    /// Delete a campaign. Returns false if it did not exist.
    async fn delete(&self, id: CampaignId) -> Result<bool>;
}

// =============================================================================
// Scenario Repository Port
// =============================================================================

/// Repository port for generated scenario history
#[async_trait]
pub trait ScenarioRepositoryPort: Send + Sync {
    /// Save a scenario record
    async fn save(&self, record: &ScenarioRecord) -> Result<()>;

    /// Get a scenario record by ID
    async fn get(&self, id: ScenarioId) -> Result<Option<ScenarioRecord>>;

    /// List records, newest first, optionally restricted to one campaign
    async fn list(&self, campaign_id: Option<CampaignId>) -> Result<Vec<ScenarioRecord>>;

    /// Delete a record. Returns false if it did not exist.
    async fn delete(&self, id: ScenarioId) -> Result<bool>;

    /// Clear the campaign link on every record of a campaign. Returns how
    /// many records were detached.
    async fn detach_campaign(&self, campaign_id: CampaignId) -> Result<usize>;
}
