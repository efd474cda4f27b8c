//! In-memory persistence adapters
//!
//! Campaign and scenario stores behind the repository ports. State lives for
//! the lifetime of the process.

mod campaign_repository;
mod scenario_repository;

pub use campaign_repository::InMemoryCampaignRepository;
pub use scenario_repository::InMemoryScenarioRepository;
