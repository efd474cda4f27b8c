//! Domain entities - Core business objects with identity

mod campaign;
mod scenario;

pub use campaign::{Campaign, CampaignContext, EpisodeMeta};
pub use scenario::{ScenarioInput, ScenarioRecord, Warhost, WarhostPlayer};
