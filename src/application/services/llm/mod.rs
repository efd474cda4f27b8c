//! Narrative rewrite helpers - prompt construction and response cleanup

mod markdown;
mod prompt_builder;

pub use markdown::unwrap_markdown;
pub use prompt_builder::{build_system_prompt, build_user_message, team_framing, ScenarioSummary};
