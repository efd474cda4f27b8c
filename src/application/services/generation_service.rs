//! Generation Service - the single entry point for narrative generation
//!
//! Linear flow with no retries:
//! 1. Build the roster block from the Warhosts
//! 2. Build the template narrative
//! 3. Template only when enhancement is switched off or has no credential
//! 4. Otherwise try the rewrite and fall back to the template on any failure
//!
//! The caller always gets a usable narrative back.

use std::time::Duration;

use tracing::{debug, info, instrument, warn};

use crate::application::ports::outbound::LlmPort;
use crate::application::services::continuity::LegacyCampaignContext;
use crate::application::services::enhancement_service::{
    EnhancementOutcome, EnhancementService,
};
use crate::application::services::llm::ScenarioSummary;
use crate::application::services::narrative_builder::build_narrative;
use crate::application::services::roster::build_roster_block;
use crate::domain::entities::ScenarioInput;
use crate::domain::value_objects::truncate_chars;

/// Longest diagnostic kept from a failed rewrite
pub const AI_ERROR_MAX_CHARS: usize = 240;

/// Explicit configuration for one generation call
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSettings {
    pub ai_enabled: bool,
    /// Provider credential; `None` forces the template path
    pub api_key: Option<String>,
    pub model: String,
    pub temperature: f32,
    pub timeout: Duration,
}

impl GenerationSettings {
    /// Enhancement runs only when switched on and a non-empty credential exists
    pub fn enhancement_available(&self) -> bool {
        self.ai_enabled
            && self
                .api_key
                .as_deref()
                .is_some_and(|key| !key.trim().is_empty())
    }
}

/// What a generation call hands back to its caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    pub narrative: String,
    /// True only when the returned text is the accepted rewrite
    pub ai_used: bool,
    /// Short diagnostic when a rewrite was attempted and failed
    pub ai_error: Option<String>,
}

impl GenerationResult {
    fn template(narrative: String) -> Self {
        Self {
            narrative,
            ai_used: false,
            ai_error: None,
        }
    }
}

pub struct GenerationService<L: LlmPort> {
    enhancement: EnhancementService<L>,
}

impl<L: LlmPort> GenerationService<L> {
    pub fn new(llm: L) -> Self {
        Self {
            enhancement: EnhancementService::new(llm),
        }
    }

    #[instrument(skip_all, fields(format = %input.battle_format, warhosts = input.warhosts.len()))]
    pub async fn generate(
        &self,
        input: &ScenarioInput,
        settings: &GenerationSettings,
        campaign_context: Option<&LegacyCampaignContext>,
    ) -> GenerationResult {
        let roster_block = build_roster_block(&input.warhosts);
        let base = build_narrative(input);
        let fallback = template_with_roster(&base, &roster_block);

        if !settings.enhancement_available() {
            debug!("Enhancement unavailable, returning template narrative");
            return GenerationResult::template(fallback);
        }

        let summary = ScenarioSummary::from_input(input);
        let roster_text = (!roster_block.is_empty()).then_some(roster_block.as_str());

        match self
            .enhancement
            .enhance(&base, &summary, roster_text, campaign_context, settings)
            .await
        {
            Ok(EnhancementOutcome::Accepted(narrative)) => {
                info!(chars = narrative.chars().count(), "Narrative enhanced");
                GenerationResult {
                    narrative,
                    ai_used: true,
                    ai_error: None,
                }
            }
            Ok(EnhancementOutcome::Rejected { .. }) => GenerationResult::template(fallback),
            Err(e) => {
                let diagnostic = truncate_chars(&e.to_string(), AI_ERROR_MAX_CHARS);
                warn!(error = %diagnostic, "Enhancement failed, using template narrative");
                GenerationResult {
                    narrative: fallback,
                    ai_used: false,
                    ai_error: Some(diagnostic),
                }
            }
        }
    }
}

/// Template output with the roster appended for visibility
fn template_with_roster(base: &str, roster_block: &str) -> String {
    if roster_block.is_empty() {
        base.to_string()
    } else {
        format!("{}\n\n---\n{}", base, roster_block)
    }
}
