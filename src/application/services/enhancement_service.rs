//! Enhancement Service - optional prose rewrite of a template narrative
//!
//! Sends the template plus context to the LLM port, cleans the reply and
//! applies the acceptance rule. Every failure comes back as an
//! [`EnhancementError`]; the caller decides how to fall back.

use std::time::Duration;

use tracing::{debug, instrument};

use crate::application::ports::outbound::{ChatMessage, LlmError, LlmPort, LlmRequest};
use crate::application::services::continuity::LegacyCampaignContext;
use crate::application::services::generation_service::GenerationSettings;
use crate::application::services::llm::{
    build_system_prompt, build_user_message, unwrap_markdown, ScenarioSummary,
};

/// Share of the template length a rewrite has to exceed to be kept
pub const MIN_ACCEPTED_RATIO: f64 = 0.5;

#[derive(Debug, thiserror::Error)]
pub enum EnhancementError {
    #[error(transparent)]
    Llm(#[from] LlmError),
    #[error("Enhancement timed out after {0:?}")]
    Timeout(Duration),
    #[error("Failed to encode prompt: {0}")]
    Prompt(#[from] serde_json::Error),
}

/// Result of a rewrite that reached the provider and came back
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnhancementOutcome {
    Accepted(String),
    /// The cleaned rewrite was too short to replace the template
    Rejected { length: usize, template_length: usize },
}

pub struct EnhancementService<L: LlmPort> {
    llm: L,
}

impl<L: LlmPort> EnhancementService<L> {
    pub fn new(llm: L) -> Self {
        Self { llm }
    }

    #[instrument(skip_all, fields(model = %settings.model, format = %summary.battle_format))]
    pub async fn enhance(
        &self,
        base_markdown: &str,
        summary: &ScenarioSummary,
        roster_text: Option<&str>,
        campaign_context: Option<&LegacyCampaignContext>,
        settings: &GenerationSettings,
    ) -> Result<EnhancementOutcome, EnhancementError> {
        let user_message =
            build_user_message(base_markdown, summary, roster_text, campaign_context)?;

        let request = LlmRequest::new(vec![
            ChatMessage::system(build_system_prompt(summary.battle_format)),
            ChatMessage::user(user_message),
        ])
        .with_model(settings.model.clone())
        .with_temperature(settings.temperature);

        let response = tokio::time::timeout(settings.timeout, self.llm.generate(request))
            .await
            .map_err(|_| EnhancementError::Timeout(settings.timeout))??;

        let cleaned = unwrap_markdown(&response.content);
        let outcome = judge_rewrite(base_markdown, cleaned);

        if let EnhancementOutcome::Rejected {
            length,
            template_length,
        } = &outcome
        {
            debug!(length, template_length, "Rewrite rejected as too short");
        }

        Ok(outcome)
    }
}

/// Keep the rewrite only if its trimmed length exceeds half the template
pub fn judge_rewrite(base_markdown: &str, rewrite: String) -> EnhancementOutcome {
    let template_length = base_markdown.chars().count();
    let length = rewrite.trim().chars().count();

    if length as f64 > template_length as f64 * MIN_ACCEPTED_RATIO {
        EnhancementOutcome::Accepted(rewrite.trim().to_string())
    } else {
        EnhancementOutcome::Rejected {
            length,
            template_length,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::outbound::{LlmResponse, MessageRole, MockLlmPort};
    use crate::domain::value_objects::BattleFormat;

    fn settings() -> GenerationSettings {
        GenerationSettings {
            ai_enabled: true,
            api_key: Some("sk-test".to_string()),
            model: "gpt-4o-mini".to_string(),
            temperature: 0.7,
            timeout: Duration::from_secs(15),
        }
    }

    fn summary() -> ScenarioSummary {
        ScenarioSummary {
            campaign_name: "Ash Road".to_string(),
            battle_format: BattleFormat::FourPairs,
            planet: String::new(),
            tone: String::new(),
            stakes: String::new(),
            players_count: None,
        }
    }

    fn reply(content: &str) -> LlmResponse {
        LlmResponse {
            content: content.to_string(),
        }
    }

    #[test]
    fn test_acceptance_threshold() {
        let base = "x".repeat(100);
        assert_eq!(
            judge_rewrite(&base, "y".repeat(50)),
            EnhancementOutcome::Rejected {
                length: 50,
                template_length: 100
            }
        );
        assert_eq!(
            judge_rewrite(&base, format!("  {}  ", "y".repeat(51))),
            EnhancementOutcome::Accepted("y".repeat(51))
        );
    }

    #[tokio::test]
    async fn test_request_carries_prompt_and_settings() {
        let mut llm = MockLlmPort::new();
        llm.expect_generate()
            .withf(|request| {
                request.model.as_deref() == Some("gpt-4o-mini")
                    && request.temperature == Some(0.7)
                    && request.messages.len() == 2
                    && request.messages[0].role == MessageRole::System
                    && request.messages[0].content.contains("four allied pairs")
                    && request.messages[1].role == MessageRole::User
                    && request.messages[1].content.ends_with("```md\n# Base doc\n```")
            })
            .times(1)
            .returning(|_| Ok(reply("```md\n# Rewritten base doc\n```")));

        let service = EnhancementService::new(llm);
        let outcome = service
            .enhance("# Base doc", &summary(), None, None, &settings())
            .await
            .unwrap();

        assert_eq!(
            outcome,
            EnhancementOutcome::Accepted("# Rewritten base doc".to_string())
        );
    }

    #[tokio::test]
    async fn test_provider_error_is_returned() {
        let mut llm = MockLlmPort::new();
        llm.expect_generate().returning(|_| {
            Err(LlmError::Http {
                status: 500,
                body: "boom".to_string(),
            })
        });

        let service = EnhancementService::new(llm);
        let err = service
            .enhance("# Base", &summary(), None, None, &settings())
            .await
            .unwrap_err();

        assert!(matches!(err, EnhancementError::Llm(LlmError::Http { status: 500, .. })));
        assert_eq!(err.to_string(), "LLM HTTP 500: boom");
    }
}
