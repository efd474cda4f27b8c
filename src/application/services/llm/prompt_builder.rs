//! Prompt building for the narrative rewrite request

use serde::Serialize;

use crate::application::services::continuity::LegacyCampaignContext;
use crate::domain::entities::ScenarioInput;
use crate::domain::value_objects::{board_label, BattleFormat, RP_RULES};

/// The scenario fields echoed to the model as minimal JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioSummary {
    pub campaign_name: String,
    pub battle_format: BattleFormat,
    pub planet: String,
    pub tone: String,
    pub stakes: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub players_count: Option<u32>,
}

impl ScenarioSummary {
    pub fn from_input(input: &ScenarioInput) -> Self {
        Self {
            campaign_name: input.campaign_name.clone().unwrap_or_default(),
            battle_format: input.battle_format,
            planet: input.planet.clone().unwrap_or_default(),
            tone: input.tone.clone().unwrap_or_default(),
            stakes: input.stakes.clone().unwrap_or_default(),
            players_count: input.effective_players_count(),
        }
    }
}

/// How the Warhosts relate to each other for a given format
pub fn team_framing(format: BattleFormat) -> &'static str {
    match format {
        BattleFormat::OneVsOne
        | BattleFormat::TwoVsTwo
        | BattleFormat::ThreeVsThree
        | BattleFormat::FourVsFour => {
            "Frame the battle as two opposing sides: the first Warhost against the second, \
             allies within a side sharing one cause."
        }
        BattleFormat::FreeForAll => {
            "Frame the battle as four independent rivals: every Warhost fights for itself \
             and no alliance holds past the opening turn."
        }
        BattleFormat::FourPairs => {
            "Frame the battle as four allied pairs: each pair shares a cause, and every pair \
             is hostile to the other three."
        }
    }
}

/// Build the system instruction for the rewrite
pub fn build_system_prompt(format: BattleFormat) -> String {
    [
        "You are WH40K Narrative Campaign Engine.".to_string(),
        "Enhance the provided Markdown scenario for Warhammer 40,000 with vivid grimdark style,"
            .to_string(),
        "while preserving the section order and tabletop rules semantics.".to_string(),
        format!("Keep all distances in inches on a {} board.", board_label()),
        format!(
            "Each faction must keep exactly one narrative objective with the same mechanics and reward (+{} RP).",
            RP_RULES.earn.narrative_objective
        ),
        "Keep risk scores and tables; you may clarify wording.".to_string(),
        "Use EVERY team/faction listed in the Warhost roster. Write distinct per-faction intros in appropriate voices."
            .to_string(),
        team_framing(format).to_string(),
        "If a Campaign Context is provided, maintain continuity: reference prior outcomes, relics, location damage, and absent characters where appropriate."
            .to_string(),
        "Output ONLY raw Markdown — do not wrap your answer in code fences.".to_string(),
    ]
    .join(" ")
}

/// Build the user message carrying the scenario, roster, context and base document
pub fn build_user_message(
    base_markdown: &str,
    summary: &ScenarioSummary,
    roster_text: Option<&str>,
    campaign_context: Option<&LegacyCampaignContext>,
) -> Result<String, serde_json::Error> {
    let mut parts = vec![
        "Input (JSON, minimal):".to_string(),
        "```json".to_string(),
        serde_json::to_string_pretty(summary)?,
        "```".to_string(),
    ];

    if let Some(roster) = roster_text.filter(|r| !r.trim().is_empty()) {
        parts.push(format!("\nWarhosts Roster (use ALL below):\n{}", roster));
    }

    if let Some(context) = campaign_context {
        parts.push(format!(
            "Campaign Context:\n{}",
            serde_json::to_string_pretty(context)?
        ));
    }

    parts.push(
        "Base Markdown to enhance (preserve structure & rules exactly; improve prose only):"
            .to_string(),
    );
    parts.push("```md".to_string());
    parts.push(base_markdown.to_string());
    parts.push("```".to_string());

    Ok(parts.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::CampaignMode;

    fn summary() -> ScenarioSummary {
        ScenarioSummary {
            campaign_name: "Ash Road".to_string(),
            battle_format: BattleFormat::TwoVsTwo,
            planet: "Armageddon".to_string(),
            tone: "Grimdark".to_string(),
            stakes: "Hold".to_string(),
            players_count: Some(4),
        }
    }

    #[test]
    fn test_framing_is_selected_by_format() {
        assert!(team_framing(BattleFormat::ThreeVsThree).contains("two opposing sides"));
        assert!(team_framing(BattleFormat::FreeForAll).contains("four independent rivals"));
        assert!(team_framing(BattleFormat::FourPairs).contains("four allied pairs"));
    }

    #[test]
    fn test_system_prompt_rules() {
        let prompt = build_system_prompt(BattleFormat::FreeForAll);
        assert!(prompt.starts_with("You are WH40K Narrative Campaign Engine."));
        assert!(prompt.contains("40\"x60\" board"));
        assert!(prompt.contains("(+3 RP)"));
        assert!(prompt.contains("four independent rivals"));
        assert!(prompt.contains("do not wrap your answer in code fences"));
    }

    #[test]
    fn test_user_message_layout() {
        let context = LegacyCampaignContext {
            mode: CampaignMode::Planetary,
            primary_planet: Some("Armageddon".to_string()),
            battle_index: 1,
            last_outcomes: Vec::new(),
        };
        let message =
            build_user_message("# Base", &summary(), Some("- A: Orks"), Some(&context)).unwrap();

        assert!(message.starts_with("Input (JSON, minimal):\n```json\n{\n"));
        assert!(message.contains("\"battleFormat\": \"2v2\""));
        assert!(message.contains("\"playersCount\": 4"));
        assert!(message.contains("\nWarhosts Roster (use ALL below):\n- A: Orks"));
        assert!(message.contains("Campaign Context:\n{"));
        assert!(message.contains("\"primaryPlanet\": \"Armageddon\""));
        assert!(message.ends_with(
            "Base Markdown to enhance (preserve structure & rules exactly; improve prose only):\n```md\n# Base\n```"
        ));
    }

    #[test]
    fn test_user_message_without_extras() {
        let message = build_user_message("# Base", &summary(), None, None).unwrap();
        assert!(!message.contains("Warhosts Roster"));
        assert!(!message.contains("Campaign Context"));
    }
}
