//! Narrative template builder
//!
//! Turns a [`ScenarioInput`] into a complete Markdown scenario. The builder is
//! pure: no I/O, no clock, no randomness, so identical input always yields
//! byte-identical output. Every free-text field is trimmed, clamped and
//! defaulted here, which makes the function total over its input.
//!
//! Section order is fixed and must never change; the rewrite step relies on
//! it and consumers parse the headings.

use crate::domain::entities::ScenarioInput;
use crate::domain::value_objects::{
    board_label, TextField, OBJECTIVE_RADIUS_INCHES, RP_RULES,
};

/// Heading prefixes of the document sections, in order
pub const SECTION_HEADINGS: [&str; 6] = [
    "# ",
    "## Opening Brief",
    "## Faction Briefings",
    "## Narrative Objectives",
    "## Post-Battle Summary",
    "## Next Hook",
];

/// Clamped and defaulted fields, ready for interpolation
struct Fields {
    campaign_name: String,
    battle_format: String,
    player_faction: String,
    other_factions: String,
    planet: String,
    tone: String,
    stakes: String,
}

impl Fields {
    fn from_input(input: &ScenarioInput) -> Self {
        Self {
            campaign_name: TextField::CampaignName
                .clamp_or_default(input.campaign_name.as_deref()),
            battle_format: input.battle_format.as_str().to_uppercase(),
            player_faction: TextField::PlayerFaction
                .clamp_or_default(input.primary_faction_label().as_deref()),
            other_factions: TextField::OtherFactions
                .clamp_or_default(input.opposition_label().as_deref()),
            planet: TextField::Planet.clamp_or_default(input.planet.as_deref()),
            tone: TextField::Tone.clamp_or_default(input.tone.as_deref()),
            stakes: TextField::Stakes.clamp_or_default(input.stakes.as_deref()),
        }
    }
}

/// Build the Markdown scenario in the fixed section order
pub fn build_narrative(input: &ScenarioInput) -> String {
    let fields = Fields::from_input(input);

    [
        title_section(&fields),
        opening_brief(&fields),
        faction_briefings(&fields),
        narrative_objectives(&fields),
        post_battle_summary(),
        next_hook(),
    ]
    .join("\n\n")
}

fn title_section(f: &Fields) -> String {
    format!(
        "# {} — {}\n**Format:** {} • **Tone:** {} • **Stake:** {}\n\n---",
        f.campaign_name, f.planet, f.battle_format, f.tone, f.stakes
    )
}

fn opening_brief(f: &Fields) -> String {
    format!(
        "## Opening Brief\n\
         The guns speak first. **{faction}** descend upon **{planet}** to prosecute a limited \
         operation against **{others}**. Command expectations: *short, brutal exchanges*, a \
         mobile center, and flanks trading bodies for inches. The stake, **{stakes}**, will \
         decide who dictates the next move.\n\
         \n\
         > *Operational Notes:* Expect counter-actions on mid-board terrain. Priority is tempo \
         over attrition: secure, extract, and deny.",
        faction = f.player_faction,
        planet = f.planet,
        others = f.other_factions,
        stakes = f.stakes,
    )
}

fn faction_briefings(f: &Fields) -> String {
    format!(
        "## Faction Briefings\n\
         ### {faction}\n\
         Doctrinal advance under fire. Secure the asset, control the clock, and refuse wasteful \
         melees. Mid-board must be held just long enough to complete the uplink and extract.\n\
         \n\
         ### Opposition ({others})\n\
         Exploit overextension, jam rituals, and trade units to stall extraction lanes. Punish \
         isolated carriers and force resets on actions.\n\
         \n\
         ---",
        faction = f.player_faction,
        others = f.other_factions,
    )
}

fn narrative_objectives(f: &Fields) -> String {
    let radius = OBJECTIVE_RADIUS_INCHES;
    let reward = RP_RULES.earn.narrative_objective;

    format!(
        r#"## Narrative Objectives (Matched-Play Compatible)
**Board:** {board} • **Objective radius:** {radius}" • **Deployment:** neutral/standard

### {faction} — "Secure the Proof"
- **Markers:** Place **2** Objective Markers, each **>6"** from any table edge and **>9"** from each other; neither may start in a deployment zone.
- **Action — *Uplink*** *(Infantry/Character only)*:
  - Start at **end of your Movement** while within **{radius}"** of a Marker and **no enemy** within **{radius}"**.
  - Acting unit **cannot Shoot or Charge** this turn.
  - Completes at the **start of your next Command phase** if still uncontested (unit not destroyed/falling back; no enemy within {radius}").
- **On Success:** Unit gains the **Data Core** (it carries the item).
- **Extract:** End a Movement phase **wholly within your deployment zone** while carrying the Core to bank it.
- **Drop/Pickup:** If carrier is destroyed, place a **40mm token** at that spot. Any Infantry/Character within **1"** at end of Movement may pick it up.
- **When Scored:** **End of battle** if the Core was Extracted.
- **Reward:** **+{reward} RP**.
- **Risk Score:** **4/5**

  | Factor | Reason |
  |---|---|
  | Exposure | Multi-turn action in the mid-board invites contesting fire. |
  | Complexity | Action → carry → extract adds steps to fail. |
  | Contest | Two markers ease access, but both are outside DZs. |

---

### {others} — "Deny the Signal"
- **Ritual Site:** Place **1** Ritual token at **table center** (within 1").
- **Action — *Jam*** *(any Infantry)*:
  - Start at **end of your Movement** within **{radius}"** of center and **no enemy** within **{radius}"**.
  - Unit **cannot Shoot or Charge** this turn.
  - **Completes at end of your turn.**
- **On Success:** Place a **{radius}" Jamming Field** token. While active, **enemy Actions within 6" of center fail on a D6 roll of 1–2** (roll when the Action would complete).
- **Dispel:** Enemy Infantry/Character may take **Action — Dispel** (same timing); on completion, **remove** the Jamming Field.
- **When Scored:** **End of battle** if a Jamming Field is active.
- **Reward:** **+{reward} RP**.
- **Risk Score:** **3/5**

  | Factor | Reason |
  |---|---|
  | Exposure | Central, but completion is single-turn. |
  | Control | Aura taxes opposing actions without needing extract. |
  | Contest | Dispel exists, but costs the enemy tempo. |"#,
        board = board_label(),
        radius = radius,
        reward = reward,
        faction = f.player_faction,
        others = f.other_factions,
    )
}

fn post_battle_summary() -> String {
    let earn = RP_RULES.earn;
    let spend = RP_RULES.spend;

    format!(
        r#"## Post-Battle Summary (fill after game)
Record decisive moments, who completed which narrative objective, and whether both players agreed on a **Cinematic Moment**.

### RP / CGP Economy
**Earn**
- **+{objective} RP**: Complete your narrative objective
- **+{vp_win} RP**: Win by standard VP
- **+{cinematic} RP**: Cinematic Moment *(only if opponent agrees)*

**Spend**
- **{revive} RP**: Revive a fallen **named** character (otherwise skips next game)
- **{reroll} RP**: Re-roll mission type or secondary
- **{deploy} RP**: Win the deployment roll-off
- **{redeploy} RP**: Force opponent to redeploy **one** unit into the half DZ **you** choose
- **{stratagem} RP**: Use **one** Stratagem for free once
- **{cgp} RP**: **Buy 1 CGP** (Campaign Game Point)

> **Death Rule:** If a **named** character dies and isn't revived for {revive} RP, they **must skip** the next game."#,
        objective = earn.narrative_objective,
        vp_win = earn.vp_win,
        cinematic = earn.cinematic_moment,
        revive = spend.revive_named,
        reroll = spend.reroll_mission_or_secondary,
        deploy = spend.win_deployment_roll,
        redeploy = spend.force_redeploy_one_enemy_unit,
        stratagem = spend.free_stratagem,
        cgp = spend.buy_cgp,
    )
}

fn next_hook() -> String {
    "## Next Hook\n\
     A second signal whispers beyond no-man's-land. Do you press the advantage, or draw the \
     foe into a kill-corridor and bleed them dry?\n"
        .to_string()
}
