//! Fixed tabletop constants embedded in every generated scenario

use serde::Serialize;

/// Board width in inches
pub const BOARD_WIDTH_INCHES: u32 = 40;
/// Board length in inches
pub const BOARD_LENGTH_INCHES: u32 = 60;
/// Objective marker control radius in inches
pub const OBJECTIVE_RADIUS_INCHES: u32 = 3;

/// Resonance Points earned after a battle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RpEarn {
    pub narrative_objective: u32,
    pub vp_win: u32,
    /// Only if the opponent agrees
    pub cinematic_moment: u32,
}

/// Resonance Point costs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RpSpend {
    pub revive_named: u32,
    pub reroll_mission_or_secondary: u32,
    pub win_deployment_roll: u32,
    pub force_redeploy_one_enemy_unit: u32,
    pub free_stratagem: u32,
    pub buy_cgp: u32,
}

/// The RP/CGP economy shared by the template and the rewrite instructions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RpRules {
    pub earn: RpEarn,
    pub spend: RpSpend,
}

pub const RP_RULES: RpRules = RpRules {
    earn: RpEarn {
        narrative_objective: 3,
        vp_win: 1,
        cinematic_moment: 1,
    },
    spend: RpSpend {
        revive_named: 2,
        reroll_mission_or_secondary: 2,
        win_deployment_roll: 3,
        force_redeploy_one_enemy_unit: 3,
        free_stratagem: 4,
        buy_cgp: 5,
    },
};

/// `40"x60"` as written in scenario text
pub fn board_label() -> String {
    format!("{}\"x{}\"", BOARD_WIDTH_INCHES, BOARD_LENGTH_INCHES)
}
