//! Value objects - Immutable objects defined by their attributes

mod battle_format;
mod campaign_mode;
mod ids;
mod rule_system;
mod text_field;

pub use battle_format::{BattleFormat, PlayerSlot};
pub use campaign_mode::CampaignMode;
pub use ids::*;
pub use rule_system::{
    board_label, RpEarn, RpRules, RpSpend, BOARD_LENGTH_INCHES, BOARD_WIDTH_INCHES,
    OBJECTIVE_RADIUS_INCHES, RP_RULES,
};
pub use text_field::{truncate_chars, TextField};
