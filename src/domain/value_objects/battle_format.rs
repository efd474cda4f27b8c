//! Battle format value object
//!
//! The format decides how many Warhosts take the table and how players are
//! grouped into them. It also selects the team framing used when a narrative
//! is rewritten.

use serde::{Deserialize, Serialize};

/// Supported battle formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BattleFormat {
    #[default]
    #[serde(rename = "1v1")]
    OneVsOne,
    #[serde(rename = "2v2")]
    TwoVsTwo,
    #[serde(rename = "3v3")]
    ThreeVsThree,
    #[serde(rename = "4v4")]
    FourVsFour,
    #[serde(rename = "ffa", alias = "FFA")]
    FreeForAll,
    #[serde(rename = "2v2v2v2")]
    FourPairs,
}

/// One player position in a format's layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlayerSlot {
    pub index: usize,
    /// 1-based team number
    pub team: usize,
}

impl BattleFormat {
    pub const ALL: [BattleFormat; 6] = [
        BattleFormat::OneVsOne,
        BattleFormat::TwoVsTwo,
        BattleFormat::ThreeVsThree,
        BattleFormat::FourVsFour,
        BattleFormat::FreeForAll,
        BattleFormat::FourPairs,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BattleFormat::OneVsOne => "1v1",
            BattleFormat::TwoVsTwo => "2v2",
            BattleFormat::ThreeVsThree => "3v3",
            BattleFormat::FourVsFour => "4v4",
            BattleFormat::FreeForAll => "ffa",
            BattleFormat::FourPairs => "2v2v2v2",
        }
    }

    /// Lenient parse used at the API boundary. Case-insensitive; `None` for
    /// anything unrecognised so callers can fall back to the default.
    pub fn coerce(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|format| format.as_str() == normalized)
    }

    /// True for the formats played as two opposing sides
    pub fn is_two_sided(&self) -> bool {
        matches!(
            self,
            BattleFormat::OneVsOne
                | BattleFormat::TwoVsTwo
                | BattleFormat::ThreeVsThree
                | BattleFormat::FourVsFour
        )
    }

    pub fn players_per_team(&self) -> usize {
        match self {
            BattleFormat::OneVsOne | BattleFormat::FreeForAll => 1,
            BattleFormat::TwoVsTwo | BattleFormat::FourPairs => 2,
            BattleFormat::ThreeVsThree => 3,
            BattleFormat::FourVsFour => 4,
        }
    }

    pub fn team_count(&self) -> usize {
        if self.is_two_sided() {
            2
        } else {
            4
        }
    }

    /// Player slots in seat order, each tagged with its team number
    pub fn slot_layout(&self) -> Vec<PlayerSlot> {
        let per_team = self.players_per_team();
        (0..self.team_count() * per_team)
            .map(|index| PlayerSlot {
                index,
                team: index / per_team + 1,
            })
            .collect()
    }
}

impl std::fmt::Display for BattleFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_is_case_insensitive() {
        assert_eq!(BattleFormat::coerce("FFA"), Some(BattleFormat::FreeForAll));
        assert_eq!(BattleFormat::coerce(" 2v2v2v2 "), Some(BattleFormat::FourPairs));
        assert_eq!(BattleFormat::coerce("3V3"), Some(BattleFormat::ThreeVsThree));
        assert_eq!(BattleFormat::coerce("5v5"), None);
    }

    #[test]
    fn test_slot_layout_two_sided() {
        let slots = BattleFormat::ThreeVsThree.slot_layout();
        assert_eq!(slots.len(), 6);
        assert!(slots[..3].iter().all(|s| s.team == 1));
        assert!(slots[3..].iter().all(|s| s.team == 2));
    }

    #[test]
    fn test_slot_layout_pairs_and_ffa() {
        let pairs: Vec<usize> = BattleFormat::FourPairs
            .slot_layout()
            .iter()
            .map(|s| s.team)
            .collect();
        assert_eq!(pairs, vec![1, 1, 2, 2, 3, 3, 4, 4]);

        let ffa: Vec<usize> = BattleFormat::FreeForAll
            .slot_layout()
            .iter()
            .map(|s| s.team)
            .collect();
        assert_eq!(ffa, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&BattleFormat::FreeForAll).unwrap();
        assert_eq!(json, "\"ffa\"");
        let parsed: BattleFormat = serde_json::from_str("\"FFA\"").unwrap();
        assert_eq!(parsed, BattleFormat::FreeForAll);
    }
}
