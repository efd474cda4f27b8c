//! Free-text scenario fields with their length limits and placeholders
//!
//! Limits count characters, not bytes, so multi-byte names never split.

/// A clamped free-text field of a scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    CampaignName,
    PlayerFaction,
    OtherFactions,
    Planet,
    Tone,
    Stakes,
}

impl TextField {
    pub const fn max_len(self) -> usize {
        match self {
            TextField::CampaignName => 120,
            TextField::PlayerFaction => 80,
            TextField::OtherFactions => 160,
            TextField::Planet => 80,
            TextField::Tone => 40,
            TextField::Stakes => 400,
        }
    }

    pub const fn default_value(self) -> &'static str {
        match self {
            TextField::CampaignName => "Untitled Campaign",
            TextField::PlayerFaction => "Faction",
            TextField::OtherFactions => "Opponents",
            TextField::Planet => "Theater",
            TextField::Tone => "Tone",
            TextField::Stakes => "Primary objective",
        }
    }

    /// Trim and cut to the field limit. Missing input becomes empty.
    pub fn clamp(self, raw: Option<&str>) -> String {
        truncate_chars(raw.unwrap_or("").trim(), self.max_len())
    }

    /// Like [`TextField::clamp`], falling back to the placeholder when empty
    pub fn clamp_or_default(self, raw: Option<&str>) -> String {
        let clamped = self.clamp(raw);
        if clamped.is_empty() {
            self.default_value().to_string()
        } else {
            clamped
        }
    }
}

/// First `max` characters of `s`
pub fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_trims_and_limits() {
        let long = format!("  {}  ", "x".repeat(500));
        let clamped = TextField::CampaignName.clamp(Some(&long));
        assert_eq!(clamped.chars().count(), 120);
        assert!(!clamped.starts_with(' '));
    }

    #[test]
    fn test_clamp_counts_characters() {
        let name = "Ulthwé".repeat(30);
        let clamped = TextField::Tone.clamp(Some(&name));
        assert_eq!(clamped.chars().count(), 40);
    }

    #[test]
    fn test_default_on_blank() {
        assert_eq!(TextField::Planet.clamp_or_default(Some("   ")), "Theater");
        assert_eq!(TextField::Stakes.clamp_or_default(None), "Primary objective");
        assert_eq!(TextField::Tone.clamp_or_default(Some(" Grim ")), "Grim");
    }
}
