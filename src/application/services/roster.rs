//! Roster formatting - Warhost selections as human-readable lines

use crate::domain::entities::Warhost;

const UNNAMED_WARHOST: &str = "Warhost";
const UNASSIGNED: &str = "(unassigned)";

/// One line per Warhost: `"<name>: <label>; <label>"`, or
/// `"<name>: (unassigned)"` when no player resolves
pub fn build_roster_lines(warhosts: &[Warhost]) -> Vec<String> {
    warhosts
        .iter()
        .map(|warhost| {
            let name = warhost.name.trim();
            let name = if name.is_empty() { UNNAMED_WARHOST } else { name };
            let labels = warhost.resolved_labels();
            if labels.is_empty() {
                format!("{}: {}", name, UNASSIGNED)
            } else {
                format!("{}: {}", name, labels.join("; "))
            }
        })
        .collect()
}

/// Roster lines joined with newlines
pub fn build_roster_text(warhosts: &[Warhost]) -> String {
    build_roster_lines(warhosts).join("\n")
}

/// The "Forces Roster" block appended to template output and sent with the
/// rewrite request. Empty when there are no Warhosts.
pub fn build_roster_block(warhosts: &[Warhost]) -> String {
    let lines = build_roster_lines(warhosts);
    if lines.is_empty() {
        return String::new();
    }
    let bullets: Vec<String> = lines.iter().map(|l| format!("- {}", l)).collect();
    format!("\n\nForces Roster:\n{}\n", bullets.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::WarhostPlayer;

    #[test]
    fn test_single_ork_warhost() {
        let warhosts = vec![Warhost::new("Warhost Alpha").with_player(WarhostPlayer::new("orks"))];
        assert_eq!(build_roster_text(&warhosts), "Warhost Alpha: Orks");
    }

    #[test]
    fn test_subfactions_joined_in_order() {
        let warhosts = vec![Warhost::new("Warhost Alpha")
            .with_player(WarhostPlayer::new("space-marines").with_subfaction("ultramarines"))
            .with_player(WarhostPlayer::new("space-marines").with_subfaction("imperial-fists"))];
        assert_eq!(
            build_roster_text(&warhosts),
            "Warhost Alpha: Adeptus Astartes (Space Marines): Ultramarines; \
             Adeptus Astartes (Space Marines): Imperial Fists"
        );
    }

    #[test]
    fn test_unresolved_players_render_unassigned() {
        let warhosts = vec![
            Warhost::new("Warhost Alpha").with_player(WarhostPlayer::new("orks")),
            Warhost::new("Warhost Beta")
                .with_player(WarhostPlayer::new(""))
                .with_player(WarhostPlayer::new("squats")),
            Warhost::new("  ").with_player(WarhostPlayer::new("necrons")),
        ];
        assert_eq!(
            build_roster_lines(&warhosts),
            vec![
                "Warhost Alpha: Orks".to_string(),
                "Warhost Beta: (unassigned)".to_string(),
                "Warhost: Necrons".to_string(),
            ]
        );
    }

    #[test]
    fn test_roster_block() {
        assert_eq!(build_roster_block(&[]), "");
        let warhosts = vec![Warhost::new("Warhost Alpha").with_player(WarhostPlayer::new("orks"))];
        assert_eq!(
            build_roster_block(&warhosts),
            "\n\nForces Roster:\n- Warhost Alpha: Orks\n"
        );
    }
}
