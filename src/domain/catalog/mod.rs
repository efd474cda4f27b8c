//! Option catalogs - static reference data for factions, planets and tones
//!
//! Everything here is a pure lookup. Unknown keys resolve to empty results,
//! never to errors.

mod factions;
mod planets;
mod tones;

pub use factions::{find_faction, Allegiance, FactionDef, SubfactionDef, FACTIONS};
pub use planets::{Biome, PlanetDef, Segmentum, PLANETS};
pub use tones::{find_tone, ToneDef, TONES};

/// A value/label pair for pickers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogOption {
    pub value: String,
    pub label: String,
}

impl CatalogOption {
    fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

/// Human-readable label for a faction selection
///
/// Returns `"<Faction>: <Subfaction>"` when both keys resolve, `"<Faction>"`
/// when only the faction does, and an empty string otherwise.
pub fn format_faction_choice(faction_key: &str, sub_key: Option<&str>) -> String {
    let Some(faction) = find_faction(faction_key.trim()) else {
        return String::new();
    };

    match sub_key.and_then(|key| faction.subfaction(key.trim())) {
        Some(sub) => format!("{}: {}", faction.name, sub.name),
        None => faction.name.to_string(),
    }
}

pub fn faction_options() -> Vec<CatalogOption> {
    FACTIONS
        .iter()
        .map(|f| CatalogOption::new(f.key, f.name))
        .collect()
}

pub fn subfaction_options(faction_key: &str) -> Vec<CatalogOption> {
    find_faction(faction_key)
        .map(|f| {
            f.subfactions
                .iter()
                .map(|s| CatalogOption::new(s.key, s.name))
                .collect()
        })
        .unwrap_or_default()
}

/// Segmenta that have at least one planet, in catalog order
pub fn segmentums() -> Vec<Segmentum> {
    let mut seen = Vec::new();
    for planet in PLANETS {
        if !seen.contains(&planet.segmentum) {
            seen.push(planet.segmentum);
        }
    }
    seen
}

pub fn planet_options(segmentum: Option<Segmentum>) -> Vec<CatalogOption> {
    PLANETS
        .iter()
        .filter(|p| segmentum.map_or(true, |s| p.segmentum == s))
        .map(|p| CatalogOption::new(p.key, p.name))
        .collect()
}

pub fn tone_options() -> Vec<CatalogOption> {
    TONES
        .iter()
        .map(|t| CatalogOption::new(t.key, t.label))
        .collect()
}

/// Display label for a tone key; unknown keys pass through unchanged
pub fn tone_label(key: &str) -> String {
    find_tone(key)
        .map(|t| t.label.to_string())
        .unwrap_or_else(|| key.to_string())
}

// =============================================================================
// Planet picker
// =============================================================================

/// Hints for choosing a plausible planet
#[derive(Debug, Clone, Default)]
pub struct PlanetQuery {
    pub segmentum: Option<Segmentum>,
    pub biome: Option<Biome>,
    pub faction_key: Option<String>,
    /// Salt for the deterministic choice
    pub seed: Option<String>,
}

/// Pick a plausible planet for the given hints
///
/// Filters narrow progressively (segmentum, then biome, then the faction's
/// allegiance). When the full filter set matches nothing, the most specific
/// filter is dropped until something matches. The pick is stable for the
/// same query.
pub fn pick_planet(query: &PlanetQuery) -> &'static PlanetDef {
    let allegiance = query
        .faction_key
        .as_deref()
        .and_then(find_faction)
        .map(|f| f.allegiance.normalized());

    let mut filters: Vec<Box<dyn Fn(&PlanetDef) -> bool>> = Vec::new();
    if let Some(segmentum) = query.segmentum {
        filters.push(Box::new(move |p: &PlanetDef| p.segmentum == segmentum));
    }
    if let Some(biome) = query.biome {
        filters.push(Box::new(move |p: &PlanetDef| p.biomes.contains(&biome)));
    }
    if let Some(allegiance) = allegiance {
        filters.push(Box::new(move |p: &PlanetDef| p.primary_allegiances.contains(&allegiance)));
    }

    let mut candidates: Vec<&'static PlanetDef> = PLANETS.iter().collect();
    for depth in (1..=filters.len()).rev() {
        let subset: Vec<&'static PlanetDef> = PLANETS
            .iter()
            .filter(|p| filters[..depth].iter().all(|f| f(*p)))
            .collect();
        if !subset.is_empty() {
            candidates = subset;
            break;
        }
    }

    let seed = query.seed.clone().unwrap_or_else(|| {
        format!(
            "{}|{}|{}",
            query.segmentum.map(|s| s.label()).unwrap_or(""),
            query.biome.map(|b| b.label()).unwrap_or(""),
            allegiance.map(|a| a.label()).unwrap_or(""),
        )
    });

    candidates[hash_to_index(&seed, candidates.len())]
}

/// 31-multiplier rolling hash over UTF-16 code units, reduced modulo `modulus`
fn hash_to_index(seed: &str, modulus: usize) -> usize {
    if modulus == 0 {
        return 0;
    }
    let hash = seed
        .encode_utf16()
        .fold(0u32, |h, unit| h.wrapping_mul(31).wrapping_add(u32::from(unit)));
    hash as usize % modulus
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_faction_choice() {
        assert_eq!(format_faction_choice("orks", None), "Orks");
        assert_eq!(
            format_faction_choice("space-marines", Some("imperial-fists")),
            "Adeptus Astartes (Space Marines): Imperial Fists"
        );
        assert_eq!(format_faction_choice("orks", Some("not-a-clan")), "Orks");
        assert_eq!(format_faction_choice("squats", Some("goffs")), "");
        assert_eq!(format_faction_choice("", None), "");
    }

    #[test]
    fn test_subfaction_options_unknown_faction() {
        assert!(subfaction_options("squats").is_empty());
        assert_eq!(subfaction_options("ynnari").len(), 2);
    }

    #[test]
    fn test_planet_options_by_segmentum() {
        let tempestus = planet_options(Some(Segmentum::Tempestus));
        assert_eq!(tempestus.len(), 1);
        assert_eq!(tempestus[0].label, "Krieg");
        assert_eq!(planet_options(None).len(), PLANETS.len());
        assert!(planet_options(Some(Segmentum::Pacificus)).is_empty());
    }

    #[test]
    fn test_segmentums_in_catalog_order() {
        assert_eq!(
            segmentums(),
            vec![
                Segmentum::Solar,
                Segmentum::Obscurus,
                Segmentum::Tempestus,
                Segmentum::Ultima
            ]
        );
    }

    #[test]
    fn test_tone_label_lookup() {
        assert_eq!(tone_label("khorne"), "Khorne War-Chant");
        assert_eq!(tone_label("bespoke"), "bespoke");
    }

    #[test]
    fn test_pick_planet_is_deterministic() {
        let query = PlanetQuery {
            segmentum: Some(Segmentum::Solar),
            seed: Some("battle-7".to_string()),
            ..Default::default()
        };
        let first = pick_planet(&query);
        let second = pick_planet(&query);
        assert_eq!(first.key, second.key);
        assert_eq!(first.segmentum, Segmentum::Solar);
    }

    #[test]
    fn test_pick_planet_respects_allegiance() {
        let query = PlanetQuery {
            faction_key: Some("tau-empire".to_string()),
            ..Default::default()
        };
        assert_eq!(pick_planet(&query).key, "tau");
    }

    #[test]
    fn test_pick_planet_relaxes_unsatisfiable_filters() {
        // No Tempestus planet is T'au-held, so allegiance is dropped
        let query = PlanetQuery {
            segmentum: Some(Segmentum::Tempestus),
            faction_key: Some("tau-empire".to_string()),
            ..Default::default()
        };
        assert_eq!(pick_planet(&query).key, "krieg");
    }

    #[test]
    fn test_hash_to_index_matches_rolling_hash() {
        // "ab" = 97 * 31 + 98
        assert_eq!(hash_to_index("ab", 10_000), 3105);
        assert_eq!(hash_to_index("anything", 0), 0);
    }
}
