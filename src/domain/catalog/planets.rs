//! Planet reference data

use super::factions::Allegiance;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segmentum {
    Solar,
    Obscurus,
    Tempestus,
    Ultima,
    Pacificus,
}

impl Segmentum {
    pub fn label(&self) -> &'static str {
        match self {
            Segmentum::Solar => "Solar",
            Segmentum::Obscurus => "Obscurus",
            Segmentum::Tempestus => "Tempestus",
            Segmentum::Ultima => "Ultima",
            Segmentum::Pacificus => "Pacificus",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        [
            Segmentum::Solar,
            Segmentum::Obscurus,
            Segmentum::Tempestus,
            Segmentum::Ultima,
            Segmentum::Pacificus,
        ]
        .into_iter()
        .find(|s| s.label().eq_ignore_ascii_case(raw))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Biome {
    Hive,
    Forge,
    Agri,
    Desert,
    Jungle,
    Tundra,
    Oceanic,
    DeathWorld,
    Ruin,
    Urban,
    Frozen,
    Volcanic,
}

impl Biome {
    pub fn label(&self) -> &'static str {
        match self {
            Biome::Hive => "Hive",
            Biome::Forge => "Forge",
            Biome::Agri => "Agri",
            Biome::Desert => "Desert",
            Biome::Jungle => "Jungle",
            Biome::Tundra => "Tundra",
            Biome::Oceanic => "Oceanic",
            Biome::DeathWorld => "Death World",
            Biome::Ruin => "Ruin",
            Biome::Urban => "Urban",
            Biome::Frozen => "Frozen",
            Biome::Volcanic => "Volcanic",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        [
            Biome::Hive,
            Biome::Forge,
            Biome::Agri,
            Biome::Desert,
            Biome::Jungle,
            Biome::Tundra,
            Biome::Oceanic,
            Biome::DeathWorld,
            Biome::Ruin,
            Biome::Urban,
            Biome::Frozen,
            Biome::Volcanic,
        ]
        .into_iter()
        .find(|b| b.label().eq_ignore_ascii_case(raw))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PlanetDef {
    pub key: &'static str,
    pub name: &'static str,
    pub segmentum: Segmentum,
    pub biomes: &'static [Biome],
    /// Plausible controllers or influences
    pub primary_allegiances: &'static [Allegiance],
    pub keywords: &'static [&'static str],
    pub notes: &'static str,
}

pub static PLANETS: &[PlanetDef] = &[
    PlanetDef {
        key: "terra",
        name: "Holy Terra",
        segmentum: Segmentum::Solar,
        biomes: &[Biome::Hive, Biome::Urban],
        primary_allegiances: &[Allegiance::Imperium],
        keywords: &["capital", "throne", "sol"],
        notes: "Seat of the Imperium.",
    },
    PlanetDef {
        key: "mars",
        name: "Mars",
        segmentum: Segmentum::Solar,
        biomes: &[Biome::Forge, Biome::Desert],
        primary_allegiances: &[Allegiance::Imperium],
        keywords: &["mechanicus", "forge world", "sol"],
        notes: "Adeptus Mechanicus domain.",
    },
    PlanetDef {
        key: "necromunda",
        name: "Necromunda",
        segmentum: Segmentum::Solar,
        biomes: &[Biome::Hive, Biome::Forge, Biome::Urban],
        primary_allegiances: &[Allegiance::Imperium],
        keywords: &["hive world", "underhive"],
        notes: "Industrial hive world of the Segmentum Solar.",
    },
    PlanetDef {
        key: "armageddon",
        name: "Armageddon",
        segmentum: Segmentum::Solar,
        biomes: &[Biome::Hive, Biome::Forge, Biome::Urban],
        primary_allegiances: &[Allegiance::Imperium, Allegiance::Orks, Allegiance::Chaos],
        keywords: &["warzone", "steel legion"],
        notes: "Repeated Ork and Chaos invasions; eternal warzone.",
    },
    PlanetDef {
        key: "cadia",
        name: "Cadia",
        segmentum: Segmentum::Obscurus,
        biomes: &[Biome::Ruin, Biome::Tundra],
        primary_allegiances: &[Allegiance::Imperium, Allegiance::Chaos],
        keywords: &["gate", "eye of terror"],
        notes: "World-broken during the 13th Black Crusade; relics and debris fields remain.",
    },
    PlanetDef {
        key: "fenris",
        name: "Fenris",
        segmentum: Segmentum::Obscurus,
        biomes: &[Biome::Frozen, Biome::Oceanic, Biome::Volcanic],
        primary_allegiances: &[Allegiance::Imperium],
        keywords: &["space wolves", "ice", "volcano"],
        notes: "Harsh home of the Space Wolves.",
    },
    PlanetDef {
        key: "valhalla",
        name: "Valhalla",
        segmentum: Segmentum::Obscurus,
        biomes: &[Biome::Frozen, Biome::Urban],
        primary_allegiances: &[Allegiance::Imperium],
        keywords: &["ice world", "astra militarum"],
        notes: "Ice world famed for stoic regiments.",
    },
    PlanetDef {
        key: "krieg",
        name: "Krieg",
        segmentum: Segmentum::Tempestus,
        biomes: &[Biome::DeathWorld, Biome::Ruin],
        primary_allegiances: &[Allegiance::Imperium],
        keywords: &["siege", "astra militarum"],
        notes: "Radiated, war-scarred manufactoria and trenches.",
    },
    PlanetDef {
        key: "tallarn",
        name: "Tallarn",
        segmentum: Segmentum::Ultima,
        biomes: &[Biome::Desert],
        primary_allegiances: &[Allegiance::Imperium],
        keywords: &["desert", "armoured warfare"],
        notes: "Vast dunes; famed armoured regiments.",
    },
    PlanetDef {
        key: "macragge",
        name: "Macragge",
        segmentum: Segmentum::Ultima,
        biomes: &[Biome::Tundra, Biome::Urban],
        primary_allegiances: &[Allegiance::Imperium],
        keywords: &["ultramar", "ultramarines"],
        notes: "Capital world of Ultramar.",
    },
    PlanetDef {
        key: "baal",
        name: "Baal",
        segmentum: Segmentum::Ultima,
        biomes: &[Biome::Desert, Biome::Ruin],
        primary_allegiances: &[Allegiance::Imperium, Allegiance::Tyranids],
        keywords: &["blood angels", "devastated"],
        notes: "Devastated by Tyranid invasions.",
    },
    PlanetDef {
        key: "tau",
        name: "T'au",
        segmentum: Segmentum::Ultima,
        biomes: &[Biome::Agri, Biome::Urban],
        primary_allegiances: &[Allegiance::Tau],
        keywords: &["damocles", "sept"],
        notes: "Core world of the T'au Empire.",
    },
    PlanetDef {
        key: "nocturne",
        name: "Nocturne",
        segmentum: Segmentum::Ultima,
        biomes: &[Biome::Volcanic],
        primary_allegiances: &[Allegiance::Imperium],
        keywords: &["salamanders", "volcano"],
        notes: "Volcanic home world of the Salamanders.",
    },
];
