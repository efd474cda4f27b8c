//! Faction reference data

/// Umbrella allegiance of a faction or planet controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Allegiance {
    Imperium,
    Chaos,
    Aeldari,
    Ynnari,
    Drukhari,
    Necrons,
    Orks,
    Tau,
    Tyranids,
    GenestealerCults,
    AgentsOfTheImperium,
}

impl Allegiance {
    pub fn label(&self) -> &'static str {
        match self {
            Allegiance::Imperium => "Imperium",
            Allegiance::Chaos => "Chaos",
            Allegiance::Aeldari => "Aeldari",
            Allegiance::Ynnari => "Ynnari",
            Allegiance::Drukhari => "Drukhari",
            Allegiance::Necrons => "Necrons",
            Allegiance::Orks => "Orks",
            Allegiance::Tau => "T'au",
            Allegiance::Tyranids => "Tyranids",
            Allegiance::GenestealerCults => "Genestealer Cults",
            Allegiance::AgentsOfTheImperium => "Agents of the Imperium",
        }
    }

    /// Agents operate under the Imperium for planet plausibility
    pub fn normalized(self) -> Self {
        match self {
            Allegiance::AgentsOfTheImperium => Allegiance::Imperium,
            other => other,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SubfactionDef {
    pub key: &'static str,
    pub name: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct FactionDef {
    pub key: &'static str,
    pub name: &'static str,
    pub allegiance: Allegiance,
    pub subfactions: &'static [SubfactionDef],
}

impl FactionDef {
    pub fn subfaction(&self, key: &str) -> Option<&'static SubfactionDef> {
        self.subfactions.iter().find(|s| s.key == key)
    }
}

const fn sub(key: &'static str, name: &'static str) -> SubfactionDef {
    SubfactionDef { key, name }
}

pub static FACTIONS: &[FactionDef] = &[
    FactionDef {
        key: "space-marines",
        name: "Adeptus Astartes (Space Marines)",
        allegiance: Allegiance::Imperium,
        subfactions: &[
            sub("ultramarines", "Ultramarines"),
            sub("imperial-fists", "Imperial Fists"),
            sub("blood-angels", "Blood Angels"),
            sub("dark-angels", "Dark Angels"),
            sub("salamanders", "Salamanders"),
            sub("raven-guard", "Raven Guard"),
            sub("white-scars", "White Scars"),
        ],
    },
    FactionDef {
        key: "astra-militarum",
        name: "Astra Militarum",
        allegiance: Allegiance::Imperium,
        subfactions: &[
            sub("cadian", "Cadian"),
            sub("catachan", "Catachan"),
            sub("krieg", "Death Korps of Krieg"),
            sub("valhallan", "Valhallan"),
            sub("tallarn", "Tallarn"),
        ],
    },
    FactionDef {
        key: "adeptus-mechanicus",
        name: "Adeptus Mechanicus",
        allegiance: Allegiance::Imperium,
        subfactions: &[
            sub("mars", "Forge World: Mars"),
            sub("ryza", "Forge World: Ryza"),
            sub("metalica", "Forge World: Metalica"),
            sub("graia", "Forge World: Graia"),
        ],
    },
    FactionDef {
        key: "agents-of-the-imperium",
        name: "Agents of the Imperium",
        allegiance: Allegiance::AgentsOfTheImperium,
        subfactions: &[
            sub("ordo-malleus", "Inquisition: Ordo Malleus"),
            sub("ordo-xenos", "Inquisition: Ordo Xenos"),
            sub("ordo-hereticus", "Inquisition: Ordo Hereticus"),
            sub("rogue-traders", "Rogue Traders"),
        ],
    },
    FactionDef {
        key: "craftworld-aeldari",
        name: "Craftworld Aeldari",
        allegiance: Allegiance::Aeldari,
        subfactions: &[
            sub("ulthwe", "Ulthwé"),
            sub("biel-tan", "Biel-Tan"),
            sub("saim-hann", "Saim-Hann"),
            sub("iyanden", "Iyanden"),
            sub("alaitoc", "Alaitoc"),
        ],
    },
    FactionDef {
        key: "ynnari",
        name: "Ynnari",
        allegiance: Allegiance::Ynnari,
        subfactions: &[
            sub("reborn", "The Reborn"),
            sub("yvraines-host", "Yvraine's Host"),
        ],
    },
    FactionDef {
        key: "drukhari",
        name: "Drukhari",
        allegiance: Allegiance::Drukhari,
        subfactions: &[
            sub("kabal-of-the-black-heart", "Kabal of the Black Heart"),
            sub("cult-of-strife", "Wych Cult of Strife"),
            sub("haemonculus-prophets-of-flesh", "Prophets of Flesh"),
        ],
    },
    FactionDef {
        key: "necrons",
        name: "Necrons",
        allegiance: Allegiance::Necrons,
        subfactions: &[
            sub("sautekh", "Sautekh Dynasty"),
            sub("mephrit", "Mephrit Dynasty"),
            sub("novokh", "Novokh Dynasty"),
            sub("nihilakh", "Nihilakh Dynasty"),
        ],
    },
    FactionDef {
        key: "orks",
        name: "Orks",
        allegiance: Allegiance::Orks,
        subfactions: &[
            sub("goffs", "Goffs"),
            sub("evil-sunz", "Evil Sunz"),
            sub("bad-moons", "Bad Moons"),
            sub("deathskulls", "Deathskulls"),
            sub("snakebites", "Snakebites"),
            sub("blood-axes", "Blood Axes"),
        ],
    },
    FactionDef {
        key: "tau-empire",
        name: "T'au Empire",
        allegiance: Allegiance::Tau,
        subfactions: &[
            sub("tau-sept", "T'au Sept"),
            sub("viorla", "Vior'la"),
            sub("dal-yeth", "Dal'yth"),
            sub("sa-cea", "Sa'cea"),
            sub("bork-an", "Bork'an"),
            sub("farsight-enclaves", "Farsight Enclaves"),
        ],
    },
    FactionDef {
        key: "tyranids",
        name: "Tyranids",
        allegiance: Allegiance::Tyranids,
        subfactions: &[
            sub("behemoth", "Hive Fleet Behemoth"),
            sub("kraken", "Hive Fleet Kraken"),
            sub("leviathan", "Hive Fleet Leviathan"),
            sub("gorgon", "Hive Fleet Gorgon"),
            sub("jormungandr", "Hive Fleet Jormungandr"),
            sub("kronos", "Hive Fleet Kronos"),
        ],
    },
    FactionDef {
        key: "genestealer-cults",
        name: "Genestealer Cults",
        allegiance: Allegiance::GenestealerCults,
        subfactions: &[
            sub("four-armed-emperor", "The Four-Armed Emperor"),
            sub("twisted-helix", "The Twisted Helix"),
            sub("rusted-claw", "The Rusted Claw"),
            sub("pauper-princes", "The Pauper Princes"),
        ],
    },
    FactionDef {
        key: "chaos-space-marines",
        name: "Chaos Space Marines",
        allegiance: Allegiance::Chaos,
        subfactions: &[
            sub("black-legion", "Black Legion"),
            sub("world-eaters", "World Eaters"),
            sub("emperors-children", "Emperor's Children"),
            sub("death-guard", "Death Guard"),
            sub("thousand-sons", "Thousand Sons"),
            sub("alpha-legion", "Alpha Legion"),
            sub("iron-warriors", "Iron Warriors"),
            sub("night-lords", "Night Lords"),
            sub("word-bearers", "Word Bearers"),
        ],
    },
];

pub fn find_faction(key: &str) -> Option<&'static FactionDef> {
    FACTIONS.iter().find(|f| f.key == key)
}
