//! Curated tone presets for a consistent narrative voice

#[derive(Debug, Clone, Copy)]
pub struct ToneDef {
    pub key: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

const fn tone(key: &'static str, label: &'static str, description: &'static str) -> ToneDef {
    ToneDef {
        key,
        label,
        description,
    }
}

pub static TONES: &[ToneDef] = &[
    tone("grimdark", "Grimdark (Baseline)", "Bleak duty and fatalism."),
    tone("guard_trench", "Astra Militarum Trench", "Barked orders; mud and shellfire."),
    tone("ecclesiarchal", "Ecclesiarchal Hymnal", "Liturgical zeal; martyrdom."),
    tone("inquisitorial", "Inquisitorial Dossier", "Clipped, redacted, threatening subtext."),
    tone("mechanicus", "Mechanicus Cant", "Techno-liturgical; binharic asides."),
    tone("knightly", "Knightly Lament", "Oaths, lineages, doom-bound honor."),
    tone("rogue_trader", "Rogue-Trader Baroque", "Void pomp; gilt-edged bravado."),
    tone("arbites", "Arbites Edict", "Civic oppression and legalese."),
    tone("aeldari_elegy", "Aeldari Elegy", "Poetic fatalism; age-worn grief."),
    tone("drukhari", "Drukhari Masquerade", "Cruel decadence, stage venom."),
    tone("ynnari", "Ynnari Funereal Resolve", "Hush and renewal through death."),
    tone("tau_propaganda", "T'au Propaganda", "Uplift-jargon; sanitized conquest."),
    tone("orks", "Ork Loudmouthed Brutal", "Gleeful krumpin' and dakka."),
    tone("necron", "Necron Dynastic Edict", "Cold disdain; eternity calculus."),
    tone("tyranid", "Tyranid Predatory Clinical", "Detached biology; hive imperatives."),
    tone("gsc", "Genestealer Cult Cant", "Whispered revolution; family/faith."),
    tone("chaos_undivided", "Chaos Undivided Sermon", "Blasphemous triumphalism."),
    tone("khorne", "Khorne War-Chant", "Terse, percussive, blood-oaths."),
    tone("nurgle", "Nurgle Rot-Pastoral", "Sickly cheer; decay as bounty."),
    tone("tzeentch", "Tzeentch Esoteric", "Riddles and inevitability."),
    tone("slaanesh", "Slaanesh Decadent", "Sensory excess; perfection mania."),
    tone("hive_noir", "Hive-Noir", "Smog, neon, informants and rot."),
    tone("void_gothic", "Void-Gothic Naval", "Bells, auspex, keel-prayers."),
    tone("blackstone", "Blackstone Geometric", "Sterile angles; null-tone."),
    tone("deathworld", "Death-World Survivalist", "Weather and flora as enemies."),
];

pub fn find_tone(key: &str) -> Option<&'static ToneDef> {
    TONES.iter().find(|t| t.key == key)
}
