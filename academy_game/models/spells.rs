use serde::Serialize;

use academy_types::{errors::GameError, faction::Faction};

/// Damage of every spell at level 1.
pub const BASE_SPELL_DAMAGE: u32 = 20;
/// Damage bonus granted by each level above the first, in percent.
pub const DAMAGE_PER_LEVEL_PERCENT: u32 = 20;
pub const MAX_SPELL_TIER: u8 = 5;
pub const MAX_SPELL_LEVEL: u8 = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpellData {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub base_damage: u32,
    /// Extra effect unlocked once the spell reaches level 5.
    pub level_5_effect: Option<SpellEffect>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpellEffect {
    pub kind: &'static str,
    pub description: &'static str,
}

/// A catalog spell together with its school and tier.
#[derive(Debug, Clone, Copy)]
pub struct SpellEntry {
    pub faction: Faction,
    pub tier: u8,
    pub data: &'static SpellData,
}

/// Unordered pair of schools keying a hybrid spell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FactionPair(Faction, Faction);

impl FactionPair {
    pub fn new(a: Faction, b: Faction) -> Self {
        if a <= b { Self(a, b) } else { Self(b, a) }
    }

    pub fn factions(&self) -> (Faction, Faction) {
        (self.0, self.1)
    }
}

/// Spell damage at `level`: +20% of base damage per level above 1, zero below level 1.
pub fn calculate_damage(base_damage: f64, level: i32) -> f64 {
    if level < 1 {
        return 0.0;
    }
    base_damage * (1.0 + (level - 1) as f64 * DAMAGE_PER_LEVEL_PERCENT as f64 / 100.0)
}

/// The five tiers of a school, tier 1 first.
pub fn faction_spells(faction: Faction) -> &'static [SpellData] {
    match faction {
        Faction::Fire => &FIRE_SPELLS,
        Faction::Water => &WATER_SPELLS,
        Faction::Wind => &WIND_SPELLS,
        Faction::Earth => &EARTH_SPELLS,
    }
}

pub fn get_spell_info(faction: Faction, tier: u8) -> Result<&'static SpellData, GameError> {
    if tier == 0 {
        return Err(GameError::InvalidSpellTier(tier));
    }
    faction_spells(faction)
        .get(tier as usize - 1)
        .ok_or(GameError::InvalidSpellTier(tier))
}

pub fn get_hybrid_spell_info(pair: FactionPair) -> Result<&'static SpellData, GameError> {
    HYBRID_SPELLS
        .iter()
        .find(|(key, _)| *key == pair)
        .map(|(_, spell)| spell)
        .ok_or_else(|| {
            let (a, b) = pair.factions();
            GameError::HybridSpellNotFound(a, b)
        })
}

/// Spell a new player of `faction` starts with.
pub fn starting_spell(faction: Faction) -> &'static SpellData {
    &faction_spells(faction)[0]
}

/// Looks up an elemental spell by id.
pub fn find_spell(spell_id: &str) -> Result<SpellEntry, GameError> {
    Faction::ALL
        .into_iter()
        .flat_map(|faction| {
            faction_spells(faction)
                .iter()
                .enumerate()
                .map(move |(idx, data)| SpellEntry {
                    faction,
                    tier: idx as u8 + 1,
                    data,
                })
        })
        .find(|entry| entry.data.id == spell_id)
        .ok_or_else(|| GameError::SpellNotFound(spell_id.to_string()))
}

pub fn hybrid_spells() -> impl Iterator<Item = (FactionPair, &'static SpellData)> {
    HYBRID_SPELLS.iter().map(|(pair, spell)| (*pair, spell))
}

// ==================== BEGIN SPELLS STATIC DATA ====================

static FIRE_SPELLS: [SpellData; 5] = [
    SpellData {
        id: "spark",
        name: "Spark",
        description: "A small burst of flame that hits a single target.",
        base_damage: BASE_SPELL_DAMAGE,
        level_5_effect: None,
    },
    SpellData {
        id: "firebolt",
        name: "Firebolt",
        description: "Hurls a bolt of fire that pierces the enemy's guard.",
        base_damage: BASE_SPELL_DAMAGE,
        level_5_effect: None,
    },
    SpellData {
        id: "fireball",
        name: "Fireball",
        description: "An exploding ball of fire that damages an area.",
        base_damage: BASE_SPELL_DAMAGE,
        level_5_effect: None,
    },
    SpellData {
        id: "inferno",
        name: "Inferno",
        description: "A torrent of flame scorching enemies in a wide radius.",
        base_damage: BASE_SPELL_DAMAGE,
        level_5_effect: None,
    },
    SpellData {
        id: "meteor",
        name: "Meteor",
        description: "Calls down a blazing meteor that deals massive damage.",
        base_damage: BASE_SPELL_DAMAGE,
        level_5_effect: Some(SpellEffect {
            kind: "burn",
            description: "Burns the target for 3 turns, dealing damage every turn.",
        }),
    },
];

static WATER_SPELLS: [SpellData; 5] = [
    SpellData {
        id: "icicle",
        name: "Icicle",
        description: "A sharp ice crystal that strikes the target.",
        base_damage: BASE_SPELL_DAMAGE,
        level_5_effect: None,
    },
    SpellData {
        id: "frost_arrow",
        name: "Frost Arrow",
        description: "An arrow of ice that slows the target on hit.",
        base_damage: BASE_SPELL_DAMAGE,
        level_5_effect: None,
    },
    SpellData {
        id: "ice_shard",
        name: "Ice Shard",
        description: "Scatters ice shards around, hitting several targets.",
        base_damage: BASE_SPELL_DAMAGE,
        level_5_effect: None,
    },
    SpellData {
        id: "blizzard",
        name: "Blizzard",
        description: "A storm of ice and snow that lowers enemy accuracy.",
        base_damage: BASE_SPELL_DAMAGE,
        level_5_effect: None,
    },
    SpellData {
        id: "tsunami",
        name: "Tsunami",
        description: "A mighty wave sweeping away every enemy in its path.",
        base_damage: BASE_SPELL_DAMAGE,
        level_5_effect: Some(SpellEffect {
            kind: "slow",
            description: "Slows the target for 2 turns, lowering its attack speed.",
        }),
    },
];

static WIND_SPELLS: [SpellData; 5] = [
    SpellData {
        id: "gust",
        name: "Gust",
        description: "A sharp gust of wind that pushes the target back.",
        base_damage: BASE_SPELL_DAMAGE,
        level_5_effect: None,
    },
    SpellData {
        id: "wind_blade",
        name: "Wind Blade",
        description: "A blade of air that cuts the target.",
        base_damage: BASE_SPELL_DAMAGE,
        level_5_effect: None,
    },
    SpellData {
        id: "cyclone",
        name: "Cyclone",
        description: "Lifts the enemy in the air, preventing its next attack.",
        base_damage: BASE_SPELL_DAMAGE,
        level_5_effect: None,
    },
    SpellData {
        id: "lightning",
        name: "Lightning",
        description: "A lightning strike with high penetration.",
        base_damage: BASE_SPELL_DAMAGE,
        level_5_effect: None,
    },
    SpellData {
        id: "tornado",
        name: "Tornado",
        description: "A mighty vortex draining the life of enemies.",
        base_damage: BASE_SPELL_DAMAGE,
        level_5_effect: Some(SpellEffect {
            kind: "stun",
            description: "Stuns the target for 1 turn.",
        }),
    },
];

static EARTH_SPELLS: [SpellData; 5] = [
    SpellData {
        id: "pebble",
        name: "Pebble",
        description: "Throws a sharp stone at the enemy.",
        base_damage: BASE_SPELL_DAMAGE,
        level_5_effect: None,
    },
    SpellData {
        id: "stone_spike",
        name: "Stone Spike",
        description: "A sharp spike rises from the ground and pierces the target.",
        base_damage: BASE_SPELL_DAMAGE,
        level_5_effect: None,
    },
    SpellData {
        id: "boulder",
        name: "Boulder",
        description: "Hurls a huge boulder that damages and stuns on impact.",
        base_damage: BASE_SPELL_DAMAGE,
        level_5_effect: None,
    },
    SpellData {
        id: "earth_spike",
        name: "Earth Spike",
        description: "A row of spikes erupts from the ground, hitting a group of enemies.",
        base_damage: BASE_SPELL_DAMAGE,
        level_5_effect: None,
    },
    SpellData {
        id: "earthquake",
        name: "Earthquake",
        description: "A mighty quake that breaks walls and damages every enemy.",
        base_damage: BASE_SPELL_DAMAGE,
        level_5_effect: Some(SpellEffect {
            kind: "defense_down",
            description: "Lowers the defense of all enemies by 20% for 2 turns.",
        }),
    },
];

// keys are stored in canonical (sorted) order, see FactionPair::new
static HYBRID_SPELLS: [(FactionPair, SpellData); 6] = [
    (
        FactionPair(Faction::Fire, Faction::Water),
        SpellData {
            id: "steam",
            name: "Steam",
            description: "Scalding steam that damages an area and lowers accuracy.",
            base_damage: BASE_SPELL_DAMAGE,
            level_5_effect: Some(SpellEffect {
                kind: "level_5",
                description: "Area damage and -15% target accuracy for 2 turns.",
            }),
        },
    ),
    (
        FactionPair(Faction::Fire, Faction::Wind),
        SpellData {
            id: "firestorm",
            name: "Firestorm",
            description: "A whirl of flame that scorches enemies and pushes them back.",
            base_damage: BASE_SPELL_DAMAGE,
            level_5_effect: Some(SpellEffect {
                kind: "level_5",
                description: "Area damage and pushes the target back by 1 cell.",
            }),
        },
    ),
    (
        FactionPair(Faction::Fire, Faction::Earth),
        SpellData {
            id: "magma",
            name: "Magma",
            description: "Erupting magma that damages and sets the ground ablaze.",
            base_damage: BASE_SPELL_DAMAGE,
            level_5_effect: Some(SpellEffect {
                kind: "level_5",
                description: "Damages and burns the target for 4 turns.",
            }),
        },
    ),
    (
        FactionPair(Faction::Water, Faction::Wind),
        SpellData {
            id: "ice_storm",
            name: "Ice Storm",
            description: "A storm of ice shards with a chance to freeze the target.",
            base_damage: BASE_SPELL_DAMAGE,
            level_5_effect: Some(SpellEffect {
                kind: "level_5",
                description: "Area damage and 20% chance to freeze the target for 1 turn.",
            }),
        },
    ),
    (
        FactionPair(Faction::Water, Faction::Earth),
        SpellData {
            id: "geyser",
            name: "Geyser",
            description: "A jet of boiling water that damages and heals the caster.",
            base_damage: BASE_SPELL_DAMAGE,
            level_5_effect: Some(SpellEffect {
                kind: "level_5",
                description: "Damages and heals the caster for 30% of the damage dealt.",
            }),
        },
    ),
    (
        FactionPair(Faction::Wind, Faction::Earth),
        SpellData {
            id: "dust_devil",
            name: "Dust Devil",
            description: "A whirl of stones and dust that blinds and wounds enemies.",
            base_damage: BASE_SPELL_DAMAGE,
            level_5_effect: Some(SpellEffect {
                kind: "level_5",
                description: "Damages and blinds the target for 2 turns (-25% damage).",
            }),
        },
    ),
];
