use serde::Serialize;
use std::sync::LazyLock;

use academy_types::{buildings::BuildingName, errors::GameError};

/// Growth ratio between consecutive AOM Generator upgrades.
pub const AOM_UPGRADE_RATIO: f64 = 1.2;
/// Growth ratio between consecutive Arcane Lab upgrades.
pub const ARCANE_LAB_UPGRADE_RATIO: f64 = 1.5;

/// Static parameters of a building type.
#[derive(Debug)]
pub struct BuildingData {
    pub name: BuildingName,
    pub description: &'static str,
    pub emoji: &'static str,
    pub is_unique: bool,
    pub is_starting: bool,
    pub can_build: bool,
    pub max_level: u8,
    /// Grid cell a starting building is placed on when a city is founded.
    pub starting_cell: Option<u8>,
    pub costs: BuildingCosts,
    pub effects: BuildingEffects,
}

#[derive(Debug)]
pub struct BuildingCosts {
    /// Nominal build time, in days.
    pub build_time: f64,
    upgrade_times: UpgradeSchedule,
}

impl BuildingCosts {
    /// Nominal upgrade times, in days, one entry per upgrade.
    pub fn upgrade_times(&self) -> &[f64] {
        match &self.upgrade_times {
            UpgradeSchedule::Listed(times) => times,
            UpgradeSchedule::Derived(times) => times.as_slice(),
        }
    }

    /// Nominal upgrade time for reaching `target_level`, indexed by `target_level - 1`.
    pub fn upgrade_time(&self, target_level: u8) -> Option<f64> {
        let idx = target_level.checked_sub(1)? as usize;
        self.upgrade_times().get(idx).copied()
    }
}

#[derive(Debug)]
enum UpgradeSchedule {
    Listed(&'static [f64]),
    Derived(&'static LazyLock<Vec<f64>>),
}

/// What a building does for its owner, per archetype.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BuildingEffects {
    ResearchCenter,
    WizardTower {
        health_bonus_per_level: u8,
        /// (level, spell power bonus %) thresholds.
        spell_power_levels: &'static [(u8, u8)],
        duplicate_spell_slot_level: u8,
    },
    Blessings {
        blessings_unlocked: &'static [u8],
    },
    AomProduction {
        base_production: u32,
        production_multiplier: f64,
    },
    PvpArena {
        rating_system: bool,
        battle_logs: bool,
    },
    CityDefense,
    ResearchSpeed {
        bonus_per_level: &'static [f64],
    },
}

impl BuildingEffects {
    /// Percentage of wizard health granted at `level`.
    pub fn health_bonus(&self, level: u8) -> u32 {
        match self {
            BuildingEffects::WizardTower {
                health_bonus_per_level,
                ..
            } => *health_bonus_per_level as u32 * level as u32,
            _ => 0,
        }
    }

    /// Spell power bonus (%) of the highest threshold reached at `level`.
    pub fn spell_power_bonus(&self, level: u8) -> u8 {
        match self {
            BuildingEffects::WizardTower {
                spell_power_levels, ..
            } => spell_power_levels
                .iter()
                .filter(|(threshold, _)| level >= *threshold)
                .map(|(_, bonus)| *bonus)
                .max()
                .unwrap_or(0),
            _ => 0,
        }
    }

    /// Daily AOM crystals produced at `level`.
    pub fn aom_production(&self, level: u8) -> f64 {
        match self {
            BuildingEffects::AomProduction {
                base_production,
                production_multiplier,
            } if level > 0 => {
                *base_production as f64 * production_multiplier.powi(level as i32 - 1)
            }
            _ => 0.0,
        }
    }

    /// Cumulative research speed bonus (%) at `level`.
    pub fn research_speed_bonus(&self, level: u8) -> f64 {
        match self {
            BuildingEffects::ResearchSpeed { bonus_per_level } => {
                bonus_per_level.iter().take(level as usize).sum()
            }
            _ => 0.0,
        }
    }

    /// How many learned spells the building casts when defending.
    pub fn defense_spell_slots(&self, level: u8) -> u8 {
        match self {
            BuildingEffects::CityDefense => level,
            _ => 0,
        }
    }
}

/// Geometric sequence of `levels` values seeded at 1.0, each `ratio` times the previous one.
pub fn geometric_upgrade_times(ratio: f64, levels: u8) -> Vec<f64> {
    let mut times = Vec::with_capacity(levels as usize);
    let mut current = 1.0;
    for _ in 0..levels {
        times.push(current);
        current *= ratio;
    }
    times
}

/// Returns the static data of a building.
pub fn get_building_data(name: &BuildingName) -> &'static BuildingData {
    match name {
        BuildingName::Library => &LIBRARY,
        BuildingName::WizardTower => &WIZARD_TOWER,
        BuildingName::BlessingTower => &BLESSING_TOWER,
        BuildingName::AomGenerator => &AOM_GENERATOR,
        BuildingName::PvpArena => &PVP_ARENA,
        BuildingName::DefenseTower => &DEFENSE_TOWER,
        BuildingName::ArcaneLab => &ARCANE_LAB,
    }
}

/// Looks up a building by its string id.
pub fn find_building(building_id: &str) -> Result<&'static BuildingData, GameError> {
    let name: BuildingName = building_id.parse()?;
    Ok(get_building_data(&name))
}

/// Max level of a building, 0 for unknown ids.
pub fn get_max_level(building_id: &str) -> u8 {
    find_building(building_id).map_or(0, |b| b.max_level)
}

/// Effective construction time, in seconds, of a build (`level = None`) or an
/// upgrade to `level`. Every construction currently resolves instantly.
pub fn get_building_time(_name: &BuildingName, _level: Option<u8>) -> f64 {
    0.0
}

/// Whole catalog, in declaration order.
pub fn all_buildings() -> impl Iterator<Item = &'static BuildingData> {
    BuildingName::ALL.iter().map(get_building_data)
}

/// Buildings every city is founded with.
pub fn starting_buildings() -> impl Iterator<Item = &'static BuildingData> {
    all_buildings().filter(|b| b.is_starting)
}

// ==================== BEGIN BUILDINGS STATIC DATA ====================

static AOM_UPGRADE_TIMES: LazyLock<Vec<f64>> =
    LazyLock::new(|| geometric_upgrade_times(AOM_UPGRADE_RATIO, 20)[1..].to_vec());

static ARCANE_LAB_UPGRADE_TIMES: LazyLock<Vec<f64>> =
    LazyLock::new(|| geometric_upgrade_times(ARCANE_LAB_UPGRADE_RATIO, 15)[1..].to_vec());

static LIBRARY: BuildingData = BuildingData {
    name: BuildingName::Library,
    description: "Heart of spell research.",
    emoji: "📚",
    is_unique: true,
    is_starting: true,
    can_build: false,
    max_level: 1,
    starting_cell: Some(4),
    costs: BuildingCosts {
        build_time: 0.0,
        upgrade_times: UpgradeSchedule::Listed(&[]),
    },
    effects: BuildingEffects::ResearchCenter,
};

static WIZARD_TOWER: BuildingData = BuildingData {
    name: BuildingName::WizardTower,
    description: "Empowers your wizards and lets you hire new ones.",
    emoji: "🧙‍♂️",
    is_unique: true,
    is_starting: true,
    can_build: false,
    max_level: 10,
    starting_cell: Some(6),
    costs: BuildingCosts {
        build_time: 0.0,
        // level N takes 2^(N-1) days
        upgrade_times: UpgradeSchedule::Listed(&[
            1.0, 2.0, 4.0, 8.0, 16.0, 32.0, 64.0, 128.0, 256.0, 512.0,
        ]),
    },
    effects: BuildingEffects::WizardTower {
        health_bonus_per_level: 10,
        spell_power_levels: &[(3, 10), (6, 20), (9, 30)],
        duplicate_spell_slot_level: 10,
    },
};

static BLESSING_TOWER: BuildingData = BuildingData {
    name: BuildingName::BlessingTower,
    description: "Unlocks powerful temporary blessings for your wizards.",
    emoji: "🛐",
    is_unique: true,
    is_starting: false,
    can_build: true,
    max_level: 5,
    starting_cell: None,
    costs: BuildingCosts {
        build_time: 15.0,
        // level N takes 10 * 2^(N-1) days
        upgrade_times: UpgradeSchedule::Listed(&[10.0, 20.0, 40.0, 80.0, 160.0]),
    },
    effects: BuildingEffects::Blessings {
        blessings_unlocked: &[1, 2, 3, 4, 5],
    },
};

static AOM_GENERATOR: BuildingData = BuildingData {
    name: BuildingName::AomGenerator,
    description: "Produces AOM crystals, the main currency.",
    emoji: "💎",
    is_unique: true,
    is_starting: false,
    can_build: true,
    max_level: 20,
    starting_cell: None,
    costs: BuildingCosts {
        build_time: 1.0,
        upgrade_times: UpgradeSchedule::Derived(&AOM_UPGRADE_TIMES),
    },
    effects: BuildingEffects::AomProduction {
        base_production: 100,
        production_multiplier: 1.2,
    },
};

static PVP_ARENA: BuildingData = BuildingData {
    name: BuildingName::PvpArena,
    description: "Hosts rated 1v1 autochess duels.",
    emoji: "⚔️",
    is_unique: true,
    is_starting: false,
    can_build: true,
    max_level: 1,
    starting_cell: None,
    costs: BuildingCosts {
        build_time: 7.0,
        upgrade_times: UpgradeSchedule::Listed(&[]),
    },
    effects: BuildingEffects::PvpArena {
        rating_system: true,
        battle_logs: true,
    },
};

static DEFENSE_TOWER: BuildingData = BuildingData {
    name: BuildingName::DefenseTower,
    description: "Defends the city with your learned spells.",
    emoji: "🛡️",
    is_unique: true,
    is_starting: false,
    can_build: true,
    max_level: 5,
    starting_cell: None,
    costs: BuildingCosts {
        build_time: 12.0,
        upgrade_times: UpgradeSchedule::Listed(&[10.0, 20.0, 40.0, 80.0, 160.0]),
    },
    effects: BuildingEffects::CityDefense,
};

static ARCANE_LAB: BuildingData = BuildingData {
    name: BuildingName::ArcaneLab,
    description: "Speeds up spell research.",
    emoji: "⚗️",
    is_unique: true,
    is_starting: false,
    can_build: true,
    max_level: 15,
    starting_cell: None,
    costs: BuildingCosts {
        build_time: 3.0,
        upgrade_times: UpgradeSchedule::Derived(&ARCANE_LAB_UPGRADE_TIMES),
    },
    // adds up to 30% at level 15
    effects: BuildingEffects::ResearchSpeed {
        bonus_per_level: &[
            1.0, 1.0, 1.0, 1.0, 1.5, 1.5, 1.5, 1.5, 2.0, 2.0, 2.0, 2.0, 3.5, 3.5, 5.0,
        ],
    },
};
