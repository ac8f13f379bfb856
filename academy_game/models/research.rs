use serde::{Deserialize, Serialize};
use std::fmt;

use academy_types::{errors::GameError, faction::Faction};

use super::{
    player::{LearnedSpell, Player},
    spells::{MAX_SPELL_LEVEL, SpellEntry, find_spell},
};

/// The research slot of a city. `Default` is the inactive sentinel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Research {
    pub active: bool,
    pub spell: Option<String>,
    pub target_level: Option<u8>,
    /// Remaining seconds.
    pub time_left: f64,
    /// Whether the spell belongs to the player's own school.
    pub faction_bonus: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ResearchAction {
    Learn { spell_id: String },
    Upgrade { spell_id: String },
}

impl ResearchAction {
    pub fn spell_id(&self) -> &str {
        match self {
            ResearchAction::Learn { spell_id } | ResearchAction::Upgrade { spell_id } => spell_id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ResearchPlan {
    pub spell: SpellEntry,
    pub target_level: u8,
    pub faction_bonus: bool,
    /// Seconds until completion.
    pub duration: f64,
}

impl ResearchPlan {
    pub fn is_instant(&self) -> bool {
        self.duration <= 0.0
    }

    pub fn to_record(&self) -> Research {
        Research {
            active: true,
            spell: Some(self.spell.data.id.to_string()),
            target_level: Some(self.target_level),
            time_left: self.duration,
            faction_bonus: self.faction_bonus,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResearchResult {
    pub spell_id: String,
    pub spell_name: String,
    pub level: u8,
    pub completed: bool,
}

impl fmt::Display for ResearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.completed, self.level) {
            (true, 1) => write!(f, "'{}' learned!", self.spell_name),
            (true, level) => write!(f, "'{}' improved to level {level}!", self.spell_name),
            (false, level) => write!(
                f,
                "Research of '{}' (level {level}) started.",
                self.spell_name
            ),
        }
    }
}

/// Effective research time, in seconds. Every research currently resolves instantly.
pub fn get_research_time(_faction: Faction, _tier: u8, _level: u8) -> f64 {
    0.0
}

impl Player {
    pub fn plan_research(&self, action: &ResearchAction) -> Result<ResearchPlan, GameError> {
        if self.research.active {
            return Err(GameError::ResearchBusy);
        }
        let spell = find_spell(action.spell_id())?;
        let learned = self.learned_spell(spell.faction, spell.data.id);

        let target_level = match (action, learned) {
            (ResearchAction::Learn { spell_id }, Some(_)) => {
                return Err(GameError::SpellAlreadyLearned(spell_id.clone()));
            }
            (ResearchAction::Learn { .. }, None) => 1,
            (ResearchAction::Upgrade { spell_id }, None) => {
                return Err(GameError::SpellNotLearned(spell_id.clone()));
            }
            (ResearchAction::Upgrade { .. }, Some(known)) if known.level >= MAX_SPELL_LEVEL => {
                return Err(GameError::SpellMaxLevelReached {
                    spell: known.name.clone(),
                    max_level: MAX_SPELL_LEVEL,
                });
            }
            (ResearchAction::Upgrade { .. }, Some(known)) => known.level + 1,
        };

        Ok(ResearchPlan {
            spell,
            target_level,
            faction_bonus: spell.faction == self.faction,
            duration: get_research_time(spell.faction, spell.tier, target_level),
        })
    }

    /// Applies a research plan: instant plans complete right away, the others
    /// occupy the research slot.
    pub fn start_research(&mut self, plan: &ResearchPlan) -> ResearchResult {
        let completed = plan.is_instant();
        if completed {
            self.finish_research(plan.spell, plan.target_level);
        } else {
            self.research = plan.to_record();
        }
        ResearchResult {
            spell_id: plan.spell.data.id.to_string(),
            spell_name: plan.spell.data.name.to_string(),
            level: plan.target_level,
            completed,
        }
    }

    pub fn finish_research(&mut self, spell: SpellEntry, level: u8) {
        self.spells.entry(spell.faction).or_default().insert(
            spell.data.id.to_string(),
            LearnedSpell {
                name: spell.data.name.to_string(),
                level,
                tier: spell.tier,
            },
        );
        if !self.available_spells.iter().any(|id| id == spell.data.id) {
            self.available_spells.push(spell.data.id.to_string());
        }
        self.research = Research::default();
    }

    pub fn cancel_research(&mut self) -> Result<(), GameError> {
        if !self.research.active {
            return Err(GameError::NoActiveResearch);
        }
        self.research = Research::default();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{PlayerFactoryOptions, player_factory};

    fn fire_player() -> Player {
        player_factory(PlayerFactoryOptions {
            faction: Some(Faction::Fire),
            ..Default::default()
        })
    }

    fn learn(id: &str) -> ResearchAction {
        ResearchAction::Learn {
            spell_id: id.to_string(),
        }
    }

    fn upgrade(id: &str) -> ResearchAction {
        ResearchAction::Upgrade {
            spell_id: id.to_string(),
        }
    }

    #[test]
    fn test_upgrade_known_spell_completes_instantly() {
        let mut player = fire_player();
        let plan = player.plan_research(&upgrade("spark")).unwrap();
        assert_eq!(plan.target_level, 2);
        assert!(plan.faction_bonus);

        let result = player.start_research(&plan);
        assert!(result.completed);
        assert_eq!(result.to_string(), "'Spark' improved to level 2!");
        assert_eq!(player.learned_spell(Faction::Fire, "spark").unwrap().level, 2);
        assert_eq!(player.research, Research::default());
    }

    #[test]
    fn test_learn_foreign_spell() {
        let mut player = fire_player();
        let plan = player.plan_research(&learn("blizzard")).unwrap();
        assert_eq!(plan.target_level, 1);
        assert!(!plan.faction_bonus);

        let result = player.start_research(&plan);
        assert_eq!(result.to_string(), "'Blizzard' learned!");
        let blizzard = player.learned_spell(Faction::Water, "blizzard").unwrap();
        assert_eq!((blizzard.level, blizzard.tier), (1, 4));
        assert!(player.available_spells.contains(&"blizzard".to_string()));
    }

    #[test]
    fn test_learn_and_upgrade_guards() {
        let player = fire_player();
        assert!(matches!(
            player.plan_research(&learn("spark")),
            Err(GameError::SpellAlreadyLearned(_))
        ));
        assert!(matches!(
            player.plan_research(&upgrade("meteor")),
            Err(GameError::SpellNotLearned(_))
        ));
        assert!(matches!(
            player.plan_research(&learn("nope")),
            Err(GameError::SpellNotFound(_))
        ));
    }

    #[test]
    fn test_spell_level_is_capped() {
        let mut player = fire_player();
        for _ in 1..MAX_SPELL_LEVEL {
            let plan = player.plan_research(&upgrade("spark")).unwrap();
            player.start_research(&plan);
        }
        assert_eq!(
            player.learned_spell(Faction::Fire, "spark").unwrap().level,
            MAX_SPELL_LEVEL
        );
        assert!(matches!(
            player.plan_research(&upgrade("spark")),
            Err(GameError::SpellMaxLevelReached { max_level: 5, .. })
        ));
    }

    #[test]
    fn test_busy_research_and_cancel() {
        let mut player = fire_player();
        let mut plan = player.plan_research(&learn("firebolt")).unwrap();
        plan.duration = 60.0;

        let result = player.start_research(&plan);
        assert!(!result.completed);
        assert!(player.research.active);
        assert_eq!(player.research.spell.as_deref(), Some("firebolt"));
        assert!(matches!(
            player.plan_research(&upgrade("spark")),
            Err(GameError::ResearchBusy)
        ));

        player.cancel_research().unwrap();
        assert_eq!(player.research, Research::default());
        assert!(player.learned_spell(Faction::Fire, "firebolt").is_none());
        assert!(matches!(
            player.cancel_research(),
            Err(GameError::NoActiveResearch)
        ));
    }
}
