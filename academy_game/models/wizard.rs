use serde::{Deserialize, Serialize};

use academy_types::faction::Faction;

use super::player::Player;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wizard {
    pub id: String,
    pub name: String,
    pub faction: Faction,
    /// Ids of the learned spells this wizard casts.
    pub spells: Vec<String>,
}

impl Wizard {
    /// The wizard every city starts with.
    pub fn novice(faction: Faction, spell_id: &str) -> Self {
        Self {
            id: "wizard_1".to_string(),
            name: "Novice Mage".to_string(),
            faction,
            spells: vec![spell_id.to_string()],
        }
    }
}

impl Player {
    /// The wizard a hire would add: numbered after the current roster, knowing
    /// the lowest-tier own-school spell that is unlocked (any own-school spell
    /// otherwise).
    pub fn next_wizard(&self) -> Wizard {
        let number = self.wizards.len() + 1;

        let mut own_spells: Vec<(&String, u8)> = self
            .spells
            .get(&self.faction)
            .map(|book| book.iter().map(|(id, s)| (id, s.tier)).collect())
            .unwrap_or_default();
        own_spells.sort_by(|a, b| (a.1, a.0).cmp(&(b.1, b.0)));

        let spell = own_spells
            .iter()
            .find(|(id, _)| self.available_spells.iter().any(|a| a == *id))
            .or_else(|| own_spells.first())
            .map(|(id, _)| (*id).clone());

        Wizard {
            id: format!("wizard_{number}"),
            name: format!("Mage {number}"),
            faction: self.faction,
            spells: spell.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{PlayerFactoryOptions, player_factory};

    #[test]
    fn test_next_wizard_numbering() {
        let mut player = player_factory(PlayerFactoryOptions {
            faction: Some(Faction::Water),
            ..Default::default()
        });

        let second = player.next_wizard();
        assert_eq!(second.id, "wizard_2");
        assert_eq!(second.name, "Mage 2");
        assert_eq!(second.faction, Faction::Water);
        assert_eq!(second.spells, vec!["icicle".to_string()]);

        player.wizards.push(second);
        assert_eq!(player.next_wizard().id, "wizard_3");
    }

    #[test]
    fn test_next_wizard_prefers_available_spell() {
        let mut player = player_factory(PlayerFactoryOptions {
            faction: Some(Faction::Fire),
            ..Default::default()
        });
        player.available_spells.clear();
        assert_eq!(player.next_wizard().spells, vec!["spark".to_string()]);

        player.spells.entry(Faction::Fire).or_default().clear();
        assert!(player.next_wizard().spells.is_empty());
    }
}
