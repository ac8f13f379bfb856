use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::errors::GameError;

/// The four elemental schools a player can pledge to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Faction {
    Fire,
    Water,
    Wind,
    Earth,
}

impl Faction {
    pub const ALL: [Faction; 4] = [Faction::Fire, Faction::Water, Faction::Wind, Faction::Earth];

    /// Identifier used in storage, commands and URLs.
    pub fn id(&self) -> &'static str {
        match self {
            Faction::Fire => "fire",
            Faction::Water => "water",
            Faction::Wind => "wind",
            Faction::Earth => "earth",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Faction::Fire => "🔥",
            Faction::Water => "💧",
            Faction::Wind => "🌪️",
            Faction::Earth => "🌿",
        }
    }

    /// Color used by the web client.
    pub fn color(&self) -> &'static str {
        match self {
            Faction::Fire => "red",
            Faction::Water => "blue",
            Faction::Wind => "gray",
            Faction::Earth => "brown",
        }
    }
}

impl fmt::Display for Faction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Faction::Fire => "Fire",
            Faction::Water => "Water",
            Faction::Wind => "Wind",
            Faction::Earth => "Earth",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Faction {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Faction::ALL
            .into_iter()
            .find(|f| f.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GameError::UnknownFaction(s.to_string()))
    }
}
