//! Player record and its enumerations

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ============================================================================
// ENUMS
// ============================================================================

/// Character race
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Race {
    Human,
    Dwarf,
    Elf,
    Giant,
    Orc,
    Troll,
    Hobbit,
}

impl Race {
    pub const ALL: [Race; 7] = [
        Self::Human,
        Self::Dwarf,
        Self::Elf,
        Self::Giant,
        Self::Orc,
        Self::Troll,
        Self::Hobbit,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Human => "HUMAN",
            Self::Dwarf => "DWARF",
            Self::Elf => "ELF",
            Self::Giant => "GIANT",
            Self::Orc => "ORC",
            Self::Troll => "TROLL",
            Self::Hobbit => "HOBBIT",
        }
    }
}

impl fmt::Display for Race {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Race {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|race| race.as_str() == s)
            .ok_or_else(|| format!("Unknown race: {}", s))
    }
}

/// Character profession
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Profession {
    Warrior,
    Rogue,
    Sorcerer,
    Cleric,
    Paladin,
    Nazgul,
    Warlock,
    Druid,
}

impl Profession {
    pub const ALL: [Profession; 8] = [
        Self::Warrior,
        Self::Rogue,
        Self::Sorcerer,
        Self::Cleric,
        Self::Paladin,
        Self::Nazgul,
        Self::Warlock,
        Self::Druid,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Warrior => "WARRIOR",
            Self::Rogue => "ROGUE",
            Self::Sorcerer => "SORCERER",
            Self::Cleric => "CLERIC",
            Self::Paladin => "PALADIN",
            Self::Nazgul => "NAZGUL",
            Self::Warlock => "WARLOCK",
            Self::Druid => "DRUID",
        }
    }
}

impl fmt::Display for Profession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Profession {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|profession| profession.as_str() == s)
            .ok_or_else(|| format!("Unknown profession: {}", s))
    }
}

// ============================================================================
// RECORDS
// ============================================================================

/// Stored player record
///
/// `birthday` is epoch milliseconds (UTC). `level` and `until_next_level`
/// are derived from `experience` and never accepted from callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: i64,
    pub name: String,
    pub title: String,
    pub race: Race,
    pub profession: Profession,
    pub birthday: i64,
    pub banned: bool,
    pub experience: i64,
    pub level: i64,
    pub until_next_level: i64,
}

/// Player fields ready for insertion (id assigned by the store)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPlayer {
    pub name: String,
    pub title: String,
    pub race: Race,
    pub profession: Profession,
    pub birthday: i64,
    pub banned: bool,
    pub experience: i64,
    pub level: i64,
    pub until_next_level: i64,
}

impl NewPlayer {
    /// Attach a store-assigned id
    pub fn into_player(self, id: i64) -> Player {
        Player {
            id,
            name: self.name,
            title: self.title,
            race: self.race,
            profession: self.profession,
            birthday: self.birthday,
            banned: self.banned,
            experience: self.experience,
            level: self.level,
            until_next_level: self.until_next_level,
        }
    }
}
