//! All-or-nothing partial update of a player
//!
//! `PlayerUpdate::builder()` records each present field after validating it.
//! The first invalid field makes `build()` fail, so nothing is applied.
//! `apply` writes every recorded field and recomputes the derived level
//! fields in one step.

use crate::data::types::{Player, Profession, Race};

use super::error::PlayerError;
use super::level::LevelProgress;
use super::validation::{
    BIRTH_YEAR_MAX, BIRTH_YEAR_MIN, EXPERIENCE_MAX, NAME_MAX_CHARS, TITLE_MAX_CHARS,
    is_valid_birthday, is_valid_experience, is_valid_name, is_valid_title,
};

/// Validated set of field changes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerUpdate {
    name: Option<String>,
    title: Option<String>,
    race: Option<Race>,
    profession: Option<Profession>,
    birthday: Option<i64>,
    banned: Option<bool>,
    experience: Option<i64>,
}

impl PlayerUpdate {
    pub fn builder() -> PlayerUpdateBuilder {
        PlayerUpdateBuilder::default()
    }

    /// True when no field would change
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Commit all recorded fields and recompute level fields
    pub fn apply(self, player: &mut Player) {
        if let Some(name) = self.name {
            player.name = name;
        }
        if let Some(title) = self.title {
            player.title = title;
        }
        if let Some(race) = self.race {
            player.race = race;
        }
        if let Some(profession) = self.profession {
            player.profession = profession;
        }
        if let Some(birthday) = self.birthday {
            player.birthday = birthday;
        }
        if let Some(banned) = self.banned {
            player.banned = banned;
        }
        if let Some(experience) = self.experience {
            player.experience = experience;
        }

        let progress = LevelProgress::from_experience(player.experience);
        player.level = progress.level;
        player.until_next_level = progress.until_next_level;
    }
}

/// Builder collecting validated changes; keeps the first validation error
#[derive(Debug, Default)]
pub struct PlayerUpdateBuilder {
    update: PlayerUpdate,
    error: Option<String>,
}

impl PlayerUpdateBuilder {
    fn reject(&mut self, message: String) {
        if self.error.is_none() {
            self.error = Some(message);
        }
    }

    pub fn name(mut self, name: Option<String>) -> Self {
        if let Some(name) = name {
            if is_valid_name(Some(&name)) {
                self.update.name = Some(name);
            } else {
                self.reject(format!("name must be 1-{} characters", NAME_MAX_CHARS));
            }
        }
        self
    }

    pub fn title(mut self, title: Option<String>) -> Self {
        if let Some(title) = title {
            if is_valid_title(Some(&title)) {
                self.update.title = Some(title);
            } else {
                self.reject(format!("title must be 1-{} characters", TITLE_MAX_CHARS));
            }
        }
        self
    }

    pub fn race(mut self, race: Option<Race>) -> Self {
        if race.is_some() {
            self.update.race = race;
        }
        self
    }

    pub fn profession(mut self, profession: Option<Profession>) -> Self {
        if profession.is_some() {
            self.update.profession = profession;
        }
        self
    }

    pub fn birthday(mut self, birthday: Option<i64>) -> Self {
        if birthday.is_some() {
            if is_valid_birthday(birthday) {
                self.update.birthday = birthday;
            } else {
                self.reject(format!(
                    "birthday year must be between {} and {}",
                    BIRTH_YEAR_MIN, BIRTH_YEAR_MAX
                ));
            }
        }
        self
    }

    pub fn banned(mut self, banned: Option<bool>) -> Self {
        if banned.is_some() {
            self.update.banned = banned;
        }
        self
    }

    pub fn experience(mut self, experience: Option<i64>) -> Self {
        if experience.is_some() {
            if is_valid_experience(experience) {
                self.update.experience = experience;
            } else {
                self.reject(format!("experience must be between 0 and {}", EXPERIENCE_MAX));
            }
        }
        self
    }

    pub fn build(self) -> Result<PlayerUpdate, PlayerError> {
        match self.error {
            Some(message) => Err(PlayerError::InvalidParameters(message)),
            None => Ok(self.update),
        }
    }
}
