//! Caller-supplied player fields
//!
//! Every field is optional on the wire. Creation requires the full set;
//! updates take whichever fields are present.

use crate::data::types::{NewPlayer, Profession, Race};

use super::error::PlayerError;
use super::level::LevelProgress;
use super::update::PlayerUpdate;
use super::validation::{is_valid_birthday, is_valid_experience, is_valid_name, is_valid_title};

/// Player fields as received from a caller; derived fields are never accepted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerInput {
    pub name: Option<String>,
    pub title: Option<String>,
    pub race: Option<Race>,
    pub profession: Option<Profession>,
    pub birthday: Option<i64>,
    pub banned: Option<bool>,
    pub experience: Option<i64>,
}

impl PlayerInput {
    /// Validate a complete player for creation. `banned` defaults to false.
    pub fn into_new_player(self) -> Result<NewPlayer, PlayerError> {
        let valid = is_valid_name(self.name.as_deref())
            && is_valid_title(self.title.as_deref())
            && is_valid_experience(self.experience)
            && is_valid_birthday(self.birthday);

        match (
            valid,
            self.name,
            self.title,
            self.race,
            self.profession,
            self.birthday,
            self.experience,
        ) {
            (
                true,
                Some(name),
                Some(title),
                Some(race),
                Some(profession),
                Some(birthday),
                Some(experience),
            ) => {
                let progress = LevelProgress::from_experience(experience);
                Ok(NewPlayer {
                    name,
                    title,
                    race,
                    profession,
                    birthday,
                    banned: self.banned.unwrap_or(false),
                    experience,
                    level: progress.level,
                    until_next_level: progress.until_next_level,
                })
            }
            _ => Err(PlayerError::invalid(
                "name, title, race, profession, birthday and experience are required and must be valid",
            )),
        }
    }

    /// Validate present fields into an all-or-nothing update
    pub fn into_update(self) -> Result<PlayerUpdate, PlayerError> {
        PlayerUpdate::builder()
            .name(self.name)
            .title(self.title)
            .race(self.race)
            .profession(self.profession)
            .birthday(self.birthday)
            .banned(self.banned)
            .experience(self.experience)
            .build()
    }
}
