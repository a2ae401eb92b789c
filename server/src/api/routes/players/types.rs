//! Player API types

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::types::{default_page_number, default_page_size, validate_page_size};
use crate::data::filters::{PageRequest, PlayerOrder};
use crate::data::types::{Profession, Race};
use crate::domain::PlayerError;
use crate::domain::players::{PlayerInput, PlayerQuery};

/// Query params for listing players
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListPlayersQuery {
    /// Case-insensitive substring of the name
    pub name: Option<String>,
    /// Case-insensitive substring of the title
    pub title: Option<String>,
    pub race: Option<Race>,
    pub profession: Option<Profession>,
    /// Born on or after this UTC day (epoch ms)
    pub after: Option<i64>,
    /// Born on or before this UTC day (epoch ms)
    pub before: Option<i64>,
    pub banned: Option<bool>,
    pub min_experience: Option<i64>,
    pub max_experience: Option<i64>,
    pub min_level: Option<i64>,
    pub max_level: Option<i64>,

    /// ID, NAME, EXPERIENCE, BIRTHDAY or LEVEL (default ID)
    pub order: Option<String>,

    #[serde(default = "default_page_number")]
    pub page_number: u32,

    #[serde(default = "default_page_size")]
    #[validate(custom(function = "validate_page_size"))]
    pub page_size: u32,
}

impl ListPlayersQuery {
    pub fn filters(&self) -> PlayerQuery {
        PlayerQuery {
            name: self.name.clone(),
            title: self.title.clone(),
            race: self.race,
            profession: self.profession,
            after: self.after,
            before: self.before,
            banned: self.banned,
            min_experience: self.min_experience,
            max_experience: self.max_experience,
            min_level: self.min_level,
            max_level: self.max_level,
        }
    }

    pub fn page_request(&self) -> Result<PageRequest, PlayerError> {
        let order = match self.order.as_deref() {
            Some(raw) => raw.parse::<PlayerOrder>()?,
            None => PlayerOrder::default(),
        };
        Ok(PageRequest::new(order, self.page_number, self.page_size)?)
    }
}

/// Query params for counting players
///
/// Filters only. Paging and order parameters are not part of this query
/// and are ignored if sent.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CountPlayersQuery {
    pub name: Option<String>,
    pub title: Option<String>,
    pub race: Option<Race>,
    pub profession: Option<Profession>,
    pub after: Option<i64>,
    pub before: Option<i64>,
    pub banned: Option<bool>,
    pub min_experience: Option<i64>,
    pub max_experience: Option<i64>,
    pub min_level: Option<i64>,
    pub max_level: Option<i64>,
}

impl CountPlayersQuery {
    pub fn filters(self) -> PlayerQuery {
        PlayerQuery {
            name: self.name,
            title: self.title,
            race: self.race,
            profession: self.profession,
            after: self.after,
            before: self.before,
            banned: self.banned,
            min_experience: self.min_experience,
            max_experience: self.max_experience,
            min_level: self.min_level,
            max_level: self.max_level,
        }
    }
}

/// Request body for creating or updating a player
///
/// Creation requires every field except `banned`. Updates apply only the
/// fields present. `level` and `untilNextLevel` are derived and ignored if sent.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerPayload {
    pub name: Option<String>,
    pub title: Option<String>,
    pub race: Option<Race>,
    pub profession: Option<Profession>,
    /// Epoch milliseconds
    pub birthday: Option<i64>,
    pub banned: Option<bool>,
    pub experience: Option<i64>,
}

impl From<PlayerPayload> for PlayerInput {
    fn from(body: PlayerPayload) -> Self {
        Self {
            name: body.name,
            title: body.title,
            race: body.race,
            profession: body.profession,
            birthday: body.birthday,
            banned: body.banned,
            experience: body.experience,
        }
    }
}
