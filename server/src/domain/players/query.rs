//! Listing filters for players
//!
//! Maps the optional filter parameters onto a `FilterSpecification` in a
//! fixed criterion order.

use crate::data::filters::{
    CriterionValue, FilterError, FilterSpecification, PlayerField, SearchCriterion,
    SearchOperation,
};
use crate::data::types::{Profession, Race};

/// Optional listing filters; absent fields do not constrain the result
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerQuery {
    pub name: Option<String>,
    pub title: Option<String>,
    pub race: Option<Race>,
    pub profession: Option<Profession>,
    /// Birthday on or after this UTC day (epoch ms)
    pub after: Option<i64>,
    /// Birthday on or before this UTC day (epoch ms)
    pub before: Option<i64>,
    pub banned: Option<bool>,
    pub min_experience: Option<i64>,
    pub max_experience: Option<i64>,
    pub min_level: Option<i64>,
    pub max_level: Option<i64>,
}

impl PlayerQuery {
    /// Build the AND-composed specification
    pub fn to_specification(&self) -> Result<FilterSpecification, FilterError> {
        use SearchOperation::*;

        let candidates: [(PlayerField, Option<CriterionValue>, SearchOperation); 11] = [
            (PlayerField::Name, self.name.clone().map(Into::into), Match),
            (PlayerField::Title, self.title.clone().map(Into::into), Match),
            (PlayerField::Race, self.race.map(Into::into), Equal),
            (PlayerField::Profession, self.profession.map(Into::into), Equal),
            (
                PlayerField::Birthday,
                self.after.map(CriterionValue::Timestamp),
                GreaterThanEqualDate,
            ),
            (
                PlayerField::Birthday,
                self.before.map(CriterionValue::Timestamp),
                LessThanEqualDate,
            ),
            (PlayerField::Banned, self.banned.map(Into::into), Equal),
            (
                PlayerField::Experience,
                self.min_experience.map(Into::into),
                GreaterThanEqual,
            ),
            (
                PlayerField::Experience,
                self.max_experience.map(Into::into),
                LessThanEqual,
            ),
            (
                PlayerField::Level,
                self.min_level.map(Into::into),
                GreaterThanEqual,
            ),
            (
                PlayerField::Level,
                self.max_level.map(Into::into),
                LessThanEqual,
            ),
        ];

        candidates
            .into_iter()
            .filter_map(|(field, value, op)| value.map(|v| SearchCriterion::new(field, v, op)))
            .collect()
    }
}
