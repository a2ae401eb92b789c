//! Sort order and paging for player listings

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::core::constants::MAX_PAGE_SIZE;
use crate::data::types::Player;

use super::types::{FilterError, PlayerField};

/// Listing sort key; always ascending with id as tiebreaker
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlayerOrder {
    #[default]
    Id,
    Name,
    Experience,
    Birthday,
    Level,
}

impl PlayerOrder {
    pub const fn field(&self) -> PlayerField {
        match self {
            Self::Id => PlayerField::Id,
            Self::Name => PlayerField::Name,
            Self::Experience => PlayerField::Experience,
            Self::Birthday => PlayerField::Birthday,
            Self::Level => PlayerField::Level,
        }
    }

    /// `ORDER BY` body
    pub fn to_sql(&self) -> String {
        match self {
            Self::Id => "id ASC".to_string(),
            other => format!("{} ASC, id ASC", other.field().column()),
        }
    }

    /// Compare two players the same way `to_sql` orders rows
    pub fn compare(&self, a: &Player, b: &Player) -> Ordering {
        let primary = match self {
            Self::Id => Ordering::Equal,
            Self::Name => a.name.cmp(&b.name),
            Self::Experience => a.experience.cmp(&b.experience),
            Self::Birthday => a.birthday.cmp(&b.birthday),
            Self::Level => a.level.cmp(&b.level),
        };
        primary.then_with(|| a.id.cmp(&b.id))
    }
}

impl fmt::Display for PlayerOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Id => "ID",
            Self::Name => "NAME",
            Self::Experience => "EXPERIENCE",
            Self::Birthday => "BIRTHDAY",
            Self::Level => "LEVEL",
        };
        f.write_str(name)
    }
}

impl FromStr for PlayerOrder {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ID" => Ok(Self::Id),
            "NAME" => Ok(Self::Name),
            "EXPERIENCE" => Ok(Self::Experience),
            "BIRTHDAY" => Ok(Self::Birthday),
            "LEVEL" => Ok(Self::Level),
            _ => Err(FilterError::UnknownOrder(s.to_string())),
        }
    }
}

/// Zero-based page of an ordered listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    order: PlayerOrder,
    page_number: u32,
    page_size: u32,
}

impl PageRequest {
    pub fn new(order: PlayerOrder, page_number: u32, page_size: u32) -> Result<Self, FilterError> {
        if page_size == 0 || page_size > MAX_PAGE_SIZE {
            return Err(FilterError::InvalidPageSize {
                size: page_size,
                max: MAX_PAGE_SIZE,
            });
        }
        Ok(Self {
            order,
            page_number,
            page_size,
        })
    }

    pub fn order(&self) -> PlayerOrder {
        self.order
    }

    pub fn page_number(&self) -> u32 {
        self.page_number
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page_number) * u64::from(self.page_size)
    }
}
