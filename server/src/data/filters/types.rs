//! Filter type definitions
//!
//! Closed set of filterable player fields, search operations and the typed
//! values that flow into SQL parameters.

use std::fmt;

use thiserror::Error;

use crate::data::types::{Player, Profession, Race};

/// Errors raised while building a filter specification or page request
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("Operation {operation} is not supported for field {field}")]
    UnsupportedOperation {
        field: PlayerField,
        operation: SearchOperation,
    },

    #[error("Field {field} expects a {expected} value")]
    ValueMismatch {
        field: PlayerField,
        expected: FieldKind,
    },

    #[error("Invalid value for field {field}: {value}")]
    InvalidValue { field: PlayerField, value: String },

    #[error("Unknown order: {0}")]
    UnknownOrder(String),

    #[error("Page size must be between 1 and {max}, got {size}")]
    InvalidPageSize { size: u32, max: u32 },
}

// ============================================================================
// Fields
// ============================================================================

/// Value category of a player field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Integer,
    Text,
    Enum,
    Boolean,
    Timestamp,
}

impl FieldKind {
    /// Operations that make sense for this kind of field
    pub fn supports(&self, operation: SearchOperation) -> bool {
        use SearchOperation::*;
        match self {
            Self::Text => matches!(operation, Match | Equal),
            Self::Enum | Self::Boolean => matches!(operation, Equal),
            Self::Integer => matches!(operation, Equal | GreaterThanEqual | LessThanEqual),
            Self::Timestamp => matches!(
                operation,
                Equal
                    | GreaterThanEqual
                    | LessThanEqual
                    | GreaterThanEqualDate
                    | LessThanEqualDate
            ),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Integer => "integer",
            Self::Text => "text",
            Self::Enum => "enum",
            Self::Boolean => "boolean",
            Self::Timestamp => "timestamp",
        };
        f.write_str(name)
    }
}

/// Filterable player field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerField {
    Id,
    Name,
    Title,
    Race,
    Profession,
    Birthday,
    Banned,
    Experience,
    Level,
    UntilNextLevel,
}

impl PlayerField {
    /// Column name in the `players` table
    pub const fn column(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Title => "title",
            Self::Race => "race",
            Self::Profession => "profession",
            Self::Birthday => "birthday",
            Self::Banned => "banned",
            Self::Experience => "experience",
            Self::Level => "level",
            Self::UntilNextLevel => "until_next_level",
        }
    }

    /// Column holding the case-folded text for MATCH (text fields only)
    pub const fn match_column(&self) -> &'static str {
        match self {
            Self::Name => "name_lower",
            Self::Title => "title_lower",
            other => other.column(),
        }
    }

    pub const fn kind(&self) -> FieldKind {
        match self {
            Self::Id | Self::Experience | Self::Level | Self::UntilNextLevel => FieldKind::Integer,
            Self::Name | Self::Title => FieldKind::Text,
            Self::Race | Self::Profession => FieldKind::Enum,
            Self::Banned => FieldKind::Boolean,
            Self::Birthday => FieldKind::Timestamp,
        }
    }

    /// Read this field from a player
    pub fn value_of<'a>(&self, player: &'a Player) -> FieldValue<'a> {
        match self {
            Self::Id => FieldValue::Integer(player.id),
            Self::Name => FieldValue::Text(&player.name),
            Self::Title => FieldValue::Text(&player.title),
            Self::Race => FieldValue::Text(player.race.as_str()),
            Self::Profession => FieldValue::Text(player.profession.as_str()),
            Self::Birthday => FieldValue::Timestamp(player.birthday),
            Self::Banned => FieldValue::Boolean(player.banned),
            Self::Experience => FieldValue::Integer(player.experience),
            Self::Level => FieldValue::Integer(player.level),
            Self::UntilNextLevel => FieldValue::Integer(player.until_next_level),
        }
    }
}

impl fmt::Display for PlayerField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::UntilNextLevel => "untilNextLevel",
            other => other.column(),
        };
        f.write_str(name)
    }
}

/// Field value borrowed from a player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Integer(i64),
    Text(&'a str),
    Boolean(bool),
    Timestamp(i64),
}

// ============================================================================
// Operations and operands
// ============================================================================

/// Comparison applied by a search criterion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOperation {
    /// Case-insensitive substring
    Match,
    Equal,
    GreaterThanEqual,
    LessThanEqual,
    /// Inclusive lower bound at UTC day granularity
    GreaterThanEqualDate,
    /// Inclusive upper bound at UTC day granularity
    LessThanEqualDate,
}

impl fmt::Display for SearchOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Match => "MATCH",
            Self::Equal => "EQUAL",
            Self::GreaterThanEqual => "GREATER_THAN_EQUAL",
            Self::LessThanEqual => "LESS_THAN_EQUAL",
            Self::GreaterThanEqualDate => "GREATER_THAN_EQUAL_DATE",
            Self::LessThanEqualDate => "LESS_THAN_EQUAL_DATE",
        };
        f.write_str(name)
    }
}

/// Operand of a search criterion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CriterionValue {
    Integer(i64),
    Text(String),
    Boolean(bool),
    /// Epoch milliseconds
    Timestamp(i64),
}

impl CriterionValue {
    pub(super) fn fits(&self, kind: FieldKind) -> bool {
        matches!(
            (self, kind),
            (Self::Integer(_), FieldKind::Integer)
                | (Self::Text(_), FieldKind::Text | FieldKind::Enum)
                | (Self::Boolean(_), FieldKind::Boolean)
                | (Self::Timestamp(_), FieldKind::Timestamp)
        )
    }
}

impl From<i64> for CriterionValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for CriterionValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<&str> for CriterionValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CriterionValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Race> for CriterionValue {
    fn from(value: Race) -> Self {
        Self::Text(value.as_str().to_string())
    }
}

impl From<Profession> for CriterionValue {
    fn from(value: Profession) -> Self {
        Self::Text(value.as_str().to_string())
    }
}

// ============================================================================
// SQL parameters
// ============================================================================

/// Typed SQL bind value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlValue {
    Integer(i64),
    Text(String),
    Boolean(bool),
}

/// Collects SQL parameters during query building (maintains insertion order)
#[derive(Debug, Default)]
pub struct SqlParams {
    pub values: Vec<SqlValue>,
}

impl SqlParams {
    /// Append a value and return its placeholder
    pub fn push(&mut self, value: SqlValue) -> &'static str {
        self.values.push(value);
        "?"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_kinds() {
        assert_eq!(PlayerField::Name.kind(), FieldKind::Text);
        assert_eq!(PlayerField::Race.kind(), FieldKind::Enum);
        assert_eq!(PlayerField::Banned.kind(), FieldKind::Boolean);
        assert_eq!(PlayerField::Birthday.kind(), FieldKind::Timestamp);
        assert_eq!(PlayerField::UntilNextLevel.kind(), FieldKind::Integer);
    }

    #[test]
    fn test_kind_supports() {
        assert!(FieldKind::Text.supports(SearchOperation::Match));
        assert!(!FieldKind::Integer.supports(SearchOperation::Match));
        assert!(!FieldKind::Enum.supports(SearchOperation::Match));
        assert!(!FieldKind::Integer.supports(SearchOperation::GreaterThanEqualDate));
        assert!(FieldKind::Timestamp.supports(SearchOperation::LessThanEqualDate));
        assert!(!FieldKind::Boolean.supports(SearchOperation::GreaterThanEqual));
    }

    #[test]
    fn test_field_display() {
        assert_eq!(PlayerField::UntilNextLevel.to_string(), "untilNextLevel");
        assert_eq!(PlayerField::Experience.to_string(), "experience");
        assert_eq!(PlayerField::UntilNextLevel.column(), "until_next_level");
    }

    #[test]
    fn test_value_fits() {
        assert!(CriterionValue::from(5i64).fits(FieldKind::Integer));
        assert!(CriterionValue::from("x").fits(FieldKind::Enum));
        assert!(!CriterionValue::from(5i64).fits(FieldKind::Timestamp));
        assert!(CriterionValue::Timestamp(5).fits(FieldKind::Timestamp));
        assert!(!CriterionValue::from(true).fits(FieldKind::Text));
    }

    #[test]
    fn test_sql_params_push_returns_placeholder() {
        let mut params = SqlParams::default();
        assert_eq!(params.push(SqlValue::Integer(1)), "?");
        assert_eq!(params.push(SqlValue::Text("a".into())), "?");
        assert_eq!(
            params.values,
            vec![SqlValue::Integer(1), SqlValue::Text("a".into())]
        );
    }

    #[test]
    fn test_filter_error_display() {
        let err = FilterError::UnsupportedOperation {
            field: PlayerField::Experience,
            operation: SearchOperation::Match,
        };
        assert_eq!(
            err.to_string(),
            "Operation MATCH is not supported for field experience"
        );
    }
}
