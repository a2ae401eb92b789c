//! Search criteria and their AND-composition
//!
//! A `FilterSpecification` evaluates either against an in-memory `Player`
//! (`matches`) or compiles to a SQL `WHERE` fragment (`to_sql`). Both paths
//! produce the same truth value for the same record.

use std::str::FromStr;

use crate::data::types::{Player, Profession, Race};
use crate::utils::sql::{escape_like_pattern, fold_case};
use crate::utils::time::{MILLIS_PER_DAY, day_number};

use super::types::{
    CriterionValue, FieldKind, FieldValue, FilterError, PlayerField, SearchOperation, SqlParams,
    SqlValue,
};

/// Single (field, value, operation) predicate
///
/// Only constructible through [`SearchCriterion::new`], which rejects
/// combinations that cannot be evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCriterion {
    field: PlayerField,
    value: CriterionValue,
    operation: SearchOperation,
}

impl SearchCriterion {
    pub fn new(
        field: PlayerField,
        value: impl Into<CriterionValue>,
        operation: SearchOperation,
    ) -> Result<Self, FilterError> {
        let value = value.into();
        let kind = field.kind();

        if !value.fits(kind) {
            return Err(FilterError::ValueMismatch {
                field,
                expected: kind,
            });
        }
        if !kind.supports(operation) {
            return Err(FilterError::UnsupportedOperation { field, operation });
        }
        if let (FieldKind::Enum, CriterionValue::Text(text)) = (kind, &value) {
            let known = match field {
                PlayerField::Race => Race::from_str(text).is_ok(),
                PlayerField::Profession => Profession::from_str(text).is_ok(),
                _ => false,
            };
            if !known {
                return Err(FilterError::InvalidValue {
                    field,
                    value: text.clone(),
                });
            }
        }

        Ok(Self {
            field,
            value,
            operation,
        })
    }

    pub fn field(&self) -> PlayerField {
        self.field
    }

    pub fn operation(&self) -> SearchOperation {
        self.operation
    }

    pub fn value(&self) -> &CriterionValue {
        &self.value
    }

    /// Evaluate against a player
    pub fn matches(&self, player: &Player) -> bool {
        use SearchOperation::*;

        match (self.operation, self.field.value_of(player), &self.value) {
            (Match, FieldValue::Text(actual), CriterionValue::Text(needle)) => {
                fold_case(actual).contains(&fold_case(needle))
            }
            (Equal, FieldValue::Text(actual), CriterionValue::Text(expected)) => {
                actual == expected
            }
            (Equal, FieldValue::Boolean(actual), CriterionValue::Boolean(expected)) => {
                actual == *expected
            }
            (Equal, FieldValue::Integer(actual), CriterionValue::Integer(bound))
            | (Equal, FieldValue::Timestamp(actual), CriterionValue::Timestamp(bound)) => {
                actual == *bound
            }
            (GreaterThanEqual, FieldValue::Integer(actual), CriterionValue::Integer(bound))
            | (GreaterThanEqual, FieldValue::Timestamp(actual), CriterionValue::Timestamp(bound)) => {
                actual >= *bound
            }
            (LessThanEqual, FieldValue::Integer(actual), CriterionValue::Integer(bound))
            | (LessThanEqual, FieldValue::Timestamp(actual), CriterionValue::Timestamp(bound)) => {
                actual <= *bound
            }
            (
                GreaterThanEqualDate,
                FieldValue::Timestamp(actual),
                CriterionValue::Timestamp(bound),
            ) => day_number(actual) >= day_number(*bound),
            (
                LessThanEqualDate,
                FieldValue::Timestamp(actual),
                CriterionValue::Timestamp(bound),
            ) => day_number(actual) <= day_number(*bound),
            // Unreachable for criteria built through `new`
            _ => false,
        }
    }

    /// Generate a SQL predicate with `?` placeholders, pushing bind values
    pub fn to_sql(&self, params: &mut SqlParams) -> String {
        use SearchOperation::*;

        let col = self.field.column();
        match (self.operation, &self.value) {
            (Match, CriterionValue::Text(needle)) => {
                let pattern = format!("%{}%", escape_like_pattern(&fold_case(needle)));
                format!(
                    "{} LIKE {} ESCAPE '\\'",
                    self.field.match_column(),
                    params.push(SqlValue::Text(pattern))
                )
            }
            (GreaterThanEqualDate, CriterionValue::Timestamp(bound)) => {
                let day_start = day_number(*bound).saturating_mul(MILLIS_PER_DAY);
                format!("{} >= {}", col, params.push(SqlValue::Integer(day_start)))
            }
            (LessThanEqualDate, CriterionValue::Timestamp(bound)) => {
                let next_day_start = day_number(*bound)
                    .saturating_add(1)
                    .saturating_mul(MILLIS_PER_DAY);
                format!(
                    "{} < {}",
                    col,
                    params.push(SqlValue::Integer(next_day_start))
                )
            }
            (operation, value) => {
                let op = match operation {
                    GreaterThanEqual => ">=",
                    LessThanEqual => "<=",
                    _ => "=",
                };
                let bind = match value {
                    CriterionValue::Integer(v) | CriterionValue::Timestamp(v) => {
                        SqlValue::Integer(*v)
                    }
                    CriterionValue::Text(v) => SqlValue::Text(v.clone()),
                    CriterionValue::Boolean(v) => SqlValue::Boolean(*v),
                };
                format!("{} {} {}", col, op, params.push(bind))
            }
        }
    }
}

/// Ordered AND-composition of search criteria; empty matches everything
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpecification {
    criteria: Vec<SearchCriterion>,
}

impl FilterSpecification {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a criterion (builder style)
    pub fn and(mut self, criterion: SearchCriterion) -> Self {
        self.criteria.push(criterion);
        self
    }

    pub fn push(&mut self, criterion: SearchCriterion) {
        self.criteria.push(criterion);
    }

    pub fn criteria(&self) -> &[SearchCriterion] {
        &self.criteria
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    pub fn matches(&self, player: &Player) -> bool {
        self.criteria.iter().all(|c| c.matches(player))
    }

    /// Generate the `WHERE` clause body, `1=1` when empty
    pub fn to_sql(&self, params: &mut SqlParams) -> String {
        if self.criteria.is_empty() {
            return "1=1".to_string();
        }
        self.criteria
            .iter()
            .map(|c| c.to_sql(params))
            .collect::<Vec<_>>()
            .join(" AND ")
    }
}

impl FromIterator<SearchCriterion> for FilterSpecification {
    fn from_iter<I: IntoIterator<Item = SearchCriterion>>(iter: I) -> Self {
        Self {
            criteria: iter.into_iter().collect(),
        }
    }
}
