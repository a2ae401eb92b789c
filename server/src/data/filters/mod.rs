//! Player filter system
//!
//! Composable search criteria over player fields, plus ordering and paging.
//! Criteria evaluate in memory or compile to SQL with bound parameters.
//!
//! ## Usage
//!
//! ```
//! use player_registry_server::data::filters::{
//!     FilterSpecification, PlayerField, SearchCriterion, SearchOperation, SqlParams,
//! };
//!
//! let spec = FilterSpecification::new()
//!     .and(SearchCriterion::new(PlayerField::Name, "an", SearchOperation::Match).unwrap())
//!     .and(SearchCriterion::new(PlayerField::Banned, false, SearchOperation::Equal).unwrap());
//! let mut params = SqlParams::default();
//! let sql = spec.to_sql(&mut params);
//! assert_eq!(sql, r"name_lower LIKE ? ESCAPE '\' AND banned = ?");
//! ```

mod order;
mod spec;
mod types;

pub use order::{PageRequest, PlayerOrder};
pub use spec::{FilterSpecification, SearchCriterion};
pub use types::{
    CriterionValue, FieldKind, FieldValue, FilterError, PlayerField, SearchOperation, SqlParams,
    SqlValue,
};
