//! Player management
//!
//! - `validation` - Field rules for names, titles, experience and birthdays
//! - `level` - Level and experience-to-next-level calculation
//! - `input` - Caller-supplied fields for create and update
//! - `update` - All-or-nothing partial update builder
//! - `query` - Listing filters mapped to a filter specification
//! - `service` - Orchestration over the player store

mod error;
mod input;
pub mod level;
mod query;
mod service;
mod update;
pub mod validation;

pub use error::PlayerError;
pub use input::PlayerInput;
pub use level::LevelProgress;
pub use query::PlayerQuery;
pub use service::PlayerService;
pub use update::{PlayerUpdate, PlayerUpdateBuilder};
