//! Domain logic for the player registry
//!
//! - `players` - Validation, level progression and player orchestration

pub mod players;

pub use players::{PlayerError, PlayerService};
