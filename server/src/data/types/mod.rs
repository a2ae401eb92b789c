//! Shared data types for all player store backends

mod player;

pub use player::{NewPlayer, Player, Profession, Race};
