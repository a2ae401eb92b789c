//! SQLite repositories
//!
//! Types (Player, NewPlayer) should be imported from `crate::data::types`.

pub mod player;

pub use player::{count_players, delete_player, find_player, find_players, insert_player, save_player};
