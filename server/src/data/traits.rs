//! Repository trait for player store backends
//!
//! Each backend (SQLite, in-memory) implements this trait so the domain
//! layer stays backend-agnostic.

use async_trait::async_trait;

use crate::data::error::DataError;
use crate::data::filters::{FilterSpecification, PageRequest};
use crate::data::types::{NewPlayer, Player};

/// Generic persistent store for player records
#[async_trait]
pub trait PlayerRepository: Send + Sync {
    /// Get a player by id
    async fn find_by_id(&self, id: i64) -> Result<Option<Player>, DataError>;

    /// Players matching the specification.
    ///
    /// With a page, results follow its order and window; without one, all
    /// matches are returned ordered by id.
    async fn find_all(
        &self,
        spec: &FilterSpecification,
        page: Option<&PageRequest>,
    ) -> Result<Vec<Player>, DataError>;

    /// Number of players matching the specification
    async fn count(&self, spec: &FilterSpecification) -> Result<u64, DataError>;

    /// Insert a new player and return it with its assigned id
    async fn insert(&self, player: &NewPlayer) -> Result<Player, DataError>;

    /// Replace an existing player as one write.
    /// Returns `None` if no player with that id exists.
    async fn save(&self, player: &Player) -> Result<Option<Player>, DataError>;

    /// Delete a player. Returns true if a row was removed.
    async fn delete_by_id(&self, id: i64) -> Result<bool, DataError>;
}
