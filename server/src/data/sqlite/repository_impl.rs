//! PlayerRepository trait implementation for SQLite

use std::sync::Arc;

use async_trait::async_trait;

use crate::data::error::DataError;
use crate::data::filters::{FilterSpecification, PageRequest};
use crate::data::traits::PlayerRepository;
use crate::data::types::{NewPlayer, Player};

use super::SqliteService;
use super::repositories::player;

#[async_trait]
impl PlayerRepository for Arc<SqliteService> {
    async fn find_by_id(&self, id: i64) -> Result<Option<Player>, DataError> {
        player::find_player(self.pool(), id)
            .await
            .map_err(Into::into)
    }

    async fn find_all(
        &self,
        spec: &FilterSpecification,
        page: Option<&PageRequest>,
    ) -> Result<Vec<Player>, DataError> {
        player::find_players(self.pool(), spec, page)
            .await
            .map_err(Into::into)
    }

    async fn count(&self, spec: &FilterSpecification) -> Result<u64, DataError> {
        player::count_players(self.pool(), spec)
            .await
            .map_err(Into::into)
    }

    async fn insert(&self, new_player: &NewPlayer) -> Result<Player, DataError> {
        player::insert_player(self.pool(), new_player)
            .await
            .map_err(Into::into)
    }

    async fn save(&self, updated: &Player) -> Result<Option<Player>, DataError> {
        player::save_player(self.pool(), updated)
            .await
            .map_err(Into::into)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, DataError> {
        player::delete_player(self.pool(), id)
            .await
            .map_err(Into::into)
    }
}
