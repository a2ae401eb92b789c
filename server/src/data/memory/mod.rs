//! In-memory player store
//!
//! Volatile backend for local development and tests:
//! - Process exit = all players lost (no persistence)
//! - Ids come from a monotonic counter and are never reused
//!
//! Filters are evaluated with `FilterSpecification::matches`, so results
//! agree with the SQLite backend for the same specification.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::data::error::DataError;
use crate::data::filters::{FilterSpecification, PageRequest};
use crate::data::traits::PlayerRepository;
use crate::data::types::{NewPlayer, Player};

struct MemoryState {
    players: BTreeMap<i64, Player>,
    next_id: i64,
}

impl Default for MemoryState {
    fn default() -> Self {
        Self {
            players: BTreeMap::new(),
            next_id: 1,
        }
    }
}

/// In-memory player store guarded by a read-write lock
#[derive(Default)]
pub struct MemoryStore {
    state: RwLock<MemoryState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl MemoryStore {
    fn len(&self) -> usize {
        self.state.read().players.len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl PlayerRepository for Arc<MemoryStore> {
    async fn find_by_id(&self, id: i64) -> Result<Option<Player>, DataError> {
        Ok(self.state.read().players.get(&id).cloned())
    }

    async fn find_all(
        &self,
        spec: &FilterSpecification,
        page: Option<&PageRequest>,
    ) -> Result<Vec<Player>, DataError> {
        let mut matched: Vec<Player> = self
            .state
            .read()
            .players
            .values()
            .filter(|p| spec.matches(p))
            .cloned()
            .collect();

        let Some(page) = page else {
            return Ok(matched);
        };

        let order = page.order();
        matched.sort_by(|a, b| order.compare(a, b));

        let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        Ok(matched
            .into_iter()
            .skip(offset)
            .take(page.page_size() as usize)
            .collect())
    }

    async fn count(&self, spec: &FilterSpecification) -> Result<u64, DataError> {
        let count = self
            .state
            .read()
            .players
            .values()
            .filter(|p| spec.matches(p))
            .count();
        Ok(count as u64)
    }

    async fn insert(&self, new_player: &NewPlayer) -> Result<Player, DataError> {
        let mut state = self.state.write();
        let id = state.next_id;
        state.next_id += 1;

        let player = new_player.clone().into_player(id);
        state.players.insert(id, player.clone());
        tracing::debug!(id, name = %player.name, "Player inserted");
        Ok(player)
    }

    async fn save(&self, updated: &Player) -> Result<Option<Player>, DataError> {
        let mut state = self.state.write();
        match state.players.get_mut(&updated.id) {
            Some(slot) => {
                *slot = updated.clone();
                Ok(Some(updated.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, DataError> {
        Ok(self.state.write().players.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filters::{PlayerField, PlayerOrder, SearchCriterion, SearchOperation};
    use crate::data::types::{Profession, Race};

    fn new_player(name: &str, experience: i64) -> NewPlayer {
        NewPlayer {
            name: name.to_string(),
            title: "Scout".to_string(),
            race: Race::Hobbit,
            profession: Profession::Rogue,
            birthday: 1_262_304_000_000,
            banned: false,
            experience,
            level: 0,
            until_next_level: 100 - experience,
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_increasing_ids() {
        let store = Arc::new(MemoryStore::new());
        let a = store.insert(&new_player("Frodo", 0)).await.unwrap();
        let b = store.insert(&new_player("Sam", 0)).await.unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(store.len(), 2);
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete() {
        let store = Arc::new(MemoryStore::new());
        let a = store.insert(&new_player("Frodo", 0)).await.unwrap();
        assert!(store.delete_by_id(a.id).await.unwrap());
        assert!(!store.delete_by_id(a.id).await.unwrap());
        assert!(store.is_empty());

        let b = store.insert(&new_player("Sam", 0)).await.unwrap();
        assert_eq!(b.id, 2);
        assert!(store.find_by_id(a.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_all_filters_sorts_and_pages() {
        let store = Arc::new(MemoryStore::new());
        for (name, exp) in [("Frodo", 40), ("Sam", 10), ("Merry", 30), ("Pippin", 20)] {
            store.insert(&new_player(name, exp)).await.unwrap();
        }

        let everyone = FilterSpecification::new();
        let all = store.find_all(&everyone, None).await.unwrap();
        let ids: Vec<i64> = all.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);

        let page = PageRequest::new(PlayerOrder::Experience, 1, 2).unwrap();
        let second = store.find_all(&everyone, Some(&page)).await.unwrap();
        let names: Vec<&str> = second.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Merry", "Frodo"]);

        let far = PageRequest::new(PlayerOrder::Id, 10, 2).unwrap();
        assert!(store.find_all(&everyone, Some(&far)).await.unwrap().is_empty());

        let spec = FilterSpecification::new().and(
            SearchCriterion::new(PlayerField::Name, "PP", SearchOperation::Match).unwrap(),
        );
        assert_eq!(store.count(&spec).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_save_replaces_existing_only() {
        let store = Arc::new(MemoryStore::new());
        let mut player = store.insert(&new_player("Frodo", 0)).await.unwrap();
        player.banned = true;
        assert_eq!(store.save(&player).await.unwrap(), Some(player.clone()));
        assert!(store.find_by_id(player.id).await.unwrap().unwrap().banned);

        let ghost = new_player("Ghost", 0).into_player(99);
        assert_eq!(store.save(&ghost).await.unwrap(), None);
        assert_eq!(store.len(), 1);
    }
}
