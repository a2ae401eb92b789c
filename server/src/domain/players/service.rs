//! Player service
//!
//! Orchestrates validation, level computation and the player store.
//! The store handle is passed in at construction.

use std::sync::Arc;

use crate::data::PlayerStore;
use crate::data::filters::PageRequest;
use crate::data::types::Player;

use super::error::PlayerError;
use super::input::PlayerInput;
use super::query::PlayerQuery;

#[derive(Clone)]
pub struct PlayerService {
    store: Arc<PlayerStore>,
}

impl PlayerService {
    pub fn new(store: Arc<PlayerStore>) -> Self {
        Self { store }
    }

    /// One page of players matching the filters
    pub async fn list(
        &self,
        query: &PlayerQuery,
        page: &PageRequest,
    ) -> Result<Vec<Player>, PlayerError> {
        let spec = query.to_specification()?;
        let players = self.store.repository().find_all(&spec, Some(page)).await?;
        tracing::debug!(
            criteria = spec.criteria().len(),
            page = page.page_number(),
            returned = players.len(),
            "Listed players"
        );
        Ok(players)
    }

    /// Number of players matching the filters (unpaged)
    pub async fn count(&self, query: &PlayerQuery) -> Result<u64, PlayerError> {
        let spec = query.to_specification()?;
        Ok(self.store.repository().count(&spec).await?)
    }

    pub async fn create(&self, input: PlayerInput) -> Result<Player, PlayerError> {
        let new_player = input.into_new_player()?;
        let player = self.store.repository().insert(&new_player).await?;
        tracing::info!(id = player.id, name = %player.name, "Player created");
        Ok(player)
    }

    pub async fn get(&self, id: i64) -> Result<Player, PlayerError> {
        check_id(id)?;
        self.store
            .repository()
            .find_by_id(id)
            .await?
            .ok_or(PlayerError::NotFound(id))
    }

    /// Apply the present fields as one replacement; invalid input changes nothing
    pub async fn update(&self, id: i64, input: PlayerInput) -> Result<Player, PlayerError> {
        check_id(id)?;
        let update = input.into_update()?;

        let repo = self.store.repository();
        let mut player = repo
            .find_by_id(id)
            .await?
            .ok_or(PlayerError::NotFound(id))?;

        update.apply(&mut player);

        // A concurrent delete between read and write surfaces as not found
        let saved = repo
            .save(&player)
            .await?
            .ok_or(PlayerError::NotFound(id))?;
        tracing::info!(id, "Player updated");
        Ok(saved)
    }

    pub async fn delete(&self, id: i64) -> Result<(), PlayerError> {
        check_id(id)?;
        if !self.store.repository().delete_by_id(id).await? {
            return Err(PlayerError::NotFound(id));
        }
        tracing::info!(id, "Player deleted");
        Ok(())
    }
}

fn check_id(id: i64) -> Result<(), PlayerError> {
    if id <= 0 {
        return Err(PlayerError::invalid(format!(
            "id must be a positive integer, got {}",
            id
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SqliteService;
    use crate::data::filters::PlayerOrder;
    use crate::data::types::{Profession, Race};

    fn input(name: &str, experience: i64) -> PlayerInput {
        PlayerInput {
            name: Some(name.to_string()),
            title: Some("Scout".to_string()),
            race: Some(Race::Human),
            profession: Some(Profession::Warrior),
            birthday: Some(1_000_000_000_000),
            banned: None,
            experience: Some(experience),
        }
    }

    fn memory_service() -> PlayerService {
        PlayerService::new(Arc::new(PlayerStore::memory()))
    }

    async fn sqlite_service() -> PlayerService {
        let sqlite = SqliteService::init_in_memory().await.unwrap();
        PlayerService::new(Arc::new(PlayerStore::Sqlite(Arc::new(sqlite))))
    }

    #[tokio::test]
    async fn test_create_computes_derived_fields() {
        let service = memory_service();
        let player = service.create(input("Anna", 100)).await.unwrap();
        assert_eq!(player.level, 1);
        assert_eq!(player.until_next_level, 200);
        assert!(!player.banned);
        assert_eq!(service.get(player.id).await.unwrap(), player);
    }

    #[tokio::test]
    async fn test_get_invalid_and_missing_ids() {
        let service = memory_service();
        assert!(matches!(
            service.get(-1).await,
            Err(PlayerError::InvalidParameters(_))
        ));
        assert!(matches!(
            service.get(0).await,
            Err(PlayerError::InvalidParameters(_))
        ));
        assert!(matches!(
            service.get(999_999).await,
            Err(PlayerError::NotFound(999_999))
        ));
    }

    #[tokio::test]
    async fn test_delete_then_get_not_found() {
        let service = memory_service();
        let player = service.create(input("Anna", 0)).await.unwrap();
        service.delete(player.id).await.unwrap();
        assert!(matches!(
            service.get(player.id).await,
            Err(PlayerError::NotFound(_))
        ));
        assert!(matches!(
            service.delete(player.id).await,
            Err(PlayerError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_update_recomputes_and_keeps_other_fields() {
        let service = memory_service();
        let created = service.create(input("Anna", 0)).await.unwrap();

        let updated = service
            .update(
                created.id,
                PlayerInput {
                    experience: Some(300),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.level, 2);
        assert_eq!(updated.until_next_level, 300);
        assert_eq!(updated.name, created.name);
        assert_eq!(updated.title, created.title);
        assert_eq!(updated.birthday, created.birthday);
        assert_eq!(service.get(created.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_update_experience_500() {
        let service = memory_service();
        let created = service.create(input("Boromir", 0)).await.unwrap();

        let updated = service
            .update(
                created.id,
                PlayerInput {
                    experience: Some(500),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.level, 2);
        assert_eq!(updated.until_next_level, 100);
        assert_eq!(
            Player {
                experience: created.experience,
                level: created.level,
                until_next_level: created.until_next_level,
                ..updated.clone()
            },
            created
        );
    }

    #[tokio::test]
    async fn test_invalid_update_changes_nothing() {
        let service = memory_service();
        let created = service.create(input("Anna", 0)).await.unwrap();

        let result = service
            .update(
                created.id,
                PlayerInput {
                    title: Some("Legend".to_string()),
                    name: Some(String::new()),
                    ..Default::default()
                },
            )
            .await;
        assert!(matches!(result, Err(PlayerError::InvalidParameters(_))));
        assert_eq!(service.get(created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn test_update_validation_precedes_lookup() {
        let service = memory_service();
        let result = service
            .update(
                42,
                PlayerInput {
                    experience: Some(-5),
                    ..Default::default()
                },
            )
            .await;
        assert!(matches!(result, Err(PlayerError::InvalidParameters(_))));

        let result = service.update(42, PlayerInput::default()).await;
        assert!(matches!(result, Err(PlayerError::NotFound(42))));
    }

    #[tokio::test]
    async fn test_list_and_count_on_sqlite() {
        let service = sqlite_service().await;
        for (name, exp) in [("Anna", 100), ("Bob", 0), ("Hannah", 5000), ("Ivan", 700)] {
            service.create(input(name, exp)).await.unwrap();
        }

        let query = PlayerQuery {
            name: Some("an".to_string()),
            ..Default::default()
        };
        assert_eq!(service.count(&query).await.unwrap(), 3);

        let page = PageRequest::new(PlayerOrder::Level, 0, 2).unwrap();
        let listed = service.list(&query, &page).await.unwrap();
        let names: Vec<&str> = listed.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Anna", "Ivan"]);

        assert_eq!(service.count(&PlayerQuery::default()).await.unwrap(), 4);
    }
}
