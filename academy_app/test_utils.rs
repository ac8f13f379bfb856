#[cfg(any(test, feature = "test-utils"))]
pub mod tests {
    use async_trait::async_trait;
    use std::{
        collections::HashMap,
        sync::{
            Arc, Mutex,
            atomic::{AtomicBool, AtomicUsize, Ordering},
        },
    };

    use academy_game::models::{
        construction::Construction, player::Player, research::Research, wizard::Wizard,
    };
    use academy_types::{
        buildings::BuildingName,
        common::PlayerId,
        errors::{ApplicationError, DbError},
    };

    use crate::{
        repository::PlayerRepository,
        uow::{UnitOfWork, UnitOfWorkProvider},
    };

    /// In-memory players store. Clones share the same state.
    #[derive(Default, Clone)]
    pub struct MockPlayerRepository {
        players: Arc<Mutex<HashMap<PlayerId, Player>>>,
        fail_writes: Arc<AtomicBool>,
        write_attempts: Arc<AtomicUsize>,
    }

    impl MockPlayerRepository {
        pub fn new() -> Self {
            Self::default()
        }

        /// Seeds a player without counting as a write.
        pub fn insert(&self, player: Player) {
            self.players.lock().unwrap().insert(player.id, player);
        }

        pub fn get(&self, player_id: PlayerId) -> Option<Player> {
            self.players.lock().unwrap().get(&player_id).cloned()
        }

        /// Makes every following write fail like an unreachable store.
        pub fn fail_writes(&self, fail: bool) {
            self.fail_writes.store(fail, Ordering::SeqCst);
        }

        pub fn write_attempts(&self) -> usize {
            self.write_attempts.load(Ordering::SeqCst)
        }

        fn begin_write(&self) -> Result<(), ApplicationError> {
            self.write_attempts.fetch_add(1, Ordering::SeqCst);
            if self.fail_writes.load(Ordering::SeqCst) {
                return Err(ApplicationError::Db(DbError::Transaction(
                    "store unavailable".to_string(),
                )));
            }
            Ok(())
        }

        fn update<T>(
            &self,
            player_id: PlayerId,
            f: impl FnOnce(&mut Player) -> Result<T, ApplicationError>,
        ) -> Result<T, ApplicationError> {
            self.begin_write()?;
            let mut players = self.players.lock().unwrap();
            let player = players
                .get_mut(&player_id)
                .ok_or(ApplicationError::Db(DbError::PlayerNotFound(player_id)))?;
            // work on a copy so a failed update leaves the stored player untouched
            let mut updated = player.clone();
            let value = f(&mut updated)?;
            *player = updated;
            Ok(value)
        }
    }

    #[async_trait]
    impl PlayerRepository for MockPlayerRepository {
        async fn get_by_id(&self, player_id: PlayerId) -> Result<Player, ApplicationError> {
            self.get(player_id)
                .ok_or(ApplicationError::Db(DbError::PlayerNotFound(player_id)))
        }

        async fn create(&self, player: &Player) -> Result<(), ApplicationError> {
            self.begin_write()?;
            let mut players = self.players.lock().unwrap();
            if players.contains_key(&player.id) {
                return Err(ApplicationError::Db(DbError::PlayerAlreadyExists(player.id)));
            }
            players.insert(player.id, player.clone());
            Ok(())
        }

        async fn save(&self, player: &Player) -> Result<(), ApplicationError> {
            self.begin_write()?;
            self.players
                .lock()
                .unwrap()
                .insert(player.id, player.clone());
            Ok(())
        }

        async fn set_construction(
            &self,
            player_id: PlayerId,
            construction: &Construction,
        ) -> Result<(), ApplicationError> {
            self.update(player_id, |p| {
                p.construction = construction.clone();
                Ok(())
            })
        }

        async fn set_construction_if_idle(
            &self,
            player_id: PlayerId,
            construction: &Construction,
        ) -> Result<bool, ApplicationError> {
            self.update(player_id, |p| {
                Ok(p.set_construction_if_idle(construction.clone()))
            })
        }

        async fn finish_construction(
            &self,
            player_id: PlayerId,
            building: BuildingName,
            target_level: u8,
            cell_index: Option<u8>,
        ) -> Result<(), ApplicationError> {
            self.update(player_id, |p| {
                Ok(p.finish_construction(building, target_level, cell_index)?)
            })
        }

        async fn update_research(
            &self,
            player_id: PlayerId,
            research: &Research,
        ) -> Result<(), ApplicationError> {
            self.update(player_id, |p| {
                p.research = research.clone();
                Ok(())
            })
        }

        async fn add_wizard(
            &self,
            player_id: PlayerId,
            wizard: &Wizard,
        ) -> Result<(), ApplicationError> {
            self.update(player_id, |p| {
                p.wizards.push(wizard.clone());
                Ok(())
            })
        }
    }

    #[derive(Default)]
    pub struct MockUnitOfWork {
        players: Arc<MockPlayerRepository>,

        // Counters shared with the provider to check commit/rollback calls
        commits: Arc<AtomicUsize>,
        rollbacks: Arc<AtomicUsize>,
    }

    impl MockUnitOfWork {
        pub fn new() -> Self {
            Default::default()
        }

        pub fn with_players(players: MockPlayerRepository) -> Self {
            Self {
                players: Arc::new(players),
                ..Default::default()
            }
        }
    }

    #[async_trait]
    impl<'a> UnitOfWork<'a> for MockUnitOfWork {
        fn players(&self) -> Arc<dyn PlayerRepository + 'a> {
            self.players.clone()
        }

        async fn commit(self: Box<Self>) -> Result<(), ApplicationError> {
            self.commits.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        async fn rollback(self: Box<Self>) -> Result<(), ApplicationError> {
            self.rollbacks.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    /// Hands out units of work over one shared in-memory store.
    #[derive(Default)]
    pub struct MockUnitOfWorkProvider {
        players: MockPlayerRepository,
        commits: Arc<AtomicUsize>,
        rollbacks: Arc<AtomicUsize>,
    }

    impl MockUnitOfWorkProvider {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn players(&self) -> &MockPlayerRepository {
            &self.players
        }

        pub fn commits(&self) -> usize {
            self.commits.load(Ordering::SeqCst)
        }

        pub fn rollbacks(&self) -> usize {
            self.rollbacks.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl UnitOfWorkProvider for MockUnitOfWorkProvider {
        async fn begin<'p>(&'p self) -> Result<Box<dyn UnitOfWork<'p> + 'p>, ApplicationError> {
            let uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(MockUnitOfWork {
                players: Arc::new(self.players.clone()),
                commits: self.commits.clone(),
                rollbacks: self.rollbacks.clone(),
            });
            Ok(uow)
        }
    }
}
