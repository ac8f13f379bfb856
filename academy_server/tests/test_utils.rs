#[cfg(test)]
pub mod tests {
    use async_trait::async_trait;
    use rand::Rng;
    use reqwest::Client;
    use sqlx::{Postgres, Transaction};
    use std::{net::SocketAddr, sync::Arc};
    use tokio::sync::Mutex;

    use academy_app::{
        app_bus::AppBus,
        command_handlers::SelectFactionCommandHandler,
        config::Config,
        cqrs::commands::SelectFaction,
        repository::PlayerRepository,
        test_utils::tests::MockUnitOfWorkProvider,
        uow::{UnitOfWork, UnitOfWorkProvider},
    };
    use academy_db::{PostgresPlayerRepository, establish_test_connection_pool};
    use academy_game::models::player::Player;
    use academy_types::{Result, errors::ApplicationError, faction::Faction};
    use academy_web::{AppState, WebRouter};

    /// Unit of work sharing one outer transaction that is never committed,
    /// so database tests leave no rows behind.
    #[derive(Clone)]
    pub struct TestUnitOfWork<'a> {
        tx: Arc<Mutex<Transaction<'a, Postgres>>>,
    }

    #[async_trait]
    impl<'a, 'p> UnitOfWork<'p> for TestUnitOfWork<'a>
    where
        'a: 'p,
    {
        fn players(&self) -> Arc<dyn PlayerRepository + 'p> {
            Arc::new(PostgresPlayerRepository::new(self.tx.clone()))
        }

        async fn commit(self: Box<Self>) -> Result<(), ApplicationError> {
            Ok(())
        }

        async fn rollback(self: Box<Self>) -> Result<(), ApplicationError> {
            Ok(())
        }
    }

    #[derive(Clone)]
    pub struct TestUnitOfWorkProvider<'a> {
        tx: Arc<Mutex<Transaction<'a, Postgres>>>,
    }

    impl<'a> TestUnitOfWorkProvider<'a> {
        pub fn new(tx: Arc<Mutex<Transaction<'a, Postgres>>>) -> Self {
            Self { tx }
        }
    }

    #[async_trait]
    impl<'a> UnitOfWorkProvider for TestUnitOfWorkProvider<'a> {
        async fn begin<'p>(&'p self) -> Result<Box<dyn UnitOfWork<'p> + 'p>, ApplicationError>
        where
            'a: 'p,
        {
            let test_uow: TestUnitOfWork<'a> = TestUnitOfWork::<'a> {
                tx: self.tx.clone(),
            };

            Ok(Box::new(test_uow))
        }
    }

    pub fn test_config() -> Config {
        Config {
            http_port: 0,
            web_dir: "../web".to_string(),
            web_app_url: "http://localhost:8000".to_string(),
            allowed_origins: vec!["http://localhost:8000".to_string()],
        }
    }

    /// AppBus over the in-memory store.
    #[allow(dead_code)]
    pub fn setup_app() -> (AppBus, Arc<MockUnitOfWorkProvider>) {
        let provider = Arc::new(MockUnitOfWorkProvider::new());
        let app_bus = AppBus::new(Arc::new(test_config()), provider.clone());
        (app_bus, provider)
    }

    /// AppBus over a Postgres transaction rolled back when the test ends.
    #[allow(dead_code)]
    pub async fn setup_db_app() -> Result<AppBus> {
        let pool = establish_test_connection_pool().await?;
        sqlx::migrate!("../migrations")
            .run(&pool)
            .await
            .map_err(|e| ApplicationError::Unknown(e.to_string()))?;

        let master_tx = pool
            .begin()
            .await
            .map_err(|e| ApplicationError::Unknown(e.to_string()))?;
        let uow_provider: Arc<dyn UnitOfWorkProvider> =
            Arc::new(TestUnitOfWorkProvider::new(Arc::new(Mutex::new(master_tx))));

        Ok(AppBus::new(Arc::new(test_config()), uow_provider))
    }

    /// Serves the router on a random local port.
    #[allow(dead_code)]
    pub async fn setup_web_app() -> Result<(Client, String, Arc<AppBus>, Arc<MockUnitOfWorkProvider>)>
    {
        let (app_bus, provider) = setup_app();
        let app_bus = Arc::new(app_bus);
        let state = AppState::new(app_bus.clone());

        let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
            .await
            .map_err(|e| ApplicationError::Infrastructure(e.to_string()))?;
        let addr = listener
            .local_addr()
            .map_err(|e| ApplicationError::Infrastructure(e.to_string()))?;
        tokio::spawn(async move { axum::serve(listener, WebRouter::router(state)).await });

        Ok((Client::new(), format!("http://{addr}"), app_bus, provider))
    }

    #[allow(dead_code)]
    pub fn random_player_id() -> i64 {
        rand::thread_rng().gen_range(1_000_000..9_999_999)
    }

    #[allow(dead_code)]
    pub async fn register_player(app_bus: &AppBus, faction: Faction) -> Result<Player> {
        let player_id = random_player_id();
        app_bus
            .execute(
                SelectFaction {
                    player_id,
                    username: format!("apprentice_{player_id}"),
                    faction,
                },
                SelectFactionCommandHandler::new(),
            )
            .await
    }
}
