use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use std::{io::Error, net::SocketAddr, path::Path, sync::Arc};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use academy_app::{app_bus::AppBus, config::Config};
use academy_types::{Result, errors::ApplicationError};

use crate::handlers::{
    build, buildings_catalog, health, player_city, spells_catalog, test_endpoint, upgrade,
};

#[derive(Clone)]
pub struct AppState {
    pub app_bus: Arc<AppBus>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(app_bus: Arc<AppBus>) -> AppState {
        let config = app_bus.config().clone();
        AppState { app_bus, config }
    }
}

pub struct WebRouter {}

impl WebRouter {
    pub fn router(state: AppState) -> Router {
        let web_dir = Path::new(&state.config.web_dir);
        let index = web_dir.join("index.html");
        let cors = cors_layer(&state.config.allowed_origins);

        Router::new()
            .route_service("/", ServeFile::new(&index))
            .route_service("/city", ServeFile::new(&index))
            .nest_service("/static", ServeDir::new(web_dir))
            .nest_service("/images", ServeDir::new(web_dir.join("images")))
            .route("/api/health", get(health))
            .route("/api/test", get(test_endpoint))
            .route("/api/build", post(build))
            .route("/api/upgrade", post(upgrade))
            .route("/api/player/{user_id}", get(player_city))
            .route("/api/catalog/buildings", get(buildings_catalog))
            .route("/api/catalog/spells", get(spells_catalog))
            .with_state(state)
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    }

    pub async fn serve(state: AppState, port: u16) -> Result<(), ApplicationError> {
        let router = Self::router(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(infra_error)?;

        tracing::info!("HTTP Server started, listening on http://{}", addr);
        axum::serve(listener, router).await.map_err(infra_error)?;

        Ok(())
    }
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

fn infra_error(e: Error) -> ApplicationError {
    let err = format!("{:#?}", e);
    ApplicationError::Infrastructure(err)
}
