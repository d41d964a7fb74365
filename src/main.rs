//! Advert builder service entry point.

use std::sync::Arc;
use std::time::Duration;

use http::HeaderValue;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use advert_builder::adapters::http::advert::{advert_routes, AdvertAppState};
use advert_builder::adapters::memory::InMemoryAdvertStore;
use advert_builder::config::AppConfig;
use advert_builder::domain::definition::AdvertDefinition;
use advert_builder::ports::{AdvertReader, SchemeReader};

#[tokio::main]
async fn main() {
    let config = AppConfig::load().expect("Failed to load configuration");
    config.validate().expect("Invalid configuration");

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.server.log_level))
        .init();

    let definition = Arc::new(
        AdvertDefinition::load(&config.definition.schema_path)
            .expect("Failed to load advert definition schema"),
    );

    let store = Arc::new(match &config.definition.seed_path {
        Some(path) => {
            InMemoryAdvertStore::from_seed_file(path).expect("Failed to seed advert store")
        }
        None => InMemoryAdvertStore::new(),
    });
    let advert_reader: Arc<dyn AdvertReader> = store.clone();
    let scheme_reader: Arc<dyn SchemeReader> = store;

    let state = AdvertAppState {
        advert_reader,
        scheme_reader,
        definition,
    };

    let origins = config.server.cors_origins_list();
    let cors = if origins.is_empty() {
        CorsLayer::permissive()
    } else {
        let origins: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
        CorsLayer::new().allow_origin(origins)
    };

    let app = advert_routes(state)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(cors);

    let addr = config.server.socket_addr();
    tracing::info!(%addr, "advert builder listening");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind server address");
    axum::serve(listener, app).await.expect("Server error");
}
