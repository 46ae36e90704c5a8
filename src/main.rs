use actix_web::{middleware, web, App, HttpServer};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

mod handlers;

use handlers::{evaluate, health};
use rebound_odds::data::IndexedGameLogs;
use rebound_odds::engine::Engine;

/// Application state shared across handlers
pub struct AppState {
    pub engine: Engine<IndexedGameLogs>,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set subscriber");

    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let addr = format!("{}:{}", host, port);

    let data_path = std::env::var("DATA_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data/box_scores.csv"));

    info!("Loading game logs from {:?}", data_path);

    let logs = IndexedGameLogs::load(&data_path).map_err(|e| {
        error!("Failed to load game logs: {}", e);
        std::io::Error::other(e)
    })?;

    info!("Loaded game logs for {} athletes", logs.len());

    let app_state = Arc::new(AppState {
        engine: Engine::new(logs),
    });

    info!("Starting Rebound Odds API server at http://{}", addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(middleware::Logger::default())
            .route("/health", web::get().to(health::health_check))
            .route("/evaluate", web::post().to(evaluate::evaluate_threshold))
    })
    .bind(&addr)?
    .run()
    .await
}
