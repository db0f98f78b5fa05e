use actix_cors::Cors;
use actix_files::{Files, NamedFile};
use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web, App, HttpServer,
};
use dotenv::dotenv;
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

mod config;
mod controllers;
mod error;
mod notes;

use config::Config;
use notes::{seed, MemoryNoteStore, NoteStore};

pub struct AppState {
    pub config: Config,
    /// Shared by every worker; the store does its own locking
    pub store: Arc<dyn NoteStore>,
    /// Server start time for uptime calculation
    pub started_at: Instant,
}

impl AppState {
    pub fn new(config: Config, store: Arc<dyn NoteStore>) -> Self {
        Self {
            config,
            store,
            started_at: Instant::now(),
        }
    }
}

/// Serve index.html for client-side routes under /app
async fn spa_fallback(state: web::Data<AppState>) -> actix_web::Result<NamedFile> {
    let dist = state.config.frontend_dist.as_deref().unwrap_or_default();
    Ok(NamedFile::open(Path::new(dist).join("index.html"))?)
}

/// Full application: middleware, API routes and, when configured, the
/// static frontend. Each server worker builds one of these.
pub fn create_app(
    state: web::Data<AppState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let cors = Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600);

    let frontend_dist = state.config.frontend_dist.clone();

    let mut app = App::new()
        .app_data(state)
        .wrap(Logger::default())
        .wrap(cors)
        .configure(controllers::health::config_routes)
        .configure(controllers::notes::config);

    if let Some(dist) = frontend_dist {
        app = app.service(
            Files::new("/app", dist)
                .index_file("index.html")
                .default_handler(web::to(spa_fallback)),
        );
    }

    app
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    log::info!("NoteKeeper v{}", env!("CARGO_PKG_VERSION"));

    let mut config = Config::from_env().map_err(|e| {
        log::error!("Invalid configuration: {}", e);
        std::io::Error::from(e)
    })?;

    let store = if config.seed_notes {
        MemoryNoteStore::with_notes(config.id_strategy, seed::welcome_notes())
    } else {
        MemoryNoteStore::new(config.id_strategy)
    };
    log::info!(
        "Initialized note store ({} notes, id strategy: {})",
        store.len(),
        config.id_strategy.as_ref()
    );
    let store: Arc<dyn NoteStore> = Arc::new(store);

    // Serve the frontend only if its dist directory exists
    config.frontend_dist = match config.frontend_dist.take() {
        None => {
            log::info!("Frontend serving disabled via DISABLE_FRONTEND env var");
            None
        }
        Some(dist) if Path::new(&dist).join("index.html").exists() => {
            log::info!("Serving frontend from: {}", dist);
            Some(dist)
        }
        Some(dist) => {
            log::warn!("Frontend dist not found at {}, serving API only", dist);
            None
        }
    };

    let bind = (config.bind_address.clone(), config.port);
    log::info!("NoteKeeper API listening on http://{}:{}", bind.0, bind.1);

    let state = web::Data::new(AppState::new(config, store));

    let server = HttpServer::new(move || create_app(state.clone()))
        .bind(bind)?
        .run();

    let server_handle = server.handle();

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_err() {
            log::warn!("Failed to listen for Ctrl+C");
            return;
        }
        log::info!("Received Ctrl+C, shutting down...");

        let server_stop = server_handle.stop(true);
        if tokio::time::timeout(Duration::from_secs(5), server_stop).await.is_err() {
            log::warn!("Timeout waiting for HTTP server to stop, forcing exit...");
        }

        log::info!("Shutdown complete");
    });

    server.await
}

/// Seeded state for HTTP tests; `frontend_dist` None disables static serving
#[cfg(test)]
pub(crate) fn test_state(frontend_dist: Option<&str>) -> web::Data<AppState> {
    let mut config = Config::from_lookup(|_| None).expect("default config");
    config.frontend_dist = frontend_dist.map(str::to_string);
    let store = MemoryNoteStore::with_notes(config.id_strategy, seed::welcome_notes());
    web::Data::new(AppState::new(config, Arc::new(store)))
}
