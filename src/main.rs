use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use hr_onboard::config::{LoggingSettings, Settings};
use hr_onboard::core::Matcher;
use hr_onboard::routes::{self, AppState};
use hr_onboard::services::{HrStore, MemoryStore, PostgresStore};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Initialize logging; LOG_LEVEL and LOG_FORMAT override the configured values
fn init_tracing(logging: &LoggingSettings) {
    let level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| logging.level.clone());
    let format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| logging.format.clone());

    let filter = EnvFilter::try_new(&level).unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    match format.as_str() {
        "json" => subscriber.json().init(),
        "pretty" => subscriber.pretty().init(),
        _ => subscriber.init(),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::process::exit(1);
    });

    init_tracing(&settings.logging);
    info!("Starting HR onboarding service...");

    let registry = settings.mentor_registry().unwrap_or_else(|e| {
        error!("Invalid mentor roster: {}", e);
        std::process::exit(1);
    });

    info!("Mentor registry loaded with {} mentors", registry.len());

    let store: Arc<dyn HrStore> = if settings.database.url.is_empty() {
        warn!("No database URL configured, records are kept in memory only");
        Arc::new(MemoryStore::new())
    } else {
        let postgres = PostgresStore::from_settings(
            &settings.database.url,
            settings.database.max_connections,
            settings.database.min_connections,
            settings.database.acquire_timeout_secs,
            settings.database.idle_timeout_secs,
        )
        .await
        .unwrap_or_else(|e| {
            error!("Failed to connect to PostgreSQL: {}", e);
            std::process::exit(1);
        });

        info!("PostgreSQL store initialized");
        Arc::new(postgres)
    };

    let app_state = AppState {
        store,
        matcher: Matcher::new(Arc::new(registry)),
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .configure(routes::configure_extractors)
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
