use axum::http::{HeaderValue, Method};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{fmt, prelude::*};

mod config;
mod handlers;
mod models;
mod state;

fn init_tracing(log_dir: &str) -> tracing_appender::non_blocking::WorkerGuard {
    let file_appender = tracing_appender::rolling::daily(log_dir, "mes-server");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_ansi(false)
        .with_writer(non_blocking)
        .with_filter(LevelFilter::DEBUG);
    let stdout_layer = fmt::layer()
        .with_level(true)
        .with_writer(std::io::stdout)
        .with_filter(LevelFilter::INFO);

    let collector = tracing_subscriber::registry()
        .with(file_layer)
        .with(stdout_layer);
    if let Err(e) = tracing::subscriber::set_global_default(collector) {
        eprintln!("tracing already initialised: {}", e);
    }
    guard
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // .env is optional
    let _ = dotenvy::dotenv();
    let config = config::Config::from_env()?;
    let _guard = init_tracing(&config.log_dir);
    info!("Starting server...");

    let state = state::AppState::new(models::store::RecordStore::seeded(), &config.technician);
    info!("Record store seeded");

    let cors_layer = CorsLayer::new()
        .allow_origin("*".parse::<HeaderValue>()?)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([axum::http::header::CONTENT_TYPE]);
    let app = handlers::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Server listening on http://{}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
