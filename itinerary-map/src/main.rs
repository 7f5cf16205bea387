use axum::http::{Method, header};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use itinerary_map::config::ServerConfig;
use itinerary_map::gazetteer::Gazetteer;
use itinerary_map::web::{AppState, create_router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=info".into()),
        )
        .init();

    let config = ServerConfig::from_env()?;

    let gazetteer = match &config.gazetteer_path {
        Some(path) => {
            let gazetteer = Gazetteer::load_json(path)?;
            tracing::info!(path = %path.display(), stations = gazetteer.len(), "Loaded gazetteer");
            gazetteer
        }
        None => {
            let gazetteer = Gazetteer::mumbai();
            tracing::info!(stations = gazetteer.len(), "Using built-in Mumbai gazetteer");
            gazetteer
        }
    };
    if gazetteer.is_empty() {
        tracing::warn!("Gazetteer is empty: every route will render the centroid fallback");
    }

    let cors_layer = if config.cors_permissive {
        tracing::info!("CORS: permissive mode (all origins allowed)");
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE])
    };

    let state = AppState::new(gazetteer, config.resolver_cache_capacity);
    let app = create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, "Itinerary map listening");
    tracing::info!("  GET  /health");
    tracing::info!("  GET  /api/stations");
    tracing::info!("  GET  /api/stations/search?q=&limit=");
    tracing::info!("  POST /api/geometry");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
