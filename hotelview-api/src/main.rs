use std::net::SocketAddr;
use std::sync::Arc;
use anyhow::Context;
use hotelview_api::{app, AppState};
use hotelview_core::booking::SimulatedProcessor;
use hotelview_listing::ViewOptions;
use hotelview_store::app_config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hotelview_api=debug,hotelview_booking=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;
    tracing::info!("Starting hotelview API on port {}", config.server.port);

    let snapshot = hotelview_store::load_snapshot(&config.search.snapshot_path)
        .await
        .context("Failed to load search snapshot")?;

    let processor = Arc::new(SimulatedProcessor::new(config.booking.simulated_delay()));
    let view = ViewOptions {
        page_size: config.display.page_size,
        amenity_preview: config.display.amenity_preview,
    };
    let state = AppState::new(snapshot, processor, view, config.booking.category.clone());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state)).await?;
    Ok(())
}
