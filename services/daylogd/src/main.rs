mod config;
mod routes_daily;
mod routes_meta;
mod state;
mod store_exec;

use std::sync::Arc;

use anyhow::Result;
use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tracing::info;

use crate::config::AppConfig;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cfg = AppConfig::from_env()?;
    info!("daily data file: {}", cfg.data_path.display());

    let app_state = Arc::new(AppState::new(&cfg));

    let mut app = Router::new()
        .route(
            "/api/daily/:date",
            get(routes_daily::get_daily).post(routes_daily::post_daily),
        )
        .route(
            "/api/workouts/template",
            get(routes_meta::get_workout_template),
        )
        .route(
            "/api/nutrition/targets",
            get(routes_meta::get_nutrition_targets),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    if let Some(dir) = &cfg.static_dir {
        info!("serving frontend from {}", dir.display());
        app = app.fallback_service(ServeDir::new(dir));
    }

    let addr = &cfg.bind_addr;
    println!("daylogd listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
