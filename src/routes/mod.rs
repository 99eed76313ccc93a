//! API Routes
//!
//! This module organizes all HTTP endpoints for the application:
//! - `/` - Service info (title, version, description)
//! - `/health` - Health checks
//!
//! Unknown routes fall back to a JSON 404 body.

pub mod health;
pub mod info;

use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::app::ServiceMetadata;
use crate::types::{AppError, AppResult};

/// Create the main application router
pub fn create_router(metadata: ServiceMetadata) -> Router {
    info!("Creating application router");

    Router::new()
        .merge(info::router(metadata))
        .merge(health::router())
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
}

async fn not_found() -> AppResult<()> {
    Err(AppError::NotFound("Not Found".to_string()))
}
