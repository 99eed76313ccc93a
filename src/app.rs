//! Application factory
//!
//! Builds the ready-to-serve application: fixed service metadata plus a
//! router with the permissive CORS layer installed. Binding a listener is
//! the caller's job (see `main.rs`).

use axum::Router;
use serde::Serialize;

use crate::middleware::cors::apply_cors;
use crate::routes;

pub const SERVICE_TITLE: &str = "AI Service";
pub const SERVICE_VERSION: &str = "1.0.0";
pub const SERVICE_DESCRIPTION: &str = "Gemini-powered AI microservice";

/// Identifying metadata, set once at construction and never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceMetadata {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Default for ServiceMetadata {
    fn default() -> Self {
        Self {
            title: SERVICE_TITLE.to_string(),
            version: SERVICE_VERSION.to_string(),
            description: SERVICE_DESCRIPTION.to_string(),
        }
    }
}

/// A configured application instance.
pub struct App {
    metadata: ServiceMetadata,
    router: Router,
}

impl App {
    pub fn title(&self) -> &str {
        &self.metadata.title
    }

    pub fn version(&self) -> &str {
        &self.metadata.version
    }

    pub fn description(&self) -> &str {
        &self.metadata.description
    }

    pub fn metadata(&self) -> &ServiceMetadata {
        &self.metadata
    }

    /// Hand the router to a hosting runtime (`axum::serve`).
    pub fn into_router(self) -> Router {
        self.router
    }
}

/// Create the application. Pure construction: no I/O, always succeeds,
/// and every call yields an independent instance with the same metadata
/// and the same CORS policy.
pub fn create_app() -> App {
    let metadata = ServiceMetadata::default();
    let router = apply_cors(routes::create_router(metadata.clone()));

    App { metadata, router }
}
