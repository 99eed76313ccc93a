// AI Service - Gemini-powered AI microservice bootstrap

pub mod app;
pub mod config;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod types;

// Re-exports for convenience
pub use app::{create_app, App, ServiceMetadata};
pub use config::Config;
