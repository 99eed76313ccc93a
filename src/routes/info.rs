use axum::{extract::State, routing::get, Json, Router};
use crate::app::ServiceMetadata;

pub fn router(metadata: ServiceMetadata) -> Router {
    Router::new()
        .route("/", get(service_info))
        .with_state(metadata)
}

async fn service_info(State(metadata): State<ServiceMetadata>) -> Json<ServiceMetadata> {
    Json(metadata)
}
