// CORS configuration
//
// Equivalent of allow_origins=["*"] with allow_credentials=true: the literal
// wildcard is rejected when credentials are enabled, so the layer mirrors the
// request's origin, method, and headers instead. Every origin, method, and
// header is permitted and credentialed requests are accepted.

use axum::Router;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}

pub fn apply_cors(router: Router) -> Router {
    router.layer(cors_layer())
}
