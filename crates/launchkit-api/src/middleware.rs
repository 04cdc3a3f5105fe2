//! Middleware hooks for the API. The wizard front-end runs on another
//! origin, so CORS stays permissive.
use tower_http::cors::CorsLayer;

pub fn cors() -> CorsLayer {
    CorsLayer::permissive()
}
