//! Cross-cutting HTTP layers.
//!
//! The API is called from browser-hosted capture UIs, so CORS stays
//! permissive; request tracing comes from tower-http's TraceLayer applied in
//! the router.

use tower_http::cors::CorsLayer;

pub fn cors() -> CorsLayer {
    CorsLayer::permissive()
}
