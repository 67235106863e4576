//! Binary entrypoint for the Promo API server.
use promo_api::run;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    // Default listen address can be overridden with PROMO_ADDR
    let addr = std::env::var("PROMO_ADDR").unwrap_or_else(|_| "0.0.0.0:8787".to_string());
    run(&addr).await;
}
