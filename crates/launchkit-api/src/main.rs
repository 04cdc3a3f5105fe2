//! Binary entrypoint for the Launchkit API server.
use launchkit_api::run;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    // Defaults can be overridden with LAUNCHKIT_ADDR / LAUNCHKIT_FACADE_URL
    let addr = std::env::var("LAUNCHKIT_ADDR").unwrap_or_else(|_| "0.0.0.0:8788".to_string());
    let facade_url = std::env::var("LAUNCHKIT_FACADE_URL")
        .unwrap_or_else(|_| "http://localhost:8799".to_string());

    run(&addr, &facade_url).await;
}
