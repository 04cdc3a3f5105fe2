//! Prometheus registry for the `/v1/metrics` endpoint.
use once_cell::sync::Lazy;
use prometheus::{Encoder, IntCounter, Registry, TextEncoder};

pub static REGISTRY: Lazy<Registry> = Lazy::new(Registry::new);

pub static RENDER_COUNT: Lazy<IntCounter> = Lazy::new(|| {
    let counter = IntCounter::new(
        "launchkit_documents_rendered_total",
        "Documents rendered by the template engine",
    )
    .expect("valid counter spec");
    REGISTRY
        .register(Box::new(counter.clone()))
        .expect("register render counter");
    counter
});

pub fn encode() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let mut buffer = Vec::new();
    encoder.encode(&REGISTRY.gather(), &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).to_string())
}
