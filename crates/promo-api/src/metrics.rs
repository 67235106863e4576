//! Prometheus registry and request counters for `/metrics`.

use prometheus::{Encoder, IntCounter, Registry, TextEncoder};

pub struct Metrics {
    registry: Registry,
    pub generate_total: IntCounter,
    pub generate_rejected: IntCounter,
    pub regenerate_total: IntCounter,
}

impl Metrics {
    pub fn new() -> Self {
        let registry = Registry::new();
        let generate_total = IntCounter::new("promo_generate_total", "Poster generation requests")
            .expect("valid metric name");
        let generate_rejected =
            IntCounter::new("promo_generate_rejected", "Rejected generation requests")
                .expect("valid metric name");
        let regenerate_total =
            IntCounter::new("promo_regenerate_total", "Poster regeneration requests")
                .expect("valid metric name");

        registry.register(Box::new(generate_total.clone())).ok();
        registry.register(Box::new(generate_rejected.clone())).ok();
        registry.register(Box::new(regenerate_total.clone())).ok();

        Self {
            registry,
            generate_total,
            generate_rejected,
            regenerate_total,
        }
    }

    pub fn encode(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).to_string())
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_show_up_in_exposition() {
        let metrics = Metrics::new();
        metrics.generate_total.inc();
        let text = metrics.encode().unwrap();
        assert!(text.contains("promo_generate_total 1"));
        assert!(text.contains("promo_regenerate_total 0"));
    }
}
