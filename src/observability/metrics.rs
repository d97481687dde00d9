use prometheus::{Encoder, IntCounterVec, IntGauge, Opts, Registry, TextEncoder};

#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    pub reports_total: IntCounterVec,
    pub dispatches_total: IntCounterVec,
    pub dispatch_queue_depth: IntGauge,
}

impl Metrics {
    pub fn new() -> Self {
        let registry = Registry::new();

        let reports_total = IntCounterVec::new(
            Opts::new("reports_total", "Total reports created by match outcome"),
            &["outcome"],
        )
        .expect("valid reports_total metric");

        let dispatches_total = IntCounterVec::new(
            Opts::new("dispatches_total", "Total dispatch log writes by outcome"),
            &["outcome"],
        )
        .expect("valid dispatches_total metric");

        let dispatch_queue_depth = IntGauge::new(
            "dispatch_queue_depth",
            "Dispatch events waiting for the log writer",
        )
        .expect("valid dispatch_queue_depth metric");

        registry
            .register(Box::new(reports_total.clone()))
            .expect("register reports_total");
        registry
            .register(Box::new(dispatches_total.clone()))
            .expect("register dispatches_total");
        registry
            .register(Box::new(dispatch_queue_depth.clone()))
            .expect("register dispatch_queue_depth");

        Self {
            registry,
            reports_total,
            dispatches_total,
            dispatch_queue_depth,
        }
    }

    pub fn encode(&self) -> Result<String, String> {
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();

        TextEncoder::new()
            .encode(&metric_families, &mut buffer)
            .map_err(|err| format!("failed to encode metrics: {err}"))?;

        String::from_utf8(buffer).map_err(|err| format!("metrics are not valid utf8: {err}"))
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
