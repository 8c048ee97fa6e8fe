//! Prometheus metrics for the HTTP service and the evaluation engine.

use prometheus::{
    Encoder, Histogram, HistogramOpts, IntCounter, IntCounterVec, IntGauge, Opts, Registry,
    TextEncoder,
};

use crate::signals::BatchSummary;

pub struct Metrics {
    registry: Registry,
    pub http_requests_total: IntCounter,
    pub http_requests_in_flight: IntGauge,
    pub http_request_duration_seconds: Histogram,
    pub signals_evaluated_total: IntCounter,
    pub junk_signals_total: IntCounterVec,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let http_requests_total =
            IntCounter::new("http_requests_total", "Total number of HTTP requests")?;
        let http_requests_in_flight = IntGauge::new(
            "http_requests_in_flight",
            "Number of HTTP requests currently being served",
        )?;
        let http_request_duration_seconds = Histogram::with_opts(HistogramOpts::new(
            "http_request_duration_seconds",
            "HTTP request latency in seconds",
        ))?;
        let signals_evaluated_total = IntCounter::new(
            "signals_evaluated_total",
            "Total number of signals evaluated against a rule set",
        )?;
        let junk_signals_total = IntCounterVec::new(
            Opts::new("junk_signals_total", "Signals classified as junk, by reason"),
            &["reason"],
        )?;

        registry.register(Box::new(http_requests_total.clone()))?;
        registry.register(Box::new(http_requests_in_flight.clone()))?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;
        registry.register(Box::new(signals_evaluated_total.clone()))?;
        registry.register(Box::new(junk_signals_total.clone()))?;

        Ok(Self {
            registry,
            http_requests_total,
            http_requests_in_flight,
            http_request_duration_seconds,
            signals_evaluated_total,
            junk_signals_total,
        })
    }

    pub fn record_batch(&self, summary: &BatchSummary) {
        self.signals_evaluated_total.inc_by(summary.total as u64);
        for (reason, count) in &summary.by_reason {
            self.junk_signals_total
                .with_label_values(&[reason.as_str()])
                .inc_by(*count as u64);
        }
    }

    /// Render all registered metrics in the Prometheus text format.
    pub fn export(&self) -> Result<String, prometheus::Error> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}
