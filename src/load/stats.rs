//! Request statistics collected during a load run.
//!
//! HTTP hooks and the gRPC call observer fire one `RequestEvent` per request.
//! `RequestStats` records them into a per-run Prometheus registry; the summary
//! table is built from the gathered metric families. It is shared by every
//! virtual user through an `Arc`.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use prometheus::{
    HistogramVec, IntCounterVec, Registry, proto::MetricFamily,
    register_histogram_vec_with_registry, register_int_counter_vec_with_registry,
};

use crate::error::ClientError;

const REQUESTS_TOTAL: &str = "gateway_load_requests_total";
const FAILURES_TOTAL: &str = "gateway_load_request_failures_total";
const RESPONSE_BYTES_TOTAL: &str = "gateway_load_response_bytes_total";
const RESPONSE_TIME_SECONDS: &str = "gateway_load_response_time_seconds";

const LABELS: &[&str] = &["type", "name"];

// 1ms to 30s
const RESPONSE_TIME_BUCKETS: &[f64] = &[
    0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0,
];

/// Outcome of a single request.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestEvent {
    /// "HTTP" or "gRPC"
    pub request_type: &'static str,
    /// Request group, e.g. `GET /api/v1/users/{user_id}` or a gRPC method path
    pub name: String,
    pub response_time_ms: f64,
    pub response_length: usize,
    /// Error description when the request failed
    pub exception: Option<String>,
}

/// Aggregate for one request name, read back from the registry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestEntry {
    pub request_type: String,
    pub count: u64,
    pub failures: u64,
    pub total_response_time_ms: f64,
    pub total_content_length: u64,
    /// Cumulative response time buckets as `(upper bound in ms, count)`
    pub buckets: Vec<(f64, u64)>,
}

impl RequestEntry {
    pub fn avg_response_time_ms(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.total_response_time_ms / self.count as f64
        }
    }

    /// Upper bound of the first bucket holding the `q` quantile.
    ///
    /// Returns `None` with no samples and `f64::INFINITY` when the quantile
    /// falls past the largest bucket.
    pub fn percentile_ms(&self, q: f64) -> Option<f64> {
        if self.count == 0 {
            return None;
        }
        let rank = ((q.clamp(0.0, 1.0) * self.count as f64).ceil() as u64).max(1);
        Some(
            self.buckets
                .iter()
                .find(|(_, cumulative)| *cumulative >= rank)
                .map(|(upper, _)| *upper)
                .unwrap_or(f64::INFINITY),
        )
    }

    fn merge(&mut self, other: &RequestEntry) {
        self.count += other.count;
        self.failures += other.failures;
        self.total_response_time_ms += other.total_response_time_ms;
        self.total_content_length += other.total_content_length;
        if self.buckets.is_empty() {
            self.buckets = other.buckets.clone();
        } else {
            for (bucket, (_, cumulative)) in self.buckets.iter_mut().zip(&other.buckets) {
                bucket.1 += cumulative;
            }
        }
    }
}

/// Per-run request metrics.
pub struct RequestStats {
    registry: Registry,
    requests: IntCounterVec,
    failures: IntCounterVec,
    response_bytes: IntCounterVec,
    response_time: HistogramVec,
}

/// Shared handle used by clients and the runner.
pub type SharedStats = Arc<RequestStats>;

impl fmt::Debug for RequestStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestStats")
            .field("families", &self.registry.gather().len())
            .finish()
    }
}

impl RequestStats {
    /// Create the metrics on a fresh registry.
    pub fn new() -> Result<SharedStats, ClientError> {
        let registry = Registry::new();

        let requests = register_int_counter_vec_with_registry!(
            REQUESTS_TOTAL,
            "Requests sent",
            LABELS,
            registry
        )
        .map_err(|e| ClientError::Metrics(format!("requests: {e}")))?;

        let failures = register_int_counter_vec_with_registry!(
            FAILURES_TOTAL,
            "Requests that failed",
            LABELS,
            registry
        )
        .map_err(|e| ClientError::Metrics(format!("failures: {e}")))?;

        let response_bytes = register_int_counter_vec_with_registry!(
            RESPONSE_BYTES_TOTAL,
            "Response body bytes received",
            LABELS,
            registry
        )
        .map_err(|e| ClientError::Metrics(format!("response_bytes: {e}")))?;

        let response_time = register_histogram_vec_with_registry!(
            RESPONSE_TIME_SECONDS,
            "Request response time",
            LABELS,
            RESPONSE_TIME_BUCKETS.to_vec(),
            registry
        )
        .map_err(|e| ClientError::Metrics(format!("response_time: {e}")))?;

        Ok(Arc::new(Self {
            registry,
            requests,
            failures,
            response_bytes,
            response_time,
        }))
    }

    /// Registry holding this run's metrics.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Record one request outcome.
    pub fn fire(&self, event: RequestEvent) {
        let labels = [event.request_type, event.name.as_str()];

        self.requests.with_label_values(&labels).inc();
        if let Some(ref exception) = event.exception {
            tracing::debug!(name = %event.name, %exception, "request failed");
            self.failures.with_label_values(&labels).inc();
        }
        self.response_bytes
            .with_label_values(&labels)
            .inc_by(event.response_length as u64);
        self.response_time
            .with_label_values(&labels)
            .observe(event.response_time_ms.max(0.0) / 1000.0);
    }

    /// Snapshot of all entries, ordered by name.
    pub fn entries(&self) -> Vec<(String, RequestEntry)> {
        let mut entries: BTreeMap<String, RequestEntry> = BTreeMap::new();

        for family in self.registry.gather() {
            read_family(&family, &mut entries);
        }
        entries.into_iter().collect()
    }

    pub fn get(&self, name: &str) -> Option<RequestEntry> {
        self.entries()
            .into_iter()
            .find(|(entry_name, _)| entry_name == name)
            .map(|(_, entry)| entry)
    }

    pub fn total(&self) -> RequestEntry {
        let mut total = RequestEntry::default();
        for (_, entry) in self.entries() {
            total.merge(&entry);
        }
        total
    }

    /// Plain-text table of the aggregates.
    pub fn summary(&self) -> String {
        let mut out = format!(
            "{:<6} {:<60} {:>8} {:>8} {:>10} {:>10} {:>10}\n",
            "Type", "Name", "# reqs", "# fails", "Avg (ms)", "50% (ms)", "95% (ms)"
        );
        for (name, entry) in self.entries() {
            out.push_str(&summary_row(&entry.request_type, &name, &entry));
        }
        out.push_str(&summary_row("", "Aggregated", &self.total()));
        out
    }
}

fn summary_row(request_type: &str, name: &str, entry: &RequestEntry) -> String {
    format!(
        "{:<6} {:<60} {:>8} {:>8} {:>10.1} {:>10.1} {:>10.1}\n",
        request_type,
        name,
        entry.count,
        entry.failures,
        entry.avg_response_time_ms(),
        entry.percentile_ms(0.5).unwrap_or_default(),
        entry.percentile_ms(0.95).unwrap_or_default(),
    )
}

fn read_family(family: &MetricFamily, entries: &mut BTreeMap<String, RequestEntry>) {
    for metric in family.get_metric() {
        let mut request_type = "";
        let mut name = "";
        for label in metric.get_label() {
            match label.get_name() {
                "type" => request_type = label.get_value(),
                "name" => name = label.get_value(),
                _ => {}
            }
        }

        let entry = entries.entry(name.to_string()).or_default();
        entry.request_type = request_type.to_string();

        match family.get_name() {
            REQUESTS_TOTAL => entry.count = metric.get_counter().get_value() as u64,
            FAILURES_TOTAL => entry.failures = metric.get_counter().get_value() as u64,
            RESPONSE_BYTES_TOTAL => {
                entry.total_content_length = metric.get_counter().get_value() as u64
            }
            RESPONSE_TIME_SECONDS => {
                let histogram = metric.get_histogram();
                entry.total_response_time_ms = histogram.get_sample_sum() * 1000.0;
                entry.buckets = histogram
                    .get_bucket()
                    .iter()
                    .map(|b| (b.get_upper_bound() * 1000.0, b.get_cumulative_count()))
                    .collect();
            }
            _ => {}
        }
    }
}
