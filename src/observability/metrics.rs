//! Metrics collection and exposition.
//!
//! # Metrics
//! - `teaswap_swaps_total` (counter): completed runs by status (success, failure, error)
//! - `teaswap_swap_duration_seconds` (histogram): wall time of a full run
//! - `teaswap_transactions_total` (counter): broadcast transactions by kind
//! - `teaswap_rpc_healthy` (gauge): 1 if the last liveness check passed

use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::time::Instant;

/// Install the Prometheus exporter on `addr`. Must run inside a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Record a finished swap run.
pub fn record_swap(status: &'static str, started: Instant) {
    ::metrics::counter!("teaswap_swaps_total", "status" => status).increment(1);
    ::metrics::histogram!("teaswap_swap_duration_seconds").record(started.elapsed().as_secs_f64());
}

/// Record a broadcast transaction.
pub fn record_transaction(kind: &'static str) {
    ::metrics::counter!("teaswap_transactions_total", "kind" => kind).increment(1);
}

/// Record the outcome of an RPC liveness check.
pub fn record_rpc_health(healthy: bool) {
    ::metrics::gauge!("teaswap_rpc_healthy").set(if healthy { 1.0 } else { 0.0 });
}
