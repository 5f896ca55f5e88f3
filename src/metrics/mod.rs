//! Prometheus metrics for the render pipeline.

use lazy_static::lazy_static;
use prometheus::{register_int_counter_vec, Encoder, IntCounterVec, TextEncoder};

use crate::error::NotificationError;

/// Prefix for all metrics
const METRIC_PREFIX: &str = "attendance";

lazy_static! {
    /// Render attempts by outcome
    pub static ref RENDERS_TOTAL: IntCounterVec = register_int_counter_vec!(
        format!("{}_renders_total", METRIC_PREFIX),
        "Total attendance notification renders by outcome",
        &["outcome"]
    ).unwrap();
}

/// Encode all registered metrics in Prometheus text format
pub fn encode_metrics() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    Ok(String::from_utf8(buffer).unwrap_or_default())
}

/// Helper struct for recording render outcomes
pub struct RenderMetrics;

impl RenderMetrics {
    /// Payload rendered and accepted by the delivery service
    pub fn record_delivered() {
        RENDERS_TOTAL.with_label_values(&["delivered"]).inc();
    }

    /// Payload rendered but the delivery service failed
    pub fn record_undelivered() {
        RENDERS_TOTAL.with_label_values(&["undelivered"]).inc();
    }

    /// Render aborted before producing a payload
    pub fn record_failed(error: &NotificationError) {
        RENDERS_TOTAL
            .with_label_values(&[Self::failure_label(error)])
            .inc();
    }

    fn failure_label(error: &NotificationError) -> &'static str {
        match error {
            NotificationError::Validation(_) => "invalid",
            NotificationError::TemplateNotFound(_) => "template_missing",
            NotificationError::TemplateStore(_) => "store_error",
        }
    }
}
