//! Delivery seam for rendered notifications.
//!
//! The transport itself (SMTP, HTTP relay, ...) lives outside this crate;
//! `LogDelivery` only records the payload and is used for dry runs.

use async_trait::async_trait;
use thiserror::Error;

use crate::notification::RenderedPayload;

/// Errors reported by a delivery transport.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// The transport could not be reached or failed mid-send
    #[error("Transport error: {0}")]
    Transport(String),

    /// The transport refused the message
    #[error("Message rejected: {0}")]
    Rejected(String),
}

/// Sends a rendered payload to its recipients.
///
/// Implementations must be thread-safe (`Send + Sync`); the renderer shares
/// one instance across concurrent renders.
#[async_trait]
pub trait DeliveryService: Send + Sync {
    async fn send(&self, payload: &RenderedPayload) -> Result<(), DeliveryError>;
}

/// Delivery that only logs the payload.
#[derive(Debug, Clone, Default)]
pub struct LogDelivery;

#[async_trait]
impl DeliveryService for LogDelivery {
    async fn send(&self, payload: &RenderedPayload) -> Result<(), DeliveryError> {
        tracing::info!(
            recipients = ?payload.recipients,
            subject = %payload.subject,
            body_len = payload.body.len(),
            "Delivery skipped, payload logged only"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_log_delivery_never_fails() {
        let payload = RenderedPayload {
            title: "Leave request".to_string(),
            subject: "Leave request".to_string(),
            recipients: vec!["a@x.com".to_string()],
            body: "<p>hi</p>".to_string(),
            attachments: Vec::new(),
        };

        assert!(LogDelivery.send(&payload).await.is_ok());
    }

    #[test]
    fn test_error_display() {
        let err = DeliveryError::Rejected("mailbox full".to_string());
        assert_eq!(err.to_string(), "Message rejected: mailbox full");
    }
}
