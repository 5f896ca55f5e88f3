use serde::{Deserialize, Serialize};

use crate::delivery::DeliveryError;

/// Fully rendered message ready for dispatch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedPayload {
    pub title: String,
    /// Always equal to `title`
    pub subject: String,
    pub recipients: Vec<String>,
    pub body: String,
    /// File paths to attach; attendance notifications carry none
    #[serde(default)]
    pub attachments: Vec<String>,
}

/// Result of a successful render.
///
/// A delivery failure does not fail the render; it is reported here instead.
#[derive(Debug)]
pub enum RenderOutcome {
    /// The delivery service accepted the payload
    Delivered(RenderedPayload),
    /// The payload was rendered but the delivery service failed
    Undelivered {
        payload: RenderedPayload,
        error: DeliveryError,
    },
}

impl RenderOutcome {
    pub fn payload(&self) -> &RenderedPayload {
        match self {
            RenderOutcome::Delivered(payload) => payload,
            RenderOutcome::Undelivered { payload, .. } => payload,
        }
    }

    pub fn into_payload(self) -> RenderedPayload {
        match self {
            RenderOutcome::Delivered(payload) => payload,
            RenderOutcome::Undelivered { payload, .. } => payload,
        }
    }

    pub fn is_delivered(&self) -> bool {
        matches!(self, RenderOutcome::Delivered(_))
    }

    pub fn delivery_error(&self) -> Option<&DeliveryError> {
        match self {
            RenderOutcome::Delivered(_) => None,
            RenderOutcome::Undelivered { error, .. } => Some(error),
        }
    }
}
