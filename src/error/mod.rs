use thiserror::Error;

use crate::notification::ValidationError;
use crate::template::{TemplateError, TemplateKind};

/// Failures that abort a render before a payload exists.
///
/// Delivery failures are not represented here; see `RenderOutcome`.
#[derive(Error, Debug)]
pub enum NotificationError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Email template not found. Please contact to admin. (template: {0})")]
    TemplateNotFound(TemplateKind),

    #[error("Template store error: {0}")]
    TemplateStore(#[from] TemplateError),
}

impl NotificationError {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            NotificationError::Validation(_) => "VALIDATION_ERROR",
            NotificationError::TemplateNotFound(_) => "TEMPLATE_NOT_FOUND",
            NotificationError::TemplateStore(_) => "TEMPLATE_STORE_ERROR",
        }
    }
}

pub type NotificationResult<T> = std::result::Result<T, NotificationError>;
