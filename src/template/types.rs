//! Template types and error definitions

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Markup skeleton for attendance notifications, shipped with the binary.
pub const ATTENDANCE_MARKUP: &str = include_str!("../../resources/attendance_applied.html");

/// Template store error type
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template store unavailable: {0}")]
    Unavailable(String),
}

/// Result type for template operations
pub type TemplateResult<T> = Result<T, TemplateError>;

/// Identifier of a stored template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateKind {
    /// Leave / WFH submission and review notifications
    Attendance,
}

impl TemplateKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateKind::Attendance => "attendance",
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored message template.
///
/// The text fragments are injected into `markup`, which carries the
/// placeholder tokens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    /// Title, may contain `[[REQUEST-TYPE]]`
    pub title_text: String,

    pub salutation: String,

    pub body_content: String,

    /// Optional note rendered as "Note: ..."
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    pub contact_no: String,

    pub signature_block: String,

    pub closing_statement: String,

    /// Raw body with placeholder tokens
    #[serde(default = "default_markup")]
    pub markup: String,
}

fn default_markup() -> String {
    ATTENDANCE_MARKUP.to_string()
}

impl Template {
    /// Build an attendance template around the bundled markup.
    pub fn attendance(
        title_text: impl Into<String>,
        salutation: impl Into<String>,
        body_content: impl Into<String>,
        contact_no: impl Into<String>,
        signature_block: impl Into<String>,
        closing_statement: impl Into<String>,
    ) -> Self {
        Self {
            title_text: title_text.into(),
            salutation: salutation.into(),
            body_content: body_content.into(),
            note: None,
            contact_no: contact_no.into(),
            signature_block: signature_block.into(),
            closing_statement: closing_statement.into(),
            markup: default_markup(),
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn with_markup(mut self, markup: impl Into<String>) -> Self {
        self.markup = markup.into();
        self
    }
}
