use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// First missing or invalid field of a `NotificationRequest`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("To address is missing.")]
    MissingRecipients,

    #[error("Request type is missing.")]
    MissingRequestType,

    #[error("Developer name is missing.")]
    MissingSubjectName,

    #[error("Action type is missing.")]
    MissingActionType,

    #[error("Days count is missing.")]
    NegativeDayCount,

    #[error("From date is missing.")]
    MissingFromDate,

    #[error("To date is missing.")]
    MissingToDate,
}

/// Treat an explicit `null` the same as an absent key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Attendance event to notify recipients about.
///
/// Fields are deserialized leniently (absent or `null`) so that a missing
/// value is reported by `validate` rather than by the decoder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationRequest {
    /// Addresses the rendered message goes to
    #[serde(default, alias = "toAddress", deserialize_with = "null_as_default")]
    pub recipients: Vec<String>,

    /// Kind of attendance action, e.g. "Leave" or "WFH"
    #[serde(default, deserialize_with = "null_as_default")]
    pub request_type: String,

    /// Display name of the employee the request belongs to
    #[serde(default, alias = "developerName", deserialize_with = "null_as_default")]
    pub subject_name: String,

    /// "submitted", "approved", anything else reads as rejected
    #[serde(default, deserialize_with = "null_as_default")]
    pub action_type: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub day_count: i32,

    #[serde(default)]
    pub from_date: Option<NaiveDate>,

    /// Not checked against `from_date`
    #[serde(default)]
    pub to_date: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_type: Option<String>,
}

impl NotificationRequest {
    /// Check the request, reporting only the first violation.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.recipients.is_empty() {
            return Err(ValidationError::MissingRecipients);
        }

        if self.request_type.is_empty() {
            return Err(ValidationError::MissingRequestType);
        }

        if self.subject_name.is_empty() {
            return Err(ValidationError::MissingSubjectName);
        }

        if self.action_type.is_empty() {
            return Err(ValidationError::MissingActionType);
        }

        if self.day_count < 0 {
            return Err(ValidationError::NegativeDayCount);
        }

        if self.from_date.is_none() {
            return Err(ValidationError::MissingFromDate);
        }

        if self.to_date.is_none() {
            return Err(ValidationError::MissingToDate);
        }

        Ok(())
    }
}
