use crate::config::StatusColors;

/// Action type reduced to the three cases that affect presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionStatus {
    Submitted,
    Approved,
    /// Rejected, empty, absent or unrecognized
    Other,
}

impl ActionStatus {
    /// Case-insensitive classification of an action label.
    pub fn classify(label: Option<&str>) -> Self {
        match label {
            Some(l) if l.eq_ignore_ascii_case("submitted") => ActionStatus::Submitted,
            Some(l) if l.eq_ignore_ascii_case("approved") => ActionStatus::Approved,
            _ => ActionStatus::Other,
        }
    }
}

impl StatusColors {
    pub fn color_for(&self, status: ActionStatus) -> &str {
        match status {
            ActionStatus::Submitted => &self.submitted,
            ActionStatus::Approved => &self.approved,
            ActionStatus::Other => &self.other,
        }
    }
}
