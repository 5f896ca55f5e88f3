//! Attendance notification requests, rendering and outcomes.

mod payload;
mod renderer;
mod request;
mod status;

pub use payload::{RenderOutcome, RenderedPayload};
pub use renderer::AttendanceRenderer;
pub use request::{NotificationRequest, ValidationError};
pub use status::ActionStatus;
