use std::sync::Arc;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};

use attendance_notifier::config::Settings;
use attendance_notifier::delivery::LogDelivery;
use attendance_notifier::notification::{AttendanceRenderer, NotificationRequest, RenderOutcome};
use attendance_notifier::telemetry::init_telemetry;
use attendance_notifier::template::{create_template_store, Template, TemplateKind};

/// Reads newline-delimited JSON requests from stdin and renders each one.
#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::new()?;
    init_telemetry(&settings.logging)?;
    tracing::info!("Configuration loaded");

    let store = create_template_store(TemplateKind::Attendance, default_attendance_template());
    tracing::info!(templates = store.count(), "Template store seeded");
    let renderer =
        AttendanceRenderer::with_config(store, Arc::new(LogDelivery), settings.render.clone());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut line_no = 0usize;

    while let Some(line) = lines.next_line().await? {
        line_no += 1;
        if line.trim().is_empty() {
            continue;
        }

        let request: NotificationRequest = match serde_json::from_str(&line) {
            Ok(request) => request,
            Err(e) => {
                tracing::warn!(line = line_no, error = %e, "Skipping malformed request");
                continue;
            }
        };

        match renderer.render(&request).await {
            Ok(RenderOutcome::Delivered(payload)) => {
                tracing::info!(line = line_no, subject = %payload.subject, "Rendered");
            }
            Ok(RenderOutcome::Undelivered { error, .. }) => {
                tracing::warn!(line = line_no, error = %error, "Rendered but not delivered");
            }
            Err(e) => {
                tracing::warn!(line = line_no, code = e.code(), error = %e, "Request rejected");
            }
        }
    }

    tracing::info!(requests = line_no, "Input exhausted, shutting down");
    Ok(())
}

fn default_attendance_template() -> Template {
    Template::attendance(
        "[[REQUEST-TYPE]] request update",
        "Hi,",
        "The following [[REQUEST-TYPE]] request has been updated.",
        "+1 555 0100",
        "The HR Team",
        "This is an automated message, please do not reply.",
    )
}
