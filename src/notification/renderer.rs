//! Attendance notification rendering pipeline.
//!
//! `render` validates the request, fetches the attendance template, binds
//! every placeholder token and hands the payload to the delivery service.
//! Validation and template failures are returned as errors; a delivery
//! failure is logged and reported as `RenderOutcome::Undelivered`.

use std::fmt::Write;
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::Instrument;
use uuid::Uuid;

use crate::config::RenderConfig;
use crate::delivery::DeliveryService;
use crate::error::{NotificationError, NotificationResult};
use crate::metrics::RenderMetrics;
use crate::template::substitution::{
    BODY, COMPANY_NAME, DATE, DEVELOPER_NAME, ENCLOSING_STATEMENT, MESSAGE, MOBILE_NO, NO_OF_DAYS,
    REQUEST_TYPE, SALUTATION, STATUS, STATUS_COLOR, WORK_TYPE,
};
use crate::template::{Template, TemplateKind, TemplateSource, TokenSet};

use super::payload::{RenderOutcome, RenderedPayload};
use super::request::NotificationRequest;
use super::status::ActionStatus;

const FALLBACK_DATE_FORMAT: &str = "%A, %d %B %Y";

/// Renders attendance notifications and dispatches them.
pub struct AttendanceRenderer {
    templates: Arc<dyn TemplateSource>,
    delivery: Arc<dyn DeliveryService>,
    config: RenderConfig,
}

impl AttendanceRenderer {
    /// Create a renderer with the default render settings
    pub fn new(templates: Arc<dyn TemplateSource>, delivery: Arc<dyn DeliveryService>) -> Self {
        Self::with_config(templates, delivery, RenderConfig::default())
    }

    pub fn with_config(
        templates: Arc<dyn TemplateSource>,
        delivery: Arc<dyn DeliveryService>,
        config: RenderConfig,
    ) -> Self {
        Self {
            templates,
            delivery,
            config,
        }
    }

    /// Render `request` and hand the payload to the delivery service.
    ///
    /// Returns `Err` only when no payload could be produced. A failed
    /// delivery still yields `Ok(RenderOutcome::Undelivered { .. })`, so
    /// callers that only check for `Err` will not notice it.
    pub async fn render(&self, request: &NotificationRequest) -> NotificationResult<RenderOutcome> {
        let span = tracing::info_span!(
            "render_attendance",
            render_id = %Uuid::new_v4(),
            request_type = %request.request_type,
            action_type = %request.action_type,
        );

        async {
            let payload = match self.compose(request).await {
                Ok(payload) => payload,
                Err(e) => {
                    tracing::error!(code = e.code(), error = %e, "Render failed");
                    RenderMetrics::record_failed(&e);
                    return Err(e);
                }
            };

            match self.delivery.send(&payload).await {
                Ok(()) => {
                    tracing::info!(
                        recipients = payload.recipients.len(),
                        "Notification dispatched"
                    );
                    RenderMetrics::record_delivered();
                    Ok(RenderOutcome::Delivered(payload))
                }
                Err(error) => {
                    tracing::error!(error = %error, "Delivery failed, payload dropped");
                    RenderMetrics::record_undelivered();
                    Ok(RenderOutcome::Undelivered { payload, error })
                }
            }
        }
        .instrument(span)
        .await
    }

    /// Validate, fetch and substitute without dispatching.
    pub async fn compose(&self, request: &NotificationRequest) -> NotificationResult<RenderedPayload> {
        request.validate()?;
        tracing::info!("Request validated");

        tracing::info!("Reading email template from store");
        let template = self
            .templates
            .get_template(TemplateKind::Attendance)
            .await?
            .ok_or(NotificationError::TemplateNotFound(TemplateKind::Attendance))?;
        tracing::info!("Template fetched");

        let payload = self.build_payload(request, &template);
        tracing::info!("Template converted");

        Ok(payload)
    }

    /// Pure rendering step; neither input is modified.
    pub fn build_payload(&self, request: &NotificationRequest, template: &Template) -> RenderedPayload {
        let title = template
            .title_text
            .replace(REQUEST_TYPE, &request.request_type);

        let status = ActionStatus::classify(Some(request.action_type.as_str()));
        let status_color = self.config.status_colors.color_for(status);

        let date = request.from_date.map(|d| self.format_date(d));
        let message = template.note.as_ref().map(|note| format!("Note: {}", note));

        let tokens = TokenSet::new()
            .bind(SALUTATION, template.salutation.as_str())
            .bind(BODY, template.body_content.as_str())
            .bind(REQUEST_TYPE, request.request_type.as_str())
            .bind_opt(WORK_TYPE, request.work_type.as_deref())
            .bind(DEVELOPER_NAME, request.subject_name.as_str())
            .bind_opt(DATE, date.as_deref())
            .bind(NO_OF_DAYS, request.day_count.to_string())
            .bind(STATUS, request.action_type.as_str())
            .bind(STATUS_COLOR, status_color)
            .bind_opt(MESSAGE, message.as_deref())
            .bind(MOBILE_NO, template.contact_no.as_str())
            .bind(COMPANY_NAME, template.signature_block.as_str())
            .bind(ENCLOSING_STATEMENT, template.closing_statement.as_str());

        RenderedPayload {
            subject: title.clone(),
            title,
            recipients: request.recipients.clone(),
            body: tokens.apply(&template.markup),
            attachments: Vec::new(),
        }
    }

    fn format_date(&self, date: NaiveDate) -> String {
        let mut out = String::new();
        if write!(out, "{}", date.format(&self.config.date_format)).is_err() {
            tracing::warn!(
                format = %self.config.date_format,
                "Invalid date format, using default"
            );
            out = date.format(FALLBACK_DATE_FORMAT).to_string();
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StatusColors;
    use crate::delivery::LogDelivery;
    use crate::template::substitution::ALL_TOKENS;
    use crate::template::MemoryTemplateStore;

    fn renderer_with(config: RenderConfig) -> AttendanceRenderer {
        AttendanceRenderer::with_config(
            Arc::new(MemoryTemplateStore::new()),
            Arc::new(LogDelivery),
            config,
        )
    }

    fn request() -> NotificationRequest {
        NotificationRequest {
            recipients: vec!["a@x.com".to_string(), "b@x.com".to_string()],
            request_type: "WFH".to_string(),
            subject_name: "Sam Roe".to_string(),
            action_type: "Submitted".to_string(),
            day_count: 0,
            from_date: NaiveDate::from_ymd_opt(2024, 2, 29),
            to_date: NaiveDate::from_ymd_opt(2024, 2, 29),
            work_type: None,
        }
    }

    fn template() -> Template {
        Template::attendance(
            "[[REQUEST-TYPE]] request",
            "Hello,",
            "A request needs your attention.",
            "+1 555 0100",
            "Acme Corp",
            "Best regards",
        )
    }

    #[test]
    fn test_title_and_subject_are_equal() {
        let payload = renderer_with(RenderConfig::default()).build_payload(&request(), &template());
        assert_eq!(payload.title, "WFH request");
        assert_eq!(payload.subject, payload.title);
        assert_eq!(payload.recipients, vec!["a@x.com", "b@x.com"]);
        assert!(payload.attachments.is_empty());
    }

    #[test]
    fn test_all_tokens_consumed() {
        let payload = renderer_with(RenderConfig::default())
            .build_payload(&request(), &template().with_note("Bring a laptop"));

        for token in ALL_TOKENS {
            assert!(!payload.body.contains(token), "{} left in body", token);
        }
        assert!(payload.body.contains("Thursday, 29 February 2024"));
        assert!(payload.body.contains("#0D6EFD"));
    }

    #[test]
    fn test_absent_work_type_and_note_render_empty() {
        let markup = "[__WORKTYPE__][__MESSAGE__]";
        let payload = renderer_with(RenderConfig::default())
            .build_payload(&request(), &template().with_markup(markup));

        assert_eq!(payload.body, "[][]");
        assert!(!payload.body.contains("null"));
    }

    #[test]
    fn test_inputs_are_not_modified() {
        let request = request();
        let template = template().with_note("n");
        let (request_before, template_before) = (request.clone(), template.clone());

        let _ = renderer_with(RenderConfig::default()).build_payload(&request, &template);

        assert_eq!(request, request_before);
        assert_eq!(template, template_before);
    }

    #[test]
    fn test_configured_colors_and_date_format() {
        let config = RenderConfig {
            date_format: "%Y-%m-%d".to_string(),
            status_colors: StatusColors {
                submitted: "blue".to_string(),
                ..Default::default()
            },
        };
        let markup = "__DATE__ __STATUSCOLOR__";
        let payload =
            renderer_with(config).build_payload(&request(), &template().with_markup(markup));

        assert_eq!(payload.body, "2024-02-29 blue");
    }

    #[test]
    fn test_invalid_date_format_falls_back() {
        let config = RenderConfig {
            date_format: "%Q".to_string(),
            ..Default::default()
        };
        let payload =
            renderer_with(config).build_payload(&request(), &template().with_markup("__DATE__"));

        assert_eq!(payload.body, "Thursday, 29 February 2024");
    }
}
