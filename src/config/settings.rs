use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    /// chrono format string used for the `__DATE__` token
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default)]
    pub status_colors: StatusColors,
}

/// Colors injected for `__STATUSCOLOR__`, keyed by action type
#[derive(Debug, Clone, Deserialize)]
pub struct StatusColors {
    #[serde(default = "default_submitted_color")]
    pub submitted: String,
    #[serde(default = "default_approved_color")]
    pub approved: String,
    /// Used for rejections and any unrecognized action
    #[serde(default = "default_other_color")]
    pub other: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Fallback filter when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub level: String,
    /// "pretty" or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_date_format() -> String {
    "%A, %d %B %Y".to_string()
}

fn default_submitted_color() -> String {
    "#0D6EFD".to_string()
}

fn default_approved_color() -> String {
    "#198754".to_string()
}

fn default_other_color() -> String {
    "#DC3545".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

/// Prefix for environment overrides
const ENV_PREFIX: &str = "ATTENDANCE";

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        // Load .env file if exists
        let _ = dotenvy::dotenv();

        Self::load(environment())
    }

    fn load(env_source: Environment) -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let builder = Config::builder()
            .set_default("render.date_format", default_date_format())?
            .set_default("render.status_colors.submitted", default_submitted_color())?
            .set_default("render.status_colors.approved", default_approved_color())?
            .set_default("render.status_colors.other", default_other_color())?
            .set_default("logging.level", default_log_level())?
            .set_default("logging.format", default_log_format())?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(env_source);

        builder.build()?.try_deserialize()
    }
}

/// ATTENDANCE_RENDER__DATE_FORMAT, ATTENDANCE_RENDER__STATUS_COLORS__APPROVED,
/// ATTENDANCE_LOGGING__LEVEL, ...
fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            status_colors: StatusColors::default(),
        }
    }
}

impl Default for StatusColors {
    fn default() -> Self {
        Self {
            submitted: default_submitted_color(),
            approved: default_approved_color(),
            other: default_other_color(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let settings = Settings::default();
        assert_eq!(settings.render.date_format, "%A, %d %B %Y");
        assert_eq!(settings.render.status_colors.submitted, "#0D6EFD");
        assert_eq!(settings.render.status_colors.approved, "#198754");
        assert_eq!(settings.render.status_colors.other, "#DC3545");
        assert_eq!(settings.logging.level, "info");
        assert_eq!(settings.logging.format, "pretty");
    }

    #[test]
    fn test_partial_status_colors_keep_defaults() {
        let colors: StatusColors =
            serde_json::from_value(serde_json::json!({ "approved": "green" })).unwrap();
        assert_eq!(colors.approved, "green");
        assert_eq!(colors.submitted, "#0D6EFD");
        assert_eq!(colors.other, "#DC3545");
    }

    #[test]
    fn test_environment_overrides_nested_keys() {
        let mut vars = config::Map::new();
        vars.insert(
            "ATTENDANCE_RENDER__DATE_FORMAT".to_string(),
            "%Y-%m-%d".to_string(),
        );
        vars.insert(
            "ATTENDANCE_RENDER__STATUS_COLORS__APPROVED".to_string(),
            "green".to_string(),
        );
        vars.insert(
            "ATTENDANCE_LOGGING__FORMAT".to_string(),
            "json".to_string(),
        );
        vars.insert("RENDER_DATE_FORMAT".to_string(), "ignored".to_string());

        let settings = Settings::load(environment().source(Some(vars))).unwrap();

        assert_eq!(settings.render.date_format, "%Y-%m-%d");
        assert_eq!(settings.render.status_colors.approved, "green");
        assert_eq!(settings.render.status_colors.submitted, "#0D6EFD");
        assert_eq!(settings.logging.format, "json");
    }
}
