use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an unparseable value or the
/// thresholds are ordered wrongly.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for
/// testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an unparseable value or the
/// thresholds are ordered wrongly.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_f32 = |var: &str, default: &str| -> Result<f32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<f32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let positive_threshold = parse_f32("SENTIVIEW_POSITIVE_THRESHOLD", "0.05")?;
    let negative_threshold = parse_f32("SENTIVIEW_NEGATIVE_THRESHOLD", "-0.05")?;

    if positive_threshold < negative_threshold {
        return Err(ConfigError::ThresholdOrder {
            positive: positive_threshold,
            negative: negative_threshold,
        });
    }

    let wordcloud_max_words = parse_usize("SENTIVIEW_WORDCLOUD_MAX_WORDS", "60")?;
    let chart_width = parse_u32("SENTIVIEW_CHART_WIDTH", "800")?;
    let chart_height = parse_u32("SENTIVIEW_CHART_HEIGHT", "400")?;
    let log_level = or_default("SENTIVIEW_LOG_LEVEL", "info");

    Ok(AppConfig {
        positive_threshold,
        negative_threshold,
        wordcloud_max_words,
        chart_width,
        chart_height,
        log_level,
    })
}
