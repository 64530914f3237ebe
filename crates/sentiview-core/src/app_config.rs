/// Runtime configuration for analysis and chart rendering.
///
/// Every field has a default so the tool works with no environment set up;
/// see [`crate::config::load_app_config`] for the variables that override them.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Scores strictly above this are labeled Positive.
    pub positive_threshold: f32,
    /// Scores strictly below this are labeled Negative.
    pub negative_threshold: f32,
    /// Word cap for rendered word clouds.
    pub wordcloud_max_words: usize,
    /// Chart canvas width in pixels.
    pub chart_width: u32,
    /// Chart canvas height in pixels.
    pub chart_height: u32,
    /// Fallback log filter when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            positive_threshold: 0.05,
            negative_threshold: -0.05,
            wordcloud_max_words: 60,
            chart_width: 800,
            chart_height: 400,
            log_level: "info".to_string(),
        }
    }
}
