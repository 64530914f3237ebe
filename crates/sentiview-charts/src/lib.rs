//! SVG chart rendering for analysis results.
//!
//! Three chart types mirror the visualization choices of the tool: a bar
//! chart and a pie chart of the label distribution, and word clouds over the
//! cleaned text. Charts are self-contained SVG documents written with the
//! XML writer, sized from [`sentiview_core::AppConfig`].

pub mod bar;
pub mod error;
pub mod palette;
pub mod pie;
mod svg;
pub mod wordcloud;

pub use bar::render_bar_chart;
pub use error::ChartError;
pub use pie::render_pie_chart;
pub use wordcloud::render_word_cloud;
