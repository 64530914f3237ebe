use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("SVG write error: {0}")]
    Svg(String),

    #[error("no data to chart")]
    NoData,
}
