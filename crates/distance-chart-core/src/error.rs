use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("Invalid distance for '{label}': {distance} (must be positive and finite)")]
    InvalidDistance { label: String, distance: f64 },
    #[error("Invalid dimensions for '{label}': {width}x{height} (must be between 1 and 2147483647)")]
    InvalidDimensions {
        label: String,
        width: i64,
        height: i64,
    },
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Canvas too large for extent {x_max}x{y_max}")]
    CanvasTooLarge { x_max: i64, y_max: i64 },
}

pub type Result<T> = std::result::Result<T, ChartError>;
