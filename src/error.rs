use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong between a history file and a finished chart.
#[derive(Debug, Error)]
pub enum Error {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid history JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The history holds no metric series, or every series is empty.
    #[error("history is empty (no metrics or zero epochs)")]
    EmptyHistory,

    #[error("metric `{0}` not found in history")]
    MetricMissing(String),

    /// Series lengths disagree, so no epoch axis can be derived.
    #[error("metric `{name}` has {len} values but the run spans {epochs} epochs")]
    LengthMismatch {
        name: String,
        len: usize,
        epochs: usize,
    },

    #[error("chart rendering failed: {0}")]
    Render(String),
}

impl<E> From<plotters::drawing::DrawingAreaErrorKind<E>> for Error
where
    E: std::error::Error + Send + Sync,
{
    fn from(err: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        Error::Render(err.to_string())
    }
}
