pub mod error;
pub mod history;
pub mod chart;

// Convenience re-exports
pub use error::{Error, Result};
pub use history::record::History;
pub use history::summary::{BestEpoch, RunSummary};
pub use chart::config::ChartConfig;
