use std::sync::Arc;

use traincurve::chart::{self, ChartConfig};
use traincurve::{History, Result, RunSummary};

/// Everything the viewer serves, rendered once at startup and immutable
/// afterwards.
pub struct ViewerState {
    /// Path of the history file, shown in the page header.
    pub source_name: String,
    pub summary: RunSummary,
    pub accuracy_svg: String,
    /// Present only when the history recorded a loss series.
    pub loss_svg: Option<String>,
}

pub type SharedState = Arc<ViewerState>;

impl ViewerState {
    /// Loads a history file and renders its charts into memory.
    pub fn load(path: &str) -> Result<ViewerState> {
        let history = History::load_json(path)?;
        let config = ChartConfig::default();

        let accuracy_svg = chart::accuracy_svg(&history, &config)?;
        let loss_svg = match history.loss() {
            Some(_) => Some(chart::loss_svg(&history, &config)?),
            None => None,
        };

        Ok(ViewerState {
            source_name: path.to_owned(),
            summary: RunSummary::of(&history),
            accuracy_svg,
            loss_svg,
        })
    }
}
