use std::path::Path;

use plotters::style::{BLUE, RED};

use crate::chart::config::ChartConfig;
use crate::chart::curves::{max_value, CurveChart, Series};
use crate::error::Result;
use crate::history::record::History;

const CAPTION: &str = "Training and Validation loss";

/// Renders the loss chart to an SVG file.
///
/// Same shape as the accuracy chart, with the y-axis scaled to the data:
/// training loss in red, validation loss (when present) in blue.
pub fn render_loss<P: AsRef<Path>>(
    history: &History,
    config: &ChartConfig,
    path: P,
) -> Result<()> {
    chart_for(history, config)?.render_to_file(config, path.as_ref())
}

/// Renders the loss chart into an in-memory SVG document.
pub fn loss_svg(history: &History, config: &ChartConfig) -> Result<String> {
    chart_for(history, config)?.render_to_string(config)
}

fn chart_for<'a>(history: &'a History, config: &ChartConfig) -> Result<CurveChart<'a>> {
    let train = history.require_loss()?;
    let val = history.val_loss();

    let mut series = vec![Series {
        label: "Training loss",
        color: &RED,
        values: train,
    }];
    if let Some(values) = val {
        series.push(Series {
            label: "validation loss",
            color: &BLUE,
            values,
        });
    }

    let data_max = max_value(&[train, val.unwrap_or(&[])]);
    // 5% headroom so the worst epoch does not sit on the frame.
    let y_max = if data_max > 0.0 { data_max * 1.05 } else { 1.0 };

    Ok(CurveChart {
        caption: config.caption.clone().unwrap_or_else(|| CAPTION.to_owned()),
        y_label: "Loss",
        y_max,
        series,
    })
}
