use std::path::Path;

use plotters::style::{BLUE, GREEN};

use crate::chart::config::ChartConfig;
use crate::chart::curves::{max_value, CurveChart, Series};
use crate::error::Result;
use crate::history::record::History;

const CAPTION: &str = "Training and Validation accuracy";

/// Renders the accuracy chart to an SVG file.
///
/// The training series is drawn in green, the validation series (when the
/// run has one) in blue, over a 1-based epoch axis. Fails with
/// `MetricMissing` if the history has no training accuracy at all.
pub fn render_accuracy<P: AsRef<Path>>(
    history: &History,
    config: &ChartConfig,
    path: P,
) -> Result<()> {
    chart_for(history, config)?.render_to_file(config, path.as_ref())
}

/// Renders the accuracy chart into an in-memory SVG document.
pub fn accuracy_svg(history: &History, config: &ChartConfig) -> Result<String> {
    chart_for(history, config)?.render_to_string(config)
}

fn chart_for<'a>(history: &'a History, config: &ChartConfig) -> Result<CurveChart<'a>> {
    let train = history.require_accuracy()?;
    let val = history.val_accuracy();

    let mut series = vec![Series {
        label: "Training accuracy",
        color: &GREEN,
        values: train,
    }];
    if let Some(values) = val {
        series.push(Series {
            label: "validation accuracy",
            color: &BLUE,
            values,
        });
    }

    // Accuracies live in [0, 1]; widen the axis only if the data overshoots.
    let y_max = max_value(&[train, val.unwrap_or(&[])]).max(1.0);

    Ok(CurveChart {
        caption: config.caption.clone().unwrap_or_else(|| CAPTION.to_owned()),
        y_label: "Accuracy",
        y_max,
        series,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::collections::BTreeMap;

    fn history_with(pairs: &[(&str, &[f64])]) -> History {
        let metrics: BTreeMap<String, Vec<f64>> = pairs
            .iter()
            .map(|(name, values)| ((*name).to_owned(), values.to_vec()))
            .collect();
        History::from_metrics(metrics).unwrap()
    }

    #[test]
    fn test_svg_contains_caption_labels_and_legend() {
        let history = history_with(&[
            ("acc", &[0.55, 0.68, 0.74, 0.81]),
            ("val_acc", &[0.52, 0.61, 0.66, 0.70]),
        ]);
        let svg = accuracy_svg(&history, &ChartConfig::default()).unwrap();

        assert!(svg.contains("<svg"));
        assert!(svg.contains("Training and Validation accuracy"));
        assert!(svg.contains("Epochs"));
        assert!(svg.contains("Accuracy"));
        assert!(svg.contains("Training accuracy"));
        assert!(svg.contains("validation accuracy"));
    }

    #[test]
    fn test_renders_without_validation_split() {
        let history = history_with(&[("acc", &[0.5, 0.7, 0.9])]);
        let svg = accuracy_svg(&history, &ChartConfig::default()).unwrap();

        assert!(svg.contains("Training accuracy"));
        assert!(!svg.contains("validation accuracy"));
    }

    #[test]
    fn test_caption_override() {
        let history = history_with(&[("acc", &[0.5, 0.7])]);
        let config = ChartConfig {
            caption: Some("MNIST run 7".to_owned()),
            ..ChartConfig::default()
        };
        let svg = accuracy_svg(&history, &config).unwrap();

        assert!(svg.contains("MNIST run 7"));
        assert!(!svg.contains("Training and Validation accuracy"));
    }

    #[test]
    fn test_missing_accuracy_is_error() {
        let history = history_with(&[("loss", &[1.0, 0.5])]);
        let err = accuracy_svg(&history, &ChartConfig::default()).unwrap_err();
        assert!(matches!(err, Error::MetricMissing(_)));
    }

    #[test]
    fn test_render_to_file_writes_svg() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("accuracy.svg");
        let history = history_with(&[("acc", &[0.5, 0.7, 0.9])]);

        render_accuracy(&history, &ChartConfig::default(), &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("<svg"));
    }
}
