use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::chart::config::ChartConfig;
use crate::error::Result;

/// One line on a curve chart.
pub(crate) struct Series<'a> {
    pub label: &'a str,
    pub color: &'static RGBColor,
    pub values: &'a [f64],
}

/// A fully resolved curve chart: caption, y-axis label and upper bound, and
/// the series to draw. Epoch `k` of a series is plotted at x = `k` (1-based).
pub(crate) struct CurveChart<'a> {
    pub caption: String,
    pub y_label: &'a str,
    pub y_max: f64,
    pub series: Vec<Series<'a>>,
}

impl CurveChart<'_> {
    /// Renders the chart as an SVG file at `path`.
    pub fn render_to_file(&self, config: &ChartConfig, path: &Path) -> Result<()> {
        let root = SVGBackend::new(path, (config.width, config.height)).into_drawing_area();
        self.draw(&root)?;
        root.present()?;
        Ok(())
    }

    /// Renders the chart into an in-memory SVG document.
    pub fn render_to_string(&self, config: &ChartConfig) -> Result<String> {
        let mut svg = String::new();
        {
            let root =
                SVGBackend::with_string(&mut svg, (config.width, config.height)).into_drawing_area();
            self.draw(&root)?;
            root.present()?;
        }
        Ok(svg)
    }

    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> Result<()> {
        root.fill(&WHITE)?;

        let epochs = self
            .series
            .iter()
            .map(|series| series.values.len())
            .max()
            .unwrap_or(0) as u32;
        // A one-epoch run still needs a non-degenerate axis.
        let x_max = epochs.max(2);

        let mut chart = ChartBuilder::on(root)
            .caption(&self.caption, ("sans-serif", 30))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(40)
            .build_cartesian_2d(1u32..x_max, 0f64..self.y_max)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .disable_y_mesh()
            .x_desc("Epochs")
            .y_desc(self.y_label)
            .draw()?;

        for series in &self.series {
            let color = series.color;
            chart
                .draw_series(LineSeries::new(
                    series
                        .values
                        .iter()
                        .enumerate()
                        .map(|(index, &value)| (index as u32 + 1, value)),
                    color,
                ))?
                .label(series.label)
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
        }

        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()?;

        Ok(())
    }
}

/// Largest finite value of any series, for y-axis scaling.
pub(crate) fn max_value(series: &[&[f64]]) -> f64 {
    series
        .iter()
        .flat_map(|values| values.iter())
        .copied()
        .filter(|value| value.is_finite())
        .fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_value_spans_all_series() {
        let a = [0.2, 0.9, 0.4];
        let b = [1.3, 0.1];
        assert_eq!(max_value(&[&a, &b]), 1.3);
    }

    #[test]
    fn test_max_value_ignores_non_finite() {
        let a = [0.5, f64::NAN, f64::INFINITY];
        assert_eq!(max_value(&[&a]), 0.5);
    }
}
