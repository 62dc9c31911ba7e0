use std::fmt;

use crate::history::record::History;

/// Best value of a series together with the 1-based epoch where it first
/// occurred.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BestEpoch {
    pub epoch: usize,
    pub value: f64,
}

/// Derived best/final figures for one training run.
///
/// `val_*` fields are `None` for runs without a validation split, and the
/// accuracy/loss fields are `None` when the history never recorded that
/// metric.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub epochs: usize,
    pub final_accuracy: Option<f64>,
    pub best_accuracy: Option<BestEpoch>,
    pub final_val_accuracy: Option<f64>,
    pub best_val_accuracy: Option<BestEpoch>,
    pub final_loss: Option<f64>,
    pub final_val_loss: Option<f64>,
}

impl RunSummary {
    pub fn of(history: &History) -> RunSummary {
        RunSummary {
            epochs: history.epochs(),
            final_accuracy: last(history.accuracy()),
            best_accuracy: history.accuracy().and_then(best_of),
            final_val_accuracy: last(history.val_accuracy()),
            best_val_accuracy: history.val_accuracy().and_then(best_of),
            final_loss: last(history.loss()),
            final_val_loss: last(history.val_loss()),
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Run summary ({} epochs)", self.epochs)?;
        if let Some(value) = self.final_accuracy {
            write!(f, "  training accuracy:   final {:.4}", value)?;
            if let Some(best) = self.best_accuracy {
                write!(f, ", best {:.4} @ epoch {}", best.value, best.epoch)?;
            }
            writeln!(f)?;
        }
        if let Some(value) = self.final_val_accuracy {
            write!(f, "  validation accuracy: final {:.4}", value)?;
            if let Some(best) = self.best_val_accuracy {
                write!(f, ", best {:.4} @ epoch {}", best.value, best.epoch)?;
            }
            writeln!(f)?;
        }
        if let Some(value) = self.final_loss {
            writeln!(f, "  training loss:       final {:.4}", value)?;
        }
        if let Some(value) = self.final_val_loss {
            writeln!(f, "  validation loss:     final {:.4}", value)?;
        }
        Ok(())
    }
}

fn last(series: Option<&[f64]>) -> Option<f64> {
    series.and_then(|values| values.last().copied())
}

/// First epoch that reached the series maximum.
fn best_of(series: &[f64]) -> Option<BestEpoch> {
    let mut best: Option<BestEpoch> = None;
    for (index, &value) in series.iter().enumerate() {
        let improved = match best {
            Some(current) => value > current.value,
            None => true,
        };
        if improved {
            best = Some(BestEpoch { epoch: index + 1, value });
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn history_with(pairs: &[(&str, &[f64])]) -> History {
        let metrics: BTreeMap<String, Vec<f64>> = pairs
            .iter()
            .map(|(name, values)| ((*name).to_owned(), values.to_vec()))
            .collect();
        History::from_metrics(metrics).unwrap()
    }

    #[test]
    fn test_final_and_best_values() {
        let history = history_with(&[
            ("acc", &[0.5, 0.9, 0.7]),
            ("val_acc", &[0.4, 0.6, 0.8]),
            ("loss", &[1.0, 0.6, 0.7]),
        ]);
        let summary = RunSummary::of(&history);

        assert_eq!(summary.epochs, 3);
        assert_eq!(summary.final_accuracy, Some(0.7));
        assert_eq!(summary.best_accuracy, Some(BestEpoch { epoch: 2, value: 0.9 }));
        assert_eq!(summary.final_val_accuracy, Some(0.8));
        assert_eq!(summary.best_val_accuracy, Some(BestEpoch { epoch: 3, value: 0.8 }));
        assert_eq!(summary.final_loss, Some(0.7));
        assert_eq!(summary.final_val_loss, None);
    }

    #[test]
    fn test_best_ties_keep_first_epoch() {
        let history = history_with(&[("acc", &[0.9, 0.9, 0.9])]);
        let summary = RunSummary::of(&history);
        assert_eq!(summary.best_accuracy, Some(BestEpoch { epoch: 1, value: 0.9 }));
    }

    #[test]
    fn test_display_skips_absent_metrics() {
        let history = history_with(&[("loss", &[1.0, 0.5])]);
        let text = RunSummary::of(&history).to_string();

        assert!(text.contains("Run summary (2 epochs)"));
        assert!(text.contains("training loss"));
        assert!(!text.contains("training accuracy"));
        assert!(!text.contains("validation"));
    }
}
