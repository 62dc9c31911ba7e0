use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Serialize, Deserialize};

use crate::error::{Error, Result};

// Both Keras naming generations occur in saved histories; older exports use
// the short forms, newer ones spell the metric out.
const ACCURACY_KEYS: &[&str] = &["acc", "accuracy"];
const VAL_ACCURACY_KEYS: &[&str] = &["val_acc", "val_accuracy"];
const LOSS_KEYS: &[&str] = &["loss"];
const VAL_LOSS_KEYS: &[&str] = &["val_loss"];

/// A record of per-epoch training metrics, keyed by metric name.
///
/// The serialized form is exactly the metric map a trainer dumps at the end
/// of a run, e.g. `{"acc": [...], "val_acc": [...], "loss": [...]}`.
/// Every series covers the same epochs; epoch `k` (1-based) is index `k - 1`
/// in every series. `from_metrics` / `load_json` enforce this, so a `History`
/// in hand is always consistent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    metrics: BTreeMap<String, Vec<f64>>,
}

impl History {
    /// Builds a history from a name → series map, rejecting empty maps and
    /// series of unequal length.
    pub fn from_metrics(metrics: BTreeMap<String, Vec<f64>>) -> Result<History> {
        let history = History { metrics };
        history.validate()?;
        Ok(history)
    }

    /// Deserializes a history from a JSON file and validates it.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<History> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let history: History = serde_json::from_reader(reader)?;
        history.validate()?;
        Ok(history)
    }

    /// Serializes the history to a pretty-printed JSON file.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Number of epochs the run spans (the common length of every series).
    pub fn epochs(&self) -> usize {
        self.metrics.values().next().map_or(0, Vec::len)
    }

    /// Series for an exact metric name.
    pub fn metric(&self, name: &str) -> Option<&[f64]> {
        self.metrics.get(name).map(Vec::as_slice)
    }

    /// All metric names present, in stable (sorted) order.
    pub fn metric_names(&self) -> impl Iterator<Item = &str> {
        self.metrics.keys().map(String::as_str)
    }

    /// Training accuracy series, whichever spelling the trainer used.
    pub fn accuracy(&self) -> Option<&[f64]> {
        self.first_of(ACCURACY_KEYS)
    }

    /// Validation accuracy series; `None` for runs without a validation split.
    pub fn val_accuracy(&self) -> Option<&[f64]> {
        self.first_of(VAL_ACCURACY_KEYS)
    }

    /// Training loss series.
    pub fn loss(&self) -> Option<&[f64]> {
        self.first_of(LOSS_KEYS)
    }

    /// Validation loss series; `None` for runs without a validation split.
    pub fn val_loss(&self) -> Option<&[f64]> {
        self.first_of(VAL_LOSS_KEYS)
    }

    /// Training accuracy, or `MetricMissing` — the accuracy chart cannot be
    /// drawn without it.
    pub fn require_accuracy(&self) -> Result<&[f64]> {
        self.accuracy()
            .ok_or_else(|| Error::MetricMissing("acc".to_owned()))
    }

    /// Training loss, or `MetricMissing`.
    pub fn require_loss(&self) -> Result<&[f64]> {
        self.loss().ok_or_else(|| Error::MetricMissing("loss".to_owned()))
    }

    fn first_of(&self, keys: &[&str]) -> Option<&[f64]> {
        keys.iter().find_map(|key| self.metric(key))
    }

    fn validate(&self) -> Result<()> {
        let epochs = self.epochs();
        if epochs == 0 {
            return Err(Error::EmptyHistory);
        }
        for (name, series) in &self.metrics {
            if series.len() != epochs {
                return Err(Error::LengthMismatch {
                    name: name.clone(),
                    len: series.len(),
                    epochs,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> History {
        let mut metrics = BTreeMap::new();
        metrics.insert("acc".to_owned(), vec![0.5, 0.7, 0.9]);
        metrics.insert("val_acc".to_owned(), vec![0.4, 0.6, 0.8]);
        metrics.insert("loss".to_owned(), vec![1.2, 0.8, 0.5]);
        History::from_metrics(metrics).unwrap()
    }

    #[test]
    fn test_epochs_is_series_length() {
        assert_eq!(sample().epochs(), 3);
    }

    #[test]
    fn test_canonical_accessors() {
        let history = sample();
        assert_eq!(history.accuracy(), Some(&[0.5, 0.7, 0.9][..]));
        assert_eq!(history.val_accuracy(), Some(&[0.4, 0.6, 0.8][..]));
        assert_eq!(history.loss(), Some(&[1.2, 0.8, 0.5][..]));
        assert_eq!(history.val_loss(), None);
    }

    #[test]
    fn test_long_form_aliases_resolve() {
        let mut metrics = BTreeMap::new();
        metrics.insert("accuracy".to_owned(), vec![0.3, 0.6]);
        metrics.insert("val_accuracy".to_owned(), vec![0.2, 0.5]);
        let history = History::from_metrics(metrics).unwrap();

        assert_eq!(history.accuracy(), Some(&[0.3, 0.6][..]));
        assert_eq!(history.val_accuracy(), Some(&[0.2, 0.5][..]));
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let mut metrics = BTreeMap::new();
        metrics.insert("acc".to_owned(), vec![0.5, 0.7, 0.9]);
        metrics.insert("val_acc".to_owned(), vec![0.4, 0.6]);
        let err = History::from_metrics(metrics).unwrap_err();
        assert!(matches!(err, Error::LengthMismatch { .. }));
    }

    #[test]
    fn test_empty_history_rejected() {
        let err = History::from_metrics(BTreeMap::new()).unwrap_err();
        assert!(matches!(err, Error::EmptyHistory));

        let mut metrics = BTreeMap::new();
        metrics.insert("acc".to_owned(), Vec::new());
        let err = History::from_metrics(metrics).unwrap_err();
        assert!(matches!(err, Error::EmptyHistory));
    }

    #[test]
    fn test_missing_accuracy_is_error() {
        let mut metrics = BTreeMap::new();
        metrics.insert("loss".to_owned(), vec![1.0, 0.5]);
        let history = History::from_metrics(metrics).unwrap();
        assert!(matches!(
            history.require_accuracy().unwrap_err(),
            Error::MetricMissing(_)
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");

        let original = sample();
        original.save_json(&path).unwrap();
        let reloaded = History::load_json(&path).unwrap();

        assert_eq!(reloaded.epochs(), 3);
        assert_eq!(reloaded.accuracy(), original.accuracy());
        assert_eq!(reloaded.loss(), original.loss());
        assert_eq!(
            reloaded.metric_names().collect::<Vec<_>>(),
            vec!["acc", "loss", "val_acc"]
        );
    }

    #[test]
    fn test_load_rejects_mismatched_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, r#"{"acc": [0.1, 0.2], "val_acc": [0.1]}"#).unwrap();

        let err = History::load_json(&path).unwrap_err();
        assert!(matches!(err, Error::LengthMismatch { .. }));
    }
}
