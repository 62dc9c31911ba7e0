//! Generates a plausible synthetic training history and renders its charts,
//! so the binaries can be tried without a real training run.
//!
//! Run with:
//!   cargo run --example synthetic
//! Writes history.json, accuracy.svg and loss.svg to the working directory.

use std::collections::BTreeMap;

use anyhow::Result;
use rand::Rng;

use traincurve::chart::{self, ChartConfig};
use traincurve::{History, RunSummary};

fn main() -> Result<()> {
    let epochs = 10;
    let mut rng = rand::thread_rng();

    let mut acc = Vec::with_capacity(epochs);
    let mut val_acc = Vec::with_capacity(epochs);
    let mut loss = Vec::with_capacity(epochs);
    let mut val_loss = Vec::with_capacity(epochs);

    for epoch in 1..=epochs {
        let t = epoch as f64 / epochs as f64;
        // Saturating learning curve with a little per-epoch noise; validation
        // trails training slightly, as a real run would.
        let base_acc = 0.5 + 0.45 * (1.0 - (-3.0 * t).exp());
        let base_loss = 1.4 * (-2.5 * t).exp() + 0.1;

        acc.push((base_acc + rng.gen_range(-0.02..0.02)).clamp(0.0, 1.0));
        val_acc.push((base_acc - 0.04 + rng.gen_range(-0.03..0.03)).clamp(0.0, 1.0));
        loss.push((base_loss + rng.gen_range(-0.03..0.03)).max(0.0));
        val_loss.push((base_loss + 0.08 + rng.gen_range(-0.04..0.04)).max(0.0));
    }

    let mut metrics = BTreeMap::new();
    metrics.insert("acc".to_owned(), acc);
    metrics.insert("val_acc".to_owned(), val_acc);
    metrics.insert("loss".to_owned(), loss);
    metrics.insert("val_loss".to_owned(), val_loss);

    let history = History::from_metrics(metrics)?;
    history.save_json("history.json")?;

    let config = ChartConfig::default();
    chart::render_accuracy(&history, &config, "accuracy.svg")?;
    chart::render_loss(&history, &config, "loss.svg")?;

    print!("{}", RunSummary::of(&history));
    println!();
    println!("Wrote history.json, accuracy.svg and loss.svg.");
    println!("Try `cargo run --bin viewer -- history.json` to browse them.");

    Ok(())
}
