//! Plot training/validation curves from a saved history file.
//!
//! Usage: cargo run --bin traincurve -- --history history.json --out accuracy.svg

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use traincurve::chart::{self, ChartConfig};
use traincurve::{History, RunSummary};

fn main() -> Result<()> {
    env_logger::init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut history_path = PathBuf::from("history.json");
    let mut out_path = PathBuf::from("accuracy.svg");
    let mut loss_path: Option<PathBuf> = None;
    let mut config = ChartConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--history" | "-i" => {
                history_path = args.get(i + 1).map(PathBuf::from).unwrap_or(history_path);
                i += 2;
            }
            "--out" | "-o" => {
                out_path = args.get(i + 1).map(PathBuf::from).unwrap_or(out_path);
                i += 2;
            }
            "--loss" | "-l" => {
                loss_path = args.get(i + 1).map(PathBuf::from);
                i += 2;
            }
            "--width" => {
                config.width = args
                    .get(i + 1)
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(config.width);
                i += 2;
            }
            "--height" => {
                config.height = args
                    .get(i + 1)
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(config.height);
                i += 2;
            }
            "--title" | "-t" => {
                config.caption = args.get(i + 1).cloned();
                i += 2;
            }
            "--help" => {
                print_help();
                return Ok(());
            }
            _ => {
                i += 1;
            }
        }
    }

    let history = History::load_json(&history_path)
        .with_context(|| format!("failed to load history from {}", history_path.display()))?;
    log::debug!(
        "metrics in history: {:?}",
        history.metric_names().collect::<Vec<_>>()
    );

    println!(
        "Loaded history from {} ({} epochs)",
        history_path.display(),
        history.epochs()
    );

    chart::render_accuracy(&history, &config, &out_path).with_context(|| {
        format!("failed to render accuracy chart to {}", out_path.display())
    })?;
    println!("Accuracy chart written to {}", out_path.display());

    if let Some(path) = loss_path {
        chart::render_loss(&history, &config, &path)
            .with_context(|| format!("failed to render loss chart to {}", path.display()))?;
        println!("Loss chart written to {}", path.display());
    }

    println!();
    print!("{}", RunSummary::of(&history));

    Ok(())
}

fn print_help() {
    println!("traincurve — plot training/validation curves from a saved history");
    println!();
    println!("Usage: traincurve [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --history, -i <FILE>   History JSON to plot (default: history.json)");
    println!("  --out, -o <FILE>       Accuracy chart output (default: accuracy.svg)");
    println!("  --loss, -l <FILE>      Also render the loss chart to FILE");
    println!("  --width <PX>           Chart width in pixels (default: 800)");
    println!("  --height <PX>          Chart height in pixels (default: 600)");
    println!("  --title, -t <TEXT>     Override the chart caption");
    println!("  --help                 Show this help");
}
