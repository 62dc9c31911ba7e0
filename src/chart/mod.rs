pub mod config;
pub mod accuracy;
pub mod loss;
mod curves;

pub use config::ChartConfig;
pub use accuracy::{accuracy_svg, render_accuracy};
pub use loss::{loss_svg, render_loss};
