/// Output geometry and caption override for a rendered chart.
///
/// `caption` replaces the chart's built-in caption when set; the axis labels
/// are fixed per chart kind.
#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub width: u32,
    pub height: u32,
    pub caption: Option<String>,
}

impl ChartConfig {
    pub fn new(width: u32, height: u32) -> ChartConfig {
        ChartConfig { width, height, caption: None }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        ChartConfig { width: 800, height: 600, caption: None }
    }
}
