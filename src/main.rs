//! Standalone visualizer binary.

use fnvisualizer::{run_visualizer, VisualizerConfig};

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    run_visualizer(VisualizerConfig::default())
}
