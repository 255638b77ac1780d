//! Configuration for the visualizer window and its tick source.
//!
//! Everything here is fixed at startup. There are no config files or command
//! line flags; [`VisualizerConfig::default`] is what the binary runs with.

use std::path::PathBuf;
use std::time::Duration;

use eframe::egui;
use egui::Color32;

/// What the Reset command does to the already collected samples.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResetPolicy {
    /// Only rewind the clock to zero; stored samples stay on the chart and in exports.
    #[default]
    ClockOnly,
    /// Rewind the clock and drop every stored sample.
    ClearSamples,
}

/// Startup configuration for [`run_visualizer`](crate::run_visualizer).
#[derive(Clone, Debug)]
pub struct VisualizerConfig {
    /// Window title.
    pub title: String,
    /// Initial inner window size in points.
    pub window_size: [f32; 2],
    /// Tick period in milliseconds.
    pub update_rate_ms: u64,
    /// Upper bound on ticks replayed in one frame after a stall.
    pub max_catch_up_ticks: u32,
    pub reset_policy: ResetPolicy,
    /// Directory exported CSV files are written to. Empty means the working directory.
    pub output_dir: PathBuf,
    pub line_color: Color32,
    /// Colour of the axis labels, tick labels and grid lines.
    pub axis_color: Color32,
    pub show_grid: bool,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            title: "Function Visualizer".to_string(),
            window_size: [1400.0, 900.0],
            update_rate_ms: 10,
            max_catch_up_ticks: 10,
            reset_policy: ResetPolicy::ClockOnly,
            output_dir: PathBuf::new(),
            line_color: Color32::from_gray(200),
            axis_color: Color32::YELLOW,
            show_grid: true,
        }
    }
}

impl VisualizerConfig {
    pub fn with_reset_policy(mut self, policy: ResetPolicy) -> Self {
        self.reset_policy = policy;
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Tick period as a [`Duration`].
    pub fn update_period(&self) -> Duration {
        Duration::from_millis(self.update_rate_ms)
    }

    /// Seconds the sample clock advances per tick.
    pub fn time_interval(&self) -> f64 {
        self.update_rate_ms as f64 / 1000.0
    }

    /// Native window options derived from the title and window size.
    pub fn native_options(&self) -> eframe::NativeOptions {
        let viewport = egui::ViewportBuilder::default()
            .with_title(self.title.clone())
            .with_inner_size(egui::vec2(self.window_size[0], self.window_size[1]));
        eframe::NativeOptions {
            viewport,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tick_is_ten_milliseconds() {
        let cfg = VisualizerConfig::default();
        assert_eq!(cfg.update_period(), Duration::from_millis(10));
        assert_eq!(cfg.time_interval(), 0.01);
        assert_eq!(cfg.reset_policy, ResetPolicy::ClockOnly);
        assert_eq!(cfg.axis_color, Color32::YELLOW);
    }

    #[test]
    fn builders_override_fields() {
        let cfg = VisualizerConfig::default()
            .with_reset_policy(ResetPolicy::ClearSamples)
            .with_output_dir("/tmp/out");
        assert_eq!(cfg.reset_policy, ResetPolicy::ClearSamples);
        assert_eq!(cfg.output_dir, PathBuf::from("/tmp/out"));
    }
}
