//! Visualizer window.
//!
//! | Sub-module | Responsibility |
//! | ---------- | -------------- |
//! | [`update`] | Per-frame tick replay and widget rendering (`eframe::App`) |
//! | [`run`]    | [`run_visualizer()`] entry point and icon loading |
//!
//! All mutable state lives in [`VisualizerApp`] and is touched only from the
//! egui thread, so ticks and button clicks never interleave.

mod run;
mod update;

pub use run::run_visualizer;

use std::path::PathBuf;
use std::time::Instant;

use chrono::{Local, NaiveDateTime};

use crate::config::VisualizerConfig;
use crate::data::export;
use crate::data::sampler::SamplerData;
use crate::data::ticker::Ticker;
use crate::panels::{ControlsPanel, NotificationPanel, PlotPanel};

/// User commands issued from the control bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Start,
    Stop,
    Reset,
    Save,
}

pub struct VisualizerApp {
    pub sampler: SamplerData,
    pub ticker: Ticker,
    pub controls: ControlsPanel,
    pub plot: PlotPanel,
    pub notifications: NotificationPanel,
}

impl VisualizerApp {
    /// Build the window state.
    ///
    /// The `t = 0` sample is taken immediately; the first timed tick is due
    /// one period after `now`.
    pub fn new(cfg: &VisualizerConfig, now: Instant) -> Self {
        let mut sampler = SamplerData::new(cfg.time_interval(), cfg.reset_policy);
        sampler.tick();
        Self {
            sampler,
            ticker: Ticker::new(cfg.update_period(), cfg.max_catch_up_ticks, now),
            controls: ControlsPanel::new(cfg.output_dir.clone()),
            plot: PlotPanel::new(cfg.line_color, cfg.axis_color, cfg.show_grid),
            notifications: NotificationPanel::default(),
        }
    }

    /// Run every tick due at `now`. Returns how many ticks were processed.
    pub fn advance(&mut self, now: Instant) -> u32 {
        let due = self.ticker.poll(now);
        for _ in 0..due {
            self.sampler.tick();
        }
        due
    }

    pub fn apply_command(&mut self, command: Command) {
        match command {
            Command::Start => {
                log::debug!("start");
                self.sampler.start();
            }
            Command::Stop => {
                log::debug!("stop");
                self.sampler.stop();
            }
            Command::Reset => {
                log::debug!("reset clock ({} samples kept)", self.sampler.len());
                self.sampler.reset();
            }
            Command::Save => {
                self.save_at(&Local::now().naive_local());
            }
        }
    }

    /// Export the samples as if saved at `stamp`.
    ///
    /// Failures are reported through the error box and logged; the return
    /// value is the written path on success.
    pub fn save_at(&mut self, stamp: &NaiveDateTime) -> Option<PathBuf> {
        let name = self.controls.experiment_name.as_str();
        match export::save_csv(
            &self.controls.output_dir,
            name,
            stamp,
            self.sampler.time(),
            self.sampler.data(),
        ) {
            Ok(path) => {
                let msg = format!("Saved {} samples to {}", self.sampler.len(), path.display());
                log::info!("{msg}");
                self.notifications.set_status(msg);
                Some(path)
            }
            Err(e @ export::ExportError::EmptyName) => {
                log::warn!("save rejected: empty experiment name");
                self.notifications.show_error(e.to_string());
                None
            }
            Err(e) => {
                log::error!("{e}");
                self.notifications.show_error(e.to_string());
                None
            }
        }
    }
}
