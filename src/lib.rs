//! Function visualizer crate root: re-exports and module wiring.
//!
//! The crate plots a single analytic function live in an egui/eframe window:
//! - `data`: sample generator, run-state machine, tick source and CSV export
//! - `panels`: control bar, chart and notification widgets
//! - `app`: the [`VisualizerApp`] window and the [`run_visualizer`] entry point
//! - `config`: fixed window/tick configuration

pub mod app;
pub mod config;
pub mod data;
pub mod panels;

pub use app::{run_visualizer, Command, VisualizerApp};
pub use config::{ResetPolicy, VisualizerConfig};
pub use data::export::ExportError;
pub use data::generator::sample;
pub use data::sampler::{RunState, SamplerData};
pub use data::ticker::Ticker;
