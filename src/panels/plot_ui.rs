use egui::{Color32, Ui, Visuals};
use egui_plot::{Line, Plot};

use crate::data::sampler::SamplerData;

/// X/Y line chart of every collected sample.
pub struct PlotPanel {
    pub line_color: Color32,
    pub axis_color: Color32,
    pub show_grid: bool,
}

impl PlotPanel {
    pub fn new(line_color: Color32, axis_color: Color32, show_grid: bool) -> Self {
        Self {
            line_color,
            axis_color,
            show_grid,
        }
    }

    pub fn render(&self, ui: &mut Ui, sampler: &SamplerData) {
        ui.scope(|ui| {
            self.apply_axis_visuals(ui.visuals_mut());
            let plot = Plot::new("visualizer_plot")
                .show_grid(self.show_grid)
                .x_axis_label("t [s]")
                .y_axis_label("h(t)");

            plot.show(ui, |plot_ui| {
                plot_ui.line(Line::new("h(t)", sampler.points()).color(self.line_color));
            });
        });
    }

    /// egui_plot paints axes and grid in the text colour, fading grid lines
    /// by spacing, so overriding it tints both.
    fn apply_axis_visuals(&self, visuals: &mut Visuals) {
        visuals.override_text_color = Some(self.axis_color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_colour_overrides_text_colour() {
        let panel = PlotPanel::new(Color32::from_gray(200), Color32::YELLOW, true);
        let mut visuals = Visuals::dark();
        panel.apply_axis_visuals(&mut visuals);
        assert_eq!(visuals.text_color(), Color32::YELLOW);
        assert_eq!(visuals.override_text_color, Some(Color32::YELLOW));
    }
}
