use std::time::Instant;

use eframe::egui;

use super::VisualizerApp;

impl eframe::App for VisualizerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.advance(now);

        let modal = self.notifications.is_modal_open();
        let mut command = None;

        egui::TopBottomPanel::bottom("visualizer_controls").show(ctx, |ui| {
            ui.add_enabled_ui(!modal, |ui| {
                command = self.controls.render(ui, &self.sampler);
            });
            self.notifications.render_status(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.plot.render(ui, &self.sampler);
        });

        self.notifications.render_dialog(ctx);

        if let Some(command) = command {
            self.apply_command(command);
        }

        ctx.request_repaint_after(self.ticker.until_next(Instant::now()));
    }
}
