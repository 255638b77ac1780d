use eframe::egui;
use egui::{Align2, Color32, Ui};

/// Modal error box plus a one-line status message.
#[derive(Default)]
pub struct NotificationPanel {
    error: Option<String>,
    status: Option<String>,
}

impl NotificationPanel {
    /// Open the error box with `message`. Replaces any message already shown.
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// While an error is open the rest of the window is disabled.
    pub fn is_modal_open(&self) -> bool {
        self.error.is_some()
    }

    pub fn render_status(&self, ui: &mut Ui) {
        if let Some(status) = &self.status {
            ui.label(status);
        }
    }

    pub fn render_dialog(&mut self, ctx: &egui::Context) {
        let Some(message) = &self.error else {
            return;
        };
        let mut dismissed = false;
        egui::Window::new("Error")
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.colored_label(Color32::LIGHT_RED, message);
                ui.add_space(8.0);
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        if dismissed || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.error = None;
        }
    }
}
