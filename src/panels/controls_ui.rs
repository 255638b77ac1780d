use std::path::{Path, PathBuf};

use egui::Ui;
use egui_phosphor::regular::{ARROW_COUNTER_CLOCKWISE, FLOPPY_DISK, FOLDER_OPEN, PLAY, STOP};

use crate::app::Command;
use crate::data::sampler::{RunState, SamplerData};

/// Start/Stop/Reset buttons, experiment name field and Save button.
///
/// The panel only reports which control was activated; the app applies it.
pub struct ControlsPanel {
    pub experiment_name: String,
    pub output_dir: PathBuf,
}

impl ControlsPanel {
    pub fn new(output_dir: PathBuf) -> Self {
        Self {
            experiment_name: String::new(),
            output_dir,
        }
    }

    /// Render the controls. Returns the command of the control clicked this frame.
    pub fn render(&mut self, ui: &mut Ui, sampler: &SamplerData) -> Option<Command> {
        let mut command = None;

        ui.horizontal(|ui| {
            if ui.button(format!("{PLAY} Start")).clicked() {
                command = Some(Command::Start);
            }
            if ui.button(format!("{STOP} Stop")).clicked() {
                command = Some(Command::Stop);
            }
            if ui
                .button(format!("{ARROW_COUNTER_CLOCKWISE} Reset"))
                .on_hover_text("Rewind the clock to t = 0")
                .clicked()
            {
                command = Some(Command::Reset);
            }

            ui.separator();
            let state = match sampler.state() {
                RunState::Running => "Running",
                RunState::Paused => "Paused",
            };
            ui.label(format!(
                "{state} | {} samples | t = {:.2} s",
                sampler.len(),
                sampler.clock()
            ));
        });

        ui.horizontal(|ui| {
            ui.label("Experiment name:");
            ui.text_edit_singleline(&mut self.experiment_name);

            if ui
                .button(format!("{FOLDER_OPEN} Browse…"))
                .on_hover_text(format!("Output folder: {}", display_dir(&self.output_dir)))
                .clicked()
            {
                if let Some(dir) = rfd::FileDialog::new()
                    .set_directory(self.start_dir())
                    .pick_folder()
                {
                    log::info!("output folder set to {}", dir.display());
                    self.output_dir = dir;
                }
            }

            if ui.button(format!("{FLOPPY_DISK} Save data as .csv")).clicked() {
                command = Some(Command::Save);
            }
        });

        command
    }

    fn start_dir(&self) -> PathBuf {
        if self.output_dir.as_os_str().is_empty() {
            std::env::current_dir().unwrap_or_default()
        } else {
            self.output_dir.clone()
        }
    }
}

fn display_dir(dir: &Path) -> String {
    if dir.as_os_str().is_empty() {
        "working directory".to_string()
    } else {
        dir.display().to_string()
    }
}
