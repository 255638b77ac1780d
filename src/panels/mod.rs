pub mod controls_ui;
pub mod notification_ui;
pub mod plot_ui;

pub use controls_ui::ControlsPanel;
pub use notification_ui::NotificationPanel;
pub use plot_ui::PlotPanel;
