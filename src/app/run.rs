//! Top-level entry point for running the visualizer as a native window.

use std::time::Instant;

use eframe::egui;

use crate::config::VisualizerConfig;

use super::VisualizerApp;

/// Launch the visualizer in a native window.
///
/// Builds a [`VisualizerApp`] from `cfg`, opens the window and enters the
/// eframe event loop. Blocks until the window is closed and returns the
/// loop's result.
pub fn run_visualizer(cfg: VisualizerConfig) -> eframe::Result<()> {
    let mut opts = cfg.native_options();

    if opts.viewport.icon.is_none() {
        if let Some(icon) = load_app_icon_svg() {
            opts.viewport = opts.viewport.clone().with_icon(icon);
        }
    }

    log::info!(
        "starting {:?} with a {} ms tick",
        cfg.title,
        cfg.update_rate_ms
    );

    let title = cfg.title.clone();
    eframe::run_native(
        &title,
        opts,
        Box::new(move |cc| {
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(VisualizerApp::new(&cfg, Instant::now())))
        }),
    )
}

/// Render `icon.svg` from the manifest directory into window icon pixels.
///
/// Any failure means the window simply opens without an icon.
fn load_app_icon_svg() -> Option<egui::IconData> {
    let svg_path = concat!(env!("CARGO_MANIFEST_DIR"), "/icon.svg");
    let icon = std::fs::read(svg_path)
        .map_err(|e| e.to_string())
        .and_then(|svg| rasterize_icon(&svg));
    match icon {
        Ok(icon) => Some(icon),
        Err(e) => {
            log::debug!("no window icon from {svg_path}: {e}");
            None
        }
    }
}

fn rasterize_icon(svg: &[u8]) -> Result<egui::IconData, String> {
    let tree = usvg::Tree::from_data(svg, &usvg::Options::default()).map_err(|e| e.to_string())?;
    let size = tree.size().to_int_size();
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| format!("empty icon size {}x{}", size.width(), size.height()))?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());
    Ok(egui::IconData {
        width: pixmap.width(),
        height: pixmap.height(),
        rgba: pixmap.take(),
    })
}
