mod app;
mod ui;

use app::ShowcaseApp;
use eframe::egui;
use slidekit::logging::init_tracing;
use slidekit::settings::Settings;

fn main() -> anyhow::Result<()> {
    let settings = Settings::load();
    init_tracing(settings.debug_logging);

    let (width, height) = settings.window_size;
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width, height])
            .with_min_inner_size([360.0, 480.0])
            .with_icon(load_icon()),
        ..Default::default()
    };

    eframe::run_native(
        "Slidekit Showcase",
        native_options,
        Box::new(move |cc| Ok(Box::new(ShowcaseApp::new(cc, settings)?))),
    )
    .map_err(|e| anyhow::anyhow!("showcase window failed: {e}"))
}

fn load_icon() -> egui::IconData {
    // Three stacked slides, the front one warm orange
    let size = 64;
    let mut rgba = vec![0u8; size * size * 4];

    for y in 0..size {
        for x in 0..size {
            let idx = (y * size + x) * 4;
            let layer = [(4, 14), (10, 8), (16, 2)]
                .iter()
                .rposition(|&(left, top)| x >= left && x < left + 44 && y >= top + 6 && y < top + 6 + 40);
            if let Some(layer) = layer {
                let shade = 120 + layer as u8 * 50;
                rgba[idx] = shade;
                rgba[idx + 1] = (shade as f32 * 0.55) as u8;
                rgba[idx + 2] = 40;
                rgba[idx + 3] = 255;
            }
        }
    }

    egui::IconData {
        rgba,
        width: size as u32,
        height: size as u32,
    }
}
