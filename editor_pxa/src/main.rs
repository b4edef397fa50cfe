mod app;
mod filemanager;

use app::PixelArtEditor;
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    lib_pxa::init_logging();

    let app = PixelArtEditor::new();
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([760.0, 560.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Pixel Art Editor",
        native_options,
        Box::new(|_cc| Ok(Box::new(app))),
    )?;

    Ok(())
}
