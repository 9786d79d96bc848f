// ============================================================================
// Image Painter: paint brush strokes and flood fills onto one image file
// ============================================================================

use clap::Parser;
use eframe::egui;

use imagepainter::cli::{self, CliArgs};
use imagepainter::{PainterApp, io, log_info, logger};

fn main() -> Result<(), eframe::Error> {
    // -- CLI validation (before any window exists) -----------------------
    let args = CliArgs::parse();
    let path = match cli::validate(&args) {
        Ok(path) => path,
        Err(msg) => {
            eprintln!("{}", msg);
            std::process::exit(1);
        }
    };

    // Session log lives in the platform data dir
    logger::init();

    let loaded = match io::load_for_editing(&path) {
        Ok(loaded) => loaded,
        Err(msg) => {
            eprintln!("{}", msg);
            std::process::exit(1);
        }
    };
    log_info!(
        "loaded {} ({}x{}, view {}x{})",
        path.display(),
        loaded.original_size.0,
        loaded.original_size.1,
        loaded.working.width(),
        loaded.working.height()
    );

    // Size the window to the scaled image plus the toolbar and status bar;
    // 640 keeps the whole toolbar reachable for narrow images
    let view_w = (loaded.working.width() as f32).max(640.0);
    let view_h = loaded.working.height() as f32 + 64.0;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([view_w, view_h])
            .with_title("Image Painter"),
        ..Default::default()
    };

    eframe::run_native(
        "Image Painter",
        options,
        Box::new(move |cc| Box::new(PainterApp::new(cc, loaded, path))),
    )
}
