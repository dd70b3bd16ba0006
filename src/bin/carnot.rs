//! Carnot P-V diagram viewer.
//!
//! Reads `carnot_data.csv` from the working directory and displays the
//! cycle as a connected marker-line plot. Any load or conversion failure
//! aborts the run before a window is opened.

use anyhow::anyhow;
use eframe::egui;
use physplot::charts::PvChart;
use physplot::data::{load_csv, numeric_column};
use physplot::gui::CarnotApp;

const DATA_PATH: &str = "carnot_data.csv";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let df = load_csv(DATA_PATH)?;
    let volume = numeric_column(&df, "V")?;
    let pressure = numeric_column(&df, "P")?;
    let chart = PvChart::new(volume, pressure)?;
    log::info!("plotting {} cycle points", chart.point_count());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 650.0])
            .with_title("P-V Diagram of Carnot Cycle"),
        ..Default::default()
    };

    // Blocks until the window is closed.
    eframe::run_native(
        "Carnot Viewer",
        options,
        Box::new(|_cc| Ok(Box::new(CarnotApp::new(chart)))),
    )
    .map_err(|e| anyhow!("display failed: {e}"))
}
