//! Plasma field evolution viewer.
//!
//! Reads `qgp_data.csv` from the working directory, log-rescales the phi,
//! potential, and kinetic columns, classifies each row by era, and displays
//! an interactive 3D scatter. Any load or conversion failure aborts the run
//! before a window is opened.

use anyhow::anyhow;
use eframe::egui;
use physplot::charts::EraScatter;
use physplot::data::{era_column, load_csv, log_rescale, numeric_column};
use physplot::gui::PlasmaApp;

const DATA_PATH: &str = "qgp_data.csv";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let df = load_csv(DATA_PATH)?;
    let eras = era_column(&df, "Era")?;
    // Values vary over many decades; log-rescale for visual spread.
    let phi = log_rescale(&numeric_column(&df, "phi")?);
    let pot = log_rescale(&numeric_column(&df, "Potential")?);
    let kin = log_rescale(&numeric_column(&df, "Kinetic")?);

    let chart = EraScatter::new(phi, pot, kin, eras)?;
    log::info!("plotting {} field samples", chart.point_count());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_title("Quantum Gravity Plasma Field Evolution"),
        ..Default::default()
    };

    // Blocks until the window is closed.
    eframe::run_native(
        "Plasma Viewer",
        options,
        Box::new(|_cc| Ok(Box::new(PlasmaApp::new(chart)))),
    )
    .map_err(|e| anyhow!("display failed: {e}"))
}
