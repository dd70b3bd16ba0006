//! Plasma Viewer Window
//! Displays the 3D era scatter until the user closes the window. Holds the
//! orbital camera state across frames.

use crate::charts::{EraScatter, OrbitalCamera};
use egui::RichText;

pub struct PlasmaApp {
    chart: EraScatter,
    camera: OrbitalCamera,
}

impl PlasmaApp {
    pub fn new(chart: EraScatter) -> Self {
        Self {
            chart,
            camera: OrbitalCamera::default(),
        }
    }
}

impl eframe::App for PlasmaApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new("Quantum Gravity Plasma Field Evolution")
                        .size(18.0)
                        .strong(),
                );
                ui.label(
                    RichText::new("drag to rotate, scroll to zoom, double-click to reset")
                        .size(11.0)
                        .weak(),
                );
            });
            ui.add_space(4.0);
            self.chart.show(ui, &mut self.camera);
        });
    }
}
