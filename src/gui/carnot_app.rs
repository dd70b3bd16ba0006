//! Carnot Viewer Window
//! Displays the P-V diagram until the user closes the window.

use crate::charts::PvChart;
use egui::RichText;

pub struct CarnotApp {
    chart: PvChart,
}

impl CarnotApp {
    pub fn new(chart: PvChart) -> Self {
        Self { chart }
    }
}

impl eframe::App for CarnotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new("P-V Diagram of Carnot Cycle")
                        .size(18.0)
                        .strong(),
                );
            });
            ui.add_space(6.0);
            self.chart.show(ui);
        });
    }
}
