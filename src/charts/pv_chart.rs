//! P-V Diagram Chart
//! Connected marker-line plot of pressure against volume using egui_plot.

use egui::Color32;
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};

use super::RenderError;

const SERIES_NAME: &str = "Carnot cycle";
const SERIES_COLOR: Color32 = Color32::from_rgb(52, 152, 219);

/// A P-V diagram: one series of (volume, pressure) points drawn as a
/// connected line with markers. Points are plotted in input order with no
/// reordering or deduplication.
#[derive(Debug)]
pub struct PvChart {
    points: Vec<[f64; 2]>,
}

impl PvChart {
    /// Build the chart from equal-length volume and pressure columns.
    pub fn new(volume: Vec<f64>, pressure: Vec<f64>) -> Result<Self, RenderError> {
        if volume.len() != pressure.len() {
            return Err(RenderError::LengthMismatch {
                left: volume.len(),
                right: pressure.len(),
            });
        }
        if volume.is_empty() {
            return Err(RenderError::Empty);
        }

        let points = volume
            .into_iter()
            .zip(pressure)
            .map(|(v, p)| [v, p])
            .collect();
        Ok(Self { points })
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn points(&self) -> &[[f64; 2]] {
        &self.points
    }

    /// Draw the diagram filling the available space.
    pub fn show(&self, ui: &mut egui::Ui) {
        Plot::new("pv_diagram")
            .x_axis_label("Volume")
            .y_axis_label("Pressure")
            .legend(Legend::default())
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(PlotPoints::from_iter(self.points.iter().copied()))
                        .color(SERIES_COLOR)
                        .width(1.5)
                        .name(SERIES_NAME),
                );
                plot_ui.points(
                    Points::new(PlotPoints::from_iter(self.points.iter().copied()))
                        .radius(3.0)
                        .color(SERIES_COLOR)
                        .name(SERIES_NAME),
                );
            });
    }
}
