//! 3D Era Scatter Chart
//! Perspective-projected scatter of the plasma field columns, colored by
//! era. Points are normalized to the unit cube, projected through the
//! orbital camera on the CPU, and painted back-to-front.

use egui::{Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, Vec2};
use glam::{Mat4, Vec3, Vec4};

use super::{OrbitalCamera, RenderError};
use crate::data::Era;

const X_LABEL: &str = "log10(|phi|)";
const Y_LABEL: &str = "log10(|Potential|)";
const Z_LABEL: &str = "log10(|Kinetic|)";

const POINT_RADIUS: f32 = 2.5;
const TICK_DIVISIONS: usize = 4;

/// Fixed swatch color for an era. The legend and the per-point coloring
/// both read from here, so the swatches cannot drift from the
/// classification rule.
pub fn era_color(era: Era) -> Color32 {
    match era {
        Era::Radiation => Color32::from_rgb(52, 152, 219), // blue
        Era::Matter => Color32::from_rgb(231, 76, 60),     // red
    }
}

/// A 3D scatter of (phi, potential, kinetic) samples tagged with an era.
///
/// Coordinates are stored normalized to [-1, 1]^3; the original data bounds
/// are kept for tick labeling. Non-finite samples are skipped, otherwise
/// input order is preserved.
#[derive(Debug)]
pub struct EraScatter {
    points: Vec<(Vec3, Era)>,
    data_min: [f64; 3],
    data_max: [f64; 3],
}

impl EraScatter {
    /// Build the scatter from four equal-length columns.
    pub fn new(
        phi: Vec<f64>,
        pot: Vec<f64>,
        kin: Vec<f64>,
        eras: Vec<Era>,
    ) -> Result<Self, RenderError> {
        for len in [pot.len(), kin.len(), eras.len()] {
            if len != phi.len() {
                return Err(RenderError::LengthMismatch {
                    left: phi.len(),
                    right: len,
                });
            }
        }

        let (data_min, data_max) = compute_bounds(&phi, &pot, &kin);

        let points: Vec<(Vec3, Era)> = phi
            .iter()
            .zip(pot.iter())
            .zip(kin.iter())
            .zip(eras.iter())
            .filter(|(((x, y), z), _)| x.is_finite() && y.is_finite() && z.is_finite())
            .map(|(((x, y), z), era)| (normalize_point(*x, *y, *z, data_min, data_max), *era))
            .collect();

        if points.is_empty() {
            return Err(RenderError::Empty);
        }

        Ok(Self {
            points,
            data_min,
            data_max,
        })
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn bounds(&self) -> ([f64; 3], [f64; 3]) {
        (self.data_min, self.data_max)
    }

    /// Draw the scatter filling the available space, handling camera input
    /// on the plot area.
    pub fn show(&self, ui: &mut egui::Ui, camera: &mut OrbitalCamera) {
        let size = ui.available_size().max(Vec2::new(100.0, 100.0));
        let (rect, response) = ui.allocate_exact_size(size, Sense::click_and_drag());
        camera.handle_input(&response);

        let painter = ui.painter_at(rect);
        let aspect = rect.width() / rect.height().max(1.0);
        let vp = camera.view_projection(aspect);

        self.draw_axis_box(&painter, rect, vp);
        self.draw_tick_labels(&painter, rect, vp);
        self.draw_points(&painter, rect, vp);
        self.draw_legend(&painter, rect);
    }

    fn draw_axis_box(&self, painter: &egui::Painter, rect: Rect, vp: Mat4) {
        let dim = painter
            .ctx()
            .style()
            .visuals
            .text_color()
            .gamma_multiply(0.35);
        let stroke = Stroke::new(1.0, dim);

        // 12 edges of the normalized data cube.
        let corners: [Vec3; 8] = [
            Vec3::new(-1.0, -1.0, -1.0),
            Vec3::new(1.0, -1.0, -1.0),
            Vec3::new(1.0, 1.0, -1.0),
            Vec3::new(-1.0, 1.0, -1.0),
            Vec3::new(-1.0, -1.0, 1.0),
            Vec3::new(1.0, -1.0, 1.0),
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(-1.0, 1.0, 1.0),
        ];
        let edges: [(usize, usize); 12] = [
            (0, 1),
            (1, 2),
            (2, 3),
            (3, 0),
            (4, 5),
            (5, 6),
            (6, 7),
            (7, 4),
            (0, 4),
            (1, 5),
            (2, 6),
            (3, 7),
        ];
        for (a, b) in edges {
            if let (Some(p0), Some(p1)) = (
                project_to_screen(vp, corners[a], rect),
                project_to_screen(vp, corners[b], rect),
            ) {
                painter.line_segment([p0, p1], stroke);
            }
        }

        // Interior grid lines on the bottom face.
        let grid_stroke = Stroke::new(0.5, dim.gamma_multiply(0.6));
        for i in 1..TICK_DIVISIONS {
            let t = -1.0 + (i as f32) / TICK_DIVISIONS as f32 * 2.0;
            for (start, end) in [
                (Vec3::new(t, -1.0, -1.0), Vec3::new(t, -1.0, 1.0)),
                (Vec3::new(-1.0, -1.0, t), Vec3::new(1.0, -1.0, t)),
            ] {
                if let (Some(p0), Some(p1)) = (
                    project_to_screen(vp, start, rect),
                    project_to_screen(vp, end, rect),
                ) {
                    painter.line_segment([p0, p1], grid_stroke);
                }
            }
        }
    }

    fn draw_tick_labels(&self, painter: &egui::Painter, rect: Rect, vp: Mat4) {
        let text_color = painter.ctx().style().visuals.text_color();
        let dim_color = text_color.gamma_multiply(0.7);
        let tick_font = FontId::proportional(10.0);
        let label_font = FontId::proportional(12.0);

        for i in 0..=TICK_DIVISIONS {
            let t = i as f64 / TICK_DIVISIONS as f64;
            let ndc = -1.0 + t as f32 * 2.0;

            // X ticks along the bottom-back edge.
            let x_val = self.data_min[0] + t * (self.data_max[0] - self.data_min[0]);
            if let Some(pos) = project_to_screen(vp, Vec3::new(ndc, -1.0, -1.2), rect) {
                if rect.contains(pos) {
                    painter.text(
                        pos,
                        Align2::CENTER_TOP,
                        format_tick_value(x_val),
                        tick_font.clone(),
                        dim_color,
                    );
                }
            }

            // Y ticks along the left-back vertical edge.
            let y_val = self.data_min[1] + t * (self.data_max[1] - self.data_min[1]);
            if let Some(pos) = project_to_screen(vp, Vec3::new(-1.2, ndc, -1.0), rect) {
                if rect.contains(pos) {
                    painter.text(
                        pos,
                        Align2::RIGHT_CENTER,
                        format_tick_value(y_val),
                        tick_font.clone(),
                        dim_color,
                    );
                }
            }

            // Z ticks along the bottom-left edge.
            let z_val = self.data_min[2] + t * (self.data_max[2] - self.data_min[2]);
            if let Some(pos) = project_to_screen(vp, Vec3::new(-1.2, -1.0, ndc), rect) {
                if rect.contains(pos) {
                    painter.text(
                        pos,
                        Align2::RIGHT_CENTER,
                        format_tick_value(z_val),
                        tick_font.clone(),
                        dim_color,
                    );
                }
            }
        }

        let axis_labels = [
            (X_LABEL, Vec3::new(0.0, -1.35, -1.35)),
            (Y_LABEL, Vec3::new(-1.45, 0.0, -1.2)),
            (Z_LABEL, Vec3::new(-1.35, -1.35, 0.0)),
        ];
        for (label, pos) in axis_labels {
            if let Some(screen) = project_to_screen(vp, pos, rect) {
                if rect.contains(screen) {
                    painter.text(
                        screen,
                        Align2::CENTER_CENTER,
                        label,
                        label_font.clone(),
                        text_color,
                    );
                }
            }
        }
    }

    fn draw_points(&self, painter: &egui::Painter, rect: Rect, vp: Mat4) {
        // Painter's algorithm: draw far points first. Clip-space w is the
        // view depth for a perspective projection.
        let mut projected: Vec<(f32, Pos2, Era)> = Vec::with_capacity(self.points.len());
        for (p, era) in &self.points {
            let clip = vp * Vec4::new(p.x, p.y, p.z, 1.0);
            if clip.w <= 0.0 {
                continue;
            }
            let screen = clip_to_screen(clip, rect);
            if rect.contains(screen) {
                projected.push((clip.w, screen, *era));
            }
        }
        projected.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));

        for (_, pos, era) in projected {
            painter.circle_filled(pos, POINT_RADIUS, era_color(era).gamma_multiply(0.85));
        }
    }

    /// Two fixed legend entries, one per era. Same source as the point
    /// colors, see [`era_color`].
    fn draw_legend(&self, painter: &egui::Painter, rect: Rect) {
        let text_color = painter.ctx().style().visuals.text_color();
        let bg_color = painter.ctx().style().visuals.window_fill;
        let font = FontId::proportional(11.0);

        let entries = [Era::Radiation, Era::Matter];
        let max_width = entries
            .iter()
            .map(|era| {
                painter
                    .layout_no_wrap(era.label().to_string(), font.clone(), text_color)
                    .rect
                    .width()
            })
            .fold(0.0_f32, f32::max);

        let legend_width = max_width + 24.0;
        let legend_height = entries.len() as f32 * 16.0 + 8.0;
        let x = rect.right() - 8.0;
        let mut y = rect.top() + 8.0;

        let legend_rect = Rect::from_min_size(
            Pos2::new(x - legend_width - 4.0, y - 4.0),
            Vec2::new(legend_width + 8.0, legend_height),
        );
        painter.rect_filled(legend_rect, 4.0, bg_color.gamma_multiply(0.85));
        painter.rect_stroke(
            legend_rect,
            4.0,
            Stroke::new(0.5, text_color.gamma_multiply(0.3)),
        );

        for era in entries {
            let swatch = Rect::from_min_size(Pos2::new(x - legend_width, y), Vec2::new(12.0, 12.0));
            painter.rect_filled(swatch, 2.0, era_color(era));
            painter.text(
                Pos2::new(x - legend_width + 16.0, y + 6.0),
                Align2::LEFT_CENTER,
                era.label(),
                font.clone(),
                text_color,
            );
            y += 16.0;
        }
    }
}

/// Axis-aligned bounds over the finite samples of the three columns.
/// Axes with no finite data default to [-1, 1]; zero-width axes are widened
/// so normalization stays well defined.
fn compute_bounds(phi: &[f64], pot: &[f64], kin: &[f64]) -> ([f64; 3], [f64; 3]) {
    let mut min = [f64::INFINITY; 3];
    let mut max = [f64::NEG_INFINITY; 3];

    for (axis, column) in [phi, pot, kin].into_iter().enumerate() {
        for &v in column {
            if v.is_finite() {
                min[axis] = min[axis].min(v);
                max[axis] = max[axis].max(v);
            }
        }
    }

    for axis in 0..3 {
        if !min[axis].is_finite() || !max[axis].is_finite() {
            min[axis] = -1.0;
            max[axis] = 1.0;
        }
        if (max[axis] - min[axis]).abs() < 1e-12 {
            min[axis] -= 0.5;
            max[axis] += 0.5;
        }
    }

    (min, max)
}

/// Map a data point into the normalized [-1, 1]^3 cube.
fn normalize_point(x: f64, y: f64, z: f64, min: [f64; 3], max: [f64; 3]) -> Vec3 {
    Vec3::new(
        ((x - min[0]) / (max[0] - min[0]) * 2.0 - 1.0) as f32,
        ((y - min[1]) / (max[1] - min[1]) * 2.0 - 1.0) as f32,
        ((z - min[2]) / (max[2] - min[2]) * 2.0 - 1.0) as f32,
    )
}

fn clip_to_screen(clip: Vec4, rect: Rect) -> Pos2 {
    let ndc_x = clip.x / clip.w;
    let ndc_y = clip.y / clip.w;
    Pos2::new(
        rect.left() + (ndc_x * 0.5 + 0.5) * rect.width(),
        rect.top() + (-ndc_y * 0.5 + 0.5) * rect.height(),
    )
}

/// Project a world-space point to screen coordinates; `None` when the
/// point is behind the camera.
fn project_to_screen(vp: Mat4, p: Vec3, rect: Rect) -> Option<Pos2> {
    let clip = vp * Vec4::new(p.x, p.y, p.z, 1.0);
    if clip.w <= 0.0 {
        return None;
    }
    Some(clip_to_screen(clip, rect))
}

fn format_tick_value(val: f64) -> String {
    if val.abs() >= 1e6 || (val != 0.0 && val.abs() < 1e-3) {
        format!("{val:.2e}")
    } else if val == 0.0 {
        "0".to_string()
    } else {
        let s = format!("{val:.2}");
        let s = s.trim_end_matches('0');
        s.trim_end_matches('.').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_length_mismatch() {
        let err = EraScatter::new(
            vec![1.0, 2.0],
            vec![1.0],
            vec![1.0, 2.0],
            vec![Era::Matter, Era::Matter],
        )
        .unwrap_err();
        assert!(matches!(err, RenderError::LengthMismatch { .. }));
    }

    #[test]
    fn test_new_rejects_empty_input() {
        assert!(matches!(
            EraScatter::new(Vec::new(), Vec::new(), Vec::new(), Vec::new()),
            Err(RenderError::Empty)
        ));
    }

    #[test]
    fn test_bounds_cover_data_range() {
        let scatter = EraScatter::new(
            vec![-60.0, 2.0],
            vec![0.0, 10.0],
            vec![-5.0, 5.0],
            vec![Era::Radiation, Era::Matter],
        )
        .unwrap();
        let (min, max) = scatter.bounds();
        assert_eq!(min, [-60.0, 0.0, -5.0]);
        assert_eq!(max, [2.0, 10.0, 5.0]);
        assert_eq!(scatter.point_count(), 2);
    }

    #[test]
    fn test_normalize_maps_bounds_to_unit_cube() {
        let min = [0.0, -10.0, 5.0];
        let max = [10.0, 10.0, 15.0];
        let low = normalize_point(0.0, -10.0, 5.0, min, max);
        let high = normalize_point(10.0, 10.0, 15.0, min, max);
        let mid = normalize_point(5.0, 0.0, 10.0, min, max);
        assert!((low - Vec3::splat(-1.0)).length() < 1e-6);
        assert!((high - Vec3::splat(1.0)).length() < 1e-6);
        assert!(mid.length() < 1e-6);
    }

    #[test]
    fn test_degenerate_axis_is_widened() {
        let (min, max) = compute_bounds(&[3.0, 3.0], &[1.0, 2.0], &[0.0, 1.0]);
        assert_eq!(min[0], 2.5);
        assert_eq!(max[0], 3.5);
        assert_eq!((min[1], max[1]), (1.0, 2.0));
    }

    #[test]
    fn test_non_finite_samples_are_skipped() {
        let scatter = EraScatter::new(
            vec![1.0, f64::NAN, 2.0],
            vec![1.0, 1.0, 2.0],
            vec![1.0, 1.0, 2.0],
            vec![Era::Matter, Era::Matter, Era::Radiation],
        )
        .unwrap();
        assert_eq!(scatter.point_count(), 2);
    }

    #[test]
    fn test_format_tick_value() {
        assert_eq!(format_tick_value(0.0), "0");
        assert_eq!(format_tick_value(2.5), "2.5");
        assert_eq!(format_tick_value(-60.0), "-60");
        assert_eq!(format_tick_value(1.5e7), "1.50e7");
        assert_eq!(format_tick_value(2e-4), "2.00e-4");
    }

    #[test]
    fn test_era_colors_are_distinct() {
        assert_ne!(era_color(Era::Radiation), era_color(Era::Matter));
    }
}
