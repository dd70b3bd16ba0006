//! Orbital camera for the 3D scatter view.

use glam::{Mat4, Vec3};
use std::f32::consts::PI;

/// Elevation stays strictly inside (-PI/2, PI/2) to avoid the pole
/// singularity in the look-at basis.
const ELEVATION_MIN: f32 = -PI / 2.0 + 0.01;
const ELEVATION_MAX: f32 = PI / 2.0 - 0.01;

const DISTANCE_MIN: f32 = 1.5;
const DISTANCE_MAX: f32 = 20.0;

/// Camera orbiting the origin of the normalized [-1, 1]^3 data cube.
///
/// Position is derived from spherical coordinates (azimuth, elevation,
/// distance); the view and projection matrices are right-handed with
/// world-up = +Y.
#[derive(Debug, Clone)]
pub struct OrbitalCamera {
    pub distance: f32,
    pub azimuth: f32,
    pub elevation: f32,
    pub fov_y: f32,
}

impl Default for OrbitalCamera {
    fn default() -> Self {
        Self {
            distance: 4.0,
            azimuth: PI / 4.0,
            elevation: PI / 7.0,
            fov_y: PI / 4.0,
        }
    }
}

impl OrbitalCamera {
    /// World-space camera position for the current spherical coordinates.
    pub fn position(&self) -> Vec3 {
        let cos_elev = self.elevation.cos();
        Vec3::new(
            cos_elev * self.azimuth.sin(),
            self.elevation.sin(),
            cos_elev * self.azimuth.cos(),
        ) * self.distance
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), Vec3::ZERO, Vec3::Y)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, aspect, 0.01, 100.0)
    }

    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }

    /// Rotate by angle deltas (radians), clamping elevation away from the
    /// poles.
    pub fn rotate(&mut self, delta_azimuth: f32, delta_elevation: f32) {
        self.azimuth += delta_azimuth;
        self.elevation = (self.elevation + delta_elevation).clamp(ELEVATION_MIN, ELEVATION_MAX);
    }

    /// Zoom by multiplying the orbit distance by `factor`, clamped.
    pub fn zoom(&mut self, factor: f32) {
        self.distance = (self.distance * factor).clamp(DISTANCE_MIN, DISTANCE_MAX);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Apply mouse input from the plot area response.
    ///
    /// Left-drag rotates, scroll zooms, double-click resets.
    pub fn handle_input(&mut self, response: &egui::Response) {
        if response.dragged_by(egui::PointerButton::Primary) {
            let delta = response.drag_delta();
            self.rotate(delta.x * -0.005, delta.y * -0.005);
        }

        if response.hovered() {
            let scroll = response.ctx.input(|i| i.smooth_scroll_delta.y);
            if scroll.abs() > 0.0 {
                let factor = (1.0_f32 - scroll * 0.001).clamp(0.5, 2.0);
                self.zoom(factor);
            }
        }

        if response.double_clicked() {
            self.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_lies_on_orbit_sphere() {
        let camera = OrbitalCamera::default();
        let pos = camera.position();
        assert!((pos.length() - camera.distance).abs() < 1e-5);
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut camera = OrbitalCamera::default();
        camera.zoom(1e-6);
        assert_eq!(camera.distance, DISTANCE_MIN);
        camera.zoom(1e6);
        assert_eq!(camera.distance, DISTANCE_MAX);
    }

    #[test]
    fn test_rotate_clamps_elevation() {
        let mut camera = OrbitalCamera::default();
        camera.rotate(0.0, 10.0);
        assert!(camera.elevation <= ELEVATION_MAX);
        camera.rotate(0.0, -20.0);
        assert!(camera.elevation >= ELEVATION_MIN);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut camera = OrbitalCamera::default();
        camera.rotate(1.0, 0.3);
        camera.zoom(2.0);
        camera.reset();
        let default = OrbitalCamera::default();
        assert_eq!(camera.distance, default.distance);
        assert_eq!(camera.azimuth, default.azimuth);
        assert_eq!(camera.elevation, default.elevation);
    }
}
