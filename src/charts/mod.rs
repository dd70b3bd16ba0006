//! Charts module - chart construction and rendering

mod camera;
mod pv_chart;
mod scatter3d;

pub use camera::OrbitalCamera;
pub use pv_chart::PvChart;
pub use scatter3d::{era_color, EraScatter};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("series length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },
    #[error("no points to plot")]
    Empty,
}
