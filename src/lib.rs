//! physplot - CSV physics data viewers
//!
//! Two standalone viewers share this crate: `carnot` renders a P-V diagram
//! of a Carnot cycle and `plasma` renders a 3D scatter of plasma field
//! evolution data, both from fixed-path CSV files in the working directory.

pub mod charts;
pub mod data;
pub mod gui;
