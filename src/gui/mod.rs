//! GUI module - viewer windows

mod carnot_app;
mod plasma_app;

pub use carnot_app::CarnotApp;
pub use plasma_app::PlasmaApp;
