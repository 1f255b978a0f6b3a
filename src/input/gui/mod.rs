//! winit host: a fixed-size `pixels` window with an egui status overlay.

mod app;
pub mod events;
pub mod host_events;
mod overlay;
pub mod run_gui;

pub use run_gui::{HostError, run_gui};
