pub mod config;
pub mod controllers;
pub mod core;
#[cfg(feature = "gui")]
pub mod input;
pub mod presenters;

pub use config::{ConfigError, RendererConfig};
pub use controllers::interactive::{
    CompletedFrame, EngineError, ExplorerSession, HostEvent, KeyCode, PassRequest, RenderEngine, ScrollDirection,
    SessionControl, SessionStatus, Trigger,
};
pub use core::actions::render_pass::ports::display_surface::DisplaySurface;
pub use core::data::view_state::ViewState;
pub use core::fractals::kernel_selector::KernelSelector;
pub use presenters::headless::recording_display::{DisplayStats, RecordingDisplay};

#[cfg(feature = "gui")]
pub use input::gui::{HostError, run_gui};
