use parking_lot::Mutex;
use std::sync::Arc;
use thiserror::Error;
use winit::dpi::PhysicalSize;
use winit::error::{EventLoopError, OsError};
use winit::event::Event;
use winit::event_loop::{ControlFlow, EventLoopBuilder};
use winit::window::{Window, WindowBuilder};

use crate::config::RendererConfig;
use crate::controllers::interactive::engine::EngineError;
use crate::controllers::interactive::session::{ExplorerSession, SessionControl};
use crate::core::data::pixel_surface::SurfaceError;
use crate::input::gui::app::GuiApp;
use crate::input::gui::events::GuiEvent;
use crate::presenters::pixels::display::PixelsDisplay;
use crate::presenters::pixels::presenter::PixelsPresenter;
use crate::presenters::pixels::staging::StagingFrame;

pub const WINDOW_TITLE: &str = "Fractal Renderer";

#[derive(Debug, Error)]
pub enum HostError {
    #[error("cannot create event loop: {0}")]
    EventLoop(#[from] EventLoopError),
    #[error("cannot create window: {0}")]
    Window(#[from] OsError),
    #[error("cannot create pixels surface: {0}")]
    Pixels(#[from] pixels::Error),
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error("cannot draw frame: {0}")]
    Surface(#[from] SurfaceError),
}

/// Opens a fixed-size window and runs the explorer until it is closed.
pub fn run_gui(config: RendererConfig) -> Result<(), HostError> {
    config.validate().map_err(EngineError::from)?;

    let event_loop = EventLoopBuilder::<GuiEvent>::with_user_event().build()?;
    let event_loop_proxy = event_loop.create_proxy();

    // Leak the window to get a 'static reference for pixels
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title(WINDOW_TITLE)
            .with_inner_size(PhysicalSize::new(config.width, config.height))
            .with_resizable(false)
            .build(&event_loop)?,
    ));

    let staging = Arc::new(Mutex::new(StagingFrame::new(config.width, config.height)));
    let presenter = PixelsPresenter::new(window, config.width, config.height, Arc::clone(&staging))?;
    let session = ExplorerSession::new(&config, PixelsDisplay::new(staging, event_loop_proxy))?;

    tracing::info!(
        width = config.width,
        height = config.height,
        workers = session.engine().workers(),
        "window opened"
    );

    let mut app = GuiApp::new(window, &event_loop, session, presenter);
    let mut failure = None;

    event_loop.run(|event, elwt| {
        let outcome = match event {
            Event::UserEvent(GuiEvent::Wake) => {
                app.wake();
                Ok(SessionControl::Continue)
            }
            Event::WindowEvent { ref event, window_id } if window_id == window.id() => {
                app.handle_window_event(window, event)
            }
            Event::AboutToWait => app.about_to_wait(window).map(|busy| {
                elwt.set_control_flow(if busy { ControlFlow::Poll } else { ControlFlow::Wait });
                SessionControl::Continue
            }),
            _ => Ok(SessionControl::Continue),
        };

        match outcome {
            Ok(SessionControl::Continue) => {}
            Ok(SessionControl::Quit) => elwt.exit(),
            Err(err) => {
                tracing::error!("gui host failed: {err}");
                failure = Some(err);
                elwt.exit();
            }
        }
    })?;

    match failure {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
