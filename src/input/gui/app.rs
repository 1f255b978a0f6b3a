use egui::Context;
use egui_winit::State as EguiWinitState;
use std::time::Instant;
use winit::event::WindowEvent;
use winit::event_loop::EventLoop;
use winit::window::Window;

use crate::controllers::interactive::session::{ExplorerSession, SessionControl};
use crate::input::gui::events::GuiEvent;
use crate::input::gui::host_events::HostEventTranslator;
use crate::input::gui::overlay::status_panel;
use crate::input::gui::run_gui::HostError;
use crate::presenters::pixels::display::PixelsDisplay;
use crate::presenters::pixels::presenter::PixelsPresenter;

pub struct GuiApp {
    session: ExplorerSession<PixelsDisplay>,
    presenter: PixelsPresenter,
    translator: HostEventTranslator,
    egui_ctx: Context,
    egui_state: EguiWinitState,
    last_tick: Instant,
    redraw_pending: bool,
}

impl GuiApp {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<GuiEvent>,
        session: ExplorerSession<PixelsDisplay>,
        presenter: PixelsPresenter,
    ) -> Self {
        let egui_ctx = Context::default();
        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(window.scale_factor() as f32),
            None, // max_texture_side, use default
        );

        Self {
            session,
            presenter,
            translator: HostEventTranslator::default(),
            egui_ctx,
            egui_state,
            last_tick: Instant::now(),
            redraw_pending: true,
        }
    }

    pub fn wake(&mut self) {
        self.redraw_pending = true;
    }

    pub fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) -> Result<SessionControl, HostError> {
        let response = self.egui_state.on_window_event(window, event);
        if response.repaint {
            self.redraw_pending = true;
        }

        match event {
            WindowEvent::RedrawRequested => {
                self.redraw(window)?;
                return Ok(SessionControl::Continue);
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                self.redraw_pending = true;
            }
            _ => {}
        }

        // Clicks and keys aimed at the overlay stay there
        if response.consumed && !matches!(event, WindowEvent::CloseRequested) {
            return Ok(SessionControl::Continue);
        }

        let presenter = &self.presenter;
        match self.translator.translate(event, |x, y| presenter.window_to_surface(x, y)) {
            Some(host_event) => Ok(self.session.handle_event(host_event)?),
            None => Ok(SessionControl::Continue),
        }
    }

    /// Ticks the animation. Returns `true` while the loop should keep polling.
    pub fn about_to_wait(&mut self, window: &Window) -> Result<bool, HostError> {
        let now = Instant::now();
        let dt = now.duration_since(self.last_tick).as_secs_f64();
        self.last_tick = now;

        self.session.tick(dt)?;

        let busy = !self.session.is_quiescent();
        if busy || self.redraw_pending {
            window.request_redraw();
        }

        Ok(busy)
    }

    fn redraw(&mut self, window: &Window) -> Result<(), HostError> {
        self.redraw_pending = false;

        // Staged tiles can be newer than the last completed frame, so they go on top
        let presenter = &mut self.presenter;
        let mut drawn = Ok(());
        self.session.present_if_fresh(|frame| drawn = presenter.draw_completed_frame(frame));
        drawn?;
        self.presenter.sync_staged_tiles();

        let status = self.session.status();
        let (width, height) = self.session.dimensions();
        let raw_input = self.egui_state.take_egui_input(window);
        let egui_output = self
            .egui_ctx
            .run(raw_input, |ctx| status_panel(ctx, &status, width, height));

        self.egui_state
            .handle_platform_output(window, egui_output.platform_output.clone());

        if egui_output
            .viewport_output
            .values()
            .any(|viewport| viewport.repaint_delay.is_zero())
        {
            self.redraw_pending = true;
        }

        self.presenter.render(egui_output, &self.egui_ctx)?;

        Ok(())
    }
}
