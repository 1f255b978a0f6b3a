use std::time::Duration;

use crate::config::RendererConfig;
use crate::controllers::interactive::data::completed_frame::CompletedFrame;
use crate::controllers::interactive::data::pass_request::PassRequest;
use crate::controllers::interactive::engine::{EngineError, RenderEngine};
use crate::controllers::interactive::events::host_event::{HostEvent, KeyCode, ScrollDirection};
use crate::core::actions::render_pass::ports::display_surface::DisplaySurface;
use crate::core::data::view_state::ViewState;
use crate::core::fractals::kernel_selector::KernelSelector;
use crate::core::util::screen_to_fractal::screen_to_fractal;
use crate::core::view::animator::{AnimationStatus, TickReport, ViewAnimator};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionControl {
    Continue,
    Quit,
}

/// Snapshot for status overlays and logs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionStatus {
    pub kernel: KernelSelector,
    pub current: ViewState,
    pub target: ViewState,
    pub animation: AnimationStatus,
    pub rendering: bool,
    pub last_generation: Option<u64>,
    pub last_pass: Option<Duration>,
}

/// Routes host input to the view animator and ticks into render passes.
pub struct ExplorerSession<D: DisplaySurface + 'static> {
    engine: RenderEngine<D>,
    animator: ViewAnimator,
    kernel: KernelSelector,
    max_iterations: u32,
    width: u32,
    height: u32,
}

impl<D: DisplaySurface + 'static> ExplorerSession<D> {
    /// Validates `config`, builds the engine and starts the first pass.
    pub fn new(config: &RendererConfig, display: D) -> Result<Self, EngineError> {
        config.validate()?;

        let engine = RenderEngine::new(
            config.width,
            config.height,
            config.gradient(),
            config.max_workers,
            display,
        )?;

        let session = Self {
            engine,
            animator: ViewAnimator::new(config.initial_view, config.limits, config.animation),
            kernel: config.initial_kernel,
            max_iterations: config.max_iterations,
            width: config.width,
            height: config.height,
        };

        session.engine.trigger(session.pass_request())?;

        Ok(session)
    }

    #[must_use]
    pub fn pass_request(&self) -> PassRequest {
        PassRequest {
            view: self.animator.current(),
            kernel: self.kernel,
            max_iterations: self.max_iterations,
        }
    }

    pub fn handle_event(&mut self, event: HostEvent) -> Result<SessionControl, EngineError> {
        match event {
            HostEvent::Quit | HostEvent::KeyPress(KeyCode::Escape) => return Ok(SessionControl::Quit),
            HostEvent::PointerClick { x, y } => {
                let point = screen_to_fractal(x, y, self.width, self.height, self.animator.target());
                self.animator.recenter(point.real, point.imag);
            }
            HostEvent::Scroll(ScrollDirection::Up) => {
                self.animator.zoom_in();
            }
            HostEvent::Scroll(ScrollDirection::Down) => {
                self.animator.zoom_out();
            }
            HostEvent::KeyPress(KeyCode::R) => {
                if self.animator.reset() {
                    tracing::debug!("view reset requested");
                }
            }
            HostEvent::KeyPress(KeyCode::Digit(digit)) => {
                if let Some(kernel) = KernelSelector::from_digit(digit) {
                    self.select_kernel(kernel)?;
                }
            }
            HostEvent::KeyPress(KeyCode::Other) => {}
        }

        Ok(SessionControl::Continue)
    }

    /// Returns `false` when `kernel` was already active.
    pub fn select_kernel(&mut self, kernel: KernelSelector) -> Result<bool, EngineError> {
        if kernel == self.kernel {
            return Ok(false);
        }

        tracing::info!(from = %self.kernel, to = %kernel, "kernel switched");
        self.kernel = kernel;
        self.engine.trigger(self.pass_request())?;

        Ok(true)
    }

    /// Advances the animation by `dt` seconds, triggering a pass while it moves.
    pub fn tick(&mut self, dt: f64) -> Result<TickReport, EngineError> {
        let report = self.animator.tick(dt);

        if report.pass_requested {
            let trigger = self.engine.trigger(self.pass_request())?;

            if report.settled {
                let view = self.animator.current();
                tracing::info!(
                    zoom = view.zoom,
                    offset_x = view.offset_x,
                    offset_y = view.offset_y,
                    final_pass = ?trigger,
                    "view settled"
                );
            }
        }

        Ok(report)
    }

    pub fn present_if_fresh<F>(&self, present: F) -> bool
    where
        F: FnOnce(&CompletedFrame),
    {
        self.engine.frame_cache().present_if_fresh(present)
    }

    /// True once the view has settled and no pass is running.
    #[must_use]
    pub fn is_quiescent(&self) -> bool {
        self.animator.status() == AnimationStatus::Settled && !self.engine.is_rendering()
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        let latest = self.engine.frame_cache().latest();

        SessionStatus {
            kernel: self.kernel,
            current: self.animator.current(),
            target: self.animator.target(),
            animation: self.animator.status(),
            rendering: self.engine.is_rendering(),
            last_generation: latest.as_ref().map(|frame| frame.generation),
            last_pass: latest.as_ref().map(|frame| frame.duration),
        }
    }

    #[must_use]
    pub fn engine(&self) -> &RenderEngine<D> {
        &self.engine
    }

    #[must_use]
    pub fn kernel(&self) -> KernelSelector {
        self.kernel
    }

    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

impl SessionStatus {
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.animation == AnimationStatus::Settled
    }
}
