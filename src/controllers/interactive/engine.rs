use parking_lot::Mutex;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;
use thiserror::Error;

use crate::config::ConfigError;
use crate::controllers::interactive::data::completed_frame::CompletedFrame;
use crate::controllers::interactive::data::pass_request::PassRequest;
use crate::controllers::interactive::frame_cache::FrameCache;
use crate::core::actions::render_pass::ports::display_surface::DisplaySurface;
use crate::core::actions::render_pass::render_job::RenderJob;
use crate::core::actions::render_pass::render_pass::run_render_pass;
use crate::core::actions::single_flight::{Admission, SingleFlight};
use crate::core::colour_mapping::gradient::ColourGradient;
use crate::core::data::pixel_surface::{PixelSurface, SurfaceError};
use crate::core::util::calculate_worker_count::{available_workers, calculate_worker_count};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("cannot allocate surface: {0}")]
    Surface(#[from] SurfaceError),
    #[error("cannot spawn render pass thread: {0}")]
    SpawnPassThread(#[source] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// A new pass thread was started for the request.
    Started,
    /// A pass was already running; the request is remembered as the latest trigger.
    Dropped,
}

struct EngineShared<D> {
    surface: Mutex<PixelSurface>,
    display: Mutex<D>,
    flight: SingleFlight<PassRequest>,
    cache: FrameCache,
    gradient: ColourGradient,
    workers: u32,
    generation: AtomicU64,
    completed: AtomicU64,
}

impl<D: DisplaySurface> EngineShared<D> {
    fn run_passes(&self, first: PassRequest) {
        let mut request = first;

        loop {
            self.run_pass(request);

            match self.flight.finish_or_next(&request) {
                Some(next) => {
                    tracing::trace!("latest dropped trigger differs from rendered view, running one more pass");
                    request = next;
                }
                None => return,
            }
        }
    }

    fn run_pass(&self, request: PassRequest) {
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        tracing::debug!(
            generation,
            kernel = %request.kernel,
            zoom = request.view.zoom,
            offset_x = request.view.offset_x,
            offset_y = request.view.offset_y,
            "render pass started"
        );

        let job = RenderJob {
            view: request.view,
            kernel: request.kernel,
            max_iterations: request.max_iterations,
            gradient: self.gradient,
            workers: self.workers,
        };

        let mut surface = self.surface.lock();

        match run_render_pass(&mut surface, &job, &self.display) {
            Ok(report) => {
                tracing::debug!(
                    generation,
                    workers = report.workers,
                    tiles = report.tiles,
                    elapsed_ms = report.duration.as_secs_f64() * 1000.0,
                    "render pass finished"
                );

                self.cache.store(CompletedFrame {
                    generation,
                    request,
                    surface: surface.clone(),
                    duration: report.duration,
                });
                self.completed.fetch_add(1, Ordering::AcqRel);
            }
            Err(err) => {
                tracing::error!(generation, "render pass failed: {err}");
            }
        }
    }
}

/// Owns the pixel surface and runs at most one render pass at a time.
///
/// `trigger` never blocks on a running pass. Passes run on a short-lived
/// `render-pass` thread that exits once no newer trigger is pending.
pub struct RenderEngine<D: DisplaySurface + 'static> {
    shared: Arc<EngineShared<D>>,
    pass_thread: Mutex<Option<JoinHandle<()>>>,
}

impl<D: DisplaySurface + 'static> RenderEngine<D> {
    pub fn new(
        width: u32,
        height: u32,
        gradient: ColourGradient,
        max_workers: Option<NonZeroU32>,
        display: D,
    ) -> Result<Self, EngineError> {
        let surface = PixelSurface::new(width, height)?;
        let workers = calculate_worker_count(max_workers.unwrap_or_else(available_workers), width);

        tracing::debug!(width, height, workers, "render engine created");

        Ok(Self {
            shared: Arc::new(EngineShared {
                surface: Mutex::new(surface),
                display: Mutex::new(display),
                flight: SingleFlight::new(),
                cache: FrameCache::new(),
                gradient,
                workers,
                generation: AtomicU64::new(0),
                completed: AtomicU64::new(0),
            }),
            pass_thread: Mutex::new(None),
        })
    }

    pub fn trigger(&self, request: PassRequest) -> Result<Trigger, EngineError> {
        let request = match self.shared.flight.begin_or_stash(request) {
            Admission::Begin(request) => request,
            Admission::Stashed => {
                tracing::trace!(zoom = request.view.zoom, "pass running, trigger dropped");
                return Ok(Trigger::Dropped);
            }
        };

        let mut pass_thread = self.pass_thread.lock();

        // The previous pass thread has already gone idle, so this join is brief
        if let Some(previous) = pass_thread.take() {
            let _ = previous.join();
        }

        let shared = Arc::clone(&self.shared);
        let spawned = thread::Builder::new()
            .name("render-pass".to_owned())
            .spawn(move || shared.run_passes(request));

        match spawned {
            Ok(handle) => {
                *pass_thread = Some(handle);
                Ok(Trigger::Started)
            }
            Err(err) => {
                self.shared.flight.abandon();
                Err(EngineError::SpawnPassThread(err))
            }
        }
    }

    #[must_use]
    pub fn is_rendering(&self) -> bool {
        self.shared.flight.is_computing()
    }

    pub fn wait_until_idle(&self) {
        self.shared.flight.wait_idle();
    }

    /// Returns `false` if a pass was still running when `timeout` elapsed.
    pub fn wait_until_idle_timeout(&self, timeout: Duration) -> bool {
        self.shared.flight.wait_idle_timeout(timeout)
    }

    #[must_use]
    pub fn frame_cache(&self) -> &FrameCache {
        &self.shared.cache
    }

    /// Runs `f` with the display under the publish lock.
    pub fn with_display<R>(&self, f: impl FnOnce(&mut D) -> R) -> R {
        f(&mut self.shared.display.lock())
    }

    #[must_use]
    pub fn workers(&self) -> u32 {
        self.shared.workers
    }

    #[must_use]
    pub fn passes_started(&self) -> u64 {
        self.shared.generation.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn passes_completed(&self) -> u64 {
        self.shared.completed.load(Ordering::Acquire)
    }
}

impl<D: DisplaySurface + 'static> Drop for RenderEngine<D> {
    fn drop(&mut self) {
        self.shared.flight.wait_idle();

        if let Some(handle) = self.pass_thread.get_mut().take() {
            let _ = handle.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::pixel_surface::TileView;
    use crate::core::data::view_state::ViewState;
    use crate::core::fractals::kernel_selector::KernelSelector;
    use parking_lot::Condvar;

    #[derive(Default)]
    struct Gate {
        open: Mutex<bool>,
        opened: Condvar,
    }

    impl Gate {
        fn open(&self) {
            *self.open.lock() = true;
            self.opened.notify_all();
        }

        fn wait(&self) {
            let mut open = self.open.lock();
            while !*open {
                self.opened.wait(&mut open);
            }
        }
    }

    /// Holds every blit until the gate opens.
    struct GatedDisplay {
        gate: Arc<Gate>,
        blits: u32,
        presents: u32,
    }

    impl DisplaySurface for GatedDisplay {
        fn blit(&mut self, _tile: TileView<'_>) {
            self.gate.wait();
            self.blits += 1;
        }

        fn present(&mut self) {
            self.presents += 1;
        }
    }

    fn engine(gate: &Arc<Gate>) -> RenderEngine<GatedDisplay> {
        RenderEngine::new(
            8,
            4,
            ColourGradient::default(),
            NonZeroU32::new(2),
            GatedDisplay {
                gate: Arc::clone(gate),
                blits: 0,
                presents: 0,
            },
        )
        .unwrap()
    }

    fn request(zoom: f64) -> PassRequest {
        PassRequest {
            view: ViewState::new(zoom, 0.0, 0.0),
            kernel: KernelSelector::Mandelbrot,
            max_iterations: 32,
        }
    }

    #[test]
    fn test_degenerate_surface_is_rejected() {
        let gate = Arc::new(Gate::default());
        let result = RenderEngine::new(
            0,
            4,
            ColourGradient::default(),
            None,
            GatedDisplay { gate, blits: 0, presents: 0 },
        );

        assert!(matches!(result, Err(EngineError::Surface(SurfaceError::Degenerate { .. }))));
    }

    #[test]
    fn test_single_trigger_renders_one_frame() {
        let gate = Arc::new(Gate::default());
        gate.open();
        let engine = engine(&gate);

        assert_eq!(engine.trigger(request(1.0)).unwrap(), Trigger::Started);
        engine.wait_until_idle();

        assert_eq!(engine.passes_completed(), 1);
        let frame = engine.frame_cache().take_fresh().unwrap();
        assert_eq!(frame.generation, 1);
        assert_eq!(frame.request, request(1.0));
        // 2 workers, each publishing a top and bottom half
        assert_eq!(engine.with_display(|d| (d.blits, d.presents)), (4, 4));
    }

    #[test]
    fn test_two_triggers_during_pass_run_exactly_one_more() {
        let gate = Arc::new(Gate::default());
        let engine = engine(&gate);

        assert_eq!(engine.trigger(request(1.0)).unwrap(), Trigger::Started);
        assert_eq!(engine.trigger(request(2.0)).unwrap(), Trigger::Dropped);
        assert_eq!(engine.trigger(request(3.0)).unwrap(), Trigger::Dropped);
        assert!(engine.is_rendering());

        gate.open();
        engine.wait_until_idle();

        assert_eq!(engine.passes_started(), 2);
        assert_eq!(engine.passes_completed(), 2);
        assert_eq!(engine.frame_cache().latest().unwrap().request, request(3.0));
    }

    #[test]
    fn test_trigger_matching_rendered_view_runs_no_extra_pass() {
        let gate = Arc::new(Gate::default());
        let engine = engine(&gate);

        engine.trigger(request(1.0)).unwrap();
        engine.trigger(request(1.0)).unwrap();

        gate.open();
        engine.wait_until_idle();

        assert_eq!(engine.passes_completed(), 1);
    }

    #[test]
    fn test_trigger_after_idle_starts_new_pass() {
        let gate = Arc::new(Gate::default());
        gate.open();
        let engine = engine(&gate);

        engine.trigger(request(1.0)).unwrap();
        engine.wait_until_idle();
        assert_eq!(engine.trigger(request(1.0)).unwrap(), Trigger::Started);
        engine.wait_until_idle();

        assert_eq!(engine.passes_completed(), 2);
        assert_eq!(engine.frame_cache().latest().unwrap().generation, 2);
    }

    #[test]
    fn test_wait_timeout_while_gated() {
        let gate = Arc::new(Gate::default());
        let engine = engine(&gate);

        engine.trigger(request(1.0)).unwrap();

        assert!(!engine.wait_until_idle_timeout(Duration::from_millis(20)));
        gate.open();
        assert!(engine.wait_until_idle_timeout(Duration::from_secs(10)));
    }

    #[test]
    fn test_drop_waits_for_in_flight_pass() {
        let gate = Arc::new(Gate::default());
        let engine = engine(&gate);
        engine.trigger(request(1.0)).unwrap();

        let opener = {
            let gate = Arc::clone(&gate);
            thread::spawn(move || {
                thread::sleep(Duration::from_millis(20));
                gate.open();
            })
        };

        drop(engine);
        opener.join().unwrap();
    }
}
